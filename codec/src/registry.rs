//! Entity and prefab registries.
//!
//! Both registries are plain owned values. A [`Session`](crate::Session) owns
//! one of each for the duration of a single decode or encode pass.

use std::collections::HashMap;

use bytestream::Text;
use indexmap::IndexMap;
use schema::EntityType;

use crate::error::{CodecError, CodecResult};
use crate::types::{EntityId, Timecode};

/// Live entity IDs and the type each was created with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    live: HashMap<EntityId, EntityType>,
}

impl EntityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` as `entity_type`, returning any stale mapping it replaces.
    pub fn create(&mut self, id: EntityId, entity_type: EntityType) -> Option<EntityType> {
        let previous = self.live.insert(id, entity_type);
        if let Some(previous) = previous {
            tracing::trace!(%id, %previous, %entity_type, "entity re-created without destroy");
        }
        previous
    }

    /// Returns the type of a live entity.
    pub fn resolve(&self, id: EntityId, timecode: Timecode) -> CodecResult<EntityType> {
        self.live
            .get(&id)
            .copied()
            .ok_or(CodecError::DanglingEntityReference { id, timecode })
    }

    /// Removes a live entity, returning the type it had.
    pub fn destroy(&mut self, id: EntityId, timecode: Timecode) -> CodecResult<EntityType> {
        self.live
            .remove(&id)
            .ok_or(CodecError::DanglingEntityReference { id, timecode })
    }

    /// Registers the sub-entities of a prefab instance at `id + 1 ..= id + N`.
    pub fn create_span(&mut self, id: EntityId, sub_entities: &[EntityType]) {
        for (offset, entity_type) in (1u32..).zip(sub_entities) {
            self.create(id.offset(offset), *entity_type);
        }
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<EntityType> {
        self.live.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.live.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}

/// Prefab names and the sub-entity types an instance expands to.
///
/// Re-registering a name replaces its template list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefabRegistry {
    prefabs: IndexMap<Text, Vec<EntityType>>,
}

impl PrefabRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, returning the template list it replaces.
    pub fn register(
        &mut self,
        name: impl Into<Text>,
        sub_entities: Vec<EntityType>,
    ) -> Option<Vec<EntityType>> {
        self.prefabs.insert(name.into(), sub_entities)
    }

    /// Returns the sub-entity types of `name`.
    #[must_use]
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&[EntityType]> {
        self.prefabs.get(name.as_ref()).map(Vec::as_slice)
    }

    /// Returns the number of IDs an instance of `name` occupies after its own.
    #[must_use]
    pub fn span(&self, name: impl AsRef<[u8]>) -> Option<u32> {
        self.get(name)
            .map(|sub_entities| u32::try_from(sub_entities.len()).unwrap_or(u32::MAX))
    }

    /// Iterates registered names in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &Text> + '_ {
        self.prefabs.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }

    pub fn clear(&mut self) {
        self.prefabs.clear();
    }
}
