//! Per-replay codec state.

use schema::EntityType;
use wire::Limits;

use crate::entity::EntityState;
use crate::error::{CodecError, CodecResult};
use crate::prefab::PrefabPlacement;
use crate::registry::{EntityRegistry, PrefabRegistry};
use crate::types::{EntityId, Timecode};

/// Registries and limits for one decode or encode pass.
///
/// A session starts empty and must not be shared between unrelated replays;
/// stale registrations would resolve later records to the wrong type.
#[derive(Debug, Clone, Default)]
pub struct Session {
    limits: Limits,
    pub(crate) entities: EntityRegistry,
    pub(crate) prefabs: PrefabRegistry,
}

impl Session {
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            entities: EntityRegistry::new(),
            prefabs: PrefabRegistry::new(),
        }
    }

    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    #[must_use]
    pub fn prefabs(&self) -> &PrefabRegistry {
        &self.prefabs
    }

    /// Clears both registries, keeping the limits.
    pub fn reset(&mut self) {
        self.entities.clear();
        self.prefabs.clear();
    }

    /// Records a prefab placement under its name.
    pub(crate) fn observe_prefab(&mut self, placement: &PrefabPlacement) {
        let sub_entities = placement.sub_entity_types().collect();
        if self.prefabs.register(placement.name.clone(), sub_entities).is_some() {
            tracing::trace!(name = %placement.name, "prefab re-registered");
        }
    }

    /// Registers a created entity, expanding prefab instances over their span.
    pub(crate) fn observe_create(
        &mut self,
        id: EntityId,
        state: &EntityState,
        timecode: Timecode,
    ) -> CodecResult<()> {
        self.entities.create(id, state.entity_type);
        if state.entity_type != EntityType::Prefab {
            return Ok(());
        }
        let name = state.prefab_name().ok_or(CodecError::UnknownPrefab {
            id,
            name: None,
            timecode,
        })?;
        let sub_entities = self
            .prefabs
            .get(name)
            .ok_or_else(|| CodecError::UnknownPrefab {
                id,
                name: Some(name.to_string()),
                timecode,
            })?;
        self.entities.create_span(id, sub_entities);
        Ok(())
    }

    pub(crate) fn observe_destroy(&mut self, id: EntityId, timecode: Timecode) -> CodecResult<()> {
        self.entities.destroy(id, timecode).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    fn prefab_entity(name: &str) -> EntityState {
        EntityState::new(EntityType::Prefab)
            .with("prefab_name", FieldValue::Text(name.into()))
            .unwrap()
    }

    #[test]
    fn prefab_create_registers_span() {
        let mut session = Session::default();
        session.prefabs.register(
            "door",
            vec![EntityType::PointLight, EntityType::TriggerVolume],
        );
        session
            .observe_create(EntityId::new(10), &prefab_entity("door"), Timecode::new(0))
            .unwrap();
        assert_eq!(session.entities().get(EntityId::new(10)), Some(EntityType::Prefab));
        assert_eq!(session.entities().get(EntityId::new(11)), Some(EntityType::PointLight));
        assert_eq!(session.entities().get(EntityId::new(12)), Some(EntityType::TriggerVolume));
        assert_eq!(session.entities().len(), 3);
    }

    #[test]
    fn unregistered_prefab_name() {
        let mut session = Session::default();
        let err = session
            .observe_create(EntityId::new(3), &prefab_entity("lift"), Timecode::new(5))
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownPrefab {
                id: EntityId::new(3),
                name: Some("lift".to_owned()),
                timecode: Timecode::new(5),
            }
        );
    }

    #[test]
    fn prefab_without_name() {
        let mut session = Session::default();
        let err = session
            .observe_create(
                EntityId::new(3),
                &EntityState::new(EntityType::Prefab),
                Timecode::new(0),
            )
            .unwrap_err();
        assert!(matches!(err, CodecError::UnknownPrefab { name: None, .. }));
    }

    #[test]
    fn reset_keeps_limits() {
        let mut session = Session::new(Limits::for_testing());
        session.entities.create(EntityId::new(1), EntityType::Player);
        session.prefabs.register("a", vec![]);
        session.reset();
        assert!(session.entities().is_empty());
        assert!(session.prefabs().is_empty());
        assert_eq!(session.limits(), &Limits::for_testing());
    }
}
