//! Placement of initial entities in the merged ID space.

use std::collections::VecDeque;
use std::fmt;

use codec::{
    referenced_entity_ids, EntityId, EntityRecord, PrefabRegistry, Replay, Tick, Timecode,
};
use indexmap::{IndexMap, IndexSet};
use schema::EntityType;

use crate::error::{TransplantError, TransplantResult};

/// Which input replay a record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Donor,
    Recipient,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Donor => f.write_str("donor"),
            Self::Recipient => f.write_str("recipient"),
        }
    }
}

/// One entity placed in the merged first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub side: Side,
    /// Index of the CREATE record within its replay's first tick.
    pub record: usize,
    pub entity_type: EntityType,
    pub old: EntityId,
    pub new: EntityId,
    /// IDs the entity occupies after its own (prefab sub-entities).
    pub span: u32,
}

impl Placement {
    #[must_use]
    pub fn moved(&self) -> bool {
        self.old != self.new
    }
}

/// A recipient entity created after the first tick, moved past the merged
/// initial block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailAssignment {
    pub timecode: Timecode,
    pub old: EntityId,
    pub new: EntityId,
    pub span: u32,
}

/// The complete ID layout of a merge, computed before any record is touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransplantPlan {
    /// Merged first-tick entities in output order.
    pub placements: Vec<Placement>,
    /// Recipient creates after the first tick, in stream order.
    pub tail: Vec<TailAssignment>,
    pub recipient_referenced: IndexSet<EntityId>,
    pub donor_referenced: IndexSet<EntityId>,
    /// The recipient's world settings entity and the ID its references move to.
    pub world_redirect: Option<(EntityId, EntityId)>,
    /// First ID not assigned by the plan.
    pub next_id: u32,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    record: usize,
    entity_type: EntityType,
    id: EntityId,
    span: u32,
}

impl TransplantPlan {
    /// Lays out the merged ID space for `donor` and `recipient`.
    ///
    /// Recipient entities referenced later in their own stream keep their
    /// IDs when nothing else claims the slot first. Donor entities never
    /// touched again fill the gaps in order. Remaining kept recipient
    /// entities follow, then every recipient entity created after the first
    /// tick.
    pub fn build(donor: &Replay, recipient: &Replay) -> TransplantResult<Self> {
        let donor_first = first_tick(donor, Side::Donor)?;
        let recipient_first = first_tick(recipient, Side::Recipient)?;
        let donor_referenced = referenced_entity_ids(donor);
        let recipient_referenced = referenced_entity_ids(recipient);

        // Spans as the encoder of the merged stream will register them.
        let mut prefabs = registry_of(donor_first);

        let mut kept: IndexMap<EntityId, Candidate> = IndexMap::new();
        for (record, entry) in recipient_first.entities.iter().enumerate() {
            let Some(entity_type) = created_type(entry) else {
                continue;
            };
            if entity_type == EntityType::WorldSpawn || !recipient_referenced.contains(&entry.id) {
                continue;
            }
            let span = span_of(entry, &prefabs, Side::Recipient, recipient_first.timecode)?;
            kept.insert(entry.id, Candidate {
                record,
                entity_type,
                id: entry.id,
                span,
            });
        }

        let mut donated: IndexMap<EntityId, Candidate> = IndexMap::new();
        for (record, entry) in donor_first.entities.iter().enumerate() {
            let Some(entity_type) = created_type(entry) else {
                continue;
            };
            if donor_referenced.contains(&entry.id) {
                continue;
            }
            let span = span_of(entry, &prefabs, Side::Donor, donor_first.timecode)?;
            donated.insert(entry.id, Candidate {
                record,
                entity_type,
                id: entry.id,
                span,
            });
        }
        let mut donated: VecDeque<Candidate> = donated.into_values().collect();

        let mut placements = Vec::with_capacity(kept.len() + donated.len());
        let mut cursor = 0u32;
        loop {
            let slot = EntityId::new(cursor);
            let (side, candidate) = if let Some(candidate) = kept.shift_remove(&slot) {
                (Side::Recipient, candidate)
            } else if let Some(candidate) = donated.pop_front() {
                (Side::Donor, candidate)
            } else if let Some((_, candidate)) = kept.shift_remove_index(0) {
                (Side::Recipient, candidate)
            } else {
                break;
            };
            let placement = Placement {
                side,
                record: candidate.record,
                entity_type: candidate.entity_type,
                old: candidate.id,
                new: slot,
                span: candidate.span,
            };
            tracing::trace!(
                %side,
                old = %placement.old,
                new = %placement.new,
                span = placement.span,
                "placed initial entity"
            );
            placements.push(placement);
            cursor = advance(cursor, candidate.span)?;
        }

        let mut tail = Vec::new();
        for tick in recipient.ticks.iter().skip(1) {
            for placement in &tick.prefabs {
                prefabs.register(placement.name.clone(), placement.sub_entity_types().collect());
            }
            for entry in &tick.entities {
                if !entry.is_create() {
                    continue;
                }
                let span = span_of(entry, &prefabs, Side::Recipient, tick.timecode)?;
                tail.push(TailAssignment {
                    timecode: tick.timecode,
                    old: entry.id,
                    new: EntityId::new(cursor),
                    span,
                });
                cursor = advance(cursor, span)?;
            }
        }

        let recipient_world = recipient_first
            .entities
            .iter()
            .find(|entry| created_type(entry) == Some(EntityType::WorldSpawn))
            .map(|entry| entry.id);
        let donor_world = placements
            .iter()
            .find(|placement| {
                placement.side == Side::Donor && placement.entity_type == EntityType::WorldSpawn
            })
            .map(|placement| placement.new);
        let world_redirect = recipient_world.zip(donor_world);

        let plan = Self {
            placements,
            tail,
            recipient_referenced,
            donor_referenced,
            world_redirect,
            next_id: cursor,
        };
        tracing::debug!(
            placed = plan.placements.len(),
            donated = plan.placed(Side::Donor).count(),
            kept = plan.placed(Side::Recipient).count(),
            tail = plan.tail.len(),
            next_id = plan.next_id,
            "planned transplant"
        );
        Ok(plan)
    }

    /// Iterates the placements taken from one side.
    pub fn placed(&self, side: Side) -> impl Iterator<Item = &Placement> + '_ {
        self.placements
            .iter()
            .filter(move |placement| placement.side == side)
    }

    /// Returns the first-tick entities of one side whose ID changed.
    #[must_use]
    pub fn reassignments(&self, side: Side) -> IndexMap<EntityId, EntityId> {
        self.placed(side)
            .filter(|placement| placement.moved())
            .map(|placement| (placement.old, placement.new))
            .collect()
    }
}

pub(crate) fn first_tick(replay: &Replay, side: Side) -> TransplantResult<&Tick> {
    replay
        .ticks
        .first()
        .ok_or(TransplantError::MissingInitialTick { side })
}

pub(crate) fn created_type(record: &EntityRecord) -> Option<EntityType> {
    if record.is_create() {
        record.entity_type()
    } else {
        None
    }
}

pub(crate) fn registry_of(tick: &Tick) -> PrefabRegistry {
    let mut registry = PrefabRegistry::new();
    for placement in &tick.prefabs {
        registry.register(placement.name.clone(), placement.sub_entity_types().collect());
    }
    registry
}

fn span_of(
    record: &EntityRecord,
    prefabs: &PrefabRegistry,
    side: Side,
    timecode: Timecode,
) -> TransplantResult<u32> {
    let Some(state) = record.state() else {
        return Ok(0);
    };
    if state.entity_type != EntityType::Prefab {
        return Ok(0);
    }
    let name = state.prefab_name();
    name.and_then(|name| prefabs.span(name))
        .ok_or_else(|| TransplantError::UnknownPrefab {
            side,
            id: record.id,
            name: name.map(ToString::to_string),
            timecode,
        })
}

/// Moves the cursor past an entity and its span.
fn advance(cursor: u32, span: u32) -> TransplantResult<u32> {
    let next = u64::from(cursor) + u64::from(span) + 1;
    if next > u64::from(EntityId::MAX) + 1 {
        return Err(TransplantError::IdSpaceExhausted { next });
    }
    u32::try_from(next).map_err(|_| TransplantError::IdSpaceExhausted { next })
}
