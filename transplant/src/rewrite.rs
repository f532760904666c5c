//! Entity ID rewriting over decoded records.

use std::collections::{HashMap, HashSet};

use codec::{Brush, EntityId, EntityRecord, FieldValue, PrefabRegistry, Tick, Timecode};
use schema::{EntityType, FieldRole};

use crate::error::{TransplantError, TransplantResult};
use crate::plan::Side;

/// Old-to-new ID mapping for one side of a merge.
///
/// IDs created in the first tick that the merge does not carry over are
/// remembered so a reference to them fails instead of silently aliasing a
/// different entity.
#[derive(Debug, Clone)]
pub(crate) struct IdMap {
    side: Side,
    assigned: HashMap<EntityId, EntityId>,
    dropped: HashSet<EntityId>,
}

impl IdMap {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            assigned: HashMap::new(),
            dropped: HashSet::new(),
        }
    }

    /// Maps `old` and the `span` IDs after it onto `new` and its successors.
    pub(crate) fn assign(&mut self, old: EntityId, new: EntityId, span: u32) {
        for offset in 0..=span {
            let from = old.offset(offset);
            self.assigned.insert(from, new.offset(offset));
            self.dropped.remove(&from);
        }
    }

    /// Marks every first-tick entity without an assignment as dropped.
    ///
    /// `prefabs` is the side's own first-tick registry, used to extend a
    /// dropped prefab over its sub-entities.
    pub(crate) fn drop_unassigned(&mut self, first: &Tick, prefabs: &PrefabRegistry) {
        for record in &first.entities {
            let Some(state) = record.state().filter(|_| record.is_create()) else {
                continue;
            };
            if self.assigned.contains_key(&record.id) {
                continue;
            }
            let span = match state.entity_type {
                EntityType::Prefab => state
                    .prefab_name()
                    .and_then(|name| prefabs.span(name))
                    .unwrap_or(0),
                _ => 0,
            };
            for offset in 0..=span {
                let id = record.id.offset(offset);
                if !self.assigned.contains_key(&id) {
                    self.dropped.insert(id);
                }
            }
        }
    }

    /// Resolves a reference held in `field` of a record at `timecode`.
    ///
    /// IDs the side never created in its first tick and never reassigned
    /// pass through unchanged.
    pub(crate) fn resolve(
        &self,
        id: EntityId,
        field: &'static str,
        timecode: Timecode,
    ) -> TransplantResult<EntityId> {
        if let Some(new) = self.assigned.get(&id) {
            return Ok(*new);
        }
        if self.dropped.contains(&id) {
            return Err(TransplantError::ReferenceGap {
                side: self.side,
                id,
                field,
                timecode,
            });
        }
        tracing::debug!(
            side = %self.side,
            %id,
            field,
            %timecode,
            "reference to an untracked entity left unchanged"
        );
        Ok(id)
    }
}

/// Rewrites a record's own ID and every ID-bearing field it carries.
pub(crate) fn rewrite_record(
    record: &mut EntityRecord,
    ids: &IdMap,
    timecode: Timecode,
) -> TransplantResult<()> {
    let old = record.id;
    let new = ids.resolve(old, "id", timecode)?;
    record.id = new;

    let Some(state) = record.state_mut() else {
        return Ok(());
    };
    let schema = state.schema();
    for (index, def) in schema.id_fields() {
        let Some(value) = state.fields.get_mut(index) else {
            continue;
        };
        let Some(raw) = value.as_u32() else {
            continue;
        };
        let rewritten = match def.role {
            FieldRole::EntityRef => ids.resolve(EntityId::new(raw), def.name, timecode)?.raw(),
            FieldRole::NextSubEntity if new != old => new.raw().wrapping_add(1),
            FieldRole::NextNormalEntity if new != old => {
                raw.wrapping_add(new.raw().wrapping_sub(old.raw()))
            }
            _ => continue,
        };
        if rewritten != raw {
            tracing::trace!(
                %timecode,
                entity = %new,
                field = def.name,
                raw,
                rewritten,
                "rewrote reference"
            );
        }
        *value = FieldValue::U32(rewritten);
    }
    Ok(())
}

/// Rewrites a brush's entity attachment.
pub(crate) fn rewrite_brush(
    brush: &mut Brush,
    ids: &IdMap,
    timecode: Timecode,
) -> TransplantResult<()> {
    brush.attached_entity = ids
        .resolve(brush.attached_to(), "attached_entity", timecode)?
        .raw();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::EntityState;

    fn at(timecode: u32) -> Timecode {
        Timecode::new(timecode)
    }

    fn ids(side: Side, pairs: &[(u32, u32)]) -> IdMap {
        let mut map = IdMap::new(side);
        for (old, new) in pairs {
            map.assign(EntityId::new(*old), EntityId::new(*new), 0);
        }
        map
    }

    #[test]
    fn spans_move_with_their_owner() {
        let mut map = IdMap::new(Side::Donor);
        map.assign(EntityId::new(4), EntityId::new(10), 2);
        for (old, new) in [(4, 10), (5, 11), (6, 12)] {
            assert_eq!(
                map.resolve(EntityId::new(old), "id", at(0)).unwrap(),
                EntityId::new(new)
            );
        }
        assert_eq!(
            map.resolve(EntityId::new(7), "id", at(0)).unwrap(),
            EntityId::new(7)
        );
    }

    #[test]
    fn dropped_ids_are_gaps_until_reassigned() {
        let mut first = Tick::new(at(0));
        first.entities = vec![
            EntityRecord::create(EntityId::new(1), EntityState::new(EntityType::Player)),
            EntityRecord::create(EntityId::new(2), EntityState::new(EntityType::PointLight)),
        ];
        let mut map = ids(Side::Recipient, &[(1, 1)]);
        map.drop_unassigned(&first, &PrefabRegistry::new());

        assert_eq!(
            map.resolve(EntityId::new(2), "sender_id", at(8)).unwrap_err(),
            TransplantError::ReferenceGap {
                side: Side::Recipient,
                id: EntityId::new(2),
                field: "sender_id",
                timecode: at(8),
            }
        );

        map.assign(EntityId::new(2), EntityId::new(6), 0);
        assert_eq!(
            map.resolve(EntityId::new(2), "sender_id", at(9)).unwrap(),
            EntityId::new(6)
        );
    }

    #[test]
    fn prefab_bookkeeping_follows_the_move() {
        let state = EntityState::new(EntityType::Prefab)
            .with("prefab_name", FieldValue::Text("lamp".into()))
            .unwrap()
            .with("next_sub_entity_id", FieldValue::U32(4))
            .unwrap()
            .with("next_normal_entity_id", FieldValue::U32(20))
            .unwrap();
        let mut record = EntityRecord::create(EntityId::new(3), state);
        let mut map = IdMap::new(Side::Donor);
        map.assign(EntityId::new(3), EntityId::new(1), 2);

        rewrite_record(&mut record, &map, at(0)).unwrap();
        let state = record.state().unwrap();
        assert_eq!(record.id, EntityId::new(1));
        assert_eq!(state.get("next_sub_entity_id"), Some(&FieldValue::U32(2)));
        assert_eq!(state.get("next_normal_entity_id"), Some(&FieldValue::U32(18)));
    }

    #[test]
    fn unmoved_prefab_keeps_bookkeeping() {
        let state = EntityState::new(EntityType::Prefab)
            .with("next_sub_entity_id", FieldValue::U32(99))
            .unwrap();
        let mut record = EntityRecord::update(EntityId::new(3), state.clone());
        rewrite_record(&mut record, &ids(Side::Recipient, &[(3, 3)]), at(16)).unwrap();
        assert_eq!(record.state(), Some(&state));
    }

    #[test]
    fn damage_rewrites_both_parties() {
        let state = EntityState::new(EntityType::Damage)
            .with("sender_id", FieldValue::U32(1))
            .unwrap()
            .with("receiver_id", FieldValue::U32(2))
            .unwrap();
        let mut record = EntityRecord::create(EntityId::new(8), state);
        let map = ids(Side::Recipient, &[(1, 5), (2, 6), (8, 9)]);

        rewrite_record(&mut record, &map, at(16)).unwrap();
        let state = record.state().unwrap();
        assert_eq!(record.id, EntityId::new(9));
        assert_eq!(state.get("sender_id"), Some(&FieldValue::U32(5)));
        assert_eq!(state.get("receiver_id"), Some(&FieldValue::U32(6)));
    }

    #[test]
    fn destroy_records_are_renumbered() {
        let mut record = EntityRecord::destroy(EntityId::new(8));
        rewrite_record(&mut record, &ids(Side::Recipient, &[(8, 40)]), at(32)).unwrap();
        assert_eq!(record, EntityRecord::destroy(EntityId::new(40)));
    }

    #[test]
    fn brush_attachment_is_rewritten() {
        let mut brush = Brush {
            attached_entity: 3,
            ..Brush::default()
        };
        rewrite_brush(&mut brush, &ids(Side::Donor, &[(3, 7)]), at(0)).unwrap();
        assert_eq!(brush.attached_entity, 7);
    }
}
