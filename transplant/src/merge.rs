//! Assembling the merged replay from a plan.

use codec::{Replay, Tick};

use crate::error::{TransplantError, TransplantResult};
use crate::plan::{first_tick, registry_of, Side, TransplantPlan};
use crate::rewrite::{rewrite_brush, rewrite_record, IdMap};

impl TransplantPlan {
    /// Applies the plan, consuming the recipient.
    ///
    /// The merged first tick holds the placed entities in plan order, the
    /// donor's first-tick prefab placements and its brushes. Every later
    /// tick of the recipient is renumbered in place. The header's workshop
    /// ID is cleared so the merged geometry is used instead of the
    /// external map.
    pub fn apply(&self, donor: &Replay, mut recipient: Replay) -> TransplantResult<Replay> {
        let donor_first = first_tick(donor, Side::Donor)?;
        let recipient_first = first_tick(&recipient, Side::Recipient)?;

        let mut donor_ids = IdMap::new(Side::Donor);
        let mut recipient_ids = IdMap::new(Side::Recipient);
        for placement in &self.placements {
            let ids = match placement.side {
                Side::Donor => &mut donor_ids,
                Side::Recipient => &mut recipient_ids,
            };
            ids.assign(placement.old, placement.new, placement.span);
        }
        if let Some((world, merged)) = self.world_redirect {
            recipient_ids.assign(world, merged, 0);
        }
        donor_ids.drop_unassigned(donor_first, &registry_of(donor_first));
        recipient_ids.drop_unassigned(recipient_first, &registry_of(recipient_first));

        let timecode = recipient_first.timecode;
        let mut entities = Vec::with_capacity(self.placements.len());
        for placement in &self.placements {
            let (source, ids) = match placement.side {
                Side::Donor => (donor_first, &donor_ids),
                Side::Recipient => (recipient_first, &recipient_ids),
            };
            let Some(record) = source.entities.get(placement.record) else {
                return Err(TransplantError::PlanMismatch {
                    id: placement.old,
                    timecode: source.timecode,
                });
            };
            let mut record = record.clone();
            rewrite_record(&mut record, ids, timecode)?;
            entities.push(record);
        }
        let mut brushes = donor_first.brushes.clone();
        for brush in &mut brushes {
            rewrite_brush(brush, &donor_ids, donor_first.timecode)?;
        }
        let first = Tick {
            timecode,
            prefabs: donor_first.prefabs.clone(),
            entities,
            brushes,
        };

        let mut tail = self.tail.iter();
        for tick in recipient.ticks.iter_mut().skip(1) {
            let timecode = tick.timecode;
            for record in &mut tick.entities {
                if record.is_create() {
                    let assignment = tail
                        .next()
                        .filter(|entry| entry.old == record.id && entry.timecode == timecode)
                        .ok_or(TransplantError::PlanMismatch {
                            id: record.id,
                            timecode,
                        })?;
                    recipient_ids.assign(assignment.old, assignment.new, assignment.span);
                }
                rewrite_record(record, &recipient_ids, timecode)?;
            }
            for brush in &mut tick.brushes {
                rewrite_brush(brush, &recipient_ids, timecode)?;
            }
        }

        if let Some(slot) = recipient.ticks.first_mut() {
            *slot = first;
        }
        recipient.header.workshop_id = 0;
        tracing::debug!(
            ticks = recipient.ticks.len(),
            initial = self.placements.len(),
            renumbered = self.tail.len(),
            "merged replay"
        );
        Ok(recipient)
    }
}
