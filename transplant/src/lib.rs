//! Transplant: splice one replay's initial world into another.
//!
//! The donor contributes the entities its own stream never touches again,
//! along with its first-tick prefab placements and brushes. The recipient
//! keeps the initial entities its later ticks refer to, at their original
//! IDs wherever possible, and every later tick of the recipient is
//! renumbered so the merged stream stays consistent.
//!
//! Work happens in two steps: [`TransplantPlan::build`] lays out the merged
//! ID space without touching any record, and [`TransplantPlan::apply`]
//! rewrites an owned copy of the recipient.

mod error;
mod merge;
mod plan;
mod rewrite;

pub use error::{TransplantError, TransplantResult};
pub use plan::{Placement, Side, TailAssignment, TransplantPlan};

use codec::{Limits, Replay};

/// Merges `donor`'s initial world state into `recipient`.
pub fn transplant(donor: &Replay, recipient: Replay) -> TransplantResult<Replay> {
    let plan = TransplantPlan::build(donor, &recipient)?;
    plan.apply(donor, recipient)
}

/// Decodes both replays, merges them and encodes the result.
pub fn transplant_bytes(
    donor: &[u8],
    recipient: &[u8],
    limits: &Limits,
) -> TransplantResult<Vec<u8>> {
    let donor = Replay::decode_with_limits(donor, limits)?;
    let recipient = Replay::decode_with_limits(recipient, limits)?;
    let merged = transplant(&donor, recipient)?;
    Ok(merged.encode()?)
}
