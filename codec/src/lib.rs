//! Stateful record codec and replay encoding/decoding for reflay.
//!
//! This is the main codec crate that ties together bytestream, wire, and schema
//! to decode a replay file into owned values and encode it back.
//!
//! # Features
//!
//! - Entity delta records driven by the per-type mask tables
//! - Entity and prefab registries scoped to one [`Session`]
//! - Prefab placements with their entity templates, and brush geometry
//! - Whole-replay decode/encode with traversal and query helpers
//!
//! # Design Principles
//!
//! - **Correctness first** - Decoding a record never guesses; a missing registration is an error.
//! - **Lossless** - Unknown mask bits and opaque fields survive a round trip unchanged.
//! - **No hidden state** - Registries live in a session value, never in globals.

mod brush;
mod entity;
mod error;
mod prefab;
mod query;
mod registry;
mod replay;
mod session;
mod tick;
mod types;
mod value;

pub use brush::{Brush, BrushGeometry, Face, Material, PrefabBrush};
pub use entity::{EntityDelta, EntityRecord, EntityState, FieldSet};
pub use error::{CodecError, CodecResult};
pub use prefab::{EntityTemplate, PrefabPlacement, PREFAB_NAME_LEN};
pub use query::{player_tracks, prefab_registry, referenced_entity_ids, PlayerSample, PlayerTrack};
pub use registry::{EntityRegistry, PrefabRegistry};
pub use replay::{decode, encode, Replay};
pub use session::Session;
pub use tick::Tick;
pub use types::{EntityId, Timecode};
pub use value::{FieldValue, InputFlags};
pub use bytestream::Text;
pub use wire::Limits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = Timecode::new(0);
        let _ = EntityId::new(0);
        let _ = Limits::default();
        let _ = Session::default();
        let _ = Replay::default();
        let _ = FieldSet::new();
        let _ = InputFlags::FORWARD;
        let _: CodecResult<()> = Ok(());
    }
}
