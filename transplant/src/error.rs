//! Error types for transplanting.

use std::fmt;

use codec::{CodecError, EntityId, Timecode};

use crate::plan::Side;

/// Result type for transplant operations.
pub type TransplantResult<T> = Result<T, TransplantError>;

/// Errors that can occur while merging two replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransplantError {
    /// Decoding an input or encoding the merge failed.
    Codec(CodecError),

    /// A replay has no ticks, so there is no initial world state to merge.
    MissingInitialTick { side: Side },

    /// A prefab entity's sub-entity span cannot be determined.
    UnknownPrefab {
        side: Side,
        id: EntityId,
        /// `None` when the record carries no prefab name.
        name: Option<String>,
        timecode: Timecode,
    },

    /// A surviving reference points at an initial entity the merge drops.
    ReferenceGap {
        side: Side,
        id: EntityId,
        field: &'static str,
        timecode: Timecode,
    },

    /// The merged stream needs more IDs than fit in 31 bits.
    IdSpaceExhausted { next: u64 },

    /// The plan has no assignment for a recipient entity created after the
    /// first tick.
    PlanMismatch { id: EntityId, timecode: Timecode },
}

impl fmt::Display for TransplantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "codec error: {e}"),
            Self::MissingInitialTick { side } => write!(f, "{side} replay has no ticks"),
            Self::UnknownPrefab {
                side,
                id,
                name,
                timecode,
            } => match name {
                Some(name) => write!(
                    f,
                    "{side} prefab entity {id} at tick {timecode} names prefab '{name}', \
                     which the merged first tick does not place"
                ),
                None => write!(
                    f,
                    "{side} prefab entity {id} at tick {timecode} has no prefab name"
                ),
            },
            Self::ReferenceGap {
                side,
                id,
                field,
                timecode,
            } => write!(
                f,
                "{side} field '{field}' at tick {timecode} refers to entity {id}, \
                 which the merge drops"
            ),
            Self::IdSpaceExhausted { next } => {
                write!(f, "merged replay needs entity ID {next}, beyond the 31-bit range")
            }
            Self::PlanMismatch { id, timecode } => write!(
                f,
                "plan has no assignment for recipient entity {id} created at tick {timecode}"
            ),
        }
    }
}

impl std::error::Error for TransplantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for TransplantError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn gap_names_side_and_field() {
        let err = TransplantError::ReferenceGap {
            side: Side::Recipient,
            id: EntityId::new(2),
            field: "spawned_by_entity_id",
            timecode: Timecode::new(16),
        };
        let message = err.to_string();
        assert!(message.contains("recipient"));
        assert!(message.contains("spawned_by_entity_id"));
        assert!(message.contains("#2"));
        assert!(err.source().is_none());
    }

    #[test]
    fn codec_errors_keep_source() {
        let err = TransplantError::from(CodecError::DanglingEntityReference {
            id: EntityId::new(9),
            timecode: Timecode::new(3),
        });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("codec error"));
    }
}
