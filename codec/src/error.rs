//! Error types for codec operations.

use std::fmt;

use bytestream::ByteError;
use schema::{EntityType, FieldCodec};
use wire::WireError;

use crate::types::{EntityId, Timecode};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding or encoding a replay.
///
/// None of these are recoverable mid-record; the replay as a whole is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Header, framing or limit error.
    Wire(WireError),

    /// Byte-level error: truncated input or a value too long for its slot.
    Bytes(ByteError),

    /// CREATE record or prefab template with an unrecognized type tag.
    UnknownEntityType {
        raw: u8,
        /// The record's entity, `None` for prefab templates.
        id: Option<EntityId>,
        timecode: Timecode,
    },

    /// UPDATE or DESTROY for an ID with no live registry entry.
    DanglingEntityReference { id: EntityId, timecode: Timecode },

    /// A prefab entity names a prefab that was never placed.
    UnknownPrefab {
        id: EntityId,
        /// `None` when the CREATE record carries no prefab name.
        name: Option<String>,
        timecode: Timecode,
    },

    /// Entity ID does not fit the 31-bit packed word.
    EntityIdOutOfRange { id: EntityId },

    /// An UPDATE carries a type that differs from the one registered at CREATE.
    EntityTypeMismatch {
        id: EntityId,
        registered: EntityType,
        found: EntityType,
    },

    /// Fields are set in a conditional mask byte whose condition is not met.
    MaskUnreachable { entity_type: EntityType, mask: usize },

    /// Some but not all fields sharing one mask bit are present.
    IncompleteBit {
        entity_type: EntityType,
        field: &'static str,
    },

    /// A field value does not match the field's codec.
    ValueMismatch {
        entity_type: EntityType,
        field: &'static str,
        expected: FieldCodec,
    },

    /// An unconditional field has no value.
    MissingField {
        entity_type: EntityType,
        field: &'static str,
    },

    /// No field of this name exists for the entity type.
    UnknownField {
        entity_type: EntityType,
        name: String,
    },
}

impl CodecError {
    /// Returns the byte offset for errors raised by a read.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Bytes(err) | Self::Wire(WireError::Bytes(err)) => err.offset(),
            _ => None,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Bytes(e) => write!(f, "byte stream error: {e}"),
            Self::UnknownEntityType { raw, id, timecode } => match id {
                Some(id) => write!(
                    f,
                    "unknown entity type {raw:#04x} for entity {id} at tick {timecode}"
                ),
                None => write!(
                    f,
                    "unknown entity type {raw:#04x} in prefab template at tick {timecode}"
                ),
            },
            Self::DanglingEntityReference { id, timecode } => {
                write!(f, "entity {id} is not live at tick {timecode}")
            }
            Self::UnknownPrefab { id, name, timecode } => match name {
                Some(name) => write!(
                    f,
                    "prefab entity {id} at tick {timecode} names unknown prefab '{name}'"
                ),
                None => write!(
                    f,
                    "prefab entity {id} at tick {timecode} was created without a prefab name"
                ),
            },
            Self::EntityIdOutOfRange { id } => {
                write!(f, "entity {id} does not fit in 31 bits")
            }
            Self::EntityTypeMismatch {
                id,
                registered,
                found,
            } => {
                write!(
                    f,
                    "entity {id} was created as {registered} but updated as {found}"
                )
            }
            Self::MaskUnreachable { entity_type, mask } => {
                write!(
                    f,
                    "{entity_type}: fields set in mask {mask}, which the primary mask omits"
                )
            }
            Self::IncompleteBit { entity_type, field } => {
                write!(
                    f,
                    "{entity_type}: field '{field}' shares a mask bit with a missing field"
                )
            }
            Self::ValueMismatch {
                entity_type,
                field,
                expected,
            } => {
                write!(f, "{entity_type}: field '{field}' expects {expected:?}")
            }
            Self::MissingField { entity_type, field } => {
                write!(f, "{entity_type}: required field '{field}' is missing")
            }
            Self::UnknownField { entity_type, name } => {
                write!(f, "{entity_type} has no field '{name}'")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Bytes(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WireError> for CodecError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::Bytes(err) => Self::Bytes(err),
            other => Self::Wire(other),
        }
    }
}

impl From<ByteError> for CodecError {
    fn from(err: ByteError) -> Self {
        Self::Bytes(err)
    }
}
