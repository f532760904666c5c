//! Schema validation errors.

use std::fmt;

use crate::EntityType;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when validating a field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields of one type share a name.
    DuplicateFieldName {
        entity_type: EntityType,
        name: &'static str,
    },

    /// A mask field's bit is zero, has more than one bit set, or is the
    /// CREATE bit of the first mask.
    InvalidBit {
        entity_type: EntityType,
        mask: usize,
        bit: u8,
    },

    /// Fields of a mask are not listed in ascending bit order.
    UnorderedBits {
        entity_type: EntityType,
        mask: usize,
        name: &'static str,
    },

    /// A bit-gated field outside a mask, or an unconditional field inside one.
    SlotMismatch {
        entity_type: EntityType,
        name: &'static str,
    },

    /// The first mask byte cannot be conditional.
    ConditionalPrimary { entity_type: EntityType },

    /// A template field has no fixed size.
    VariableTemplateField {
        entity_type: EntityType,
        name: &'static str,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldName { entity_type, name } => {
                write!(f, "{entity_type}: duplicate field name '{name}'")
            }
            Self::InvalidBit {
                entity_type,
                mask,
                bit,
            } => write!(f, "{entity_type}: invalid bit {bit:#04x} in mask {mask}"),
            Self::UnorderedBits {
                entity_type,
                mask,
                name,
            } => write!(f, "{entity_type}: field '{name}' out of bit order in mask {mask}"),
            Self::SlotMismatch { entity_type, name } => {
                write!(f, "{entity_type}: field '{name}' has the wrong slot kind")
            }
            Self::ConditionalPrimary { entity_type } => {
                write!(f, "{entity_type}: first mask byte cannot be conditional")
            }
            Self::VariableTemplateField { entity_type, name } => {
                write!(f, "{entity_type}: template field '{name}' has no fixed size")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
