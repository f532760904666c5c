//! Field, mask and per-type schema definitions.

use crate::EntityType;

/// The stream encoding of one field (representation only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldCodec {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    Vec2,
    Vec3,
    ViewAngle,
    /// Four color bytes with alpha.
    Argb,
    /// Four color bytes with an unused pad byte.
    Xrgb,
    /// NUL-terminated text.
    CString,
    /// One byte, non-zero means set.
    Flag,
    /// Four bytes, the flag sits in the last one.
    Flag32,
    /// Player input button byte.
    Input,
    /// Raw bytes of unknown meaning.
    Opaque(usize),
    /// Fixed-size zero-padded text.
    Padded(usize),
    /// Zero-width: the bit is meaningful but consumes no data.
    Marker,
}

impl FieldCodec {
    /// Returns the encoded size in bytes, or `None` for variable-length text.
    #[must_use]
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Marker => Some(0),
            Self::U8 | Self::I8 | Self::Flag | Self::Input => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::U32
            | Self::I32
            | Self::F32
            | Self::ViewAngle
            | Self::Argb
            | Self::Xrgb
            | Self::Flag32 => Some(4),
            Self::Vec2 => Some(8),
            Self::Vec3 => Some(12),
            Self::Opaque(len) | Self::Padded(len) => Some(len),
            Self::CString => None,
        }
    }
}

/// How a field participates in entity-ID renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldRole {
    #[default]
    Plain,
    /// Holds the ID of another entity.
    EntityRef,
    /// Prefab bookkeeping: the ID after the instance's own.
    NextSubEntity,
    /// Prefab bookkeeping: the next ID free for ordinary entities.
    NextNormalEntity,
}

/// Where a field's presence comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Present when this bit of its mask byte is set.
    Bit(u8),
    /// Always present.
    Always,
}

/// Field definition within an entity schema or template layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub slot: Slot,
    pub codec: FieldCodec,
    pub role: FieldRole,
}

impl FieldDef {
    /// Sets the renumbering role.
    #[must_use]
    pub const fn role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }

    /// Returns the mask bit, if the field is bit-gated.
    #[must_use]
    pub const fn bit(&self) -> Option<u8> {
        match self.slot {
            Slot::Bit(bit) => Some(bit),
            Slot::Always => None,
        }
    }

    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self.codec, FieldCodec::Marker)
    }
}

/// A bit-gated field.
#[must_use]
pub const fn field(bit: u8, name: &'static str, codec: FieldCodec) -> FieldDef {
    FieldDef {
        name,
        slot: Slot::Bit(bit),
        codec,
        role: FieldRole::Plain,
    }
}

/// A bit-gated `u32` holding another entity's ID.
#[must_use]
pub const fn entity_ref(bit: u8, name: &'static str) -> FieldDef {
    field(bit, name, FieldCodec::U32).role(FieldRole::EntityRef)
}

/// A bit that is meaningful but carries no data.
#[must_use]
pub const fn marker(bit: u8, name: &'static str) -> FieldDef {
    field(bit, name, FieldCodec::Marker)
}

/// An unconditional field.
#[must_use]
pub const fn fixed(name: &'static str, codec: FieldCodec) -> FieldDef {
    FieldDef {
        name,
        slot: Slot::Always,
        codec,
        role: FieldRole::Plain,
    }
}

/// Whether a mask byte is on the wire at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPresence {
    Always,
    /// Present only when the primary mask has any of these bits set.
    IfPrimaryAny(u8),
}

impl MaskPresence {
    /// Returns `true` if the mask byte is read given the primary mask.
    #[must_use]
    pub const fn is_present(self, primary: u8) -> bool {
        match self {
            Self::Always => true,
            Self::IfPrimaryAny(bits) => primary & bits != 0,
        }
    }
}

/// One mask byte and the fields it gates, in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskDef {
    pub presence: MaskPresence,
    pub fields: &'static [FieldDef],
}

impl MaskDef {
    /// Returns the union of the bits that have a table entry.
    #[must_use]
    pub const fn assigned_bits(&self) -> u8 {
        let mut bits = 0u8;
        let mut i = 0;
        while i < self.fields.len() {
            if let Slot::Bit(bit) = self.fields[i].slot {
                bits |= bit;
            }
            i += 1;
        }
        bits
    }

    /// Number of flat field indices this mask occupies.
    #[must_use]
    pub fn field_count(&self) -> u16 {
        u16::try_from(self.fields.len()).unwrap_or(u16::MAX)
    }
}

/// The field table of one entity type.
///
/// Fields are addressed by a flat index: every mask's fields in order,
/// followed by the trailing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub entity_type: EntityType,
    pub masks: &'static [MaskDef],
    /// Unconditional fields after the last mask's fields.
    pub trailing: &'static [FieldDef],
}

impl EntitySchema {
    #[must_use]
    pub const fn mask_count(&self) -> usize {
        self.masks.len()
    }

    /// Returns the total number of addressable fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.masks.iter().map(|mask| mask.fields.len()).sum::<usize>() + self.trailing.len()
    }

    /// Iterates all fields with their flat index.
    pub fn fields(&self) -> impl Iterator<Item = (u16, &'static FieldDef)> + '_ {
        self.masks
            .iter()
            .flat_map(|mask| mask.fields.iter())
            .chain(self.trailing.iter())
            .zip(0u16..)
            .map(|(def, index)| (index, def))
    }

    /// Returns the field at a flat index.
    #[must_use]
    pub fn field(&self, index: u16) -> Option<&'static FieldDef> {
        self.fields()
            .find(|(candidate, _)| *candidate == index)
            .map(|(_, def)| def)
    }

    /// Returns the flat index of the field called `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.fields()
            .find(|(_, def)| def.name == name)
            .map(|(index, _)| index)
    }

    /// Returns the mask byte index that gates the field at `index`.
    ///
    /// Trailing fields return `None`.
    #[must_use]
    pub fn mask_of(&self, index: u16) -> Option<usize> {
        let mut start = 0usize;
        for (mask_index, mask) in self.masks.iter().enumerate() {
            let end = start + mask.fields.len();
            if usize::from(index) < end {
                return Some(mask_index);
            }
            start = end;
        }
        None
    }

    /// Iterates the fields that carry entity IDs.
    pub fn id_fields(&self) -> impl Iterator<Item = (u16, &'static FieldDef)> + '_ {
        self.fields().filter(|(_, def)| def.role != FieldRole::Plain)
    }
}
