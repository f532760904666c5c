//! Core types for the codec.

use std::fmt;

/// A tick timecode as stored in the replay.
///
/// Timecodes are assumed to increase monotonically through a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timecode(u32);

impl Timecode {
    /// Creates a new timecode.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw timecode value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Timecode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Timecode> for u32 {
    fn from(timecode: Timecode) -> Self {
        timecode.0
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity identifier.
///
/// IDs are 31 bits wide on the wire; the low bit of the packed word is the
/// destroy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(u32);

impl EntityId {
    /// Largest ID that fits the packed record word.
    pub const MAX: u32 = (1 << 31) - 1;

    /// Creates a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw entity ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the ID `offset` places after this one.
    #[must_use]
    pub const fn offset(self, offset: u32) -> Self {
        Self(self.0.wrapping_add(offset))
    }

    /// Splits a packed record word into its ID and destroy flag.
    #[must_use]
    pub const fn unpack(word: u32) -> (Self, bool) {
        (Self(word >> 1), word & 1 == 1)
    }

    /// Packs the ID and destroy flag into a record word.
    ///
    /// Returns `None` if the ID does not fit in 31 bits.
    #[must_use]
    pub const fn pack(self, destroy: bool) -> Option<u32> {
        if self.0 > Self::MAX {
            return None;
        }
        Some((self.0 << 1) | destroy as u32)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
