//! Fixed-size composite values shared by every layer of the format.

/// Two consecutive `f32` values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Three consecutive `f32` values (positions, angles, velocities).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A color with an alpha channel, stored as `b, g, r, a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorArgb {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl ColorArgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

/// A color without alpha, stored as `b, g, r, x`.
///
/// The trailing byte carries no meaning but is kept so that re-encoding
/// reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorXrgb {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub x: u8,
}

impl ColorXrgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, x: 0 }
    }
}

/// A packed view direction: unsigned yaw and signed pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewAngle {
    pub x: u16,
    pub y: i16,
}

impl ViewAngle {
    #[must_use]
    pub const fn new(x: u16, y: i16) -> Self {
        Self { x, y }
    }
}

/// A boolean stored in a four byte word.
///
/// The word is byte-swapped in the stream, so the flag lives in the last
/// byte and the first three bytes are padding. The padding is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flag32([u8; 4]);

impl Flag32 {
    /// Creates a flag word with zeroed padding.
    #[must_use]
    pub const fn new(set: bool) -> Self {
        Self([0, 0, 0, set as u8])
    }

    /// Wraps the raw stream bytes.
    #[must_use]
    pub const fn from_raw(raw: [u8; 4]) -> Self {
        Self(raw)
    }

    /// Returns the raw stream bytes.
    #[must_use]
    pub const fn raw(self) -> [u8; 4] {
        self.0
    }

    /// Returns `true` if the flag byte is non-zero.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0[3] != 0
    }
}

impl From<bool> for Flag32 {
    fn from(set: bool) -> Self {
        Self::new(set)
    }
}
