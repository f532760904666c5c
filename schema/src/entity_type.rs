//! Entity type tags.

use std::fmt;

/// Number of known entity types.
pub const ENTITY_TYPE_COUNT: usize = 33;

/// The type tag carried by an entity CREATE record.
///
/// Discriminants are the raw tag values used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EntityType {
    /// Map-wide settings: sky, fog, team colors, allowed modes.
    WorldSpawn = 0x00,
    PlayerSpawn = 0x01,
    Player = 0x02,
    PointLight = 0x03,
    ProjectileGrenade = 0x04,
    ProjectileRocket = 0x05,
    ProjectilePlasma = 0x06,
    ProjectileBurstgun = 0x07,
    ProjectileStake = 0x08,
    Teleporter = 0x09,
    Target = 0x0A,
    JumpPad = 0x0B,
    Effect = 0x0C,
    Pickup = 0x0D,
    ChatMessage = 0x0E,
    CameraPath = 0x0F,
    Vote = 0x10,
    Damage = 0x11,
    RaceStart = 0x12,
    RaceFinish = 0x13,
    WeaponRestrictor = 0x14,
    /// A placed prefab instance; owns the IDs directly after its own.
    Prefab = 0x15,
    VolumeSelect = 0x16,
    WorkshopScreenshot = 0x17,
    ReflectionProbe = 0x18,
    TriggerVolume = 0x19,
    Message = 0x1A,
    Goal = 0x1B,
    Turret = 0x1C,
    Shootable = 0x1D,
    Accumulator = 0x1E,
    Exit = 0x1F,
    NavLink = 0x20,
}

impl EntityType {
    /// All entity types in tag order.
    pub const ALL: [Self; ENTITY_TYPE_COUNT] = [
        Self::WorldSpawn,
        Self::PlayerSpawn,
        Self::Player,
        Self::PointLight,
        Self::ProjectileGrenade,
        Self::ProjectileRocket,
        Self::ProjectilePlasma,
        Self::ProjectileBurstgun,
        Self::ProjectileStake,
        Self::Teleporter,
        Self::Target,
        Self::JumpPad,
        Self::Effect,
        Self::Pickup,
        Self::ChatMessage,
        Self::CameraPath,
        Self::Vote,
        Self::Damage,
        Self::RaceStart,
        Self::RaceFinish,
        Self::WeaponRestrictor,
        Self::Prefab,
        Self::VolumeSelect,
        Self::WorkshopScreenshot,
        Self::ReflectionProbe,
        Self::TriggerVolume,
        Self::Message,
        Self::Goal,
        Self::Turret,
        Self::Shootable,
        Self::Accumulator,
        Self::Exit,
        Self::NavLink,
    ];

    /// Returns the entity type for a raw tag, if it is known.
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Returns the raw wire tag.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Returns a human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorldSpawn => "WorldSpawn",
            Self::PlayerSpawn => "PlayerSpawn",
            Self::Player => "Player",
            Self::PointLight => "PointLight",
            Self::ProjectileGrenade => "Projectile (Grenade)",
            Self::ProjectileRocket => "Projectile (Rocket)",
            Self::ProjectilePlasma => "Projectile (Plasma)",
            Self::ProjectileBurstgun => "Projectile (Burstgun)",
            Self::ProjectileStake => "Projectile (Stake)",
            Self::Teleporter => "Teleporter",
            Self::Target => "Target",
            Self::JumpPad => "JumpPad",
            Self::Effect => "Effect",
            Self::Pickup => "Pickup",
            Self::ChatMessage => "ChatMessage",
            Self::CameraPath => "CameraPath",
            Self::Vote => "Vote",
            Self::Damage => "Damage",
            Self::RaceStart => "RaceStart",
            Self::RaceFinish => "RaceFinish",
            Self::WeaponRestrictor => "WeaponRestrictor",
            Self::Prefab => "Prefab",
            Self::VolumeSelect => "VolumeSelect",
            Self::WorkshopScreenshot => "WorkshopScreenshot",
            Self::ReflectionProbe => "ReflectionProbe",
            Self::TriggerVolume => "TriggerVolume",
            Self::Message => "Message",
            Self::Goal => "Goal",
            Self::Turret => "Turret",
            Self::Shootable => "Shootable",
            Self::Accumulator => "Accumulator",
            Self::Exit => "Exit",
            Self::NavLink => "NavLink",
        }
    }

    /// Returns `true` for the five projectile kinds.
    #[must_use]
    pub const fn is_projectile(self) -> bool {
        matches!(
            self,
            Self::ProjectileGrenade
                | Self::ProjectileRocket
                | Self::ProjectilePlasma
                | Self::ProjectileBurstgun
                | Self::ProjectileStake
        )
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for EntityType {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}
