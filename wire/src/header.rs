//! Replay header layout and constants.

use bytestream::{ByteReader, ByteWriter, Text};
use chrono::{DateTime, Utc};

use crate::error::{HeaderReason, WireError, WireResult};

/// The only protocol version this crate decodes.
pub const PROTOCOL_VERSION: u32 = 89;

/// Number of player slots stored in every header.
pub const PLAYER_SLOTS: usize = 16;

pub const GAME_MODE_LEN: usize = 64;
pub const MAP_TITLE_LEN: usize = 256;
pub const HOST_NAME_LEN: usize = 256;
pub const PLAYER_NAME_LEN: usize = 32;

/// Size of one player slot in bytes.
pub const PLAYER_SLOT_SIZE: usize = PLAYER_NAME_LEN + 4 + 4 + 8;

/// Header size in bytes (1384 total).
pub const HEADER_SIZE: usize = 4 // tag
    + 4 * 3 // protocol_version, player_count, marker_count
    + 8 * 3 // unknown, workshop_id, epoch_start_time
    + GAME_MODE_LEN
    + MAP_TITLE_LEN
    + HOST_NAME_LEN
    + PLAYER_SLOTS * PLAYER_SLOT_SIZE;

/// One entry of the header's player roster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerSlot {
    pub name: Text,
    pub score: i32,
    pub team: i32,
    /// Platform account identifier.
    pub steam_id: u64,
}

/// The fixed-layout preamble of a replay file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayHeader {
    /// Opaque leading tag, preserved verbatim.
    pub tag: [u8; 4],
    pub protocol_version: u32,
    pub player_count: u32,
    pub marker_count: u32,
    pub unknown: u64,
    /// External map identifier; zero when the map is embedded.
    pub workshop_id: u64,
    /// Recording start time in unix seconds.
    pub epoch_start_time: u64,
    pub game_mode: Text,
    pub map_title: Text,
    pub host_name: Text,
    pub players: [PlayerSlot; PLAYER_SLOTS],
}

impl Default for ReplayHeader {
    fn default() -> Self {
        Self {
            tag: [0; 4],
            protocol_version: PROTOCOL_VERSION,
            player_count: 0,
            marker_count: 0,
            unknown: 0,
            workshop_id: 0,
            epoch_start_time: 0,
            game_mode: Text::new(),
            map_title: Text::new(),
            host_name: Text::new(),
            players: Default::default(),
        }
    }
}

impl ReplayHeader {
    /// Returns the recording start time, if it is representable.
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.epoch_start_time).ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Returns the slots covered by `player_count`.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerSlot] {
        let count = usize::try_from(self.player_count)
            .unwrap_or(PLAYER_SLOTS)
            .min(PLAYER_SLOTS);
        &self.players[..count]
    }

    /// Returns `true` if the replay depends on an externally hosted map.
    #[must_use]
    pub const fn has_external_map(&self) -> bool {
        self.workshop_id != 0
    }
}

/// Decodes the header from the start of `reader`.
///
/// The protocol version is checked before anything past it is read.
pub fn decode_header(reader: &mut ByteReader<'_>) -> WireResult<ReplayHeader> {
    if reader.remaining() < HEADER_SIZE {
        return Err(WireError::MalformedHeader(HeaderReason::TooShort {
            actual: reader.remaining(),
            required: HEADER_SIZE,
        }));
    }

    let tag = reader.read_array::<4>()?;
    let protocol_version = reader.read_u32()?;
    if protocol_version != PROTOCOL_VERSION {
        return Err(WireError::MalformedHeader(
            HeaderReason::UnsupportedVersion {
                found: protocol_version,
                expected: PROTOCOL_VERSION,
            },
        ));
    }

    let player_count = reader.read_u32()?;
    let marker_count = reader.read_u32()?;
    let unknown = reader.read_u64()?;
    let workshop_id = reader.read_u64()?;
    let epoch_start_time = reader.read_u64()?;
    let game_mode = reader.read_padded_string(GAME_MODE_LEN)?;
    let map_title = reader.read_padded_string(MAP_TITLE_LEN)?;
    let host_name = reader.read_padded_string(HOST_NAME_LEN)?;

    let mut players: [PlayerSlot; PLAYER_SLOTS] = Default::default();
    for slot in &mut players {
        slot.name = reader.read_padded_string(PLAYER_NAME_LEN)?;
        slot.score = reader.read_i32()?;
        slot.team = reader.read_i32()?;
        slot.steam_id = reader.read_u64()?;
    }

    Ok(ReplayHeader {
        tag,
        protocol_version,
        player_count,
        marker_count,
        unknown,
        workshop_id,
        epoch_start_time,
        game_mode,
        map_title,
        host_name,
        players,
    })
}

/// Encodes `header` into `writer`.
///
/// Nothing is written if any string slot overflows.
pub fn encode_header(header: &ReplayHeader, writer: &mut ByteWriter) -> WireResult<()> {
    if header.protocol_version != PROTOCOL_VERSION {
        return Err(WireError::MalformedHeader(
            HeaderReason::UnsupportedVersion {
                found: header.protocol_version,
                expected: PROTOCOL_VERSION,
            },
        ));
    }

    let mut out = ByteWriter::with_capacity(HEADER_SIZE);
    out.write_bytes(&header.tag);
    out.write_u32(header.protocol_version);
    out.write_u32(header.player_count);
    out.write_u32(header.marker_count);
    out.write_u64(header.unknown);
    out.write_u64(header.workshop_id);
    out.write_u64(header.epoch_start_time);
    out.write_padded_string(&header.game_mode, GAME_MODE_LEN)?;
    out.write_padded_string(&header.map_title, MAP_TITLE_LEN)?;
    out.write_padded_string(&header.host_name, HOST_NAME_LEN)?;
    for slot in &header.players {
        out.write_padded_string(&slot.name, PLAYER_NAME_LEN)?;
        out.write_i32(slot.score);
        out.write_i32(slot.team);
        out.write_u64(slot.steam_id);
    }
    debug_assert_eq!(out.len(), HEADER_SIZE);
    writer.write_bytes(out.as_slice());
    Ok(())
}
