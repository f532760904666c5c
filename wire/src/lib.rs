//! Replay header layout and chunk framing for the reflay replay codec.
//!
//! This crate handles the outer structure of a replay file: the fixed header
//! and the count-prefixed chunk sequences that carry records inside a tick.
//! It does not know what a record contains, only how records are grouped.
//!
//! # Design Principles
//!
//! - **One protocol version** - Version 89 is accepted; anything else is rejected up front.
//! - **Bounded decoding** - Every length read from the stream is checked against [`Limits`].
//! - **No domain knowledge** - This crate frames records, it does not interpret them.

mod chunk;
mod error;
mod header;
mod limits;

pub use chunk::{chunk_counts, read_chunked, write_chunked, CHUNK_CONTINUE, MAX_CHUNK_RECORDS};
pub use error::{HeaderReason, LimitKind, WireError, WireResult};
pub use header::{
    decode_header, encode_header, PlayerSlot, ReplayHeader, GAME_MODE_LEN, HEADER_SIZE,
    HOST_NAME_LEN, MAP_TITLE_LEN, PLAYER_NAME_LEN, PLAYER_SLOTS, PLAYER_SLOT_SIZE,
    PROTOCOL_VERSION,
};
pub use limits::Limits;
