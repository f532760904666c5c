//! Error types for wire format operations.

use std::fmt;

use bytestream::ByteError;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while framing a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// The fixed header could not be accepted.
    MalformedHeader(HeaderReason),

    /// A primitive read or write failed.
    Bytes(ByteError),

    /// A length read from the stream exceeds the configured limits.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Why a header was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderReason {
    /// Buffer is too small to contain the fixed header.
    TooShort { actual: usize, required: usize },
    /// The protocol version is not the one this crate speaks.
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Ticks,
    ChunksPerSequence,
    PrefabTemplates,
    TemplateBrushes,
    StringLength,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader(reason) => write!(f, "malformed header: {reason}"),
            Self::Bytes(err) => write!(f, "{err}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for HeaderReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { actual, required } => {
                write!(f, "{actual} bytes, need at least {required}")
            }
            Self::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "unsupported protocol version {found} (expected {expected})"
                )
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ticks => "tick count",
            Self::ChunksPerSequence => "chunks per sequence",
            Self::PrefabTemplates => "prefab template count",
            Self::TemplateBrushes => "template brush count",
            Self::StringLength => "string length",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bytes(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ByteError> for WireError {
    fn from(err: ByteError) -> Self {
        Self::Bytes(err)
    }
}
