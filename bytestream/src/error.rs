//! Error types for byte stream operations.

use std::fmt;

/// Result type for byte stream operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur during byte-level encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Byte offset at which the read started.
        offset: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A value does not fit into its fixed-size slot.
    LengthExceeded {
        /// Maximum length the slot allows.
        max: usize,
        /// Length of the value that was offered.
        actual: usize,
    },

    /// A NUL-terminated string was not terminated within the allowed length.
    UnterminatedString {
        /// Byte offset at which the string started.
        offset: usize,
        /// Maximum number of bytes scanned for the terminator.
        max: usize,
    },

    /// A string destined for a NUL-terminated slot contains a NUL byte.
    InteriorNul {
        /// Position of the NUL byte within the string.
        position: usize,
    },
}

impl ByteError {
    /// Returns the stream offset the error refers to, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEof { offset, .. } | Self::UnterminatedString { offset, .. } => {
                Some(*offset)
            }
            Self::LengthExceeded { .. } | Self::InteriorNul { .. } => None,
        }
    }
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                offset,
                requested,
                available,
            } => {
                write!(
                    f,
                    "unexpected end of input at offset {offset}: needed {requested} bytes but only {available} available"
                )
            }
            Self::LengthExceeded { max, actual } => {
                write!(f, "length exceeded: {actual} bytes do not fit in {max}")
            }
            Self::UnterminatedString { offset, max } => {
                write!(
                    f,
                    "string at offset {offset} not terminated within {max} bytes"
                )
            }
            Self::InteriorNul { position } => {
                write!(f, "string contains a NUL byte at position {position}")
            }
        }
    }
}

impl std::error::Error for ByteError {}
