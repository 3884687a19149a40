//! Error types for quadhash.

use std::fmt;

/// Errors that can occur while computing or parsing digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Packing the input wrapped the accumulator and the configured
    /// [`OverflowPolicy`](crate::OverflowPolicy) rejects that.
    InputOverflow {
        /// Input length in bytes.
        len: usize,
    },
    /// A hex digest did not have exactly 16 characters.
    InvalidLength {
        /// Length that was found.
        len: usize,
    },
    /// A hex digest contained something other than `0-9` or `a-f`.
    InvalidHexDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputOverflow { len } => write!(
                f,
                "Input overflow: {} bytes do not fit the packing accumulator",
                len
            ),
            Self::InvalidLength { len } => {
                write!(f, "Invalid digest length: expected 16 characters, got {}", len)
            }
            Self::InvalidHexDigit { index, byte } => write!(
                f,
                "Invalid hex digit {:?} at position {}",
                char::from(*byte),
                index
            ),
        }
    }
}

impl std::error::Error for DigestError {}

/// Result type for quadhash operations.
pub type DigestResult<T> = Result<T, DigestError>;
