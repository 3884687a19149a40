//! The [`Digest`] value type.

use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;
use crate::format::{decode_hex, HexDigest};

/// A 64-bit quadhash fingerprint.
///
/// Prints as 16 lowercase hex digits (`Display` and `{:x}` agree) and parses
/// back from the same form.
///
/// Not a cryptographic hash: use it for cache keys and deduplication tags,
/// never where an adversary chooses the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(u64);

impl Digest {
    /// Wrap a finalized value.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// The finalized value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Render as fixed-width hex.
    #[inline]
    pub const fn to_hex(self) -> HexDigest {
        HexDigest::new(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_hex().as_str())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_hex().as_str())
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex(s.as_bytes()).map(Self)
    }
}

impl From<Digest> for u64 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<u64> for Digest {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
