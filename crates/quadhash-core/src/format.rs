//! Fixed-width lowercase hexadecimal formatting.
//!
//! Every digest renders as exactly [`HEX_WIDTH`] characters, zero padded.
//! The rendered form lives in an owned [`HexDigest`] so each call gets its own
//! storage and results can be kept or shared freely.

use std::fmt;

use crate::error::{DigestError, DigestResult};

/// Number of hex characters in a rendered digest.
pub const HEX_WIDTH: usize = 16;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render `value` as 16 lowercase hex digits, most significant first.
pub const fn encode_hex(value: u64) -> [u8; HEX_WIDTH] {
    let mut out = [b'0'; HEX_WIDTH];
    let mut i = 0;
    while i < HEX_WIDTH {
        let shift = (HEX_WIDTH - 1 - i) * 4;
        out[i] = HEX_DIGITS[((value >> shift) & 0xf) as usize];
        i += 1;
    }
    out
}

/// Parse 16 lowercase hex digits back into a value.
///
/// Uppercase digits are rejected since [`encode_hex`] never produces them.
pub fn decode_hex(text: &[u8]) -> DigestResult<u64> {
    if text.len() != HEX_WIDTH {
        return Err(DigestError::InvalidLength { len: text.len() });
    }

    let mut value = 0u64;
    for (index, &byte) in text.iter().enumerate() {
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            _ => return Err(DigestError::InvalidHexDigit { index, byte }),
        };
        value = (value << 4) | u64::from(nibble);
    }
    Ok(value)
}

/// A rendered digest: 16 lowercase hex characters held by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexDigest([u8; HEX_WIDTH]);

impl HexDigest {
    /// Render `value`.
    pub const fn new(value: u64) -> Self {
        Self(encode_hex(value))
    }

    /// The digest as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ever filled from HEX_DIGITS
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The digest as raw ASCII bytes.
    pub const fn as_bytes(&self) -> &[u8; HEX_WIDTH] {
        &self.0
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HexDigest").field(&self.as_str()).finish()
    }
}

impl From<HexDigest> for String {
    fn from(hex: HexDigest) -> Self {
        hex.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_padded() {
        assert_eq!(&encode_hex(0), b"0000000000000000");
        assert_eq!(&encode_hex(0xff), b"00000000000000ff");
        assert_eq!(&encode_hex(u64::MAX), b"ffffffffffffffff");
    }

    #[test]
    fn test_encode_matches_std_formatting() {
        for value in [1u64, 0xdead_beef, 0x685f_df50_e51f_a977, 1 << 63] {
            let expected = format!("{:016x}", value);
            assert_eq!(HexDigest::new(value).as_str(), expected);
        }
    }

    #[test]
    fn test_decode_round_trip() {
        let value = 0xe85b_7533_8887_8edf;
        assert_eq!(decode_hex(&encode_hex(value)), Ok(value));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(
            decode_hex(b"abc"),
            Err(DigestError::InvalidLength { len: 3 })
        );
        assert_eq!(
            decode_hex(b"00000000000000000"),
            Err(DigestError::InvalidLength { len: 17 })
        );
    }

    #[test]
    fn test_decode_rejects_uppercase_and_junk() {
        assert_eq!(
            decode_hex(b"E85B753388878EDF"),
            Err(DigestError::InvalidHexDigit { index: 0, byte: b'E' })
        );
        assert_eq!(
            decode_hex(b"e85b7533 8878edf"),
            Err(DigestError::InvalidHexDigit { index: 8, byte: b' ' })
        );
    }

    #[test]
    fn test_hex_digest_const() {
        const HEX: HexDigest = HexDigest::new(0x0123_4567_89ab_cdef);
        assert_eq!(HEX.to_string(), "0123456789abcdef");
        assert_eq!(format!("{:?}", HEX), "HexDigest(\"0123456789abcdef\")");
        assert_eq!(String::from(HEX), "0123456789abcdef");
    }
}
