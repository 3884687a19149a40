//! Digit packer: collapses a byte string into one decimal-slotted integer.
//!
//! Each byte is appended to the accumulator in its own decimal slot, sized to
//! the byte's digit count, so neighbouring bytes never share digits:
//!
//! | byte value | slot width | accumulator step      |
//! |------------|------------|-----------------------|
//! | `0..10`    | 1 digit    | `acc * 10 + byte`     |
//! | `10..100`  | 2 digits   | `acc * 100 + byte`    |
//! | `100..256` | 3 digits   | `acc * 1000 + byte`   |
//!
//! `"hello"` packs to `104_101_108_108_111`.
//!
//! The accumulator is a `u64` with wrapping arithmetic. Inputs of more than
//! six or so bytes overflow it; the result is still deterministic on every
//! platform, it just stops being invertible. Any future unpacking logic must
//! use the same slot limits.

/// Bytes below this value take a one-digit slot.
pub const SLOT_ONE_DIGIT_LIMIT: u8 = 10;

/// Bytes below this value (and at least [`SLOT_ONE_DIGIT_LIMIT`]) take a
/// two-digit slot. Everything else takes three digits.
pub const SLOT_TWO_DIGIT_LIMIT: u8 = 100;

/// Accumulator multiplier for the slot `byte` occupies.
#[inline]
pub const fn slot_factor(byte: u8) -> u64 {
    if byte < SLOT_ONE_DIGIT_LIMIT {
        10
    } else if byte < SLOT_TWO_DIGIT_LIMIT {
        100
    } else {
        1000
    }
}

/// Pack `bytes` into a single integer, wrapping on overflow.
///
/// The empty string packs to `0`.
#[inline]
pub const fn pack(bytes: &[u8]) -> u64 {
    pack_overflowing(bytes).0
}

/// Pack `bytes`, also reporting whether any step wrapped around `u64::MAX`.
///
/// The packed value is identical to [`pack`].
pub const fn pack_overflowing(bytes: &[u8]) -> (u64, bool) {
    let mut acc = 0u64;
    let mut wrapped = false;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        let (shifted, mul_overflow) = acc.overflowing_mul(slot_factor(byte));
        let (next, add_overflow) = shifted.overflowing_add(byte as u64);
        wrapped = wrapped || mul_overflow || add_overflow;
        acc = next;
        i += 1;
    }
    (acc, wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_empty() {
        assert_eq!(pack(b""), 0);
        assert_eq!(pack_overflowing(b""), (0, false));
    }

    #[test]
    fn test_pack_slot_widths() {
        assert_eq!(pack(&[7]), 7);
        assert_eq!(pack(&[7, 7]), 77);
        assert_eq!(pack(&[42, 7]), 427);
        assert_eq!(pack(&[7, 42]), 742);
        assert_eq!(pack(&[200, 7, 42]), 200_742);
        assert_eq!(pack(b"hello"), 104_101_108_108_111);
    }

    #[test]
    fn test_pack_embedded_zero() {
        // A zero byte still opens a one-digit slot.
        assert_eq!(pack(b"ab\0cd"), 9_798_099_100);
        assert_ne!(pack(b"ab\0cd"), pack(b"abcd"));
    }

    #[test]
    fn test_pack_is_not_injective() {
        assert_eq!(pack(&[1, 2]), pack(&[12]));
        assert_eq!(pack(&[10, 1]), pack(b"e"));
    }

    #[test]
    fn test_slot_factor_thresholds() {
        assert_eq!(slot_factor(0), 10);
        assert_eq!(slot_factor(9), 10);
        assert_eq!(slot_factor(10), 100);
        assert_eq!(slot_factor(99), 100);
        assert_eq!(slot_factor(100), 1000);
        assert_eq!(slot_factor(255), 1000);
    }

    #[test]
    fn test_pack_overflow_is_reported_and_wraps() {
        let (short, wrapped) = pack_overflowing(b"hello");
        assert!(!wrapped);
        assert_eq!(short, pack(b"hello"));

        let long = b"The quick brown fox";
        let (value, wrapped) = pack_overflowing(long);
        assert!(wrapped);
        assert_eq!(value, 1_480_640_172_034_934_672);
    }

    #[test]
    fn test_pack_const() {
        const PACKED: u64 = pack(b"abc");
        assert_eq!(PACKED, 979_899);
    }
}
