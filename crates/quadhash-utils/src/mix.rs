//! Finalizer: folds the packed and scrambled values into one well-mixed `u64`.
//!
//! The scrambled value is multiplied by a salt and XORed into the packed value,
//! then the result goes through the public-domain MurmurHash3 `fmix64`
//! avalanche. All arithmetic wraps.

/// Default salt, `2^64 / φ` (the golden ratio constant used by Fibonacci hashing).
pub const GOLDEN_RATIO_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// First `fmix64` multiplier (MurmurHash3).
pub const FMIX_C1: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Second `fmix64` multiplier (MurmurHash3).
pub const FMIX_C2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// MurmurHash3 64-bit finalizer.
#[inline]
pub const fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(FMIX_C1);
    h ^= h >> 33;
    h = h.wrapping_mul(FMIX_C2);
    h ^= h >> 33;
    h
}

/// Combine `packed` and `scrambled` under `salt`, then avalanche.
#[inline]
pub const fn finalize(packed: u64, scrambled: u64, salt: u64) -> u64 {
    fmix64(packed ^ scrambled.wrapping_mul(salt))
}
