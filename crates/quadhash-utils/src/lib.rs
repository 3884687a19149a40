//! Const arithmetic behind the quadhash fingerprint.
//!
//! This crate holds the three numeric stages of the fingerprint so that both
//! `quadhash-core` (runtime) and `quadhash-macros` (compile time) compute
//! exactly the same values. Everything is a `const fn` and there are no
//! external dependencies.
//!
//! # Usage
//!
//! This crate is an implementation detail. Use the `quadhash` facade crate
//! for digests and hex formatting.
//!
//! # Contents
//!
//! - [`pack`] - digit packer
//! - [`scramble`] - quadratic scrambler
//! - [`finalize`] - finalizer
//! - [`fingerprint`] - all three stages with the default salt

pub mod digits;
pub mod mix;
pub mod pack;
pub mod quadratic;

pub use digits::{digit_count, pow10};
pub use mix::{finalize, fmix64, GOLDEN_RATIO_SALT};
pub use pack::{pack, pack_overflowing};
pub use quadratic::{chunk_widths, isqrt, scramble, solve, split, Coefficients, Roots};

/// Compute the 64-bit fingerprint of `bytes` with the default salt.
///
/// # Examples
///
/// ```
/// use quadhash_utils::fingerprint;
///
/// const HELLO: u64 = fingerprint(b"hello");
/// assert_eq!(HELLO, 0xe85b_7533_8887_8edf);
/// ```
#[inline]
pub const fn fingerprint(bytes: &[u8]) -> u64 {
    fingerprint_with_salt(bytes, GOLDEN_RATIO_SALT)
}

/// Compute the 64-bit fingerprint of `bytes` with a custom finalizer salt.
#[inline]
pub const fn fingerprint_with_salt(bytes: &[u8], salt: u64) -> u64 {
    let packed = pack(bytes);
    finalize(packed, scramble(packed), salt)
}
