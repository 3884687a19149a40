//! Decimal digit helpers.

/// Largest exponent for which `10^exp` fits in a `u64`.
pub const MAX_POW10_EXP: u32 = 19;

/// Number of decimal digits in `n`. Zero has one digit.
#[inline]
pub const fn digit_count(mut n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    let mut digits = 0;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Compute `10^exp` with integer arithmetic.
///
/// `exp` must not exceed [`MAX_POW10_EXP`]. The scrambler never asks for more
/// than `10^14` (a 20-digit number splits into 6/6/8).
#[inline]
pub const fn pow10(exp: u32) -> u64 {
    debug_assert!(exp <= MAX_POW10_EXP);
    let mut r = 1u64;
    let mut i = 0;
    while i < exp {
        r *= 10;
        i += 1;
    }
    r
}
