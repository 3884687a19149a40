//! Quadratic scrambler.
//!
//! The packed integer's decimal digits are cut into three chunks which become
//! the coefficients of `a·x² + b·x + c = 0`. The two roots (real or complex)
//! are folded into a single positive integer of at most a dozen or so digits.
//! The stage has no cryptographic purpose; root finding and the absolute-value
//! fold are simply very non-linear, which spreads structurally similar inputs
//! apart before the finalizer runs.
//!
//! For a number with `digits` decimal digits, with `div = digits / 3` and
//! `rem = digits - 2 * div`:
//!
//! ```text
//! c = num % 10^div
//! b = (num / 10^div) % 10^div
//! a = num / 10^(div + rem)
//! ```
//!
//! Every chunk stays below `10^7`, so all arithmetic below fits in `i64`.

use crate::digits::{digit_count, pow10};

/// Scale applied to the low root before adding the high root.
pub const ROOT_PACK_SCALE: u64 = 1_000_000;

/// Coefficients of `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

/// Roots of a [`Coefficients`] triple, as integer approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roots {
    /// `a == 0` and `b == 0`: no unique root.
    Degenerate,
    /// `a == 0`: the linear equation `b·x + c = 0`.
    Linear { root: i64 },
    /// Non-negative discriminant, ordered `low <= high`.
    Real { low: i64, high: i64 },
    /// Negative discriminant.
    Complex { real: i64, imag: i64 },
}

impl Roots {
    /// Fold the roots into one positive integer: `|low| * 10^6 + |high|`.
    ///
    /// Real roots fill the low/high slots in ascending order, complex roots
    /// put the real part first. A linear root takes the low slot.
    pub const fn fold(self) -> u64 {
        let (low, high) = match self {
            Roots::Degenerate => (0, 0),
            Roots::Linear { root } => (root, 0),
            Roots::Real { low, high } => (low, high),
            Roots::Complex { real, imag } => (real, imag),
        };
        low.unsigned_abs() * ROOT_PACK_SCALE + high.unsigned_abs()
    }
}

/// Widths `(div, rem)` of the chunks for a number of `digits` digits.
///
/// The two trailing chunks are `div` digits wide; the leading part absorbs
/// the remainder so that `rem + 2 * div == digits` and `rem >= div`.
#[inline]
pub const fn chunk_widths(digits: u32) -> (u32, u32) {
    let div = digits / 3;
    (div, digits - 2 * div)
}

/// Cut `num` (which has `digits` decimal digits) into coefficients.
pub const fn split(num: u64, digits: u32) -> Coefficients {
    let (div, rem) = chunk_widths(digits);
    let p1 = pow10(div);
    let p2 = pow10(div + rem);

    Coefficients {
        a: (num / p2) as i64,
        b: ((num / p1) % p1) as i64,
        c: (num % p1) as i64,
    }
}

/// Integer square root, `floor(sqrt(n))`, by Newton's method.
pub const fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    // (x + 1) / 2 without overflowing at u64::MAX
    let mut y = x / 2 + (x & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Solve `a·x² + b·x + c = 0` with truncating integer arithmetic.
///
/// Coefficients must be below `10^7` in magnitude, which [`split`] guarantees.
pub const fn solve(coefficients: Coefficients) -> Roots {
    let Coefficients { a, b, c } = coefficients;

    if a == 0 {
        if b == 0 {
            return Roots::Degenerate;
        }
        return Roots::Linear { root: -c / b };
    }

    let discriminant = b * b - 4 * a * c;
    let base = -b / (2 * a);

    if discriminant < 0 {
        Roots::Complex {
            real: base,
            imag: isqrt(discriminant.unsigned_abs()) as i64,
        }
    } else {
        let half_spread = isqrt(discriminant as u64) as i64 / (2 * a);
        let r1 = base + half_spread;
        let r2 = base - half_spread;
        if r1 < r2 {
            Roots::Real { low: r1, high: r2 }
        } else {
            Roots::Real { low: r2, high: r1 }
        }
    }
}

/// Run the whole scrambler on a packed integer.
#[inline]
pub const fn scramble(num: u64) -> u64 {
    solve(split(num, digit_count(num))).fold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_zero() {
        assert_eq!(isqrt(0), 0);
    }

    #[test]
    fn test_isqrt_small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u64), *root, "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_is_floor() {
        let mut n = 1u64;
        while n < 1u64 << 60 {
            let r = isqrt(n);
            assert!(r * r <= n, "isqrt({}) = {} too large", n, r);
            assert!((r + 1) * (r + 1) > n, "isqrt({}) = {} too small", n, r);
            n = n * 3 + 1;
        }
    }

    #[test]
    fn test_isqrt_extremes() {
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
        assert_eq!(isqrt(1_000_000_000_000), 1_000_000);
    }

    #[test]
    fn test_chunk_widths_invariant() {
        for digits in 1..=20 {
            let (div, rem) = chunk_widths(digits);
            assert_eq!(rem + 2 * div, digits);
            assert!(rem >= div, "leading part narrower for {} digits", digits);
        }
    }

    #[test]
    fn test_split_hello() {
        // "hello" packs to 104101108108111 (15 digits, 5/5/5).
        let coefficients = split(104_101_108_108_111, 15);
        assert_eq!(
            coefficients,
            Coefficients {
                a: 10410,
                b: 11081,
                c: 8111
            }
        );
    }

    #[test]
    fn test_split_short_numbers_have_zero_leading_chunk() {
        for num in [0u64, 7, 97] {
            let coefficients = split(num, digit_count(num));
            assert_eq!(coefficients, Coefficients { a: 0, b: 0, c: 0 });
        }
    }

    #[test]
    fn test_split_chunks_stay_small() {
        let c = split(u64::MAX, 20);
        assert_eq!(c.a, 184_467);
        assert!(c.b < 1_000_000 && c.c < 1_000_000);
    }

    #[test]
    fn test_solve_degenerate() {
        let roots = solve(Coefficients { a: 0, b: 0, c: 5 });
        assert_eq!(roots, Roots::Degenerate);
        assert_eq!(roots.fold(), 0);
    }

    #[test]
    fn test_solve_linear() {
        // 4x - 8 = 0
        let roots = solve(Coefficients { a: 0, b: 4, c: -8 });
        assert_eq!(roots, Roots::Linear { root: 2 });
        assert_eq!(roots.fold(), 2_000_000);
    }

    #[test]
    fn test_solve_real_orders_low_high() {
        // x² + 10x + 9 = (x + 1)(x + 9)
        let roots = solve(Coefficients { a: 1, b: 10, c: 9 });
        assert_eq!(roots, Roots::Real { low: -9, high: -1 });
        assert_eq!(roots.fold(), 9_000_001);
    }

    #[test]
    fn test_solve_real_with_negative_leading() {
        // -x² + 4 = 0 gives roots -2 and 2 even with a < 0
        let roots = solve(Coefficients { a: -1, b: 0, c: 4 });
        assert_eq!(roots, Roots::Real { low: -2, high: 2 });
    }

    #[test]
    fn test_solve_complex() {
        let roots = solve(Coefficients {
            a: 10410,
            b: 11081,
            c: 8111,
        });
        assert_eq!(roots, Roots::Complex { real: 0, imag: 14661 });
        assert_eq!(roots.fold(), 14661);
    }

    #[test]
    fn test_scramble_known_values() {
        assert_eq!(scramble(0), 0);
        assert_eq!(scramble(97), 0);
        assert_eq!(scramble(120), 2_000_000);
        assert_eq!(scramble(104_101_108_108_111), 14661);
        assert_eq!(scramble(9_798_099_100), 617);
    }

    #[test]
    fn test_scramble_never_panics_across_digit_counts() {
        let mut num = 1u64;
        for _ in 0..20 {
            let _ = scramble(num);
            let _ = scramble(num.wrapping_mul(9).wrapping_add(8));
            num = num.saturating_mul(10);
        }
        let _ = scramble(u64::MAX);
    }
}
