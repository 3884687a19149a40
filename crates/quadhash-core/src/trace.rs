//! Stage-by-stage record of one digest computation.

use quadhash_utils::{Coefficients, Roots};

use crate::digest::Digest;

/// Every intermediate value produced while digesting one input.
///
/// Returned by [`Digester::trace`](crate::Digester::trace). Useful for
/// diagnosing why two inputs collide or for inspecting the quadratic stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestTrace {
    /// Input length in bytes.
    pub input_len: usize,
    /// Digit packer output.
    pub packed: u64,
    /// Whether packing wrapped around `u64::MAX`.
    pub wrapped: bool,
    /// Decimal digits in `packed`.
    pub digits: u32,
    /// Width of the two trailing chunks (`div`) and of the leading part (`rem`).
    pub chunk_widths: (u32, u32),
    /// Coefficients cut from `packed`.
    pub coefficients: Coefficients,
    /// Roots of the quadratic.
    pub roots: Roots,
    /// Folded roots.
    pub scrambled: u64,
    /// Finalizer output.
    pub mixed: u64,
}

impl DigestTrace {
    /// The resulting digest.
    pub const fn digest(&self) -> Digest {
        Digest::from_u64(self.mixed)
    }

    /// Whether the quadratic stage fell back to the linear or degenerate path.
    pub const fn is_degenerate(&self) -> bool {
        matches!(self.roots, Roots::Degenerate | Roots::Linear { .. })
    }
}
