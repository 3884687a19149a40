//! Digest configuration.
//!
//! The defaults reproduce the reference fingerprint exactly. Changing the salt
//! gives an independent key space: digests computed under different salts are
//! not comparable.
//!
//! # Example
//!
//! ```
//! use quadhash_core::{DigestConfig, OverflowPolicy};
//!
//! pub static STRICT: DigestConfig = DigestConfig::new()
//!     .with_salt(0x5EED_5EED_5EED_5EED)
//!     .with_overflow(OverflowPolicy::Reject);
//! ```

use quadhash_utils::GOLDEN_RATIO_SALT;

/// What to do when an input is too long for the packing accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Wrap around `u64::MAX`. Deterministic on every platform.
    #[default]
    Wrap,
    /// Fail with [`DigestError::InputOverflow`](crate::DigestError::InputOverflow).
    Reject,
}

/// Configuration for a [`Digester`](crate::Digester).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestConfig {
    /// Multiplier applied to the scrambled value in the finalizer.
    pub salt: u64,

    /// Accumulator overflow handling.
    pub overflow: OverflowPolicy,
}

impl DigestConfig {
    /// The reference configuration: golden ratio salt, wrapping accumulator.
    pub const fn new() -> Self {
        Self {
            salt: GOLDEN_RATIO_SALT,
            overflow: OverflowPolicy::Wrap,
        }
    }

    /// Set the finalizer salt.
    pub const fn with_salt(mut self, salt: u64) -> Self {
        self.salt = salt;
        self
    }

    /// Set the overflow policy.
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Whether this configuration produces reference digests.
    pub const fn is_reference(&self) -> bool {
        self.salt == GOLDEN_RATIO_SALT
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::new()
    }
}
