//! # quadhash
//!
//! Deterministic, non-cryptographic 64-bit fingerprints of byte strings,
//! rendered as 16 lowercase hex characters.
//!
//! Use it for cache keys and deduplication tags. It offers no resistance to
//! deliberately constructed collisions and is not a one-way function.
//!
//! ## Architecture
//!
//! ```text
//! bytes
//!   ↓ digit packer        (each byte in its own decimal slot)
//! packed u64
//!   ↓ quadratic scrambler (digit chunks as a·x² + b·x + c, roots folded)
//! scrambled u64
//!   ↓ finalizer           (golden ratio salt + MurmurHash3 fmix64)
//! mixed u64
//!   ↓ formatter
//! "e85b753388878edf"
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use quadhash::prelude::*;
//!
//! assert_eq!(quadhash::hash("hello"), "e85b753388878edf");
//!
//! let digester = Digester::new(DigestConfig::new().with_overflow(OverflowPolicy::Reject));
//! assert!(digester.digest("The quick brown fox").is_err());
//! ```
//!
//! With the `derive` feature (on by default), digests can be computed at
//! compile time:
//!
//! ```rust,ignore
//! use quadhash::prelude::*;
//!
//! const HELLO: Digest = digest!("hello");
//!
//! #[derive(Clone, Copy, DigestKeys)]
//! enum Bucket {
//!     #[key = "user-profile"]
//!     UserProfile,
//!     Session,
//! }
//! ```

// Re-export sub-crates
pub use quadhash_core as core;
pub use quadhash_utils as arith;

pub use quadhash_core::{digest, hash, Digest, DigestError, DigestResult, Digester};

// Re-export macros when feature is enabled
#[cfg(feature = "derive")]
pub use quadhash_macros::digest;
#[cfg(feature = "derive")]
pub use quadhash_macros::DigestKeys;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use quadhash::prelude::*;
/// ```
pub mod prelude {
    pub use quadhash_core::{
        // Values
        Digest, HexDigest,
        // Configuration
        DigestConfig, Digester, OverflowPolicy,
        // Diagnostics
        DigestTrace,
        // Enumerated keys
        DigestKey,
        // Error types
        DigestError, DigestResult,
    };

    #[cfg(feature = "derive")]
    pub use quadhash_macros::{digest, DigestKeys};
}
