//! Enumerated digest keys.
//!
//! Usually implemented through `#[derive(DigestKeys)]`, which computes every
//! digest at compile time and refuses to compile if two keys collide.
//!
//! # Example
//!
//! ```ignore
//! use quadhash::prelude::*;
//!
//! #[derive(Clone, Copy, DigestKeys)]
//! pub enum CacheBucket {
//!     #[key = "user-profile"]
//!     UserProfile,
//!     Session, // key is "Session"
//! }
//!
//! assert_eq!(CacheBucket::Session.hex(), quadhash::hash("Session"));
//! ```

use crate::digest::Digest;

/// A fixed set of string keys with precomputed digests.
pub trait DigestKey: Copy + 'static {
    /// Every key string, in declaration order.
    const KEYS: &'static [&'static str];

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The key string of this variant.
    fn key(self) -> &'static str;

    /// The digest of [`key`](DigestKey::key).
    fn digest(self) -> Digest;

    /// The digest rendered as 16 lowercase hex characters.
    fn hex(self) -> &'static str;

    /// Look up the variant whose key digests to `digest`.
    fn from_digest(digest: Digest) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.digest() == digest)
    }
}
