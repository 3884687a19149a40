//! # quadhash-core
//!
//! Digest types, formatting and configuration for the quadhash fingerprint.
//!
//! quadhash maps a byte string to a deterministic 64-bit value, rendered as 16
//! lowercase hex characters. It is meant for cache keys and deduplication tags.
//! It is **not** a cryptographic hash and makes no collision or preimage
//! resistance claims.
//!
//! ## Stages
//!
//! ```text
//! bytes ─► digit packer ─► quadratic scrambler ─► finalizer ─► hex formatter
//! ```
//!
//! The first three stages live in `quadhash-utils` as `const fn`s; this crate
//! adds the value types around them.
//!
//! ## Types
//!
//! - [`Digest`] - 64-bit fingerprint value
//! - [`HexDigest`] - fixed-width rendered digest
//! - [`DigestConfig`] / [`OverflowPolicy`] - salt and overflow handling
//! - [`Digester`] - configured computation
//! - [`DigestTrace`] - intermediate values of one computation
//! - [`DigestKey`] - enumerated keys (see `#[derive(DigestKeys)]`)
//! - [`DigestError`] - error types

pub mod config;
pub mod digest;
pub mod digester;
pub mod error;
pub mod format;
pub mod keys;
pub mod trace;

// Re-exports for convenience
pub use config::{DigestConfig, OverflowPolicy};
pub use digest::Digest;
pub use digester::{digest, hash, Digester};
pub use error::{DigestError, DigestResult};
pub use format::{decode_hex, encode_hex, HexDigest, HEX_WIDTH};
pub use keys::DigestKey;
pub use trace::DigestTrace;

pub use quadhash_utils::{Coefficients, Roots};
