//! Digest computation.
//!
//! [`digest`] and [`hash`] compute reference digests directly. A [`Digester`]
//! applies a [`DigestConfig`] and can also return a full [`DigestTrace`].

use quadhash_utils::{
    chunk_widths, digit_count, finalize, fingerprint, pack_overflowing, solve, split,
};

use crate::config::{DigestConfig, OverflowPolicy};
use crate::digest::Digest;
use crate::error::{DigestError, DigestResult};
use crate::trace::DigestTrace;

/// Compute the reference digest of `input`.
///
/// # Examples
///
/// ```
/// let digest = quadhash_core::digest("hello");
/// assert_eq!(digest.as_u64(), 0xe85b_7533_8887_8edf);
/// ```
#[inline]
pub fn digest(input: impl AsRef<[u8]>) -> Digest {
    Digest::from_u64(fingerprint(input.as_ref()))
}

/// Compute the reference digest of `input` as 16 lowercase hex characters.
///
/// Each call returns a fresh `String`.
///
/// # Examples
///
/// ```
/// assert_eq!(quadhash_core::hash("hello"), "e85b753388878edf");
/// assert_eq!(quadhash_core::hash(""), "0000000000000000");
/// ```
pub fn hash(input: impl AsRef<[u8]>) -> String {
    digest(input).to_hex().into()
}

/// Computes digests under a [`DigestConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Digester {
    config: DigestConfig,
}

impl Digester {
    /// Create a digester with `config`.
    pub const fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Compute the digest of `input`.
    ///
    /// Only fails when the overflow policy is [`OverflowPolicy::Reject`] and
    /// the input does not fit the packing accumulator.
    pub fn digest(&self, input: impl AsRef<[u8]>) -> DigestResult<Digest> {
        self.trace(input).map(|trace| trace.digest())
    }

    /// Compute the digest of `input` as 16 lowercase hex characters.
    pub fn hash(&self, input: impl AsRef<[u8]>) -> DigestResult<String> {
        self.digest(input).map(|digest| digest.to_hex().into())
    }

    /// Compute the digest of `input`, keeping every intermediate value.
    pub fn trace(&self, input: impl AsRef<[u8]>) -> DigestResult<DigestTrace> {
        let bytes = input.as_ref();

        let (packed, wrapped) = pack_overflowing(bytes);
        if wrapped {
            match self.config.overflow {
                OverflowPolicy::Wrap => {
                    log::debug!("Packing {} bytes wrapped the accumulator", bytes.len());
                }
                OverflowPolicy::Reject => {
                    return Err(DigestError::InputOverflow { len: bytes.len() });
                }
            }
        }

        let digits = digit_count(packed);
        let coefficients = split(packed, digits);
        let roots = solve(coefficients);
        let scrambled = roots.fold();
        let mixed = finalize(packed, scrambled, self.config.salt);

        let trace = DigestTrace {
            input_len: bytes.len(),
            packed,
            wrapped,
            digits,
            chunk_widths: chunk_widths(digits),
            coefficients,
            roots,
            scrambled,
            mixed,
        };

        if trace.is_degenerate() {
            log::debug!(
                "Leading coefficient is zero for packed value {}; using {:?}",
                packed,
                roots
            );
        }
        log::trace!(
            "packed={} digits={} coefficients={:?} scrambled={} mixed={:016x}",
            packed,
            digits,
            coefficients,
            scrambled,
            mixed
        );

        Ok(trace)
    }
}
