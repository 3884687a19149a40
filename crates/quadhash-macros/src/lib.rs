//! Compile-time digests and derive macros for quadhash.
//!
//! Generated code refers to `::quadhash`, so depend on the `quadhash` facade
//! crate rather than on this crate directly.
//!
//! # Example
//!
//! ```ignore
//! use quadhash::prelude::*;
//!
//! const HELLO: Digest = digest!("hello");
//!
//! #[derive(Clone, Copy, DigestKeys)]
//! pub enum Bucket {
//!     #[key = "user-profile"]
//!     UserProfile,
//!     Session,
//! }
//! ```

use proc_macro::TokenStream;

mod digest_keys;
mod literal;
mod validate;

/// Compute a digest at compile time.
///
/// Accepts a string literal or a byte string literal and expands to a
/// `::quadhash::core::Digest` constant expression.
///
/// # Example
///
/// ```ignore
/// const EMPTY: Digest = digest!("");
/// const WITH_NUL: Digest = digest!(b"ab\0cd");
/// ```
#[proc_macro]
pub fn digest(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::Lit);

    match literal::digest_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive macro for implementing `DigestKey` on a fieldless enum.
///
/// This macro generates:
/// - `DigestKey` trait implementation (key, digest, hex, `KEYS`, `ALL`)
/// - Compile-time duplicate key and digest collision detection
///
/// # Requirements
///
/// - The type must be a non-generic enum with at least one variant
/// - All variants must be unit variants (no fields)
/// - The enum must also derive `Copy` and `Clone`
///
/// # Attributes
///
/// - `#[key = "..."]` - Optional key string for a variant. If not specified,
///   the variant identifier is used.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, DigestKeys)]
/// pub enum Bucket {
///     #[key = "user-profile"]
///     UserProfile,
///     Session, // key is "Session"
/// }
/// ```
#[proc_macro_derive(DigestKeys, attributes(key))]
pub fn derive_digest_keys(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match derive_digest_keys_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_digest_keys_impl(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let keys = digest_keys::parse(&input)?;
    validate::validate(&keys)?;
    Ok(digest_keys::generate(&input.ident, &keys))
}
