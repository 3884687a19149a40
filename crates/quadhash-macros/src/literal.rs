//! The `digest!` function-like macro.

use proc_macro2::TokenStream;
use quadhash_utils::fingerprint;
use quote::quote;

/// Expand a string or byte string literal into a `Digest` constant.
pub fn digest_impl(lit: syn::Lit) -> syn::Result<TokenStream> {
    let bytes = match &lit {
        syn::Lit::Str(s) => s.value().into_bytes(),
        syn::Lit::ByteStr(b) => b.value(),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "digest! expects a string literal or a byte string literal",
            ))
        }
    };

    let value = fingerprint(&bytes);
    Ok(quote! {
        ::quadhash::core::Digest::from_u64(#value)
    })
}
