//! Derive macro for the `DigestKey` trait.
//!
//! Parses a fieldless enum into a list of [`KeyVariant`]s, computing each
//! key's digest at expansion time, and generates the trait implementation.

use proc_macro2::{Span, TokenStream};
use quadhash_utils::fingerprint;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// A single enum variant and its key.
pub struct KeyVariant {
    /// The variant identifier (e.g., `UserProfile`)
    pub ident: syn::Ident,
    /// The key string (from `#[key = "..."]` or the identifier)
    pub key: String,
    /// Digest of `key`
    pub digest: u64,
    /// Span for error reporting
    pub span: Span,
}

/// Parse the enum's variants.
pub fn parse(input: &DeriveInput) -> syn::Result<Vec<KeyVariant>> {
    let data_enum = match &input.data {
        Data::Enum(e) => e,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(DigestKeys)] only supports enums, not structs",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(DigestKeys)] only supports enums, not unions",
            ))
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(DigestKeys)] does not support generic enums",
        ));
    }

    let mut variants = Vec::new();
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "#[derive(DigestKeys)] only supports unit variants (no fields)",
            ));
        }

        let key = extract_key_attribute(&variant.attrs)?
            .unwrap_or_else(|| variant.ident.to_string());
        let digest = fingerprint(key.as_bytes());

        variants.push(KeyVariant {
            ident: variant.ident.clone(),
            key,
            digest,
            span: variant.ident.span(),
        });
    }

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(DigestKeys)] requires at least one variant",
        ));
    }

    Ok(variants)
}

/// Generate the `DigestKey` implementation.
pub fn generate(enum_name: &syn::Ident, variants: &[KeyVariant]) -> TokenStream {
    let keys: Vec<&str> = variants.iter().map(|v| v.key.as_str()).collect();

    let paths: Vec<TokenStream> = variants
        .iter()
        .map(|v| {
            let ident = &v.ident;
            quote! { #enum_name::#ident }
        })
        .collect();

    let key_arms: Vec<TokenStream> = variants
        .iter()
        .map(|v| {
            let ident = &v.ident;
            let key = &v.key;
            quote! { #enum_name::#ident => #key, }
        })
        .collect();

    let digest_arms: Vec<TokenStream> = variants
        .iter()
        .map(|v| {
            let ident = &v.ident;
            let digest = v.digest;
            quote! { #enum_name::#ident => ::quadhash::core::Digest::from_u64(#digest), }
        })
        .collect();

    let hex_arms: Vec<TokenStream> = variants
        .iter()
        .map(|v| {
            let ident = &v.ident;
            let hex = format!("{:016x}", v.digest);
            quote! { #enum_name::#ident => #hex, }
        })
        .collect();

    quote! {
        impl ::quadhash::core::DigestKey for #enum_name {
            const KEYS: &'static [&'static str] = &[#(#keys),*];
            const ALL: &'static [Self] = &[#(#paths),*];

            fn key(self) -> &'static str {
                match self {
                    #(#key_arms)*
                }
            }

            fn digest(self) -> ::quadhash::core::Digest {
                match self {
                    #(#digest_arms)*
                }
            }

            fn hex(self) -> &'static str {
                match self {
                    #(#hex_arms)*
                }
            }
        }
    }
}

/// Extract the key from a `#[key = "..."]` attribute.
fn extract_key_attribute(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("key") {
            let name_value = attr.meta.require_name_value()?;
            if let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) = &name_value.value
            {
                return Ok(Some(lit_str.value()));
            } else {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "expected string literal for #[key = \"...\"]",
                ));
            }
        }
    }
    Ok(None)
}
