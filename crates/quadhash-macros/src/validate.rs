//! Semantic validation for `#[derive(DigestKeys)]`.

use std::collections::HashMap;

use crate::digest_keys::KeyVariant;

/// Validate the parsed variants.
pub fn validate(variants: &[KeyVariant]) -> syn::Result<()> {
    check_unique_keys(variants)?;
    check_no_digest_collisions(variants)?;
    Ok(())
}

/// Check that all key strings are unique.
fn check_unique_keys(variants: &[KeyVariant]) -> syn::Result<()> {
    let mut seen: HashMap<&str, &syn::Ident> = HashMap::new();

    for variant in variants {
        if let Some(first) = seen.get(variant.key.as_str()) {
            return Err(syn::Error::new(
                variant.span,
                format!(
                    "Duplicate key \"{}\": already used by variant `{}`",
                    variant.key, first
                ),
            ));
        }
        seen.insert(&variant.key, &variant.ident);
    }

    Ok(())
}

/// Check that no two distinct keys digest to the same value.
fn check_no_digest_collisions(variants: &[KeyVariant]) -> syn::Result<()> {
    let mut seen: HashMap<u64, &str> = HashMap::new();

    for variant in variants {
        if let Some(first) = seen.get(&variant.digest) {
            return Err(syn::Error::new(
                variant.span,
                format!(
                    "Digest collision: \"{}\" and \"{}\" both digest to {:016x}. \
                     Rename one of these keys to avoid the collision.",
                    variant.key, first, variant.digest
                ),
            ));
        }
        seen.insert(variant.digest, &variant.key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use quadhash_utils::fingerprint;

    fn variant(ident: &str, key: &str) -> KeyVariant {
        KeyVariant {
            ident: syn::Ident::new(ident, Span::call_site()),
            key: key.to_string(),
            digest: fingerprint(key.as_bytes()),
            span: Span::call_site(),
        }
    }

    #[test]
    fn test_distinct_keys_pass() {
        let variants = [variant("A", "alpha"), variant("B", "beta")];
        assert!(validate(&variants).is_ok());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let variants = [variant("A", "same"), variant("B", "same")];
        let err = validate(&variants).unwrap_err();
        assert!(err.to_string().contains("Duplicate key \"same\""));
    }

    #[test]
    fn test_digest_collision_rejected() {
        // Slots are not self-delimiting: bytes [1, 2] and [12] both pack to 12.
        let variants = [variant("A", "\u{1}\u{2}"), variant("B", "\u{c}")];
        let err = validate(&variants).unwrap_err();
        assert!(err.to_string().contains("Digest collision"));
    }
}
