//! Compile-time digests must agree with runtime digests.

use quadhash::prelude::*;

const HELLO: Digest = digest!("hello");
const EMPTY: Digest = digest!("");
const WITH_NUL: Digest = digest!(b"ab\0cd");

#[derive(Debug, Clone, Copy, PartialEq, Eq, DigestKeys)]
enum Bucket {
    #[key = "user-profile"]
    UserProfile,
    #[key = "session"]
    Session,
    Thumbnail,
}

#[test]
fn digest_macro_matches_runtime() {
    assert_eq!(HELLO, quadhash::digest("hello"));
    assert_eq!(HELLO.to_string(), "e85b753388878edf");
    assert_eq!(EMPTY.to_string(), "0000000000000000");
    assert_eq!(WITH_NUL.to_string(), "e3bdd9c435ec61f4");
}

#[test]
fn derived_keys_use_attribute_or_variant_name() {
    assert_eq!(Bucket::UserProfile.key(), "user-profile");
    assert_eq!(Bucket::Session.key(), "session");
    assert_eq!(Bucket::Thumbnail.key(), "Thumbnail");
    assert_eq!(Bucket::KEYS, &["user-profile", "session", "Thumbnail"]);
    assert_eq!(
        Bucket::ALL,
        &[Bucket::UserProfile, Bucket::Session, Bucket::Thumbnail]
    );
}

#[test]
fn derived_digests_match_runtime() {
    for bucket in Bucket::ALL.iter().copied() {
        let runtime = quadhash::digest(bucket.key());
        assert_eq!(bucket.digest(), runtime);
        assert_eq!(bucket.hex(), quadhash::hash(bucket.key()));
    }
}

#[test]
fn derived_lookup_by_digest() {
    let digest = quadhash::digest("session");
    assert_eq!(Bucket::from_digest(digest), Some(Bucket::Session));
    assert_eq!(Bucket::from_digest(quadhash::digest("missing")), None);
}
