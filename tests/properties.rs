//! Property-based tests for key agreement and signatures.
//!
//! Scalar multiplications are expensive in unoptimized builds, so each
//! property runs a reduced number of cases.

use axlsign::{
    SIGNATURE_SIZE, Signature, generate_keypair, open_message, shared_key, sign, sign_message,
    verify,
};
use proptest::prelude::*;

fn seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

fn random() -> impl Strategy<Value = [u8; 64]> {
    prop::collection::vec(any::<u8>(), 64).prop_map(|v| {
        let mut out = [0u8; 64];
        out.copy_from_slice(&v);
        out
    })
}

/// For any two seeds, both sides of an X25519 exchange agree.
#[test]
fn property_shared_key_symmetry() {
    proptest!(ProptestConfig::with_cases(16), |(
        seed_a in seed(),
        seed_b in seed(),
    )| {
        let a = generate_keypair(&seed_a);
        let b = generate_keypair(&seed_b);

        prop_assert_eq!(
            shared_key(a.private(), b.public()),
            shared_key(b.private(), a.public()),
            "Both parties must derive the same secret"
        );
    });
}

/// For any seed, key generation is deterministic and clears bit 255.
#[test]
fn property_keypair_determinism() {
    proptest!(ProptestConfig::with_cases(16), |(seed in seed())| {
        let first = generate_keypair(&seed);
        let second = generate_keypair(&seed);

        prop_assert_eq!(first.public(), second.public());
        prop_assert_eq!(first.private().as_bytes(), second.private().as_bytes());
        prop_assert_eq!(first.public().as_bytes()[31] & 0x80, 0);
    });
}

/// For any key, message and randomness, a fresh signature verifies.
#[test]
fn property_sign_verify_round_trip() {
    proptest!(ProptestConfig::with_cases(16), |(
        seed in seed(),
        message in prop::collection::vec(any::<u8>(), 0..512),
        rnd in prop::option::of(random()),
    )| {
        let pair = generate_keypair(&seed);
        let signature = sign(pair.private(), &message, rnd.as_ref());

        prop_assert!(
            verify(pair.public(), &message, &signature),
            "Signature should verify under the signer's public key"
        );
    });
}

/// For any signed message, flipping one bit of the signature or the payload
/// makes it fail to open.
#[test]
fn property_tampering_detected() {
    proptest!(ProptestConfig::with_cases(16), |(
        seed in seed(),
        message in prop::collection::vec(any::<u8>(), 1..256),
        position in any::<prop::sample::Index>(),
        bit in 0..8u8,
    )| {
        let pair = generate_keypair(&seed);
        let mut signed = sign_message(pair.private(), &message, None);

        prop_assert_eq!(open_message(pair.public(), &signed).unwrap(), message);

        let index = position.index(signed.len());
        signed[index] ^= 1 << bit;

        prop_assert!(
            open_message(pair.public(), &signed).is_err(),
            "Flipping bit {} of byte {} must be detected", bit, index
        );
    });
}

/// Deterministic signatures depend only on the key and the message.
#[test]
fn property_deterministic_signatures() {
    proptest!(ProptestConfig::with_cases(8), |(
        seed in seed(),
        message in prop::collection::vec(any::<u8>(), 0..128),
    )| {
        let pair = generate_keypair(&seed);

        let first = sign(pair.private(), &message, None);
        let second = sign(pair.private(), &message, None);

        prop_assert_eq!(first, second);
        prop_assert_eq!(
            Signature::try_from(&first.to_bytes()[..]).unwrap(),
            first
        );
        prop_assert_eq!(first.as_bytes().len(), SIGNATURE_SIZE);
    });
}
