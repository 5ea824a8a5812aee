//! Fixed interoperability vectors.
//!
//! The base64 keys form a widely circulated interop pair: a
//! private key `SK` and an unrelated peer public key `PK`. The seed `"A"×32`
//! vectors exercise key generation and the combined format.

use axlsign::{
    PrivateKey, PublicKey, Signature, generate_keypair, open_message_str, shared_key, sign,
    sign_message, verify,
};
use base64::{Engine, engine::general_purpose::STANDARD};

const SK_B64: &str = "QEK6Xm/ourxQVlBzaOdVxYBeew8dlQ7dYrqEI60ksmo=";
const PK_B64: &str = "yScViZr67HSpb5mWG/Ij0yCFAmwCqdYB9nxLasej/0g=";

const MESSAGE: &[u8] = b"PRUEBA FIRMA";
const RANDOM: &[u8; 64] = b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
const SEED: &[u8; 32] = b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

fn private_from_b64(s: &str) -> PrivateKey {
    PrivateKey::try_from(STANDARD.decode(s).unwrap().as_slice()).unwrap()
}

fn public_from_b64(s: &str) -> PublicKey {
    PublicKey::try_from(STANDARD.decode(s).unwrap().as_slice()).unwrap()
}

fn signature_from_hex(s: &str) -> Signature {
    Signature::try_from(hex::decode(s).unwrap().as_slice()).unwrap()
}

#[test]
fn seed_a_key_pair() {
    let pair = generate_keypair(SEED);

    assert_eq!(
        STANDARD.encode(pair.private().as_bytes()),
        "QEFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUE="
    );
    assert_eq!(
        STANDARD.encode(pair.public().as_bytes()),
        "ehpOcJvwhaxJSroEabmx7aCrH3ixaqu3n/7akGI+hSI="
    );
}

#[test]
fn reference_private_key_public_half() {
    let sk = private_from_b64(SK_B64);

    assert_eq!(
        STANDARD.encode(sk.public_key().as_bytes()),
        "20rHDhuOi3gMSXUNTrxRQjrr3k0P6TFIFvJlcYME114="
    );
}

#[test]
fn reference_shared_key() {
    let sk = private_from_b64(SK_B64);
    let pk = public_from_b64(PK_B64);

    assert_eq!(
        STANDARD.encode(shared_key(&sk, &pk)),
        "rA58W9r006voe3G8/iZFUgcURjH6DGiLg91tgWfVTXM="
    );

    let pair = generate_keypair(SEED);
    assert_eq!(
        hex::encode(shared_key(pair.private(), &pk)),
        "45ba74d5066c1cf829674ff555a91e1ea53be446407252866ef894a1fbdc362c"
    );
}

#[test]
fn reference_randomized_signature() {
    let sk = private_from_b64(SK_B64);
    let signature = sign(&sk, MESSAGE, Some(RANDOM));

    assert_eq!(
        STANDARD.encode(signature.as_bytes()),
        "bkBPXOD5yf33GHQKgz1Pj93/bL8y8iHgRwpNdxRviVOE3tH5qeONcgWnwaSB9Y8eooZQDxMA8IUIv6QOvJdvDw=="
    );
    assert!(verify(&sk.public_key(), MESSAGE, &signature));
}

#[test]
fn reference_signature_rejected_under_peer_key() {
    let sk = private_from_b64(SK_B64);
    let signature = sign(&sk, MESSAGE, Some(RANDOM));

    assert!(!verify(&public_from_b64(PK_B64), MESSAGE, &signature));
}

#[test]
fn reference_deterministic_signatures() {
    let sk = private_from_b64(SK_B64);

    assert_eq!(
        sign(&sk, MESSAGE, None),
        signature_from_hex(
            "1de829417a1c0e925e6022340c64fb0e8221bc1d048a2c947c6125912f7e02d5\
             5a62645bcc3ef24c4a649a6a6402a3b9f936c762040c690268321e340e53c508"
        )
    );
    assert_eq!(
        sign(&sk, b"", None),
        signature_from_hex(
            "087f2db666ebb35895a6a22c7cfdd0784fe22d0be1aba407b99a3b637c784baf\
             07605c5a6ba9f6983f069f244cd99a1c84d0aa02fa529dc835626c7b04bd1d05"
        )
    );
}

#[test]
fn seed_a_signatures() {
    let pair = generate_keypair(SEED);

    let randomized = sign(pair.private(), MESSAGE, Some(RANDOM));
    assert_eq!(
        randomized,
        signature_from_hex(
            "b41e34cb662fa331187e732e145fe6dcd43039b055f230b0632a62067313aafe\
             9dc208697a0ba3546727e9c9bc2cc24467ead5b52909ddcd9a12f1dc65343083"
        )
    );
    assert!(verify(pair.public(), MESSAGE, &randomized));

    let deterministic = sign(pair.private(), MESSAGE, None);
    assert_eq!(
        deterministic,
        signature_from_hex(
            "e50527c841783db08a890e0e34e8a9f066404a13f97a94c66a4f38993f817f2f\
             af04c963f279570e4c7c536e87a5838f1b10720724f3d5f51b3ac40226895781"
        )
    );
    assert!(verify(pair.public(), MESSAGE, &deterministic));
}

#[test]
fn seed_a_signed_message() {
    let pair = generate_keypair(SEED);
    let signed = sign_message(pair.private(), MESSAGE, Some(RANDOM));

    assert_eq!(
        STANDARD.encode(&signed),
        "tB40y2YvozEYfnMuFF/m3NQwObBV8jCwYypiBnMTqv6dwghpegujVGcn6cm8LMJEZ+rVtSkJ3c2aEvHcZTQwg1BSVUVCQSBGSVJNQQ=="
    );
    assert_eq!(open_message_str(pair.public(), &signed).unwrap(), "PRUEBA FIRMA");
}
