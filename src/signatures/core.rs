//! Curve25519 signatures.
//!
//! Signatures are Ed25519-shaped (`R ‖ S`, 64 bytes) but keyed by a
//! Curve25519 key pair. The signer converts its secret to Edwards form,
//! signs, and stores the sign bit of its Edwards public key in the unused
//! top bit of `S`. The verifier converts the Montgomery public key back and
//! reattaches that bit.
//!
//! The scheme is:
//!
//! ```text
//! a  = clamp(secret)              A = a·B   (packed, sign bit included)
//! r  = H(a ‖ M) mod L                               deterministic
//! r  = H(0xfe ‖ 0xff×31 ‖ a ‖ M ‖ Z) mod L          with 64 random bytes Z
//! R  = r·B
//! k  = H(R ‖ A ‖ M) mod L
//! S  = (r + k·a) mod L
//! σ  = R ‖ S,  σ[63] |= sign(A)
//! ```
//!
//! Verification accepts when `pack(S·B − k·A) == R`.
//!
//! Every function here is a pure computation over its arguments. Nothing
//! is cached between calls.

use std::fmt;

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::curve25519::ct::ConstantTimeEq;
use crate::curve25519::edwards::EdwardsPoint;
use crate::curve25519::scalar::Scalar;
use crate::error::{Error, Result, fixed_size};
use crate::hash::sha512;
use crate::keys::convert::{EdwardsSecret, edwards_y_from_montgomery};
use crate::keys::{PrivateKey, PublicKey};

/// Size of a signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Size of the optional signing randomness in bytes.
pub const RANDOM_SIZE: usize = 64;

/// Prefix of the randomized nonce hash. No deterministic nonce input can
/// start with it: those begin with a clamped scalar, whose first byte has
/// its low three bits clear.
const RANDOM_NONCE_PREFIX: [u8; 32] = {
    let mut prefix = [0xff; 32];
    prefix[0] = 0xfe;
    prefix
};

/// A 64-byte signature `R ‖ S` with the signer's sign bit in bit 7 of the
/// last byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    /// Wraps raw signature bytes. Validity is only established by
    /// [`verify`].
    #[inline]
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }

    /// Borrows the raw encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        fixed_size(bytes, "signature").map(Self)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// `H(a ‖ M) mod L`.
fn deterministic_nonce(scalar: &[u8; 32], message: &[u8]) -> Scalar {
    let mut input = Zeroizing::new(Vec::with_capacity(32 + message.len()));
    input.extend_from_slice(scalar);
    input.extend_from_slice(message);

    let mut digest = sha512(&input);
    let nonce = Scalar::reduce(&digest);
    digest.zeroize();

    nonce
}

/// `H(0xfe ‖ 0xff×31 ‖ a ‖ M ‖ Z) mod L`.
///
/// A predictable `Z` degrades this to the deterministic construction's
/// strength, never below it.
fn randomized_nonce(scalar: &[u8; 32], message: &[u8], random: &[u8; RANDOM_SIZE]) -> Scalar {
    let mut input = Zeroizing::new(Vec::with_capacity(64 + message.len() + RANDOM_SIZE));
    input.extend_from_slice(&RANDOM_NONCE_PREFIX);
    input.extend_from_slice(scalar);
    input.extend_from_slice(message);

    let suffix = input.len();
    input.extend_from_slice(random);

    let mut digest = sha512(&input);
    let nonce = Scalar::reduce(&digest);

    digest.zeroize();
    input[suffix..].zeroize();

    nonce
}

/// `H(R ‖ A ‖ M) mod L`.
fn challenge(r: &[u8; 32], public: &[u8; 32], message: &[u8]) -> Scalar {
    let mut input = Vec::with_capacity(64 + message.len());
    input.extend_from_slice(r);
    input.extend_from_slice(public);
    input.extend_from_slice(message);

    Scalar::reduce(&sha512(&input))
}

/// Signs `message` with a Curve25519 private key.
///
/// Without `random` the signature is deterministic in `(key, message)`.
/// With `random`, the 64 bytes are mixed into the nonce under a separate
/// domain; their quality is not checked.
pub fn sign(private: &PrivateKey, message: &[u8], random: Option<&[u8; RANDOM_SIZE]>) -> Signature {
    let edwards = EdwardsSecret::from_curve25519(private.as_bytes());

    let mut r = match random {
        None => deterministic_nonce(edwards.scalar(), message),
        Some(random) => randomized_nonce(edwards.scalar(), message, random),
    };

    let big_r = EdwardsPoint::mul_base(&r.to_bytes()).to_bytes();
    let k = challenge(&big_r, edwards.public(), message);
    let s = Scalar::mul_add(&k, edwards.scalar(), &r);
    r.0.zeroize();

    let mut signature = [0u8; SIGNATURE_SIZE];
    signature[..32].copy_from_slice(&big_r);
    signature[32..].copy_from_slice(&s.to_bytes());

    // S < L < 2²⁵³, so the top bit of the last byte is free.
    signature[63] |= edwards.sign_bit();

    trace!(len = message.len(), randomized = random.is_some(), "signed message");

    Signature(signature)
}

/// Core verification; `true` if `signature` is valid for `message`.
fn check(public: &PublicKey, message: &[u8], signature: &[u8; SIGNATURE_SIZE]) -> bool {
    let mut edwards_public = edwards_y_from_montgomery(public.as_bytes());
    edwards_public[31] |= signature[63] & 0x80;

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..]);
    s[31] &= 0x7f;

    let Some(neg_a) = EdwardsPoint::from_bytes_negated(&edwards_public) else {
        return false;
    };

    let k = challenge(&r, &edwards_public, message);

    let expected_r = neg_a
        .mul(&k.to_bytes())
        .add(&EdwardsPoint::mul_base(&s))
        .to_bytes();

    expected_r.ct_eq(&r)
}

/// Verifies `signature` over `message` under a Curve25519 public key.
///
/// Returns `false` for forged or corrupted signatures, wrong keys, and
/// public keys that do not correspond to a curve point alike.
pub fn verify(public: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let valid = check(public, message, &signature.0);

    if valid {
        trace!(len = message.len(), "signature verified");
    } else {
        debug!(len = message.len(), "signature rejected");
    }

    valid
}

/// Signs `message` and returns `signature ‖ message`.
pub fn sign_message(
    private: &PrivateKey,
    message: &[u8],
    random: Option<&[u8; RANDOM_SIZE]>,
) -> Vec<u8> {
    let signature = sign(private, message, random);

    let mut signed = Vec::with_capacity(SIGNATURE_SIZE + message.len());
    signed.extend_from_slice(signature.as_bytes());
    signed.extend_from_slice(message);
    signed
}

/// Splits `signature ‖ message`.
fn split_signed(signed: &[u8]) -> Result<(Signature, &[u8])> {
    if signed.len() < SIGNATURE_SIZE {
        debug!(len = signed.len(), "signed message shorter than a signature");
        return Err(Error::SignedMessageTooShort {
            minimum: SIGNATURE_SIZE,
            actual: signed.len(),
        });
    }

    let (signature, message) = signed.split_at(SIGNATURE_SIZE);
    Ok((Signature::try_from(signature)?, message))
}

/// Verifies `signature ‖ message` and returns the message.
///
/// An empty message (exactly 64 bytes of input) is valid.
pub fn open_message(public: &PublicKey, signed: &[u8]) -> Result<Vec<u8>> {
    let (signature, message) = split_signed(signed)?;

    if !verify(public, message, &signature) {
        return Err(Error::InvalidSignature);
    }

    Ok(message.to_vec())
}

/// Verifies `signature ‖ message` and copies the message into `out`,
/// returning its length.
///
/// On any error `out` is zeroed in full, so ignoring the result never
/// exposes unverified or stale bytes. On success bytes of `out` past the
/// returned length are left untouched.
pub fn open_message_into(public: &PublicKey, signed: &[u8], out: &mut [u8]) -> Result<usize> {
    let opened = split_signed(signed).and_then(|(signature, message)| {
        if out.len() < message.len() {
            return Err(Error::OutputBufferTooSmall {
                required: message.len(),
                actual: out.len(),
            });
        }

        if !verify(public, message, &signature) {
            return Err(Error::InvalidSignature);
        }

        out[..message.len()].copy_from_slice(message);
        Ok(message.len())
    });

    if opened.is_err() {
        out.zeroize();
    }

    opened
}

/// Verifies `signature ‖ message` and returns the message as text.
pub fn open_message_str(public: &PublicKey, signed: &[u8]) -> Result<String> {
    Ok(String::from_utf8(open_message(public, signed)?)?)
}
