//! Curve25519 key material.
//!
//! One 32-byte secret serves both Diffie–Hellman agreement (as an X25519
//! scalar) and signing (through its Edwards counterpart, see
//! [`super::convert`]). The public key is always the Montgomery
//! u-coordinate; it carries no sign information.

use std::fmt;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve25519::montgomery;
use crate::curve25519::scalar::clamp;
use crate::error::{Error, fixed_size};

/// Size of a key-generation seed in bytes.
pub const SEED_SIZE: usize = 32;

/// Size of a public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a private key in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of an X25519 shared secret in bytes.
pub const SHARED_KEY_SIZE: usize = 32;

/// A Curve25519 public key: the little-endian Montgomery u-coordinate with
/// bit 255 cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wraps raw public key bytes. No validation is performed; X25519
    /// accepts every u-coordinate and signature verification rejects keys
    /// that do not map to a curve point.
    #[inline]
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Borrows the raw encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        fixed_size(bytes, "public key").map(Self)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A Curve25519 private key.
///
/// Holds the 32 secret bytes as supplied. Every operation clamps them
/// before use, so a raw seed and its clamped form behave identically.
/// The bytes are wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Wraps raw private key bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns a copy of the secret bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.0
    }

    /// Borrows the secret bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }

    /// Derives the matching public key (`clamp(k) · 9`, bit 255 cleared).
    pub fn public_key(&self) -> PublicKey {
        let mut public = montgomery::mul_base(&self.0);
        public[31] &= 0x7f;
        PublicKey(public)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        fixed_size(bytes, "private key").map(Self)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A public/private key pair.
///
/// The engine builds the pair once and hands it to the caller; storing or
/// transporting it is the caller's business.
#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Deterministically derives a key pair from a 32-byte seed.
    ///
    /// The private key is the clamped seed; the public key is the X25519
    /// base-point multiple of that scalar.
    pub fn from_seed(seed: &[u8; SEED_SIZE]) -> Self {
        let private = PrivateKey(clamp(seed));
        let public = private.public_key();

        trace!("derived key pair from seed");

        Self { public, private }
    }

    /// The public half.
    #[inline]
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// The private half.
    #[inline]
    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    /// Splits the pair into its halves.
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }
}

/// Generates a key pair from caller-supplied seed bytes.
///
/// The seed must come from a cryptographically secure source; the same
/// seed always yields the same pair.
pub fn generate_keypair(seed: &[u8; SEED_SIZE]) -> KeyPair {
    KeyPair::from_seed(seed)
}

/// Computes the X25519 shared secret between a local private key and a
/// peer public key.
///
/// `shared_key(a, B) == shared_key(b, A)` for any two pairs. Peer keys are
/// not validated; low-order points give the all-zero secret, as X25519
/// specifies.
pub fn shared_key(private: &PrivateKey, public: &PublicKey) -> [u8; SHARED_KEY_SIZE] {
    montgomery::mul(private.as_bytes(), public.as_bytes())
}
