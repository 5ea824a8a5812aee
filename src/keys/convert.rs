//! Montgomery ↔ Edwards key conversion.
//!
//! Curve25519 and Edwards25519 are birationally equivalent:
//!
//! ```text
//! y = (u − 1) / (u + 1)        u = (1 + y) / (1 − y)
//! ```
//!
//! A Montgomery u-coordinate determines `y` but not the sign of `x`. The
//! signer therefore computes its Edwards public key itself and ships the
//! sign bit in the top bit of signature byte 63; the verifier restores it
//! into the converted key before decompressing.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve25519::edwards::EdwardsPoint;
use crate::curve25519::field::FieldElement;
use crate::curve25519::scalar::clamp;

/// Edwards view of a Curve25519 secret key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct EdwardsSecret {
    scalar: [u8; 32],
    public: [u8; 32],
}

impl EdwardsSecret {
    /// Clamps `secret` exactly as X25519 does and computes the compressed
    /// Edwards public key `clamp(secret) · B`, sign bit included.
    pub(crate) fn from_curve25519(secret: &[u8; 32]) -> Self {
        let scalar = clamp(secret);
        let public = EdwardsPoint::mul_base(&scalar).to_bytes();

        Self { scalar, public }
    }

    /// The clamped secret scalar (not reduced modulo L).
    pub(crate) fn scalar(&self) -> &[u8; 32] {
        &self.scalar
    }

    /// The compressed Edwards public key.
    pub(crate) fn public(&self) -> &[u8; 32] {
        &self.public
    }

    /// The parity bit of `x`, positioned as bit 7 (`0x00` or `0x80`).
    pub(crate) fn sign_bit(&self) -> u8 {
        self.public[31] & 0x80
    }
}

/// Maps a Montgomery u-coordinate to the Edwards y-coordinate encoding.
///
/// The result has bit 255 clear; the caller inserts the sign bit.
pub(crate) fn edwards_y_from_montgomery(u: &[u8; 32]) -> [u8; 32] {
    let u = FieldElement::from_bytes(u);
    let one = FieldElement::ONE;

    ((u - one) * (u + one).invert()).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve25519::montgomery;

    #[test]
    fn converted_public_key_matches_edwards_derivation() {
        for fill in [0x00u8, 0x41, 0x9c, 0xff] {
            let secret = [fill; 32];
            let u = montgomery::mul_base(&secret);
            let edwards = EdwardsSecret::from_curve25519(&secret);

            let mut expected = *edwards.public();
            expected[31] &= 0x7f;

            assert_eq!(edwards_y_from_montgomery(&u), expected, "fill {fill:#x}");
        }
    }

    #[test]
    fn inverse_map_recovers_u() {
        let secret = [0x17u8; 32];
        let u = montgomery::mul_base(&secret);
        let y = FieldElement::from_bytes(&edwards_y_from_montgomery(&u));
        let one = FieldElement::ONE;

        let back = (one + y) * (one - y).invert();
        assert_eq!(back.to_bytes(), u);
    }

    #[test]
    fn sign_bit_is_isolated() {
        let edwards = EdwardsSecret::from_curve25519(&[0x41; 32]);
        assert_eq!(edwards.sign_bit() & 0x7f, 0);
    }
}
