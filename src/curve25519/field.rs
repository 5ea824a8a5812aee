//! Finite field arithmetic for Curve25519 / Edwards25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! shared by the Montgomery ladder and the Edwards group law.
//!
//! ## Representation
//!
//! Field elements are sixteen signed 64-bit limbs in radix 2¹⁶:
//!
//! ```text
//! value = Σ limb[i] · 2^(16·i)
//! ```
//!
//! Limbs are kept unreduced between operations. Additions and subtractions
//! work limb by limb without carrying; multiplication folds the high half
//! of its 31-limb product back with the factor 38 (`2²⁵⁶ ≡ 38 mod p`) and
//! then runs two carry passes. Only `to_bytes` produces the canonical
//! representative in `[0, p)`.
//!
//! ## Constant-time behaviour
//!
//! No operation branches on limb values. Conditional logic on secret bits
//! goes through `swap`, which builds an all-ones / all-zeros mask.
//! Exponentiation chains depend only on the fixed exponent.

use std::ops::{Add, Mul, Neg, Sub};

use super::ct::ConstantTimeEq;

/// Field element modulo `2^255 - 19`, sixteen radix-2¹⁶ limbs.
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [i64; 16]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0; 16]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Constant-time conditional swap of two field elements.
    ///
    /// If `condition == 1`, swaps `self` and `rhs`.
    /// If `condition == 0`, does nothing.
    ///
    /// Any other value of `condition` is a caller bug.
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: i64) {
        let mask = -condition;

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let tmp = (*s ^ *r) & mask;
            *s ^= tmp;
            *r ^= tmp;
        }
    }

    /// Decodes a 32-byte little-endian string.
    ///
    /// Bit 255 is ignored. The result is not reduced: inputs in `[p, 2²⁵⁵)`
    /// are accepted and behave as their residue.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> Self {
        let mut limbs = [0i64; 16];

        for (limb, pair) in limbs.iter_mut().zip(input.chunks_exact(2)) {
            *limb = i64::from(pair[0]) | (i64::from(pair[1]) << 8);
        }
        limbs[15] &= 0x7fff;

        FieldElement(limbs)
    }

    /// One carry-propagation pass.
    ///
    /// Each limb is brought into `[0, 2¹⁶)`; the carry out of the top limb
    /// is folded back into limb 0 multiplied by 38. The `+ 2¹⁶ − 1` bias
    /// keeps the arithmetic shift a floor division for negative limbs.
    fn carry(&mut self) {
        let mut c = 1i64;

        for limb in self.0.iter_mut() {
            let v = *limb + c + 65_535;
            c = v >> 16;
            *limb = v - c * 65_536;
        }

        self.0[0] += 38 * (c - 1);
    }

    /// Encodes this element into its canonical 32-byte little-endian form.
    ///
    /// Three carry passes leave a value below `2·p`; two rounds of
    /// "subtract p, keep the result if it did not borrow" then give the
    /// unique representative. The keep/discard choice is a masked swap.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let mut t = *self;
        t.carry();
        t.carry();
        t.carry();

        for _ in 0..2 {
            let mut m = FieldElement::ZERO;

            m.0[0] = t.0[0] - 0xffed;
            for i in 1..15 {
                m.0[i] = t.0[i] - 0xffff - ((m.0[i - 1] >> 16) & 1);
                m.0[i - 1] &= 0xffff;
            }
            m.0[15] = t.0[15] - 0x7fff - ((m.0[14] >> 16) & 1);
            m.0[14] &= 0xffff;

            let borrow = (m.0[15] >> 16) & 1;
            t.swap(&mut m, 1 - borrow);
        }

        let mut out = [0u8; 32];
        for (pair, limb) in out.chunks_exact_mut(2).zip(t.0.iter()) {
            pair[0] = (limb & 0xff) as u8;
            pair[1] = ((limb >> 8) & 0xff) as u8;
        }

        out
    }

    /// Constant-time equality on canonical encodings.
    pub(crate) fn ct_eq(&self, other: &Self) -> bool {
        self.to_bytes().ct_eq(&other.to_bytes())
    }

    /// Least significant bit of the canonical encoding (the "sign" of x in
    /// compressed points).
    pub(crate) fn parity(&self) -> u8 {
        self.to_bytes()[0] & 1
    }

    /// Returns `self²`.
    #[inline(always)]
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Computes `self^(p − 2) = self⁻¹`.
    ///
    /// The exponent `p − 2 = 2²⁵⁵ − 21` has every bit from 253 down to 0
    /// set except bits 2 and 4, so the chain squares 254 times and skips
    /// the multiply exactly at those two positions. Zero maps to zero.
    pub(crate) fn invert(self) -> Self {
        let mut c = self;

        for bit in (0..=253).rev() {
            c = c.square();
            if bit != 2 && bit != 4 {
                c = c * self;
            }
        }

        c
    }

    /// Computes `self^((p − 5) / 8) = self^(2²⁵² − 3)`.
    ///
    /// Bits 250 down to 0 of the exponent are set except bit 1. Used by
    /// square-root extraction when decompressing points.
    pub(crate) fn pow_p58(self) -> Self {
        let mut c = self;

        for bit in (0..=250).rev() {
            c = c.square();
            if bit != 1 {
                c = c * self;
            }
        }

        c
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    /// Limb-wise sum, no carry.
    fn add(self, rhs: FieldElement) -> FieldElement {
        let mut out = self;
        for (o, r) in out.0.iter_mut().zip(rhs.0.iter()) {
            *o += r;
        }
        out
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    /// Limb-wise difference, no borrow. Limbs may go negative.
    fn sub(self, rhs: FieldElement) -> FieldElement {
        let mut out = self;
        for (o, r) in out.0.iter_mut().zip(rhs.0.iter()) {
            *o -= r;
        }
        out
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    /// Schoolbook product with reduction modulo `2²⁵⁵ − 19`.
    ///
    /// Limb `16 + i` of the product weighs `2²⁵⁶ · 2^(16·i)`, and
    /// `2²⁵⁶ ≡ 38`, so it is folded into limb `i` times 38. The first
    /// carry pass can push a carry out of limb 15 that lands back in limb 0,
    /// hence the second pass.
    fn mul(self, rhs: FieldElement) -> FieldElement {
        let a = self.0;
        let b = rhs.0;
        let mut t = [0i64; 31];

        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                t[i + j] += ai * bj;
            }
        }

        for i in 0..15 {
            t[i] += 38 * t[i + 16];
        }

        let mut out = FieldElement::ZERO;
        out.0.copy_from_slice(&t[..16]);
        out.carry();
        out.carry();
        out
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::ZERO - self
    }
}
