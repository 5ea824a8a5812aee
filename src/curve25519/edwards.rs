//! Edwards25519 group operations.
//!
//! The curve is the twisted Edwards form
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! over 𝔽ₚ, `p = 2²⁵⁵ − 19`. Points are kept in extended coordinates
//! `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z`, `x·y = T/Z`; the identity is
//! `(0 : 1 : 1 : 0)`.
//!
//! ## Algorithms
//!
//! - One unified addition formula (valid for doublings and the identity,
//!   no exceptional cases)
//! - Double-and-add over all 256 scalar bits with masked swaps around each
//!   step, so the operation sequence never depends on the scalar
//! - Compression to `y` plus the parity of `x` in bit 255
//! - Decompression through the `(p − 5) / 8` square-root exponent
//!
//! Decompression handles public data only and may branch on it.

use super::constants::{BASE_X, BASE_Y, D, D2, SQRT_M1};
use super::field::FieldElement;

/// Point in extended twisted Edwards coordinates.
#[derive(Clone, Copy)]
pub(crate) struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The standard base point with its `T = X·Y` term.
    pub(crate) fn base() -> Self {
        Self {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::ONE,
            t: BASE_X * BASE_Y,
        }
    }

    /// Returns `self + q`.
    ///
    /// Unified extended-coordinate addition with `k = 2·d`:
    ///
    /// ```text
    /// A = (Y1 − X1)(Y2 − X2)    B = (Y1 + X1)(Y2 + X2)
    /// C = T1 · 2d · T2          D = 2 · Z1 · Z2
    /// E = B − A   F = D − C   G = D + C   H = B + A
    /// X3 = E·F    Y3 = G·H    Z3 = F·G    T3 = E·H
    /// ```
    pub(crate) fn add(&self, q: &Self) -> Self {
        let a = (self.y - self.x) * (q.y - q.x);
        let b = (self.x + self.y) * (q.x + q.y);
        let c = self.t * q.t * D2;
        let zz = self.z * q.z;
        let d = zz + zz;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        Self {
            x: e * f,
            y: h * g,
            z: g * f,
            t: e * h,
        }
    }

    /// Returns `2 · self`.
    #[inline]
    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// Constant-time conditional swap of all four coordinates.
    pub(crate) fn swap(&mut self, other: &mut Self, condition: i64) {
        self.x.swap(&mut other.x, condition);
        self.y.swap(&mut other.y, condition);
        self.z.swap(&mut other.z, condition);
        self.t.swap(&mut other.t, condition);
    }

    /// Compresses the point to 32 bytes: canonical affine `y` with the
    /// parity of affine `x` in the top bit.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        let mut out = y.to_bytes();
        out[31] ^= x.parity() << 7;
        out
    }

    /// Constant-time equality on compressed encodings.
    #[cfg(test)]
    pub(crate) fn ct_eq(&self, other: &Self) -> bool {
        use super::ct::ConstantTimeEq;

        self.to_bytes().ct_eq(&other.to_bytes())
    }

    /// Computes `s · self` for a 256-bit little-endian scalar.
    ///
    /// Scans from bit 255 down to bit 0. Every step performs the same
    /// swap, add, double, swap sequence; only the swap masks depend on the
    /// bit.
    pub(crate) fn mul(&self, s: &[u8; 32]) -> Self {
        let mut p = Self::IDENTITY;
        let mut q = *self;

        for pos in (0..256usize).rev() {
            let bit = i64::from((s[pos >> 3] >> (pos & 7)) & 1);

            p.swap(&mut q, bit);
            q = q.add(&p);
            p = p.double();
            p.swap(&mut q, bit);
        }

        p
    }

    /// Computes `s · B` for the standard base point `B`.
    pub(crate) fn mul_base(s: &[u8; 32]) -> Self {
        Self::base().mul(s)
    }

    /// Decompresses `bytes` and returns the **negation** of the encoded
    /// point, or `None` if no curve point has that encoding.
    ///
    /// From `y`, the curve equation gives `x² = (y² − 1) / (d·y² + 1) = u/v`.
    /// The candidate root is `x = u·v³·(u·v⁷)^((p − 5)/8)`; if `v·x² ≠ u` the
    /// other candidate is `x·√−1`, and if that fails as well `y` is not on
    /// the curve. The root whose parity equals the encoded sign bit is then
    /// negated, which yields `−P` directly.
    pub(crate) fn from_bytes_negated(bytes: &[u8; 32]) -> Option<Self> {
        let z = FieldElement::ONE;
        let y = FieldElement::from_bytes(bytes);

        let y2 = y.square();
        let u = y2 - z;
        let v = y2 * D + z;

        let v2 = v.square();
        let v4 = v2.square();
        let v6 = v4 * v2;

        let mut x = (v6 * u * v).pow_p58() * u * v * v * v;

        if !(x.square() * v).ct_eq(&u) {
            x = x * SQRT_M1;
        }

        if !(x.square() * v).ct_eq(&u) {
            return None;
        }

        if x.parity() == bytes[31] >> 7 {
            x = -x;
        }

        Some(Self {
            x,
            y,
            z,
            t: x * y,
        })
    }
}
