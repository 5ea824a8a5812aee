//! Scalars modulo the Edwards25519 group order.
//!
//! ```text
//! L = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars are stored as 32 little-endian bytes. Nothing here enforces
//! reduction on construction; `reduce` and `mul_add` are the only producers
//! of reduced values and are what signing feeds into the group.
//!
//! ## Reduction
//!
//! Wide values are handled as sixty-four signed radix-2⁸ digits. Digits 63
//! down to 32 are eliminated one at a time by subtracting `digit · 2^(8·i)`
//! worth of multiples of `L` from a 20-digit window below them (`L`'s low
//! half spans 16 digits; its `2²⁵²` term is what cancels the digit). A last
//! pass removes the multiple of `L` still hiding in the top nibble of digit
//! 31 and renormalizes every digit into `[0, 255]`. The procedure is fixed
//! and data-independent in shape.

use super::constants::L;

/// A 256-bit scalar, little-endian.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scalar(pub(crate) [u8; 32]);

/// Applies Curve25519 clamping to secret scalar bytes.
///
/// Clears the three low bits (cofactor), clears bit 255 and sets bit 254 so
/// every secret has the same bit length.
pub(crate) fn clamp(bytes: &[u8; 32]) -> [u8; 32] {
    let mut out = *bytes;
    out[0] &= 248;
    out[31] &= 127;
    out[31] |= 64;
    out
}

/// Reduces sixty-four signed radix-2⁸ digits modulo `L`.
///
/// Digits may exceed a byte (products of `mul_add` reach roughly 2²¹); the
/// input is consumed as scratch space.
fn reduce_digits(x: &mut [i64; 64]) -> [u8; 32] {
    for i in (32..64).rev() {
        let mut carry = 0i64;
        let mut j = i - 32;

        while j < i - 12 {
            x[j] += carry - 16 * x[i] * L[j - (i - 32)];
            carry = (x[j] + 128) >> 8;
            x[j] -= carry * 256;
            j += 1;
        }

        x[j] += carry;
        x[i] = 0;
    }

    let top = x[31] >> 4;
    let mut carry = 0i64;
    for (digit, l) in x.iter_mut().zip(L.iter()) {
        *digit += carry - top * l;
        carry = *digit >> 8;
        *digit &= 255;
    }

    for (digit, l) in x.iter_mut().zip(L.iter()) {
        *digit -= carry * l;
    }

    let mut out = [0u8; 32];
    for i in 0..32 {
        x[i + 1] += x[i] >> 8;
        out[i] = (x[i] & 255) as u8;
    }

    out
}

impl Scalar {
    /// Returns the 32-byte little-endian encoding.
    #[inline]
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Reduces a 512-bit little-endian integer (a SHA-512 digest) modulo
    /// `L`.
    pub(crate) fn reduce(wide: &[u8; 64]) -> Self {
        let mut x = [0i64; 64];
        for (digit, &byte) in x.iter_mut().zip(wide.iter()) {
            *digit = i64::from(byte);
        }

        Scalar(reduce_digits(&mut x))
    }

    /// Computes `(r + k·a) mod L`.
    ///
    /// `a` may be any 256-bit value (a clamped secret is not reduced); `k`
    /// and `r` are expected to be reduced already. The product is
    /// accumulated digit-wise in a widened buffer and reduced once.
    pub(crate) fn mul_add(k: &Scalar, a: &[u8; 32], r: &Scalar) -> Self {
        let mut x = [0i64; 64];

        for (digit, &byte) in x.iter_mut().zip(r.0.iter()) {
            *digit = i64::from(byte);
        }

        for (i, &ki) in k.0.iter().enumerate() {
            for (j, &aj) in a.iter().enumerate() {
                x[i + j] += i64::from(ki) * i64::from(aj);
            }
        }

        Scalar(reduce_digits(&mut x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_bytes() -> [u8; 32] {
        let mut out = [0u8; 32];
        for (o, &l) in out.iter_mut().zip(L.iter()) {
            *o = l as u8;
        }
        out
    }

    fn wide(low: &[u8; 32]) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(low);
        out
    }

    #[test]
    fn small_values_are_untouched() {
        let mut n = [0u8; 32];
        n[0] = 42;
        n[5] = 7;
        assert_eq!(Scalar::reduce(&wide(&n)).to_bytes(), n);
    }

    #[test]
    fn group_order_reduces_to_zero() {
        assert_eq!(Scalar::reduce(&wide(&l_bytes())).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn order_plus_one_reduces_to_one() {
        let mut l1 = l_bytes();
        l1[0] += 1;

        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(Scalar::reduce(&wide(&l1)).to_bytes(), one);
    }

    #[test]
    fn all_ones_input_is_reduced_below_order() {
        // (2^512 - 1) mod L
        let expected = [
            0x00, 0x0f, 0x9c, 0x44, 0xe3, 0x11, 0x06, 0xa4, 0x47, 0x93, 0x85, 0x68, 0xa7, 0x1b,
            0x0e, 0xd0, 0x65, 0xbe, 0xf5, 0x17, 0xd2, 0x73, 0xec, 0xce, 0x3d, 0x9a, 0x30, 0x7c,
            0x1b, 0x41, 0x99, 0x03,
        ];
        assert_eq!(Scalar::reduce(&[0xff; 64]).to_bytes(), expected);
    }

    #[test]
    fn mul_add_matches_reduce_of_product() {
        // k = 2, a = L - 1, r = 3  =>  2(L - 1) + 3 = 2L + 1 = 1 mod L
        let mut k = [0u8; 32];
        k[0] = 2;
        let mut a = l_bytes();
        a[0] -= 1;
        let mut r = [0u8; 32];
        r[0] = 3;

        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(Scalar::mul_add(&Scalar(k), &a, &Scalar(r)).to_bytes(), one);
    }

    #[test]
    fn clamp_fixes_bit_pattern() {
        let clamped = clamp(&[0xff; 32]);
        assert_eq!(clamped[0], 0xf8);
        assert_eq!(clamped[31], 0x7f);

        let clamped = clamp(&[0x00; 32]);
        assert_eq!(clamped[0], 0x00);
        assert_eq!(clamped[31], 0x40);
    }
}
