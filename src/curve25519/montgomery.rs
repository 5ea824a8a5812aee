//! X25519 scalar multiplication on the Montgomery form of Curve25519.
//!
//! A single ladder serves both key derivation (`mul_base`) and shared
//! secret agreement (`mul`), so there is exactly one constant-time
//! multiply to audit.

use super::constants::{A24, MONTGOMERY_BASE_U};
use super::field::FieldElement;
use super::scalar::clamp;

/// Computes the u-coordinate of `k · P` where `P` has u-coordinate `u`.
///
/// ## Algorithm
///
/// 1. Clamp `k`.
/// 2. Decode `u` (bit 255 ignored).
/// 3. Run 255 ladder steps, bit 254 down to bit 0. Each step swaps the two
///    running projective points on the current scalar bit, performs one
///    combined differential addition and doubling, and swaps back.
/// 4. Return `X / Z` packed canonically.
///
/// The swaps are masked, so the sequence of field operations is the same
/// for every scalar. Low-order inputs produce the all-zero output, which is
/// returned unchanged.
pub(crate) fn mul(k: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let e = clamp(k);
    let x1 = FieldElement::from_bytes(u);

    let mut a = FieldElement::ONE;
    let mut b = x1;
    let mut c = FieldElement::ZERO;
    let mut d = FieldElement::ONE;

    for pos in (0..=254usize).rev() {
        let bit = i64::from((e[pos >> 3] >> (pos & 7)) & 1);

        a.swap(&mut b, bit);
        c.swap(&mut d, bit);

        let mut t = a + c;
        a = a - c;
        c = b + d;
        b = b - d;
        d = t.square();
        let f = a.square();
        a = c * a;
        c = b * t;
        t = a + c;
        a = a - c;
        b = a.square();
        c = d - f;
        a = c * A24;
        a = a + d;
        c = c * a;
        a = d * f;
        d = b * x1;
        b = t.square();

        a.swap(&mut b, bit);
        c.swap(&mut d, bit);
    }

    (a * c.invert()).to_bytes()
}

/// Computes `k · 9`, the public u-coordinate for secret `k`.
pub(crate) fn mul_base(k: &[u8; 32]) -> [u8; 32] {
    mul(k, &MONTGOMERY_BASE_U)
}
