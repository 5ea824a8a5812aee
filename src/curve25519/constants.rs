//! Fixed constants of Curve25519 / Edwards25519.
//!
//! Field constants are stored as sixteen radix-2¹⁶ limbs, least
//! significant first, exactly as `FieldElement` holds them.

use super::field::FieldElement;

/// Edwards curve constant `d = −121665 / 121666`.
pub(crate) const D: FieldElement = FieldElement([
    0x78a3, 0x1359, 0x4dca, 0x75eb, 0xd8ab, 0x4141, 0x0a4d, 0x0070, //
    0xe898, 0x7779, 0x4079, 0x8cc7, 0xfe73, 0x2b6f, 0x6cee, 0x5203,
]);

/// `2·d`, used by the unified addition formula.
pub(crate) const D2: FieldElement = FieldElement([
    0xf159, 0x26b2, 0x9b94, 0xebd6, 0xb156, 0x8283, 0x149a, 0x00e0, //
    0xd130, 0xeef3, 0x80f2, 0x198e, 0xfce7, 0x56df, 0xd9dc, 0x2406,
]);

/// Affine x-coordinate of the Edwards base point.
pub(crate) const BASE_X: FieldElement = FieldElement([
    0xd51a, 0x8f25, 0x2d60, 0xc956, 0xa7b2, 0x9525, 0xc760, 0x692c, //
    0xdc5c, 0xfdd6, 0xe231, 0xc0a4, 0x53fe, 0xcd6e, 0x36d3, 0x2169,
]);

/// Affine y-coordinate of the Edwards base point (`4/5`).
pub(crate) const BASE_Y: FieldElement = FieldElement([
    0x6658, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, //
    0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666,
]);

/// `√−1 mod p`, the correction factor for the second square-root candidate.
pub(crate) const SQRT_M1: FieldElement = FieldElement([
    0xa0b0, 0x4a0e, 0x1b27, 0xc4ee, 0xe478, 0xad2f, 0x1806, 0x2f43, //
    0xd7a7, 0x3dfb, 0x0099, 0x2b4d, 0xdf0b, 0x4fc1, 0x2480, 0x2b83,
]);

/// `(A − 2) / 4` for the Montgomery curve `v² = u³ + 486662·u² + u`,
/// i.e. `121665`.
pub(crate) const A24: FieldElement = FieldElement([
    0xdb41, 1, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0,
]);

/// Little-endian u-coordinate of the Montgomery base point (`u = 9`).
pub(crate) const MONTGOMERY_BASE_U: [u8; 32] = {
    let mut u = [0u8; 32];
    u[0] = 9;
    u
};

/// Group order `L = 2²⁵² + 27742317777372353535851937790883648493`, one
/// radix-2⁸ digit per entry, least significant first.
pub(crate) const L: [i64; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, //
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0x10,
];
