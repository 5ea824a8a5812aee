//! Curve25519 arithmetic engine.
//!
//! Everything below the public key and signature API lives here: field
//! arithmetic over `2²⁵⁵ − 19`, the Montgomery ladder used for key
//! agreement, the Edwards group law used for signatures, and scalar
//! reduction modulo the group order.
//!
//! The layering is strictly bottom-up: `field` depends on nothing but
//! `ct`; `montgomery` and `edwards` depend on `field`; `scalar` depends only
//! on the group order constant.
//!
//! All of it is crate-private. Callers go through `keys` and `signatures`.

/// Fixed curve and group constants.
pub(crate) mod constants;

/// Constant-time byte comparison.
pub(crate) mod ct;

/// Edwards point arithmetic, scalar multiplication and (de)compression.
pub(crate) mod edwards;

/// Arithmetic in GF(2²⁵⁵ − 19) on sixteen radix-2¹⁶ limbs.
pub(crate) mod field;

/// X25519 Montgomery ladder.
pub(crate) mod montgomery;

/// Scalars modulo the group order, clamping, and `r + k·a`.
pub(crate) mod scalar;
