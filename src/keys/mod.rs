//! Key material and Diffie–Hellman key agreement.
//!
//! ## Core
//!
//! The `core` module defines the key types, deterministic key-pair
//! generation from a caller-supplied seed, and X25519 shared-secret
//! derivation. Entropy never originates here.
//!
//! ## Conversion
//!
//! The `convert` module translates a Curve25519 key into the Edwards form
//! the signature scheme needs. It is internal: signing and verification
//! call it, callers never have to.

mod core;

pub(crate) mod convert;

// Re-export the public API at the `keys` level.
pub use self::core::*;
