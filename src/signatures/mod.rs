//! Curve25519 signatures.
//!
//! Signing and verification operate on the same key pair used for X25519
//! agreement. The Edwards form of the key only ever exists inside a single
//! call. Besides detached signatures the module provides the combined
//! `signature ‖ message` format through [`sign_message`] and the
//! `open_message*` family.

mod core;

pub use self::core::*;
