//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-512, the hash behind signature nonces and
//! challenges, with a pure-Rust implementation.

pub mod sha512;

/// Re-export of the SHA-512 convenience function.
pub use sha512::core::sha512;
