//! Curve25519 key agreement and signatures from a single key pair.
//!
//! One 32-byte Curve25519 private key is used both for X25519
//! Diffie–Hellman and for Ed25519-style signatures. Signing converts the
//! Montgomery key to its Edwards counterpart internally and records the
//! sign bit of the Edwards public key inside the signature, so the
//! verifier only ever needs the Montgomery public key.
//!
//! # Module overview
//!
//! - `keys`  
//!   Key types, deterministic key-pair generation from a caller-supplied
//!   seed, and X25519 shared-secret computation.
//!
//! - `signatures`  
//!   Detached signatures with optional 64-byte signing randomness, and the
//!   combined `signature ‖ message` format with its opening functions.
//!
//! - `hash`  
//!   SHA-512, used for nonces and challenges and exposed for callers that
//!   need the same digest.
//!
//! - `error`  
//!   The crate's error type.
//!
//! Field, group and scalar arithmetic live in a private `curve25519`
//! module and are not part of the API.
//!
//! # Design goals
//!
//! - Operations on secrets never branch or index on secret bits
//! - Secret intermediates are wiped once a call returns
//! - No global state; every function is a pure computation
//! - The caller supplies all randomness
//!
//! # Example
//!
//! ```
//! use axlsign::{generate_keypair, open_message, shared_key, sign_message};
//!
//! let alice = generate_keypair(&[7u8; 32]);
//! let bob = generate_keypair(&[9u8; 32]);
//!
//! assert_eq!(
//!     shared_key(alice.private(), bob.public()),
//!     shared_key(bob.private(), alice.public()),
//! );
//!
//! let signed = sign_message(alice.private(), b"hello", None);
//! assert_eq!(open_message(alice.public(), &signed).unwrap(), b"hello");
//! ```

mod curve25519;

pub mod error;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use error::{Error, Result};
pub use keys::{
    KeyPair, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, PrivateKey, PublicKey, SEED_SIZE, SHARED_KEY_SIZE,
    generate_keypair, shared_key,
};
pub use signatures::{
    RANDOM_SIZE, SIGNATURE_SIZE, Signature, open_message, open_message_into, open_message_str,
    sign, sign_message, verify,
};
