//! Error types.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors reported by key, signature and signed-message operations.
///
/// Decoding failures and arithmetic mismatches during verification are
/// deliberately folded into [`Error::InvalidSignature`].
#[derive(Debug, Error)]
pub enum Error {
    /// A fixed-size parameter (key, seed, signature, randomness) has the
    /// wrong length.
    #[error("invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Which parameter was rejected.
        what: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A signed message is too short to contain a signature.
    #[error("signed message too short: need at least {minimum} bytes, got {actual}")]
    SignedMessageTooShort {
        /// Signature length in bytes.
        minimum: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The caller's output buffer cannot hold the opened message.
    #[error("output buffer too small: need {required} bytes, got {actual}")]
    OutputBufferTooSmall {
        /// Payload length in bytes.
        required: usize,
        /// Buffer length that was supplied.
        actual: usize,
    },

    /// The signature does not verify under the given public key.
    #[error("signature verification failed")]
    InvalidSignature,

    /// A verified payload is not valid UTF-8.
    #[error("verified message is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Copies `bytes` into a fixed-size array, reporting a length mismatch as
/// [`Error::InvalidLength`] for the parameter named `what`.
pub(crate) fn fixed_size<const N: usize>(bytes: &[u8], what: &'static str) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| Error::InvalidLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}
