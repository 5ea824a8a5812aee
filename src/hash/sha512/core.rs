//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a complete, one-shot SHA-512 hashing function
//!
//! Signing and verification always hash a complete buffer, so no
//! incremental interface is offered.

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// Size of a SHA-512 message block in bytes.
pub const BLOCK_SIZE: usize = 128;

/// Size of a SHA-512 digest in bytes.
pub const DIGEST_SIZE: usize = 64;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Only the first sixteen schedule words are loaded here; the rest are
///   expanded by `all_rounds`.
/// - Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; BLOCK_SIZE], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    #[cfg(not(feature = "speed"))]
    all_rounds(state, w);

    #[cfg(feature = "speed")]
    all_rounds(state, &mut w);
}

/// Computes the SHA-512 hash of the given input.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
///
/// # Notes
/// - Padding appends `0x80`, zero-fills, and stores the message length in
///   bits as a 128-bit big-endian integer in the last 16 bytes.
/// - When fewer than 17 bytes remain in the final block, one extra block
///   is compressed.
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut state = H512_INIT;
    let mut block = [0u8; BLOCK_SIZE];

    let mut chunks = input.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        block.copy_from_slice(chunk);
        compress(&block, &mut state);
    }

    let tail = chunks.remainder();
    let rem = tail.len();

    block = [0u8; BLOCK_SIZE];
    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    // The length field needs the last 16 bytes of a block.
    if rem >= BLOCK_SIZE - 16 {
        compress(&block, &mut state);
        block = [0u8; BLOCK_SIZE];
    }

    let bit_len = (input.len() as u128) << 3;
    block[BLOCK_SIZE - 16..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; DIGEST_SIZE];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}
