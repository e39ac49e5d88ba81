//! Message padding and block decomposition.
//!
//! MD5 consumes its input as a sequence of 64-byte blocks. The final block is
//! completed by appending a single 0x80 delimiter byte, zero bytes up to the
//! 448 mod 512 bit boundary, and the original message length in bits as an
//! 8-byte little-endian integer. Padding always adds at least 9 bytes and the
//! padded length is always a positive multiple of 64 bytes.

/// Number of bytes in one compression block.
pub(crate) const BLOCK_LEN: usize = 64;

/// Byte offset within the final block where the length field begins.
const LENGTH_OFFSET: usize = 56;

/// Returns `message` with RFC 1321 padding appended.
///
/// The encoded length is the original bit length reduced modulo 2^64. For
/// inputs whose bit length exceeds 2^64 - 1 (unreachable on 64-bit targets)
/// the length field silently wraps, which matches the modular length
/// definition in RFC 1321 rather than treating oversized input as an error.
pub(crate) fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity((message.len() + 1 + 8).div_ceil(BLOCK_LEN) * BLOCK_LEN);
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % BLOCK_LEN != LENGTH_OFFSET {
        padded.push(0);
    }
    padded.extend_from_slice(&bit_len.to_le_bytes());
    padded
}

/// Splits a 64-byte block into sixteen little-endian 32-bit words.
pub(crate) fn block_words(block: &[u8; BLOCK_LEN]) -> [u32; 16] {
    let mut words = [0_u32; 16];
    for (k, word) in words.iter_mut().enumerate() {
        let offset = k * 4;
        *word = u32::from_le_bytes([
            block[offset],
            block[offset + 1],
            block[offset + 2],
            block[offset + 3],
        ]);
    }
    words
}
