//! Incremental MD5 hasher.

use core::fmt;

use crate::compress::compress;
use crate::consts::INIT;
use crate::padding::BLOCK_LEN;
use crate::Digest;

/// Serializes a final chaining state as the 16-byte digest.
///
/// The four accumulator words are emitted little-endian, A first.
pub(crate) fn encode(state: [u32; 4]) -> Digest {
    let mut digest = [0_u8; 16];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    digest
}

/// Streaming MD5 hasher.
///
/// Buffers input until a full 64-byte block is available, folds complete
/// blocks through the compression function as they arrive, and applies the
/// final padding in [`finalize`](Self::finalize). Feeding the same bytes in
/// any chunking produces the same digest as the one-shot [`digest`] helper.
///
/// Each hasher owns its entire state, so independent computations can run on
/// any number of threads without locking.
///
/// The message length is tracked modulo 2^64 as RFC 1321 defines; inputs
/// whose bit length would exceed that bound (impossible to materialize on
/// 64-bit targets) wrap rather than error.
///
/// [`digest`]: crate::digest
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: [u8; BLOCK_LEN],
    /// Bytes of `buffer` holding pending input, always < 64.
    filled: usize,
    /// Total message length in bytes, modulo 2^64.
    len: u64,
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The buffered bytes are deliberately omitted: partial input is not
        // part of the observable state and may be sensitive.
        f.debug_struct("Md5").field("len", &self.len).finish()
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a hasher with an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INIT,
            buffer: [0_u8; BLOCK_LEN],
            filled: 0,
            len: 0,
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);

        let mut input = data;
        if self.filled > 0 {
            let take = (BLOCK_LEN - self.filled).min(input.len());
            self.buffer[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];

            if self.filled < BLOCK_LEN {
                return;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.filled = 0;
        }

        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for block in blocks.by_ref() {
            compress(
                &mut self.state,
                block.try_into().expect("chunks_exact yields 64-byte blocks"),
            );
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Finalises the digest and returns the 128-bit MD5 output.
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        let bit_len = self.len.wrapping_mul(8);

        self.buffer[self.filled] = 0x80;
        for byte in &mut self.buffer[self.filled + 1..] {
            *byte = 0;
        }

        // No room for the 8-byte length field after the delimiter: close this
        // block and spill the length into an extra all-zero block.
        if self.filled + 1 + 8 > BLOCK_LEN {
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffer = [0_u8; BLOCK_LEN];
        }

        self.buffer[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_le_bytes());
        let block = self.buffer;
        compress(&mut self.state, &block);

        encode(self.state)
    }

    /// Convenience helper that computes the MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
