//! The 64-round MD5 block transform.

use crate::consts::{K, S};
use crate::padding::{block_words, BLOCK_LEN};

/// Advances the chaining state by one 64-byte block.
///
/// Runs the 64 mixing rounds over the block's sixteen words and then adds the
/// round output back into the entering state componentwise. The accumulation
/// (rather than replacement) is what chains successive blocks together: every
/// block's output depends on the completed state of all earlier blocks, so
/// blocks of one message must be folded strictly in order.
///
/// All arithmetic wraps modulo 2^32; there is no failure path.
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let words = block_words(block);
    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        // The mixing function and message-word index depend only on which
        // 16-round quarter the round falls into.
        let (f, g) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let rotated = a
            .wrapping_add(f)
            .wrapping_add(K[i])
            .wrapping_add(words[g])
            .rotate_left(S[i]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
