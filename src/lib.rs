//! Pure-Rust MD5 message digest (RFC 1321).
//!
//! This crate computes the 128-bit MD5 digest of arbitrary byte sequences
//! using the standard iterative construction: the input is padded to a
//! multiple of 512 bits, split into 64-byte blocks, and each block is folded
//! through a 64-round compression function that advances a four-word chaining
//! state. The final state, serialized little-endian, is the digest.
//!
//! Digests are a deterministic pure function of the input bytes alone. There
//! is no key, salt, or nonce input: MD5 is **not** a message authentication
//! code, and its collision resistance is broken, so it must only be used for
//! integrity checks and fingerprinting against accidental corruption or for
//! interoperability with systems that require this digest.
//!
//! # Example
//!
//! ```
//! // One-shot
//! let hash = md5_core::digest(b"hello world");
//! assert_eq!(md5_core::hex_digest(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! // Streaming
//! let mut hasher = md5_core::Md5::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), hash);
//! ```
//!
//! # Batching
//!
//! Block compression within one digest is strictly sequential (each block
//! consumes the previous block's chaining state), but independent inputs
//! share nothing mutable. [`digest_batch`] hashes a slice of inputs, spread
//! across the rayon thread pool when the `rayon` feature is enabled.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod compress;
mod consts;
mod hasher;
mod padding;

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
mod rayon_support;

pub use hasher::Md5;
#[cfg(feature = "rayon")]
pub use rayon_support::{digest_files, ParallelMd5};

/// MD5 digest type (16 bytes / 128 bits).
pub type Digest = [u8; 16];

/// Computes the MD5 digest for a single input.
pub fn digest(input: &[u8]) -> Digest {
    let padded = padding::pad(input);
    let mut state = consts::INIT;
    for block in padded.chunks_exact(padding::BLOCK_LEN) {
        compress::compress(
            &mut state,
            block.try_into().expect("chunks_exact yields 64-byte blocks"),
        );
    }
    hasher::encode(state)
}

/// Computes the MD5 digest and renders it as 32 lowercase hex characters.
pub fn hex_digest(input: &[u8]) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(32);
    for byte in digest(input) {
        write!(&mut out, "{byte:02x}").expect("write! to String cannot fail");
    }
    out
}

/// Computes MD5 digests for multiple independent inputs.
///
/// Returns digests in the same order as `inputs`. With the `rayon` feature
/// enabled the inputs are hashed in parallel on the global thread pool; the
/// digests themselves are identical either way.
pub fn digest_batch<T>(inputs: &[T]) -> Vec<Digest>
where
    T: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;

        return inputs.par_iter().map(|input| digest(input.as_ref())).collect();
    }

    #[cfg(not(feature = "rayon"))]
    {
        inputs.iter().map(|input| digest(input.as_ref())).collect()
    }
}
