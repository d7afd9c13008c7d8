//! Hashing primitives: a single cryptographic digest and combine operation.

use sha2::{Digest, Sha256};

/// A 256-bit cryptographic digest.
pub type ChunkDigest = [u8; 32];

pub fn digest_chunk(bytes: &[u8]) -> ChunkDigest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Folds two child digests into a parent by streaming both into a fresh
/// hash context, left-to-right.
pub fn combine(left: &ChunkDigest, right: &ChunkDigest) -> ChunkDigest {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Digest of the empty byte sequence; the Merkle root of a zero-length file.
pub fn identity() -> ChunkDigest {
    digest_chunk(&[])
}

pub fn to_hex(digest: &ChunkDigest) -> String {
    hex::encode(digest)
}
