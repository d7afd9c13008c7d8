//! Hashing primitives, chunker, and Merkle builder (spec §4.1).

pub mod digest;
pub mod merkle;

pub use digest::ChunkDigest;
pub use merkle::MerkleNode;
