use std::path::PathBuf;

use crate::hashing::{ChunkDigest, MerkleNode};

/// A processed file (spec §3 `FileRecord`). Built once per input and
/// immutable afterward; every downstream stage only ever reads from a
/// slice of these.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub root: ChunkDigest,
    pub tree: MerkleNode,
    pub size: u64,
    pub chunk_count: usize,
    pub leaves: Vec<ChunkDigest>,
    pub mod_time: i64,
    pub perceptual_hash: Option<u64>,
    pub is_image: bool,
    pub video_frame_hashes: Option<Vec<u64>>,
    pub is_video: bool,
}

impl FileRecord {
    /// Hex-encoded Merkle root, used as the exact-duplicate partition key
    /// (spec §4.4).
    pub fn root_hex(&self) -> String {
        crate::hashing::digest::to_hex(&self.root)
    }

    /// True if this record carries any perceptual signal the visual-match
    /// engine can compare against (spec §4.6: "records with a perceptual
    /// fingerprint (images) or a non-empty video fingerprint list").
    pub fn has_visual_signal(&self) -> bool {
        self.perceptual_hash.is_some()
            || self.video_frame_hashes.as_ref().is_some_and(|frames| !frames.is_empty())
    }
}
