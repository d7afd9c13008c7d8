//! Per-file processor (spec §4.3 / §2 item 4).

use rayon::prelude::*;

use crate::config::{is_image_name, is_video_name};
use crate::error::{DedupError, Result};
use crate::hashing::merkle::{build_tree, chunk_leaves};
use crate::models::{FileRecord, RawFile};
use crate::phash::compute_fingerprint;
use crate::progress::{labels, report, ProgressEvent, ProgressSink};

/// Chunks, hashes, and (for images) fingerprints every file, producing one
/// immutable [`FileRecord`] per input in the same order as `files`.
///
/// The per-file work runs across a `rayon` thread pool (matching the
/// teacher's `hash_content` parallel-hashing pattern); progress is then
/// replayed once in input order so events stay deterministic without
/// needing a `Send` progress sink.
pub fn process_files(
    files: &[RawFile],
    chunk_size: usize,
    mut progress: Option<&mut ProgressSink<'_>>,
) -> Result<Vec<FileRecord>> {
    if chunk_size == 0 {
        return Err(DedupError::InputShape(
            "chunk_size must be a positive integer".to_string(),
        ));
    }

    for file in files {
        file.validate().map_err(DedupError::InputShape)?;
    }

    let records: Vec<FileRecord> = files
        .par_iter()
        .map(|file| build_record(file, chunk_size))
        .collect();

    let total = records.len() as u64;
    for (i, record) in records.iter().enumerate() {
        let name = record
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| record.path.display().to_string());
        let current = (i + 1) as u64;
        report(
            &mut progress,
            ProgressEvent::new(
                current,
                total,
                labels::processing(&name),
                percent_of(current, total),
            ),
        );
    }

    Ok(records)
}

fn build_record(file: &RawFile, chunk_size: usize) -> FileRecord {
    let leaves = chunk_leaves(&file.bytes, chunk_size);
    let chunk_count = leaves.len();
    let tree = build_tree(leaves.clone());
    let root = tree.digest;

    let is_image = is_image_name(&file.name);
    let is_video = is_video_name(&file.name);

    let perceptual_hash = if is_image {
        compute_fingerprint(&file.name, &file.bytes)
    } else {
        None
    };

    let video_frame_hashes = if is_video {
        file.video_frame_hashes.clone()
    } else {
        None
    };

    FileRecord {
        path: file.path.clone(),
        root,
        tree,
        size: file.size,
        chunk_count,
        leaves,
        mod_time: file.mod_time,
        perceptual_hash,
        is_image,
        video_frame_hashes,
        is_video,
    }
}

fn percent_of(current: u64, total: u64) -> u8 {
    if total == 0 {
        100
    } else {
        ((current * 100) / total) as u8
    }
}
