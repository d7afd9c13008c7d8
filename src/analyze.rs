//! Pipeline orchestrator and public entry point.
//!
//! Drives the linear state machine `idle -> hashing -> indexing -> exact
//! -> partial -> visual -> grouping -> assembling -> done`, reporting a
//! boundary progress event with its canonical label before each stage.

use std::collections::HashMap;
use std::time::Instant;

use crate::error::{DedupError, Result};
use crate::exact::find_exact_duplicates;
use crate::group::{merge_match_maps, synthesize_groups};
use crate::index::{find_partial_matches, ChunkIndex};
use crate::models::{DedupResult, RawFile};
use crate::process::process_files;
use crate::progress::{labels, report, ProgressEvent, ProgressSink};
use crate::tree::build_tree;
use crate::visual::find_visual_matches;

/// Runs the full duplicate-detection pipeline over `files` and returns a
/// single consistent [`DedupResult`]. `threshold` must be in `[0, 1]` and
/// `chunk_size` must be positive; violating either is a fail-fast
/// [`DedupError::InputShape`] with no partial result.
pub fn analyze(
    files: &[RawFile],
    threshold: f64,
    chunk_size: usize,
    mut progress_sink: Option<&mut ProgressSink<'_>>,
) -> Result<DedupResult> {
    let start = Instant::now();

    if !(0.0..=1.0).contains(&threshold) || threshold.is_nan() {
        return Err(DedupError::InputShape(format!(
            "threshold must be within [0, 1], got {threshold}"
        )));
    }
    if chunk_size == 0 {
        return Err(DedupError::InputShape(
            "chunk_size must be a positive integer".to_string(),
        ));
    }

    // hashing
    let records = process_files(files, chunk_size, progress_sink.as_deref_mut())?;

    for record in &records {
        if record.chunk_count != record.leaves.len() {
            return Err(DedupError::InternalInvariant {
                stage: "hashing",
                detail: format!(
                    "chunk_count {} does not match leaf sequence length {} for {}",
                    record.chunk_count,
                    record.leaves.len(),
                    record.path.display()
                ),
            });
        }
    }

    // indexing
    report(&mut progress_sink, ProgressEvent::new(0, 1, labels::BUILDING_CHUNK_INDEX, 30));
    let index = ChunkIndex::build(&records);

    // exact
    report(&mut progress_sink, ProgressEvent::new(0, 1, labels::FINDING_EXACT_DUPLICATES, 50));
    let exact_pass = find_exact_duplicates(&records);

    // partial
    report(&mut progress_sink, ProgressEvent::new(0, 1, labels::FINDING_SIMILAR_FILES, 70));
    let partial_matches = find_partial_matches(&records, &index, &exact_pass.exact_paths, threshold);

    // visual
    report(&mut progress_sink, ProgressEvent::new(0, 1, labels::FINDING_VISUAL_DUPLICATES, 80));
    let visual_matches = find_visual_matches(&records, &exact_pass.exact_paths);

    // grouping
    report(&mut progress_sink, ProgressEvent::new(0, 1, labels::CREATING_SMART_GROUPS, 85));
    let size_by_path: HashMap<_, _> = records.iter().map(|r| (r.path.clone(), r.size)).collect();
    let duplicate_groups = synthesize_groups(exact_pass.groups, &partial_matches, &visual_matches, &size_by_path);

    // assembling
    report(&mut progress_sink, ProgressEvent::new(0, 1, labels::BUILDING_FILE_TREE, 90));
    let root_tree = build_tree(&records);
    let all_matches = merge_match_maps([exact_pass.matches, partial_matches.clone(), visual_matches.clone()]);

    let total_files = records.len();
    let full_dup_count = exact_pass.full_dup_count;
    let partial_dup_count = partial_matches.len();
    let visual_dup_count = visual_matches.len();
    let unique_files = total_files.saturating_sub(full_dup_count + partial_dup_count);
    let space_saved: u64 = duplicate_groups.iter().map(|g| g.estimated_savings).sum();

    // done
    report(&mut progress_sink, ProgressEvent::new(1, 1, labels::ANALYSIS_COMPLETE, 100));

    Ok(DedupResult {
        root_tree,
        all_matches,
        duplicate_groups,
        total_files,
        unique_files,
        full_dup_count,
        partial_dup_count,
        visual_dup_count,
        space_saved,
        processing_time: start.elapsed(),
    })
}
