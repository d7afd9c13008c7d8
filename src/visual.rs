//! Visual-match engine (spec §4.6 / §2 item 7).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::config::VISUAL_SIMILARITY_THRESHOLD;
use crate::models::{DuplicateMatch, FileRecord, MatchKind};
use crate::phash::{hamming_similarity, video_similarity};

/// All-pairs perceptual comparison over records with a visual signal,
/// excluding anything already in an exact-duplicate class. Images and
/// videos are never cross-compared (spec §4.6).
pub fn find_visual_matches(
    records: &[FileRecord],
    exact_paths: &HashSet<PathBuf>,
) -> HashMap<PathBuf, Vec<DuplicateMatch>> {
    let candidates: Vec<&FileRecord> = records
        .iter()
        .filter(|r| r.has_visual_signal() && !exact_paths.contains(&r.path))
        .collect();

    let mut matches: HashMap<PathBuf, Vec<DuplicateMatch>> = HashMap::new();

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let a = candidates[i];
            let b = candidates[j];

            let similarity = match (a.is_image, b.is_image, a.is_video, b.is_video) {
                (true, true, _, _) => a.perceptual_hash.zip(b.perceptual_hash).map(|(x, y)| hamming_similarity(x, y)),
                (_, _, true, true) => {
                    match (a.video_frame_hashes.as_deref(), b.video_frame_hashes.as_deref()) {
                        (Some(x), Some(y)) => Some(video_similarity(x, y)),
                        _ => None,
                    }
                }
                _ => None, // no cross-kind comparison
            };

            let Some(similarity) = similarity else { continue };
            if similarity < VISUAL_SIMILARITY_THRESHOLD {
                continue;
            }

            let shared_size_for = |source: &FileRecord| (source.size as f64 * similarity).floor() as u64;

            matches.entry(a.path.clone()).or_default().push(DuplicateMatch {
                target: b.path.clone(),
                similarity,
                shared_size: shared_size_for(a),
                kind: MatchKind::Visual,
            });
            matches.entry(b.path.clone()).or_default().push(DuplicateMatch {
                target: a.path.clone(),
                similarity,
                shared_size: shared_size_for(b),
                kind: MatchKind::Visual,
            });
        }
    }

    matches
}
