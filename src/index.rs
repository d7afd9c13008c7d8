//! Chunk index & partial-match engine.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::hashing::ChunkDigest;
use crate::models::{DuplicateMatch, FileRecord, MatchKind};

/// Inverted index from chunk digest to the file indices that contain it.
/// Built in one O(total leaf count) pass over the record vector.
pub struct ChunkIndex {
    digest_to_files: HashMap<ChunkDigest, HashSet<usize>>,
}

impl ChunkIndex {
    pub fn build(records: &[FileRecord]) -> Self {
        let mut digest_to_files: HashMap<ChunkDigest, HashSet<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            for digest in &record.leaves {
                digest_to_files.entry(*digest).or_default().insert(i);
            }
        }
        Self { digest_to_files }
    }

    fn files_containing(&self, digest: &ChunkDigest) -> impl Iterator<Item = usize> + '_ {
        self.digest_to_files
            .get(digest)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}

/// Finds shared-chunk matches for every source not already in an exact
/// class. `exact_paths` are excluded as sources but, per spec §9, remain
/// eligible as targets of another source's search.
pub fn find_partial_matches(
    records: &[FileRecord],
    index: &ChunkIndex,
    exact_paths: &HashSet<PathBuf>,
    threshold: f64,
) -> HashMap<PathBuf, Vec<DuplicateMatch>> {
    let mut matches: HashMap<PathBuf, Vec<DuplicateMatch>> = HashMap::new();

    for (i, source) in records.iter().enumerate() {
        if exact_paths.contains(&source.path) {
            continue;
        }
        if source.leaves.is_empty() {
            continue;
        }

        let candidates = candidate_counts(source, index);
        let l_s = source.leaves.len();
        let cutoff = (threshold * l_s as f64).ceil() as usize;

        let source_set: HashSet<&ChunkDigest> = source.leaves.iter().collect();

        let mut found: Vec<DuplicateMatch> = Vec::new();
        for (&j, &count) in &candidates {
            if j == i || count < cutoff.max(1) {
                continue;
            }
            let target = &records[j];
            if target.root == source.root {
                // Already an exact match; handled entirely in §4.4.
                continue;
            }

            let target_set: HashSet<&ChunkDigest> = target.leaves.iter().collect();
            let similarity = jaccard_asymmetric(&source_set, &target_set);

            if similarity >= threshold && similarity < 1.0 {
                found.push(DuplicateMatch {
                    target: target.path.clone(),
                    similarity,
                    shared_size: (source.size as f64 * similarity).floor() as u64,
                    kind: MatchKind::Partial,
                });
            }
        }

        if !found.is_empty() {
            matches.insert(source.path.clone(), found);
        }
    }

    matches
}

fn candidate_counts(source: &FileRecord, index: &ChunkIndex) -> HashMap<usize, usize> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for digest in &source.leaves {
        for file_index in index.files_containing(digest) {
            *counts.entry(file_index).or_insert(0) += 1;
        }
    }
    counts
}

/// `|set(s.leaves) ∩ set(t.leaves)| / |set(s.leaves)|`.
fn jaccard_asymmetric(source: &HashSet<&ChunkDigest>, target: &HashSet<&ChunkDigest>) -> f64 {
    if source.is_empty() {
        return 0.0;
    }
    let intersection = source.intersection(target).count();
    intersection as f64 / source.len() as f64
}
