use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::tree::TreeNode;

/// How two files were found to be related.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Partial,
    Visual,
}

/// What criterion ties together the members of a [`DuplicateGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Exact,
    Similar,
    Visual,
}

/// One relationship between a source file and another, living inside the
/// source's entry in [`DedupResult::all_matches`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateMatch {
    pub target: PathBuf,
    pub similarity: f64,
    pub shared_size: u64,
    pub kind: MatchKind,
}

/// A maximal (by the greedy construction) set of related files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub files: Vec<PathBuf>,
    pub similarity: f64,
    pub aggregate_size: u64,
    pub kind: GroupKind,
    pub estimated_savings: u64,
}

/// The single value returned by [`crate::analyze`]. Field names follow the
/// wire contract, matching the teacher's `#[serde(rename = "...")]` style
/// in `models/torrent.rs`.
#[derive(Debug, Clone, Serialize)]
pub struct DedupResult {
    #[serde(rename = "RootTree")]
    pub root_tree: TreeNode,

    #[serde(rename = "AllMatches")]
    pub all_matches: HashMap<PathBuf, Vec<DuplicateMatch>>,

    #[serde(rename = "DuplicateGroups")]
    pub duplicate_groups: Vec<DuplicateGroup>,

    #[serde(rename = "TotalFiles")]
    pub total_files: usize,

    #[serde(rename = "UniqueFiles")]
    pub unique_files: usize,

    #[serde(rename = "FullDupCount")]
    pub full_dup_count: usize,

    #[serde(rename = "PartialDupCount")]
    pub partial_dup_count: usize,

    #[serde(rename = "VisualDupCount")]
    pub visual_dup_count: usize,

    #[serde(rename = "SpaceSaved")]
    pub space_saved: u64,

    #[serde(rename = "ProcessingTime", with = "duration_as_seconds")]
    pub processing_time: Duration,
}

/// Serializes a [`Duration`] as a floating-point number of seconds.
mod duration_as_seconds {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}
