//! Group synthesizer.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::config::SIMILAR_GROUP_SIMILARITY;
use crate::models::{DuplicateGroup, DuplicateMatch, GroupKind};

/// Combines exact, partial, and visual evidence into the final group list.
pub fn synthesize_groups(
    exact_groups: Vec<DuplicateGroup>,
    partial_matches: &HashMap<PathBuf, Vec<DuplicateMatch>>,
    visual_matches: &HashMap<PathBuf, Vec<DuplicateMatch>>,
    size_by_path: &HashMap<PathBuf, u64>,
) -> Vec<DuplicateGroup> {
    let mut groups = exact_groups;
    groups.extend(synthesize_similar_groups(partial_matches, size_by_path));
    groups.extend(synthesize_visual_groups(visual_matches, size_by_path));
    groups
}

/// Greedy seed-and-extend pass. Transitive similarity is not enforced:
/// only the seed's own pairs decide membership (spec §4.7, §9).
fn synthesize_similar_groups(
    partial_matches: &HashMap<PathBuf, Vec<DuplicateMatch>>,
    size_by_path: &HashMap<PathBuf, u64>,
) -> Vec<DuplicateGroup> {
    let mut sources: Vec<&PathBuf> = partial_matches.keys().collect();
    sources.sort();

    let mut processed: HashSet<PathBuf> = HashSet::new();
    let mut groups = Vec::new();

    for source in sources {
        if processed.contains(source) {
            continue;
        }

        let mut members = vec![source.clone()];
        for candidate in &partial_matches[source] {
            if candidate.similarity >= SIMILAR_GROUP_SIMILARITY
                && !processed.contains(&candidate.target)
                && !members.contains(&candidate.target)
            {
                members.push(candidate.target.clone());
            }
        }

        if members.len() < 2 {
            continue;
        }

        for member in &members {
            processed.insert(member.clone());
        }

        let aggregate_size: u64 = members.iter().map(|p| size_by_path.get(p).copied().unwrap_or(0)).sum();

        groups.push(DuplicateGroup {
            files: members,
            similarity: SIMILAR_GROUP_SIMILARITY,
            aggregate_size,
            kind: GroupKind::Similar,
            estimated_savings: aggregate_size / 2,
        });
    }

    groups
}

/// Greedy visual-group pass. A seed with no above-threshold neighbor
/// never emits a group (spec §9).
fn synthesize_visual_groups(
    visual_matches: &HashMap<PathBuf, Vec<DuplicateMatch>>,
    size_by_path: &HashMap<PathBuf, u64>,
) -> Vec<DuplicateGroup> {
    let mut sources: Vec<&PathBuf> = visual_matches.keys().collect();
    sources.sort();

    let mut processed: HashSet<PathBuf> = HashSet::new();
    let mut groups = Vec::new();

    for source in sources {
        if processed.contains(source) {
            continue;
        }

        let mut members = vec![source.clone()];
        let mut edge_similarities = Vec::new();
        for candidate in &visual_matches[source] {
            if !processed.contains(&candidate.target) && !members.contains(&candidate.target) {
                members.push(candidate.target.clone());
                edge_similarities.push(candidate.similarity);
            }
        }

        if members.len() < 2 {
            continue;
        }

        for member in &members {
            processed.insert(member.clone());
        }

        let average_similarity = edge_similarities.iter().sum::<f64>() / edge_similarities.len() as f64;
        let aggregate_size: u64 = members.iter().map(|p| size_by_path.get(p).copied().unwrap_or(0)).sum();
        let first_size = size_by_path.get(&members[0]).copied().unwrap_or(0);

        groups.push(DuplicateGroup {
            files: members,
            similarity: average_similarity,
            aggregate_size,
            kind: GroupKind::Visual,
            estimated_savings: aggregate_size.saturating_sub(first_size),
        });
    }

    groups
}

/// Concatenating merge: shared keys concatenate their value lists.
pub fn merge_match_maps(
    maps: impl IntoIterator<Item = HashMap<PathBuf, Vec<DuplicateMatch>>>,
) -> HashMap<PathBuf, Vec<DuplicateMatch>> {
    let mut out: HashMap<PathBuf, Vec<DuplicateMatch>> = HashMap::new();
    for map in maps {
        for (path, entries) in map {
            out.entry(path).or_default().extend(entries);
        }
    }
    out
}
