//! Exact-duplicate grouper (spec §4.4 / §2 item 5).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::models::{DuplicateGroup, DuplicateMatch, FileRecord, GroupKind, MatchKind};

/// Output of the exact-duplicate pass: the groups themselves, every
/// source's match-list contribution, the set of paths involved in any
/// exact class (used by §4.5 to exclude them as partial-match *sources*),
/// and the count of distinct files counted toward `FullDupCount`.
pub struct ExactPass {
    pub groups: Vec<DuplicateGroup>,
    pub matches: HashMap<PathBuf, Vec<DuplicateMatch>>,
    pub exact_paths: HashSet<PathBuf>,
    pub full_dup_count: usize,
}

/// Partitions `records` by hex-encoded Merkle root (spec §4.4). Classes of
/// size >= 2 become exact groups; within a class every member's match list
/// gets an entry for every other member at similarity 1.0.
pub fn find_exact_duplicates(records: &[FileRecord]) -> ExactPass {
    // Root hex -> indices into `records`, in first-encountered order, so
    // exact groups enumerate members in the order their class was first
    // seen (spec §5 ordering guarantee).
    let mut order: Vec<String> = Vec::new();
    let mut classes: HashMap<String, Vec<usize>> = HashMap::new();

    for (i, record) in records.iter().enumerate() {
        let key = record.root_hex();
        if let Some(members) = classes.get_mut(&key) {
            members.push(i);
        } else {
            classes.insert(key.clone(), vec![i]);
            order.push(key);
        }
    }

    let mut groups = Vec::new();
    let mut matches: HashMap<PathBuf, Vec<DuplicateMatch>> = HashMap::new();
    let mut exact_paths: HashSet<PathBuf> = HashSet::new();
    let mut processed_for_count: HashSet<PathBuf> = HashSet::new();
    let mut full_dup_count = 0usize;

    for key in order {
        let members = &classes[&key];
        if members.len() < 2 {
            continue;
        }

        let representative = &records[members[0]];
        let aggregate_size: u64 = members.iter().map(|&i| records[i].size).sum();
        let estimated_savings = aggregate_size.saturating_sub(representative.size);

        groups.push(DuplicateGroup {
            files: members.iter().map(|&i| records[i].path.clone()).collect(),
            similarity: 1.0,
            aggregate_size,
            kind: GroupKind::Exact,
            estimated_savings,
        });

        for &i in members {
            let source = &records[i];
            exact_paths.insert(source.path.clone());
            if processed_for_count.insert(source.path.clone()) {
                full_dup_count += 1;
            }

            let entry = matches.entry(source.path.clone()).or_default();
            for &j in members {
                if i == j {
                    continue;
                }
                let target = &records[j];
                entry.push(DuplicateMatch {
                    target: target.path.clone(),
                    similarity: 1.0,
                    shared_size: source.size,
                    kind: MatchKind::Exact,
                });
            }
        }
    }

    ExactPass {
        groups,
        matches,
        exact_paths,
        full_dup_count,
    }
}
