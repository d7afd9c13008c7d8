//! Auxiliary rooted directory tree, built the same way the teacher's
//! `tree.rs` assembles a V2 file tree: walk each path's components,
//! inserting directories as needed and a leaf at the final component.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::models::FileRecord;

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    File { size: u64 },
    Directory(BTreeMap<String, TreeNode>),
}

pub fn build_tree(records: &[FileRecord]) -> TreeNode {
    let mut root = BTreeMap::new();
    for record in records {
        insert(&mut root, &record.path, record.size);
    }
    TreeNode::Directory(root)
}

fn insert(tree: &mut BTreeMap<String, TreeNode>, path: &Path, size: u64) {
    let components: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    insert_recursive(tree, &components, size);
}

fn insert_recursive(tree: &mut BTreeMap<String, TreeNode>, components: &[String], size: u64) {
    let Some((name, rest)) = components.split_first() else {
        return;
    };

    if rest.is_empty() {
        tree.insert(name.clone(), TreeNode::File { size });
        return;
    }

    let entry = tree.entry(name.clone()).or_insert_with(|| TreeNode::Directory(BTreeMap::new()));
    if let TreeNode::Directory(map) = entry {
        insert_recursive(map, rest, size);
    }
}
