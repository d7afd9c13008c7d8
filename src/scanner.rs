//! Directory walker for the native CLI host (spec §1: acquisition is a
//! host concern, never the core's). Produces the [`RawFile`] vector the
//! core consumes.

use anyhow::{Context, Result};
use glob::Pattern;
use jwalk::WalkDir;
use std::path::Path;

use crate::models::RawFile;

/// Walks `source` (a single file or a directory tree) and reads every
/// file's full contents into a [`RawFile`], skipping anything matched by
/// `exclude_patterns` against the bare file name or the relative path.
/// Frame extraction isn't done here, so `video_frame_hashes` is always `None`.
pub fn scan_files(source: &Path, exclude_patterns: &[String], verbose: bool) -> Result<Vec<RawFile>> {
    let source = source.canonicalize().context("Failed to resolve source path")?;

    let mut patterns = Vec::new();
    for pattern_str in exclude_patterns {
        match Pattern::new(pattern_str) {
            Ok(p) => patterns.push(p),
            Err(e) => {
                if verbose {
                    eprintln!("Warning: Invalid glob pattern '{pattern_str}': {e}");
                }
            }
        }
    }

    let mut files = Vec::new();

    if source.is_file() {
        push_file(&mut files, &source, &source, verbose)?;
        return Ok(files);
    }

    for entry in WalkDir::new(&source) {
        let entry = entry.context("Failed to read directory entry")?;
        if entry.file_type().is_dir() {
            continue;
        }

        let entry_path = entry.path();
        let relative_path = entry_path.strip_prefix(&source).context("Failed to create relative path")?;

        let file_name = entry.file_name().to_string_lossy();
        let relative_path_str = relative_path.to_string_lossy();
        let should_exclude = patterns.iter().any(|p| p.matches(&file_name) || p.matches(&relative_path_str));
        if should_exclude {
            if verbose {
                eprintln!("Excluding: {}", entry_path.display());
            }
            continue;
        }

        push_file(&mut files, &entry_path, relative_path, verbose)?;
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn push_file(files: &mut Vec<RawFile>, full_path: &Path, stable_path: &Path, verbose: bool) -> Result<()> {
    let bytes = std::fs::read(full_path).with_context(|| format!("Failed to read {}", full_path.display()))?;
    let metadata = std::fs::metadata(full_path).with_context(|| format!("Failed to stat {}", full_path.display()))?;
    let mod_time = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    let name = stable_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| stable_path.display().to_string());

    if verbose {
        let modified = chrono::DateTime::from_timestamp(mod_time, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string());
        eprintln!("  {} ({} bytes, modified {modified})", stable_path.display(), bytes.len());
    }

    files.push(RawFile {
        path: stable_path.to_path_buf(),
        name,
        size: bytes.len() as u64,
        bytes,
        mod_time,
        video_frame_hashes: None,
    });

    Ok(())
}
