//! End-to-end coverage of the duplicate-detection pipeline, exercising
//! `analyze` the way a host actually calls it: a batch of `RawFile`
//! values in, one `DedupResult` out.

use assert_cmd::Command;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use dupegrep::{analyze, GroupKind, RawFile};

fn raw(path: &str, bytes: &[u8]) -> RawFile {
    RawFile {
        path: PathBuf::from(path),
        name: path.to_string(),
        size: bytes.len() as u64,
        bytes: bytes.to_vec(),
        mod_time: 0,
        video_frame_hashes: None,
    }
}

// Scenario 1: two identical 5,000-byte files, chunk 1,024.
#[test]
fn scenario_identical_files_form_one_exact_group() {
    let bytes = vec![42u8; 5000];
    let files = vec![raw("a.bin", &bytes), raw("b.bin", &bytes)];
    let result = analyze(&files, 0.5, 1024, None).unwrap();

    assert_eq!(result.duplicate_groups.len(), 1);
    assert_eq!(result.full_dup_count, 2);
    assert_eq!(result.space_saved, 5000);
    assert_eq!(result.all_matches[&PathBuf::from("a.bin")][0].similarity, 1.0);
    assert_eq!(result.all_matches[&PathBuf::from("b.bin")][0].similarity, 1.0);
}

// Scenario 2: two 10,000-byte files sharing chunks 0-7, differing in 8-9.
#[test]
fn scenario_partial_overlap_is_symmetric_at_point_eight() {
    let shared: Vec<u8> = (0u8..8).cycle().take(8 * 1024).collect();
    let mut a = shared.clone();
    a.extend(std::iter::repeat_n(0xAAu8, 1024));
    a.extend(std::iter::repeat_n(0xBBu8, 976));
    let mut b = shared.clone();
    b.extend(std::iter::repeat_n(0xCCu8, 1024));
    b.extend(std::iter::repeat_n(0xDDu8, 976));

    let files = vec![raw("a.bin", &a), raw("b.bin", &b)];
    let result = analyze(&files, 0.8, 1024, None).unwrap();

    assert_eq!(result.partial_dup_count, 2);
    assert_eq!(result.full_dup_count, 0);
    let a_matches = &result.all_matches[&PathBuf::from("a.bin")];
    assert_eq!(a_matches.len(), 1);
    assert!((a_matches[0].similarity - 0.8).abs() < 1e-9);
}

// Scenario 3: A and B byte-identical, C differs in one chunk out of 10.
#[test]
fn scenario_exact_class_members_remain_partial_targets() {
    let common: Vec<u8> = (0u8..9).cycle().take(9 * 1024).collect();
    let mut c = common.clone();
    c.extend(std::iter::repeat_n(0xFFu8, 1024));

    let files = vec![raw("a.bin", &common), raw("b.bin", &common), raw("c.bin", &c)];
    let result = analyze(&files, 0.8, 1024, None).unwrap();

    assert_eq!(result.full_dup_count, 2);
    assert_eq!(result.partial_dup_count, 1);

    let c_matches = &result.all_matches[&PathBuf::from("c.bin")];
    assert_eq!(c_matches.len(), 2);
    for m in c_matches {
        assert!((m.similarity - 0.9).abs() < 1e-9);
    }
    assert!(!result.all_matches.contains_key(&PathBuf::from("a.bin")) || {
        // a.bin's only entries, if present, are exact (1.0), never partial.
        result.all_matches[&PathBuf::from("a.bin")].iter().all(|m| m.similarity == 1.0)
    });
}

// Scenario 4: a JPEG and a 10%-brighter copy of the same picture.
#[test]
fn scenario_brightness_shifted_jpeg_forms_a_visual_group() {
    fn checkerboard(brightness_scale: f64) -> Vec<u8> {
        let size = 64u32;
        let mut img = RgbImage::new(size, size);
        for y in 0..size {
            for x in 0..size {
                let base = if (x / 8 + y / 8) % 2 == 0 { 60u8 } else { 200u8 };
                let shifted = (base as f64 * brightness_scale).clamp(0.0, 255.0) as u8;
                img.put_pixel(x, y, Rgb([shifted, shifted, shifted]));
            }
        }
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    let original = checkerboard(1.0);
    let brighter = checkerboard(1.1);

    let files = vec![raw("photo_a.jpg", &original), raw("photo_b.jpg", &brighter)];
    let result = analyze(&files, 0.5, 65536, None).unwrap();

    let a_matches = &result.all_matches[&PathBuf::from("photo_a.jpg")];
    let visual_match = a_matches
        .iter()
        .find(|m| m.target == PathBuf::from("photo_b.jpg"))
        .expect("brightness-shifted copy should be a visual match");
    assert!(visual_match.similarity >= 0.90, "similarity was {}", visual_match.similarity);

    let group = result
        .duplicate_groups
        .iter()
        .find(|g| g.kind == GroupKind::Visual)
        .expect("a visual duplicate group should be emitted");
    assert!(group.files.contains(&PathBuf::from("photo_a.jpg")));
    assert!(group.files.contains(&PathBuf::from("photo_b.jpg")));
}

// Scenario 5: empty input list.
#[test]
fn scenario_empty_input_yields_zero_everything() {
    let result = analyze(&[], 0.5, 1024, None).unwrap();
    assert_eq!(result.total_files, 0);
    assert_eq!(result.unique_files, 0);
    assert_eq!(result.full_dup_count, 0);
    assert_eq!(result.partial_dup_count, 0);
    assert_eq!(result.visual_dup_count, 0);
    assert!(result.duplicate_groups.is_empty());
    assert!(result.all_matches.is_empty());
}

// Scenario 6: an image whose bytes fail to decode.
#[test]
fn scenario_undecodable_image_is_absorbed_not_fatal() {
    let files = vec![raw("broken.png", b"not actually a png")];
    let result = analyze(&files, 0.5, 1024, None).unwrap();
    assert_eq!(result.total_files, 1);
    assert_eq!(result.visual_dup_count, 0);
}

// Boundary: chunk_size larger than every file.
#[test]
fn boundary_chunk_size_larger_than_file_yields_single_chunk() {
    let files = vec![raw("a.bin", b"hello world")];
    let result = analyze(&files, 0.5, 1 << 20, None).unwrap();
    assert_eq!(result.total_files, 1);
    assert_eq!(result.unique_files, 1);
}

// Boundary: threshold = 1.0 admits no partial matches.
#[test]
fn boundary_threshold_one_admits_no_partial_matches() {
    let a = vec![1u8; 16];
    let b = vec![1u8; 12];
    let files = vec![raw("a.bin", &a), raw("b.bin", &b)];
    let result = analyze(&files, 1.0, 4, None).unwrap();
    assert_eq!(result.partial_dup_count, 0);
}

// Boundary: single file input.
#[test]
fn boundary_single_file_is_unique_with_no_groups() {
    let files = vec![raw("only.bin", b"content")];
    let result = analyze(&files, 0.5, 1024, None).unwrap();
    assert_eq!(result.unique_files, 1);
    assert!(result.duplicate_groups.is_empty());
    assert!(result.all_matches.is_empty());
}

#[test]
fn unique_files_invariant_holds_across_a_mixed_batch() {
    let dup = vec![5u8; 2048];
    let files = vec![
        raw("a.bin", &dup),
        raw("b.bin", &dup),
        raw("c.bin", b"entirely unrelated content, not shared with anything else here"),
    ];
    let result = analyze(&files, 0.5, 1024, None).unwrap();
    assert_eq!(
        result.unique_files,
        result.total_files - (result.full_dup_count + result.partial_dup_count)
    );
}

#[test]
fn repeated_runs_are_stable_in_aggregate_counts() {
    let bytes = vec![3u8; 4096];
    let files = vec![raw("a.bin", &bytes), raw("b.bin", &bytes)];
    let first = analyze(&files, 0.5, 1024, None).unwrap();
    let second = analyze(&files, 0.5, 1024, None).unwrap();
    assert_eq!(first.full_dup_count, second.full_dup_count);
    assert_eq!(first.space_saved, second.space_saved);
}

// CLI smoke tests against the binary.

#[test]
fn cli_help_mentions_duplicate_detection() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dupegrep"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate"));
}

#[test]
fn cli_json_output_is_well_formed_for_a_small_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"identical content").unwrap();
    fs::write(dir.path().join("b.txt"), b"identical content").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dupegrep"));
    cmd.arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"TotalFiles\": 2"))
        .stdout(predicate::str::contains("\"FullDupCount\": 2"));
}

#[test]
fn cli_missing_path_fails() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dupegrep"));
    cmd.arg("/nonexistent/path/for/dupegrep/tests").assert().failure();
}
