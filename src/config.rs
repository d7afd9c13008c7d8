//! Fixed constants and extension tables shared by every stage.

/// Hamming similarity threshold for a visual match
pub const VISUAL_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Representative similarity for a synthesized "similar" group
pub const SIMILAR_GROUP_SIMILARITY: f64 = 0.80;

/// Grayscale reduction side length for the pHash fingerprinter
pub const PHASH_RESAMPLE_SIZE: u32 = 32;

/// Low-frequency DCT block side length retained for the fingerprint
pub const PHASH_BLOCK_SIZE: usize = 8;

/// Default chunk size for hosts that don't have a better one (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Default partial-match threshold for hosts that don't have a better one
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Case-insensitive image extensions recognized by the fingerprinter
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Case-insensitive video extensions recognized by the visual-match engine
pub const VIDEO_EXTENSIONS: &[&str] = &["mov", "mp4", "webm", "avi", "m4v"];

pub fn is_image_name(name: &str) -> bool {
    has_extension(name, IMAGE_EXTENSIONS)
}

pub fn is_video_name(name: &str) -> bool {
    has_extension(name, VIDEO_EXTENSIONS)
}

fn has_extension(name: &str, table: &[&str]) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            table.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extension_is_case_insensitive() {
        assert!(is_image_name("photo.JPG"));
        assert!(is_image_name("photo.jpeg"));
        assert!(!is_image_name("photo.tiff"));
    }

    #[test]
    fn video_extension_is_case_insensitive() {
        assert!(is_video_name("clip.MP4"));
        assert!(!is_video_name("clip.mkv"));
    }

    #[test]
    fn name_without_extension_is_neither() {
        assert!(!is_image_name("README"));
        assert!(!is_video_name("README"));
    }
}
