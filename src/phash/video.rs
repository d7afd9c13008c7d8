//! Video-to-video perceptual similarity.
//!
//! Frame hashes are supplied by the host as an ordered sequence of
//! per-frame 64-bit hashes; frame extraction itself is out of scope here.

use crate::config::VISUAL_SIMILARITY_THRESHOLD;

use super::fingerprint::hamming_similarity;

/// `matching / max(|a|, |b|)`, counting index `i` as matching when its
/// per-frame Hamming similarity clears [`VISUAL_SIMILARITY_THRESHOLD`].
/// Length mismatch is penalized via the `max` denominator.
pub fn video_similarity(a: &[u64], b: &[u64]) -> f64 {
    let shorter = a.len().min(b.len());
    let longer = a.len().max(b.len());
    if longer == 0 {
        return 0.0;
    }

    let matching = (0..shorter)
        .filter(|&i| hamming_similarity(a[i], b[i]) >= VISUAL_SIMILARITY_THRESHOLD)
        .count();

    matching as f64 / longer as f64
}
