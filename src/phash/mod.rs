//! Perceptual-hash image/video fingerprinter (spec §4.2 / §2 item 3).

mod dct;
pub mod fingerprint;
pub mod video;

pub use fingerprint::{compute_fingerprint, hamming_similarity};
pub use video::video_similarity;
