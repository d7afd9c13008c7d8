//! Image perceptual-hash fingerprinter (spec §4.2).

use image::{DynamicImage, GenericImageView, ImageFormat};
use log::warn;

use crate::config::{PHASH_BLOCK_SIZE, PHASH_RESAMPLE_SIZE};

use super::dct::dct2d;

/// 64-bit perceptual hash of an image file, or `None` if the extension
/// isn't a recognized image kind or the bytes don't decode.
pub fn compute_fingerprint(name: &str, bytes: &[u8]) -> Option<u64> {
    let format = image_format_for(name)?;
    let image = match image::load_from_memory_with_format(bytes, format) {
        Ok(image) => image,
        Err(err) => {
            warn!("failed to decode image `{name}`: {err}");
            return None;
        }
    };
    Some(fingerprint_of(&image))
}

fn image_format_for(name: &str) -> Option<ImageFormat> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "png" => Some(ImageFormat::Png),
        "gif" => Some(ImageFormat::Gif),
        _ => None,
    }
}

fn fingerprint_of(image: &DynamicImage) -> u64 {
    let gray = resample_to_grayscale(image, PHASH_RESAMPLE_SIZE);
    let coefficients = dct2d(&gray);
    let block = low_frequency_block(&coefficients, PHASH_BLOCK_SIZE);
    let median = median_of(&block);

    let mut hash: u64 = 0;
    for (i, &value) in block.iter().enumerate() {
        if value > median {
            hash |= 1 << i;
        }
    }
    hash
}

/// Nearest-neighbor resample to `size x size`, then grayscale luminance.
fn resample_to_grayscale(image: &DynamicImage, size: u32) -> Vec<Vec<f64>> {
    let (src_w, src_h) = image.dimensions();
    let rgb = image.to_rgb8();

    let mut out = vec![vec![0.0f64; size as usize]; size as usize];
    for y in 0..size {
        let src_y = (y * src_h) / size;
        for x in 0..size {
            let src_x = (x * src_w) / size;
            let pixel = rgb.get_pixel(src_x.min(src_w.saturating_sub(1)), src_y.min(src_h.saturating_sub(1)));
            let [r, g, b] = [pixel[0] as f64, pixel[1] as f64, pixel[2] as f64];
            out[y as usize][x as usize] = 0.299 * r + 0.587 * g + 0.114 * b;
        }
    }
    out
}

/// Top-left `block x block` corner of `coefficients`, row-major.
fn low_frequency_block(coefficients: &[Vec<f64>], block: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(block * block);
    for row in coefficients.iter().take(block) {
        out.extend(row.iter().take(block));
    }
    out
}

/// Median of a slice; even-length input averages the two middle values.
fn median_of(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("DCT coefficients are never NaN"));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// `1 - popcount(h1 xor h2) / 64`.
pub fn hamming_similarity(a: u64, b: u64) -> f64 {
    let distance = (a ^ b).count_ones();
    1.0 - (distance as f64 / 64.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_even_length_averages_middle_two() {
        assert_eq!(median_of(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn median_of_odd_length_is_middle_value() {
        assert_eq!(median_of(&[5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn hamming_similarity_is_symmetric() {
        let a = 0b1010_1010u64;
        let b = 0b0110_1001u64;
        assert_eq!(hamming_similarity(a, b), hamming_similarity(b, a));
    }

    #[test]
    fn identical_hashes_have_similarity_one() {
        assert_eq!(hamming_similarity(42, 42), 1.0);
    }

    #[test]
    fn fully_inverted_hash_has_similarity_zero() {
        assert_eq!(hamming_similarity(0, u64::MAX), 0.0);
    }

    #[test]
    fn unsupported_extension_bypasses_fingerprinter() {
        assert!(compute_fingerprint("file.tiff", b"whatever").is_none());
    }

    #[test]
    fn undecodable_image_bytes_return_none() {
        assert!(compute_fingerprint("file.png", b"not a real png").is_none());
    }
}
