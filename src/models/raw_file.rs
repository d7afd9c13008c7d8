use std::path::PathBuf;

/// A single input file, supplied whole by the host.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// Stable path, unique within the batch.
    pub path: PathBuf,
    /// Display name (typically the file name component of `path`).
    pub name: String,
    /// Size in bytes; must equal `bytes.len()`.
    pub size: u64,
    /// Full content.
    pub bytes: Vec<u8>,
    /// Modification timestamp, host-defined units.
    pub mod_time: i64,
    /// Precomputed per-frame perceptual-hash sequence for video files.
    pub video_frame_hashes: Option<Vec<u64>>,
}

impl RawFile {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.size != self.bytes.len() as u64 {
            return Err(format!(
                "file `{}` declares size {} but carries {} bytes",
                self.path.display(),
                self.size,
                self.bytes.len()
            ));
        }
        Ok(())
    }
}
