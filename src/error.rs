//! Error taxonomy for the dedup engine.
//!
//! `DecodeFailure` and `EmptyFile` are absorbed at the point they occur and
//! never become a `DedupError`.

use thiserror::Error;

/// Fatal errors surfaced by the engine.
#[derive(Error, Debug)]
pub enum DedupError {
    /// Non-positive chunk size, out-of-range threshold, or a malformed `RawFile`.
    #[error("invalid input: {0}")]
    InputShape(String),

    /// Hash length mismatch, index pointing outside the record vector, etc.
    #[error("internal invariant violated in stage `{stage}`: {detail}")]
    InternalInvariant {
        stage: &'static str,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, DedupError>;
