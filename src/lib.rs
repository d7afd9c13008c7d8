//! # dupegrep
//!
//! A library for finding exact, partial, and visually similar duplicate
//! files in a batch of content.
//!
//! The core never touches a filesystem: it is handed a slice of
//! [`RawFile`] values already carrying their bytes and returns a single
//! [`DedupResult`] describing every exact, partial, and visual
//! relationship found, plus the duplicate groups synthesized from them.
//! Acquisition (walking a directory, excluding patterns, reading bytes)
//! is entirely the host's job; see the `dupegrep` binary for the native
//! CLI host built on top of this library.
//!
//! ## Example
//!
//! ```no_run
//! use dupegrep::{analyze, RawFile};
//! use std::path::PathBuf;
//!
//! let files = vec![RawFile {
//!     path: PathBuf::from("a.txt"),
//!     name: "a.txt".to_string(),
//!     size: 5,
//!     bytes: b"hello".to_vec(),
//!     mod_time: 0,
//!     video_frame_hashes: None,
//! }];
//!
//! let result = analyze(&files, 0.5, 65536, None).unwrap();
//! ```

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod exact;
pub mod group;
pub mod hashing;
pub mod index;
pub mod models;
pub mod phash;
pub mod process;
pub mod progress;
pub mod scanner;
pub mod tree;
pub mod visual;

// Re-export main types for convenience
pub use analyze::analyze;
pub use error::{DedupError, Result};
pub use models::{DedupResult, DuplicateGroup, DuplicateMatch, FileRecord, GroupKind, MatchKind, RawFile};
pub use progress::{ProgressEvent, ProgressSink};
