//! Data model (spec §3): input DTO, per-file record, and the result
//! types returned from [`crate::analyze`].

mod raw_file;
mod record;
mod result;

pub use raw_file::RawFile;
pub use record::FileRecord;
pub use result::{DedupResult, DuplicateGroup, DuplicateMatch, GroupKind, MatchKind};
