//! Stateless progress reporting sink.

/// One progress update emitted by a stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    /// Units of work completed so far within the current stage.
    pub current: u64,
    /// Total units of work for the current stage.
    pub total: u64,
    /// Canonical, human-readable stage label.
    pub message: String,
    /// Coarse percentage in `[0, 100]`.
    pub percent: u8,
}

impl ProgressEvent {
    pub fn new(current: u64, total: u64, message: impl Into<String>, percent: u8) -> Self {
        Self {
            current,
            total,
            message: message.into(),
            percent,
        }
    }
}

/// A sink that stage entry points report through.
pub type ProgressSink<'a> = dyn FnMut(ProgressEvent) + 'a;

pub(crate) fn report(sink: &mut Option<&mut ProgressSink<'_>>, event: ProgressEvent) {
    if let Some(sink) = sink.as_mut() {
        sink(event);
    }
}

/// Canonical stage-boundary labels.
pub mod labels {
    pub const BUILDING_CHUNK_INDEX: &str = "Building chunk index...";
    pub const FINDING_EXACT_DUPLICATES: &str = "Finding exact duplicates...";
    pub const FINDING_SIMILAR_FILES: &str = "Finding similar files...";
    pub const FINDING_VISUAL_DUPLICATES: &str = "Finding visually similar media...";
    pub const CREATING_SMART_GROUPS: &str = "Creating smart groups...";
    pub const BUILDING_FILE_TREE: &str = "Building file tree...";
    pub const ANALYSIS_COMPLETE: &str = "Analysis complete!";

    pub fn processing(name: &str) -> String {
        format!("Processing {name}")
    }
}
