use crate::gitlab::PipelineStatus;

/// Shown when a ref has no pipelines at all.
pub const NO_PIPELINE: &str = "⚪";
/// Marks pipelines that ran on a merge-train ref.
pub const MERGE_TRAIN: &str = "🚂";
/// Shown when a configured ref cannot be found.
pub const NOT_FOUND: &str = "❓";
/// Shown when GitLab cannot be reached.
pub const NO_CONNECTION: &str = "💔";

/// Map a pipeline status to its menu glyph.
pub fn status_glyph(status: PipelineStatus) -> &'static str {
    match status {
        PipelineStatus::Created => "🌀",
        PipelineStatus::WaitingForResource => "⏳",
        PipelineStatus::Preparing => "🔧",
        PipelineStatus::Pending => "⏸",
        PipelineStatus::Running => "🔄",
        PipelineStatus::Success => "✅",
        PipelineStatus::Failed => "❌",
        PipelineStatus::Canceled => "✖️",
        PipelineStatus::Skipped => "➖",
        PipelineStatus::Manual => "🎛",
        PipelineStatus::Scheduled => "📆",
        PipelineStatus::Unknown => "?",
    }
}
