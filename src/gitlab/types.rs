use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Status of a GitLab CI/CD pipeline.
///
/// Covers every status the API documents today; anything the server adds
/// later lands in `Unknown` so deserialization never fails on new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Created,
    WaitingForResource,
    Preparing,
    Pending,
    Running,
    Success,
    Failed,
    Canceled,
    Skipped,
    Manual,
    Scheduled,
    #[serde(other)]
    Unknown,
}

impl PipelineStatus {
    /// All recognized variants, in API documentation order.
    pub const ALL: [PipelineStatus; 12] = [
        PipelineStatus::Created,
        PipelineStatus::WaitingForResource,
        PipelineStatus::Preparing,
        PipelineStatus::Pending,
        PipelineStatus::Running,
        PipelineStatus::Success,
        PipelineStatus::Failed,
        PipelineStatus::Canceled,
        PipelineStatus::Skipped,
        PipelineStatus::Manual,
        PipelineStatus::Scheduled,
        PipelineStatus::Unknown,
    ];
}

/// A single pipeline run, as returned by `GET projects/:id/pipelines`.
#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    pub id: u64,
    pub status: PipelineStatus,
    /// Git reference the pipeline ran for: a branch name or a synthetic
    /// `refs/merge-requests/<iid>/head` / `.../train` ref.
    #[serde(rename = "ref")]
    pub ref_: String,
    pub web_url: String,
    pub created_at: DateTime<Utc>,
}

impl Pipeline {
    /// Whether this pipeline ran on a merge-train ref rather than the
    /// merge request's head ref.
    pub fn is_merge_train(&self) -> bool {
        self.ref_.starts_with("refs/merge-requests/") && self.ref_.ends_with("/train")
    }
}

/// A merge request, reduced to the fields the menu needs.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequest {
    pub iid: u64,
    pub title: String,
    pub source_branch: String,
    pub web_url: String,
}

/// A repository branch from `GET projects/:id/repository/branches`.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    pub merged: bool,
}

/// The authenticated user, from `GET user`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub username: String,
}
