mod client;
mod types;

pub use client::{GitLabClient, DEFAULT_PIPELINE_COUNT};
pub use types::{Branch, MergeRequest, Pipeline, PipelineStatus, User};
