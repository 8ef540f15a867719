use log::{info, warn};

use crate::config::{BranchSpec, ProjectBranches};
use crate::error::{GlbarError, Result};
use crate::gitlab::{GitLabClient, MergeRequest, Pipeline};
use crate::menu::{self, status_glyph, Line};

/// Renders the per-project status blocks of the menu.
///
/// Walks project -> branch -> merge request strictly in order, one
/// request at a time, so the output order matches the configuration.
pub struct StatusRenderer<'a> {
    client: &'a GitLabClient,
    pipeline_count: usize,
}

impl<'a> StatusRenderer<'a> {
    pub fn new(client: &'a GitLabClient, pipeline_count: usize) -> Self {
        Self {
            client,
            pipeline_count,
        }
    }

    /// One block per project, each terminated by a separator line.
    pub async fn render(&self, projects: &ProjectBranches) -> Result<Vec<Line>> {
        let mut lines = Vec::new();
        for (project, branches) in projects {
            self.render_project(&mut lines, project, branches).await?;
        }
        Ok(lines)
    }

    async fn render_project(
        &self,
        lines: &mut Vec<Line>,
        project: &str,
        branches: &[BranchSpec],
    ) -> Result<()> {
        info!("Rendering {project} ({} refs)", branches.len());
        lines.push(Line::new(project));

        for spec in branches {
            match self.render_branch(lines, project, spec).await {
                Ok(()) => {}
                Err(GlbarError::NotFound(_)) => {
                    warn!("{project}: {spec} not found");
                    lines.push(
                        Line::new(format!("{} {spec} not found", menu::NOT_FOUND)).color("red"),
                    );
                }
                // Unreachable network is reported once and the rest of this
                // project is skipped; the next project is still attempted.
                Err(GlbarError::Transport(e)) => {
                    warn!("{project}: connection failed: {e}");
                    lines.push(
                        Line::new(format!("{} No connection", menu::NO_CONNECTION)).color("red"),
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        lines.push(Line::separator());
        Ok(())
    }

    async fn render_branch(
        &self,
        lines: &mut Vec<Line>,
        project: &str,
        spec: &BranchSpec,
    ) -> Result<()> {
        let pipelines = self
            .client
            .latest_pipelines(project, spec, self.pipeline_count)
            .await?;

        match pipelines.first() {
            Some(latest) => lines.push(
                Line::new(format!("{} {spec}", status_glyph(latest.status))).href(&latest.web_url),
            ),
            None => lines.push(Line::new(format!("{} {spec}", menu::NO_PIPELINE))),
        }

        for pipeline in &pipelines {
            lines.push(detail_line(pipeline, 1));
        }

        // Merge requests hang off literal branches; a `!` spec already is one.
        if let BranchSpec::Ref(branch) = spec {
            for mr in self.client.merge_requests_for_branch(project, branch).await? {
                self.render_merge_request(lines, project, &mr).await?;
            }
        }

        Ok(())
    }

    async fn render_merge_request(
        &self,
        lines: &mut Vec<Line>,
        project: &str,
        mr: &MergeRequest,
    ) -> Result<()> {
        let pipelines = self
            .client
            .latest_merge_request_pipelines(project, mr.iid, self.pipeline_count)
            .await?;

        let glyph = pipelines
            .first()
            .map(|p| status_glyph(p.status))
            .unwrap_or(menu::NO_PIPELINE);
        lines.push(
            Line::new(format!("{glyph} !{} {}", mr.iid, mr.title))
                .indent(1)
                .href(&mr.web_url),
        );

        for pipeline in &pipelines {
            lines.push(detail_line(pipeline, 2));
        }

        Ok(())
    }
}

fn detail_line(pipeline: &Pipeline, depth: usize) -> Line {
    let mut text = format!(
        "{} #{} ⏱ {}",
        status_glyph(pipeline.status),
        pipeline.id,
        menu::normalize_time(pipeline.created_at)
    );
    if pipeline.is_merge_train() {
        text.push(' ');
        text.push_str(menu::MERGE_TRAIN);
    }
    Line::new(text).indent(depth).href(&pipeline.web_url)
}
