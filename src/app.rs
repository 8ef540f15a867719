use log::info;

use crate::config::{BranchSpec, Config, ProjectBranches};
use crate::error::Result;
use crate::gitlab::GitLabClient;
use crate::menu::{Line, GITLAB_LOGO};
use crate::render::StatusRenderer;

/// Expand the resolved configuration into the final project -> branches map.
///
/// Explicit mode is already final. Auto mode resolves the token owner's
/// username once, then tracks the source branch of every open merge
/// request assigned to them, project by project.
pub async fn resolve_branches(config: Config, client: &GitLabClient) -> Result<ProjectBranches> {
    match config {
        Config::Explicit(branches) => Ok(branches),
        Config::Auto { projects } => {
            let username = client.current_username().await?;
            info!("Discovering merge requests assigned to {username}");

            let mut branches = ProjectBranches::new();
            for project in projects {
                let specs = client
                    .my_open_merge_requests(&project, &username)
                    .await?
                    .into_iter()
                    .map(|mr| BranchSpec::Ref(mr.source_branch))
                    .collect();
                branches.insert(project, specs);
            }
            Ok(branches)
        }
    }
}

/// Top of the menu: the GitLab logo shown in the bar itself, then the
/// separator opening the dropdown.
pub fn header() -> Vec<Line> {
    vec![Line::new("").image(GITLAB_LOGO), Line::separator()]
}

/// Resolve the configuration, render everything and print it for the host.
pub async fn run(client: &GitLabClient, config: Config, pipeline_count: usize) -> Result<()> {
    let branches = resolve_branches(config, client).await?;

    for line in header() {
        println!("{line}");
    }

    let renderer = StatusRenderer::new(client, pipeline_count);
    for line in renderer.render(&branches).await? {
        println!("{line}");
    }

    Ok(())
}
