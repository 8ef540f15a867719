use clap::Parser;
use std::path::PathBuf;

use crate::app;
use crate::config::Config;
use crate::error::{GlbarError, Result};
use crate::gitlab::{GitLabClient, DEFAULT_PIPELINE_COUNT};

/// GitLab pipeline status in your menu bar.
///
/// Prints xbar/SwiftBar menu markup to stdout; the host re-invokes this
/// program on its refresh timer. Everything can also come from the
/// `VAR_*` environment variables the host sets from its plugin settings.
#[derive(Parser)]
#[command(name = "glbar")]
#[command(author, version, about = "GitLab pipeline status in your menu bar", long_about = None)]
pub struct Cli {
    /// GitLab personal API token
    #[arg(short, long, env = "VAR_GITLAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Explicit configuration file: JSON mapping project paths to branch lists
    #[arg(short, long, env = "VAR_CONFIG_PATHNAME")]
    config: Option<PathBuf>,

    /// Auto-discovery configuration file: JSON {"projects": [...]}
    #[arg(short, long, env = "VAR_PROJECTS_PATHNAME")]
    projects: Option<PathBuf>,

    /// GitLab instance base URL
    #[arg(short, long, env = "VAR_GITLAB_URL", default_value = "https://gitlab.com")]
    url: String,

    /// How many recent pipelines to show per ref
    #[arg(short = 'n', long, default_value_t = DEFAULT_PIPELINE_COUNT)]
    pipelines: usize,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let token = self.token.as_deref().ok_or_else(|| {
            GlbarError::Config(
                "GitLab personal API token is not configured; set VAR_GITLAB_TOKEN".to_string(),
            )
        })?;

        // Resolved before the client exists, so an ambiguous configuration
        // fails without touching the network.
        let config = Config::resolve(self.config.as_deref(), self.projects.as_deref())?;
        let client = GitLabClient::new(&self.url, token)?;

        app::run(&client, config, self.pipelines).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gitlab_com_and_three_pipelines() {
        let cli = Cli::try_parse_from(["glbar", "--token", "glpat-x"]).unwrap();
        assert_eq!(cli.url, "https://gitlab.com");
        assert_eq!(cli.pipelines, DEFAULT_PIPELINE_COUNT);
    }

    #[tokio::test]
    async fn missing_token_is_a_descriptive_startup_error() {
        let cli = Cli {
            token: None,
            config: None,
            projects: None,
            url: "https://gitlab.com".to_string(),
            pipelines: DEFAULT_PIPELINE_COUNT,
        };

        let err = cli.execute().await.unwrap_err();
        assert!(err.to_string().contains("token is not configured"));
    }
}
