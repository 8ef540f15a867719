use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{GlbarError, Result};

/// A single tracked reference from the configuration file.
///
/// Either a literal branch name, or `!<iid>` naming a merge request whose
/// pipelines live under the synthetic merge-request refs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum BranchSpec {
    Ref(String),
    MergeRequest(u64),
}

impl TryFrom<String> for BranchSpec {
    type Error = GlbarError;

    fn try_from(value: String) -> Result<Self> {
        if value.is_empty() {
            return Err(GlbarError::Config(
                "branch specification must not be empty".to_string(),
            ));
        }

        match value.strip_prefix('!') {
            Some(rest) => {
                let iid = rest.parse::<u64>().map_err(|_| {
                    GlbarError::Config(format!(
                        "'{value}' is not a valid merge request reference; expected '!' followed by a number"
                    ))
                })?;
                Ok(BranchSpec::MergeRequest(iid))
            }
            None => Ok(BranchSpec::Ref(value)),
        }
    }
}

impl fmt::Display for BranchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchSpec::Ref(name) => write!(f, "{name}"),
            BranchSpec::MergeRequest(iid) => write!(f, "!{iid}"),
        }
    }
}

/// Project path to its ordered list of tracked branch specs.
///
/// `IndexMap` keeps the file order, which is also the rendering order.
pub type ProjectBranches = IndexMap<String, Vec<BranchSpec>>;

/// Resolved configuration source.
///
/// Exactly one of the two shapes is active per run; `Auto` still needs the
/// network to expand projects into branch lists (see `app::resolve_branches`).
#[derive(Debug)]
pub enum Config {
    /// Explicit project -> branches mapping, final as parsed.
    Explicit(ProjectBranches),
    /// Project list; branches come from the user's open merge requests.
    Auto { projects: Vec<String> },
}

#[derive(Debug, Deserialize)]
struct AutoConfig {
    projects: Vec<String>,
}

impl Config {
    /// Determine the active configuration mode from the two optional paths.
    ///
    /// Existence on disk decides: exactly one of the files must exist.
    pub fn resolve(explicit_path: Option<&Path>, auto_path: Option<&Path>) -> Result<Self> {
        let explicit_path = explicit_path.map(expand_home).filter(|p| p.exists());
        let auto_path = auto_path.map(expand_home).filter(|p| p.exists());

        match (explicit_path, auto_path) {
            (None, None) => Err(GlbarError::Config(
                "no configuration file found; set VAR_CONFIG_PATHNAME or VAR_PROJECTS_PATHNAME"
                    .to_string(),
            )),
            (Some(explicit), Some(auto)) => Err(GlbarError::Config(format!(
                "both {} and {} exist; choose only one configuration mode",
                explicit.display(),
                auto.display()
            ))),
            (Some(path), None) => {
                let contents = std::fs::read_to_string(&path)?;
                let branches: ProjectBranches = serde_json::from_str(&contents)?;
                Ok(Config::Explicit(branches))
            }
            (None, Some(path)) => {
                let contents = std::fs::read_to_string(&path)?;
                let auto: AutoConfig = serde_json::from_str(&contents)?;
                Ok(Config::Auto {
                    projects: auto.projects,
                })
            }
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    if path == Path::new("~") {
        home
    } else if let Ok(rest) = path.strip_prefix("~") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}
