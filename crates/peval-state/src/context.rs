//! Repository context passed to every store call.

use serde::{Deserialize, Serialize};

pub const ORG_ENV: &str = "PEVAL_ORG";
pub const REPO_ENV: &str = "PEVAL_REPO";

const DEFAULT_ORG: &str = "testathor";
const DEFAULT_REPO: &str = "pe";

/// The GitHub organisation and repository a PE phase runs in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoContext {
    pub org: String,
    pub repo: String,
}

impl Default for RepoContext {
    fn default() -> Self {
        RepoContext {
            org: std::env::var(ORG_ENV).unwrap_or_else(|_| DEFAULT_ORG.to_string()),
            repo: std::env::var(REPO_ENV).unwrap_or_else(|_| DEFAULT_REPO.to_string()),
        }
    }
}

impl RepoContext {
    /// Context from `PEVAL_ORG` / `PEVAL_REPO`, falling back to `testathor/pe`.
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn new(org: &str, repo: &str) -> Self {
        RepoContext {
            org: org.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Same organisation, different repository (each PE phase has its own).
    pub fn with_repo(mut self, repo: &str) -> Self {
        self.repo = repo.to_string();
        self
    }

    /// `org/repo`, as GitHub writes it.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }
}

impl std::fmt::Display for RepoContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.org, self.repo)
    }
}
