//! Record carried by the team's own response comment.

use serde::{Deserialize, Serialize};

/// The team's response to a bug report, plus its duplicate marker if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponseRecord {
    pub team_response: String,

    /// Issue number this report duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<u64>,
}

impl TeamResponseRecord {
    pub fn new(team_response: impl Into<String>) -> Self {
        Self {
            team_response: team_response.into(),
            duplicate_of: None,
        }
    }

    /// Mark this report as a duplicate of `issue`.
    pub fn with_duplicate_of(mut self, issue: u64) -> Self {
        self.duplicate_of = Some(issue);
        self
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate_of.is_some()
    }
}
