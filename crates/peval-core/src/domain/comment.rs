//! Issue comments as handed over by the comment store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Snapshot of one issue comment.
///
/// (De)serialises in GitHub's issue-comment shape, so a `GET
/// /repos/{owner}/{repo}/issues/{n}/comments` response body can be read as a
/// `Vec<RawComment>` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GithubComment", into = "GithubComment")]
pub struct RawComment {
    /// GitHub comment id.
    pub id: u64,

    /// Markdown body; this is where template state lives.
    pub body: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Login of the comment author.
    pub author: String,
}

impl RawComment {
    /// Create a comment stamped with the current time.
    pub fn new(id: u64, author: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            body: body.into(),
            created_at: now,
            updated_at: now,
            author: author.into(),
        }
    }

    /// SHA-256 hex digest of the body.
    pub fn body_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.body.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GithubUser {
    login: String,
}

/// Wire shape of a GitHub issue comment (only the fields we keep).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GithubComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    user: Option<GithubUser>,
}

impl From<GithubComment> for RawComment {
    fn from(wire: GithubComment) -> Self {
        Self {
            id: wire.id,
            body: wire.body.unwrap_or_default(),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            author: wire.user.map(|user| user.login).unwrap_or_default(),
        }
    }
}

impl From<RawComment> for GithubComment {
    fn from(comment: RawComment) -> Self {
        Self {
            id: comment.id,
            body: Some(comment.body),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            user: Some(GithubUser {
                login: comment.author,
            }),
        }
    }
}
