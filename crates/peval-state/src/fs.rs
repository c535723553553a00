//! Filesystem comment store.
//!
//! Each issue is one JSON file holding the comment array exactly as GitHub's
//! list-comments endpoint returns it:
//!
//! ```text
//! <root>/<org>/<repo>/issue-<n>.json
//! ```
//!
//! so a thread can be captured with `gh api` and worked on offline.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use peval_core::RawComment;
use tracing::debug;

use crate::context::RepoContext;
use crate::error::{StoreError, StoreResult};
use crate::store::CommentStore;

/// Comment store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsCommentStore {
    root: PathBuf,
}

impl FsCommentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the JSON file backing an issue.
    pub fn issue_path(&self, ctx: &RepoContext, issue: u64) -> PathBuf {
        self.root
            .join(&ctx.org)
            .join(&ctx.repo)
            .join(format!("issue-{issue}.json"))
    }

    /// Write a whole comment thread, creating directories as needed.
    pub async fn insert_issue(
        &self,
        ctx: &RepoContext,
        issue: u64,
        comments: &[RawComment],
    ) -> StoreResult<()> {
        let path = self.issue_path(ctx, issue);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(comments)?;
        tokio::fs::write(&path, json).await?;
        debug!(path = %path.display(), comments = comments.len(), "issue written");
        Ok(())
    }

    async fn read_issue(&self, ctx: &RepoContext, issue: u64) -> StoreResult<Vec<RawComment>> {
        let path = self.issue_path(ctx, issue);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::IssueNotFound {
                    repo: ctx.slug(),
                    issue,
                })
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CommentStore for FsCommentStore {
    async fn list_comments(&self, ctx: &RepoContext, issue: u64) -> StoreResult<Vec<RawComment>> {
        self.read_issue(ctx, issue).await
    }

    async fn update_comment(
        &self,
        ctx: &RepoContext,
        issue: u64,
        comment_id: u64,
        body: &str,
    ) -> StoreResult<RawComment> {
        let mut comments = self.read_issue(ctx, issue).await?;

        let comment = comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| StoreError::CommentNotFound {
                repo: ctx.slug(),
                issue,
                comment_id,
            })?;
        comment.body = body.to_string();
        comment.updated_at = Utc::now();
        let updated = comment.clone();

        self.insert_issue(ctx, issue, &comments).await?;
        Ok(updated)
    }
}
