//! In-memory comment store (testing only)

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use peval_core::RawComment;

use crate::context::RepoContext;
use crate::error::{StoreError, StoreResult};
use crate::store::CommentStore;

type IssueKey = (String, String, u64);

fn key(ctx: &RepoContext, issue: u64) -> IssueKey {
    (ctx.org.clone(), ctx.repo.clone(), issue)
}

/// Comment store backed by a `HashMap<(org, repo, issue), comments>`.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    issues: Mutex<HashMap<IssueKey, Vec<RawComment>>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or replace) the comment thread of an issue.
    pub fn insert_issue(&self, ctx: &RepoContext, issue: u64, comments: Vec<RawComment>) {
        let mut issues = self.issues.lock().unwrap();
        issues.insert(key(ctx, issue), comments);
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn list_comments(&self, ctx: &RepoContext, issue: u64) -> StoreResult<Vec<RawComment>> {
        let issues = self.issues.lock().unwrap();
        issues
            .get(&key(ctx, issue))
            .cloned()
            .ok_or_else(|| StoreError::IssueNotFound {
                repo: ctx.slug(),
                issue,
            })
    }

    async fn update_comment(
        &self,
        ctx: &RepoContext,
        issue: u64,
        comment_id: u64,
        body: &str,
    ) -> StoreResult<RawComment> {
        let mut issues = self.issues.lock().unwrap();
        let comments = issues
            .get_mut(&key(ctx, issue))
            .ok_or_else(|| StoreError::IssueNotFound {
                repo: ctx.slug(),
                issue,
            })?;

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
        Ok(comment.clone())
    }
}
