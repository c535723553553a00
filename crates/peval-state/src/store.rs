//! The comment store boundary.
//!
//! Template parsing never talks to GitHub itself. It is handed an ordered
//! snapshot of an issue's comments and, after an edit, hands back a new body
//! for one of them. `CommentStore` is that seam: in-memory fakes for tests,
//! a JSON directory for offline work, and a REST client can all sit behind it.

use async_trait::async_trait;
use peval_core::RawComment;

use crate::context::RepoContext;
use crate::error::StoreResult;

/// Source and sink of issue comments.
///
/// Guarantees:
/// - `list_comments` returns comments in the order they were posted.
/// - `update_comment` replaces only the body (and `updated_at`) of the named
///   comment; id, author and position are preserved.
/// - A successful `update_comment` is visible to the next `list_comments`.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// All comments on an issue, oldest first.
    async fn list_comments(&self, ctx: &RepoContext, issue: u64) -> StoreResult<Vec<RawComment>>;

    /// Replace a comment's body and return the stored comment.
    async fn update_comment(
        &self,
        ctx: &RepoContext,
        issue: u64,
        comment_id: u64,
        body: &str,
    ) -> StoreResult<RawComment>;
}
