//! Error types for peval-state

use thiserror::Error;

/// Errors raised by comment stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No comments are recorded for the issue
    #[error("Issue not found: {repo}#{issue}")]
    IssueNotFound { repo: String, issue: u64 },

    /// The issue exists but has no comment with this id
    #[error("Comment {comment_id} not found on {repo}#{issue}")]
    CommentNotFound {
        repo: String,
        issue: u64,
        comment_id: u64,
    },

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored comment JSON could not be read or written
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
