//! peval-state: where issue comments come from and go back to
//!
//! ## Key Components
//!
//! - `CommentStore`: async list/update of an issue's comments
//! - `RepoContext`: the organisation and repository being worked on
//! - `MemoryCommentStore`: in-memory fake for tests
//! - `FsCommentStore`: JSON files in GitHub's comment shape, one per issue

mod context;
mod error;
pub mod fakes;
pub mod fs;
pub mod store;

pub use context::{RepoContext, ORG_ENV, REPO_ENV};
pub use error::{StoreError, StoreResult};
pub use fakes::MemoryCommentStore;
pub use fs::FsCommentStore;
pub use store::CommentStore;
