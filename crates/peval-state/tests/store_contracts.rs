//! Contract tests for CommentStore.
//!
//! Each contract is written once against `&dyn CommentStore` and run against
//! both the in-memory fake and the filesystem store.

use peval_core::{
    require_conforming, RawComment, SectionTitle, Template, TesterResponseTemplate,
    GITHUB_UI_EDIT_WARNING,
};
use peval_state::{CommentStore, FsCommentStore, MemoryCommentStore, RepoContext, StoreError};

const ISSUE: u64 = 7;

fn ctx() -> RepoContext {
    RepoContext::new("testathor", "pe")
}

fn tester_response_body() -> String {
    format!(
        "{GITHUB_UI_EDIT_WARNING}\n\n\
         # Team's Response\n\n\
         Not a bug, documented behaviour.\n\n\
         # Items for the Tester to Verify\n\n\
         ## :question: Issue response\n\n\
         Team chose to reject this.\n\n\
         Team chose: Rejected\n\n\
         - [ ] I disagree\n\n\
         -------------------\n"
    )
}

fn thread() -> Vec<RawComment> {
    vec![
        RawComment::new(100, "tester", "Found a crash when saving."),
        RawComment::new(101, "catcher-bot", tester_response_body()),
        RawComment::new(102, "tester", "Any update?"),
    ]
}

async fn memory_store() -> MemoryCommentStore {
    let store = MemoryCommentStore::new();
    store.insert_issue(&ctx(), ISSUE, thread());
    store
}

async fn fs_store(dir: &tempfile::TempDir) -> FsCommentStore {
    let store = FsCommentStore::new(dir.path());
    store.insert_issue(&ctx(), ISSUE, &thread()).await.unwrap();
    store
}

// ===========================================================================
// Contracts
// ===========================================================================

async fn lists_in_posting_order(store: &dyn CommentStore) {
    let comments = store.list_comments(&ctx(), ISSUE).await.unwrap();
    let ids: Vec<u64> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![100, 101, 102]);
    assert_eq!(comments[1].author, "catcher-bot");
}

async fn unknown_issue_is_not_found(store: &dyn CommentStore) {
    let err = store.list_comments(&ctx(), 999).await.unwrap_err();
    assert!(matches!(err, StoreError::IssueNotFound { issue: 999, .. }));

    let other_repo = ctx().with_repo("pe-dry-run");
    let err = store.list_comments(&other_repo, ISSUE).await.unwrap_err();
    assert!(matches!(err, StoreError::IssueNotFound { .. }));
}

async fn update_replaces_body_only(store: &dyn CommentStore) {
    let before = store.list_comments(&ctx(), ISSUE).await.unwrap();
    let updated = store
        .update_comment(&ctx(), ISSUE, 102, "Never mind, works now.")
        .await
        .unwrap();

    assert_eq!(updated.id, 102);
    assert_eq!(updated.author, "tester");
    assert_eq!(updated.body, "Never mind, works now.");
    assert_eq!(updated.created_at, before[2].created_at);
    assert!(updated.updated_at >= before[2].updated_at);

    let after = store.list_comments(&ctx(), ISSUE).await.unwrap();
    assert_eq!(after.len(), 3);
    assert_eq!(after[2], updated);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);
}

async fn update_unknown_comment_fails(store: &dyn CommentStore) {
    let err = store
        .update_comment(&ctx(), ISSUE, 555, "body")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::CommentNotFound {
            comment_id: 555,
            ..
        }
    ));

    let err = store
        .update_comment(&ctx(), 999, 100, "body")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::IssueNotFound { .. }));
}

/// Select, edit, render, write back, select again.
async fn edited_template_survives_write_back(store: &dyn CommentStore) {
    let comments = store.list_comments(&ctx(), ISSUE).await.unwrap();
    let (record, comment) = require_conforming::<TesterResponseTemplate>(&comments).unwrap();
    assert_eq!(comment.id, 101);
    assert!(!record.tester_disagree());

    let edited = record
        .with_disagreement(&SectionTitle::Response, "The crash is reproducible.")
        .unwrap();
    let body = TesterResponseTemplate::render(&edited).unwrap();
    store
        .update_comment(&ctx(), ISSUE, comment.id, &body)
        .await
        .unwrap();

    let comments = store.list_comments(&ctx(), ISSUE).await.unwrap();
    let (reread, comment) = require_conforming::<TesterResponseTemplate>(&comments).unwrap();
    assert_eq!(comment.id, 101);
    assert_eq!(reread, edited);
    assert!(reread.tester_disagree());
}

// ===========================================================================
// MemoryCommentStore
// ===========================================================================

#[tokio::test]
async fn memory_lists_in_posting_order() {
    lists_in_posting_order(&memory_store().await).await;
}

#[tokio::test]
async fn memory_unknown_issue_is_not_found() {
    unknown_issue_is_not_found(&memory_store().await).await;
}

#[tokio::test]
async fn memory_update_replaces_body_only() {
    update_replaces_body_only(&memory_store().await).await;
}

#[tokio::test]
async fn memory_update_unknown_comment_fails() {
    update_unknown_comment_fails(&memory_store().await).await;
}

#[tokio::test]
async fn memory_edited_template_survives_write_back() {
    edited_template_survives_write_back(&memory_store().await).await;
}

// ===========================================================================
// FsCommentStore
// ===========================================================================

#[tokio::test]
async fn fs_lists_in_posting_order() {
    let dir = tempfile::tempdir().unwrap();
    lists_in_posting_order(&fs_store(&dir).await).await;
}

#[tokio::test]
async fn fs_unknown_issue_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    unknown_issue_is_not_found(&fs_store(&dir).await).await;
}

#[tokio::test]
async fn fs_update_replaces_body_only() {
    let dir = tempfile::tempdir().unwrap();
    update_replaces_body_only(&fs_store(&dir).await).await;
}

#[tokio::test]
async fn fs_update_unknown_comment_fails() {
    let dir = tempfile::tempdir().unwrap();
    update_unknown_comment_fails(&fs_store(&dir).await).await;
}

#[tokio::test]
async fn fs_edited_template_survives_write_back() {
    let dir = tempfile::tempdir().unwrap();
    edited_template_survives_write_back(&fs_store(&dir).await).await;
}

#[tokio::test]
async fn fs_reads_github_api_dump() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsCommentStore::new(dir.path());
    let path = store.issue_path(&ctx(), 3);
    tokio::fs::create_dir_all(path.parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(
        &path,
        r#"[
            {
                "id": 1,
                "node_id": "IC_1",
                "body": "first",
                "user": { "login": "alice", "id": 10 },
                "created_at": "2026-03-01T10:00:00Z",
                "updated_at": "2026-03-01T10:00:00Z",
                "author_association": "NONE"
            },
            {
                "id": 2,
                "body": null,
                "user": null,
                "created_at": "2026-03-01T11:00:00Z",
                "updated_at": "2026-03-01T11:00:00Z"
            }
        ]"#,
    )
    .await
    .unwrap();

    let comments = store.list_comments(&ctx(), 3).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].author, "alice");
    assert_eq!(comments[1].body, "");
}

#[tokio::test]
async fn fs_corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsCommentStore::new(dir.path());
    let path = store.issue_path(&ctx(), 4);
    tokio::fs::create_dir_all(path.parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(&path, "not json").await.unwrap();

    let err = store.list_comments(&ctx(), 4).await.unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}
