//! Structured observability hooks for template selection and comment updates.
//!
//! Events are emitted with an `event` field naming what happened, so they can
//! be filtered in JSON log output (see [`crate::init_tracing`]).

use tracing::{debug, info, warn};

/// RAII guard that tags everything logged while it lives with the issue being worked on.
pub struct IssueSpan {
    _span: tracing::span::EnteredSpan,
}

impl IssueSpan {
    /// Create and enter a span for `repo#issue`.
    pub fn enter(repo: &str, issue: u64) -> Self {
        let span = tracing::info_span!("peval.issue", repo = %repo, issue = issue);
        Self {
            _span: span.entered(),
        }
    }
}

/// A candidate comment did not parse against the template.
pub fn emit_candidate_rejected(
    template: &str,
    comment_id: u64,
    line: usize,
    column: usize,
    reason: &dyn std::fmt::Display,
) {
    debug!(
        event = "template.candidate_rejected",
        template = %template,
        comment_id = comment_id,
        line = line,
        column = column,
        reason = %reason,
    );
}

/// A comment was committed to as the template's backing comment.
pub fn emit_template_selected(template: &str, comment_id: u64, body_digest: &str) {
    let short = body_digest.get(..12).unwrap_or(body_digest);
    info!(
        event = "template.selected",
        template = %template,
        comment_id = comment_id,
        body_digest = %short,
    );
}

/// No candidate conformed.
pub fn emit_template_not_conforming(template: &str, candidates: usize) {
    info!(
        event = "template.not_conforming",
        template = %template,
        candidates = candidates,
    );
}

/// More than one candidate conformed (warning level).
pub fn emit_template_ambiguous(template: &str, first: u64, second: u64, same_body: bool) {
    warn!(
        event = "template.ambiguous",
        template = %template,
        first = first,
        second = second,
        same_body = same_body,
    );
}

/// A re-rendered comment body was written back.
pub fn emit_comment_updated(template: &str, comment_id: u64, bytes: usize) {
    info!(
        event = "comment.updated",
        template = %template,
        comment_id = comment_id,
        bytes = bytes,
    );
}
