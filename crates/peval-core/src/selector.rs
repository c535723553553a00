//! Comment conformance selection.
//!
//! Given every comment on an issue, find the one a [`Template`] recognises.
//! Candidates are tried in the order given (normally chronological) and the
//! first that parses wins. Each call re-scans; nothing is cached.

use serde::Serialize;

use crate::domain::{PevalError, RawComment, Result};
use crate::obs;
use crate::templates::Template;

/// Result of matching a template against an issue's comments.
///
/// A non-conforming value carries nothing: there is no partially parsed
/// record to look at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParsedTemplate<T> {
    Conforming { record: T, comment: RawComment },
    NotConforming,
}

impl<T> ParsedTemplate<T> {
    /// True when no comment conformed.
    pub fn parse_failure(&self) -> bool {
        matches!(self, ParsedTemplate::NotConforming)
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            ParsedTemplate::Conforming { record, .. } => Some(record),
            ParsedTemplate::NotConforming => None,
        }
    }

    /// The comment the record was read from.
    pub fn comment(&self) -> Option<&RawComment> {
        match self {
            ParsedTemplate::Conforming { comment, .. } => Some(comment),
            ParsedTemplate::NotConforming => None,
        }
    }

    pub fn into_parts(self) -> Option<(T, RawComment)> {
        match self {
            ParsedTemplate::Conforming { record, comment } => Some((record, comment)),
            ParsedTemplate::NotConforming => None,
        }
    }
}

/// Commit to the first comment, in input order, that conforms to `T`.
pub fn select_conforming<T: Template>(comments: &[RawComment]) -> ParsedTemplate<T::Record> {
    for comment in comments {
        match T::parse(&comment.body) {
            Ok(record) => {
                obs::emit_template_selected(T::NAME, comment.id, &comment.body_digest());
                return ParsedTemplate::Conforming {
                    record,
                    comment: comment.clone(),
                };
            }
            Err(failure) => {
                let (line, column) = failure.line_col(&comment.body);
                obs::emit_candidate_rejected(T::NAME, comment.id, line, column, &failure.kind);
            }
        }
    }

    obs::emit_template_not_conforming(T::NAME, comments.len());
    ParsedTemplate::NotConforming
}

/// Like [`select_conforming`], but refuses to choose when two distinct
/// comments conform.
pub fn select_unique<T: Template>(comments: &[RawComment]) -> Result<ParsedTemplate<T::Record>> {
    let mut conforming = comments
        .iter()
        .filter_map(|comment| T::parse(&comment.body).ok().map(|record| (record, comment)));

    let Some((record, first)) = conforming.next() else {
        obs::emit_template_not_conforming(T::NAME, comments.len());
        return Ok(ParsedTemplate::NotConforming);
    };

    if let Some((_, second)) = conforming.find(|(_, comment)| comment.id != first.id) {
        obs::emit_template_ambiguous(T::NAME, first.id, second.id, first.body == second.body);
        return Err(PevalError::AmbiguousConformance {
            template: T::NAME,
            first: first.id,
            second: second.id,
        });
    }

    obs::emit_template_selected(T::NAME, first.id, &first.body_digest());
    Ok(ParsedTemplate::Conforming {
        record,
        comment: first.clone(),
    })
}

/// Select and unwrap, turning "nothing conformed" into an error.
pub fn require_conforming<T: Template>(comments: &[RawComment]) -> Result<(T::Record, RawComment)> {
    select_conforming::<T>(comments)
        .into_parts()
        .ok_or(PevalError::NoConformingComment {
            template: T::NAME,
            candidates: comments.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TeamResponseRecord;
    use crate::templates::TeamResponseTemplate;

    fn team_comment(id: u64, text: &str) -> RawComment {
        RawComment::new(
            id,
            "team",
            TeamResponseTemplate::render(&TeamResponseRecord::new(text)).unwrap(),
        )
    }

    #[test]
    fn empty_candidate_list_does_not_conform() {
        let parsed = select_conforming::<TeamResponseTemplate>(&[]);
        assert!(parsed.parse_failure());
        assert!(parsed.record().is_none());
        assert!(parsed.comment().is_none());
    }

    #[test]
    fn first_match_wins() {
        let comments = vec![
            RawComment::new(1, "bot", "unrelated"),
            team_comment(2, "first"),
            team_comment(3, "second"),
        ];
        let parsed = select_conforming::<TeamResponseTemplate>(&comments);
        assert_eq!(parsed.comment().map(|c| c.id), Some(2));
        assert_eq!(parsed.record().map(|r| r.team_response.as_str()), Some("first"));
    }

    #[test]
    fn unique_selection_rejects_two_conforming_comments() {
        let comments = vec![team_comment(2, "first"), team_comment(3, "second")];
        let err = select_unique::<TeamResponseTemplate>(&comments).unwrap_err();
        assert!(matches!(
            err,
            PevalError::AmbiguousConformance { first: 2, second: 3, .. }
        ));
    }

    #[test]
    fn unique_selection_agrees_with_first_match_when_unambiguous() {
        let comments = vec![RawComment::new(1, "bot", "unrelated"), team_comment(2, "only")];
        let unique = select_unique::<TeamResponseTemplate>(&comments).expect("unique");
        assert_eq!(unique, select_conforming::<TeamResponseTemplate>(&comments));

        let none = select_unique::<TeamResponseTemplate>(&comments[..1]).expect("no match is ok");
        assert!(none.parse_failure());
    }

    #[test]
    fn require_conforming_reports_candidate_count() {
        let comments = vec![RawComment::new(1, "bot", "a"), RawComment::new(2, "bot", "b")];
        let err = require_conforming::<TeamResponseTemplate>(&comments).unwrap_err();
        assert!(matches!(
            err,
            PevalError::NoConformingComment { candidates: 2, .. }
        ));
    }

    #[test]
    fn parsed_template_serializes_with_status_tag() {
        let parsed = select_conforming::<TeamResponseTemplate>(&[team_comment(9, "ok")]);
        let value = serde_json::to_value(&parsed).expect("serialize");
        assert_eq!(value["status"], "conforming");
        assert_eq!(value["record"]["team_response"], "ok");
        assert_eq!(value["comment"]["id"], 9);

        let value = serde_json::to_value(ParsedTemplate::<TeamResponseRecord>::NotConforming)
            .expect("serialize");
        assert_eq!(value["status"], "not_conforming");
    }
}
