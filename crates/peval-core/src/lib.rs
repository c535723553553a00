//! peval core library
//!
//! Typed parsing and rendering of the markdown comments that carry
//! peer-evaluation workflow state on GitHub issues.
//!
//! - [`grammar`]: total parser combinators over a cursor
//! - [`sections`]: parsers for the named blocks inside a comment
//! - [`templates`]: whole-comment grammars and their records
//! - [`selector`]: picking the comment on an issue that conforms to a template

pub mod domain;
pub mod grammar;
pub mod obs;
pub mod render;
pub mod sections;
pub mod selector;
pub mod telemetry;
pub mod templates;

pub use domain::{
    PevalError, RawComment, Result, Section, SectionTitle, TeamResponseRecord, TesterResponse,
    TesterResponseRecord, DISAGREE_CHECKBOX_DESCRIPTION,
};
pub use grammar::{ParseFailure, ParseFailureKind};
pub use obs::IssueSpan;
pub use render::{render_team_response_comment, render_tester_response_comment};
pub use selector::{require_conforming, select_conforming, select_unique, ParsedTemplate};
pub use telemetry::init_tracing;
pub use templates::{
    TeamResponseTemplate, Template, TesterResponseTemplate, GITHUB_UI_EDIT_WARNING,
    TESTER_RESPONSES_HEADER,
};

/// peval version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
