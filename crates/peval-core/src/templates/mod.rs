//! Top-level comment grammars.
//!
//! A [`Template`] names a grammar, the record it folds its sections into, and
//! the renderer that writes such a record back out. `render` only returns a
//! body when `parse(body) == record`.

mod team_response;
mod tester_response;

use serde::Serialize;

use crate::domain::PevalError;
use crate::grammar::ParseFailure;

pub use team_response::{TeamResponseTemplate, DUPLICATE_STATUS_HEADER};
pub use tester_response::{TesterResponseTemplate, GITHUB_UI_EDIT_WARNING, TESTER_RESPONSES_HEADER};

/// A comment grammar and the record it produces.
pub trait Template {
    /// Short kebab-case name used in logs and errors.
    const NAME: &'static str;

    type Record: Clone + PartialEq + std::fmt::Debug + Serialize;

    /// Parse a whole comment body.
    fn parse(body: &str) -> Result<Self::Record, ParseFailure>;

    /// Render a record as a comment body this template parses back.
    ///
    /// Fails with [`PevalError::Unrenderable`] when the body would not read
    /// back as the same record.
    fn render(record: &Self::Record) -> Result<String, PevalError>;
}

/// Hand `body` back only if it parses as `record` again.
fn read_back<T: Template>(record: &T::Record, body: String) -> Result<String, PevalError> {
    let problem = match T::parse(&body) {
        Ok(parsed) if parsed == *record => return Ok(body),
        Ok(_) => "reads back with different content".to_string(),
        Err(failure) => format!("rendered comment does not parse ({failure})"),
    };
    Err(PevalError::Unrenderable {
        field: format!("{} record", T::NAME),
        problem,
    })
}
