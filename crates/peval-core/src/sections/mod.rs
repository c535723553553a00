//! Parsers for the named blocks that make up a template comment.

mod checkbox;
mod team_response;
mod tester_response;

pub use checkbox::{checkbox, render_checkbox};
pub use team_response::{team_response_section, TEAM_RESPONSE_HEADER};
pub use tester_response::{
    is_section_title, tester_response_section, REASON_FOR_DISAGREEMENT_PREFIX, SECTION_HEADER_PREFIX,
    SECTION_SEPARATOR, TEAM_CHOSE_MARKER,
};
