//! Domain models for peval.
//!
//! - `RawComment`: immutable snapshot of an issue comment
//! - `Section`: one parsed tester-response block
//! - `TesterResponseRecord`: folded result of the tester-response template
//! - `TeamResponseRecord`: result of the team-response template

pub mod comment;
pub mod error;
pub mod section;
pub mod team_response;
pub mod tester_response;

pub use comment::RawComment;
pub use error::{PevalError, Result};
pub use section::{Section, SectionTitle};
pub use team_response::TeamResponseRecord;
pub use tester_response::{TesterResponse, TesterResponseRecord, DISAGREE_CHECKBOX_DESCRIPTION};
