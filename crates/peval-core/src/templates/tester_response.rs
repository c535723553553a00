use super::{read_back, Template};
use crate::domain::{PevalError, TesterResponseRecord};
use crate::grammar::{
    literal, many1, optional_whitespace, parse_str, possibly, sequence, whitespace, Cursor,
    ParseFailure, ParseOutcome,
};
use crate::render::render_tester_response_comment;
use crate::sections::{team_response_section, tester_response_section};

pub const GITHUB_UI_EDIT_WARNING: &str = "[IMPORTANT!: Please do not edit or reply to this comment using the GitHub UI. You can respond to it using CATcher during the next phase of the PE]";
pub const TESTER_RESPONSES_HEADER: &str = "# Items for the Tester to Verify";

/// The comment a tester answers during the review phase: the team's response
/// followed by one item per disputed field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TesterResponseTemplate;

fn tester_response_comment(cursor: Cursor<'_>) -> ParseOutcome<'_, TesterResponseRecord> {
    sequence(|steps| {
        // generated comments carry the warning, hand-written ones may not
        steps.step(possibly(literal(GITHUB_UI_EDIT_WARNING)))?;
        steps.step(optional_whitespace)?;

        let team_response = steps.step(team_response_section(TESTER_RESPONSES_HEADER))?;

        steps.step(literal(TESTER_RESPONSES_HEADER))?;
        steps.step(whitespace)?;
        let sections = steps.step(many1(tester_response_section))?;

        Ok(TesterResponseRecord::from_sections(team_response, sections))
    })(cursor)
}

impl Template for TesterResponseTemplate {
    const NAME: &'static str = "tester-response";

    type Record = TesterResponseRecord;

    fn parse(body: &str) -> Result<Self::Record, ParseFailure> {
        parse_str(tester_response_comment, body)
    }

    fn render(record: &Self::Record) -> Result<String, PevalError> {
        read_back::<Self>(record, render_tester_response_comment(record)?)
    }
}
