use once_cell::sync::Lazy;
use regex::Regex;

use super::{read_back, Template};
use crate::domain::{PevalError, TeamResponseRecord};
use crate::grammar::{
    literal, optional_whitespace, parse_str, pattern, possibly, sequence, Cursor, ParseFailure,
    ParseOutcome,
};
use crate::render::render_team_response_comment;
use crate::sections::team_response_section;

pub const DUPLICATE_STATUS_HEADER: &str = "## Duplicate status (if any):";

static DUPLICATE_OF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:duplicate of)[ \t]*#(\d+)").expect("duplicate pattern compiles")
});

/// The comment a team posts in response to a bug report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamResponseTemplate;

fn team_response_comment(cursor: Cursor<'_>) -> ParseOutcome<'_, TeamResponseRecord> {
    sequence(|steps| {
        steps.step(optional_whitespace)?;
        let team_response = steps.step(team_response_section(DUPLICATE_STATUS_HEADER))?;
        steps.step(literal(DUPLICATE_STATUS_HEADER))?;
        steps.step(optional_whitespace)?;

        let at = steps.cursor();
        let duplicate_of = match steps.step(possibly(pattern(&DUPLICATE_OF, "duplicate marker")))? {
            Some(digits) => Some(
                digits
                    .parse::<u64>()
                    .map_err(|_| ParseFailure::mismatch("an issue number", at.offset()))?,
            ),
            None => None,
        };

        Ok(TeamResponseRecord {
            team_response,
            duplicate_of,
        })
    })(cursor)
}

impl Template for TeamResponseTemplate {
    const NAME: &'static str = "team-response";

    type Record = TeamResponseRecord;

    fn parse(body: &str) -> Result<Self::Record, ParseFailure> {
        parse_str(team_response_comment, body)
    }

    fn render(record: &Self::Record) -> Result<String, PevalError> {
        read_back::<Self>(record, render_team_response_comment(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{TesterResponseTemplate, TESTER_RESPONSES_HEADER};

    #[test]
    fn parses_response_without_duplicate() {
        let input = "# Team's Response\n\nWe fixed it in v1.2.\n\n## Duplicate status (if any):\n\n";
        let record = TeamResponseTemplate::parse(input).expect("conforms");
        assert_eq!(record.team_response, "We fixed it in v1.2.");
        assert!(!record.is_duplicate());
    }

    #[test]
    fn parses_duplicate_marker_case_insensitively() {
        for marker in ["Duplicate of #12", "duplicate of #12", "DUPLICATE OF   #12"] {
            let input = format!("# Team's Response\n\nsame bug\n\n## Duplicate status (if any):\n{marker}\n");
            let record = TeamResponseTemplate::parse(&input).expect("conforms");
            assert_eq!(record.duplicate_of, Some(12), "marker {marker:?}");
        }
    }

    #[test]
    fn oversized_issue_number_fails() {
        let input = "# Team's Response\n\nx\n\n## Duplicate status (if any):\nDuplicate of #99999999999999999999999\n";
        assert!(TeamResponseTemplate::parse(input).is_err());
    }

    #[test]
    fn tester_comment_is_not_a_team_comment() {
        let tester = format!(
            "# Team's Response\n\nfixed\n\n{TESTER_RESPONSES_HEADER}\n\n## :question: Issue severity\n\nd\n\nTeam chose: High\n\n- [ ] I disagree\n\n-------------------\n"
        );
        assert!(TesterResponseTemplate::parse(&tester).is_ok());
        assert!(TeamResponseTemplate::parse(&tester).is_err());
    }
}
