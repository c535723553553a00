//! Grammar of a single "item for the tester to verify".
//!
//! ```text
//! ## :question: Issue severity
//!
//! <description>
//!
//! Team chose: High
//!
//! - [x] I disagree
//!
//! **Reason for disagreement:** <free text, only when ticked>
//!
//! -------------------
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::checkbox::checkbox;
use crate::domain::{Section, SectionTitle, DISAGREE_CHECKBOX_DESCRIPTION};
use crate::grammar::{
    literal, optional_whitespace, pattern, possibly, rest_of_line, sequence, text_before,
    whitespace, Cursor, ParseFailureKind, ParseOutcome,
};

pub const SECTION_HEADER_PREFIX: &str = "## :question: Issue ";
pub const TEAM_CHOSE_MARKER: &str = "Team chose:";
pub const REASON_FOR_DISAGREEMENT_PREFIX: &str = "**Reason for disagreement:**";
pub const SECTION_SEPARATOR: &str = "-------------------";

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*").expect("title pattern compiles"));

/// True when `title` is exactly one section-title word.
pub fn is_section_title(title: &str) -> bool {
    TITLE.find(title).map_or(false, |word| word.end() == title.len())
}

/// One tester-response section.
///
/// Once the header prefix has matched, any missing part fails with
/// [`ParseFailureKind::SectionIncomplete`] past the start, which `many1`
/// propagates instead of treating as the end of the list.
pub fn tester_response_section(cursor: Cursor<'_>) -> ParseOutcome<'_, Section> {
    sequence(|steps| {
        steps.step(literal(SECTION_HEADER_PREFIX))?;
        let title = steps.require("section header", pattern(&TITLE, "section title"))?;
        let section = format!("`{title}` section");

        steps.require(&section, whitespace)?;
        let description = steps.require(
            &section,
            text_before(TEAM_CHOSE_MARKER, &[SECTION_HEADER_PREFIX, SECTION_SEPARATOR]),
        )?;
        steps.require(&section, literal(TEAM_CHOSE_MARKER))?;
        let team_chose = steps.step(rest_of_line)?.trim();
        if team_chose.is_empty() {
            return Err(steps.cursor().fail(ParseFailureKind::SectionIncomplete {
                section,
                missing: "the team's choice".to_string(),
            }));
        }

        steps.require(&section, whitespace)?;
        let disagree = steps.require(&section, checkbox(DISAGREE_CHECKBOX_DESCRIPTION))?;
        steps.step(optional_whitespace)?;
        let reason = steps.step(possibly(reason_for_disagreement))?;
        steps.step(optional_whitespace)?;
        steps.require(&section, literal(SECTION_SEPARATOR))?;
        steps.step(optional_whitespace)?;

        Ok(Section::new(
            SectionTitle::from(title),
            description.trim(),
            team_chose,
            disagree,
            reason,
        ))
    })(cursor)
}

fn reason_for_disagreement(cursor: Cursor<'_>) -> ParseOutcome<'_, String> {
    sequence(|steps| {
        steps.step(literal(REASON_FOR_DISAGREEMENT_PREFIX))?;
        let reason = steps.step(text_before(SECTION_SEPARATOR, &[SECTION_HEADER_PREFIX]))?;
        Ok(reason.trim().to_string())
    })(cursor)
}
