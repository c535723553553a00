use crate::grammar::{literal, sequence, text_before, whitespace, Cursor, ParseOutcome};

/// Header that opens the team's response in every template.
pub const TEAM_RESPONSE_HEADER: &str = "# Team's Response";

/// The team-response section, running up to (not including) `next_header`.
///
/// Yields the trimmed free text between the two headers.
pub fn team_response_section<'a>(
    next_header: &'static str,
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, String> {
    sequence(move |steps| {
        steps.step(literal(TEAM_RESPONSE_HEADER))?;
        steps.require("team response", whitespace)?;
        let text = steps.require("team response", text_before(next_header, &[]))?;
        Ok(text.trim().to_string())
    })
}
