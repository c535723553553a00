//! Markdown rendering of template records.
//!
//! Output is deterministic. Records holding a value the grammar would read
//! back differently (a header inside free text, padded text, a multi-line team
//! choice, ...) are refused with [`PevalError::Unrenderable`] instead of
//! producing a comment that no longer matches its record.

use crate::domain::{PevalError, Result, TeamResponseRecord, TesterResponse, TesterResponseRecord};
use crate::sections::{
    is_section_title, render_checkbox, REASON_FOR_DISAGREEMENT_PREFIX, SECTION_HEADER_PREFIX,
    SECTION_SEPARATOR, TEAM_CHOSE_MARKER, TEAM_RESPONSE_HEADER,
};
use crate::templates::{DUPLICATE_STATUS_HEADER, GITHUB_UI_EDIT_WARNING, TESTER_RESPONSES_HEADER};

/// Render the tester-response comment, edit warning included.
pub fn render_tester_response_comment(record: &TesterResponseRecord) -> Result<String> {
    check_free_text("team response", record.team_response(), &[TESTER_RESPONSES_HEADER])?;
    if record.tester_responses().is_empty() {
        return Err(unrenderable("tester responses", "at least one section is required"));
    }
    for response in record.tester_responses() {
        check_tester_response(response)?;
    }

    let mut out = String::new();
    out.push_str(GITHUB_UI_EDIT_WARNING);
    out.push_str("\n\n");
    push_team_response(&mut out, record.team_response());
    out.push_str(TESTER_RESPONSES_HEADER);
    out.push_str("\n\n");
    for response in record.tester_responses() {
        push_tester_response(&mut out, response);
    }
    Ok(out)
}

/// Render the team-response comment.
pub fn render_team_response_comment(record: &TeamResponseRecord) -> Result<String> {
    check_free_text("team response", &record.team_response, &[DUPLICATE_STATUS_HEADER])?;

    let mut out = String::new();
    push_team_response(&mut out, &record.team_response);
    out.push_str(DUPLICATE_STATUS_HEADER);
    out.push_str("\n\n");
    if let Some(issue) = record.duplicate_of {
        out.push_str(&format!("Duplicate of #{}\n", issue));
    }
    Ok(out)
}

fn unrenderable(field: &str, problem: impl Into<String>) -> PevalError {
    PevalError::Unrenderable {
        field: field.to_string(),
        problem: problem.into(),
    }
}

/// Free text is read back trimmed and up to the first of `markers`.
fn check_free_text(field: &str, text: &str, markers: &[&str]) -> Result<()> {
    if text.trim() != text {
        return Err(unrenderable(field, "must not start or end with whitespace"));
    }
    if let Some(marker) = markers.iter().find(|marker| text.contains(**marker)) {
        return Err(unrenderable(field, format!("must not contain {marker:?}")));
    }
    Ok(())
}

fn check_tester_response(response: &TesterResponse) -> Result<()> {
    let title = response.title.as_str();
    if !is_section_title(title) {
        return Err(unrenderable(
            &format!("section title {title:?}"),
            "must be one word of letters, digits, `_` or `-`, starting with a letter",
        ));
    }

    check_free_text(
        &format!("`{title}` description"),
        &response.description,
        &[TEAM_CHOSE_MARKER, SECTION_HEADER_PREFIX, SECTION_SEPARATOR],
    )?;

    let choice = format!("`{title}` team choice");
    if response.team_chose.is_empty() {
        return Err(unrenderable(&choice, "must not be empty"));
    }
    if response.team_chose.contains(['\n', '\r']) {
        return Err(unrenderable(&choice, "must fit on one line"));
    }
    check_free_text(&choice, &response.team_chose, &[])?;

    if let Some(reason) = &response.reason_for_disagreement {
        check_free_text(
            &format!("`{title}` reason for disagreement"),
            reason,
            &[SECTION_SEPARATOR, SECTION_HEADER_PREFIX],
        )?;
    }
    Ok(())
}

fn push_team_response(out: &mut String, text: &str) {
    out.push_str(&format!("{}\n\n{}\n\n", TEAM_RESPONSE_HEADER, text));
}

fn push_tester_response(out: &mut String, response: &TesterResponse) {
    out.push_str(&format!(
        "{}{}\n\n{}\n\n{} {}\n\n{}\n\n",
        SECTION_HEADER_PREFIX,
        response.title,
        response.description,
        TEAM_CHOSE_MARKER,
        response.team_chose,
        render_checkbox(
            response.disagree_checkbox_description(),
            response.disagree_checkbox_value
        ),
    ));
    if let Some(reason) = &response.reason_for_disagreement {
        out.push_str(&format!("{} {}\n\n", REASON_FOR_DISAGREEMENT_PREFIX, reason));
    }
    out.push_str(SECTION_SEPARATOR);
    out.push_str("\n\n");
}
