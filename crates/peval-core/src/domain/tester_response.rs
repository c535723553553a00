//! Records carried by the tester-response comment.

use serde::{Deserialize, Serialize};

use super::error::{PevalError, Result};
use super::section::{Section, SectionTitle};

/// Label of the checkbox a tester ticks to reject the team's choice.
pub const DISAGREE_CHECKBOX_DESCRIPTION: &str = "I disagree";

/// One item for the tester to verify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TesterResponse {
    pub title: SectionTitle,
    pub description: String,
    pub team_chose: String,
    pub disagree_checkbox_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_disagreement: Option<String>,
}

impl TesterResponse {
    /// Display header, e.g. `Issue severity`.
    pub fn header(&self) -> String {
        format!("Issue {}", self.title)
    }

    pub fn disagree_checkbox_description(&self) -> &'static str {
        DISAGREE_CHECKBOX_DESCRIPTION
    }
}

impl From<Section> for TesterResponse {
    fn from(section: Section) -> Self {
        Self {
            title: section.title,
            description: section.description,
            team_chose: section.team_chose,
            disagree_checkbox_value: section.disagree_checkbox_value,
            reason_for_disagreement: section.reason_for_disagreement,
        }
    }
}

/// Everything the tester-response template extracts from a comment.
///
/// `tester_disagree` and the `team_chosen_*` fields are folded from the
/// responses on construction and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordDraft")]
pub struct TesterResponseRecord {
    team_response: String,
    tester_responses: Vec<TesterResponse>,
    tester_disagree: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_chosen_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_chosen_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_chosen_response: Option<String>,
}

/// Input half of a record; derived fields are recomputed on deserialisation.
#[derive(Deserialize)]
struct RecordDraft {
    team_response: String,
    tester_responses: Vec<TesterResponse>,
}

impl From<RecordDraft> for TesterResponseRecord {
    fn from(draft: RecordDraft) -> Self {
        Self::new(draft.team_response, draft.tester_responses)
    }
}

impl TesterResponseRecord {
    /// Fold `tester_responses` into a record.
    ///
    /// A named choice is taken from the last response with that title. Reasons
    /// attached to unchecked boxes are dropped.
    pub fn new(team_response: impl Into<String>, tester_responses: Vec<TesterResponse>) -> Self {
        let mut record = Self {
            team_response: team_response.into(),
            tester_responses: Vec::with_capacity(tester_responses.len()),
            tester_disagree: false,
            team_chosen_severity: None,
            team_chosen_type: None,
            team_chosen_response: None,
        };

        for mut response in tester_responses {
            if !response.disagree_checkbox_value {
                response.reason_for_disagreement = None;
            }
            record.tester_disagree |= response.disagree_checkbox_value;
            let chosen = Some(response.team_chose.clone());
            match response.title {
                SectionTitle::Severity => record.team_chosen_severity = chosen,
                SectionTitle::Type => record.team_chosen_type = chosen,
                SectionTitle::Response => record.team_chosen_response = chosen,
                SectionTitle::Other(_) => {}
            }
            record.tester_responses.push(response);
        }
        record
    }

    /// Fold parsed sections, preserving their order.
    pub fn from_sections(team_response: impl Into<String>, sections: Vec<Section>) -> Self {
        Self::new(
            team_response,
            sections.into_iter().map(TesterResponse::from).collect(),
        )
    }

    pub fn team_response(&self) -> &str {
        &self.team_response
    }

    pub fn tester_responses(&self) -> &[TesterResponse] {
        &self.tester_responses
    }

    /// True iff at least one response has its disagree box ticked.
    pub fn tester_disagree(&self) -> bool {
        self.tester_disagree
    }

    pub fn team_chosen_severity(&self) -> Option<&str> {
        self.team_chosen_severity.as_deref()
    }

    pub fn team_chosen_type(&self) -> Option<&str> {
        self.team_chosen_type.as_deref()
    }

    pub fn team_chosen_response(&self) -> Option<&str> {
        self.team_chosen_response.as_deref()
    }

    /// The first response titled `title`.
    pub fn response(&self, title: &SectionTitle) -> Option<&TesterResponse> {
        self.tester_responses.iter().find(|r| &r.title == title)
    }

    /// Copy of this record with `title` marked as disagreed, for the given reason.
    pub fn with_disagreement(&self, title: &SectionTitle, reason: impl Into<String>) -> Result<Self> {
        let reason = reason.into();
        self.edit(title, |response| {
            response.disagree_checkbox_value = true;
            response.reason_for_disagreement = Some(reason.clone());
        })
    }

    /// Copy of this record with the disagreement on `title` withdrawn.
    pub fn with_agreement(&self, title: &SectionTitle) -> Result<Self> {
        self.edit(title, |response| {
            response.disagree_checkbox_value = false;
            response.reason_for_disagreement = None;
        })
    }

    fn edit(&self, title: &SectionTitle, apply: impl Fn(&mut TesterResponse)) -> Result<Self> {
        let mut responses = self.tester_responses.clone();
        let mut found = false;
        for response in responses.iter_mut().filter(|r| &r.title == title) {
            apply(response);
            found = true;
        }
        if !found {
            return Err(PevalError::UnknownSection(title.to_string()));
        }
        Ok(Self::new(self.team_response.clone(), responses))
    }
}
