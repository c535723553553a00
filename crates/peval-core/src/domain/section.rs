//! Parsed tester-response sections.

use serde::{Deserialize, Serialize};

/// Title of a tester-response section.
///
/// The named variants feed the team-chosen fields of a record; any other
/// title is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionTitle {
    Severity,
    Type,
    Response,
    Other(String),
}

impl SectionTitle {
    pub fn as_str(&self) -> &str {
        match self {
            SectionTitle::Severity => "severity",
            SectionTitle::Type => "type",
            SectionTitle::Response => "response",
            SectionTitle::Other(title) => title,
        }
    }
}

impl From<&str> for SectionTitle {
    fn from(title: &str) -> Self {
        match title {
            "severity" => SectionTitle::Severity,
            "type" => SectionTitle::Type,
            "response" => SectionTitle::Response,
            other => SectionTitle::Other(other.to_string()),
        }
    }
}

impl From<String> for SectionTitle {
    fn from(title: String) -> Self {
        SectionTitle::from(title.as_str())
    }
}

impl From<SectionTitle> for String {
    fn from(title: SectionTitle) -> Self {
        title.as_str().to_string()
    }
}

impl std::fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tester-response block as read from a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: SectionTitle,
    pub description: String,
    /// The option the team selected, e.g. `High`.
    pub team_chose: String,
    pub disagree_checkbox_value: bool,
    /// Only ever set together with `disagree_checkbox_value`.
    pub reason_for_disagreement: Option<String>,
}

impl Section {
    /// Build a section. A reason given for an unchecked box is dropped.
    pub fn new(
        title: SectionTitle,
        description: impl Into<String>,
        team_chose: impl Into<String>,
        disagree_checkbox_value: bool,
        reason_for_disagreement: Option<String>,
    ) -> Self {
        Self {
            title,
            description: description.into(),
            team_chose: team_chose.into(),
            disagree_checkbox_value,
            reason_for_disagreement: reason_for_disagreement.filter(|_| disagree_checkbox_value),
        }
    }
}
