//! Domain-level error taxonomy for peval.

/// peval domain errors.
///
/// Parse failures never show up here: at the template boundary they collapse
/// into [`crate::ParsedTemplate::NotConforming`].
#[derive(Debug, thiserror::Error)]
pub enum PevalError {
    #[error("no comment conforms to the {template} template ({candidates} candidates)")]
    NoConformingComment {
        template: &'static str,
        candidates: usize,
    },

    #[error("comments {first} and {second} both conform to the {template} template")]
    AmbiguousConformance {
        template: &'static str,
        first: u64,
        second: u64,
    },

    #[error("no section titled {0}")]
    UnknownSection(String),

    /// The record holds a value the comment grammar cannot carry back.
    #[error("cannot render {field}: {problem}")]
    Unrenderable { field: String, problem: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for peval domain operations.
pub type Result<T> = std::result::Result<T, PevalError>;
