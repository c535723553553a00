//! Parse failure taxonomy.

/// Why a parser stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailureKind {
    /// A literal, whitespace run, pattern or terminator was not found where expected.
    #[error("expected {expected}")]
    PrimitiveMismatch { expected: String },

    /// `many1` matched zero repetitions.
    #[error("expected one or more repetitions ({inner})")]
    RepetitionEmpty { inner: Box<ParseFailureKind> },

    /// A section started matching but a later required part is missing.
    #[error("{section} is missing {missing}")]
    SectionIncomplete { section: String, missing: String },
}

/// A failed parse: what went wrong and the byte offset where it happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {position}")]
pub struct ParseFailure {
    pub kind: ParseFailureKind,
    pub position: usize,
}

impl ParseFailure {
    pub fn new(kind: ParseFailureKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Shorthand for a [`ParseFailureKind::PrimitiveMismatch`].
    pub fn mismatch(expected: impl Into<String>, position: usize) -> Self {
        Self::new(
            ParseFailureKind::PrimitiveMismatch {
                expected: expected.into(),
            },
            position,
        )
    }

    /// Re-label a primitive mismatch as a missing part of `section`.
    ///
    /// Failures that already carry section context are left alone so the
    /// innermost section wins.
    pub fn within(self, section: &str) -> Self {
        match self.kind {
            ParseFailureKind::PrimitiveMismatch { expected } => Self::new(
                ParseFailureKind::SectionIncomplete {
                    section: section.to_string(),
                    missing: expected,
                },
                self.position,
            ),
            kind => Self::new(kind, self.position),
        }
    }

    /// 1-based line and column of the failure inside `input`.
    pub fn line_col(&self, input: &str) -> (usize, usize) {
        let upto = input.get(..self.position).unwrap_or(input);
        let line = upto.matches('\n').count() + 1;
        let column = upto
            .rsplit('\n')
            .next()
            .map(|last| last.chars().count() + 1)
            .unwrap_or(1);
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_relabels_mismatch() {
        let failure = ParseFailure::mismatch("\"Team chose:\"", 12).within("`severity` section");
        assert_eq!(
            failure.kind,
            ParseFailureKind::SectionIncomplete {
                section: "`severity` section".to_string(),
                missing: "\"Team chose:\"".to_string(),
            }
        );
        assert_eq!(failure.position, 12);
    }

    #[test]
    fn within_keeps_inner_section_context() {
        let inner = ParseFailure::mismatch("separator", 3).within("`type` section");
        let outer = inner.clone().within("template");
        assert_eq!(inner, outer);
    }

    #[test]
    fn line_col_counts_from_one() {
        let input = "first\nsecond line\nthird";
        let failure = ParseFailure::mismatch("x", input.find("line").unwrap());
        assert_eq!(failure.line_col(input), (2, 8));
        assert_eq!(ParseFailure::mismatch("x", 0).line_col(input), (1, 1));
    }

    #[test]
    fn display_mentions_expectation_and_position() {
        let msg = ParseFailure::mismatch("whitespace", 7).to_string();
        assert!(msg.contains("expected whitespace"));
        assert!(msg.contains("byte 7"));
    }
}
