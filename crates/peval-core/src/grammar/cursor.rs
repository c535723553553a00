use super::error::{ParseFailure, ParseFailureKind};

/// Read position inside a comment body.
///
/// `Copy` on purpose: a sequence that fails simply drops its cursor, so the
/// caller's position is never advanced by a partial match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Byte offset from the start of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The full input this cursor walks over.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.offset..).unwrap_or("")
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Move forward by `len` bytes of the remaining input.
    ///
    /// Callers pass lengths of slices taken from [`Cursor::remaining`], which
    /// keeps the offset on a char boundary.
    pub(crate) fn advance(self, len: usize) -> Self {
        Self {
            offset: (self.offset + len).min(self.input.len()),
            ..self
        }
    }

    /// A failure of `kind` at this position.
    pub fn fail(&self, kind: ParseFailureKind) -> ParseFailure {
        ParseFailure::new(kind, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_through_remaining() {
        let cursor = Cursor::new("abc");
        let next = cursor.advance(2);
        assert_eq!(next.remaining(), "c");
        assert_eq!(next.offset(), 2);
        assert_eq!(cursor.remaining(), "abc");
    }

    #[test]
    fn advance_never_passes_the_end() {
        let cursor = Cursor::new("ab").advance(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }
}
