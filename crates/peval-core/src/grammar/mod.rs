//! Total parser combinators over a byte cursor.
//!
//! A parser is any `Fn(Cursor) -> ParseOutcome<T>`. `Ok` carries the value and
//! the cursor just past it; `Err` carries the failure kind and the byte offset
//! where matching stopped. No parser in this module panics, whatever the input.
//!
//! Composition is plain recursive descent. The only local backtracking is in
//! [`possibly`] (always) and [`many1`] (when the failing repetition consumed
//! nothing), so section headers must be unambiguous lookahead tokens.

mod combinators;
mod cursor;
mod error;
mod primitives;

pub use combinators::{many1, map, possibly, sequence, Steps};
pub use cursor::Cursor;
pub use error::{ParseFailure, ParseFailureKind};
pub use primitives::{literal, optional_whitespace, pattern, rest_of_line, text_before, whitespace};

/// Outcome of running a parser: the value and the remaining input, or a failure.
pub type ParseOutcome<'a, T> = Result<(T, Cursor<'a>), ParseFailure>;

/// Run `parser` from the start of `input`, discarding whatever it leaves unread.
pub fn parse_str<'a, T>(
    parser: impl Fn(Cursor<'a>) -> ParseOutcome<'a, T>,
    input: &'a str,
) -> Result<T, ParseFailure> {
    parser(Cursor::new(input)).map(|(value, _)| value)
}
