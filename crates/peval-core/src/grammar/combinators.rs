//! Combinators that build larger parsers out of smaller ones.

use super::{Cursor, ParseFailure, ParseFailureKind, ParseOutcome};

/// Optional construct: `Some` on success, `None` at the original cursor on failure.
pub fn possibly<'a, T>(
    parser: impl Fn(Cursor<'a>) -> ParseOutcome<'a, T>,
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, Option<T>> {
    move |cursor: Cursor<'a>| match parser(cursor) {
        Ok((value, next)) => Ok((Some(value), next)),
        Err(_) => Ok((None, cursor)),
    }
}

/// One or more repetitions of `parser`, stopping at the first failure.
///
/// A repetition that fails after consuming input is not backtracked over: its
/// failure fails the whole `many1`. Zero successful repetitions fail with
/// [`ParseFailureKind::RepetitionEmpty`]. A repetition that succeeds without
/// consuming anything ends the loop.
pub fn many1<'a, T>(
    parser: impl Fn(Cursor<'a>) -> ParseOutcome<'a, T>,
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, Vec<T>> {
    move |cursor: Cursor<'a>| {
        let (first, mut next) = parser(cursor).map_err(|failure| {
            if failure.position > cursor.offset() {
                failure
            } else {
                ParseFailure::new(
                    ParseFailureKind::RepetitionEmpty {
                        inner: Box::new(failure.kind),
                    },
                    cursor.offset(),
                )
            }
        })?;

        let mut values = vec![first];
        loop {
            match parser(next) {
                Ok((value, after)) => {
                    let stalled = after.offset() == next.offset();
                    values.push(value);
                    next = after;
                    if stalled {
                        break;
                    }
                }
                Err(failure) if failure.position > next.offset() => return Err(failure),
                Err(_) => break,
            }
        }
        Ok((values, next))
    }
}

/// Transform the value of a successful parse.
pub fn map<'a, T, U>(
    parser: impl Fn(Cursor<'a>) -> ParseOutcome<'a, T>,
    f: impl Fn(T) -> U,
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, U> {
    move |cursor: Cursor<'a>| parser(cursor).map(|(value, next)| (f(value), next))
}

/// Cursor driver handed to the body of a [`sequence`].
#[derive(Debug)]
pub struct Steps<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Steps<'a> {
    /// Run one step and advance past what it matched.
    pub fn step<T>(
        &mut self,
        parser: impl Fn(Cursor<'a>) -> ParseOutcome<'a, T>,
    ) -> Result<T, ParseFailure> {
        let (value, next) = parser(self.cursor)?;
        self.cursor = next;
        Ok(value)
    }

    /// Like [`Steps::step`], reporting a mismatch as a missing part of `section`.
    pub fn require<T>(
        &mut self,
        section: &str,
        parser: impl Fn(Cursor<'a>) -> ParseOutcome<'a, T>,
    ) -> Result<T, ParseFailure> {
        self.step(parser).map_err(|failure| failure.within(section))
    }

    /// Current position, for failures raised by the body itself.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }
}

/// Run `body` as an ordered list of steps over one advancing cursor.
///
/// Each step can use the values of the steps before it. The first failing
/// step fails the whole sequence and the caller's cursor is left untouched.
pub fn sequence<'a, T>(
    body: impl Fn(&mut Steps<'a>) -> Result<T, ParseFailure>,
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, T> {
    move |cursor: Cursor<'a>| {
        let mut steps = Steps { cursor };
        let value = body(&mut steps)?;
        Ok((value, steps.cursor))
    }
}
