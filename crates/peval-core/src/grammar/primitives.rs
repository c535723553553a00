//! Leaf matchers.

use regex::Regex;

use super::{Cursor, ParseFailure, ParseOutcome};

/// Match exactly `expected` at the cursor.
pub fn literal<'a>(expected: &'static str) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, &'a str> {
    move |cursor: Cursor<'a>| {
        let rest = cursor.remaining();
        if rest.starts_with(expected) {
            Ok((&rest[..expected.len()], cursor.advance(expected.len())))
        } else {
            Err(ParseFailure::mismatch(
                format!("{expected:?}"),
                cursor.offset(),
            ))
        }
    }
}

/// Zero or more whitespace characters. Never fails.
pub fn optional_whitespace(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    let rest = cursor.remaining();
    let len = rest.len() - rest.trim_start().len();
    Ok((&rest[..len], cursor.advance(len)))
}

/// One or more whitespace characters.
pub fn whitespace(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    let (matched, next) = optional_whitespace(cursor)?;
    if matched.is_empty() {
        return Err(ParseFailure::mismatch("whitespace", cursor.offset()));
    }
    Ok((matched, next))
}

/// Everything up to, not including, the next newline. Never fails.
pub fn rest_of_line(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    let rest = cursor.remaining();
    let len = rest.find('\n').unwrap_or(rest.len());
    Ok((&rest[..len], cursor.advance(len)))
}

/// Match `regex` starting exactly at the cursor.
///
/// Yields capture group 1 when the pattern has one, the whole match otherwise.
/// `expected` names the token in failure messages.
pub fn pattern<'a>(
    regex: &'static Regex,
    expected: &'static str,
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, &'a str> {
    move |cursor: Cursor<'a>| {
        let rest = cursor.remaining();
        let mismatch = || ParseFailure::mismatch(expected, cursor.offset());

        let Some(captures) = regex.captures(rest) else {
            return Err(mismatch());
        };
        let Some(whole) = captures.get(0).filter(|m| m.start() == 0) else {
            return Err(mismatch());
        };
        let value = captures.get(1).unwrap_or(whole).as_str();
        Ok((value, cursor.advance(whole.end())))
    }
}

/// Free text up to, not including, the next `terminator`.
///
/// Fails when the terminator never appears, or when one of `fences` appears
/// before it: free text must not run into the next block.
pub fn text_before<'a>(
    terminator: &'static str,
    fences: &'static [&'static str],
) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, &'a str> {
    move |cursor: Cursor<'a>| {
        let rest = cursor.remaining();
        let missing = || ParseFailure::mismatch(format!("{terminator:?}"), cursor.offset());

        let end = rest.find(terminator).ok_or_else(missing)?;
        let fenced = fences
            .iter()
            .filter_map(|fence| rest.find(fence))
            .any(|at| at < end);
        if fenced {
            return Err(missing());
        }
        Ok((&rest[..end], cursor.advance(end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ParseFailureKind;
    use once_cell::sync::Lazy;

    static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(\d+)").unwrap());

    #[test]
    fn literal_consumes_exact_prefix() {
        let (matched, next) = literal("# Team")(Cursor::new("# Team's Response")).unwrap();
        assert_eq!(matched, "# Team");
        assert_eq!(next.remaining(), "'s Response");
    }

    #[test]
    fn literal_reports_position_on_mismatch() {
        let cursor = Cursor::new("xx# Team").advance(1);
        let failure = literal("# Team")(cursor).unwrap_err();
        assert_eq!(failure.position, 1);
        assert!(matches!(
            failure.kind,
            ParseFailureKind::PrimitiveMismatch { .. }
        ));
    }

    #[test]
    fn whitespace_requires_at_least_one_char() {
        assert!(whitespace(Cursor::new("abc")).is_err());
        let (matched, next) = whitespace(Cursor::new(" \n\t abc")).unwrap();
        assert_eq!(matched, " \n\t ");
        assert_eq!(next.remaining(), "abc");
    }

    #[test]
    fn optional_whitespace_never_fails() {
        let (matched, next) = optional_whitespace(Cursor::new("abc")).unwrap();
        assert_eq!(matched, "");
        assert_eq!(next.offset(), 0);
        assert!(optional_whitespace(Cursor::new("")).is_ok());
    }

    #[test]
    fn rest_of_line_stops_before_newline() {
        let (line, next) = rest_of_line(Cursor::new(" High\r\nnext")).unwrap();
        assert_eq!(line, " High\r");
        assert_eq!(next.remaining(), "\nnext");

        let (line, next) = rest_of_line(Cursor::new("no newline")).unwrap();
        assert_eq!(line, "no newline");
        assert!(next.is_at_end());
    }

    #[test]
    fn pattern_is_anchored_at_cursor() {
        let (digits, next) = pattern(&NUMBER, "issue number")(Cursor::new("#42 rest")).unwrap();
        assert_eq!(digits, "42");
        assert_eq!(next.remaining(), " rest");

        assert!(pattern(&NUMBER, "issue number")(Cursor::new("see #42")).is_err());
    }

    #[test]
    fn text_before_stops_at_terminator() {
        let (text, next) = text_before("# Next", &[])(Cursor::new("body\n# Next")).unwrap();
        assert_eq!(text, "body\n");
        assert_eq!(next.remaining(), "# Next");
    }

    #[test]
    fn text_before_fails_without_terminator() {
        assert!(text_before("# Next", &[])(Cursor::new("body only")).is_err());
    }

    #[test]
    fn text_before_respects_fences() {
        let parser = text_before("Team chose:", &["## "]);
        assert!(parser(Cursor::new("desc\n## other\nTeam chose: x")).is_err());
        assert!(parser(Cursor::new("desc\nTeam chose: x\n## other")).is_ok());
    }

    #[test]
    fn primitives_handle_multibyte_text() {
        let input = "é ü\n✓ done";
        let (ws, next) = optional_whitespace(Cursor::new(input)).unwrap();
        assert_eq!(ws, "");
        let (line, next) = rest_of_line(next).unwrap();
        assert_eq!(line, "é ü");
        let (_, next) = whitespace(next).unwrap();
        assert_eq!(next.remaining(), "✓ done");
    }
}
