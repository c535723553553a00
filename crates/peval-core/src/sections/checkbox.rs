use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::{literal, map, pattern, sequence, Cursor, ParseOutcome};

// `- [ ]`, `- [x]`, `- [X]`, `-[ x ]`, ... plus trailing blanks before the label
static CHECKBOX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-[ \t]*\[[ \t]*([xX]?)[ \t]*\][ \t]*").expect("checkbox pattern compiles")
});

/// Markdown task-list checkbox followed by `label`; yields whether it is ticked.
pub fn checkbox<'a>(label: &'static str) -> impl Fn(Cursor<'a>) -> ParseOutcome<'a, bool> {
    sequence(move |steps| {
        let checked = steps.step(map(
            pattern(&CHECKBOX, "checkbox `- [ ]` or `- [x]`"),
            |mark: &str| !mark.is_empty(),
        ))?;
        steps.step(literal(label))?;
        Ok(checked)
    })
}

/// Markdown for a checkbox in the given state.
pub fn render_checkbox(label: &str, checked: bool) -> String {
    format!("- [{}] {label}", if checked { "x" } else { " " })
}
