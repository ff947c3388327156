//! The gutter is the fixed-width `<timestamp>  <CAT>  <dots>` prefix in front of
//! every line. Keeping its width stable is what makes nested output readable:
//! continuation lines and banner bodies line up under the message column.

use chrono::Local;
use std::fmt::Write;

/// `DD/MM/YY HH:MM:SS±ZZZZ`, the shape of every line's leading timestamp.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M:%S%z";

/// One nesting level of indentation.
pub const INDENT_UNIT: &str = ".  ";

/// Two spaces, the three-character code, two spaces.
const CATEGORY_COLUMN: usize = 7;

/// Current local time in strftime `format`.
///
/// An invalid format string falls back to [`TIMESTAMP_FORMAT`] instead of
/// failing.
#[must_use]
pub fn timestamp(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(TIMESTAMP_FORMAT));
    }
    out
}

/// Normalises a category to exactly three uppercase characters. Uppercasing
/// happens per character before truncation, since it can lengthen the text
/// (`ß` becomes `SS`).
#[must_use]
pub fn category(code: &str) -> String {
    code.chars()
        .flat_map(char::to_uppercase)
        .chain(std::iter::repeat(' '))
        .take(3)
        .collect()
}

/// `".  "` repeated `depth` times.
#[must_use]
pub fn indent_dots(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Full gutter for the first physical line of a record.
#[must_use]
pub fn gutter(timestamp: &str, code: &str, depth: usize) -> String {
    format!("{timestamp}  {}  {}", category(code), indent_dots(depth))
}

/// Blank prefix as wide as `<timestamp>  <CAT>  ` at depth zero.
#[must_use]
pub fn no_timestamp_prefix(timestamp: &str) -> String {
    " ".repeat(timestamp.chars().count() + CATEGORY_COLUMN)
}

/// Joins wrapped lines into one block. The first line carries the gutter, the
/// rest get a blank prefix of the same width so they align under it.
#[must_use]
pub fn render_block<S: AsRef<str>>(lines: &[S], gutter: &str) -> String {
    let blank = " ".repeat(gutter.chars().count());
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&blank);
        } else {
            out.push_str(gutter);
        }
        out.push_str(line.as_ref());
    }

    if lines.is_empty() {
        out.push_str(gutter);
    }
    out
}
