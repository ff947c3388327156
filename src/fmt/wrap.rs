//! Every message is folded to a fixed column width before it gets a gutter.

use std::mem;

/// Column width used when the caller doesn't configure one.
pub const DEFAULT_WIDTH: usize = 60;

/// Folds `message` into lines of at most `max_width` characters.
///
/// Breaks happen at whitespace; runs of whitespace collapse to a single space.
/// Explicit newlines always start a new line. A word longer than the width is
/// split hard since no line may exceed it. The result is never empty: blank input
/// yields a single empty line. A width of zero is treated as one.
#[must_use]
pub fn wrap(message: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in message.trim().lines() {
        wrap_paragraph(paragraph, width, &mut lines);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(mem::take(&mut current));
        }

        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            lines.push(chars.drain(..width).collect());
        }
        current = chars.into_iter().collect();
        current_len = current.chars().count();
    }

    lines.push(current);
}
