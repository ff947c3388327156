//! Banners separate phases of a run (`/// Import ///`) so they can be found by
//! eye in a long log.

use super::align::Alignment;
use super::wrap::wrap;

/// Lines of a banner for `title`, wrapped at `max_width`.
///
/// The first element is always an empty line. When the title has content it is
/// followed by the border, one `/// <line> ///` row per wrapped line (centred in
/// the widest line) and the border again. An empty or whitespace-only title
/// yields just the leading empty line.
#[must_use]
pub fn render_banner(title: &str, max_width: usize) -> Vec<String> {
    let lines = wrap(title, max_width);
    let width = lines
        .iter()
        .map(|line| line.trim().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = vec![String::new()];
    if width == 0 {
        return out;
    }

    let border = "/".repeat(width + 8);
    out.push(border.clone());
    for line in &lines {
        out.push(format!("/// {} ///", Alignment::Center.pad(line.trim(), width)));
    }
    out.push(border);
    out
}
