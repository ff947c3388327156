//! Fitting text into a fixed column, shared by banner bodies and argument keys.

/// Where the text sits inside the padded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Keys read best flush left so the `:` column lines up.
    #[default]
    Left,
    /// Flush right.
    Right,
    /// Banner titles sit in the middle of the border.
    Center,
}

impl Alignment {
    /// Pads `s` with spaces to `width` characters. Longer input is returned unchanged.
    #[must_use]
    pub fn pad(self, s: &str, width: usize) -> String {
        let len = s.chars().count();
        if len >= width {
            return s.to_string();
        }

        let padding = width - len;
        match self {
            Self::Left => format!("{}{}", s, " ".repeat(padding)),
            Self::Right => format!("{}{}", " ".repeat(padding), s),
            Self::Center => {
                let left = padding / 2;
                let right = padding - left;
                format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
            }
        }
    }

    /// Pads short input and truncates long input, so the result is exactly `width` characters.
    #[must_use]
    pub fn fit(self, s: &str, width: usize) -> String {
        if s.chars().count() > width {
            return s.chars().take(width).collect();
        }
        self.pad(s, width)
    }
}
