//! Key/value dumps (`--> user  : alice`) for logging the inputs of an operation
//! without hand-formatting each one.

use super::align::Alignment;
use std::collections::HashMap;
use std::fmt::Display;

/// Rendered in place of an absent value.
pub const NIL: &str = "<nil>";

/// Keys with optional values, kept in insertion order.
///
/// Order is preserved because it is convenient, not because rendering promises
/// it: dumps built from a `HashMap` come out in map order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    entries: Vec<(String, Option<String>)>,
}

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key with a value.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, Some(value));
        self
    }

    /// Adds a key whose value is absent (rendered as `<nil>`).
    #[must_use]
    pub fn nil(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), None));
        self
    }

    /// Adds a key whose value may be absent.
    #[must_use]
    pub fn opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.entries
            .push((key.into(), value.map(|v| v.to_string())));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, Option<V>)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.push(key, value);
        }
        args
    }
}

impl<K: Into<String>, V: Display> From<HashMap<K, Option<V>>> for Args {
    fn from(map: HashMap<K, Option<V>>) -> Self {
        map.into_iter().collect()
    }
}

/// One `--> <key> : <value>` line per entry.
///
/// Keys are fitted to the longest trimmed key so the `:` column lines up. Empty
/// args render nothing.
#[must_use]
pub fn render_args(args: &Args) -> Vec<String> {
    let Some(width) = args.iter().map(|(k, _)| k.trim().chars().count()).max() else {
        return Vec::new();
    };

    args.iter()
        .map(|(key, value)| {
            format!(
                "--> {} : {}",
                Alignment::Left.fit(key, width),
                value.unwrap_or(NIL)
            )
        })
        .collect()
}
