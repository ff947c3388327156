//! Static allow-list of log categories.
//!
//! Four states matter:
//! - no list: everything is written;
//! - a list with members: only those categories are written;
//! - a literally empty list: banners, blank lines and key/value dumps are
//!   silenced, while level checks stay unrestricted;
//! - a list whose names were all unrecognised: nothing passes a level check.
//!
//! The empty-list case is a compatibility quirk of the log format and applies to
//! nothing else. In particular a list that only ends up empty after dropping
//! unknown names restricts every level instead of opening them all.

use crate::internal;
use crate::level::LogLevel;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    /// `None` leaves level checks unrestricted.
    allowed: Option<HashSet<LogLevel>>,
    banners: bool,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl CategoryFilter {
    /// Allows every category.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self {
            allowed: None,
            banners: true,
        }
    }

    /// Allows only `levels`. An empty iterator gives the banner-silencing list.
    #[must_use]
    pub fn only(levels: impl IntoIterator<Item = LogLevel>) -> Self {
        let set: HashSet<LogLevel> = levels.into_iter().collect();
        if set.is_empty() {
            return Self::silenced();
        }
        Self::restricted(set)
    }

    /// Present-but-empty list: no banners, every level allowed.
    #[must_use]
    pub const fn silenced() -> Self {
        Self {
            allowed: None,
            banners: false,
        }
    }

    /// Nothing passes, banners included.
    #[must_use]
    pub fn deny_all() -> Self {
        Self {
            allowed: Some(HashSet::new()),
            banners: false,
        }
    }

    /// Exactly `levels`, with no special meaning for an empty set.
    pub(crate) fn restricted(levels: impl IntoIterator<Item = LogLevel>) -> Self {
        Self {
            allowed: Some(levels.into_iter().collect()),
            banners: true,
        }
    }

    /// Builds a filter from level names as they appear in config files.
    /// Unknown names are reported and skipped; only a literally empty list
    /// silences banners.
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: Option<&[S]>) -> Self {
        let Some(names) = names else {
            return Self::allow_all();
        };
        if names.is_empty() {
            return Self::silenced();
        }

        let levels: HashSet<LogLevel> = names
            .iter()
            .filter_map(|name| match name.as_ref().parse::<LogLevel>() {
                Ok(level) => Some(level),
                Err(e) => {
                    internal::warn("FILTER", &e.to_string());
                    None
                }
            })
            .collect();
        if levels.is_empty() {
            internal::warn("FILTER", "No recognised categories in allow-list, logging nothing");
        }
        Self::restricted(levels)
    }

    #[must_use]
    pub fn is_allowed(&self, level: LogLevel) -> bool {
        self.allowed
            .as_ref()
            .is_none_or(|set| set.contains(&level))
    }

    /// False for the present-but-empty list and for [`deny_all`](Self::deny_all).
    #[must_use]
    pub const fn banners_enabled(&self) -> bool {
        self.banners
    }

    /// `None` when level checks are unrestricted.
    #[must_use]
    pub const fn allowed(&self) -> Option<&HashSet<LogLevel>> {
        self.allowed.as_ref()
    }

    /// Adds `level` to an existing list. No effect when levels are unrestricted.
    pub fn insert(&mut self, level: LogLevel) {
        if let Some(set) = &mut self.allowed {
            set.insert(level);
        }
    }
}
