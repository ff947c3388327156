//! Allow-list semantics.

use indentlog::{CategoryFilter, LogLevel};

#[test]
fn no_list_allows_everything() {
    let filter = CategoryFilter::allow_all();
    for level in LogLevel::all() {
        assert!(filter.is_allowed(level));
    }
    assert!(filter.banners_enabled());
}

#[test]
fn list_allows_only_members() {
    let filter = CategoryFilter::only([LogLevel::Error, LogLevel::Indent]);
    assert!(filter.is_allowed(LogLevel::Error));
    assert!(filter.is_allowed(LogLevel::Indent));
    assert!(!filter.is_allowed(LogLevel::Info));
    assert!(!filter.is_allowed(LogLevel::Other));
    assert!(filter.banners_enabled());
}

#[test]
fn empty_list_silences_banners_only() {
    let filter = CategoryFilter::silenced();
    assert!(!filter.banners_enabled());
    assert!(filter.is_allowed(LogLevel::Error));
    assert!(filter.is_allowed(LogLevel::Debug));
    assert_eq!(filter, CategoryFilter::only(Vec::<LogLevel>::new()));
}

#[test]
fn deny_all_allows_nothing() {
    let filter = CategoryFilter::deny_all();
    for level in LogLevel::all() {
        assert!(!filter.is_allowed(level));
    }
    assert!(!filter.banners_enabled());
}

#[test]
fn from_names() {
    let names = ["info", "ERR", "bogus"];
    let filter = CategoryFilter::from_names(Some(&names[..]));
    let allowed = filter.allowed().unwrap();
    assert_eq!(allowed.len(), 2);
    assert!(allowed.contains(&LogLevel::Info));
    assert!(allowed.contains(&LogLevel::Error));
}

#[test]
fn from_names_absent_is_allow_all() {
    let filter = CategoryFilter::from_names::<String>(None);
    assert!(filter.allowed().is_none());
}

#[test]
fn insert_extends_list_but_not_allow_all() {
    let mut list = CategoryFilter::only([LogLevel::Info]);
    list.insert(LogLevel::Warning);
    assert!(list.is_allowed(LogLevel::Warning));

    let mut all = CategoryFilter::allow_all();
    all.insert(LogLevel::Warning);
    assert!(all.allowed().is_none());
}

#[test]
fn from_names_all_unknown_allows_no_level() {
    let names = ["eror", "bogus"];
    let filter = CategoryFilter::from_names(Some(&names[..]));
    for level in LogLevel::all() {
        assert!(!filter.is_allowed(level), "{level}");
    }
    assert!(filter.banners_enabled());
}

#[test]
fn from_names_literally_empty_silences_banners() {
    let names: [&str; 0] = [];
    let filter = CategoryFilter::from_names(Some(&names[..]));
    assert_eq!(filter, CategoryFilter::silenced());
    assert!(filter.is_allowed(LogLevel::Debug));
    assert!(!filter.banners_enabled());
}
