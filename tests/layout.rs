//! Line layout: wrapping, gutters, banners, key/value rows and durations.

use indentlog::fmt::{
    self, Alignment, Args, INDENT_UNIT, render_args, render_banner, render_block, wrap,
};
use std::time::Duration;

#[test]
fn wrap_never_exceeds_width() {
    let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
    for width in [1, 5, 12, 30, 60] {
        for line in wrap(text, width) {
            assert!(line.chars().count() <= width, "{line:?} at width {width}");
        }
    }
}

#[test]
fn wrap_keeps_every_word() {
    let text = "  alpha   beta\tgamma delta  ";
    let joined = wrap(text, 11).join(" ");
    assert_eq!(joined, "alpha beta gamma delta");
}

#[test]
fn wrap_blank_input_is_one_empty_line() {
    assert_eq!(wrap("", 60), vec![""]);
    assert_eq!(wrap("   ", 60), vec![""]);
}

#[test]
fn wrap_splits_overlong_word() {
    assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn wrap_zero_width_acts_as_one() {
    assert_eq!(wrap("ab", 0), vec!["a", "b"]);
}

#[test]
fn wrap_counts_characters_not_bytes() {
    assert_eq!(wrap("ééé ààà", 7), vec!["ééé ààà"]);
}

#[test]
fn category_is_three_uppercase_characters() {
    assert_eq!(fmt::category("inf"), "INF");
    assert_eq!(fmt::category("x"), "X  ");
    assert_eq!(fmt::category("toolong"), "TOO");
}

#[test]
fn gutter_layout() {
    assert_eq!(fmt::gutter("T", "inf", 0), "T  INF  ");
    assert_eq!(fmt::gutter("T", "inf", 2), "T  INF  .  .  ");
    assert_eq!(fmt::indent_dots(3), INDENT_UNIT.repeat(3));
}

#[test]
fn unstamped_prefix_matches_depth_zero_gutter() {
    let ts = "01/02/03 04:05:06+0000";
    assert_eq!(
        fmt::no_timestamp_prefix(ts).len(),
        fmt::gutter(ts, "INF", 0).len()
    );
}

#[test]
fn block_continuations_align_under_gutter() {
    let block = render_block(&["first", "second"], "T  INF  .  ");
    assert_eq!(block, "T  INF  .  first\n           second");
}

#[test]
fn block_of_nothing_is_just_the_gutter() {
    let empty: [&str; 0] = [];
    assert_eq!(render_block(&empty, "T  INF  "), "T  INF  ");
}

#[test]
fn default_timestamp_shape() {
    let ts = fmt::timestamp(fmt::TIMESTAMP_FORMAT);
    let chars: Vec<char> = ts.chars().collect();
    assert_eq!(chars.len(), 22, "{ts}");
    assert_eq!(chars[2], '/');
    assert_eq!(chars[5], '/');
    assert_eq!(chars[11], ':');
    assert!(chars[17] == '+' || chars[17] == '-');
}

#[test]
fn custom_timestamp_format() {
    assert_eq!(fmt::timestamp("T"), "T");
}

#[test]
fn invalid_timestamp_format_does_not_panic() {
    assert!(!fmt::timestamp("%Q").is_empty());
}

#[test]
fn banner_layout() {
    let border = "/".repeat(13);
    assert_eq!(
        render_banner("Hello", 60),
        vec![String::new(), border.clone(), "/// Hello ///".to_string(), border]
    );
}

#[test]
fn banner_empty_title() {
    assert_eq!(render_banner("", 60), vec![String::new()]);
    assert_eq!(render_banner(" \t ", 60), vec![String::new()]);
}

#[test]
fn banner_centres_shorter_lines() {
    let banner = render_banner("aaaa bb", 4);
    assert_eq!(banner[1], "/".repeat(12));
    assert_eq!(banner[2], "/// aaaa ///");
    assert_eq!(banner[3], "///  bb  ///");
    assert_eq!(banner[4], "/".repeat(12));
}

#[test]
fn alignment_padding() {
    assert_eq!(Alignment::Left.pad("ab", 4), "ab  ");
    assert_eq!(Alignment::Right.pad("ab", 4), "  ab");
    assert_eq!(Alignment::Center.pad("ab", 5), " ab  ");
    assert_eq!(Alignment::Left.pad("abcdef", 4), "abcdef");
    assert_eq!(Alignment::Left.fit("abcdef", 4), "abcd");
}

#[test]
fn args_rows_align_on_colon() {
    let args = Args::new().arg("a", 1).nil("bb").opt("ccc", Some("x"));
    assert_eq!(
        render_args(&args),
        vec!["--> a   : 1", "--> bb  : <nil>", "--> ccc : x"]
    );
}

#[test]
fn args_from_pairs() {
    let args: Args = vec![("k", Some(1)), ("v", None)].into_iter().collect();
    assert_eq!(args.len(), 2);
    assert_eq!(render_args(&args), vec!["--> k : 1", "--> v : <nil>"]);
}

#[test]
fn args_empty_renders_nothing() {
    assert!(render_args(&Args::new()).is_empty());
}

#[test]
fn elapsed_keeps_largest_unit() {
    assert_eq!(fmt::elapsed(Duration::from_millis(900)), "0s");
    assert_eq!(fmt::elapsed(Duration::from_secs(59)), "59s");
    assert_eq!(fmt::elapsed(Duration::from_secs(60)), "1m");
    assert_eq!(fmt::elapsed(Duration::from_secs(3 * 3600 + 59 * 60)), "3h");
    assert_eq!(fmt::elapsed(Duration::from_secs(2 * 86_400 + 5)), "2d");
}

#[test]
fn category_stays_three_wide_when_uppercase_expands() {
    assert_eq!(fmt::category("ß"), "SS ");
    assert_eq!(fmt::category("ßab"), "SSA");
    assert_eq!(fmt::gutter("T", "ß", 1).chars().count(), "T  INF  .  ".len());
}
