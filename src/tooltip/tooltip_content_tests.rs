//! Tests for tooltip/tooltip_content

use super::*;
use proptest::prelude::*;

#[test]
fn test_footnote_id_from_fragment() {
    assert_eq!(footnote_id_from_href("#fn1"), "fn1");
    assert_eq!(footnote_id_from_href("post.html#fn:2"), "fn:2");
}

#[test]
fn test_footnote_id_without_fragment() {
    assert_eq!(footnote_id_from_href("fn3"), "fn3");
    assert_eq!(footnote_id_from_href("#"), "");
}

#[test]
fn test_code_is_unwrapped() {
    let cleaned = clean_footnote_html("Note text <code>x</code>");
    assert_eq!(cleaned, "Note text x");
    assert_eq!(tooltip_text(&cleaned), "Note text x");
}

#[test]
fn test_code_text_stays_escaped() {
    let cleaned = clean_footnote_html("use <code>a &lt; b</code> here");
    assert_eq!(cleaned, "use a &lt; b here");
    assert_eq!(tooltip_text(&cleaned), "use a < b here");
}

#[test]
fn test_nested_markup_in_code_is_flattened() {
    let cleaned = clean_footnote_html("<code><span class=\"k\">let</span> x</code>");
    assert_eq!(cleaned, "let x");
}

#[test]
fn test_backlink_inside_code_is_removed() {
    let cleaned = clean_footnote_html(
        "See <code>f()<a class=\"reversefootnote\" href=\"#r1\">back</a></code>",
    );
    assert_eq!(cleaned, "See f()");
}

#[test]
fn test_backlink_is_removed() {
    let cleaned = clean_footnote_html(
        "See the manual.<a href=\"#fnref1\" class=\"reversefootnote\">&#8617;</a>",
    );
    assert_eq!(cleaned, "See the manual.");
}

#[test]
fn test_backlink_with_extra_classes_is_removed() {
    let cleaned =
        clean_footnote_html("Text <a class=\"reversefootnote footnote-backref\" href=\"#r\">up</a>");
    assert_eq!(cleaned, "Text ");
}

#[test]
fn test_other_links_are_kept() {
    let cleaned = clean_footnote_html("See <a href=\"https://example.com/?a=1&amp;b=2\">here</a>.");
    assert_eq!(
        cleaned,
        "See <a href=\"https://example.com/?a=1&amp;b=2\">here</a>."
    );
}

#[test]
fn test_formatting_is_preserved() {
    let cleaned = clean_footnote_html("An <em>important</em> point<br>continued");
    assert_eq!(cleaned, "An <em>important</em> point<br>continued");
}

#[test]
fn test_comment_is_preserved() {
    let cleaned = clean_footnote_html("a<!-- note -->b");
    assert_eq!(cleaned, "a<!-- note -->b");
}

#[test]
fn test_empty_markup() {
    assert_eq!(clean_footnote_html(""), "");
    assert_eq!(tooltip_text(""), "");
}

// Cleaned markup never contains backlinks or code elements, whatever prose
// surrounds them.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_backlinks_and_code_never_survive(
        before in "[a-zA-Z ]{0,20}",
        code in "[a-z]{1,10}",
        after in "[a-zA-Z ]{0,20}",
    ) {
        let markup = format!(
            "{before}<code>{code}</code>{after}<a class=\"reversefootnote\" href=\"#r\">back</a>"
        );
        let cleaned = clean_footnote_html(&markup);

        prop_assert!(!cleaned.contains("<code"));
        prop_assert!(!cleaned.contains(BACKLINK_CLASS));
        prop_assert_eq!(tooltip_text(&cleaned), format!("{before}{code}{after}"));
    }
}
