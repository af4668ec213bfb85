//! Footnote content extraction
//!
//! Turns the markup of a footnote paragraph into tooltip markup: backlink
//! anchors are dropped and inline code is flattened to plain text.

use scraper::{ElementRef, Html, Node};

/// Class marking the anchor that jumps back to the reference point
pub const BACKLINK_CLASS: &str = "reversefootnote";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Footnote id referenced by a link `href`
///
/// Everything after the last `#` is the id; an `href` without a fragment is
/// taken as the id itself.
pub fn footnote_id_from_href(href: &str) -> &str {
    href.rsplit_once('#').map_or(href, |(_, fragment)| fragment)
}

/// Clean footnote paragraph markup for display in the tooltip
pub fn clean_footnote_html(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::with_capacity(markup.len());
    write_children(fragment.root_element(), &mut out);
    out
}

/// Plain text of tooltip markup
pub fn tooltip_text(markup: &str) -> String {
    Html::parse_fragment(markup).root_element().text().collect()
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    let raw = RAW_TEXT_ELEMENTS.contains(&element.value().name());
    for child in element.children() {
        match child.value() {
            Node::Text(text) if raw => out.push_str(text),
            Node::Text(text) => escape_text(text, out),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_element(child, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let value = element.value();
    let name = value.name();

    if is_backlink(element) {
        return;
    }
    if name == "code" {
        write_code_text(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    for (attr, attr_value) in value.attrs() {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        escape_attr(attr_value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn is_backlink(element: ElementRef<'_>) -> bool {
    let value = element.value();
    value.name() == "a" && value.classes().any(|class| class == BACKLINK_CLASS)
}

/// Plain text of an inline code element, minus any backlinks inside it
fn write_code_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => escape_text(text, out),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child).filter(|child| !is_backlink(*child)) {
                    write_code_text(child, out);
                }
            }
            _ => {}
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "tooltip_content_tests.rs"]
mod tooltip_content_tests;
