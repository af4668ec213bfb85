//! Plain-text reports for the command line

use super::{Page, RenderedTooltip};
use crate::tooltip::tooltip_text;

/// Describe a rendered tooltip
pub fn render_preview(tooltip: &RenderedTooltip) -> String {
    let mut out = String::new();
    out.push_str(&format!("id: {}\n", tooltip.element.id));
    out.push_str(&format!(
        "position: left={} top={}\n",
        tooltip.position.left, tooltip.position.top
    ));
    out.push_str(&format!("opacity: {}\n", tooltip.opacity));
    out.push_str(&format!("style: {}\n", tooltip.element.style.to_css()));
    out.push_str(&format!("html: {}\n", tooltip.element.html));
    out.push_str(&format!("text: {}\n", tooltip_text(&tooltip.element.html)));
    out
}

/// One line per footnote link: href, link text and whether the target exists
pub fn render_link_list(page: &Page) -> String {
    let mut out = String::new();
    for id in page.link_ids() {
        let Some(link) = page.link(id) else {
            continue;
        };
        let status = if page.resolves(id) { "ok" } else { "missing" };
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            link.href.as_deref().unwrap_or("-"),
            link.text.trim(),
            status
        ));
    }
    out
}
