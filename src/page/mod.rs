//! In-memory page
//!
//! A [`Host`] built from an HTML document. Layout is not computed: link
//! offsets come from `data-left`/`data-top` attributes or document order,
//! and the tooltip height is estimated from its text length.

mod render;
mod session;

use std::collections::HashMap;

use scraper::{ElementRef, Html};

use crate::config::PageConfig;
use crate::host::{Host, HoverTarget, LinkId, Point, Viewport};
use crate::tooltip::{TooltipElement, footnote_id_from_href, tooltip_text};

pub use render::{render_link_list, render_preview};
pub use session::Session;

/// Class marking footnote reference links
pub const FOOTNOTE_LINK_CLASS: &str = "footnote";

/// A footnote reference link found in the page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub href: Option<String>,
    pub text: String,
    pub offset: Point,
}

/// The tooltip element as currently shown in the page
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTooltip {
    pub element: TooltipElement,
    pub position: Point,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct Page {
    links: Vec<PageLink>,
    /// First paragraph markup of every element with an id, by id
    footnotes: HashMap<String, Option<String>>,
    viewport: Viewport,
    layout: PageConfig,
    bindings: HashMap<HoverTarget, usize>,
    tooltips: Vec<RenderedTooltip>,
}

impl Page {
    pub fn parse(html: &str, viewport: Viewport, layout: PageConfig) -> Self {
        let document = Html::parse_document(html);
        let mut links = Vec::new();
        let mut footnotes = HashMap::new();

        for element in document.root_element().descendants().filter_map(ElementRef::wrap) {
            let value = element.value();

            if value.name() == "a" && value.classes().any(|class| class == FOOTNOTE_LINK_CLASS) {
                let default_top = links.len() as f64 * layout.line_height;
                links.push(PageLink {
                    href: value.attr("href").map(str::to_string),
                    text: element.text().collect(),
                    offset: Point::new(
                        numeric_attr(element, "data-left").unwrap_or(0.0),
                        numeric_attr(element, "data-top").unwrap_or(default_top),
                    ),
                });
            }

            if let Some(id) = value.id() {
                if footnotes.contains_key(id) {
                    continue;
                }
                // The first element with an id wins, even without a paragraph.
                let paragraph = element
                    .children()
                    .filter_map(ElementRef::wrap)
                    .find(|child| child.value().name() == "p")
                    .map(|paragraph| paragraph.inner_html());
                footnotes.insert(id.to_string(), paragraph);
            }
        }

        log::debug!(
            "Parsed page with {} footnote links and {} elements with ids",
            links.len(),
            footnotes.len()
        );

        Self {
            links,
            footnotes,
            viewport,
            layout,
            bindings: HashMap::new(),
            tooltips: Vec::new(),
        }
    }

    /// Every footnote link in document order
    pub fn link_ids(&self) -> Vec<LinkId> {
        (0..self.links.len()).map(LinkId).collect()
    }

    pub fn link(&self, link: LinkId) -> Option<&PageLink> {
        self.links.get(link.0)
    }

    /// Find a link by its full `href` or by the footnote id it points to
    pub fn find_link(&self, query: &str) -> Option<LinkId> {
        self.links
            .iter()
            .position(|link| {
                link.href.as_deref().is_some_and(|href| {
                    href == query || footnote_id_from_href(href) == query
                })
            })
            .map(LinkId)
    }

    /// Whether the link's footnote block exists (with or without a paragraph)
    pub fn resolves(&self, link: LinkId) -> bool {
        self.link(link)
            .and_then(|link| link.href.as_deref())
            .is_some_and(|href| self.footnotes.contains_key(footnote_id_from_href(href)))
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_link_offset(&mut self, link: LinkId, offset: Point) {
        if let Some(link) = self.links.get_mut(link.0) {
            link.offset = offset;
        }
    }

    /// The live tooltip, if any
    pub fn tooltip(&self) -> Option<&RenderedTooltip> {
        self.tooltips.last()
    }

    /// Number of tooltip elements in the document
    pub fn tooltip_count(&self) -> usize {
        self.tooltips.len()
    }

    pub fn is_bound(&self, target: HoverTarget) -> bool {
        self.binding_count(target) > 0
    }

    /// Number of hover handlers bound to `target`
    pub fn binding_count(&self, target: HoverTarget) -> usize {
        self.bindings.get(&target).copied().unwrap_or(0)
    }
}

impl Host for Page {
    fn link_href(&self, link: LinkId) -> Option<String> {
        self.link(link).and_then(|link| link.href.clone())
    }

    fn link_offset(&self, link: LinkId) -> Point {
        self.link(link).map(|link| link.offset).unwrap_or_default()
    }

    fn footnote_markup(&self, id: &str) -> Option<String> {
        self.footnotes.get(id).cloned().flatten()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn append_tooltip(&mut self, tooltip: &TooltipElement) {
        self.tooltips.push(RenderedTooltip {
            element: tooltip.clone(),
            position: Point::default(),
            opacity: tooltip.style.opacity,
        });
    }

    fn remove_tooltip(&mut self) {
        self.tooltips.clear();
        self.bindings.remove(&HoverTarget::Tooltip);
    }

    fn tooltip_height(&self) -> f64 {
        let Some(tooltip) = self.tooltip() else {
            return 0.0;
        };
        let chars = tooltip_text(&tooltip.element.html).chars().count();
        let per_line = self.layout.chars_per_line.max(1);
        let lines = chars.div_ceil(per_line).max(1);
        lines as f64 * self.layout.line_height
    }

    fn set_tooltip_position(&mut self, position: Point) {
        if let Some(tooltip) = self.tooltips.last_mut() {
            tooltip.position = position;
        }
    }

    fn set_tooltip_opacity(&mut self, opacity: f64) {
        if let Some(tooltip) = self.tooltips.last_mut() {
            tooltip.opacity = opacity;
        }
    }

    fn bind_hover(&mut self, target: HoverTarget) {
        *self.bindings.entry(target).or_insert(0) += 1;
    }

    fn unbind_hover(&mut self, target: HoverTarget) {
        self.bindings.remove(&target);
    }
}

fn numeric_attr(element: ElementRef<'_>, name: &str) -> Option<f64> {
    element.value().attr(name).and_then(|value| value.trim().parse().ok())
}
