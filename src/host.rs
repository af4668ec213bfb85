//! Host environment seam
//!
//! The tooltip controller never touches a document directly. Everything it
//! needs from the page (link geometry, footnote markup, the viewport and the
//! tooltip element itself) goes through [`Host`].

use crate::tooltip::TooltipElement;

/// Index of a footnote-reference link within the set handed to setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub usize);

/// Anything that can receive hover handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    Link(LinkId),
    Tooltip,
}

/// Document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub left: f64,
    pub top: f64,
}

impl Point {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Visible window area and its scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    pub fn scrolled(mut self, left: f64, top: f64) -> Self {
        self.scroll_left = left;
        self.scroll_top = top;
        self
    }

    /// Document x coordinate of the visible right edge
    pub fn right(&self) -> f64 {
        self.width + self.scroll_left
    }

    /// Document y coordinate of the visible bottom edge
    pub fn bottom(&self) -> f64 {
        self.height + self.scroll_top
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

/// Capabilities reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Hover tooltips are never installed on mobile hosts
    pub mobile: bool,
}

/// DOM-like environment driven by the tooltip controller
pub trait Host {
    /// Raw `href` attribute of a link
    fn link_href(&self, link: LinkId) -> Option<String>;

    /// Document offset of a link
    fn link_offset(&self, link: LinkId) -> Point;

    /// Inner markup of the first paragraph of the footnote block with this id
    fn footnote_markup(&self, id: &str) -> Option<String>;

    fn viewport(&self) -> Viewport;

    /// Append the tooltip element to the document body
    fn append_tooltip(&mut self, tooltip: &TooltipElement);

    /// Remove the tooltip element if present
    fn remove_tooltip(&mut self);

    /// Rendered height of the appended tooltip
    fn tooltip_height(&self) -> f64;

    fn set_tooltip_position(&mut self, position: Point);

    fn set_tooltip_opacity(&mut self, opacity: f64);

    fn bind_hover(&mut self, target: HoverTarget);

    fn unbind_hover(&mut self, target: HoverTarget);
}
