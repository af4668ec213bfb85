//! Pointer event dispatch for an in-memory page

use std::time::Instant;

use super::Page;
use crate::config::TooltipConfig;
use crate::host::{Capabilities, HoverTarget, LinkId};
use crate::tooltip::FootnoteTooltips;

/// A page together with its (optional) tooltip controller
///
/// Events only reach the controller through targets that have hover
/// handlers bound, the way a browser would deliver them.
#[derive(Debug)]
pub struct Session {
    page: Page,
    tooltips: Option<FootnoteTooltips>,
}

impl Session {
    /// Install footnote tooltips on every footnote link of the page
    pub fn new(mut page: Page, capabilities: Capabilities, config: TooltipConfig) -> Self {
        let links = page.link_ids();
        let tooltips = FootnoteTooltips::install(&mut page, &links, capabilities, config);
        Self { page, tooltips }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn tooltips(&self) -> Option<&FootnoteTooltips> {
        self.tooltips.as_ref()
    }

    pub fn is_installed(&self) -> bool {
        self.tooltips.is_some()
    }

    /// Re-run setup over every link
    pub fn rebind(&mut self) {
        let links = self.page.link_ids();
        if let Some(tooltips) = self.tooltips.as_mut() {
            tooltips.setup(&mut self.page, &links);
        }
    }

    /// Pointer entered `target`. Returns false when nothing handled it.
    pub fn pointer_over(&mut self, target: HoverTarget, now: Instant) -> bool {
        if !self.page.is_bound(target) {
            return false;
        }
        let Some(tooltips) = self.tooltips.as_mut() else {
            return false;
        };
        tooltips.poll(&mut self.page, now);
        match target {
            HoverTarget::Link(link) => tooltips.on_link_over(&mut self.page, link),
            HoverTarget::Tooltip => tooltips.on_tooltip_over(&mut self.page),
        }
        true
    }

    /// Pointer left `target`. Returns false when nothing handled it.
    pub fn pointer_out(&mut self, target: HoverTarget, now: Instant) -> bool {
        if !self.page.is_bound(target) {
            return false;
        }
        let Some(tooltips) = self.tooltips.as_mut() else {
            return false;
        };
        tooltips.poll(&mut self.page, now);
        tooltips.on_pointer_out(now);
        true
    }

    pub fn hover_link(&mut self, link: LinkId, now: Instant) -> bool {
        self.pointer_over(HoverTarget::Link(link), now)
    }

    /// Let timers and the fade catch up to `now`
    pub fn advance(&mut self, now: Instant) {
        if let Some(tooltips) = self.tooltips.as_mut() {
            tooltips.poll(&mut self.page, now);
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
