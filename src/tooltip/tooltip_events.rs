//! Footnote tooltip controller
//!
//! Reacts to pointer events on footnote links and on the tooltip itself.
//! The controller owns the tooltip lifecycle and the dismiss timer; the
//! host owns the document.

use std::time::{Duration, Instant};

use super::tooltip_content::{clean_footnote_html, footnote_id_from_href};
use super::tooltip_position::place_tooltip;
use super::tooltip_state::{Phase, Tick, TooltipState};
use super::tooltip_style::TooltipElement;
use crate::config::TooltipConfig;
use crate::host::{Capabilities, Host, HoverTarget, LinkId};

/// Hover tooltips for one page
#[derive(Debug)]
pub struct FootnoteTooltips {
    config: TooltipConfig,
    state: TooltipState,
    links: Vec<LinkId>,
}

impl FootnoteTooltips {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            state: TooltipState::new(),
            links: Vec::new(),
        }
    }

    /// Entry point: bind the links unless the host is mobile
    pub fn install<H: Host>(
        host: &mut H,
        links: &[LinkId],
        capabilities: Capabilities,
        config: TooltipConfig,
    ) -> Option<Self> {
        if capabilities.mobile {
            log::debug!("Mobile host, footnote tooltips not installed");
            return None;
        }
        let mut tooltips = Self::new(config);
        tooltips.setup(host, links);
        Some(tooltips)
    }

    /// (Re)bind hover handlers on `links`
    ///
    /// Prior handlers are unbound first, so calling this repeatedly never
    /// stacks duplicate bindings.
    pub fn setup<H: Host>(&mut self, host: &mut H, links: &[LinkId]) {
        for &link in links {
            host.unbind_hover(HoverTarget::Link(link));
            host.bind_hover(HoverTarget::Link(link));
        }
        self.links = links.to_vec();
        log::debug!("Bound hover handlers to {} footnote links", links.len());
    }

    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn opacity(&self) -> f64 {
        self.state.opacity()
    }

    pub fn has_pending_dismiss(&self) -> bool {
        self.state.dismiss_at().is_some()
    }

    /// Pointer entered a footnote link: replace any tooltip with a new one
    pub fn on_link_over<H: Host>(&mut self, host: &mut H, link: LinkId) {
        self.state.clear();
        host.remove_tooltip();

        let href = host.link_href(link).unwrap_or_default();
        let id = footnote_id_from_href(&href);
        let html = match host.footnote_markup(id) {
            Some(markup) => clean_footnote_html(&markup),
            None => {
                log::warn!("Footnote target '{}' not found, showing empty tooltip", id);
                String::new()
            }
        };

        let element = TooltipElement::new(html, self.config.opacity);
        host.append_tooltip(&element);

        let position = place_tooltip(
            host.link_offset(link),
            host.tooltip_height(),
            &host.viewport(),
            &self.config,
        );
        host.set_tooltip_position(position);

        host.bind_hover(HoverTarget::Tooltip);
        self.state.show(self.config.opacity);
        log::debug!(
            "Showing footnote '{}' at ({}, {})",
            id,
            position.left,
            position.top
        );
    }

    /// Pointer left a link or the tooltip: arm the dismiss timer
    pub fn on_pointer_out(&mut self, now: Instant) {
        let delay = self.dismiss_delay();
        if self.state.schedule_dismiss(now, delay) {
            log::debug!("Footnote tooltip dismiss scheduled");
        }
    }

    /// Pointer entered the tooltip: keep it open
    pub fn on_tooltip_over<H: Host>(&mut self, host: &mut H) {
        if !self.state.is_present() {
            return;
        }
        if self.state.cancel_dismiss() {
            log::debug!("Footnote tooltip dismiss cancelled");
        }
        self.state.restore(self.config.hover_opacity);
        host.set_tooltip_opacity(self.config.hover_opacity);
    }

    /// Fire a due dismiss timer and advance the fade to `now`
    pub fn poll<H: Host>(&mut self, host: &mut H, now: Instant) {
        let fade = self.fade_duration();
        match self.state.advance(now, fade) {
            Tick::Idle => {}
            Tick::Opacity(opacity) => host.set_tooltip_opacity(opacity),
            Tick::Removed => {
                host.remove_tooltip();
                log::debug!("Footnote tooltip removed");
            }
        }
    }

    fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.config.dismiss_delay_ms)
    }

    fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.config.fade_ms)
    }
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
