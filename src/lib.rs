//! Hover tooltips for footnote references.
//!
//! Hovering a footnote-reference link shows the footnote's text in a small
//! floating box next to the link; leaving fades it out after a short delay.
//! [`FootnoteTooltips`] holds the behavior and talks to the document only
//! through the [`Host`] trait. [`Page`] is an in-memory host parsed from
//! HTML.

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod page;
pub mod tooltip;

pub use config::{Config, PageConfig, TooltipConfig};
pub use error::FootnoteError;
pub use host::{Capabilities, Host, HoverTarget, LinkId, Point, Viewport};
pub use page::{Page, RenderedTooltip, Session};
pub use tooltip::{FootnoteTooltips, Phase, TooltipElement};
