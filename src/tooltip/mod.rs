//! Tooltip module
//!
//! Shows the text of a footnote in a floating tooltip while the pointer is
//! over its reference link, and fades it out shortly after the pointer
//! leaves.

mod tooltip_content;
mod tooltip_events;
mod tooltip_position;
mod tooltip_state;
mod tooltip_style;

pub use tooltip_content::{BACKLINK_CLASS, clean_footnote_html, footnote_id_from_href, tooltip_text};
pub use tooltip_events::FootnoteTooltips;
pub use tooltip_position::place_tooltip;
pub use tooltip_state::{Phase, Tick, TooltipState, swing};
pub use tooltip_style::{TOOLTIP_ID, TooltipElement, TooltipStyle};
