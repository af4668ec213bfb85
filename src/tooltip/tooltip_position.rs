//! Tooltip placement relative to the hovered link

use crate::config::TooltipConfig;
use crate::host::{Point, Viewport};

/// Place a tooltip near a link while keeping it inside the viewport
///
/// Horizontally the tooltip starts at the link and is pulled left when the
/// assumed width would cross the visible right edge. Vertically it sits
/// below the link and flips above it when its height would cross the
/// visible bottom edge.
pub fn place_tooltip(
    link: Point,
    tooltip_height: f64,
    viewport: &Viewport,
    config: &TooltipConfig,
) -> Point {
    let mut left = link.left;
    if left + config.assumed_width > viewport.right() {
        left = viewport.right() - config.assumed_width;
    }

    let mut top = link.top + config.gap_below;
    if top + tooltip_height > viewport.bottom() {
        top = link.top - tooltip_height - config.gap_above;
    }

    Point::new(left, top)
}

#[cfg(test)]
#[path = "tooltip_position_tests.rs"]
mod tooltip_position_tests;
