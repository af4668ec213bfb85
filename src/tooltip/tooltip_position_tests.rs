//! Tests for tooltip/tooltip_position

use super::*;
use proptest::prelude::*;

fn config() -> TooltipConfig {
    TooltipConfig::default()
}

#[test]
fn test_below_link_when_room() {
    let viewport = Viewport::new(1024.0, 768.0);
    let position = place_tooltip(Point::new(100.0, 200.0), 60.0, &viewport, &config());
    assert_eq!(position, Point::new(100.0, 220.0));
}

#[test]
fn test_clamped_at_right_edge() {
    let viewport = Viewport::new(1024.0, 768.0);
    let position = place_tooltip(Point::new(900.0, 200.0), 60.0, &viewport, &config());
    assert_eq!(position.left, 1024.0 - 420.0);
}

#[test]
fn test_clamp_accounts_for_horizontal_scroll() {
    let viewport = Viewport::new(800.0, 600.0).scrolled(300.0, 0.0);
    let position = place_tooltip(Point::new(900.0, 50.0), 60.0, &viewport, &config());
    assert_eq!(position.left, 800.0 + 300.0 - 420.0);

    let unclamped = place_tooltip(Point::new(600.0, 50.0), 60.0, &viewport, &config());
    assert_eq!(unclamped.left, 600.0);
}

#[test]
fn test_flips_above_near_bottom() {
    let viewport = Viewport::new(1024.0, 768.0);
    let position = place_tooltip(Point::new(100.0, 720.0), 60.0, &viewport, &config());
    assert_eq!(position.top, 720.0 - 60.0 - 15.0);
}

#[test]
fn test_flip_accounts_for_vertical_scroll() {
    let viewport = Viewport::new(1024.0, 768.0).scrolled(0.0, 1000.0);
    let below = place_tooltip(Point::new(100.0, 1200.0), 60.0, &viewport, &config());
    assert_eq!(below.top, 1220.0);

    let above = place_tooltip(Point::new(100.0, 1740.0), 60.0, &viewport, &config());
    assert_eq!(above.top, 1740.0 - 75.0);
}

#[test]
fn test_exact_fit_stays_below() {
    let viewport = Viewport::new(1024.0, 768.0);
    let position = place_tooltip(Point::new(604.0, 688.0), 60.0, &viewport, &config());
    assert_eq!(position, Point::new(604.0, 708.0));
}

// The assumed width never crosses the visible right edge, and a tooltip that
// would cross the bottom edge is placed above the link.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_never_past_right_edge(
        left in 0.0f64..5000.0,
        top in 0.0f64..5000.0,
        height in 1.0f64..400.0,
        width in 420.0f64..3000.0,
        scroll_left in 0.0f64..2000.0,
    ) {
        let viewport = Viewport::new(width, 768.0).scrolled(scroll_left, 0.0);
        let position = place_tooltip(Point::new(left, top), height, &viewport, &config());
        prop_assert!(position.left + 420.0 <= viewport.right() + 1e-9);
    }

    #[test]
    fn prop_flips_only_without_room_below(
        top in 0.0f64..3000.0,
        height in 1.0f64..400.0,
        scroll_top in 0.0f64..2000.0,
    ) {
        let viewport = Viewport::new(1024.0, 768.0).scrolled(0.0, scroll_top);
        let position = place_tooltip(Point::new(0.0, top), height, &viewport, &config());
        if top + 20.0 + height > viewport.bottom() {
            prop_assert!(position.top + height < top);
        } else {
            prop_assert_eq!(position.top, top + 20.0);
        }
    }
}
