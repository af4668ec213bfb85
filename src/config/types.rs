// Configuration type definitions

use serde::Deserialize;

/// Timing and geometry of the footnote tooltip
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Delay between the pointer leaving and the fade starting
    pub dismiss_delay_ms: u64,
    /// Duration of the fade-out animation
    pub fade_ms: u64,
    /// Width (including margins) assumed when clamping against the right edge
    pub assumed_width: f64,
    /// Gap between the link and a tooltip placed below it
    pub gap_below: f64,
    /// Gap between the link and a tooltip flipped above it
    pub gap_above: f64,
    /// Opacity of a freshly shown tooltip
    pub opacity: f64,
    /// Opacity restored when the pointer moves onto the tooltip
    pub hover_opacity: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            dismiss_delay_ms: 100,
            fade_ms: 600,
            assumed_width: 420.0,
            gap_below: 20.0,
            gap_above: 15.0,
            opacity: 0.95,
            hover_opacity: 0.9,
        }
    }
}

/// Layout estimates used by the in-memory page
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Characters that fit on one tooltip line
    pub chars_per_line: usize,
    /// Height of one rendered line
    pub line_height: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            chars_per_line: 40,
            line_height: 20.0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub page: PageConfig,
}
