//! Tooltip element and its fixed styling

/// Fixed id of the single live tooltip element
pub const TOOLTIP_ID: &str = "footnotediv";

const FIXED_DECLARATIONS: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("width", "20em"),
    ("background", "#eef"),
    ("padding", "0em 1em 0em 1em"),
    ("border", "solid 1px"),
    ("font-size", "90%"),
    ("line-height", "1.4"),
    ("-moz-border-radius", ".5em"),
    ("-webkit-border-radius", ".5em"),
    ("border-radius", ".5em"),
];

/// Inline style of the tooltip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub opacity: f64,
}

impl TooltipStyle {
    pub fn new(opacity: f64) -> Self {
        Self { opacity }
    }

    /// CSS declarations in application order
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        FIXED_DECLARATIONS
            .iter()
            .map(|(property, value)| (*property, (*value).to_string()))
            .chain(std::iter::once(("opacity", self.opacity.to_string())))
            .collect()
    }

    /// Inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A tooltip as handed to the host for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipElement {
    pub id: &'static str,
    /// Cleaned footnote markup
    pub html: String,
    pub style: TooltipStyle,
}

impl TooltipElement {
    pub fn new(html: String, opacity: f64) -> Self {
        Self {
            id: TOOLTIP_ID,
            html,
            style: TooltipStyle::new(opacity),
        }
    }
}
