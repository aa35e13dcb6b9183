//! Stroke color and line-style definitions.
//!
//! A stroke effect carries two independent parts:
//!
//! - [`StrokeColor`]: what to paint the outline with, or [`StrokeColor::Clip`]
//!   to clip it away
//! - [`StrokeOptions`]: the line geometry (width, dash pattern, cap, join);
//!   absent options mean "use the renderer's default"
//!
//! The line-geometry enums follow SVG/CSS terminology:
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"`, `"10,5,2,5"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |
//!
//! # Examples
//!
//! ```
//! use constellation_core::color::Color;
//! use constellation_core::draw::{StrokeCap, StrokeColor, StrokeJoin, StrokeOptions};
//!
//! let color = StrokeColor::Color(Color::new("black").unwrap());
//! let options = StrokeOptions::new(2.0)
//!     .with_cap(StrokeCap::Round)
//!     .with_join(StrokeJoin::Round);
//! assert_eq!(options.width(), 2.0);
//! assert!(!color.is_clip());
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Paint used for an outline.
///
/// On node symbols, [`Clip`](Self::Clip) makes the outline take the
/// background color. On links, a clipped stroke is not drawn at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeColor {
    #[default]
    Clip,
    Color(Color),
}

impl StrokeColor {
    /// Returns true for [`StrokeColor::Clip`].
    pub fn is_clip(self) -> bool {
        matches!(self, Self::Clip)
    }

    /// Resolves the paint against the color that `Clip` stands for.
    pub fn resolve(self, background: Color) -> Color {
        match self {
            Self::Clip => background,
            Self::Color(color) => color,
        }
    }
}

impl From<Color> for StrokeColor {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

/// Line pattern of a stroke.
///
/// Each variant maps to an SVG `stroke-dasharray` value:
/// - `Solid`: no dasharray attribute
/// - `Dashed`: "5,5"
/// - `Dotted`: "2,3"
/// - `DashDot`: "10,5,2,5"
/// - `Custom(pattern)`: the provided pattern string
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Comma or space separated list of dash/gap lengths
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "dash-dot" | "dashdot" => Ok(Self::DashDot),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::DashDot => Some("10,5,2,5".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// How line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// How line corners are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// Line geometry of a stroke, independent of its color.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | width | `1.0` |
/// | style | [`StrokeStyle::Solid`] |
/// | cap | [`StrokeCap::Butt`] |
/// | join | [`StrokeJoin::Miter`] |
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeOptions {
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeOptions {
    /// Creates options with the given width and default pattern, cap and join.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply a stroke color and [`StrokeOptions`] to an SVG element.
///
/// Sets color, opacity, width, line cap, line join, and the dash pattern
/// when the style is not solid.
///
/// # Examples
///
/// ```
/// use constellation_core::color::Color;
/// use constellation_core::draw::StrokeOptions;
/// use svg::node::element as svg_element;
///
/// let color = Color::new("black").unwrap();
/// let options = StrokeOptions::new(2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
///
/// let line = constellation_core::apply_stroke!(line, &color, &options);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $color:expr, $options:expr) => {{
        let mut elem = $element
            .set("stroke", $color.to_string())
            .set("stroke-opacity", $color.alpha())
            .set("stroke-width", $options.width())
            .set("stroke-linecap", $options.cap().to_svg_value())
            .set("stroke-linejoin", $options.join().to_svg_value());

        if let Some(dasharray) = $options.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_options_default() {
        let options = StrokeOptions::default();
        assert_eq!(options.width(), 1.0);
        assert_eq!(*options.style(), StrokeStyle::Solid);
        assert_eq!(options.cap(), StrokeCap::Butt);
        assert_eq!(options.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_stroke_options_builder() {
        let options = StrokeOptions::new(1.5)
            .with_style(StrokeStyle::Dashed)
            .with_cap(StrokeCap::Round)
            .with_join(StrokeJoin::Bevel);

        assert_eq!(options.width(), 1.5);
        assert_eq!(*options.style(), StrokeStyle::Dashed);
        assert_eq!(options.cap(), StrokeCap::Round);
        assert_eq!(options.join(), StrokeJoin::Bevel);
    }

    #[test]
    fn test_stroke_color_resolve() {
        let background = Color::new("white").unwrap();
        let red = Color::new("red").unwrap();

        assert!(StrokeColor::default().is_clip());
        assert_eq!(StrokeColor::Clip.resolve(background), background);
        assert_eq!(StrokeColor::from(red).resolve(background), red);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3".to_string()));
        assert_eq!(
            StrokeStyle::DashDot.to_svg_value(),
            Some("10,5,2,5".to_string())
        );
        assert_eq!(
            StrokeStyle::Custom("15,3".to_string()).to_svg_value(),
            Some("15,3".to_string())
        );
    }

    #[test]
    fn test_stroke_cap_from_str() {
        assert_eq!(StrokeCap::from_str("round").unwrap(), StrokeCap::Round);
        assert_eq!(StrokeCap::Square.to_svg_value(), "square");

        let result = StrokeCap::from_str("invalid");
        assert!(result.unwrap_err().contains("invalid stroke cap"));
    }

    #[test]
    fn test_stroke_join_from_str() {
        assert_eq!(StrokeJoin::from_str("bevel").unwrap(), StrokeJoin::Bevel);
        assert_eq!(StrokeJoin::Round.to_svg_value(), "round");

        let result = StrokeJoin::from_str("invalid");
        assert!(result.unwrap_err().contains("invalid stroke join"));
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!(StrokeStyle::from_str("dashdot").unwrap(), StrokeStyle::DashDot);
        assert_eq!(
            StrokeStyle::from_str("4,2").unwrap(),
            StrokeStyle::Custom("4,2".to_string())
        );
    }
}
