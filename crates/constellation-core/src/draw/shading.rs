//! Fill styles for node symbols and links.

use std::str::FromStr;

use crate::color::Color;

/// Semantic fill levels that follow the host's foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchicalStyle {
    Primary,
    Secondary,
    Tertiary,
    Foreground,
    Background,
}

impl HierarchicalStyle {
    /// Opacity applied to the foreground color at this level.
    fn opacity(self) -> f32 {
        match self {
            Self::Primary | Self::Foreground | Self::Background => 1.0,
            Self::Secondary => 0.5,
            Self::Tertiary => 0.25,
        }
    }
}

/// Fill of a node symbol or link, stored and forwarded verbatim.
///
/// # Examples
///
/// ```
/// # use constellation_core::color::Color;
/// # use constellation_core::draw::{HierarchicalStyle, Shading};
/// let foreground = Color::new("black").unwrap();
/// let background = Color::new("white").unwrap();
///
/// let secondary = Shading::Hierarchical(HierarchicalStyle::Secondary);
/// assert_eq!(secondary.resolve(foreground, background).alpha(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    Color(Color),
    Hierarchical(HierarchicalStyle),
}

impl Shading {
    /// Resolves the shading to a concrete color for the given host colors.
    pub fn resolve(self, foreground: Color, background: Color) -> Color {
        match self {
            Self::Color(color) => color,
            Self::Hierarchical(HierarchicalStyle::Background) => background,
            Self::Hierarchical(style) => {
                foreground.with_alpha(foreground.alpha() * style.opacity())
            }
        }
    }
}

impl From<Color> for Shading {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl FromStr for Shading {
    type Err = String;

    /// Parses a hierarchical level name, or any CSS color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Hierarchical(HierarchicalStyle::Primary)),
            "secondary" => Ok(Self::Hierarchical(HierarchicalStyle::Secondary)),
            "tertiary" => Ok(Self::Hierarchical(HierarchicalStyle::Tertiary)),
            "foreground" => Ok(Self::Hierarchical(HierarchicalStyle::Foreground)),
            "background" => Ok(Self::Hierarchical(HierarchicalStyle::Background)),
            _ => Color::new(s).map(Self::Color),
        }
    }
}
