//! Color handling for graph content.
//!
//! This module provides the [`Color`] type, a thin wrapper around
//! `DynamicColor` from the `color` crate, and [`accent_color`], which picks a
//! stable palette entry for a label.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// CSS colors used for per-label accents, indexed by a hash of the label.
const ACCENT_PALETTE: [&str; 8] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#9a6324",
];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Wrapper around `DynamicColor`, parsed from CSS color strings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use constellation_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Fully transparent white, used for "invisible" fills.
    pub fn transparent() -> Self {
        Self::new("white")
            .expect("'white' is a valid CSS color")
            .with_alpha(0.0)
    }

    /// Creates a new color with the specified alpha value in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns a string usable inside an SVG `id` attribute.
    ///
    /// ```
    /// # use constellation_core::color::Color;
    /// let id = Color::new("rgb(255, 0, 0)").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            format!("c_{sanitized}")
        } else {
            sanitized
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Picks an accent color for a label from a fixed palette.
///
/// The choice depends only on the UTF-8 bytes of the label, folded with
/// 64-bit FNV-1a, so a label keeps its color regardless of the build.
///
/// # Examples
///
/// ```
/// use constellation_core::color::accent_color;
///
/// assert_eq!(accent_color("Alice"), accent_color("Alice"));
/// ```
pub fn accent_color(label: &str) -> Color {
    let hash = label.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    });
    let index = (hash % ACCENT_PALETTE.len() as u64) as usize;
    Color::new(ACCENT_PALETTE[index]).expect("palette entries are valid CSS colors")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_transparent() {
        assert_eq!(Color::transparent().alpha(), 0.0);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap().with_alpha(0.5);
        assert!((color.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_color_eq_hash() {
        let red = Color::new("red").unwrap();
        let mut set = HashSet::new();
        set.insert(red);
        assert!(set.contains(&Color::new("red").unwrap()));
        assert!(!set.contains(&Color::new("blue").unwrap()));
    }

    #[test]
    fn test_palette_entries_parse() {
        for entry in ACCENT_PALETTE {
            assert!(Color::new(entry).is_ok(), "{entry} should parse");
        }
    }

    #[test]
    fn test_accent_color_is_stable() {
        for label in ["Alice", "Bob", "José", "アキラ", ""] {
            assert_eq!(accent_color(label), accent_color(label));
        }
    }

    #[test]
    fn test_accent_color_is_pinned() {
        assert_eq!(accent_color("Alice"), Color::new("#9a6324").unwrap());
        assert_eq!(accent_color("Bob"), Color::new("#911eb4").unwrap());
        assert_eq!(accent_color(""), Color::new("#42d4f4").unwrap());
    }

    #[test]
    fn test_accent_color_comes_from_palette() {
        let palette: HashSet<Color> = ACCENT_PALETTE
            .iter()
            .map(|entry| Color::new(entry).unwrap())
            .collect();
        assert!(palette.contains(&accent_color("Cindy")));
    }
}
