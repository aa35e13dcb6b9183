//! Two-axis alignment and the offsets derived from it.
//!
//! An [`Alignment`] says where an annotation sits relative to the symbol it
//! labels. Two pure mappings turn it into geometry:
//!
//! - [`Alignment::anchor_offset`] moves an annotation off the symbol's
//!   center so it clears the symbol edge.
//! - [`Alignment::text_image_offset`] moves a measured text box so the
//!   requested edge of the box lands on the drawing position.
//!
//! # Anchor table
//!
//! For a symbol of size `(w, h)`:
//!
//! | Vertical | Horizontal | Anchor |
//! |----------|------------|--------|
//! | top      | center     | `(0, -h/2)` |
//! | bottom   | center     | `(0, h/2)` |
//! | center   | leading    | `(w/2, 0)` |
//! | center   | trailing   | `(-w/2, 0)` |
//! | any other combination | | `(0, 0)` |
//!
//! The four corners and plain center stay on the symbol center.

use std::{fmt, str::FromStr};

use crate::geometry::{Point, Size};

/// Horizontal component of an [`Alignment`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

/// Vertical component of an [`Alignment`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// A horizontal and a vertical alignment.
///
/// # Examples
///
/// ```
/// # use constellation_core::draw::Alignment;
/// # use constellation_core::geometry::{Point, Size};
/// let size = Size::new(20.0, 10.0);
/// assert_eq!(Alignment::TOP.anchor_offset(size), Point::new(0.0, -5.0));
/// assert_eq!(Alignment::LEADING.anchor_offset(size), Point::new(10.0, 0.0));
/// assert_eq!(Alignment::TOP_LEADING.anchor_offset(size), Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl Alignment {
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    pub const TOP: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Top);
    pub const TOP_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    pub const LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Center);
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    pub const TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Center);
    pub const BOTTOM_LEADING: Self =
        Self::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom);
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(self) -> HorizontalAlignment {
        self.horizontal
    }

    pub fn vertical(self) -> VerticalAlignment {
        self.vertical
    }

    /// Displacement from a symbol's center that places an annotation just
    /// outside the symbol. See the [module table](self) for the mapping.
    pub fn anchor_offset(self, size: Size) -> Point {
        match (self.vertical, self.horizontal) {
            (VerticalAlignment::Top, HorizontalAlignment::Center) => {
                Point::new(0.0, -size.height() / 2.0)
            }
            (VerticalAlignment::Bottom, HorizontalAlignment::Center) => {
                Point::new(0.0, size.height() / 2.0)
            }
            (VerticalAlignment::Center, HorizontalAlignment::Leading) => {
                Point::new(size.width() / 2.0, 0.0)
            }
            (VerticalAlignment::Center, HorizontalAlignment::Trailing) => {
                Point::new(-size.width() / 2.0, 0.0)
            }
            _ => Point::default(),
        }
    }

    /// Offset applied to a measured text box of `width` x `height` before it
    /// is drawn at a position on an external drawing surface.
    ///
    /// Horizontal: center `-w/2`, trailing `-w`, leading `0`.
    /// Vertical: center `h/2`, bottom `h`, top `0`.
    pub fn text_image_offset(self, width: f32, height: f32) -> Point {
        let dx = match self.horizontal {
            HorizontalAlignment::Center => -width / 2.0,
            HorizontalAlignment::Trailing => -width,
            HorizontalAlignment::Leading => 0.0,
        };
        let dy = match self.vertical {
            VerticalAlignment::Center => height / 2.0,
            VerticalAlignment::Bottom => height,
            VerticalAlignment::Top => 0.0,
        };
        Point::new(dx, dy)
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-leading" => Ok(Self::TOP_LEADING),
            "top" => Ok(Self::TOP),
            "top-trailing" => Ok(Self::TOP_TRAILING),
            "leading" => Ok(Self::LEADING),
            "center" => Ok(Self::CENTER),
            "trailing" => Ok(Self::TRAILING),
            "bottom-leading" => Ok(Self::BOTTOM_LEADING),
            "bottom" => Ok(Self::BOTTOM),
            "bottom-trailing" => Ok(Self::BOTTOM_TRAILING),
            _ => Err(format!(
                "invalid alignment `{s}`, valid values: top-leading, top, top-trailing, \
                 leading, center, trailing, bottom-leading, bottom, bottom-trailing"
            )),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            VerticalAlignment::Top => Some("top"),
            VerticalAlignment::Center => None,
            VerticalAlignment::Bottom => Some("bottom"),
        };
        let horizontal = match self.horizontal {
            HorizontalAlignment::Leading => Some("leading"),
            HorizontalAlignment::Center => None,
            HorizontalAlignment::Trailing => Some("trailing"),
        };
        match (vertical, horizontal) {
            (Some(v), Some(h)) => write!(f, "{v}-{h}"),
            (Some(v), None) => f.write_str(v),
            (None, Some(h)) => f.write_str(h),
            (None, None) => f.write_str("center"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOL: Size = Size::new(20.0, 10.0);

    #[test]
    fn test_anchor_offset_table() {
        assert_eq!(Alignment::TOP.anchor_offset(SYMBOL), Point::new(0.0, -5.0));
        assert_eq!(Alignment::BOTTOM.anchor_offset(SYMBOL), Point::new(0.0, 5.0));
        assert_eq!(Alignment::LEADING.anchor_offset(SYMBOL), Point::new(10.0, 0.0));
        assert_eq!(
            Alignment::TRAILING.anchor_offset(SYMBOL),
            Point::new(-10.0, 0.0)
        );
        assert_eq!(Alignment::CENTER.anchor_offset(SYMBOL), Point::default());
    }

    #[test]
    fn test_anchor_offset_corners_stay_centered() {
        for corner in [
            Alignment::TOP_LEADING,
            Alignment::TOP_TRAILING,
            Alignment::BOTTOM_LEADING,
            Alignment::BOTTOM_TRAILING,
        ] {
            assert_eq!(corner.anchor_offset(SYMBOL), Point::default(), "{corner}");
        }
    }

    #[test]
    fn test_text_image_offset() {
        assert_eq!(
            Alignment::CENTER.text_image_offset(40.0, 10.0),
            Point::new(-20.0, 5.0)
        );
        assert_eq!(
            Alignment::BOTTOM_TRAILING.text_image_offset(40.0, 10.0),
            Point::new(-40.0, 10.0)
        );
        assert_eq!(
            Alignment::TOP_LEADING.text_image_offset(40.0, 10.0),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_alignment_from_str_round_trips_display() {
        for alignment in [
            Alignment::TOP_LEADING,
            Alignment::TOP,
            Alignment::TOP_TRAILING,
            Alignment::LEADING,
            Alignment::CENTER,
            Alignment::TRAILING,
            Alignment::BOTTOM_LEADING,
            Alignment::BOTTOM,
            Alignment::BOTTOM_TRAILING,
        ] {
            let parsed: Alignment = alignment.to_string().parse().unwrap();
            assert_eq!(parsed, alignment);
        }
    }

    #[test]
    fn test_alignment_from_str_invalid() {
        let result = "middle".parse::<Alignment>();
        assert!(result.unwrap_err().contains("invalid alignment"));
    }
}
