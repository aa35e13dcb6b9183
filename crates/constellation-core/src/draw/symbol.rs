//! Node symbol shapes and link shapes.

use std::{f32::consts::PI, str::FromStr};

use crate::geometry::{Point, Size};

/// Shape drawn for a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Pentagon,
    Cross,
}

impl SymbolShape {
    /// Polygon vertices relative to the symbol center, scaled to fit `size`.
    ///
    /// Returns `None` for [`SymbolShape::Circle`], which is not a polygon.
    ///
    /// # Examples
    ///
    /// ```
    /// # use constellation_core::draw::SymbolShape;
    /// # use constellation_core::geometry::Size;
    /// let diamond = SymbolShape::Diamond.outline(Size::new(10.0, 10.0)).unwrap();
    /// assert_eq!(diamond.len(), 4);
    /// assert!(SymbolShape::Circle.outline(Size::new(10.0, 10.0)).is_none());
    /// ```
    pub fn outline(self, size: Size) -> Option<Vec<Point>> {
        let hw = size.width() / 2.0;
        let hh = size.height() / 2.0;
        let points = match self {
            Self::Circle => return None,
            Self::Square => vec![
                Point::new(-hw, -hh),
                Point::new(hw, -hh),
                Point::new(hw, hh),
                Point::new(-hw, hh),
            ],
            Self::Triangle => vec![Point::new(0.0, -hh), Point::new(hw, hh), Point::new(-hw, hh)],
            Self::Diamond => vec![
                Point::new(0.0, -hh),
                Point::new(hw, 0.0),
                Point::new(0.0, hh),
                Point::new(-hw, 0.0),
            ],
            Self::Pentagon => (0..5)
                .map(|i| {
                    let angle = -PI / 2.0 + i as f32 * 2.0 * PI / 5.0;
                    Point::new(angle.cos() * hw, angle.sin() * hh)
                })
                .collect(),
            Self::Cross => {
                let tw = hw / 3.0;
                let th = hh / 3.0;
                vec![
                    Point::new(-tw, -hh),
                    Point::new(tw, -hh),
                    Point::new(tw, -th),
                    Point::new(hw, -th),
                    Point::new(hw, th),
                    Point::new(tw, th),
                    Point::new(tw, hh),
                    Point::new(-tw, hh),
                    Point::new(-tw, th),
                    Point::new(-hw, th),
                    Point::new(-hw, -th),
                    Point::new(-tw, -th),
                ]
            }
        };
        Some(points)
    }
}

impl FromStr for SymbolShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "diamond" => Ok(Self::Diamond),
            "pentagon" => Ok(Self::Pentagon),
            "cross" => Ok(Self::Cross),
            _ => Err(format!(
                "invalid symbol `{s}`, valid values: \
                 circle, square, triangle, diamond, pentagon, cross"
            )),
        }
    }
}

/// Path style of a link between two nodes.
///
/// - `Straight`: a plain line segment
/// - `Arrow`: a line segment with an arrow head at the target
/// - `Curved`: a quadratic curve bending to the right of the direction of travel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkShape {
    #[default]
    Straight,
    Arrow,
    Curved,
}

impl FromStr for LinkShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "arrow" => Ok(Self::Arrow),
            "curved" => Ok(Self::Curved),
            _ => Err(format!(
                "invalid link shape `{s}`, valid values: straight, arrow, curved"
            )),
        }
    }
}
