//! SVG rendering for links.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use svg::node::element::{self as svg_element, path::Data};

use constellation_core::{
    apply_stroke,
    color::Color,
    draw::{LinkShape, StrokeOptions},
    geometry::{Bounds, Point, Size},
};

use super::{Frame, SvgExporter, node_size};
use crate::{
    context::{RenderingContext, Stroke},
    entity::{EntityId, EntityKey},
};

/// Bend of a curved link, as a fraction of its length.
const CURVE_BEND: f32 = 0.2;

impl SvgExporter {
    /// Draws every link whose endpoints both have positions.
    ///
    /// Links are trimmed so they start and end at the edge of the endpoint
    /// symbols. Self links, links too short to survive trimming, and links
    /// with a clipped stroke are not drawn.
    pub(super) fn render_links<K: EntityKey>(
        &self,
        ctx: &RenderingContext<K>,
        positions: &IndexMap<K, Point>,
        frame: &mut Frame,
    ) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "links");

        for (source, target) in ctx.topology().links() {
            let id = EntityId::Link(source.clone(), target.clone());

            if source == target {
                trace!(link:? = id; "Skipping self link");
                continue;
            }
            let (Some(&from), Some(&to)) = (positions.get(source), positions.get(target)) else {
                debug!(link:? = id; "Skipping link without endpoint positions");
                continue;
            };

            let stroke = ctx.strokes().get(&id);
            if stroke.is_some_and(|stroke| stroke.color().is_clip()) {
                trace!(link:? = id; "Skipping clipped link");
                continue;
            }
            let color = stroke.map_or(self.foreground, |stroke| {
                stroke.color().resolve(self.backdrop())
            });
            let options = stroke.and_then(Stroke::options).cloned().unwrap_or_default();
            let shape = ctx.link_shapes().get(&id).copied().unwrap_or_default();

            let Some((start, end)) = trim(
                from,
                to,
                symbol_radius(node_size(ctx, source)),
                symbol_radius(node_size(ctx, target)),
            ) else {
                trace!(link:? = id; "Skipping link hidden by its endpoint symbols");
                continue;
            };

            group = group.add(draw_link(start, end, shape, color, &options, frame));
        }

        group
    }
}

/// Marker definitions for the arrow heads of the given colors.
pub(super) fn arrow_marker_definitions(colors: &IndexSet<Color>) -> svg_element::Definitions {
    colors
        .iter()
        .fold(svg_element::Definitions::new(), |defs, color| {
            defs.add(create_arrow_head(*color))
        })
}

fn arrow_marker_id(color: Color) -> String {
    format!("arrow-{}", color.to_id_safe_string())
}

fn create_arrow_head(color: Color) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", arrow_marker_id(color))
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 6)
        .set("markerHeight", 6)
        .set("orient", "auto")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
        )
}

fn symbol_radius(size: Size) -> f32 {
    size.width().max(size.height()) / 2.0
}

/// Shortens the segment `from -> to` by the two radii.
///
/// Returns `None` when nothing of the segment is left.
fn trim(from: Point, to: Point, start_radius: f32, end_radius: f32) -> Option<(Point, Point)> {
    let delta = to.sub_point(from);
    let length = delta.hypot();
    if length <= start_radius + end_radius {
        return None;
    }

    let direction = delta.scale(1.0 / length);
    Some((
        from.add_point(direction.scale(start_radius)),
        to.sub_point(direction.scale(end_radius)),
    ))
}

/// Control point of a curved link, offset to the right of its direction.
fn curve_control(start: Point, end: Point) -> Point {
    let delta = end.sub_point(start);
    let length = delta.hypot();
    let normal = Point::new(-delta.y(), delta.x()).scale(1.0 / length);
    start.midpoint(end).add_point(normal.scale(CURVE_BEND * length))
}

fn points_bounds(points: &[Point]) -> Bounds {
    points
        .iter()
        .map(|point| Bounds::new_from_center(*point, Size::default()))
        .reduce(|acc, bounds| acc.merge(&bounds))
        .unwrap_or_default()
}

fn draw_link(
    start: Point,
    end: Point,
    shape: LinkShape,
    color: Color,
    options: &StrokeOptions,
    frame: &mut Frame,
) -> Box<dyn svg::Node> {
    match shape {
        LinkShape::Straight | LinkShape::Arrow => {
            frame.include(points_bounds(&[start, end]));

            let mut line = svg_element::Line::new()
                .set("x1", start.x())
                .set("y1", start.y())
                .set("x2", end.x())
                .set("y2", end.y());
            line = apply_stroke!(line, &color, options);

            if shape == LinkShape::Arrow {
                frame.arrow_colors.insert(color);
                line = line.set("marker-end", format!("url(#{})", arrow_marker_id(color)));
            }
            line.into()
        }
        LinkShape::Curved => {
            let control = curve_control(start, end);
            frame.include(points_bounds(&[start, control, end]));

            let data = Data::new()
                .move_to((start.x(), start.y()))
                .quadratic_curve_to((control.x(), control.y(), end.x(), end.y()));
            let path = svg_element::Path::new().set("d", data).set("fill", "none");
            apply_stroke!(path, &color, options).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_trim_moves_both_ends_inward() {
        let (start, end) = trim(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0, 5.0).unwrap();
        assert_eq!(start, Point::new(10.0, 0.0));
        assert_eq!(end, Point::new(95.0, 0.0));
    }

    #[test]
    fn test_trim_too_short() {
        assert!(trim(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 5.0, 5.0).is_none());
        assert!(trim(Point::new(3.0, 3.0), Point::new(3.0, 3.0), 0.0, 0.0).is_none());
    }

    #[test]
    fn test_curve_control_bends_right() {
        // Heading along +x in SVG coordinates, the right-hand side is +y.
        let control = curve_control(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(approx_eq!(f32, control.x(), 50.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, control.y(), 20.0, epsilon = 1e-4));
    }

    #[test]
    fn test_marker_ids_are_distinct_per_color() {
        let red = Color::new("red").unwrap();
        let blue = Color::new("blue").unwrap();
        assert_ne!(arrow_marker_id(red), arrow_marker_id(blue));
        assert_eq!(arrow_marker_id(red), arrow_marker_id(red));
    }

    #[test]
    fn test_points_bounds() {
        let bounds = points_bounds(&[Point::new(-1.0, 4.0), Point::new(3.0, -2.0)]);
        assert_eq!(bounds.min_x(), -1.0);
        assert_eq!(bounds.max_y(), 4.0);
        assert_eq!(bounds.width(), 4.0);
    }
}
