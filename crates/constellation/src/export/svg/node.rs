//! SVG rendering for node symbols.

use indexmap::IndexMap;
use log::debug;
use svg::node::element as svg_element;

use constellation_core::{
    apply_stroke,
    draw::{HierarchicalStyle, Shading, SymbolShape},
    geometry::{Bounds, Point, Size},
};

use super::{Frame, SvgExporter, node_size};
use crate::{
    context::RenderingContext,
    entity::{EntityId, EntityKey},
};

impl SvgExporter {
    /// Draws one symbol per node, including nodes only known as link
    /// endpoints.
    ///
    /// Unshaded nodes use the primary foreground fill and nodes without a
    /// stroke effect have no outline.
    pub(super) fn render_nodes<K: EntityKey>(
        &self,
        ctx: &RenderingContext<K>,
        positions: &IndexMap<K, Point>,
        frame: &mut Frame,
    ) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "nodes");

        for key in ctx.topology().all_nodes() {
            let Some(&center) = positions.get(&key) else {
                debug!(node:? = key; "Skipping node without a position");
                continue;
            };
            let size = node_size(ctx, &key);
            let id = EntityId::Node(key);

            let fill = ctx
                .shadings()
                .get(&id)
                .copied()
                .unwrap_or(Shading::Hierarchical(HierarchicalStyle::Primary))
                .resolve(self.foreground, self.backdrop());

            let mut symbol = svg_element::Group::new()
                .set("class", "node")
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha());

            symbol = match ctx.strokes().get(&id) {
                Some(stroke) => {
                    let color = stroke.color().resolve(self.backdrop());
                    let options = stroke.options().cloned().unwrap_or_default();
                    apply_stroke!(symbol, &color, &options)
                }
                None => symbol.set("stroke", "none"),
            };

            let shape = ctx.symbols().get(&id).copied().unwrap_or_default();
            group = group.add(symbol.add(symbol_element(shape, center, size)));
            frame.include(Bounds::new_from_center(center, size));
        }

        group
    }
}

/// The SVG shape of `shape` centered on `center`.
fn symbol_element(shape: SymbolShape, center: Point, size: Size) -> Box<dyn svg::Node> {
    match shape.outline(size) {
        None => svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", size.width() / 2.0)
            .set("ry", size.height() / 2.0)
            .into(),
        Some(outline) => {
            let points = outline
                .into_iter()
                .map(|point| {
                    let point = center.add_point(point);
                    format!("{},{}", point.x(), point.y())
                })
                .collect::<Vec<_>>()
                .join(" ");
            svg_element::Polygon::new().set("points", points).into()
        }
    }
}
