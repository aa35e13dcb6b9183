//! SVG rendering for text and view annotations.

use indexmap::IndexMap;
use log::trace;
use svg::node::element as svg_element;

use constellation_core::{
    draw::MeasuredText,
    geometry::{Bounds, Point, Size},
};

use super::{Frame, SvgExporter, entity_anchor};
use crate::{
    context::{Placement, RenderingContext},
    entity::EntityKey,
    pending::SymbolTable,
    view::text_element,
};

impl SvgExporter {
    /// Draws resolved annotation texts and views.
    ///
    /// `symbol_table` must already be resolved; a text missing from it is
    /// measured on the spot.
    pub(super) fn render_annotations<K: EntityKey>(
        &self,
        ctx: &RenderingContext<K>,
        positions: &IndexMap<K, Point>,
        symbol_table: &SymbolTable,
        frame: &mut Frame,
    ) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "annotations");

        for (id, text) in ctx.resolved_texts() {
            let (Some(placement), Some(anchor)) =
                (ctx.placements().get(id), entity_anchor(id, positions))
            else {
                trace!(entity:? = id; "Skipping text annotation without a position");
                continue;
            };

            let size = symbol_table
                .measured(text)
                .map(MeasuredText::size)
                .unwrap_or_else(|| self.measurer.measure(text));
            let top_left = annotation_top_left(anchor, *placement, size);
            let center = top_left.add_point(Point::new(size.width() / 2.0, size.height() / 2.0));

            group = group.add(text_element(text, center, &self.text_definition));
            frame.include(Bounds::new_from_top_left(top_left, size));
        }

        for (id, view) in ctx.resolved_views() {
            let (Some(placement), Some(anchor)) =
                (ctx.placements().get(id), entity_anchor(id, positions))
            else {
                trace!(entity:? = id; "Skipping view annotation without a position");
                continue;
            };

            let mut view = view.clone();
            let measured = view.resolve(|handle| handle.measure(self.measurer.as_ref()));
            let top_left = annotation_top_left(anchor, *placement, measured.size());

            group = group.add(measured.render_svg(top_left));
            frame.include(Bounds::new_from_top_left(top_left, measured.size()));
        }

        group
    }
}

/// Top-left corner of an annotation box of `size`.
///
/// The box is shifted by the alignment's text image offset and then raised
/// by its own height, so a top annotation ends at the anchor and a bottom
/// annotation starts there.
fn annotation_top_left(anchor: Point, placement: Placement, size: Size) -> Point {
    let shift = placement
        .alignment()
        .text_image_offset(size.width(), size.height());
    anchor
        .add_point(placement.offset())
        .add_point(shift)
        .sub_point(Point::new(0.0, size.height()))
}
