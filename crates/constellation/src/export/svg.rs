//! SVG rendering of a resolved graph.
//!
//! [`SvgExporter`] reads the tables of a [`RenderingContext`] and draws
//! links, node symbols and annotations at caller-supplied node positions.
//! It never mutates the context: the symbol table and pending views are
//! measured on copies owned by the exporter.

mod annotation;
mod link;
mod node;

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use log::{debug, info};
use svg::{self, node::element as svg_element};

use constellation_core::{
    color::Color,
    draw::{FontMeasurer, TextDefinition, TextMeasurer},
    geometry::{Bounds, Insets, Point, Size},
};

use super::Error;
use crate::{
    config::StyleConfig,
    context::RenderingContext,
    entity::{EntityId, EntityKey},
};

/// Radius of a node drawn without a symbol size.
const DEFAULT_NODE_RADIUS: f32 = 6.0;

/// Builder for [`SvgExporter`].
///
/// # Examples
///
/// ```
/// # use constellation::config::StyleConfig;
/// # use constellation::export::svg::SvgBuilder;
/// let exporter = SvgBuilder::new()
///     .with_style(&StyleConfig::default())
///     .with_padding(20.0)
///     .build()
///     .unwrap();
/// assert_eq!(exporter.padding(), 20.0);
/// ```
pub struct SvgBuilder {
    style: StyleConfig,
    padding: f32,
    measurer: Option<Box<dyn TextMeasurer>>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self {
            style: StyleConfig::default(),
            padding: 40.0,
            measurer: None,
        }
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Empty space kept around the drawing, in user units.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Replaces the font-based text measurer.
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Validates the settings and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the configured background color
    /// cannot be parsed, or [`Error::Render`] if the padding is negative or
    /// not finite.
    pub fn build(self) -> Result<SvgExporter, Error> {
        let background = self.style.background_color().map_err(Error::InvalidColor)?;

        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(Error::Render(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }

        let text_definition = self.style.text_definition();
        let measurer = self
            .measurer
            .unwrap_or_else(|| Box::new(FontMeasurer::new(text_definition.clone())));

        Ok(SvgExporter {
            background,
            foreground: Color::default(),
            padding: self.padding,
            measurer,
            text_definition,
        })
    }
}

impl Default for SvgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a [`RenderingContext`] as an SVG document.
pub struct SvgExporter {
    background: Option<Color>,
    foreground: Color,
    padding: f32,
    measurer: Box<dyn TextMeasurer>,
    text_definition: TextDefinition,
}

impl fmt::Debug for SvgExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgExporter")
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("padding", &self.padding)
            .field("text_definition", &self.text_definition)
            .finish_non_exhaustive()
    }
}

impl SvgExporter {
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Renders every entity of `ctx` that has a position.
    ///
    /// Nodes are placed at `positions`; links run between their endpoint
    /// positions and annotations of links are anchored at the link
    /// midpoint. Entities without a position are skipped.
    pub fn render<K: EntityKey>(
        &self,
        ctx: &RenderingContext<K>,
        positions: &IndexMap<K, Point>,
    ) -> svg::Document {
        info!(positions = positions.len(); "Rendering SVG document");

        let mut symbol_table = ctx.symbol_table().clone();
        symbol_table.resolve_all(self.measurer.as_ref());

        let mut frame = Frame::default();
        let links = self.render_links(ctx, positions, &mut frame);
        let nodes = self.render_nodes(ctx, positions, &mut frame);
        let annotations = self.render_annotations(ctx, positions, &symbol_table, &mut frame);

        let bounds = frame
            .bounds
            .unwrap_or_default()
            .add_padding(Insets::uniform(self.padding));

        let mut doc = svg::Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if let Some(background) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", background.to_string())
                    .set("fill-opacity", background.alpha()),
            );
        }

        if !frame.arrow_colors.is_empty() {
            doc = doc.add(link::arrow_marker_definitions(&frame.arrow_colors));
        }

        debug!(
            width = bounds.width(),
            height = bounds.height(),
            markers = frame.arrow_colors.len();
            "SVG document rendered"
        );

        doc.add(links).add(nodes).add(annotations)
    }

    /// The color `Clip` strokes resolve to.
    fn backdrop(&self) -> Color {
        self.background.unwrap_or_else(|| Color::transparent().with_alpha(1.0))
    }
}

/// Shared state collected while drawing one document.
#[derive(Debug, Default)]
struct Frame {
    bounds: Option<Bounds>,
    arrow_colors: IndexSet<Color>,
}

impl Frame {
    fn include(&mut self, bounds: Bounds) {
        self.bounds = Some(match self.bounds {
            Some(current) => current.merge(&bounds),
            None => bounds,
        });
    }
}

/// Size of a node's symbol, or the default dot size.
fn node_size<K: EntityKey>(ctx: &RenderingContext<K>, key: &K) -> Size {
    ctx.symbol_sizes()
        .get(&EntityId::Node(key.clone()))
        .copied()
        .unwrap_or_else(|| Size::from_radius(DEFAULT_NODE_RADIUS))
}

/// Point annotations of `id` are anchored to.
fn entity_anchor<K: EntityKey>(id: &EntityId<K>, positions: &IndexMap<K, Point>) -> Option<Point> {
    match id {
        EntityId::Node(key) => positions.get(key).copied(),
        EntityId::Link(source, target) => {
            let source = positions.get(source)?;
            let target = positions.get(target)?;
            Some(source.midpoint(*target))
        }
    }
}
