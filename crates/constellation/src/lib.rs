//! Constellation - declarative composition of styled node-link graphs.
//!
//! A caller declares nodes and links as a [`Content`] tree, wraps subtrees
//! in visual effects, and attaches the tree to a [`RenderingContext`]. The
//! context flattens the tree into one table per visual attribute plus the
//! graph [`Topology`], ready for a layout engine and a renderer.
//!
//! [`GraphBuilder`] bundles the whole pipeline for arrow-syntax text:
//! parse, compose, lay out on a ring, and export to SVG.

pub mod config;
pub mod export;
pub mod layout;

mod content;
mod context;
mod effect;
mod entity;
mod error;
mod pending;
mod topology;
mod view;

pub use constellation_core::{color, draw, geometry, identifier};
pub use constellation_parser::ParsedGraph;

pub use content::{Conditional, Content};
pub use context::{Placement, RenderingContext, Stroke};
pub use effect::{ContentEffect, Effect, TextAnnotation, ViewAnnotation};
pub use entity::{EntityId, EntityKey};
pub use error::ConstellationError;
pub use pending::{PendingValue, SymbolTable};
pub use topology::Topology;
pub use view::{AnnotationView, LabelView, MeasuredView, ViewHandle};

use std::rc::Rc;

use log::{debug, info};

use constellation_core::{
    color::accent_color,
    draw::{Alignment, StrokeCap, StrokeJoin, StrokeOptions, SymbolShape},
    geometry::Point,
    identifier::Id,
};

use config::AppConfig;

/// Gap between a node symbol and its label.
const LABEL_GAP: f32 = 4.0;

/// Builder for parsing, composing and rendering arrow-syntax graphs.
///
/// # Examples
///
/// ```
/// use constellation::{GraphBuilder, config::AppConfig};
///
/// let builder = GraphBuilder::new(AppConfig::default());
///
/// let graph = builder.parse("Alice -> Bob\nBob --> Cindy");
/// let content = builder.compose(&graph).unwrap();
/// assert_eq!(graph.nodes().len(), 3);
/// # let _ = content;
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse arrow-syntax source text.
    ///
    /// Never fails: lines without a relation are recorded as skipped.
    pub fn parse(&self, source: &str) -> ParsedGraph {
        info!("Parsing relations");
        let graph = constellation_parser::parse_relations(source);
        debug!(
            nodes = graph.nodes().len(),
            links = graph.links().len(),
            skipped = graph.skipped_lines().len();
            "Relations parsed"
        );
        graph
    }

    /// Compose a parsed graph into a styled content tree.
    ///
    /// Every node becomes a circle of the configured radius and color with
    /// a label below it, tinted with the label's accent color. Every link
    /// gets the configured link shape and stroke.
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::Config`] if a configured color or link
    /// shape is invalid.
    pub fn compose(&self, graph: &ParsedGraph) -> Result<Content<Id>, ConstellationError> {
        let style = self.config.style();
        let node_color = style.node_color().map_err(ConstellationError::Config)?;
        let link_color = style.link_color().map_err(ConstellationError::Config)?;
        let link_shape = style.link_shape().map_err(ConstellationError::Config)?;
        let text_definition = style.text_definition();
        let link_stroke = StrokeOptions::new(style.link_width())
            .with_cap(StrokeCap::Round)
            .with_join(StrokeJoin::Round);

        let nodes = Content::series(graph.nodes(), |name| {
            let label = LabelView::new(name.as_str(), accent_color(name), text_definition.clone());
            Content::node(Id::new(name))
                .symbol(SymbolShape::Circle)
                .symbol_size_radius(style.node_radius())
                .foreground_color(node_color)
                .view_annotation(
                    "label",
                    Rc::new(label),
                    Alignment::BOTTOM,
                    Point::new(0.0, LABEL_GAP),
                )
        });

        let links = Content::series(graph.links(), |(source, target)| {
            Content::link(Id::new(source), Id::new(target))
                .link_shape(link_shape)
                .stroke(link_color, Some(link_stroke.clone()))
        });

        debug!(
            nodes = graph.nodes().len(),
            links = graph.links().len();
            "Content composed"
        );
        Ok(Content::group([nodes, links]))
    }

    /// Render a content tree to an SVG string.
    ///
    /// Nodes are spread on a ring using their names as seeds; see
    /// [`layout::ring_layout`].
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::Export`] if the exporter cannot be
    /// configured, for example because of an invalid background color.
    pub fn render_svg(&self, content: &Content<Id>) -> Result<String, ConstellationError> {
        let ctx = RenderingContext::from_content(content);

        let all_nodes = ctx.topology().all_nodes();
        let positions = layout::ring_layout(
            all_nodes.iter(),
            self.config.layout().ring_radius(),
            Id::to_string,
        );

        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_padding(self.config.layout().padding())
            .build()?;
        let document = exporter.render(&ctx, &positions);

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
