//! The accumulator for one traversal of a content tree.
//!
//! A [`RenderingContext`] holds two kinds of state:
//!
//! - Scratch state: the entity most recently marked and the symbol size
//!   set for it. Effects read this to decide which entity they apply to.
//! - Resolved tables: one insertion-ordered map per attribute, keyed by
//!   [`EntityId`]. A later write for the same entity replaces the earlier
//!   one but keeps its original position.
//!
//! A context is built for exactly one traversal with
//! [`RenderingContext::from_content`]; consumers then read the finished
//! tables through the `&self` getters.

use indexmap::IndexMap;
use log::{debug, info};

use constellation_core::{
    draw::{Alignment, LinkShape, Shading, StrokeColor, StrokeOptions, SymbolShape},
    geometry::{Point, Size},
};

use crate::{
    content::Content,
    entity::{EntityId, EntityKey},
    pending::{PendingValue, SymbolTable},
    topology::Topology,
    view::{MeasuredView, ViewHandle},
};

/// Stroke attribute recorded for an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: StrokeColor,
    options: Option<StrokeOptions>,
}

impl Stroke {
    pub fn new(color: StrokeColor, options: Option<StrokeOptions>) -> Self {
        Self { color, options }
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    /// Line options, or `None` for the renderer's default line.
    pub fn options(&self) -> Option<&StrokeOptions> {
        self.options.as_ref()
    }
}

/// Where an annotation sits relative to its entity.
///
/// The offset already includes the anchor displacement for nodes whose
/// symbol size was known when the annotation was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    alignment: Alignment,
    offset: Point,
}

impl Placement {
    pub fn new(alignment: Alignment, offset: Point) -> Self {
        Self { alignment, offset }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// Scratch state, saved and restored around every scope.
#[derive(Debug, Clone)]
struct TraversalState<K> {
    current_id: Option<EntityId<K>>,
    current_symbol_size: Option<Size>,
}

impl<K> Default for TraversalState<K> {
    fn default() -> Self {
        Self {
            current_id: None,
            current_symbol_size: None,
        }
    }
}

type Table<K, V> = IndexMap<EntityId<K>, V>;

/// Resolved visual attributes and topology of one content tree.
#[derive(Debug, Clone)]
pub struct RenderingContext<K: EntityKey> {
    state: TraversalState<K>,
    pub(crate) shadings: Table<K, Shading>,
    pub(crate) strokes: Table<K, Stroke>,
    pub(crate) symbols: Table<K, SymbolShape>,
    pub(crate) symbol_sizes: Table<K, Size>,
    pub(crate) link_shapes: Table<K, LinkShape>,
    pub(crate) placements: Table<K, Placement>,
    pub(crate) resolved_texts: Table<K, String>,
    pub(crate) resolved_views: Table<K, PendingValue<ViewHandle, MeasuredView>>,
    pub(crate) symbol_table: SymbolTable,
    topology: Topology<K>,
}

impl<K: EntityKey> Default for RenderingContext<K> {
    fn default() -> Self {
        Self {
            state: TraversalState::default(),
            shadings: IndexMap::new(),
            strokes: IndexMap::new(),
            symbols: IndexMap::new(),
            symbol_sizes: IndexMap::new(),
            link_shapes: IndexMap::new(),
            placements: IndexMap::new(),
            resolved_texts: IndexMap::new(),
            resolved_views: IndexMap::new(),
            symbol_table: SymbolTable::new(),
            topology: Topology::new(),
        }
    }
}

impl<K: EntityKey> RenderingContext<K> {
    /// Creates an empty context for a single traversal.
    ///
    /// Most callers want [`Self::from_content`], which also runs the
    /// traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Traverses `content` into a fresh context and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use constellation::{Content, EntityId, RenderingContext};
    /// use constellation::draw::LinkShape;
    ///
    /// let content = Content::group([
    ///     Content::node("a"),
    ///     Content::node("b"),
    ///     Content::link("a", "b").link_shape(LinkShape::Arrow),
    /// ]);
    ///
    /// let ctx = RenderingContext::from_content(&content);
    /// assert_eq!(ctx.topology().nodes().len(), 2);
    /// assert_eq!(
    ///     ctx.link_shapes().get(&EntityId::Link("a", "b")),
    ///     Some(&LinkShape::Arrow)
    /// );
    /// ```
    pub fn from_content(content: &Content<K>) -> Self {
        info!("Attaching content");

        let mut ctx = Self::new();
        ctx.scoped(|ctx| content.attach(ctx));

        debug!(
            nodes = ctx.topology.nodes().len(),
            links = ctx.topology.links().len(),
            annotations = ctx.placements.len(),
            texts = ctx.symbol_table.len();
            "Content attached"
        );
        ctx
    }

    /// Runs `f`, then restores the scratch state to what it was before.
    pub(crate) fn scoped(&mut self, f: impl FnOnce(&mut Self)) {
        let saved = self.state.clone();
        f(self);
        self.state = saved;
    }

    /// Makes `id` the current entity and records it in the topology.
    pub(crate) fn visit_mark(&mut self, id: &EntityId<K>) {
        self.state.current_id = Some(id.clone());
        self.state.current_symbol_size = None;
        self.topology.record(id);
    }

    pub(crate) fn set_current_symbol_size(&mut self, size: Size) {
        self.state.current_symbol_size = Some(size);
    }

    /// Entity most recently marked in the current scope.
    pub fn current_id(&self) -> Option<&EntityId<K>> {
        self.state.current_id.as_ref()
    }

    /// Symbol size set for the current entity, if any.
    pub fn current_symbol_size(&self) -> Option<Size> {
        self.state.current_symbol_size
    }

    pub fn shadings(&self) -> &IndexMap<EntityId<K>, Shading> {
        &self.shadings
    }

    pub fn strokes(&self) -> &IndexMap<EntityId<K>, Stroke> {
        &self.strokes
    }

    /// Symbol shapes of nodes.
    pub fn symbols(&self) -> &IndexMap<EntityId<K>, SymbolShape> {
        &self.symbols
    }

    pub fn symbol_sizes(&self) -> &IndexMap<EntityId<K>, Size> {
        &self.symbol_sizes
    }

    pub fn link_shapes(&self) -> &IndexMap<EntityId<K>, LinkShape> {
        &self.link_shapes
    }

    /// Placement of each entity's annotation, text or view.
    pub fn placements(&self) -> &IndexMap<EntityId<K>, Placement> {
        &self.placements
    }

    pub fn resolved_texts(&self) -> &IndexMap<EntityId<K>, String> {
        &self.resolved_texts
    }

    /// Annotation views, still pending measurement.
    pub fn resolved_views(&self) -> &IndexMap<EntityId<K>, PendingValue<ViewHandle, MeasuredView>> {
        &self.resolved_views
    }

    /// Distinct annotation texts awaiting measurement.
    ///
    /// Consumers clone this and call [`SymbolTable::resolve_all`] on the
    /// clone; the context itself is never mutated after traversal.
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn topology(&self) -> &Topology<K> {
        &self.topology
    }
}
