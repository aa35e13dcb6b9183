//! The content tree callers compose graphs with.
//!
//! A [`Content`] tree declares which nodes and links exist (marks), how
//! they are grouped, which branch of a condition was taken, and which
//! effects wrap which subtrees. Attaching the tree to a
//! [`RenderingContext`] flattens it into per-entity attribute tables.
//!
//! # Examples
//!
//! ```
//! use constellation::{Content, EntityId, RenderingContext};
//! use constellation::draw::{Alignment, SymbolShape};
//! use constellation::geometry::{Point, Size};
//!
//! let content: Content<&str> = Content::group([
//!     Content::node("sun")
//!         .symbol(SymbolShape::Circle)
//!         .symbol_size(Size::new(20.0, 10.0))
//!         .annotation("Sun", Alignment::TOP),
//!     Content::node("earth").symbol(SymbolShape::Square),
//!     Content::link("earth", "sun"),
//! ]);
//!
//! let ctx = RenderingContext::from_content(&content);
//! let placement = ctx.placements()[&EntityId::Node("sun")];
//! assert_eq!(placement.offset(), Point::new(0.0, -5.0));
//! ```

use std::rc::Rc;

use constellation_core::{
    color::Color,
    draw::{Alignment, LinkShape, Shading, StrokeColor, StrokeOptions, SymbolShape},
    geometry::{Point, Size},
};

use crate::{
    context::RenderingContext,
    effect::{Effect, TextAnnotation, ViewAnnotation},
    entity::{EntityId, EntityKey},
    view::{AnnotationView, ViewHandle},
};

/// The branch selected by a condition at composition time.
///
/// Only the selected branch is stored; the other one is dropped when the
/// conditional is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Conditional<K> {
    True(Box<Content<K>>),
    False(Box<Content<K>>),
}

impl<K> Conditional<K> {
    /// Evaluates `condition` once and keeps the matching branch.
    pub fn new(condition: bool, if_true: Content<K>, if_false: Content<K>) -> Self {
        if condition {
            Self::True(Box::new(if_true))
        } else {
            Self::False(Box::new(if_false))
        }
    }

    pub fn condition(&self) -> bool {
        matches!(self, Self::True(_))
    }

    /// The stored branch.
    pub fn branch(&self) -> &Content<K> {
        match self {
            Self::True(content) | Self::False(content) => content,
        }
    }
}

/// A node of the content tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<K> {
    /// Declares that one node or link exists.
    Mark(EntityId<K>),
    /// Ordered children. Order matters only when children write the same
    /// entity, in which case the last write wins.
    Group(Vec<Content<K>>),
    Conditional(Conditional<K>),
    /// `inner` wrapped by `effect`.
    Modified { inner: Box<Content<K>>, effect: Effect },
}

impl<K: EntityKey> Content<K> {
    /// A node mark.
    pub fn node(key: K) -> Self {
        Self::Mark(EntityId::Node(key))
    }

    /// A mark for the directed link `source -> target`.
    pub fn link(source: K, target: K) -> Self {
        Self::Mark(EntityId::Link(source, target))
    }

    pub fn group(children: impl IntoIterator<Item = Content<K>>) -> Self {
        Self::Group(children.into_iter().collect())
    }

    /// Keeps `if_true` when `condition` holds, `if_false` otherwise.
    pub fn either(condition: bool, if_true: Content<K>, if_false: Content<K>) -> Self {
        Self::Conditional(Conditional::new(condition, if_true, if_false))
    }

    /// A group with one child per item.
    ///
    /// ```
    /// # use constellation::Content;
    /// let ring = Content::series(["a", "b", "c"], Content::node);
    /// assert!(matches!(ring, Content::Group(ref children) if children.len() == 3));
    /// ```
    pub fn series<I, F>(items: I, build: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Content<K>,
    {
        Self::Group(items.into_iter().map(build).collect())
    }

    /// Wraps `self` in `effect`.
    pub fn modified(self, effect: Effect) -> Self {
        Self::Modified {
            inner: Box::new(self),
            effect,
        }
    }

    pub fn shading(self, shading: impl Into<Shading>) -> Self {
        self.modified(Effect::Shading(shading.into()))
    }

    /// Shading with a plain color.
    pub fn foreground_color(self, color: Color) -> Self {
        self.shading(Shading::Color(color))
    }

    pub fn symbol(self, shape: SymbolShape) -> Self {
        self.modified(Effect::Symbol(shape))
    }

    pub fn symbol_size(self, size: Size) -> Self {
        self.modified(Effect::SymbolSize(size))
    }

    /// Symbol size of a circle with the given radius.
    pub fn symbol_size_radius(self, radius: f32) -> Self {
        self.symbol_size(Size::from_radius(radius))
    }

    pub fn stroke(self, color: impl Into<StrokeColor>, options: Option<StrokeOptions>) -> Self {
        self.modified(Effect::Stroke(color.into(), options))
    }

    pub fn link_shape(self, shape: LinkShape) -> Self {
        self.modified(Effect::LinkShape(shape))
    }

    /// Text annotation at `alignment` with no extra offset.
    pub fn annotation(self, text: impl Into<String>, alignment: Alignment) -> Self {
        self.annotation_with(Some(text.into()), alignment, Point::default())
    }

    /// Text annotation with an explicit offset. `None` text adds nothing.
    pub fn annotation_with(
        self,
        text: Option<String>,
        alignment: Alignment,
        offset: Point,
    ) -> Self {
        let annotation = TextAnnotation::new(text, alignment, offset);
        self.modified(Effect::TextAnnotation(annotation))
    }

    /// Annotation drawn by an arbitrary view, identified by `tag`.
    pub fn view_annotation(
        self,
        tag: impl Into<String>,
        view: Rc<dyn AnnotationView>,
        alignment: Alignment,
        offset: Point,
    ) -> Self {
        self.modified(Effect::ViewAnnotation(ViewAnnotation::new(
            ViewHandle::new(tag, view),
            alignment,
            offset,
        )))
    }

    /// Traverses this tree into `ctx`.
    ///
    /// Each group child runs in its own scope, so a mark inside one child
    /// is never the current entity for a sibling or for an effect wrapping
    /// the whole group.
    pub fn attach(&self, ctx: &mut RenderingContext<K>) {
        match self {
            Self::Mark(id) => ctx.visit_mark(id),
            Self::Group(children) => {
                for child in children {
                    ctx.scoped(|ctx| child.attach(ctx));
                }
            }
            Self::Conditional(conditional) => conditional.branch().attach(ctx),
            Self::Modified { inner, effect } => effect.bracket(ctx, |ctx| inner.attach(ctx)),
        }
    }
}

impl<K: EntityKey> FromIterator<Content<K>> for Content<K> {
    fn from_iter<T: IntoIterator<Item = Content<K>>>(iter: T) -> Self {
        Self::group(iter)
    }
}
