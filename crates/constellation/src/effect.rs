//! Effects: modifiers that contribute visual attributes to content.
//!
//! An effect wraps a piece of content and brackets its traversal: `enter`
//! runs before the wrapped content is attached, `exit` runs after. For
//! `content.a().b().c()` the order is
//!
//! ```text
//! c.enter → b.enter → a.enter → mark → a.exit → b.exit → c.exit
//! ```
//!
//! Every built-in effect does its work on exit, writing into the table for
//! the entity most recently marked inside it. Because inner exits run first,
//! an outer effect sees what inner effects wrote (this is how a symbol size
//! set inside an annotation moves that annotation off the symbol edge).
//! An effect that exits with no current entity does nothing.

use log::trace;

use constellation_core::{
    draw::{Alignment, LinkShape, Shading, StrokeColor, StrokeOptions, SymbolShape},
    geometry::{Point, Size},
};

use crate::{
    context::{Placement, RenderingContext, Stroke},
    entity::{EntityId, EntityKey},
    pending::PendingValue,
    view::ViewHandle,
};

/// Hooks run around the traversal of the content an effect wraps.
pub trait ContentEffect<K: EntityKey> {
    /// Runs before the wrapped content is attached.
    fn enter(&self, _ctx: &mut RenderingContext<K>) {}

    /// Runs after the wrapped content is attached.
    fn exit(&self, ctx: &mut RenderingContext<K>);
}

/// Text placed next to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    text: Option<String>,
    alignment: Alignment,
    offset: Point,
}

impl TextAnnotation {
    /// Creates an annotation. `None` text produces no annotation at all.
    pub fn new(text: Option<String>, alignment: Alignment, offset: Point) -> Self {
        Self {
            text,
            alignment,
            offset,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// An [`AnnotationView`](crate::AnnotationView) placed next to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewAnnotation {
    view: ViewHandle,
    alignment: Alignment,
    offset: Point,
}

impl ViewAnnotation {
    pub fn new(view: ViewHandle, alignment: Alignment, offset: Point) -> Self {
        Self {
            view,
            alignment,
            offset,
        }
    }

    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// The closed set of built-in effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Shading(Shading),
    Symbol(SymbolShape),
    SymbolSize(Size),
    /// Stroke paint, with `None` options meaning the renderer's default line.
    Stroke(StrokeColor, Option<StrokeOptions>),
    LinkShape(LinkShape),
    TextAnnotation(TextAnnotation),
    ViewAnnotation(ViewAnnotation),
}

impl Effect {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shading(_) => "shading",
            Self::Symbol(_) => "symbol",
            Self::SymbolSize(_) => "symbol_size",
            Self::Stroke(_, _) => "stroke",
            Self::LinkShape(_) => "link_shape",
            Self::TextAnnotation(_) => "text_annotation",
            Self::ViewAnnotation(_) => "view_annotation",
        }
    }

    /// Runs `inner` between this effect's enter and exit hooks.
    pub fn bracket<K, F>(&self, ctx: &mut RenderingContext<K>, inner: F)
    where
        K: EntityKey,
        F: FnOnce(&mut RenderingContext<K>),
    {
        self.enter(ctx);
        inner(ctx);
        self.exit(ctx);
    }
}

impl<K: EntityKey> ContentEffect<K> for Effect {
    fn exit(&self, ctx: &mut RenderingContext<K>) {
        let Some(id) = ctx.current_id().cloned() else {
            trace!(effect = self.name(); "No current entity, effect skipped");
            return;
        };
        trace!(effect = self.name(), entity:? = id; "Applying effect");

        match self {
            Self::Shading(shading) => {
                ctx.shadings.insert(id, *shading);
            }
            Self::Symbol(shape) => {
                ctx.symbols.insert(id, *shape);
            }
            Self::SymbolSize(size) => {
                ctx.symbol_sizes.insert(id, *size);
                ctx.set_current_symbol_size(*size);
            }
            Self::Stroke(color, options) => {
                ctx.strokes.insert(id, Stroke::new(*color, options.clone()));
            }
            Self::LinkShape(shape) => {
                ctx.link_shapes.insert(id, *shape);
            }
            Self::TextAnnotation(annotation) => {
                let Some(text) = annotation.text() else {
                    trace!(entity:? = id; "Annotation without text skipped");
                    return;
                };
                let placement = place(ctx, &id, annotation.alignment(), annotation.offset());
                ctx.symbol_table.register(text);
                ctx.resolved_texts.insert(id.clone(), text.to_string());
                ctx.placements.insert(id, placement);
            }
            Self::ViewAnnotation(annotation) => {
                let placement = place(ctx, &id, annotation.alignment(), annotation.offset());
                ctx.resolved_views
                    .insert(id.clone(), PendingValue::Pending(annotation.view().clone()));
                ctx.placements.insert(id, placement);
            }
        }
    }
}

/// Placement of an annotation on `id`.
///
/// Nodes with a known symbol size get the alignment's anchor offset added
/// to the caller's offset. Links, and nodes without a size, use the offset
/// as given.
fn place<K: EntityKey>(
    ctx: &RenderingContext<K>,
    id: &EntityId<K>,
    alignment: Alignment,
    offset: Point,
) -> Placement {
    let anchor = match (id, ctx.current_symbol_size()) {
        (EntityId::Node(_), Some(size)) => alignment.anchor_offset(size),
        _ => Point::default(),
    };
    Placement::new(alignment, offset.add_point(anchor))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use constellation_core::{color::Color, draw::TextDefinition};

    use super::*;
    use crate::view::LabelView;

    fn context_on(id: EntityId<&'static str>) -> RenderingContext<&'static str> {
        let mut ctx = RenderingContext::new();
        ctx.visit_mark(&id);
        ctx
    }

    #[test]
    fn test_exit_without_mark_is_noop() {
        let mut ctx: RenderingContext<&str> = RenderingContext::new();
        Effect::Shading(Shading::from(Color::default())).exit(&mut ctx);
        Effect::SymbolSize(Size::new(4.0, 4.0)).exit(&mut ctx);
        Effect::TextAnnotation(TextAnnotation::new(
            Some("x".to_string()),
            Alignment::TOP,
            Point::default(),
        ))
        .exit(&mut ctx);

        assert!(ctx.shadings().is_empty());
        assert!(ctx.symbol_sizes().is_empty());
        assert!(ctx.current_symbol_size().is_none());
        assert!(ctx.symbol_table().is_empty());
    }

    #[test]
    fn test_symbol_size_sets_scratch_size() {
        let mut ctx = context_on(EntityId::Node("a"));
        Effect::SymbolSize(Size::new(20.0, 10.0)).exit(&mut ctx);

        assert_eq!(ctx.current_symbol_size(), Some(Size::new(20.0, 10.0)));
        assert_eq!(
            ctx.symbol_sizes().get(&EntityId::Node("a")),
            Some(&Size::new(20.0, 10.0))
        );
    }

    #[test]
    fn test_text_annotation_without_text_writes_nothing() {
        let mut ctx = context_on(EntityId::Node("a"));
        let annotation = TextAnnotation::new(None, Alignment::TOP, Point::new(1.0, 1.0));
        Effect::TextAnnotation(annotation).exit(&mut ctx);

        assert!(ctx.placements().is_empty());
        assert!(ctx.resolved_texts().is_empty());
        assert!(ctx.symbol_table().is_empty());
    }

    #[test]
    fn test_link_annotation_never_takes_anchor() {
        let id = EntityId::Link("a", "b");
        let mut ctx = context_on(id.clone());
        Effect::SymbolSize(Size::new(20.0, 10.0)).exit(&mut ctx);
        Effect::TextAnnotation(TextAnnotation::new(
            Some("edge".to_string()),
            Alignment::TOP,
            Point::new(2.0, 3.0),
        ))
        .exit(&mut ctx);

        let placement = ctx.placements().get(&id).unwrap();
        assert_eq!(placement.offset(), Point::new(2.0, 3.0));
        assert_eq!(placement.alignment(), Alignment::TOP);
    }

    #[test]
    fn test_bracket_order() {
        let mut ctx: RenderingContext<&str> = RenderingContext::new();
        let mut visited = false;
        Effect::LinkShape(LinkShape::Arrow).bracket(&mut ctx, |ctx| {
            ctx.visit_mark(&EntityId::Link("a", "b"));
            visited = true;
        });

        assert!(visited);
        assert_eq!(
            ctx.link_shapes().get(&EntityId::Link("a", "b")),
            Some(&LinkShape::Arrow)
        );
    }

    fn label_annotation(alignment: Alignment, offset: Point) -> Effect {
        let label = LabelView::new("Sun", Color::default(), TextDefinition::default());
        Effect::ViewAnnotation(ViewAnnotation::new(
            ViewHandle::new("label", Rc::new(label)),
            alignment,
            offset,
        ))
    }

    #[test]
    fn test_view_annotation_without_mark_is_noop() {
        let mut ctx: RenderingContext<&str> = RenderingContext::new();
        label_annotation(Alignment::BOTTOM, Point::new(0.0, 4.0)).exit(&mut ctx);

        assert!(ctx.resolved_views().is_empty());
        assert!(ctx.placements().is_empty());
    }

    #[test]
    fn test_view_annotation_stored_pending_with_tag() {
        let id = EntityId::Node("a");
        let mut ctx = context_on(id.clone());
        label_annotation(Alignment::BOTTOM, Point::new(0.0, 4.0)).exit(&mut ctx);

        let entry = &ctx.resolved_views()[&id];
        assert!(entry.is_pending());
        assert_eq!(entry.pending().map(ViewHandle::tag), Some("label"));
        // No symbol size yet, so the offset is used as given
        assert_eq!(ctx.placements()[&id].offset(), Point::new(0.0, 4.0));
        assert_eq!(ctx.placements()[&id].alignment(), Alignment::BOTTOM);
        assert!(ctx.resolved_texts().is_empty());
    }

    #[test]
    fn test_view_annotation_takes_node_anchor() {
        let id = EntityId::Node("a");
        let mut ctx = context_on(id.clone());
        Effect::SymbolSize(Size::new(20.0, 10.0)).exit(&mut ctx);
        label_annotation(Alignment::BOTTOM, Point::new(0.0, 4.0)).exit(&mut ctx);

        assert_eq!(ctx.placements()[&id].offset(), Point::new(0.0, 9.0));
    }

    #[test]
    fn test_effect_names() {
        assert_eq!(Effect::LinkShape(LinkShape::Curved).name(), "link_shape");
        assert_eq!(Effect::Stroke(StrokeColor::Clip, None).name(), "stroke");
    }
}
