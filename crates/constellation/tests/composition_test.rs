//! Integration tests for content composition and effect resolution.

use std::{cell::Cell, rc::Rc};

use constellation::{
    Content, EntityId, LabelView, PendingValue, RenderingContext, ViewHandle,
    color::Color,
    draw::{
        Alignment, HierarchicalStyle, LinkShape, Shading, SymbolShape, TextDefinition,
        TextMeasurer,
    },
    geometry::{Point, Size},
};

fn node_id(key: &'static str) -> EntityId<&'static str> {
    EntityId::Node(key)
}

fn sample_tree(show_moon: bool) -> Content<&'static str> {
    Content::group([
        Content::node("sun")
            .symbol(SymbolShape::Circle)
            .symbol_size(Size::new(20.0, 10.0))
            .shading(Shading::Hierarchical(HierarchicalStyle::Primary))
            .annotation("Sun", Alignment::TOP),
        Content::node("earth")
            .symbol(SymbolShape::Square)
            .annotation_with(Some("Earth".into()), Alignment::TRAILING, Point::new(2.0, 2.0)),
        Content::either(
            show_moon,
            Content::node("moon").symbol(SymbolShape::Diamond),
            Content::node("asteroid").symbol(SymbolShape::Cross),
        ),
        Content::link("earth", "sun").link_shape(LinkShape::Arrow),
    ])
}

#[test]
fn test_determinism_across_fresh_contexts() {
    let tree = sample_tree(true);
    let first = RenderingContext::from_content(&tree);
    let second = RenderingContext::from_content(&tree);

    let ordered = |ctx: &RenderingContext<&'static str>| {
        (
            format!("{:?}", ctx.shadings().iter().collect::<Vec<_>>()),
            format!("{:?}", ctx.symbols().iter().collect::<Vec<_>>()),
            format!("{:?}", ctx.symbol_sizes().iter().collect::<Vec<_>>()),
            format!("{:?}", ctx.placements().iter().collect::<Vec<_>>()),
            format!("{:?}", ctx.resolved_texts().iter().collect::<Vec<_>>()),
            format!("{:?}", ctx.link_shapes().iter().collect::<Vec<_>>()),
        )
    };

    assert_eq!(ordered(&first), ordered(&second));
    assert_eq!(first.topology(), second.topology());
}

#[test]
fn test_conditional_exclusivity() {
    for show_moon in [true, false] {
        let ctx = RenderingContext::from_content(&sample_tree(show_moon));
        let has_moon = ctx.topology().nodes().contains(&"moon");
        let has_asteroid = ctx.topology().nodes().contains(&"asteroid");

        assert_eq!(has_moon, show_moon);
        assert_eq!(has_asteroid, !show_moon);
        assert_eq!(ctx.symbols().contains_key(&node_id("moon")), show_moon);
        assert_eq!(ctx.symbols().contains_key(&node_id("asteroid")), !show_moon);
    }
}

#[test]
fn test_order_sensitivity_of_symbol_size_and_annotation() {
    let user = Point::new(3.0, 4.0);

    let size_inside = Content::node("a")
        .symbol_size(Size::new(20.0, 10.0))
        .annotation_with(Some("x".into()), Alignment::TOP, user);
    let ctx = RenderingContext::from_content(&size_inside);
    assert_eq!(
        ctx.placements()[&node_id("a")].offset(),
        user.add_point(Point::new(0.0, -5.0))
    );

    let size_outside = Content::node("a")
        .annotation_with(Some("x".into()), Alignment::TOP, user)
        .symbol_size(Size::new(20.0, 10.0));
    let ctx = RenderingContext::from_content(&size_outside);
    assert_eq!(ctx.placements()[&node_id("a")].offset(), user);
    // The size itself is still recorded
    assert_eq!(ctx.symbol_sizes()[&node_id("a")], Size::new(20.0, 10.0));
}

#[test]
fn test_alignment_anchor_table() {
    let cases = [
        (Alignment::TOP, Point::new(0.0, -5.0)),
        (Alignment::BOTTOM, Point::new(0.0, 5.0)),
        (Alignment::LEADING, Point::new(10.0, 0.0)),
        (Alignment::TRAILING, Point::new(-10.0, 0.0)),
        (Alignment::TOP_LEADING, Point::new(0.0, 0.0)),
        (Alignment::BOTTOM_TRAILING, Point::new(0.0, 0.0)),
        (Alignment::CENTER, Point::new(0.0, 0.0)),
    ];

    for (alignment, expected) in cases {
        let content = Content::node("a")
            .symbol_size(Size::new(20.0, 10.0))
            .annotation("x", alignment);
        let ctx = RenderingContext::from_content(&content);
        let placement = ctx.placements()[&node_id("a")];

        assert_eq!(placement.offset(), expected, "alignment {alignment}");
        assert_eq!(placement.alignment(), alignment);
    }
}

#[test]
fn test_last_write_wins_for_repeated_marks() {
    let red = Color::new("red").unwrap();
    let blue = Color::new("blue").unwrap();
    let content = Content::group([
        Content::node("a").foreground_color(red).annotation("first", Alignment::TOP),
        Content::node("a").foreground_color(blue).annotation("second", Alignment::BOTTOM),
    ]);
    let ctx = RenderingContext::from_content(&content);

    assert_eq!(ctx.shadings()[&node_id("a")], Shading::Color(blue));
    assert_eq!(ctx.resolved_texts()[&node_id("a")], "second");
    assert_eq!(ctx.placements()[&node_id("a")].alignment(), Alignment::BOTTOM);
    assert_eq!(ctx.topology().nodes().len(), 1);
    // Both texts were registered for measurement
    assert_eq!(ctx.symbol_table().len(), 2);
}

#[test]
fn test_effects_on_groups_are_noops() {
    let content = Content::group([Content::node("a"), Content::link("a", "b")])
        .symbol(SymbolShape::Triangle)
        .link_shape(LinkShape::Curved)
        .annotation("all", Alignment::CENTER);
    let ctx = RenderingContext::from_content(&content);

    assert!(ctx.symbols().is_empty());
    assert!(ctx.link_shapes().is_empty());
    assert!(ctx.placements().is_empty());
    assert_eq!(ctx.topology().nodes().len(), 1);
    assert_eq!(ctx.topology().links().len(), 1);
}

fn label(text: &str) -> Rc<LabelView> {
    Rc::new(LabelView::new(text, Color::default(), TextDefinition::default()))
}

#[test]
fn test_view_annotation_on_group_is_noop() {
    let content = Content::group([Content::node("a"), Content::node("b")]).view_annotation(
        "label",
        label("all"),
        Alignment::BOTTOM,
        Point::new(0.0, 4.0),
    );
    let ctx = RenderingContext::from_content(&content);

    assert!(ctx.resolved_views().is_empty());
    assert!(ctx.placements().is_empty());
    assert_eq!(ctx.topology().nodes().len(), 2);
}

#[test]
fn test_view_annotation_entries_stay_pending() {
    let content =
        Content::node("a").view_annotation("badge", label("A"), Alignment::TOP, Point::default());
    let ctx = RenderingContext::from_content(&content);

    let entry = &ctx.resolved_views()[&node_id("a")];
    assert!(entry.is_pending());
    assert_eq!(entry.pending().map(ViewHandle::tag), Some("badge"));
}

#[test]
fn test_order_sensitivity_of_symbol_size_and_view_annotation() {
    let user = Point::new(0.0, 4.0);

    let size_inside = Content::node("a")
        .symbol_size(Size::new(20.0, 10.0))
        .view_annotation("label", label("a"), Alignment::BOTTOM, user);
    let ctx = RenderingContext::from_content(&size_inside);
    assert_eq!(ctx.placements()[&node_id("a")].offset(), Point::new(0.0, 9.0));

    let size_outside = Content::node("a")
        .view_annotation("label", label("a"), Alignment::BOTTOM, user)
        .symbol_size(Size::new(20.0, 10.0));
    let ctx = RenderingContext::from_content(&size_outside);
    assert_eq!(ctx.placements()[&node_id("a")].offset(), user);
}

struct CountingMeasurer {
    calls: Cell<usize>,
}

impl TextMeasurer for CountingMeasurer {
    fn measure(&self, text: &str) -> Size {
        self.calls.set(self.calls.get() + 1);
        Size::new(text.len() as f32, 1.0)
    }
}

#[test]
fn test_pending_texts_measured_once_per_content() {
    let content = Content::group([
        Content::node("a").annotation("shared", Alignment::TOP),
        Content::node("b").annotation("shared", Alignment::TOP),
        Content::node("c").annotation("unique", Alignment::TOP),
    ]);
    let ctx = RenderingContext::from_content(&content);
    let measurer = CountingMeasurer { calls: Cell::new(0) };

    let mut table = ctx.symbol_table().clone();
    assert_eq!(table.resolve_all(&measurer), 2);
    assert_eq!(table.resolve_all(&measurer), 0);
    assert_eq!(measurer.calls.get(), 2);

    assert_eq!(table.measured("shared").map(|m| m.size()), Some(Size::new(6.0, 1.0)));
    // The context's own table stays pending
    assert!(ctx.symbol_table().get("shared").is_some_and(PendingValue::is_pending));
}

#[test]
fn test_topology_to_petgraph() {
    let content = Content::group([
        Content::node("a"),
        Content::link("a", "b"),
        Content::link("b", "c"),
        Content::link("a", "b"),
    ]);
    let ctx = RenderingContext::from_content(&content);
    let graph = ctx.topology().to_graph();

    assert_eq!(graph.node_count(), 3);
    // The repeated a -> b relation stays a parallel edge
    assert_eq!(graph.edge_count(), 3);
    let weights: Vec<&str> = graph.node_weights().copied().collect();
    assert_eq!(weights, ["a", "b", "c"]);
}
