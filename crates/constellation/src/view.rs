//! Arbitrary annotation views attached to entities.
//!
//! A view is anything that can report its size and draw itself. Views are
//! stored in the rendering context as opaque [`ViewHandle`]s and only
//! measured by the consumer, just like annotation text.

use std::{fmt, rc::Rc};

use svg::node::{Text as SvgText, element as svg_element};

use constellation_core::{
    color::Color,
    draw::{TextDefinition, TextMeasurer},
    geometry::{Insets, Point, Size},
};

/// Capability required of annotation views.
pub trait AnnotationView: fmt::Debug {
    /// Size of the view when drawn, using `measurer` for any text it holds.
    fn measure(&self, measurer: &dyn TextMeasurer) -> Size;

    /// Draws the view into the box at `top_left` with the measured `size`.
    fn render_svg(&self, top_left: Point, size: Size) -> svg_element::Group;
}

/// Tagged, shared reference to an [`AnnotationView`].
///
/// Handles compare equal when they carry the same tag and point at the same
/// view instance.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    tag: String,
    view: Rc<dyn AnnotationView>,
}

impl ViewHandle {
    pub fn new(tag: impl Into<String>, view: Rc<dyn AnnotationView>) -> Self {
        Self {
            tag: tag.into(),
            view,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn view(&self) -> &dyn AnnotationView {
        self.view.as_ref()
    }

    /// Measures the view, producing its resolved form.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> MeasuredView {
        MeasuredView {
            handle: self.clone(),
            size: self.view.measure(measurer),
        }
    }
}

impl PartialEq for ViewHandle {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && Rc::ptr_eq(&self.view, &other.view)
    }
}

/// A view together with its measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredView {
    handle: ViewHandle,
    size: Size,
}

impl MeasuredView {
    pub fn handle(&self) -> &ViewHandle {
        &self.handle
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn render_svg(&self, top_left: Point) -> svg_element::Group {
        self.handle.view().render_svg(top_left, self.size)
    }
}

/// Rounded label with an accent-colored outline, used for rich node labels.
#[derive(Debug, Clone)]
pub struct LabelView {
    text: String,
    accent: Color,
    definition: TextDefinition,
}

impl LabelView {
    const PADDING: Insets = Insets::new(3.0, 8.0, 3.0, 8.0);

    pub fn new(text: impl Into<String>, accent: Color, definition: TextDefinition) -> Self {
        Self {
            text: text.into(),
            accent,
            definition,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn accent(&self) -> Color {
        self.accent
    }
}

impl AnnotationView for LabelView {
    fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        measurer.measure(&self.text).add_padding(Self::PADDING)
    }

    fn render_svg(&self, top_left: Point, size: Size) -> svg_element::Group {
        let background = svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", size.height() / 2.0)
            .set("fill", self.accent.to_string())
            .set("fill-opacity", self.accent.alpha() * 0.15)
            .set("stroke", self.accent.to_string())
            .set("stroke-width", 1.0);

        let center = Point::new(
            top_left.x() + size.width() / 2.0,
            top_left.y() + size.height() / 2.0,
        );

        svg_element::Group::new()
            .set("class", "label")
            .add(background)
            .add(text_element(&self.text, center, &self.definition))
    }
}

/// Single-line SVG text centered on `center`.
pub(crate) fn text_element(
    content: &str,
    center: Point,
    definition: &TextDefinition,
) -> svg_element::Text {
    let mut text = svg_element::Text::new("")
        .set("x", center.x())
        .set("y", center.y())
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("font-family", definition.font_family())
        .set("font-size", definition.font_size());

    if let Some(color) = definition.color() {
        text = text
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
    }

    text.add(SvgText::new(content))
}
