//! Visual definitions attached to graph content.
//!
//! Everything in this module is plain data: effects store these values in
//! the rendering context and renderers read them back.

mod alignment;
mod shading;
mod stroke;
mod symbol;
mod text;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use shading::{HierarchicalStyle, Shading};
pub use stroke::{StrokeCap, StrokeColor, StrokeJoin, StrokeOptions, StrokeStyle};
pub use symbol::{LinkShape, SymbolShape};
pub use text::{FontMeasurer, MeasuredText, TextDefinition, TextMeasurer};
