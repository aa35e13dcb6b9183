//! Text styling and measurement for annotations.
//!
//! Annotation text is stored in the rendering context as raw content and
//! only measured when a consumer needs its size. This module provides the
//! pieces for that deferred step:
//!
//! - [`TextDefinition`] - Font family, size, color and padding
//! - [`TextMeasurer`] - Anything that can turn a string into a [`Size`]
//! - [`FontMeasurer`] - A [`TextMeasurer`] backed by real font shaping
//! - [`MeasuredText`] - The resolved artifact: content plus its size
//!
//! # Examples
//!
//! ```
//! # use constellation_core::draw::{FontMeasurer, TextDefinition, TextMeasurer};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//!
//! let measurer = FontMeasurer::new(style);
//! let size = measurer.measure("");
//! assert!(size.is_zero());
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::{
    color::Color,
    geometry::{Insets, Size},
};

/// Visual style for annotation text.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Text color | `None` (renderer default) |
/// | Padding | Zero on all sides |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g., "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` leaves the color to the renderer.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the padding added around measured text.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: None,
            padding: Insets::default(),
        }
    }
}

/// Measures text content.
///
/// Implementations must be deterministic: the same content always yields
/// the same size, which is what makes measured text safe to memoize.
pub trait TextMeasurer {
    /// Returns the size of `text` when drawn, including any padding.
    fn measure(&self, text: &str) -> Size;
}

/// Text content together with its measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredText {
    content: String,
    size: Size,
}

impl MeasuredText {
    pub fn new(content: impl Into<String>, size: Size) -> Self {
        Self {
            content: content.into(),
            size,
        }
    }

    /// Measures `content` with `measurer`.
    pub fn measure(content: &str, measurer: &dyn TextMeasurer) -> Self {
        Self::new(content, measurer.measure(content))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// [`TextMeasurer`] that shapes text with the system fonts.
#[derive(Debug, Clone, Default)]
pub struct FontMeasurer {
    definition: TextDefinition,
}

impl FontMeasurer {
    pub fn new(definition: TextDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str) -> Size {
        let padding = self.definition.padding();
        if text.is_empty() {
            return Size::default().add_padding(padding);
        }
        let metrics = PixelMetrics::from(&self.definition);
        let block = TEXT_MANAGER
            .get_or_init(TextManager::new)
            .shape(text, &self.definition, metrics)
            .unwrap_or_else(|| TextBlock::estimate(text, metrics));
        block.size(metrics).add_padding(padding)
    }
}

/// Font size and line height in pixels for a [`TextDefinition`].
#[derive(Debug, Clone, Copy)]
struct PixelMetrics {
    font_size: f32,
    line_height: f32,
}

impl From<&TextDefinition> for PixelMetrics {
    fn from(definition: &TextDefinition) -> Self {
        // Points to pixels at 96 DPI
        let font_size = f32::from(definition.font_size()) * 1.33;
        Self {
            font_size,
            line_height: font_size * 1.15,
        }
    }
}

/// Widest line and line count of a laid out text.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TextBlock {
    width: f32,
    lines: usize,
}

impl TextBlock {
    /// Average glyph advance relative to the font size.
    const GLYPH_ADVANCE: f32 = 0.55;

    /// Character-count estimate, used when no font can shape the text.
    fn estimate(text: &str, metrics: PixelMetrics) -> Self {
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        Self {
            width: widest as f32 * metrics.font_size * Self::GLYPH_ADVANCE,
            lines: text.lines().count().max(1),
        }
    }

    fn size(self, metrics: PixelMetrics) -> Size {
        Size::new(self.width, self.lines as f32 * metrics.line_height)
    }
}

/// Owns the shared `FontSystem`, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Lays `text` out with real font shaping.
    ///
    /// Returns `None` when shaping yields no layout runs, which happens
    /// when no usable font is installed.
    fn shape(
        &self,
        text: &str,
        definition: &TextDefinition,
        metrics: PixelMetrics,
    ) -> Option<TextBlock> {
        let mut font_system = self.font_system.lock().unwrap_or_else(PoisonError::into_inner);

        let mut buffer = Buffer::new(
            &mut font_system,
            Metrics::new(metrics.font_size, metrics.line_height),
        );
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(definition.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut block = TextBlock {
            width: 0.0,
            lines: 0,
        };
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                block.width = block.width.max(last.x + last.w);
            }
            block.lines += 1;
        }

        (block.lines > 0).then_some(block)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
