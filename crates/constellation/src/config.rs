//! Configuration types for Constellation graph rendering.
//!
//! This module provides configuration structures that control how parsed
//! graphs are composed, laid out and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Ring radius and canvas padding.
//! - [`StyleConfig`] - Node, link and label styling.
//!
//! # Example
//!
//! ```
//! # use constellation::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.layout().ring_radius(), 100.0);
//! ```

use serde::Deserialize;

use constellation_core::{
    color::Color,
    draw::{LinkShape, TextDefinition},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Placement settings for the reference renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of the ring nodes are placed on.
    ring_radius: f32,

    /// Empty space kept around the drawing.
    padding: f32,
}

impl LayoutConfig {
    pub fn new(ring_radius: f32, padding: f32) -> Self {
        Self {
            ring_radius,
            padding,
        }
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ring_radius: 100.0,
            padding: 40.0,
        }
    }
}

/// Visual styling configuration for composed graphs.
///
/// Colors and shapes are kept as strings and validated by their accessors,
/// so a bad value is reported when it is used rather than when the file is
/// read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] of the canvas, as a color string.
    background_color: Option<String>,
    node_radius: f32,
    node_color: String,
    link_color: String,
    link_width: f32,
    link_shape: String,
    font_family: String,
    font_size: u16,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    /// Returns the parsed node fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn node_color(&self) -> Result<Color, String> {
        Color::new(&self.node_color).map_err(|err| format!("Invalid node color in config: {err}"))
    }

    /// Returns the parsed link stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn link_color(&self) -> Result<Color, String> {
        Color::new(&self.link_color).map_err(|err| format!("Invalid link color in config: {err}"))
    }

    pub fn link_width(&self) -> f32 {
        self.link_width
    }

    /// Returns the parsed [`LinkShape`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured shape is not one of the known shapes.
    pub fn link_shape(&self) -> Result<LinkShape, String> {
        self.link_shape
            .parse()
            .map_err(|err| format!("Invalid link shape in config: {err}"))
    }

    /// Text style for labels and annotations.
    pub fn text_definition(&self) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(self.font_size);
        definition
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            node_radius: 16.0,
            node_color: "steelblue".to_string(),
            link_color: "black".to_string(),
            link_width: 2.0,
            link_shape: "arrow".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}
