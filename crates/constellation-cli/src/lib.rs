//! CLI logic for the Constellation graph tool.
//!
//! This module contains the core CLI logic: load the configuration, read the
//! relation file, render it and write the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use constellation::{ConstellationError, GraphBuilder};

/// Run the Constellation CLI application
///
/// This function processes the input file through the Constellation
/// pipeline and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ConstellationError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid style values
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ConstellationError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = GraphBuilder::new(app_config);
    let graph = builder.parse(&source);
    if graph.is_empty() {
        warn!(input_path = args.input; "No relations found, rendering an empty graph");
    } else if !graph.skipped_lines().is_empty() {
        info!(
            skipped = graph.skipped_lines().len();
            "Some lines held no relation and were skipped"
        );
    }

    let content = builder.compose(&graph)?;
    let svg = builder.render_svg(&content)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
