//! Command-line argument definitions for the Constellation CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Constellation graph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input relation file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["constellation", "graph.txt"]);
        assert_eq!(args.input, "graph.txt");
        assert_eq!(args.output, "out.svg");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "constellation",
            "graph.txt",
            "-o",
            "graph.svg",
            "-c",
            "style.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output, "graph.svg");
        assert_eq!(args.config.as_deref(), Some("style.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
