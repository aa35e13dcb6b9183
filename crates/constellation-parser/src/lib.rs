//! Arrow-syntax parser for Constellation graphs.
//!
//! Source text holds one relation per line, written as two words joined by
//! an arrow:
//!
//! ```text
//! Alice -> Bob
//! Bob --> Cindy
//! Cindy → Alice
//! ```
//!
//! Lines without a relation are skipped rather than rejected, so loosely
//! formatted text (headers, comments, prose) can be fed in directly.
//!
//! # Examples
//!
//! ```
//! let graph = constellation_parser::parse_relations("Alice -> Bob\nnot a relation");
//!
//! assert_eq!(graph.links(), [("Alice".to_string(), "Bob".to_string())]);
//! assert_eq!(graph.skipped_lines(), [2]);
//! ```

mod parsed_graph;
mod relation;

pub use parsed_graph::ParsedGraph;
pub use relation::{ARROWS, find_relation, parse_relations};
