//! Line-level relation matching.
//!
//! A relation is `word ws+ ARROW ws+ word`, found anywhere in a line. The
//! first match (leftmost) wins and the rest of the line is ignored. Words are
//! runs of Unicode alphanumerics and underscores. Every arrow denotes the
//! same thing: the pair is returned exactly as written, left then right,
//! whichever way the arrow points.

use log::{debug, info};
use winnow::{
    Parser as _,
    combinator::{alt, delimited},
    error::{ContextError, ErrMode},
    token::take_while,
};

use crate::parsed_graph::ParsedGraph;

/// Arrow tokens accepted between two words, longest first.
pub const ARROWS: [&str; 7] = ["-->", "<--", "—>", "<—", "->", "<-", "→"];

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn whitespace1<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

fn arrow<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt(("-->", "<--", "—>", "<—", "->", "<-", "→")).parse_next(input)
}

/// Parse one relation at the start of `input`.
fn relation<'src>(input: &mut Input<'src>) -> IResult<(&'src str, &'src str)> {
    (word, delimited(whitespace1, arrow, whitespace1), word)
        .map(|(source, _, target)| (source, target))
        .parse_next(input)
}

/// Find the first relation in `line`.
///
/// Matching is only attempted where a word begins. A match starting inside
/// a word would also match from that word's start, so this finds the same
/// leftmost relation an unanchored search would.
///
/// # Examples
///
/// ```
/// use constellation_parser::find_relation;
///
/// assert_eq!(find_relation("  edge: Alice -> Bob, Cindy"), Some(("Alice", "Bob")));
/// assert_eq!(find_relation("Alice->Bob"), None);
/// ```
pub fn find_relation(line: &str) -> Option<(&str, &str)> {
    let mut previous_is_word = false;
    for (offset, c) in line.char_indices() {
        let is_word = is_word_char(c);
        if is_word && !previous_is_word {
            let mut input = &line[offset..];
            if let Ok(pair) = relation(&mut input) {
                return Some(pair);
            }
        }
        previous_is_word = is_word;
    }
    None
}

/// Parse arrow-syntax text into nodes and links.
///
/// Never fails: non-blank lines without a relation are recorded in
/// [`ParsedGraph::skipped_lines`] and logged at debug level.
pub fn parse_relations(source: &str) -> ParsedGraph {
    info!(bytes = source.len(); "Parsing relations");

    let mut graph = ParsedGraph::new();
    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        match find_relation(line) {
            Some((source, target)) => graph.add_link(source, target),
            None if line.trim().is_empty() => {}
            None => {
                debug!(line_number = line_number, line = line; "Skipping line without relation");
                graph.skip_line(line_number);
            }
        }
    }

    debug!(
        nodes = graph.nodes().len(),
        links = graph.links().len(),
        skipped = graph.skipped_lines().len();
        "Relations parsed"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_relation_all_arrows() {
        for arrow in ARROWS {
            let line = format!("a {arrow} b");
            assert_eq!(find_relation(&line), Some(("a", "b")), "arrow `{arrow}`");
        }
    }

    #[test]
    fn test_find_relation_keeps_written_order_for_left_arrows() {
        assert_eq!(find_relation("Bob <- Alice"), Some(("Bob", "Alice")));
        assert_eq!(find_relation("Bob <-- Alice"), Some(("Bob", "Alice")));
    }

    #[test]
    fn test_find_relation_requires_whitespace_around_arrow() {
        assert_eq!(find_relation("a->b"), None);
        assert_eq!(find_relation("a ->b"), None);
        assert_eq!(find_relation("a-> b"), None);
    }

    #[test]
    fn test_find_relation_accepts_multiple_spaces_and_tabs() {
        assert_eq!(find_relation("a \t  -->\t b"), Some(("a", "b")));
    }

    #[test]
    fn test_find_relation_first_match_wins() {
        assert_eq!(find_relation("a -> b -> c"), Some(("a", "b")));
        assert_eq!(find_relation("x - y a -> b"), Some(("a", "b")));
    }

    #[test]
    fn test_find_relation_takes_whole_words() {
        assert_eq!(
            find_relation("node_1 --> node_22 trailing"),
            Some(("node_1", "node_22"))
        );
        assert_eq!(find_relation("(left -> right)"), Some(("left", "right")));
    }

    #[test]
    fn test_find_relation_unicode_words() {
        assert_eq!(find_relation("Zoë → Ödön"), Some(("Zoë", "Ödön")));
        assert_eq!(find_relation("東京 -> 大阪"), Some(("東京", "大阪")));
    }

    #[test]
    fn test_find_relation_rejects_unknown_arrows() {
        assert_eq!(find_relation("a => b"), None);
        assert_eq!(find_relation("a --- b"), None);
        assert_eq!(find_relation("a - b"), None);
    }

    #[test]
    fn test_parse_relations_records_skipped_lines() {
        let graph = parse_relations("graph TD\n\na -> b\n  \nnoise here\n");
        assert_eq!(graph.links().len(), 1);
        assert_eq!(graph.skipped_lines(), [1, 5]);
    }

    #[test]
    fn test_parse_relations_empty_input() {
        let graph = parse_relations("");
        assert!(graph.is_empty());
        assert!(graph.skipped_lines().is_empty());
    }
}
