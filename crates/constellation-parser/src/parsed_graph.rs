use indexmap::IndexSet;

/// Result of parsing arrow-syntax text.
///
/// Links keep the order in which they were written. Nodes are the distinct
/// link endpoints in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGraph {
    nodes: IndexSet<String>,
    links: Vec<(String, String)>,
    skipped_lines: Vec<usize>,
}

impl ParsedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a link and both of its endpoints.
    ///
    /// Duplicate links are kept; each written relation is one link.
    pub fn add_link(&mut self, source: &str, target: &str) {
        self.nodes.insert(source.to_string());
        self.nodes.insert(target.to_string());
        self.links.push((source.to_string(), target.to_string()));
    }

    pub(crate) fn skip_line(&mut self, line_number: usize) {
        self.skipped_lines.push(line_number);
    }

    pub fn nodes(&self) -> &IndexSet<String> {
        &self.nodes
    }

    pub fn links(&self) -> &[(String, String)] {
        &self.links
    }

    /// 1-based numbers of non-blank lines that held no relation.
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped_lines
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
