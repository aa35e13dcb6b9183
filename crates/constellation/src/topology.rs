//! Flattened graph structure collected during traversal.
//!
//! Only marks contribute to the topology. Effects, groups and conditionals
//! shape which marks are visited but never add structure of their own.

use std::collections::HashMap;

use indexmap::IndexSet;
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::entity::{EntityId, EntityKey};

/// Node set and directed link pairs of one traversal, in visit order.
///
/// Nodes are a set; links are a list with one entry per visited link mark,
/// so a relation written twice yields two parallel links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology<K: EntityKey> {
    nodes: IndexSet<K>,
    links: Vec<(K, K)>,
}

impl<K: EntityKey> Default for Topology<K> {
    fn default() -> Self {
        Self {
            nodes: IndexSet::new(),
            links: Vec::new(),
        }
    }
}

impl<K: EntityKey> Topology<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visited entity.
    ///
    /// A repeated node keeps its first position; every link visit is appended.
    pub(crate) fn record(&mut self, id: &EntityId<K>) {
        match id {
            EntityId::Node(key) => {
                self.nodes.insert(key.clone());
            }
            EntityId::Link(source, target) => {
                self.links.push((source.clone(), target.clone()));
            }
        }
    }

    /// Nodes declared by node marks.
    pub fn nodes(&self) -> &IndexSet<K> {
        &self.nodes
    }

    /// Directed `(source, target)` pairs declared by link marks.
    pub fn links(&self) -> &[(K, K)] {
        &self.links
    }

    /// Declared nodes followed by any link endpoints that were never
    /// declared as nodes.
    pub fn all_nodes(&self) -> IndexSet<K> {
        let mut nodes = self.nodes.clone();
        for (source, target) in &self.links {
            nodes.insert(source.clone());
            nodes.insert(target.clone());
        }
        nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Builds a directed graph for layout collaborators.
    ///
    /// Node weights are the keys; node indices follow [`Self::all_nodes`]
    /// order. Each recorded link becomes one edge, so repeated links are
    /// parallel edges in link order.
    pub fn to_graph(&self) -> DiGraph<K, ()> {
        let mut graph = DiGraph::new();
        let mut node_indices: HashMap<K, NodeIndex> = HashMap::new();

        for key in self.all_nodes() {
            let index = graph.add_node(key.clone());
            node_indices.insert(key, index);
        }

        for (source, target) in &self.links {
            if let (Some(&source_idx), Some(&target_idx)) =
                (node_indices.get(source), node_indices.get(target))
            {
                graph.add_edge(source_idx, target_idx, ());
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Topology converted to graph"
        );
        graph
    }
}
