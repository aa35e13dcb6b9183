//! Identity of the things a graph is made of.

use std::{fmt, hash::Hash};

/// Bounds required of the key type that names nodes.
///
/// Blanket-implemented for every type that satisfies them, so callers can
/// use `Id`, `String`, integers, or their own key types directly.
pub trait EntityKey: Clone + Eq + Hash + fmt::Debug {}

impl<K> EntityKey for K where K: Clone + Eq + Hash + fmt::Debug {}

/// A node, or a directed link between two nodes.
///
/// Link identity is the ordered pair: `Link(a, b)` and `Link(b, a)` are
/// different entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId<K> {
    Node(K),
    Link(K, K),
}

impl<K> EntityId<K> {
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_, _))
    }

    /// Returns the node key, or `None` for links.
    pub fn as_node(&self) -> Option<&K> {
        match self {
            Self::Node(key) => Some(key),
            Self::Link(_, _) => None,
        }
    }

    /// Returns `(source, target)` for links, or `None` for nodes.
    pub fn endpoints(&self) -> Option<(&K, &K)> {
        match self {
            Self::Node(_) => None,
            Self::Link(source, target) => Some((source, target)),
        }
    }
}

impl<K: fmt::Display> fmt::Display for EntityId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(key) => write!(f, "{key}"),
            Self::Link(source, target) => write!(f, "{source} -> {target}"),
        }
    }
}
