/// Graph traversal algorithms.
pub mod traversal;

pub use traversal::traverse;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::NodeId;

/// A finite directed graph as an adjacency mapping.
///
/// Each node identifier maps to the list of its out-edge successors. The
/// graph may contain cycles and self-loops. A successor identifier that is
/// not itself a key is treated as a node with no outgoing edges; traversal
/// visits it like any other node and never fails on it.
///
/// Serializes as a bare JSON object, e.g. `{"A": ["B", "C"], "B": []}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `node` is a key of the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the successors of `node`, in the order the definition lists
    /// them. Identifiers without an adjacency entry have no successors.
    pub fn successors(&self, node: &str) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over the node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns the built-in six-node demo graph written by `init`.
    pub fn sample() -> Self {
        [
            ("A", vec!["B", "C"]),
            ("B", vec!["D", "E"]),
            ("C", vec!["F"]),
            ("D", vec![]),
            ("E", vec!["F"]),
            ("F", vec![]),
        ]
        .into_iter()
        .map(|(node, successors)| {
            (
                node.to_string(),
                successors.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
    }
}

impl FromIterator<(NodeId, Vec<NodeId>)> for Graph {
    fn from_iter<I: IntoIterator<Item = (NodeId, Vec<NodeId>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
