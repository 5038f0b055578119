use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a graph node.
///
/// Identifiers are compared lexicographically; that ordering is the fixed
/// tie-break whenever a node has more than one unvisited successor.
pub type NodeId = String;

/// Traversal strategy, selecting the frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
}

#[allow(clippy::should_implement_trait)]
impl Strategy {
    /// Returns the string representation of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
        }
    }

    /// Parses a string into a `Strategy`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<Strategy> {
        match s {
            "bfs" | "breadth-first" => Some(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Some(Strategy::DepthFirst),
            _ => None,
        }
    }
}

/// Result of a traversal: the visit order and the level of every visited node.
///
/// `order` lists each reachable node exactly once, in the order it was first
/// discovered and settled. `levels` maps each of those nodes to the depth
/// (edge count from the start node) at which it was first discovered; the
/// start node is always at level 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    pub order: Vec<NodeId>,
    pub levels: BTreeMap<NodeId, u32>,
}

/// Output format for CLI results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}
