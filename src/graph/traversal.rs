use std::collections::{BTreeMap, HashSet, VecDeque};

use tracing::debug;

use crate::errors::{GraphWalkError, Result};
use crate::graph::Graph;
use crate::types::{NodeId, Strategy, Traversal};

/// Traverses the graph from `start` under the given strategy.
///
/// Returns the visit order (each reachable node exactly once) and the level
/// at which each node was first discovered, with `levels[start] == 0`.
/// Whenever a node has more than one unvisited successor, they are taken in
/// ascending lexicographic order; together with the frontier discipline this
/// makes the result fully deterministic. The graph is read-only and nothing
/// is shared across calls.
///
/// Fails with `NodeNotFound` if `start` is not a key of the graph.
pub fn traverse(graph: &Graph, start: &str, strategy: Strategy) -> Result<Traversal> {
    if !graph.contains(start) {
        return Err(GraphWalkError::NodeNotFound {
            node: start.to_string(),
        });
    }

    let traversal = match strategy {
        Strategy::BreadthFirst => breadth_first(graph, start),
        Strategy::DepthFirst => depth_first(graph, start),
    };

    debug!(
        strategy = strategy.as_str(),
        visited = traversal.order.len(),
        "traversal complete"
    );

    Ok(traversal)
}

/// Breadth-first traversal over a FIFO frontier of `(node, depth)` pairs.
///
/// Nodes are marked visited when enqueued, so each enters the frontier
/// exactly once and the first discovering parent is the tie-break authority.
/// The resulting order is in non-decreasing depth, and each level is the
/// minimum hop count from the start within the explored subgraph.
fn breadth_first(graph: &Graph, start: &str) -> Traversal {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut levels: BTreeMap<NodeId, u32> = BTreeMap::new();

    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    visited.insert(start.to_string());
    queue.push_back((start.to_string(), 0));

    while let Some((node, depth)) = queue.pop_front() {
        levels.insert(node.clone(), depth);

        for successor in sorted_successors(graph, &node) {
            if visited.contains(&successor) {
                continue;
            }
            visited.insert(successor.clone());
            queue.push_back((successor, depth + 1));
        }

        order.push(node);
    }

    Traversal { order, levels }
}

/// A suspended expansion on the depth-first stack: the remaining successors
/// of a settled node and the index of the next one to expand.
struct Frame {
    successors: Vec<NodeId>,
    depth: u32,
    next: usize,
}

/// Depth-first pre-order traversal over an explicit frame stack.
///
/// Each frame tracks how far a node's successor list has been expanded, so
/// one successor's entire subtree completes before its next sibling starts,
/// without native call recursion. The visited set is consulted at visit
/// time, so a node reachable along several paths gets the depth at which the
/// pre-order walk actually reaches it first.
fn depth_first(graph: &Graph, start: &str) -> Traversal {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut levels: BTreeMap<NodeId, u32> = BTreeMap::new();

    visited.insert(start.to_string());
    order.push(start.to_string());
    levels.insert(start.to_string(), 0);

    let mut stack: Vec<Frame> = vec![Frame {
        successors: sorted_successors(graph, start),
        depth: 0,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.successors.len() {
            stack.pop();
            continue;
        }

        let successor = frame.successors[frame.next].clone();
        frame.next += 1;
        let depth = frame.depth + 1;

        if visited.contains(&successor) {
            continue;
        }
        visited.insert(successor.clone());
        order.push(successor.clone());
        levels.insert(successor.clone(), depth);

        stack.push(Frame {
            successors: sorted_successors(graph, &successor),
            depth,
            next: 0,
        });
    }

    Traversal { order, levels }
}

/// Returns `node`'s successors in ascending lexicographic order, the fixed
/// tie-break shared by both strategies.
fn sorted_successors(graph: &Graph, node: &str) -> Vec<NodeId> {
    let mut successors = graph.successors(node).to_vec();
    successors.sort_unstable();
    successors
}
