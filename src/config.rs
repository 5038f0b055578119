use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{GraphWalkError, Result};
use crate::graph::Graph;

/// Default name of the graph-definition file.
pub const GRAPH_FILENAME: &str = "graph.json";

/// Loads a graph definition from a JSON file.
///
/// The file holds a single JSON object mapping each node identifier to the
/// array of its successor identifiers.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path).map_err(|e| GraphWalkError::Config {
        message: format!("failed to read graph file '{}': {}", path.display(), e),
    })?;

    let graph: Graph = serde_json::from_str(&contents).map_err(|e| GraphWalkError::Config {
        message: format!("failed to parse graph file '{}': {}", path.display(), e),
    })?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph definition"
    );

    Ok(graph)
}

/// Saves a graph definition to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final
/// location, ensuring that a partial write never corrupts the definition.
pub fn save_graph(path: &Path, graph: &Graph) -> Result<()> {
    let tmp_path = path.with_extension("tmp");

    let json = serde_json::to_string_pretty(graph).map_err(|e| GraphWalkError::Config {
        message: format!("failed to serialize graph: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| GraphWalkError::Config {
        message: format!(
            "failed to write temporary graph file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| GraphWalkError::Config {
        message: format!(
            "failed to rename temporary graph file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}
