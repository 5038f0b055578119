use graphwalk::config::{load_graph, save_graph, GRAPH_FILENAME};
use graphwalk::errors::GraphWalkError;
use graphwalk::graph::Graph;
use tempfile::TempDir;

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(GRAPH_FILENAME);

    let graph = Graph::sample();
    save_graph(&path, &graph).unwrap();
    let loaded = load_graph(&path).unwrap();

    assert_eq!(graph, loaded);
}

#[test]
fn test_load_from_handwritten_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.json");
    std::fs::write(&path, r#"{"X": ["Y"], "Y": []}"#).unwrap();

    let graph = load_graph(&path).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.successors("X"), ["Y".to_string()]);
    assert!(graph.successors("Y").is_empty());
}

#[test]
fn test_load_missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_graph(&path).expect_err("loading a missing file should fail");
    match err {
        GraphWalkError::Config { message } => {
            assert!(
                message.contains("absent.json"),
                "error should name the file, got: {message}"
            );
        }
        other => panic!("expected Config error, got: {other}"),
    }
}

#[test]
fn test_load_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = load_graph(&path).expect_err("loading malformed JSON should fail");
    assert!(matches!(err, GraphWalkError::Config { .. }));
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(GRAPH_FILENAME);

    save_graph(&path, &Graph::sample()).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_sample_graph_shape() {
    let graph = Graph::sample();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.successors("A"), ["B".to_string(), "C".to_string()]);
    assert!(graph.successors("F").is_empty());
}
