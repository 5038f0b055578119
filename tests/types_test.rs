use graphwalk::types::{Strategy, Traversal};
use std::collections::BTreeMap;

#[test]
fn test_strategy_string_forms() {
    assert_eq!(Strategy::BreadthFirst.as_str(), "bfs");
    assert_eq!(Strategy::DepthFirst.as_str(), "dfs");

    assert_eq!(Strategy::from_str("bfs"), Some(Strategy::BreadthFirst));
    assert_eq!(
        Strategy::from_str("breadth-first"),
        Some(Strategy::BreadthFirst)
    );
    assert_eq!(Strategy::from_str("dfs"), Some(Strategy::DepthFirst));
    assert_eq!(Strategy::from_str("depth-first"), Some(Strategy::DepthFirst));
    assert_eq!(Strategy::from_str("dijkstra"), None);
}

#[test]
fn test_traversal_serde_roundtrip() {
    let traversal = Traversal {
        order: vec!["A".to_string(), "B".to_string()],
        levels: BTreeMap::from([("A".to_string(), 0), ("B".to_string(), 1)]),
    };

    let json = serde_json::to_string(&traversal).unwrap();
    let parsed: Traversal = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, traversal);
}
