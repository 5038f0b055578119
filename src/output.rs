use crate::types::Traversal;

/// Formats a traversal as plain text: the visit order as a directional path,
/// followed by the level of every visited node in ascending node order.
pub fn format_traversal_as_text(traversal: &Traversal) -> String {
    let mut out = String::new();

    out.push_str(&format!("order: {}\n", traversal.order.join(" -> ")));

    out.push_str("levels:\n");
    for (node, level) in &traversal.levels {
        out.push_str(&format!("  {}: {}\n", node, level));
    }

    out
}

/// Formats a traversal as pretty-printed JSON.
pub fn format_traversal_as_json(traversal: &Traversal) -> String {
    serde_json::to_string_pretty(traversal).unwrap_or_default()
}
