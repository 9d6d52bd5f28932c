//! Node sourcing: JSON files or seeded random clouds, with stable names.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use railmap::api::{random_unit_points, Point, ReplayToken};

/// A map location: display name plus position.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedNode {
    pub name: String,
    pub position: Point,
}

/// One entry of a nodes file. `name` is optional; missing names fall back
/// to `node-<index>` in file order.
#[derive(Debug, Deserialize)]
struct NodeRecord {
    name: Option<String>,
    x: f64,
    y: f64,
}

/// Load nodes from a JSON array of `{"name"?, "x", "y"}` records.
pub fn load_nodes(path: &Path) -> Result<Vec<NamedNode>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading nodes file {}", path.display()))?;
    let records: Vec<NodeRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing nodes file {}", path.display()))?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, r)| NamedNode {
            name: r.name.unwrap_or_else(|| format!("node-{i}")),
            position: Point::new(r.x, r.y),
        })
        .collect())
}

/// `count` seeded unit-box nodes named `node-<index>`.
pub fn random_nodes(count: usize, token: ReplayToken) -> Vec<NamedNode> {
    random_unit_points(count, token)
        .into_iter()
        .enumerate()
        .map(|(i, position)| NamedNode {
            name: format!("node-{i}"),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_records_with_name_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes.json");
        fs::write(
            &path,
            r#"[
                {"name": "Avon", "x": 0.25, "y": 0.75},
                {"x": 0.5, "y": 0.5},
                {"name": "Brightwater", "x": 1.0, "y": 0.0}
            ]"#,
        )
        .unwrap();
        let nodes = load_nodes(&path).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].name, "Avon");
        assert_eq!(nodes[1].name, "node-1");
        assert_eq!(nodes[2].name, "Brightwater");
        assert_eq!(nodes[1].position, Point::new(0.5, 0.5));
    }

    #[test]
    fn rejects_malformed_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes.json");
        fs::write(&path, r#"{"nodes": "not an array"}"#).unwrap();
        assert!(load_nodes(&path).is_err());
        assert!(load_nodes(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn random_nodes_replay_with_indexed_names() {
        let tok = ReplayToken::new(3, 0);
        let a = random_nodes(8, tok);
        let b = random_nodes(8, tok);
        assert_eq!(a, b);
        assert_eq!(a[0].name, "node-0");
        assert_eq!(a[7].name, "node-7");
    }
}
