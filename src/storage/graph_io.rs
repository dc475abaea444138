use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use super::{KeyValueStore, keys, load_json, save_json};
use crate::error::GraphFileError;
use crate::graph::{Edge, Node};

/// A parsed import. Nodes are kept as raw JSON since the built-in catalogue is
/// read-only; only the edges are meant to be adopted.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphDocument {
	/// Kept as raw JSON, never adopted.
	pub nodes: Vec<Value>,
	/// Decoded edges.
	pub edges: Vec<Edge>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
	nodes: &'a [Node],
	edges: &'a [Edge],
}

fn decode_edges(items: Vec<Value>) -> Result<Vec<Edge>, GraphFileError> {
	items
		.into_iter()
		.enumerate()
		.map(|(index, v)| serde_json::from_value(v).map_err(|source| GraphFileError::Edge { index, source }))
		.collect()
}

/// Stored edge override, or `fallback` when absent or malformed.
pub fn load_edges(store: &impl KeyValueStore, fallback: &[Edge]) -> Vec<Edge> {
	let Some(Value::Array(items)) = load_json(store, keys::EDGES) else {
		return fallback.to_vec();
	};
	match decode_edges(items) {
		Ok(edges) => edges,
		Err(e) => {
			debug!("stored edges rejected, using built-in graph: {e}");
			fallback.to_vec()
		}
	}
}

/// Persists the edge override.
pub fn save_edges(store: &impl KeyValueStore, edges: &[Edge]) {
	save_json(store, keys::EDGES, edges);
}

/// Pretty-printed `{ nodes, edges }` document.
pub fn export_document(nodes: &[Node], edges: &[Edge]) -> Result<String, GraphFileError> {
	Ok(serde_json::to_string_pretty(&ExportDocument { nodes, edges })?)
}

/// Parses an import. Fails unless both `nodes` and `edges` are arrays and
/// every edge decodes.
pub fn parse_graph_document(text: &str) -> Result<GraphDocument, GraphFileError> {
	let mut doc: Value = serde_json::from_str(text)?;
	let (Some(Value::Array(nodes)), Some(Value::Array(edges))) =
		(doc.get_mut("nodes").map(Value::take), doc.get_mut("edges").map(Value::take))
	else {
		warn!("graph import rejected: missing nodes/edges arrays");
		return Err(GraphFileError::Shape);
	};
	Ok(GraphDocument {
		nodes,
		edges: decode_edges(edges)?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{EdgeType, Strength};
	use crate::storage::MemoryStore;
	use crate::storage::test_support::FailingStore;

	fn sample_edges() -> Vec<Edge> {
		vec![Edge {
			id: "e1".into(),
			from: "anunnaki".into(),
			to: "nibiru".into(),
			label: Some("linked narrative".into()),
			strength: Some(Strength::MEDIUM),
			kind: Some(EdgeType::Overlap),
		}]
	}

	#[test]
	fn missing_or_malformed_override_falls_back() {
		let fallback = sample_edges();
		let store = MemoryStore::new();
		assert_eq!(load_edges(&store, &fallback), fallback);

		store.set(keys::EDGES, r#"{"edges":[]}"#).unwrap();
		assert_eq!(load_edges(&store, &fallback), fallback);

		store.set(keys::EDGES, "not json").unwrap();
		assert_eq!(load_edges(&store, &fallback), fallback);

		store.set(keys::EDGES, r#"[{"id":"x"}]"#).unwrap();
		assert_eq!(load_edges(&store, &fallback), fallback);

		assert_eq!(load_edges(&FailingStore, &fallback), fallback);
	}

	#[test]
	fn saved_override_wins_even_when_empty() {
		let store = MemoryStore::new();
		save_edges(&store, &[]);
		assert!(load_edges(&store, &sample_edges()).is_empty());

		save_edges(&store, &sample_edges());
		assert_eq!(load_edges(&store, &[]), sample_edges());
	}

	#[test]
	fn import_accepts_empty_arrays() {
		let doc = parse_graph_document(r#"{"nodes":[],"edges":[]}"#).unwrap();
		assert!(doc.nodes.is_empty());
		assert!(doc.edges.is_empty());
	}

	#[test]
	fn import_rejects_wrong_shape() {
		assert!(matches!(parse_graph_document(r#"{"foo":1}"#), Err(GraphFileError::Shape)));
		assert!(matches!(
			parse_graph_document(r#"{"nodes":{},"edges":[]}"#),
			Err(GraphFileError::Shape)
		));
		assert!(matches!(parse_graph_document("[1,2]"), Err(GraphFileError::Shape)));
		assert!(matches!(parse_graph_document("{oops"), Err(GraphFileError::Json(_))));
	}

	#[test]
	fn import_reports_the_bad_edge() {
		let err = parse_graph_document(r#"{"nodes":[],"edges":[{"id":"a","from":"x","to":"y"},{"id":"b"}]}"#)
			.unwrap_err();
		assert!(matches!(err, GraphFileError::Edge { index: 1, .. }));
	}

	#[test]
	fn export_is_pretty_and_reimportable() {
		let text = export_document(&[], &sample_edges()).unwrap();
		assert!(text.contains("\n  \"edges\""));
		let doc = parse_graph_document(&text).unwrap();
		assert_eq!(doc.edges, sample_edges());
	}
}
