//! Client-side address scheme.

use crate::graph::Node;

/// The map with nothing selected.
pub const BASE_PATH: &str = "/";

/// Address of one topic.
pub fn topic_path(id: &str) -> String {
	format!("/topic/{id}")
}

/// Looks up a topic by id.
pub fn resolve_topic<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
	nodes.iter().find(|n| n.id == id)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::default_nodes;

	#[test]
	fn topic_paths_resolve_back() {
		let nodes = default_nodes();
		assert_eq!(topic_path("nibiru"), "/topic/nibiru");
		assert_eq!(resolve_topic(&nodes, "nibiru").map(|n| n.title.as_str()), Some("Nibiru"));
		assert!(resolve_topic(&nodes, "nope").is_none());
	}
}
