use super::types::{Node, ReadSet};

/// Read-state narrowing applied before the text query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadFilter {
	/// Every topic.
	#[default]
	All,
	/// Topics not opened yet.
	Unread,
	/// Topics opened before.
	Read,
}

impl ReadFilter {
	/// Display order of the filter pills.
	pub const ALL: [ReadFilter; 3] = [ReadFilter::All, ReadFilter::Unread, ReadFilter::Read];

	/// Stable lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Unread => "unread",
			Self::Read => "read",
		}
	}

	/// Button text.
	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Unread => "Unread",
			Self::Read => "Read",
		}
	}

	/// Whether `node` passes this filter.
	pub fn admits(self, node: &Node, read: &ReadSet) -> bool {
		match self {
			Self::All => true,
			Self::Unread => !read.contains(&node.id),
			Self::Read => read.contains(&node.id),
		}
	}
}

/// Trims and lowercases a raw query. Empty means "no text filter".
pub fn normalize_query(query: &str) -> String {
	query.trim().to_lowercase()
}

/// Case-insensitive substring match on title, tags and category.
/// `needle` must already be normalised.
pub fn matches_query(node: &Node, needle: &str) -> bool {
	node.title.to_lowercase().contains(needle)
		|| node.tags.iter().any(|t| t.to_lowercase().contains(needle))
		|| node.category.to_lowercase().contains(needle)
}

/// Stable filter: the read filter and the text query are ANDed, node order is
/// preserved.
pub fn filter_nodes<'a>(
	nodes: &'a [Node],
	filter: ReadFilter,
	read: &ReadSet,
	query: &str,
) -> Vec<&'a Node> {
	let needle = normalize_query(query);
	nodes
		.iter()
		.filter(|n| filter.admits(n, read))
		.filter(|n| needle.is_empty() || matches_query(n, &needle))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, title: &str, category: &str, tags: &[&str]) -> Node {
		Node {
			id: id.into(),
			title: title.into(),
			category: category.into(),
			summary: String::new(),
			claims: vec![],
			counterpoints: vec![],
			tags: tags.iter().map(|t| t.to_string()).collect(),
			x: 0.5,
			y: 0.5,
		}
	}

	fn sample() -> Vec<Node> {
		vec![
			node("nibiru", "Nibiru", "Cosmic", &["planet"]),
			node("antarctica", "Antarctica", "Earth", &[]),
		]
	}

	fn ids(list: &[&Node]) -> Vec<String> {
		list.iter().map(|n| n.id.clone()).collect()
	}

	#[test]
	fn query_matches_title_prefix() {
		let nodes = sample();
		let out = filter_nodes(&nodes, ReadFilter::All, &ReadSet::new(), "nib");
		assert_eq!(ids(&out), ["nibiru"]);
	}

	#[test]
	fn unread_filter_keeps_everything_when_nothing_read() {
		let nodes = sample();
		let out = filter_nodes(&nodes, ReadFilter::Unread, &ReadSet::new(), "");
		assert_eq!(ids(&out), ["nibiru", "antarctica"]);
	}

	#[test]
	fn read_filter_with_nothing_read_is_empty() {
		let nodes = sample();
		assert!(filter_nodes(&nodes, ReadFilter::Read, &ReadSet::new(), "").is_empty());
	}

	#[test]
	fn query_is_trimmed_and_case_insensitive_over_tags_and_category() {
		let nodes = sample();
		let read = ReadSet::new();
		assert_eq!(ids(&filter_nodes(&nodes, ReadFilter::All, &read, "  PLANET ")), ["nibiru"]);
		assert_eq!(ids(&filter_nodes(&nodes, ReadFilter::All, &read, "earth")), ["antarctica"]);
		assert_eq!(filter_nodes(&nodes, ReadFilter::All, &read, "   ").len(), 2);
	}

	#[test]
	fn read_and_text_predicates_compose() {
		let nodes = sample();
		let read: ReadSet = ["nibiru"].into_iter().collect();
		assert!(filter_nodes(&nodes, ReadFilter::Unread, &read, "nib").is_empty());
		assert_eq!(ids(&filter_nodes(&nodes, ReadFilter::Read, &read, "nib")), ["nibiru"]);

		// Applying the text filter first gives the same set.
		let needle = normalize_query("a");
		let text_first: Vec<&Node> = nodes
			.iter()
			.filter(|n| matches_query(n, &needle))
			.filter(|n| ReadFilter::Unread.admits(n, &read))
			.collect();
		assert_eq!(ids(&text_first), ids(&filter_nodes(&nodes, ReadFilter::Unread, &read, "a")));
	}

	#[test]
	fn unplaced_nodes_are_still_searchable() {
		let mut nodes = sample();
		nodes[1].x = -1.0;
		let out = filter_nodes(&nodes, ReadFilter::All, &ReadSet::new(), "antar");
		assert_eq!(ids(&out), ["antarctica"]);
	}
}
