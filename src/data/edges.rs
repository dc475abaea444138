use crate::graph::{Edge, EdgeType, Strength};

fn edge(id: &str, from: &str, to: &str, label: &str, strength: Strength, kind: EdgeType) -> Edge {
	Edge {
		id: id.into(),
		from: from.into(),
		to: to.into(),
		label: Some(label.into()),
		strength: Some(strength),
		kind: Some(kind),
	}
}

/// Default relationship graph, replaced by a stored or imported override.
pub fn default_edges() -> Vec<Edge> {
	vec![
		edge("e1", "anunnaki", "nibiru", "linked narrative", Strength::MEDIUM, EdgeType::Overlap),
		edge("e2", "remote-viewing", "crash-retrieval", "claims overlap", Strength::WEAK, EdgeType::Overlap),
		edge("e3", "triangular-craft", "crash-retrieval", "black budget?", Strength::WEAK, EdgeType::Rumor),
		edge("e4", "usos", "triangular-craft", "pattern echoes", Strength::WEAK, EdgeType::Overlap),
	]
}
