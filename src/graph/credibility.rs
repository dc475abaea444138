use super::types::{Edge, EdgeType};

/// Coarse reading of a credibility score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredibilityLabel {
	/// Score 75 and up.
	Stronger,
	/// 55 to 75.
	Mixed,
	/// 35 to 55.
	Weak,
	/// Below 35.
	Narrative,
}

impl CredibilityLabel {
	fn for_score(score: f64) -> Self {
		if score >= 75.0 {
			Self::Stronger
		} else if score >= 55.0 {
			Self::Mixed
		} else if score >= 35.0 {
			Self::Weak
		} else {
			Self::Narrative
		}
	}

	/// Text shown in the info panel.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Stronger => "Stronger signal",
			Self::Mixed => "Mixed signal",
			Self::Weak => "Weak signal",
			Self::Narrative => "Mostly narrative",
		}
	}
}

/// Score of one topic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Credibility {
	/// In `[0, 100]`.
	pub score: f64,
	/// Free text shown next to the connection.
	pub label: CredibilityLabel,
	/// Edges touching the topic, dangling ones included.
	pub related_count: usize,
}

/// Contribution of one edge of `kind`, before strength.
pub fn type_weight(kind: EdgeType) -> f64 {
	match kind {
		EdgeType::Evidence => 3.0,
		EdgeType::Citation => 2.0,
		EdgeType::Timeline => 1.5,
		EdgeType::Overlap => 1.0,
		EdgeType::Rumor => -2.0,
	}
}

const STRENGTH_WEIGHT: f64 = 0.2;

/// Scores a topic from the edges touching it. Endpoints need not resolve to
/// known nodes.
pub fn credibility_score(node_id: &str, edges: &[Edge]) -> Credibility {
	let (raw, related_count) = edges
		.iter()
		.filter(|e| e.touches(node_id))
		.fold((0.0, 0usize), |(raw, n), e| {
			let w = type_weight(e.effective_kind())
				+ f64::from(e.effective_strength().get()) * STRENGTH_WEIGHT;
			(raw + w, n + 1)
		});
	let score = (50.0 + raw * 8.0).clamp(0.0, 100.0);
	Credibility {
		score,
		label: CredibilityLabel::for_score(score),
		related_count,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::types::Strength;

	fn edge(id: &str, from: &str, to: &str, kind: Option<EdgeType>, strength: Option<u8>) -> Edge {
		Edge {
			id: id.into(),
			from: from.into(),
			to: to.into(),
			label: None,
			strength: strength.map(|s| Strength::try_from(s).unwrap()),
			kind,
		}
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn no_edges_is_neutral() {
		let c = credibility_score("a", &[]);
		assert_eq!(c.score, 50.0);
		assert_eq!(c.label, CredibilityLabel::Weak);
		assert_eq!(c.related_count, 0);
	}

	#[test]
	fn weights_and_strength_sum() {
		let edges = vec![
			edge("1", "a", "b", Some(EdgeType::Evidence), Some(3)),
			edge("2", "c", "a", Some(EdgeType::Rumor), None),
			edge("3", "x", "y", Some(EdgeType::Evidence), Some(3)),
		];
		// (3 + 0.6) + (-2 + 0.2) = 1.8 -> 50 + 14.4
		let c = credibility_score("a", &edges);
		assert!(close(c.score, 64.4));
		assert_eq!(c.label, CredibilityLabel::Mixed);
		assert_eq!(c.related_count, 2);
	}

	#[test]
	fn missing_type_counts_as_overlap() {
		let untyped = credibility_score("a", &[edge("1", "a", "b", None, None)]);
		let overlap = credibility_score("a", &[edge("1", "a", "b", Some(EdgeType::Overlap), None)]);
		assert_eq!(untyped, overlap);
		assert!(close(untyped.score, 59.6));
	}

	#[test]
	fn score_is_clamped() {
		let many: Vec<Edge> = (0..10)
			.map(|i| edge(&i.to_string(), "a", "b", Some(EdgeType::Evidence), Some(3)))
			.collect();
		let high = credibility_score("a", &many);
		assert_eq!(high.score, 100.0);
		assert_eq!(high.label, CredibilityLabel::Stronger);

		let rumors: Vec<Edge> = (0..10)
			.map(|i| edge(&i.to_string(), "a", "b", Some(EdgeType::Rumor), Some(1)))
			.collect();
		let low = credibility_score("a", &rumors);
		assert_eq!(low.score, 0.0);
		assert_eq!(low.label.as_str(), "Mostly narrative");
	}

	#[test]
	fn order_does_not_matter() {
		let mut edges = vec![
			edge("1", "a", "b", Some(EdgeType::Citation), Some(2)),
			edge("2", "a", "c", Some(EdgeType::Timeline), None),
			edge("3", "d", "a", Some(EdgeType::Rumor), Some(3)),
			edge("4", "a", "ghost", None, Some(1)),
		];
		let forward = credibility_score("a", &edges);
		edges.reverse();
		let backward = credibility_score("a", &edges);
		edges.rotate_left(1);
		let rotated = credibility_score("a", &edges);
		assert!(close(forward.score, backward.score));
		assert!(close(forward.score, rotated.score));
		assert_eq!(forward.related_count, 4);
	}
}
