use std::collections::HashMap;

use crate::geometry::{Point, Size};
use crate::graph::{Edge, EdgeType, Node, ReadSet, Strength};

#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
	pub id: String,
	pub title: String,
	/// Content-canvas pixels.
	pub at: Point,
	pub read: bool,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	pub from: Point,
	pub to: Point,
	pub kind: EdgeType,
	pub strength: Strength,
}

impl Link {
	pub fn line_width(&self) -> f64 {
		match self.strength.get() {
			3 => 2.6,
			2 => 2.0,
			_ => 1.4,
		}
	}
}

/// Everything the canvas draws, in content coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub hotspots: Vec<Hotspot>,
	pub links: Vec<Link>,
}

impl Scene {
	/// Hotspots come from `visible`; links are resolved against the full
	/// catalogue and dropped when an endpoint is unknown or unplaced.
	pub fn build(
		visible: &[&Node],
		all: &[Node],
		edges: &[Edge],
		read: &ReadSet,
		selected: Option<&str>,
		content: Size,
	) -> Self {
		let placed: HashMap<&str, Point> = all
			.iter()
			.filter(|n| n.is_placed())
			.map(|n| (n.id.as_str(), n.canvas_point(content)))
			.collect();

		let links = edges
			.iter()
			.filter_map(|e| {
				let (from, to) = (placed.get(e.from.as_str())?, placed.get(e.to.as_str())?);
				Some(Link {
					from: *from,
					to: *to,
					kind: e.effective_kind(),
					strength: e.effective_strength(),
				})
			})
			.collect();

		let hotspots = visible
			.iter()
			.filter(|n| n.is_placed())
			.map(|n| Hotspot {
				id: n.id.clone(),
				title: n.title.clone(),
				at: n.canvas_point(content),
				read: read.contains(&n.id),
				selected: selected == Some(n.id.as_str()),
			})
			.collect();

		Self { hotspots, links }
	}

	/// Top-most hotspot within `radius` of a content point.
	pub fn hotspot_at(&self, at: Point, radius: f64) -> Option<&Hotspot> {
		let r2 = radius * radius;
		self.hotspots.iter().rev().find(|h| h.at.distance_sq(at) < r2)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CONTENT: Size = Size::new(1000.0, 1000.0);

	fn node(id: &str, x: f64, y: f64) -> Node {
		Node {
			id: id.into(),
			title: id.into(),
			category: String::new(),
			summary: String::new(),
			claims: vec![],
			counterpoints: vec![],
			tags: vec![],
			x,
			y,
		}
	}

	fn edge(from: &str, to: &str) -> Edge {
		Edge {
			id: format!("{from}-{to}"),
			from: from.into(),
			to: to.into(),
			label: None,
			strength: None,
			kind: None,
		}
	}

	#[test]
	fn dangling_and_unplaced_links_are_skipped() {
		let all = vec![node("a", 0.1, 0.1), node("b", 0.9, 0.9), node("off", -1.0, -1.0)];
		let edges = vec![edge("a", "b"), edge("a", "ghost"), edge("off", "b")];
		let visible: Vec<&Node> = all.iter().collect();
		let scene = Scene::build(&visible, &all, &edges, &ReadSet::new(), None, CONTENT);
		assert_eq!(scene.links.len(), 1);
		assert_eq!(scene.links[0].from, Point::new(100.0, 100.0));
		assert_eq!(scene.links[0].line_width(), 1.4);
		assert_eq!(scene.hotspots.len(), 2);
	}

	#[test]
	fn hotspots_follow_the_filtered_list_and_carry_state() {
		let all = vec![node("a", 0.1, 0.1), node("b", 0.9, 0.9)];
		let visible = vec![&all[1]];
		let read: ReadSet = ["b"].into_iter().collect();
		let scene = Scene::build(&visible, &all, &[edge("a", "b")], &read, Some("b"), CONTENT);
		assert_eq!(scene.hotspots.len(), 1);
		let h = &scene.hotspots[0];
		assert!(h.read && h.selected);
		// Links still connect nodes hidden by the filter.
		assert_eq!(scene.links.len(), 1);
	}

	#[test]
	fn hit_test_prefers_the_top_most_hotspot() {
		let all = vec![node("under", 0.5, 0.5), node("over", 0.51, 0.5)];
		let visible: Vec<&Node> = all.iter().collect();
		let scene = Scene::build(&visible, &all, &[], &ReadSet::new(), None, CONTENT);
		let hit = scene.hotspot_at(Point::new(505.0, 500.0), 20.0);
		assert_eq!(hit.map(|h| h.id.as_str()), Some("over"));
		assert!(scene.hotspot_at(Point::new(0.0, 0.0), 20.0).is_none());
	}
}
