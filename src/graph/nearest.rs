use super::types::{Node, ReadSet};
use crate::geometry::{Point, Size};

/// Closest unread, placed node to `center` (content-canvas pixels).
///
/// Linear scan by squared distance; on a tie the node met first wins.
pub fn nearest_unread<'a, I>(pool: I, read: &ReadSet, center: Point, content: Size) -> Option<&'a Node>
where
	I: IntoIterator<Item = &'a Node>,
{
	let mut best: Option<(&'a Node, f64)> = None;
	for node in pool {
		if !node.is_placed() || read.contains(&node.id) {
			continue;
		}
		let d = node.canvas_point(content).distance_sq(center);
		if best.is_none_or(|(_, bd)| d < bd) {
			best = Some((node, d));
		}
	}
	best.map(|(node, _)| node)
}
