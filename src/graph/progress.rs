use super::types::{Node, ReadSet};

/// Reading progress over the whole catalogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
	/// Topics read.
	pub read: usize,
	/// Topics left.
	pub unread: usize,
	/// All topics.
	pub total: usize,
	/// Rounded, 0 when there are no nodes.
	pub percent: u32,
}

impl Progress {
	/// Counts only ids present in `nodes`, so stale read ids do not inflate it.
	pub fn compute(nodes: &[Node], read: &ReadSet) -> Self {
		let total = nodes.len();
		let read_count = nodes.iter().filter(|n| read.contains(&n.id)).count();
		let percent = if total == 0 {
			0
		} else {
			((read_count as f64 / total as f64) * 100.0).round() as u32
		};
		Self {
			read: read_count,
			unread: total - read_count,
			total,
			percent,
		}
	}

	/// Whether every topic has been read.
	pub fn is_complete(&self) -> bool {
		self.unread == 0
	}
}
