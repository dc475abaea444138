use super::{KeyValueStore, keys, load_string_list, save_json};

/// Trail length used unless configured.
pub const DEFAULT_CRUMB_CAP: usize = 5;

/// Recent visits, most recent first. Never longer than `max`, never holds an
/// id twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumbs {
	ids: Vec<String>,
	max: usize,
}

impl Breadcrumbs {
	/// Empty trail holding at most `max` ids.
	pub fn new(max: usize) -> Self {
		Self {
			ids: Vec::new(),
			max,
		}
	}

	/// Builds a trail from arbitrary ids, restoring the invariants.
	pub fn from_ids(ids: impl IntoIterator<Item = String>, max: usize) -> Self {
		let mut trail = Self::new(max);
		for id in ids {
			if trail.ids.len() == max {
				break;
			}
			if !trail.contains(&id) {
				trail.ids.push(id);
			}
		}
		trail
	}

	/// Moves `id` to the front, dropping any earlier copy and the oldest
	/// entries past the cap.
	pub fn push(&mut self, id: &str) {
		self.ids.retain(|x| x != id);
		self.ids.insert(0, id.to_owned());
		self.ids.truncate(self.max);
	}

	/// Whether `id` is on the trail.
	pub fn contains(&self, id: &str) -> bool {
		self.ids.iter().any(|x| x == id)
	}

	/// Ids, most recent first.
	pub fn ids(&self) -> &[String] {
		&self.ids
	}

	/// Capacity.
	pub fn max(&self) -> usize {
		self.max
	}

	/// Whether nothing has been visited.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

impl Default for Breadcrumbs {
	fn default() -> Self {
		Self::new(DEFAULT_CRUMB_CAP)
	}
}

/// Stored trail, repaired to `max` unique ids.
pub fn load_crumbs(store: &impl KeyValueStore, max: usize) -> Breadcrumbs {
	Breadcrumbs::from_ids(load_string_list(store, keys::BREADCRUMBS), max)
}

/// Pushes `id` onto a copy of `trail` and persists the result.
pub fn push_crumb(store: &impl KeyValueStore, trail: &Breadcrumbs, id: &str) -> Breadcrumbs {
	let mut next = trail.clone();
	next.push(id);
	save_json(store, keys::BREADCRUMBS, next.ids());
	next
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;

	#[test]
	fn duplicate_moves_to_front() {
		let mut trail = Breadcrumbs::new(5);
		for id in ["a", "b", "a"] {
			trail.push(id);
		}
		assert_eq!(trail.ids(), ["a", "b"]);
	}

	#[test]
	fn cap_drops_oldest() {
		let mut trail = Breadcrumbs::new(3);
		for id in ["a", "b", "c", "d"] {
			trail.push(id);
		}
		assert_eq!(trail.ids(), ["d", "c", "b"]);
	}

	#[test]
	fn pushing_the_front_again_changes_nothing() {
		let mut trail = Breadcrumbs::default();
		trail.push("a");
		trail.push("b");
		let before = trail.clone();
		trail.push("b");
		assert_eq!(trail, before);
	}

	#[test]
	fn load_repairs_tampered_storage() {
		let store = MemoryStore::new();
		store
			.set(keys::BREADCRUMBS, r#"["a","a","b",7,"c","d","e","f"]"#)
			.unwrap();
		let trail = load_crumbs(&store, 5);
		assert_eq!(trail.ids(), ["a", "b", "c", "d", "e"]);
	}

	#[test]
	fn push_persists_most_recent_first() {
		let store = MemoryStore::new();
		let trail = push_crumb(&store, &Breadcrumbs::default(), "a");
		let trail = push_crumb(&store, &trail, "b");
		assert_eq!(store.raw(keys::BREADCRUMBS).as_deref(), Some(r#"["b","a"]"#));
		assert_eq!(load_crumbs(&store, 5), trail);
	}
}
