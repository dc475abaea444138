use super::{KeyValueStore, keys, load_raw, remove_key, save_raw};

/// Resume pointer: id of the most recently visited topic.
pub fn load_last_visited(store: &impl KeyValueStore) -> Option<String> {
	load_raw(store, keys::LAST_VISITED).filter(|id| !id.is_empty())
}

/// Stores the resume pointer.
pub fn save_last_visited(store: &impl KeyValueStore, id: &str) {
	save_raw(store, keys::LAST_VISITED, id);
}

/// Forgets the resume pointer.
pub fn clear_last_visited(store: &impl KeyValueStore) {
	remove_key(store, keys::LAST_VISITED);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;
	use crate::storage::test_support::FailingStore;

	#[test]
	fn last_write_wins() {
		let store = MemoryStore::new();
		assert_eq!(load_last_visited(&store), None);
		save_last_visited(&store, "nibiru");
		save_last_visited(&store, "usos");
		assert_eq!(load_last_visited(&store).as_deref(), Some("usos"));
		assert_eq!(store.raw(keys::LAST_VISITED).as_deref(), Some("usos"));
		clear_last_visited(&store);
		assert_eq!(load_last_visited(&store), None);
	}

	#[test]
	fn failing_store_reads_as_none() {
		save_last_visited(&FailingStore, "a");
		assert_eq!(load_last_visited(&FailingStore), None);
	}
}
