use log::debug;

use super::{KeyValueStore, keys, load_string_list, remove_key, save_json};
use crate::graph::ReadSet;

/// Deduplicated read set; empty on any storage problem.
pub fn load_read_set(store: &impl KeyValueStore) -> ReadSet {
	load_string_list(store, keys::READ_NODES).into_iter().collect()
}

/// Persists `read`.
pub fn save_read_set(store: &impl KeyValueStore, read: &ReadSet) {
	let ids: Vec<&str> = read.iter().collect();
	save_json(store, keys::READ_NODES, &ids);
}

/// New set holding `id` and every prior member, persisted as a side effect.
pub fn mark_read(store: &impl KeyValueStore, read: &ReadSet, id: &str) -> ReadSet {
	let next = read.with(id);
	save_read_set(store, &next);
	next
}

/// Removes the stored set and returns an empty one.
pub fn clear_read(store: &impl KeyValueStore) -> ReadSet {
	debug!("clearing read state");
	remove_key(store, keys::READ_NODES);
	ReadSet::new()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;
	use crate::storage::test_support::FailingStore;

	#[test]
	fn load_dedups_and_drops_junk() {
		let store = MemoryStore::new();
		store.set(keys::READ_NODES, r#"["a","b","a",3,false]"#).unwrap();
		let read = load_read_set(&store);
		assert_eq!(read.iter().collect::<Vec<_>>(), ["a", "b"]);
	}

	#[test]
	fn mark_read_persists_and_is_idempotent() {
		let store = MemoryStore::new();
		let once = mark_read(&store, &ReadSet::new(), "a");
		let twice = mark_read(&store, &once, "a");
		assert_eq!(once, twice);
		assert_eq!(load_read_set(&store), once);
		assert_eq!(store.raw(keys::READ_NODES).as_deref(), Some(r#"["a"]"#));
	}

	#[test]
	fn mark_read_keeps_prior_members() {
		let store = MemoryStore::new();
		let read = mark_read(&store, &ReadSet::new(), "a");
		let read = mark_read(&store, &read, "b");
		assert!(read.contains("a") && read.contains("b"));
		assert_eq!(load_read_set(&store).len(), 2);
	}

	#[test]
	fn clear_empties_storage() {
		let store = MemoryStore::new();
		mark_read(&store, &ReadSet::new(), "a");
		assert!(clear_read(&store).is_empty());
		assert!(store.raw(keys::READ_NODES).is_none());
		assert!(load_read_set(&store).is_empty());
	}

	#[test]
	fn broken_storage_never_panics() {
		assert!(load_read_set(&FailingStore).is_empty());
		let read = mark_read(&FailingStore, &ReadSet::new(), "a");
		assert!(read.contains("a"));
		assert!(clear_read(&FailingStore).is_empty());
	}
}
