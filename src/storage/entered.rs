use super::{KeyValueStore, keys, load_raw, save_raw};

const ENTERED: &str = "1";

/// Whether the intro gate has been passed in this or an earlier session.
pub fn has_entered(store: &impl KeyValueStore) -> bool {
	load_raw(store, keys::ENTERED).as_deref() == Some(ENTERED)
}

/// Records that the splash was dismissed.
pub fn mark_entered(store: &impl KeyValueStore) {
	save_raw(store, keys::ENTERED, ENTERED);
}
