//! Persistence port and the best-effort adapters built on it.
//!
//! Every adapter is fail-soft: reads fall back to an empty or default value
//! and writes are dropped after logging. UI state can always be rebuilt, so a
//! broken or full storage never surfaces to the user.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::error::StorageError;

mod breadcrumbs;
mod entered;
mod graph_io;
mod last_visited;
mod read_state;

pub use breadcrumbs::{Breadcrumbs, DEFAULT_CRUMB_CAP, load_crumbs, push_crumb};
pub use entered::{has_entered, mark_entered};
pub use graph_io::{GraphDocument, export_document, load_edges, parse_graph_document, save_edges};
pub use last_visited::{clear_last_visited, load_last_visited, save_last_visited};
pub use read_state::{clear_read, load_read_set, mark_read, save_read_set};

/// Storage key names, one per persisted value.
pub mod keys {
	/// JSON array of read ids.
	pub const READ_NODES: &str = "ga_map_read_nodes_v1";
	/// Plain id string.
	pub const LAST_VISITED: &str = "ga_map_last_visited_v1";
	/// JSON array of ids, most recent first.
	pub const BREADCRUMBS: &str = "ga_map_breadcrumbs_v1";
	/// JSON array of edges overriding the built-in list.
	pub const EDGES: &str = "ga_map_edges_v1";
	/// `"1"` once the splash is dismissed.
	pub const ENTERED: &str = "ga_map_entered_v1";
}

/// String key-value storage, shaped after the browser's `Storage` API.
pub trait KeyValueStore {
	/// `Ok(None)` when the key is absent.
	fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
	/// Stores `value` under `key`.
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
	/// Deletes `key`. Absent keys are not an error.
	fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).set(key, value)
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		(**self).remove(key)
	}
}

/// The window's `localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
	fn storage() -> Result<web_sys::Storage, StorageError> {
		web_sys::window()
			.ok_or(StorageError::Unavailable)?
			.local_storage()
			.map_err(|e| StorageError::Access(format!("{e:?}")))?
			.ok_or(StorageError::Unavailable)
	}
}

impl KeyValueStore for BrowserStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Self::storage()?
			.get_item(key)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::storage()?
			.set_item(key, value)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		Self::storage()?
			.remove_item(key)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}
}

/// In-memory store for tests and for running without a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stored value, bypassing the trait.
	pub fn raw(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.raw(key))
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		self.entries.borrow_mut().remove(key);
		Ok(())
	}
}

fn load_raw(store: &impl KeyValueStore, key: &'static str) -> Option<String> {
	match store.get(key) {
		Ok(v) => v,
		Err(e) => {
			debug!("storage read of {key} failed, using default: {e}");
			None
		}
	}
}

fn load_json(store: &impl KeyValueStore, key: &'static str) -> Option<Value> {
	let raw = load_raw(store, key)?;
	match serde_json::from_str(&raw) {
		Ok(v) => Some(v),
		Err(e) => {
			debug!("stored {key} is not JSON, using default: {e}");
			None
		}
	}
}

/// Strings of a stored JSON array, non-strings dropped. Empty when absent or
/// malformed.
fn load_string_list(store: &impl KeyValueStore, key: &'static str) -> Vec<String> {
	match load_json(store, key) {
		Some(Value::Array(items)) => items
			.into_iter()
			.filter_map(|v| match v {
				Value::String(s) => Some(s),
				_ => None,
			})
			.collect(),
		_ => Vec::new(),
	}
}

fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &'static str, value: &T) {
	let result = serde_json::to_string(value)
		.map_err(|source| StorageError::Encode { key, source })
		.and_then(|raw| store.set(key, &raw));
	if let Err(e) = result {
		warn!("dropping write of {key}: {e}");
	}
}

fn save_raw(store: &impl KeyValueStore, key: &'static str, value: &str) {
	if let Err(e) = store.set(key, value) {
		warn!("dropping write of {key}: {e}");
	}
}

fn remove_key(store: &impl KeyValueStore, key: &'static str) {
	if let Err(e) = store.remove(key) {
		warn!("dropping removal of {key}: {e}");
	}
}

#[cfg(test)]
pub(crate) mod test_support {
	use super::*;

	/// Store whose every call fails, like a disabled `localStorage`.
	pub struct FailingStore;

	impl KeyValueStore for FailingStore {
		fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
			Err(StorageError::Access("SecurityError".into()))
		}

		fn set(&self, _: &str, _: &str) -> Result<(), StorageError> {
			Err(StorageError::Access("QuotaExceededError".into()))
		}

		fn remove(&self, _: &str) -> Result<(), StorageError> {
			Err(StorageError::Unavailable)
		}
	}
}
