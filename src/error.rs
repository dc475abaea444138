//! Error types for storage access and graph file handling.

use thiserror::Error;

/// Failure talking to the browser's key-value storage.
///
/// Callers in [`crate::storage`] log these and fall back to defaults; they
/// never reach the UI.
#[derive(Debug, Error)]
pub enum StorageError {
	/// No window, or `localStorage` is disabled.
	#[error("storage is unavailable")]
	Unavailable,
	/// The storage call itself threw (quota exceeded, access denied, ...).
	#[error("storage access failed: {0}")]
	Access(String),
	/// A value could not be encoded for storage.
	#[error("could not encode value for key {key}: {source}")]
	Encode {
		/// Key being written.
		key: &'static str,
		/// Underlying encoder error.
		#[source]
		source: serde_json::Error,
	},
}

/// Failure importing or exporting a graph document.
#[derive(Debug, Error)]
pub enum GraphFileError {
	/// The selected file could not be read.
	#[error("could not read file: {0}")]
	Read(String),
	/// The file is not JSON.
	#[error("graph file is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	/// The document lacks a `nodes` or `edges` array.
	#[error("expected {{ nodes: [], edges: [] }}")]
	Shape,
	/// An entry of the `edges` array is not an edge.
	#[error("edge #{index} is malformed: {source}")]
	Edge {
		/// Position in the `edges` array.
		index: usize,
		/// Underlying decoder error.
		#[source]
		source: serde_json::Error,
	},
}
