//! Navigation and session state: selection, read set, breadcrumbs, resume
//! pointer and the live edge list, persisted through a [`KeyValueStore`].

use log::{info, warn};

use crate::error::GraphFileError;
use crate::graph::{Edge, Node, ReadSet};
use crate::routes::{BASE_PATH, topic_path};
use crate::storage::{self, Breadcrumbs, KeyValueStore};

/// Live UI state, written through to `S` on every change.
#[derive(Debug)]
pub struct Session<S> {
	store: S,
	selected: Option<String>,
	read: ReadSet,
	crumbs: Breadcrumbs,
	resume: Option<String>,
	edges: Vec<Edge>,
	entered: bool,
}

impl<S: KeyValueStore> Session<S> {
	/// Loads every persisted value, falling back to defaults.
	pub fn restore(store: S, default_edges: &[Edge], crumb_cap: usize) -> Self {
		let read = storage::load_read_set(&store);
		let crumbs = storage::load_crumbs(&store, crumb_cap);
		let resume = storage::load_last_visited(&store);
		let edges = storage::load_edges(&store, default_edges);
		let entered = storage::has_entered(&store);
		info!(
			"session restored: {} read, {} crumbs, {} edges",
			read.len(),
			crumbs.ids().len(),
			edges.len()
		);
		Self {
			store,
			selected: None,
			read,
			crumbs,
			resume,
			edges,
			entered,
		}
	}

	/// Opens a topic: selects it, marks it read, makes it the resume pointer
	/// and pushes it onto the breadcrumb trail. Returns the address to show.
	pub fn focus_node(&mut self, id: &str) -> String {
		self.selected = Some(id.to_owned());
		self.read = storage::mark_read(&self.store, &self.read, id);
		storage::save_last_visited(&self.store, id);
		self.resume = Some(id.to_owned());
		self.crumbs = storage::push_crumb(&self.store, &self.crumbs, id);
		topic_path(id)
	}

	/// Closes the topic. Returns the address to show.
	pub fn clear_selection(&mut self) -> &'static str {
		self.selected = None;
		BASE_PATH
	}

	/// Forgets every read topic.
	pub fn reset_read(&mut self) {
		self.read = storage::clear_read(&self.store);
	}

	/// Swaps in `edges` and persists them.
	pub fn replace_edges(&mut self, edges: Vec<Edge>) {
		storage::save_edges(&self.store, &edges);
		self.edges = edges;
	}

	/// Adopts the edges of an imported document. On error the current edges
	/// are left untouched.
	pub fn import_graph(&mut self, text: &str) -> Result<usize, GraphFileError> {
		let doc = storage::parse_graph_document(text).inspect_err(|e| warn!("graph import failed: {e}"))?;
		let count = doc.edges.len();
		info!("imported {count} edges ({} nodes ignored)", doc.nodes.len());
		self.replace_edges(doc.edges);
		Ok(count)
	}

	/// Pretty JSON of `nodes` and the live edges.
	pub fn export_graph(&self, nodes: &[Node]) -> Result<String, GraphFileError> {
		storage::export_document(nodes, &self.edges)
	}

	/// Dismisses the splash for good.
	pub fn enter(&mut self) {
		storage::mark_entered(&self.store);
		self.entered = true;
	}

	/// Open topic, if any.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Topics read so far.
	pub fn read(&self) -> &ReadSet {
		&self.read
	}

	/// Recent-visit trail.
	pub fn crumbs(&self) -> &Breadcrumbs {
		&self.crumbs
	}

	/// Last visited topic, kept across reloads.
	pub fn resume(&self) -> Option<&str> {
		self.resume.as_deref()
	}

	/// Live edge list.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Whether the splash was dismissed.
	pub fn has_entered(&self) -> bool {
		self.entered
	}
}
