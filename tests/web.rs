//! Browser tests for the `localStorage` adapter. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use topic_map_canvas::data::default_edges;
use topic_map_canvas::session::Session;
use topic_map_canvas::storage::{self, BrowserStore, KeyValueStore, keys};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn wipe() {
	for key in [
		keys::READ_NODES,
		keys::LAST_VISITED,
		keys::BREADCRUMBS,
		keys::EDGES,
		keys::ENTERED,
	] {
		let _ = BrowserStore.remove(key);
	}
}

#[wasm_bindgen_test]
fn browser_store_round_trips() {
	wipe();
	BrowserStore.set(keys::LAST_VISITED, "nibiru").unwrap();
	assert_eq!(BrowserStore.get(keys::LAST_VISITED).unwrap().as_deref(), Some("nibiru"));
	BrowserStore.remove(keys::LAST_VISITED).unwrap();
	assert_eq!(BrowserStore.get(keys::LAST_VISITED).unwrap(), None);
}

#[wasm_bindgen_test]
fn session_survives_a_reload() {
	wipe();
	let mut session = Session::restore(BrowserStore, &default_edges(), 5);
	session.focus_node("usos");
	session.focus_node("nibiru");

	let reloaded = Session::restore(BrowserStore, &default_edges(), 5);
	assert!(reloaded.read().contains("usos"));
	assert_eq!(reloaded.resume(), Some("nibiru"));
	assert_eq!(reloaded.crumbs().ids(), ["nibiru", "usos"]);
	wipe();
}

#[wasm_bindgen_test]
fn corrupt_values_fall_back() {
	wipe();
	BrowserStore.set(keys::READ_NODES, "{{{").unwrap();
	BrowserStore.set(keys::EDGES, "42").unwrap();
	assert!(storage::load_read_set(&BrowserStore).is_empty());
	assert_eq!(storage::load_edges(&BrowserStore, &default_edges()), default_edges());
	wipe();
}
