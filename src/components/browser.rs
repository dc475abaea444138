//! Small browser helpers: downloads, file reads and tap feedback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, File, FileReader, HtmlAnchorElement, Url};

use crate::error::GraphFileError;

pub const EXPORT_FILE_NAME: &str = "great-awakening-graph.json";

/// Short vibration where supported. Failures are ignored.
pub fn haptic(ms: u32) {
	if let Some(window) = web_sys::window() {
		let _ = window.navigator().vibrate_with_duration(ms);
	}
}

/// Triggers a client-side download of `text` as a JSON file.
pub fn download_json(file_name: &str, text: &str) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

	let options = BlobPropertyBag::new();
	options.set_type("application/json");
	let parts = js_sys::Array::of1(&JsValue::from_str(text));
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	body.append_child(&anchor)?;
	anchor.click();
	anchor.remove();
	Url::revoke_object_url(&url)
}

/// Reads `file` as text and hands the result to `done` once loaded.
pub fn read_file_text(file: &File, done: impl FnOnce(Result<String, GraphFileError>) + 'static) {
	let reader = match FileReader::new() {
		Ok(reader) => reader,
		Err(e) => return done(Err(GraphFileError::Read(format!("{e:?}")))),
	};
	let done = Rc::new(RefCell::new(Some(done)));

	let on_load = {
		let (reader, done) = (reader.clone(), done.clone());
		Closure::once_into_js(move || {
			let outcome = reader
				.result()
				.ok()
				.and_then(|v| v.as_string())
				.ok_or_else(|| GraphFileError::Read("file contents are not text".into()));
			reader.set_onloadend(None);
			if let Some(done) = done.borrow_mut().take() {
				done(outcome);
			}
		})
	};
	reader.set_onloadend(Some(on_load.unchecked_ref()));
	if let Err(e) = reader.read_as_text(file) {
		reader.set_onloadend(None);
		if let Some(done) = done.borrow_mut().take() {
			done(Err(GraphFileError::Read(format!("{e:?}"))));
		}
	}
}
