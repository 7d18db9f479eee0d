//! Browser entry point
//!
//! Wires a host page with a schema editor, an error line and a preview
//! container:
//!
//! ```html
//! <textarea id="jsonEditor"></textarea>
//! <div id="jsonError"></div>
//! <div id="formPreview"></div>
//! <script type="module">
//!   import init, { start } from "./formgen_pages.js";
//!   await init();
//!   start("jsonEditor", "jsonError", "formPreview");
//! </script>
//! ```

use crate::config::PagesSettings;
use crate::context::UiContext;
use crate::dom::Element;
use crate::preview::{SchemaPreview, sample_schema};
use crate::timer::BrowserScheduler;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlTextAreaElement, window};

/// Styles for notifications and validation feedback.
const STYLES: &str = "
	.notification {
		position: fixed;
		top: 20px;
		right: 20px;
		background-color: #4CAF50;
		color: white;
		padding: 15px;
		border-radius: 4px;
		opacity: 0;
		transform: translateX(100%);
		transition: all 0.3s ease;
		z-index: 1000;
	}
	.notification.show {
		opacity: 1;
		transform: translateX(0);
	}
	.required-indicator {
		color: red;
	}
	.error-message {
		color: red;
		font-size: 0.8em;
		margin-top: 5px;
	}
";

fn element_by_id(document: &Document, id: &str) -> Result<web_sys::Element, JsValue> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
	let Some(head) = document.head() else {
		crate::warn_log!("document has no <head>, skipping styles");
		return Ok(());
	};
	let style = document.create_element("style")?;
	style.set_text_content(Some(STYLES));
	head.append_child(&style)?;
	Ok(())
}

/// Start the live preview.
///
/// Seeds an empty editor with the sample schema, renders it, and renders
/// again on every `input` event of the editor. Schema errors are shown in
/// the error element, never thrown.
///
/// # Errors
///
/// Fails if the document or one of the three elements is missing, or the
/// editor is not a `<textarea>`.
#[wasm_bindgen]
pub fn start(editor_id: &str, error_id: &str, preview_id: &str) -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let window = window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("No body element"))?;

	let editor: HtmlTextAreaElement = element_by_id(&document, editor_id)?
		.dyn_into()
		.map_err(|_| JsValue::from_str(&format!("#{} is not a <textarea>", editor_id)))?;
	let error_surface = Element::attach(element_by_id(&document, error_id)?);
	let mount = Element::attach(element_by_id(&document, preview_id)?);
	let layer = Element::attach(body.into());

	inject_styles(&document)?;

	let ctx = UiContext::new(
		mount,
		error_surface,
		layer,
		Rc::new(BrowserScheduler::new()),
		PagesSettings::default(),
	);
	let preview = Rc::new(SchemaPreview::new(ctx));

	if editor.value().trim().is_empty() {
		editor.set_value(sample_schema());
	}
	// Failures are already on the error surface.
	let _ = preview.update(&editor.value());

	let source = editor.clone();
	let on_input = Closure::wrap(Box::new(move |_: web_sys::Event| {
		let _ = preview.update(&source.value());
	}) as Box<dyn FnMut(web_sys::Event)>);
	editor.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
	// The preview lives as long as the page.
	on_input.forget();

	crate::info_log!("formgen preview started");
	Ok(())
}
