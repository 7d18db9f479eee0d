//! Browser binding for the element tree (WASM only)

use super::{Child, Element, Event, EventType};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// A browser node bound to a tree element, plus the closures forwarding
/// its native events.
pub(crate) struct Binding {
	pub(crate) node: web_sys::Element,
	forwards: Vec<(EventType, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl Drop for Binding {
	fn drop(&mut self) {
		for (event_type, closure) in &self.forwards {
			let _ = self.node.remove_event_listener_with_callback(
				event_type.as_str(),
				closure.as_ref().unchecked_ref(),
			);
		}
	}
}

fn document() -> Result<web_sys::Document, JsValue> {
	web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("document is not available"))
}

pub(crate) fn attach(node: web_sys::Element) -> Element {
	let element = Element::new(&node.tag_name());
	element.0.borrow_mut().binding = Some(Binding {
		node,
		forwards: Vec::new(),
	});
	element
}

pub(crate) fn materialize(element: &Element) -> Result<web_sys::Element, JsValue> {
	if let Some(node) = element.bound() {
		return Ok(node);
	}

	let (tag, attributes, classes, children, value, checked) = {
		let node = element.0.borrow();
		(
			node.tag.clone(),
			node.attributes.clone(),
			node.classes.clone(),
			node.children.clone(),
			node.value.clone(),
			node.checked,
		)
	};

	let document = document()?;
	let node = document.create_element(&tag)?;
	for (name, value) in &attributes {
		node.set_attribute(name, value)?;
	}
	if !classes.is_empty() {
		node.set_attribute("class", &classes.join(" "))?;
	}
	for child in &children {
		match child {
			Child::Text(text) => {
				node.append_child(&document.create_text_node(text))?;
			}
			Child::Element(child) => {
				node.append_child(&materialize(child)?)?;
			}
		}
	}
	// Options must exist before a select accepts its value.
	write_value(&node, &value);
	write_checked(&node, checked);

	element.0.borrow_mut().binding = Some(Binding {
		node: node.clone(),
		forwards: Vec::new(),
	});
	for event_type in element.listened_event_types() {
		listen(element, event_type);
	}

	Ok(node)
}

/// Forward a native event type to the tree listeners, once per type.
pub(crate) fn listen(element: &Element, event_type: EventType) {
	let Some(node) = element.bound() else {
		return;
	};
	let already = element
		.0
		.borrow()
		.binding
		.as_ref()
		.is_some_and(|binding| binding.forwards.iter().any(|(t, _)| *t == event_type));
	if already {
		return;
	}

	let target = element.downgrade();
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |native: web_sys::Event| {
		let Some(target) = target.upgrade() else {
			return;
		};
		let event = Event::new(event_type);
		if !target.dispatch_event(&event) {
			native.prevent_default();
		}
	});

	if node
		.add_event_listener_with_callback(event_type.as_str(), closure.as_ref().unchecked_ref())
		.is_err()
	{
		crate::warn_log!("could not listen for '{}' events", event_type.as_str());
		return;
	}

	if let Some(binding) = element.0.borrow_mut().binding.as_mut() {
		binding.forwards.push((event_type, closure));
	}
}

pub(crate) fn read_control_state(node: &web_sys::Element) -> Option<(String, bool)> {
	if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
		return Some((input.value(), input.checked()));
	}
	if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
		return Some((select.value(), false));
	}
	node.dyn_ref::<HtmlTextAreaElement>()
		.map(|textarea| (textarea.value(), false))
}

pub(crate) fn write_value(node: &web_sys::Element, value: &str) {
	if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
		// A radio's value is its option value, already set as an attribute.
		if input.type_() != "radio" {
			input.set_value(value);
		}
	} else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
		select.set_value(value);
	} else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
		textarea.set_value(value);
	}
}

pub(crate) fn write_checked(node: &web_sys::Element, checked: bool) {
	if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
		input.set_checked(checked);
	}
}
