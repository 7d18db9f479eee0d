//! DOM abstraction layer
//!
//! [`Element`] is a cheap, cloneable handle to a node of an element tree.
//! The tree is fully usable on native targets, which is where the renderer
//! and its event wiring are tested. On `wasm32` an element can be bound to
//! a real `web_sys::Element`: every mutation is mirrored into the browser,
//! control values are read back from it, and native events are forwarded to
//! the listeners registered here.
//!
//! ## Example
//!
//! ```
//! use formgen_pages::dom::{Element, Event, EventType};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let input = Element::new("input");
//! input.set_attribute("type", "text");
//!
//! let blurred = Rc::new(Cell::new(0));
//! let counter = blurred.clone();
//! input.add_event_listener(EventType::Blur, move |_| counter.set(counter.get() + 1));
//!
//! input.dispatch_event(&Event::new(EventType::Blur));
//! assert_eq!(blurred.get(), 1);
//! assert_eq!(input.to_html(), r#"<input type="text" />"#);
//! ```

#[cfg(target_arch = "wasm32")]
pub(crate) mod web;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Event types the tree knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Control lost focus
	Blur,
	/// Form submission
	Submit,
	/// Control value edited
	Input,
	/// Control value committed
	Change,
	/// Pointer click
	Click,
}

impl EventType {
	/// DOM event name
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Blur => "blur",
			EventType::Submit => "submit",
			EventType::Input => "input",
			EventType::Change => "change",
			EventType::Click => "click",
		}
	}
}

/// An event delivered to listeners.
#[derive(Debug)]
pub struct Event {
	event_type: EventType,
	default_prevented: Cell<bool>,
}

impl Event {
	/// Create a new event
	pub fn new(event_type: EventType) -> Self {
		Self {
			event_type,
			default_prevented: Cell::new(false),
		}
	}

	/// Event type
	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	/// Cancel the default action (native form submission for `submit`).
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	/// Whether a listener cancelled the default action
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

type Listener = Rc<RefCell<dyn FnMut(&Event)>>;

#[derive(Clone)]
enum Child {
	Element(Element),
	Text(String),
}

struct Node {
	tag: String,
	attributes: Vec<(String, String)>,
	classes: Vec<String>,
	children: Vec<Child>,
	parent: Weak<RefCell<Node>>,
	value: String,
	checked: bool,
	listeners: Vec<(EventType, Listener)>,
	#[cfg(target_arch = "wasm32")]
	binding: Option<web::Binding>,
}

/// Handle to an element node.
///
/// Clones share the same node. Parents own their children; a child only
/// keeps a weak reference to its parent.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

/// Non-owning handle to an element node.
#[derive(Clone, Default)]
pub struct WeakElement(Weak<RefCell<Node>>);

impl WeakElement {
	/// Get the element back if it is still alive
	pub fn upgrade(&self) -> Option<Element> {
		self.0.upgrade().map(Element)
	}
}

impl Element {
	/// Create a detached element
	pub fn new(tag: &str) -> Self {
		Self(Rc::new(RefCell::new(Node {
			tag: tag.to_ascii_lowercase(),
			attributes: Vec::new(),
			classes: Vec::new(),
			children: Vec::new(),
			parent: Weak::new(),
			value: String::new(),
			checked: false,
			listeners: Vec::new(),
			#[cfg(target_arch = "wasm32")]
			binding: None,
		})))
	}

	/// Bind a new, empty element to an existing browser node.
	///
	/// Children appended afterwards are created in the browser as well.
	#[cfg(target_arch = "wasm32")]
	pub fn attach(node: web_sys::Element) -> Self {
		web::attach(node)
	}

	/// Materialize this element (and its subtree) as browser nodes.
	#[cfg(target_arch = "wasm32")]
	pub fn materialize(&self) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
		web::materialize(self)
	}

	#[cfg(target_arch = "wasm32")]
	pub(crate) fn bound(&self) -> Option<web_sys::Element> {
		self.0
			.borrow()
			.binding
			.as_ref()
			.map(|binding| binding.node.clone())
	}

	/// Create a weak handle
	pub fn downgrade(&self) -> WeakElement {
		WeakElement(Rc::downgrade(&self.0))
	}

	/// Returns `true` if both handles point at the same node
	pub fn ptr_eq(&self, other: &Element) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	/// Lower-case tag name
	pub fn tag(&self) -> String {
		self.0.borrow().tag.clone()
	}

	/// Value of the `id` attribute
	pub fn id(&self) -> Option<String> {
		self.attribute("id")
	}

	/// Get an attribute value
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.0
			.borrow()
			.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.clone())
	}

	/// Returns `true` if the attribute is present
	pub fn has_attribute(&self, name: &str) -> bool {
		self.0.borrow().attributes.iter().any(|(key, _)| key == name)
	}

	/// Set an attribute, replacing any previous value.
	///
	/// Use `class` through [`Element::add_class`] instead.
	pub fn set_attribute(&self, name: &str, value: &str) {
		{
			let mut node = self.0.borrow_mut();
			match node.attributes.iter_mut().find(|(key, _)| key == name) {
				Some((_, existing)) => *existing = value.to_string(),
				None => node
					.attributes
					.push((name.to_string(), value.to_string())),
			}
		}
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			let _ = node.set_attribute(name, value);
		}
	}

	/// Remove an attribute
	pub fn remove_attribute(&self, name: &str) {
		self.0.borrow_mut().attributes.retain(|(key, _)| key != name);
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			let _ = node.remove_attribute(name);
		}
	}

	/// Add a class if not already present
	pub fn add_class(&self, class: &str) {
		{
			let mut node = self.0.borrow_mut();
			if node.classes.iter().any(|c| c == class) {
				return;
			}
			node.classes.push(class.to_string());
		}
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			let _ = node.class_list().add_1(class);
		}
	}

	/// Remove a class
	pub fn remove_class(&self, class: &str) {
		self.0.borrow_mut().classes.retain(|c| c != class);
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			let _ = node.class_list().remove_1(class);
		}
	}

	/// Returns `true` if the class is present
	pub fn has_class(&self, class: &str) -> bool {
		self.0.borrow().classes.iter().any(|c| c == class)
	}

	/// Classes in insertion order
	pub fn classes(&self) -> Vec<String> {
		self.0.borrow().classes.clone()
	}

	/// Replace all children with a single text node (none for `""`).
	pub fn set_text_content(&self, text: &str) {
		let removed = {
			let mut node = self.0.borrow_mut();
			let removed = std::mem::take(&mut node.children);
			if !text.is_empty() {
				node.children.push(Child::Text(text.to_string()));
			}
			removed
		};
		detach_all(&removed);
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			node.set_text_content(Some(text));
		}
	}

	/// Concatenated text of this element and its descendants
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		self.collect_text(&mut text);
		text
	}

	fn collect_text(&self, out: &mut String) {
		for child in self.0.borrow().children.iter() {
			match child {
				Child::Text(text) => out.push_str(text),
				Child::Element(element) => element.collect_text(out),
			}
		}
	}

	/// Append a child, moving it out of its previous parent
	pub fn append_child(&self, child: &Element) {
		if child.ptr_eq(self) {
			return;
		}
		child.detach();
		child.0.borrow_mut().parent = Rc::downgrade(&self.0);
		self.0
			.borrow_mut()
			.children
			.push(Child::Element(child.clone()));
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			if let Ok(child_node) = web::materialize(child) {
				let _ = node.append_child(&child_node);
			}
		}
	}

	/// Remove this element from its parent
	pub fn remove(&self) {
		self.detach();
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			node.remove();
		}
	}

	fn detach(&self) {
		let parent = {
			let mut node = self.0.borrow_mut();
			std::mem::take(&mut node.parent)
		};
		if let Some(parent) = parent.upgrade() {
			parent.borrow_mut().children.retain(|child| match child {
				Child::Element(element) => !element.ptr_eq(self),
				Child::Text(_) => true,
			});
		}
	}

	/// Remove every child
	pub fn clear_children(&self) {
		let removed = std::mem::take(&mut self.0.borrow_mut().children);
		detach_all(&removed);
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			node.set_text_content(None);
		}
	}

	/// Parent element, if attached
	pub fn parent(&self) -> Option<Element> {
		self.0.borrow().parent.upgrade().map(Element)
	}

	/// Child elements (text nodes skipped)
	pub fn children(&self) -> Vec<Element> {
		self.0
			.borrow()
			.children
			.iter()
			.filter_map(|child| match child {
				Child::Element(element) => Some(element.clone()),
				Child::Text(_) => None,
			})
			.collect()
	}

	/// All descendant elements in document order
	pub fn descendants(&self) -> Vec<Element> {
		let mut out = Vec::new();
		self.collect_descendants(&mut out);
		out
	}

	fn collect_descendants(&self, out: &mut Vec<Element>) {
		for child in self.children() {
			out.push(child.clone());
			child.collect_descendants(out);
		}
	}

	/// First descendant matching a predicate
	pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<Element> {
		self.descendants().into_iter().find(|element| predicate(element))
	}

	/// First descendant with the given `id`
	pub fn find_by_id(&self, id: &str) -> Option<Element> {
		self.find(|element| element.attribute("id").as_deref() == Some(id))
	}

	/// All descendants with the given tag
	pub fn query_by_tag(&self, tag: &str) -> Vec<Element> {
		self.descendants()
			.into_iter()
			.filter(|element| element.0.borrow().tag == tag)
			.collect()
	}

	/// All descendants carrying the given class
	pub fn query_by_class(&self, class: &str) -> Vec<Element> {
		self.descendants()
			.into_iter()
			.filter(|element| element.has_class(class))
			.collect()
	}

	/// Current control value (`value` property of inputs, selects and
	/// textareas).
	pub fn value(&self) -> String {
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound()
			&& let Some((value, _)) = web::read_control_state(&node)
		{
			return value;
		}
		self.0.borrow().value.clone()
	}

	/// Set the control value
	pub fn set_value(&self, value: &str) {
		self.0.borrow_mut().value = value.to_string();
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			web::write_value(&node, value);
		}
	}

	/// Checked state of a checkbox or radio input
	pub fn checked(&self) -> bool {
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound()
			&& let Some((_, checked)) = web::read_control_state(&node)
		{
			return checked;
		}
		self.0.borrow().checked
	}

	/// Set the checked state
	pub fn set_checked(&self, checked: bool) {
		self.0.borrow_mut().checked = checked;
		#[cfg(target_arch = "wasm32")]
		if let Some(node) = self.bound() {
			web::write_checked(&node, checked);
		}
	}

	/// Register a listener
	pub fn add_event_listener<F>(&self, event_type: EventType, listener: F)
	where
		F: FnMut(&Event) + 'static,
	{
		let listener: Listener = Rc::new(RefCell::new(listener));
		self.0.borrow_mut().listeners.push((event_type, listener));
		#[cfg(target_arch = "wasm32")]
		web::listen(self, event_type);
	}

	/// Returns `true` if at least one listener handles the event type
	pub fn has_listener(&self, event_type: EventType) -> bool {
		self.0
			.borrow()
			.listeners
			.iter()
			.any(|(registered, _)| *registered == event_type)
	}

	/// Event types with at least one listener, in registration order
	#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
	pub(crate) fn listened_event_types(&self) -> Vec<EventType> {
		let mut types = Vec::new();
		for (event_type, _) in self.0.borrow().listeners.iter() {
			if !types.contains(event_type) {
				types.push(*event_type);
			}
		}
		types
	}

	/// Deliver an event to this element's listeners, in registration order.
	///
	/// Returns `false` if a listener cancelled the default action. A
	/// listener that is already running is not re-entered.
	pub fn dispatch_event(&self, event: &Event) -> bool {
		let listeners: Vec<Listener> = self
			.0
			.borrow()
			.listeners
			.iter()
			.filter(|(event_type, _)| *event_type == event.event_type())
			.map(|(_, listener)| listener.clone())
			.collect();

		for listener in listeners {
			if let Ok(mut listener) = listener.try_borrow_mut() {
				(*listener)(event);
			}
		}

		!event.default_prevented()
	}

	/// Serialize the subtree as HTML.
	///
	/// Attributes and text are escaped. Live control state (`value`,
	/// `checked`) is not part of the output.
	pub fn to_html(&self) -> String {
		let mut html = String::new();
		self.write_html(&mut html);
		html
	}

	fn write_html(&self, html: &mut String) {
		let node = self.0.borrow();
		html.push('<');
		html.push_str(&node.tag);
		if !node.classes.is_empty() {
			html.push_str(&format!(r#" class="{}""#, html_escape(&node.classes.join(" "))));
		}
		for (key, value) in &node.attributes {
			if value.is_empty() {
				html.push_str(&format!(" {}", key));
			} else {
				html.push_str(&format!(r#" {}="{}""#, key, html_escape(value)));
			}
		}

		if VOID_ELEMENTS.contains(&node.tag.as_str()) {
			html.push_str(" />");
			return;
		}

		html.push('>');
		for child in &node.children {
			match child {
				Child::Text(text) => html.push_str(&html_escape(text)),
				Child::Element(element) => element.write_html(html),
			}
		}
		html.push_str("</");
		html.push_str(&node.tag);
		html.push('>');
	}
}

fn detach_all(children: &[Child]) {
	for child in children {
		if let Child::Element(element) = child {
			element.0.borrow_mut().parent = Weak::new();
		}
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let node = self.0.borrow();
		f.debug_struct("Element")
			.field("tag", &node.tag)
			.field("attributes", &node.attributes)
			.field("classes", &node.classes)
			.field("children", &node.children.len())
			.finish()
	}
}

/// HTML escape utility
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
