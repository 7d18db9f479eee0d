//! HTML Element Builder
//!
//! Fluent construction of [`Element`] trees. Every helper returns an
//! [`ElementBuilder`]; call [`ElementBuilder::build`] to get the element.

use crate::dom::{Element, Event, EventType};

/// HTML element builder with fluent API
///
/// ## Example
///
/// ```
/// use formgen_pages::builder::html::button;
///
/// let submit = button()
///     .attr("type", "submit")
///     .class("submit-button")
///     .text("Submit Form")
///     .build();
///
/// assert_eq!(
///     submit.to_html(),
///     r#"<button class="submit-button" type="submit">Submit Form</button>"#
/// );
/// ```
pub struct ElementBuilder {
	element: Element,
}

impl ElementBuilder {
	/// Create a new builder from an element
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// Add classes
	///
	/// Space-separated values add several classes at once. Classes already
	/// present are kept once.
	pub fn class(self, class: &str) -> Self {
		for class in class.split_whitespace() {
			self.element.add_class(class);
		}
		self
	}

	/// Set the id attribute
	pub fn id(self, id: &str) -> Self {
		self.element.set_attribute("id", id);
		self
	}

	/// Set a custom attribute
	///
	/// An empty value renders as a bare boolean attribute.
	pub fn attr(self, name: &str, value: &str) -> Self {
		self.element.set_attribute(name, value);
		self
	}

	/// Set an attribute only when a value is given
	pub fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Set a boolean attribute when `on` is true
	pub fn flag(self, name: &str, on: bool) -> Self {
		if on { self.attr(name, "") } else { self }
	}

	/// Set text content
	///
	/// This will replace all children of the element.
	pub fn text(self, text: &str) -> Self {
		self.element.set_text_content(text);
		self
	}

	/// Append a child element
	pub fn child(self, child: Element) -> Self {
		self.element.append_child(&child);
		self
	}

	/// Append several child elements in order
	pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
		for child in children {
			self.element.append_child(&child);
		}
		self
	}

	/// Set the control value
	pub fn value(self, value: &str) -> Self {
		self.element.set_value(value);
		self
	}

	/// Add an event listener for any event type
	pub fn on<F>(self, event_type: EventType, callback: F) -> Self
	where
		F: FnMut(&Event) + 'static,
	{
		self.element.add_event_listener(event_type, callback);
		self
	}

	/// Add a blur event listener
	#[inline]
	pub fn on_blur<F>(self, callback: F) -> Self
	where
		F: FnMut(&Event) + 'static,
	{
		self.on(EventType::Blur, callback)
	}

	/// Add a submit event listener
	///
	/// Commonly used with `<form>` elements.
	#[inline]
	pub fn on_submit<F>(self, callback: F) -> Self
	where
		F: FnMut(&Event) + 'static,
	{
		self.on(EventType::Submit, callback)
	}

	/// Add an input event listener
	#[inline]
	pub fn on_input<F>(self, callback: F) -> Self
	where
		F: FnMut(&Event) + 'static,
	{
		self.on(EventType::Input, callback)
	}

	/// Finalize the builder and return the Element
	pub fn build(self) -> Element {
		self.element
	}
}

// ============================================================================
// Helper functions for common HTML elements
// ============================================================================

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> ElementBuilder {
			ElementBuilder::new(Element::new($tag))
		}
	};
}

define_element!(
	/// Create a `<div>` element
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create an `<h3>` element
	h3, "h3"
);

define_element!(
	/// Create a `<form>` element
	form, "form"
);

define_element!(
	/// Create a `<label>` element
	label, "label"
);

define_element!(
	/// Create an `<input>` element
	///
	/// ## Example
	///
	/// ```
	/// use formgen_pages::builder::html::input;
	///
	/// let email = input().attr("type", "email").id("email").build();
	/// assert_eq!(email.to_html(), r#"<input type="email" id="email" />"#);
	/// ```
	input, "input"
);

define_element!(
	/// Create a `<select>` element
	select, "select"
);

define_element!(
	/// Create an `<option>` element
	option, "option"
);

define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);

define_element!(
	/// Create a `<button>` element
	button, "button"
);
