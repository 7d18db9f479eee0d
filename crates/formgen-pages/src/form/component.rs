//! Form and field components
//!
//! [`create_field`] builds the subtree of a single field, [`FormRenderer`]
//! assembles a whole form and wires submission. The generated markup:
//!
//! ```html
//! <form class="dynamic-form" novalidate>
//!   <div class="form-header"><h3>Title</h3><p>Description</p></div>
//!   <div class="form-group">
//!     <label for="name">Name<span class="required-indicator"> *</span></label>
//!     <input type="text" id="name" name="name" required />
//!     <div class="error-message"></div>
//!   </div>
//!   <button class="submit-button" type="submit">Submit Form</button>
//! </form>
//! ```
//!
//! `novalidate` leaves validation to the rules run here rather than the
//! browser's built-in constraint checks.

use super::submission::{SubmitHandler, default_handler};
use super::{RenderError, RenderResult};
use crate::builder::html::{button, div, form, h3, input, label, option, p, select, span, textarea};
use crate::context::UiContext;
use crate::dom::{Element, Event, EventType};
use formgen_forms::{
	FieldError, FieldKind, FieldResult, FieldSpec, FormSpec, SubmissionData, ValidationErrors,
	validate_value,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// The control element(s) of a rendered field.
#[derive(Debug, Clone)]
pub enum Control {
	/// `<input type="text">` or `<input type="email">`
	Input(Element),
	/// `<select>`
	Select(Element),
	/// `div.radio-group` and its radio inputs, in option order
	RadioGroup {
		/// Group container
		group: Element,
		/// One input per option
		inputs: Vec<Element>,
	},
	/// `<textarea>`
	TextArea(Element),
}

impl Control {
	/// Root element of the control
	pub fn element(&self) -> &Element {
		match self {
			Control::Input(element) | Control::Select(element) | Control::TextArea(element) => {
				element
			}
			Control::RadioGroup { group, .. } => group,
		}
	}

	/// Elements that receive focus, and so blur events
	pub fn focus_targets(&self) -> Vec<Element> {
		match self {
			Control::RadioGroup { inputs, .. } => inputs.clone(),
			other => vec![other.element().clone()],
		}
	}

	/// Current value; an unselected radio group reads as `""`.
	pub fn value(&self) -> String {
		self.submission_value().unwrap_or_default()
	}

	/// Value as the browser would submit it. `None` for a radio group with
	/// nothing selected.
	pub fn submission_value(&self) -> Option<String> {
		match self {
			Control::RadioGroup { inputs, .. } => inputs
				.iter()
				.find(|radio| radio.checked())
				.map(|radio| radio.attribute("value").unwrap_or_default()),
			other => Some(other.element().value()),
		}
	}

	/// Set the value. For a radio group this selects the matching option
	/// and deselects the rest; an unknown value clears the selection.
	pub fn set_value(&self, value: &str) {
		match self {
			Control::RadioGroup { inputs, .. } => {
				for radio in inputs {
					radio.set_checked(radio.attribute("value").as_deref() == Some(value));
				}
			}
			other => other.element().set_value(value),
		}
	}

	fn control_for(spec: &FieldSpec) -> RenderResult<Self> {
		let placeholder = spec.placeholder.as_deref();
		let control = match &spec.kind {
			FieldKind::Text | FieldKind::Email => Control::Input(
				input()
					.attr("type", spec.kind.as_str())
					.attr_opt("placeholder", placeholder)
					.build(),
			),
			FieldKind::Textarea => {
				Control::TextArea(textarea().attr_opt("placeholder", placeholder).build())
			}
			FieldKind::Select => {
				let options = choices(spec)?;
				let element = select()
					.children(options.iter().map(|choice| {
						option()
							.attr("value", &choice.value)
							.text(&choice.label)
							.build()
					}))
					.value(&options[0].value)
					.build();
				Control::Select(element)
			}
			FieldKind::Radio => {
				let options = choices(spec)?;
				let group = div().class("radio-group").build();
				let mut inputs = Vec::with_capacity(options.len());
				for choice in options {
					let radio_id = format!("{}-{}", spec.id, choice.value);
					let radio = input()
						.attr("type", "radio")
						.id(&radio_id)
						.attr("name", &spec.id)
						.attr("value", &choice.value)
						.flag("required", spec.required)
						.build();
					let wrapper = div()
						.class("radio-wrapper")
						.child(radio.clone())
						.child(label().attr("for", &radio_id).text(&choice.label).build())
						.build();
					group.append_child(&wrapper);
					inputs.push(radio);
				}
				Control::RadioGroup { group, inputs }
			}
			FieldKind::Unsupported(raw) => {
				return Err(RenderError::UnsupportedFieldType {
					id: spec.id.clone(),
					kind: raw.clone(),
				});
			}
		};

		let root = control.element();
		root.set_attribute("id", &spec.id);
		if !matches!(control, Control::RadioGroup { .. }) {
			root.set_attribute("name", &spec.id);
			if spec.required {
				root.set_attribute("required", "");
			}
			if let Some(min) = spec.min_bound() {
				root.set_attribute("minlength", &min.to_string());
			}
			if let Some(max) = spec.max_bound() {
				root.set_attribute("maxlength", &max.to_string());
			}
		}

		Ok(control)
	}
}

fn choices(spec: &FieldSpec) -> RenderResult<&[formgen_forms::ChoiceOption]> {
	let options = spec.options();
	if options.is_empty() {
		return Err(RenderError::MissingOptions {
			id: spec.id.clone(),
			kind: spec.kind.to_string(),
		});
	}
	Ok(options)
}

struct FieldParts {
	spec: FieldSpec,
	container: Element,
	control: Control,
	error_slot: Element,
}

/// The rendered subtree of one field.
///
/// Listeners on the control hold only weak references back to the field,
/// so the field stops reacting once every handle to it is dropped.
#[derive(Clone)]
pub struct RenderedField {
	parts: Rc<FieldParts>,
}

impl RenderedField {
	/// Field description the subtree was built from
	pub fn spec(&self) -> &FieldSpec {
		&self.parts.spec
	}

	/// Field id
	pub fn id(&self) -> &str {
		&self.parts.spec.id
	}

	/// `div.form-group` holding label, control and error slot
	pub fn container(&self) -> &Element {
		&self.parts.container
	}

	/// Control of the field
	pub fn control(&self) -> &Control {
		&self.parts.control
	}

	/// `div.error-message` slot
	pub fn error_slot(&self) -> &Element {
		&self.parts.error_slot
	}

	/// Message currently shown in the error slot
	pub fn error_message(&self) -> Option<String> {
		let text = self.parts.error_slot.text_content();
		(!text.is_empty()).then_some(text)
	}

	/// Validate the current value and update the error slot
	pub fn validate(&self) -> bool {
		validate_field(&self.parts.control, &self.parts.spec, &self.parts.error_slot)
	}

	fn check(&self) -> FieldResult {
		check_field(&self.parts.control, &self.parts.spec, &self.parts.error_slot)
	}
}

impl fmt::Debug for RenderedField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderedField")
			.field("id", &self.parts.spec.id)
			.field("kind", &self.parts.spec.kind)
			.field("control", &self.parts.control)
			.finish()
	}
}

/// Render one field: container, label, control and error slot.
///
/// A blur on the control (on any radio input of a radio group) validates
/// the field and updates its error slot.
///
/// # Errors
///
/// [`RenderError::UnsupportedFieldType`] for kinds without a control and
/// [`RenderError::MissingOptions`] for a choice field without options.
///
/// # Examples
///
/// ```
/// use formgen_forms::{FieldKind, FieldSpec};
/// use formgen_pages::dom::{Event, EventType};
/// use formgen_pages::form::create_field;
///
/// let field = create_field(&FieldSpec::new("n", FieldKind::Text, "Name").required()).unwrap();
/// field.control().element().dispatch_event(&Event::new(EventType::Blur));
/// assert_eq!(field.error_message().as_deref(), Some("Name is required"));
/// ```
pub fn create_field(spec: &FieldSpec) -> RenderResult<RenderedField> {
	let control = Control::control_for(spec)?;

	let mut field_label = label().attr("for", &spec.id).text(&spec.label);
	if spec.required {
		field_label = field_label.child(span().class("required-indicator").text(" *").build());
	}
	let error_slot = div().class("error-message").build();
	let container = div()
		.class("form-group")
		.child(field_label.build())
		.child(control.element().clone())
		.child(error_slot.clone())
		.build();

	let parts = Rc::new(FieldParts {
		spec: spec.clone(),
		container,
		control,
		error_slot,
	});

	for target in parts.control.focus_targets() {
		let field = Rc::downgrade(&parts);
		target.add_event_listener(EventType::Blur, move |_| {
			if let Some(parts) = field.upgrade() {
				validate_field(&parts.control, &parts.spec, &parts.error_slot);
			}
		});
	}
	if let Control::RadioGroup { inputs, .. } = &parts.control {
		for (index, radio) in inputs.iter().enumerate() {
			let field = Rc::downgrade(&parts);
			radio.add_event_listener(EventType::Change, move |_| {
				select_radio(&field, index);
			});
		}
	}

	crate::debug_log!("rendered field '{}' as {}", spec.id, spec.kind);
	Ok(RenderedField { parts })
}

/// Keep a radio group exclusive after one of its inputs changed.
fn select_radio(field: &Weak<FieldParts>, index: usize) {
	let Some(parts) = field.upgrade() else {
		return;
	};
	let Control::RadioGroup { inputs, .. } = &parts.control else {
		return;
	};
	if !inputs.get(index).is_some_and(Element::checked) {
		return;
	}
	for (other, radio) in inputs.iter().enumerate() {
		if other != index {
			radio.set_checked(false);
		}
	}
}

/// Validate a control's current value and show the first failure.
///
/// Clears `error_slot`, then writes the failing rule's message into it.
/// Returns `true` if every applicable check passed.
pub fn validate_field(control: &Control, spec: &FieldSpec, error_slot: &Element) -> bool {
	check_field(control, spec, error_slot).is_ok()
}

fn check_field(control: &Control, spec: &FieldSpec, error_slot: &Element) -> FieldResult {
	error_slot.set_text_content("");
	let result = validate_value(spec, &control.value());
	if let Err(err) = &result {
		crate::debug_log!("field '{}' failed {}: {}", spec.id, err.rule, err.message);
		error_slot.set_text_content(&err.message);
	}
	result
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Every field passed; the handler received this data
	Submitted(SubmissionData),
	/// At least one field failed; nothing was submitted
	Rejected(ValidationErrors),
}

impl SubmitOutcome {
	/// Returns `true` if the data reached the handler
	pub fn is_submitted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted(_))
	}
}

/// A rendered form and its fields.
pub struct RenderedForm {
	element: Element,
	fields: Vec<RenderedField>,
	submit_button: Element,
	last_outcome: Rc<RefCell<Option<SubmitOutcome>>>,
}

impl RenderedForm {
	/// The `form.dynamic-form` element
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Fields in render order
	pub fn fields(&self) -> &[RenderedField] {
		&self.fields
	}

	/// Look up a field by id
	pub fn field(&self, id: &str) -> Option<&RenderedField> {
		self.fields.iter().find(|field| field.id() == id)
	}

	/// The submit button
	pub fn submit_button(&self) -> &Element {
		&self.submit_button
	}

	/// Current values as they would be submitted, in field order
	pub fn values(&self) -> SubmissionData {
		collect_values(&self.fields)
	}

	/// Dispatch a submit event on the form and report what happened.
	///
	/// Returns `None` if the submit listener did not run.
	pub fn submit(&self) -> Option<SubmitOutcome> {
		self.last_outcome.borrow_mut().take();
		self.element.dispatch_event(&Event::new(EventType::Submit));
		self.last_outcome.borrow_mut().take()
	}

	/// Outcome of the most recent submit event, however it was triggered
	pub fn last_outcome(&self) -> Option<SubmitOutcome> {
		self.last_outcome.borrow().clone()
	}
}

impl fmt::Debug for RenderedForm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderedForm")
			.field("fields", &self.fields)
			.finish()
	}
}

fn collect_values(fields: &[RenderedField]) -> SubmissionData {
	fields
		.iter()
		.filter_map(|field| {
			field
				.control()
				.submission_value()
				.map(|value| (field.id().to_string(), value))
		})
		.collect()
}

/// Renders [`FormSpec`]s inside a [`UiContext`].
///
/// # Examples
///
/// ```
/// use formgen_forms::FormSpec;
/// use formgen_pages::form::FormRenderer;
/// use formgen_pages::timer::ManualScheduler;
/// use formgen_pages::{PagesSettings, UiContext};
/// use std::rc::Rc;
///
/// let ctx = UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()));
/// let spec = FormSpec::from_json(
///     r#"{"formTitle": "T", "fields": [{"id": "n", "type": "text", "label": "Name", "required": true}]}"#,
/// ).unwrap();
///
/// let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();
/// assert!(!form.submit().unwrap().is_submitted());
/// assert_eq!(form.field("n").unwrap().error_message().as_deref(), Some("Name is required"));
///
/// form.field("n").unwrap().control().set_value("Ada");
/// assert!(form.submit().unwrap().is_submitted());
/// ```
pub struct FormRenderer {
	ctx: UiContext,
	on_submit: Option<SubmitHandler>,
}

impl FormRenderer {
	/// Create a renderer using the default submission handler
	pub fn new(ctx: UiContext) -> Self {
		Self {
			ctx,
			on_submit: None,
		}
	}

	/// Replace the default submission handler
	pub fn with_submit_handler<F>(mut self, handler: F) -> Self
	where
		F: Fn(SubmissionData) + 'static,
	{
		self.on_submit = Some(Rc::new(handler));
		self
	}

	/// Context the renderer uses
	pub fn context(&self) -> &UiContext {
		&self.ctx
	}

	/// Render a whole form.
	///
	/// Fields keep schema order. Submitting prevents the native action,
	/// validates every field and calls the handler only if all pass.
	pub fn generate_form(&self, spec: &FormSpec) -> RenderResult<RenderedForm> {
		let fields = spec
			.fields
			.iter()
			.map(create_field)
			.collect::<RenderResult<Vec<_>>>()?;

		let mut header = div().class("form-header").child(h3().text(&spec.form_title).build());
		if let Some(description) = &spec.form_description {
			header = header.child(p().text(description).build());
		}

		let settings = self.ctx.settings();
		let submit_button = button()
			.class("submit-button")
			.attr("type", "submit")
			.text(&settings.submit_label)
			.build();

		let handler = self.on_submit.clone().unwrap_or_else(|| {
			default_handler(self.ctx.notifier().clone(), settings.success_message.clone())
		});
		let last_outcome = Rc::new(RefCell::new(None));

		let listener_fields = fields.clone();
		let outcome_slot = last_outcome.clone();
		let element = form()
			.class("dynamic-form")
			.attr("novalidate", "")
			.child(header.build())
			.children(fields.iter().map(|field| field.container().clone()))
			.child(submit_button.clone())
			.on_submit(move |event| {
				event.prevent_default();
				let outcome = submit_fields(&listener_fields, &handler);
				*outcome_slot.borrow_mut() = Some(outcome);
			})
			.build();

		Ok(RenderedForm {
			element,
			fields,
			submit_button,
			last_outcome,
		})
	}
}

/// Validate every field, then hand the values to the handler if all pass.
fn submit_fields(fields: &[RenderedField], handler: &SubmitHandler) -> SubmitOutcome {
	// Every field is checked so each one shows its own message.
	let failures: Vec<FieldError> = fields
		.iter()
		.filter_map(|field| field.check().err())
		.collect();

	if !failures.is_empty() {
		crate::debug_log!("submit blocked by {} field(s)", failures.len());
		return SubmitOutcome::Rejected(failures.into_iter().collect());
	}

	let data = collect_values(fields);
	handler(data.clone());
	SubmitOutcome::Submitted(data)
}

impl fmt::Debug for FormRenderer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormRenderer")
			.field("custom_handler", &self.on_submit.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::PagesSettings;
	use crate::timer::ManualScheduler;
	use formgen_forms::{ChoiceOption, RuleName};
	use rstest::{fixture, rstest};

	fn blur(element: &Element) {
		element.dispatch_event(&Event::new(EventType::Blur));
	}

	#[fixture]
	fn ctx() -> UiContext {
		UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()))
	}

	#[fixture]
	fn project_type() -> FieldSpec {
		FieldSpec::new("projectType", FieldKind::Radio, "Project Type")
			.required()
			.with_options([
				ChoiceOption::new("web", "Web Development"),
				ChoiceOption::new("mobile", "Mobile App"),
			])
	}

	#[rstest]
	fn test_text_field_markup() {
		let spec = FieldSpec::new("fullName", FieldKind::Text, "Full Name")
			.required()
			.with_placeholder("Enter your full name")
			.with_min_length(2)
			.with_max_length(50);
		let field = create_field(&spec).unwrap();

		assert_eq!(
			field.container().to_html(),
			concat!(
				r#"<div class="form-group">"#,
				r#"<label for="fullName">Full Name<span class="required-indicator"> *</span></label>"#,
				r#"<input type="text" placeholder="Enter your full name" id="fullName" name="fullName" required minlength="2" maxlength="50" />"#,
				r#"<div class="error-message"></div>"#,
				"</div>"
			)
		);
	}

	#[rstest]
	fn test_zero_length_bounds_are_not_rendered_or_enforced(ctx: UiContext) {
		let spec = FormSpec::new("T").with_field(
			FieldSpec::new("n", FieldKind::Text, "Name")
				.required()
				.with_min_length(0)
				.with_max_length(0),
		);
		let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();
		let control = form.field("n").unwrap().control().element().clone();
		assert!(!control.has_attribute("minlength"));
		assert!(!control.has_attribute("maxlength"));

		form.field("n").unwrap().control().set_value("Ada");
		assert!(form.submit().unwrap().is_submitted());
	}

	#[rstest]
	fn test_optional_field_has_no_indicator_or_required_attribute() {
		let field = create_field(&FieldSpec::new("notes", FieldKind::Textarea, "Notes")).unwrap();
		assert!(field.container().query_by_class("required-indicator").is_empty());
		assert!(!field.control().element().has_attribute("required"));
		assert_eq!(field.control().element().tag(), "textarea");
	}

	#[rstest]
	fn test_select_defaults_to_first_option() {
		let spec = FieldSpec::new("size", FieldKind::Select, "Size").with_options([
			ChoiceOption::new("startup", "Startup (1-50)"),
			ChoiceOption::new("midsize", "Mid-size (51-500)"),
		]);
		let field = create_field(&spec).unwrap();

		let options = field.control().element().query_by_tag("option");
		assert_eq!(options.len(), 2);
		assert_eq!(options[1].attribute("value").as_deref(), Some("midsize"));
		assert_eq!(options[1].text_content(), "Mid-size (51-500)");
		assert_eq!(field.control().value(), "startup");
	}

	#[rstest]
	fn test_radio_group_markup(project_type: FieldSpec) {
		let field = create_field(&project_type).unwrap();
		let Control::RadioGroup { group, inputs } = field.control() else {
			panic!("expected a radio group");
		};

		assert!(group.has_class("radio-group"));
		assert_eq!(group.id().as_deref(), Some("projectType"));
		assert_eq!(group.query_by_class("radio-wrapper").len(), 2);
		assert_eq!(inputs[0].id().as_deref(), Some("projectType-web"));
		assert_eq!(inputs[1].attribute("name").as_deref(), Some("projectType"));
		let labels = group.query_by_tag("label");
		assert_eq!(labels[1].attribute("for").as_deref(), Some("projectType-mobile"));
		assert_eq!(labels[1].text_content(), "Mobile App");
	}

	#[rstest]
	fn test_radio_selection_is_exclusive(project_type: FieldSpec) {
		let field = create_field(&project_type).unwrap();
		let Control::RadioGroup { inputs, .. } = field.control() else {
			panic!("expected a radio group");
		};
		assert_eq!(field.control().submission_value(), None);

		field.control().set_value("web");
		assert_eq!(field.control().value(), "web");

		inputs[1].set_checked(true);
		inputs[1].dispatch_event(&Event::new(EventType::Change));
		assert!(!inputs[0].checked());
		assert_eq!(field.control().value(), "mobile");
	}

	#[rstest]
	fn test_blur_on_any_radio_validates_group(project_type: FieldSpec) {
		let field = create_field(&project_type).unwrap();
		let targets = field.control().focus_targets();
		assert_eq!(targets.len(), 2);

		blur(&targets[1]);
		assert_eq!(field.error_message().as_deref(), Some("Project Type is required"));

		field.control().set_value("mobile");
		blur(&targets[0]);
		assert_eq!(field.error_message(), None);
	}

	#[rstest]
	#[case(FieldKind::Select)]
	#[case(FieldKind::Radio)]
	fn test_choice_without_options_is_a_render_error(#[case] kind: FieldKind) {
		let err = create_field(&FieldSpec::new("c", kind, "C")).unwrap_err();
		assert!(matches!(err, RenderError::MissingOptions { .. }));
	}

	#[rstest]
	fn test_unsupported_kind_is_a_render_error() {
		let spec = FieldSpec::new("d", FieldKind::Unsupported("date".into()), "Day");
		assert_eq!(
			create_field(&spec).unwrap_err(),
			RenderError::UnsupportedFieldType {
				id: "d".into(),
				kind: "date".into()
			}
		);
	}

	#[rstest]
	fn test_validate_field_clears_previous_message() {
		let spec = FieldSpec::new("email", FieldKind::Email, "Email");
		let field = create_field(&spec).unwrap();
		let control = field.control();

		control.set_value("nope");
		assert!(!validate_field(control, &spec, field.error_slot()));
		assert_eq!(field.error_message().as_deref(), Some("Please enter a valid email address"));

		control.set_value("a@b.co");
		assert!(validate_field(control, &spec, field.error_slot()));
		assert_eq!(field.error_slot().text_content(), "");
	}

	#[rstest]
	fn test_blur_only_touches_own_slot(ctx: UiContext) {
		let spec = FormSpec::new("T")
			.with_field(FieldSpec::new("a", FieldKind::Text, "A").required())
			.with_field(FieldSpec::new("b", FieldKind::Text, "B").required());
		let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();

		blur(form.field("a").unwrap().control().element());
		assert_eq!(form.field("a").unwrap().error_message().as_deref(), Some("A is required"));
		assert_eq!(form.field("b").unwrap().error_message(), None);
	}

	#[rstest]
	fn test_dropped_field_stops_validating() {
		let field = create_field(&FieldSpec::new("n", FieldKind::Text, "Name").required()).unwrap();
		let control = field.control().element().clone();
		let slot = field.error_slot().clone();
		drop(field);

		blur(&control);
		assert_eq!(slot.text_content(), "");
	}

	#[rstest]
	fn test_form_structure(ctx: UiContext) {
		let spec = FormSpec::new("Survey")
			.with_description("Tell us more")
			.with_field(FieldSpec::new("n", FieldKind::Text, "Name"));
		let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();
		let root = form.element();

		assert_eq!(root.tag(), "form");
		assert!(root.has_class("dynamic-form"));
		assert!(root.has_attribute("novalidate"));
		let children = root.children();
		assert_eq!(children.len(), 3);
		assert!(children[0].has_class("form-header"));
		assert_eq!(children[0].query_by_tag("h3")[0].text_content(), "Survey");
		assert_eq!(children[0].query_by_tag("p")[0].text_content(), "Tell us more");
		assert!(children[2].ptr_eq(form.submit_button()));
		assert_eq!(form.submit_button().text_content(), "Submit Form");
		assert_eq!(form.submit_button().attribute("type").as_deref(), Some("submit"));
	}

	#[rstest]
	fn test_header_without_description(ctx: UiContext) {
		let form = FormRenderer::new(ctx).generate_form(&FormSpec::new("T")).unwrap();
		assert!(form.element().query_by_tag("p").is_empty());
	}

	#[rstest]
	fn test_submit_label_comes_from_settings() {
		let ctx = UiContext::headless(
			PagesSettings::default().with_submit_label("Send"),
			Rc::new(ManualScheduler::new()),
		);
		let form = FormRenderer::new(ctx).generate_form(&FormSpec::new("T")).unwrap();
		assert_eq!(form.submit_button().text_content(), "Send");
	}

	#[rstest]
	fn test_submit_prevents_default_and_reports_every_failure(ctx: UiContext) {
		let spec = FormSpec::new("T")
			.with_field(FieldSpec::new("a", FieldKind::Text, "A").required())
			.with_field(FieldSpec::new("b", FieldKind::Email, "B"))
			.with_field(FieldSpec::new("c", FieldKind::Text, "C").required());
		let received = Rc::new(RefCell::new(Vec::new()));
		let sink = received.clone();
		let form = FormRenderer::new(ctx)
			.with_submit_handler(move |data| sink.borrow_mut().push(data))
			.generate_form(&spec)
			.unwrap();

		form.field("b").unwrap().control().set_value("x");
		let event = Event::new(EventType::Submit);
		assert!(!form.element().dispatch_event(&event));

		let Some(SubmitOutcome::Rejected(errors)) = form.last_outcome() else {
			panic!("expected a rejected submission");
		};
		let rules: Vec<RuleName> = errors.errors().iter().map(|e| e.rule).collect();
		assert_eq!(rules, [RuleName::Required, RuleName::Email, RuleName::Required]);
		assert_eq!(form.field("c").unwrap().error_message().as_deref(), Some("C is required"));
		assert!(received.borrow().is_empty());
	}

	#[rstest]
	fn test_valid_submit_reaches_handler_in_field_order(ctx: UiContext, project_type: FieldSpec) {
		let spec = FormSpec::new("T")
			.with_field(FieldSpec::new("name", FieldKind::Text, "Name").required())
			.with_field(project_type)
			.with_field(FieldSpec::new("notes", FieldKind::Textarea, "Notes"));
		let received = Rc::new(RefCell::new(None));
		let sink = received.clone();
		let form = FormRenderer::new(ctx)
			.with_submit_handler(move |data| *sink.borrow_mut() = Some(data))
			.generate_form(&spec)
			.unwrap();

		form.field("name").unwrap().control().set_value("Ada");
		form.field("projectType").unwrap().control().set_value("web");
		let outcome = form.submit().unwrap();

		let data = received.borrow().clone().unwrap();
		assert_eq!(outcome, SubmitOutcome::Submitted(data.clone()));
		let pairs: Vec<(&str, &str)> = data.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
		assert_eq!(pairs, [("name", "Ada"), ("projectType", "web"), ("notes", "")]);
	}

	#[rstest]
	fn test_unselected_optional_radio_is_left_out(ctx: UiContext) {
		let spec = FormSpec::new("T").with_field(
			FieldSpec::new("pick", FieldKind::Radio, "Pick")
				.with_options([ChoiceOption::new("a", "A")]),
		);
		let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();
		assert!(form.values().is_empty());
		assert_eq!(form.submit(), Some(SubmitOutcome::Submitted(SubmissionData::new())));
	}

	#[rstest]
	fn test_default_handler_notifies(ctx: UiContext) {
		let spec = FormSpec::new("T").with_field(FieldSpec::new("n", FieldKind::Text, "N"));
		let form = FormRenderer::new(ctx.clone()).generate_form(&spec).unwrap();

		assert!(form.submit().unwrap().is_submitted());
		let toast = ctx.notifier().current().unwrap();
		assert_eq!(toast.text_content(), "Form submitted successfully!");
	}

	#[rstest]
	fn test_unsupported_field_fails_whole_form(ctx: UiContext) {
		let spec = FormSpec::new("T")
			.with_field(FieldSpec::new("ok", FieldKind::Text, "Ok"))
			.with_field(FieldSpec::new("x", FieldKind::Unsupported("file".into()), "X"));
		let err = FormRenderer::new(ctx).generate_form(&spec).unwrap_err();
		assert_eq!(err.to_string(), "field 'x' has unsupported type 'file'");
	}
}
