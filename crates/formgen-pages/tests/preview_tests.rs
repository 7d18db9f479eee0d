//! Schema Preview Integration Tests
//!
//! Tests for re-rendering the preview from schema text and surfacing schema
//! problems on the error surface.

use formgen_forms::FormSpec;
use formgen_pages::preview::{PreviewError, SchemaPreview, sample_schema};
use formgen_pages::timer::ManualScheduler;
use formgen_pages::{PagesSettings, UiContext};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;

#[fixture]
fn ctx() -> UiContext {
	UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()))
}

/// Tests that the sample schema is valid and uses every field type
#[rstest]
fn test_sample_schema_is_valid() {
	let spec = FormSpec::from_json(sample_schema()).unwrap();
	assert_eq!(spec.form_title, "Professional Project Survey");
	let kinds: Vec<&str> = spec.fields.iter().map(|f| f.kind.as_str()).collect();
	assert_eq!(kinds, ["text", "email", "select", "radio", "textarea"]);
	assert_eq!(spec.field("projectType").unwrap().options().len(), 4);
}

/// Tests that a successful update mounts the form and clears the error line
#[rstest]
fn test_update_mounts_form(ctx: UiContext) {
	let preview = SchemaPreview::new(ctx.clone());
	ctx.error_surface().set_text_content("stale");

	preview.update(sample_schema()).unwrap();

	assert_eq!(ctx.error_surface().text_content(), "");
	let children = ctx.mount().children();
	assert_eq!(children.len(), 1);
	assert!(children[0].has_class("dynamic-form"));
	assert!(children[0].ptr_eq(preview.current().unwrap().element()));
}

/// Tests that malformed JSON empties the preview and shows a parse error
#[rstest]
#[case(r#"{"formTitle": "T", "fields": [],}"#)]
#[case(r#"{"formTitle": "T", "fields": ["#)]
#[case("not json")]
fn test_malformed_json(ctx: UiContext, #[case] text: &str) {
	let preview = SchemaPreview::new(ctx.clone());
	preview.update(sample_schema()).unwrap();

	let err = preview.update(text).unwrap_err();
	assert!(matches!(err, PreviewError::Parse(_)));
	assert!(ctx.mount().children().is_empty());
	assert!(preview.current().is_none());
	assert!(ctx.error_surface().text_content().starts_with("Invalid JSON: "));
}

/// Tests that schema invariant violations are reported as schema errors
#[rstest]
#[case(
	r#"{"formTitle": "T", "fields": [{"id": "a", "type": "checkbox", "label": "A"}]}"#,
	"Invalid schema: field 'a' has unsupported type 'checkbox'"
)]
#[case(
	r#"{"formTitle": "T", "fields": [{"id": "s", "type": "select", "label": "S", "options": []}]}"#,
	"Invalid schema: field 's' of type 'select' requires at least one option"
)]
#[case(
	r#"{"formTitle": "T", "fields": [
		{"id": "a", "type": "text", "label": "A"},
		{"id": "a", "type": "email", "label": "B"}
	]}"#,
	"Invalid schema: duplicate field id 'a'"
)]
fn test_schema_errors(ctx: UiContext, #[case] text: &str, #[case] shown: &str) {
	let preview = SchemaPreview::new(ctx.clone());
	let err = preview.update(text).unwrap_err();

	assert!(matches!(err, PreviewError::Schema(_)));
	assert_eq!(ctx.error_surface().text_content(), shown);
	assert!(ctx.mount().children().is_empty());
}

/// Tests that each update replaces the previous form entirely
#[rstest]
fn test_update_replaces_previous_form(ctx: UiContext) {
	let preview = SchemaPreview::new(ctx.clone());
	preview.update(sample_schema()).unwrap();
	let old = preview.current().unwrap().element().clone();

	preview
		.update(r#"{"formTitle": "Short", "fields": [{"id": "n", "type": "text", "label": "N"}]}"#)
		.unwrap();

	assert!(old.parent().is_none());
	assert_eq!(ctx.mount().children().len(), 1);
	assert_eq!(ctx.mount().query_by_class("form-group").len(), 1);
	assert_eq!(ctx.mount().query_by_tag("h3")[0].text_content(), "Short");
}

/// Tests that recovering from an error clears the error surface
#[rstest]
fn test_recovery_after_error(ctx: UiContext) {
	let preview = SchemaPreview::new(ctx.clone());
	assert!(preview.update("{").is_err());
	assert!(!ctx.error_surface().text_content().is_empty());

	preview.update(sample_schema()).unwrap();
	assert_eq!(ctx.error_surface().text_content(), "");
	assert!(preview.current().is_some());
}

/// Tests that a custom handler is used by every form the preview renders
#[rstest]
fn test_custom_handler_survives_updates(ctx: UiContext) {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = seen.clone();
	let preview = SchemaPreview::new(ctx.clone())
		.with_submit_handler(move |data| sink.borrow_mut().push(data.len()));

	preview.update(r#"{"formTitle": "A", "fields": []}"#).unwrap();
	preview.current().unwrap().submit();
	preview
		.update(r#"{"formTitle": "B", "fields": [{"id": "n", "type": "text", "label": "N"}]}"#)
		.unwrap();
	preview.current().unwrap().submit();

	assert_eq!(*seen.borrow(), [0, 1]);
	assert!(ctx.notifier().current().is_none());
}
