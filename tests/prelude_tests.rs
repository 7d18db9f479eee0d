//! Facade Integration Tests
//!
//! Tests that the facade exposes a working surface for both headless
//! validation and rendering.

use formgen::prelude::*;
use rstest::rstest;
use std::rc::Rc;

const CONTACT: &str = r#"{
	"formTitle": "Contact",
	"fields": [
		{"id": "email", "type": "email", "label": "Email", "required": true},
		{"id": "message", "type": "textarea", "label": "Message", "maxLength": 10}
	]
}"#;

/// Tests that a submission is re-checked headlessly with the same rules
#[rstest]
fn test_headless_clean_matches_rendered_validation() {
	let spec = FormSpec::from_json(CONTACT).unwrap();

	let mut data = SubmissionData::new();
	data.insert("email".to_string(), "not-an-email".to_string());
	data.insert("message".to_string(), "far too long".to_string());
	let errors = spec.clean(&data).unwrap_err();
	let rules: Vec<RuleName> = errors.errors().iter().map(|e| e.rule).collect();
	assert_eq!(rules, [RuleName::Email, RuleName::MaxLength]);

	let ctx = UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()));
	let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();
	for (id, value) in &data {
		form.field(id).unwrap().control().set_value(value);
	}
	let Some(SubmitOutcome::Rejected(rendered)) = form.submit() else {
		panic!("expected a rejected submission");
	};
	assert_eq!(rendered.messages(), errors.messages());
}

/// Tests that the schema model round-trips through the re-exported serde traits
#[rstest]
fn test_schema_serializes() {
	let spec = FormSpec::from_json(CONTACT).unwrap();
	let value = serde_json::to_value(&spec).unwrap();
	assert_eq!(value["fields"][1]["maxLength"], 10);
	assert!(value["fields"][1].get("options").is_none());
}
