//! Form schema model
//!
//! A [`FormSpec`] is the declarative description of a whole form, read from
//! JSON text such as:
//!
//! ```json
//! {
//!   "formTitle": "Contact",
//!   "formDescription": "We reply within a day",
//!   "fields": [
//!     { "id": "name", "type": "text", "label": "Name", "required": true, "minLength": 2 },
//!     { "id": "topic", "type": "select", "label": "Topic",
//!       "options": [{ "value": "sales", "label": "Sales" }] }
//!   ]
//! }
//! ```
//!
//! Parsing only checks the shape of the document. [`FormSpec::check`]
//! enforces the invariants the renderer relies on (unique ids, options
//! exactly where a choice is offered, supported types, sane length bounds).
//! [`FormSpec::from_json`] does both.

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kind of input control a field renders as.
///
/// Unknown type names are kept as [`FieldKind::Unsupported`] so they can be
/// reported with the offending field instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
	/// Single-line text input
	Text,
	/// Single-line email input
	Email,
	/// Drop-down choice
	Select,
	/// Mutually exclusive radio group
	Radio,
	/// Multi-line text input
	Textarea,
	/// A type name that is not supported
	Unsupported(String),
}

impl FieldKind {
	/// Schema spelling of the kind.
	pub fn as_str(&self) -> &str {
		match self {
			FieldKind::Text => "text",
			FieldKind::Email => "email",
			FieldKind::Select => "select",
			FieldKind::Radio => "radio",
			FieldKind::Textarea => "textarea",
			FieldKind::Unsupported(raw) => raw,
		}
	}

	/// Returns `true` for kinds that offer a fixed set of options.
	pub fn is_choice(&self) -> bool {
		matches!(self, FieldKind::Select | FieldKind::Radio)
	}

	/// Returns `true` unless the kind is [`FieldKind::Unsupported`].
	pub fn is_supported(&self) -> bool {
		!matches!(self, FieldKind::Unsupported(_))
	}
}

impl From<String> for FieldKind {
	fn from(raw: String) -> Self {
		match raw.as_str() {
			"text" => FieldKind::Text,
			"email" => FieldKind::Email,
			"select" => FieldKind::Select,
			"radio" => FieldKind::Radio,
			"textarea" => FieldKind::Textarea,
			_ => FieldKind::Unsupported(raw),
		}
	}
}

impl From<FieldKind> for String {
	fn from(kind: FieldKind) -> Self {
		match kind {
			FieldKind::Unsupported(raw) => raw,
			other => other.as_str().to_string(),
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One entry of a `select` or `radio` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
	/// Submitted value
	pub value: String,
	/// Displayed text
	pub label: String,
}

impl ChoiceOption {
	/// Create a new option
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Declarative description of one form control and its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
	/// Identifier, unique within a form
	pub id: String,
	/// Control kind
	#[serde(rename = "type")]
	pub kind: FieldKind,
	/// Human-readable label
	pub label: String,
	/// Whether a non-blank value is required
	#[serde(default, deserialize_with = "null_as_false")]
	pub required: bool,
	/// Placeholder text for text-like controls
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder: Option<String>,
	/// Minimum length in characters
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,
	/// Maximum length in characters
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,
	/// Options for `select` and `radio` fields
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<ChoiceOption>>,
}

impl FieldSpec {
	/// Create a new optional field
	///
	/// # Examples
	///
	/// ```
	/// use formgen_forms::{FieldKind, FieldSpec};
	///
	/// let field = FieldSpec::new("name", FieldKind::Text, "Name").required();
	/// assert_eq!(field.id, "name");
	/// assert!(field.required);
	/// ```
	pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			kind,
			label: label.into(),
			required: false,
			placeholder: None,
			min_length: None,
			max_length: None,
			options: None,
		}
	}

	/// Mark the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the placeholder text
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Set the minimum length
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the maximum length
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the options of a choice field
	pub fn with_options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
		self.options = Some(options.into_iter().collect());
		self
	}

	/// Minimum length that takes effect. Zero means no bound.
	pub fn min_bound(&self) -> Option<usize> {
		self.min_length.filter(|n| *n > 0)
	}

	/// Maximum length that takes effect. Zero means no bound.
	pub fn max_bound(&self) -> Option<usize> {
		self.max_length.filter(|n| *n > 0)
	}

	/// Options as a slice, empty when none were given.
	pub fn options(&self) -> &[ChoiceOption] {
		self.options.as_deref().unwrap_or_default()
	}

	/// Check the per-field invariants.
	pub fn check(&self) -> SchemaResult<()> {
		if let FieldKind::Unsupported(raw) = &self.kind {
			return Err(SchemaError::UnsupportedFieldType {
				id: self.id.clone(),
				kind: raw.clone(),
			});
		}

		if self.kind.is_choice() {
			if self.options().is_empty() {
				return Err(SchemaError::MissingOptions {
					id: self.id.clone(),
					kind: self.kind.to_string(),
				});
			}
		} else if self.options.is_some() {
			return Err(SchemaError::UnexpectedOptions {
				id: self.id.clone(),
				kind: self.kind.to_string(),
			});
		}

		if let (Some(min), Some(max)) = (self.min_bound(), self.max_bound())
			&& min > max
		{
			return Err(SchemaError::InvalidLengthBounds {
				id: self.id.clone(),
				min,
				max,
			});
		}

		Ok(())
	}
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Declarative description of an entire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
	/// Heading shown above the fields
	pub form_title: String,
	/// Optional text shown under the heading
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub form_description: Option<String>,
	/// Fields in render order
	pub fields: Vec<FieldSpec>,
}

impl FormSpec {
	/// Create an empty form with a title
	pub fn new(form_title: impl Into<String>) -> Self {
		Self {
			form_title: form_title.into(),
			form_description: None,
			fields: Vec::new(),
		}
	}

	/// Set the description
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.form_description = Some(description.into());
		self
	}

	/// Append a field
	pub fn with_field(mut self, field: FieldSpec) -> Self {
		self.fields.push(field);
		self
	}

	/// Parse schema text without checking invariants.
	pub fn parse(text: &str) -> SchemaResult<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Parse schema text and check every invariant.
	///
	/// # Examples
	///
	/// ```
	/// use formgen_forms::FormSpec;
	///
	/// let spec = FormSpec::from_json(
	///     r#"{"formTitle": "T", "fields": [{"id": "n", "type": "text", "label": "Name"}]}"#,
	/// ).unwrap();
	/// assert_eq!(spec.fields.len(), 1);
	///
	/// assert!(FormSpec::from_json(r#"{"formTitle": "T", "fields": [],}"#).is_err());
	/// ```
	pub fn from_json(text: &str) -> SchemaResult<Self> {
		let spec = Self::parse(text)?;
		spec.check()?;
		Ok(spec)
	}

	/// Check the form-level and per-field invariants, failing on the first
	/// violation in field order.
	pub fn check(&self) -> SchemaResult<()> {
		let mut seen = HashSet::with_capacity(self.fields.len());
		for field in &self.fields {
			if !seen.insert(field.id.as_str()) {
				tracing::debug!(field = %field.id, "rejecting schema with duplicate field id");
				return Err(SchemaError::DuplicateFieldId {
					id: field.id.clone(),
				});
			}
			if let Err(err) = field.check() {
				tracing::debug!(field = %field.id, error = %err, "rejecting schema");
				return Err(err);
			}
		}
		Ok(())
	}

	/// Look up a field by id
	pub fn field(&self, id: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|field| field.id == id)
	}
}
