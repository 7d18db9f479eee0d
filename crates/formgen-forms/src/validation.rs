//! Field validation
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `required`, when the field is required
//! 2. `email`, for email fields with a non-empty value
//! 3. `minLength`, when set and the value is non-empty
//! 4. `maxLength`, when set and the value is non-empty
//!
//! Only `required` governs emptiness: an optional field left empty is never
//! penalized by the format or length rules.

use crate::rules::{RuleName, RuleRegistry};
use crate::schema::{FieldKind, FieldSpec, FormSpec};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Field id to current value, in field order.
pub type SubmissionData = IndexMap<String, String>;

/// A failed rule for one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
	/// Id of the failing field
	pub field: String,
	/// Rule that failed
	pub rule: RuleName,
	/// User-facing message
	pub message: String,
}

/// Result type for a single field check.
pub type FieldResult = Result<(), FieldError>;

/// Every failing field of a submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
	errors: Vec<FieldError>,
}

impl ValidationErrors {
	/// Errors in field order
	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	/// Error for a field, if it failed
	pub fn get(&self, field: &str) -> Option<&FieldError> {
		self.errors.iter().find(|err| err.field == field)
	}

	/// Number of failing fields
	pub fn len(&self) -> usize {
		self.errors.len()
	}

	/// Returns `true` if no field failed
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	/// Field id to message map, as shown next to each field.
	pub fn messages(&self) -> HashMap<String, String> {
		self.errors
			.iter()
			.map(|err| (err.field.clone(), err.message.clone()))
			.collect()
	}
}

impl FromIterator<FieldError> for ValidationErrors {
	fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
		Self {
			errors: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for ValidationErrors {
	type Item = FieldError;
	type IntoIter = std::vec::IntoIter<FieldError>;

	fn into_iter(self) -> Self::IntoIter {
		self.errors.into_iter()
	}
}

/// Validate a value against a field's constraints.
///
/// # Examples
///
/// ```
/// use formgen_forms::{FieldKind, FieldSpec, validate_value};
///
/// let name = FieldSpec::new("n", FieldKind::Text, "Name").required();
/// let err = validate_value(&name, "  ").unwrap_err();
/// assert_eq!(err.message, "Name is required");
/// assert!(validate_value(&name, "Ada").is_ok());
/// ```
pub fn validate_value(spec: &FieldSpec, value: &str) -> FieldResult {
	let registry = RuleRegistry::global();
	let mut checks: Vec<(RuleName, Option<usize>)> = Vec::with_capacity(4);

	if spec.required {
		checks.push((RuleName::Required, None));
	}
	if !value.is_empty() {
		if spec.kind == FieldKind::Email {
			checks.push((RuleName::Email, None));
		}
		if let Some(min) = spec.min_bound() {
			checks.push((RuleName::MinLength, Some(min)));
		}
		if let Some(max) = spec.max_bound() {
			checks.push((RuleName::MaxLength, Some(max)));
		}
	}

	for (name, param) in checks {
		let rule = registry.get(name);
		if !rule.validate(value, param) {
			return Err(FieldError {
				field: spec.id.clone(),
				rule: name,
				message: rule.message(&spec.label, param),
			});
		}
	}

	Ok(())
}

impl FormSpec {
	/// Validate a whole submission against every field.
	///
	/// Missing entries count as empty values. On success the returned data
	/// holds one entry per field, in field order; keys that match no field
	/// are dropped.
	///
	/// # Examples
	///
	/// ```
	/// use formgen_forms::{FieldKind, FieldSpec, FormSpec, SubmissionData};
	///
	/// let spec = FormSpec::new("T")
	///     .with_field(FieldSpec::new("n", FieldKind::Text, "Name").required());
	///
	/// let mut data = SubmissionData::new();
	/// assert_eq!(spec.clean(&data).unwrap_err().len(), 1);
	///
	/// data.insert("n".to_string(), "Ada".to_string());
	/// assert_eq!(spec.clean(&data).unwrap()["n"], "Ada");
	/// ```
	pub fn clean(&self, data: &SubmissionData) -> Result<SubmissionData, ValidationErrors> {
		let mut cleaned = SubmissionData::with_capacity(self.fields.len());
		let mut failures = Vec::new();

		for field in &self.fields {
			let value = data.get(&field.id).map(String::as_str).unwrap_or_default();
			match validate_value(field, value) {
				Ok(()) => {
					cleaned.insert(field.id.clone(), value.to_string());
				}
				Err(err) => failures.push(err),
			}
		}
		let errors: ValidationErrors = failures.into_iter().collect();

		if errors.is_empty() {
			Ok(cleaned)
		} else {
			Err(errors)
		}
	}
}
