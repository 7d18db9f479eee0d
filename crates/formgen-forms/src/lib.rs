//! Form schemas and validation for formgen
//!
//! This crate provides the platform-neutral half of formgen:
//! - The form schema model ([`FormSpec`], [`FieldSpec`], [`FieldKind`])
//!   read from JSON, with invariant checks
//! - The fixed validation rule registry ([`RuleRegistry`])
//! - Per-field validation ([`validate_value`]) and headless validation of a
//!   whole submission ([`FormSpec::clean`])
//!
//! Rendering and event wiring live in `formgen-pages`.

pub mod error;
pub mod rules;
pub mod schema;
pub mod validation;

pub use error::{SchemaError, SchemaResult};
pub use rules::{Rule, RuleName, RuleRegistry, UnknownRule};
pub use schema::{ChoiceOption, FieldKind, FieldSpec, FormSpec};
pub use validation::{FieldError, FieldResult, SubmissionData, ValidationErrors, validate_value};
