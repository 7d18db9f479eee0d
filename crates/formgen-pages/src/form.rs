//! Schema-driven form rendering
//!
//! Turns a [`FormSpec`](formgen_forms::FormSpec) into an element tree with
//! inline validation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐          ┌──────────────┐
//! │ FormSpec │─────────▶│ FormRenderer │──▶ <form class="dynamic-form">
//! └──────────┘          │  create_field│      ├─ div.form-header
//!                       │  validate_   │      ├─ div.form-group × n
//!                       │   field      │      └─ button.submit-button
//!                       └──────┬───────┘
//!                              │ submit, all fields valid
//!                              ▼
//!                       SubmitHandler(SubmissionData)
//!                              │ default
//!                              ▼
//!                       handle_submit ──▶ Notifier
//! ```
//!
//! Each field validates itself on blur and writes its first failure into
//! its own error slot. Submitting re-validates every field and only hands
//! the collected values over when all of them pass.

pub mod component;
pub mod submission;

pub use component::{
	Control, FormRenderer, RenderedField, RenderedForm, SubmitOutcome, create_field,
	validate_field,
};
pub use submission::{SubmitHandler, handle_submit};

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
	/// The field type has no control constructor
	#[error("field '{id}' has unsupported type '{kind}'")]
	UnsupportedFieldType {
		/// Field id
		id: String,
		/// Type name as written in the schema
		kind: String,
	},

	/// A choice field has nothing to choose from
	#[error("field '{id}' of type '{kind}' requires at least one option")]
	MissingOptions {
		/// Field id
		id: String,
		/// Type name
		kind: String,
	},
}

/// Result type for rendering
pub type RenderResult<T> = Result<T, RenderError>;
