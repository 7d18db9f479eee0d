//! # formgen
//!
//! Render HTML forms from JSON schemas, with declarative validation rules.
//!
//! A schema names a title, an optional description and an ordered list of
//! fields. Each field picks one of five control types (`text`, `email`,
//! `select`, `radio`, `textarea`) and may carry `required`, `minLength` and
//! `maxLength` constraints. The rendered form validates each field on blur,
//! re-validates everything on submit and only hands the values over when all
//! fields pass.
//!
//! ## Crates
//!
//! - [`forms`]: schema model, rule registry and field validation. Platform
//!   neutral and usable on a server to re-check submissions.
//! - [`pages`]: element tree, renderer, notifications and the browser entry
//!   point (feature `pages`, on by default).
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Rendering and browser integration
//! - `debug-hooks` - Verbose debug logging from the renderer
//! - `console_error_panic_hook` - Readable panics in the browser console
//!
//! ## Example
//!
//! ```
//! use formgen::prelude::*;
//!
//! let spec = FormSpec::from_json(
//!     r#"{"formTitle": "T", "fields": [{"id": "n", "type": "text", "label": "Name", "required": true}]}"#,
//! ).unwrap();
//!
//! let mut data = SubmissionData::new();
//! let errors = spec.clean(&data).unwrap_err();
//! assert_eq!(errors.get("n").unwrap().message, "Name is required");
//!
//! data.insert("n".to_string(), "Ada".to_string());
//! assert!(spec.clean(&data).is_ok());
//! ```

pub use formgen_forms as forms;

#[cfg(feature = "pages")]
pub use formgen_pages as pages;

// Re-export common external dependencies
pub use serde::{Deserialize, Serialize};

pub mod prelude {
	//! Commonly used types

	pub use formgen_forms::{
		ChoiceOption, FieldError, FieldKind, FieldSpec, FormSpec, RuleName, RuleRegistry,
		SchemaError, SubmissionData, ValidationErrors, validate_value,
	};

	#[cfg(feature = "pages")]
	pub use formgen_pages::{
		FormRenderer, NotificationSettings, PagesSettings, PreviewError, RenderError,
		RenderedForm, SchemaPreview, UiContext,
		form::{Control, RenderedField, SubmitOutcome, create_field, validate_field},
		timer::{ManualScheduler, Scheduler},
	};
}
