//! Live schema preview
//!
//! [`SchemaPreview`] connects a schema text source to the preview mount of a
//! [`UiContext`]: each [`SchemaPreview::update`] parses the text, checks it,
//! renders it and swaps the result in. Nothing carries over between
//! updates; the previous form is discarded whole.

use crate::context::UiContext;
use crate::form::{FormRenderer, RenderError, RenderedForm, SubmitHandler};
use formgen_forms::{FormSpec, SchemaError, SubmissionData};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Schema the editor starts with.
pub const SAMPLE_SCHEMA: &str = r#"{
  "formTitle": "Professional Project Survey",
  "formDescription": "Help us understand your project requirements",
  "fields": [
    {
      "id": "fullName",
      "type": "text",
      "label": "Full Name",
      "required": true,
      "minLength": 2,
      "maxLength": 50,
      "placeholder": "Enter your full name"
    },
    {
      "id": "email",
      "type": "email",
      "label": "Corporate Email",
      "required": true,
      "placeholder": "your.name@company.com"
    },
    {
      "id": "companySize",
      "type": "select",
      "label": "Company Size",
      "required": true,
      "options": [
        {
          "value": "startup",
          "label": "Startup (1-50)"
        },
        {
          "value": "midsize",
          "label": "Mid-size (51-500)"
        },
        {
          "value": "enterprise",
          "label": "Enterprise (500+)"
        }
      ]
    },
    {
      "id": "projectType",
      "type": "radio",
      "label": "Project Type",
      "required": true,
      "options": [
        {
          "value": "web",
          "label": "Web Development"
        },
        {
          "value": "mobile",
          "label": "Mobile App"
        },
        {
          "value": "cloud",
          "label": "Cloud Solutions"
        },
        {
          "value": "other",
          "label": "Other"
        }
      ]
    },
    {
      "id": "projectDetails",
      "type": "textarea",
      "label": "Project Description",
      "required": false,
      "maxLength": 500,
      "placeholder": "Briefly describe your project requirements..."
    }
  ]
}"#;

/// The demo schema: a five-field survey using every field type.
pub fn sample_schema() -> &'static str {
	SAMPLE_SCHEMA
}

/// Why a preview update produced no form.
///
/// The `Display` text is what the error surface shows.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
	/// The text is not a schema document
	#[error("Invalid JSON: {0}")]
	Parse(#[source] SchemaError),

	/// The document breaks a schema invariant
	#[error("Invalid schema: {0}")]
	Schema(#[source] SchemaError),

	/// The schema could not be rendered
	#[error("Invalid schema: {0}")]
	Render(#[from] RenderError),
}

/// Renders schema text into the preview mount of a [`UiContext`].
///
/// # Examples
///
/// ```
/// use formgen_pages::preview::{SchemaPreview, sample_schema};
/// use formgen_pages::timer::ManualScheduler;
/// use formgen_pages::{PagesSettings, UiContext};
/// use std::rc::Rc;
///
/// let ctx = UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()));
/// let preview = SchemaPreview::new(ctx.clone());
///
/// preview.update(sample_schema()).unwrap();
/// assert_eq!(ctx.mount().query_by_class("form-group").len(), 5);
///
/// let err = preview.update(r#"{"formTitle": "T", "fields": [],}"#).unwrap_err();
/// assert!(err.to_string().starts_with("Invalid JSON: "));
/// assert!(ctx.mount().children().is_empty());
/// ```
pub struct SchemaPreview {
	ctx: UiContext,
	on_submit: Option<SubmitHandler>,
	current: RefCell<Option<RenderedForm>>,
}

impl SchemaPreview {
	/// Create a preview over a context
	pub fn new(ctx: UiContext) -> Self {
		Self {
			ctx,
			on_submit: None,
			current: RefCell::new(None),
		}
	}

	/// Use a custom submission handler for every rendered form
	pub fn with_submit_handler<F>(mut self, handler: F) -> Self
	where
		F: Fn(SubmissionData) + 'static,
	{
		self.on_submit = Some(Rc::new(handler));
		self
	}

	/// Context in use
	pub fn context(&self) -> &UiContext {
		&self.ctx
	}

	/// Re-render from schema text.
	///
	/// On success the error surface is cleared and the new form replaces
	/// the preview content. On failure the error surface shows the error
	/// and the preview is left empty.
	pub fn update(&self, text: &str) -> Result<(), PreviewError> {
		let mount = self.ctx.mount();
		let error_surface = self.ctx.error_surface();

		match self.render(text) {
			Ok(form) => {
				error_surface.set_text_content("");
				mount.clear_children();
				mount.append_child(form.element());
				crate::debug_log!("preview shows {} field(s)", form.fields().len());
				self.current.replace(Some(form));
				Ok(())
			}
			Err(err) => {
				crate::warn_log!("preview update failed: {}", err);
				error_surface.set_text_content(&err.to_string());
				mount.clear_children();
				self.current.replace(None);
				Err(err)
			}
		}
	}

	/// Form currently shown, if the last update succeeded
	pub fn current(&self) -> Option<Ref<'_, RenderedForm>> {
		Ref::filter_map(self.current.borrow(), Option::as_ref).ok()
	}

	fn render(&self, text: &str) -> Result<RenderedForm, PreviewError> {
		let spec = FormSpec::parse(text).map_err(PreviewError::Parse)?;
		spec.check().map_err(PreviewError::Schema)?;

		let mut renderer = FormRenderer::new(self.ctx.clone());
		if let Some(handler) = &self.on_submit {
			let handler = handler.clone();
			renderer = renderer.with_submit_handler(move |data| handler(data));
		}
		Ok(renderer.generate_form(&spec)?)
	}
}

impl std::fmt::Debug for SchemaPreview {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SchemaPreview")
			.field("current", &self.current.borrow())
			.finish()
	}
}
