//! formgen Pages - schema-driven forms for the browser
//!
//! Renders a [`FormSpec`](formgen_forms::FormSpec) as an HTML form with
//! inline validation, submission handling and a transient success
//! notification.
//!
//! ## Architecture
//!
//! - [`dom`]: Element tree, bound to real DOM nodes on `wasm32`
//! - [`builder`]: HTML element builder API
//! - [`form`](mod@form): Field and form rendering, validation wiring, submission
//! - [`notification`]: Notification state machine
//! - [`timer`]: One-shot timers behind the [`Scheduler`](timer::Scheduler) trait
//! - [`context`]: Host surfaces and settings passed to the renderer
//! - [`config`]: Settings, loadable from TOML
//! - [`preview`]: Live re-rendering of schema text
//! - `launcher`: `wasm-bindgen` entry point (`wasm32` only)
//!
//! Everything except the launcher runs natively against the in-memory tree.
//!
//! ## Example
//!
//! ```
//! use formgen_forms::FormSpec;
//! use formgen_pages::form::{FormRenderer, SubmitOutcome};
//! use formgen_pages::timer::ManualScheduler;
//! use formgen_pages::{PagesSettings, UiContext};
//! use std::rc::Rc;
//!
//! let ctx = UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()));
//! let spec = FormSpec::from_json(
//!     r#"{"formTitle": "Contact", "fields": [{"id": "email", "type": "email", "label": "Email"}]}"#,
//! ).unwrap();
//!
//! let form = FormRenderer::new(ctx).generate_form(&spec).unwrap();
//! form.field("email").unwrap().control().set_value("ada@example.com");
//! assert!(matches!(form.submit(), Some(SubmitOutcome::Submitted(_))));
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod context;
pub mod dom;
pub mod form;
#[cfg(target_arch = "wasm32")]
pub mod launcher;
pub mod logging;
pub mod notification;
pub mod preview;
pub mod timer;

pub use config::{NotificationSettings, PagesSettings, SettingsError};
pub use context::UiContext;
pub use form::{FormRenderer, RenderError, RenderResult, RenderedForm};
pub use notification::{NotificationPhase, Notifier};
pub use preview::{PreviewError, SchemaPreview};

#[doc(hidden)]
pub use tracing as __tracing;

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use web_sys as __web_sys;
