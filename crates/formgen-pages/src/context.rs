//! UI context
//!
//! Bundles the host surfaces a rendered form talks to. Passing a
//! [`UiContext`] around replaces page-wide globals: a test can build as many
//! independent contexts as it needs.

use crate::config::PagesSettings;
use crate::dom::Element;
use crate::notification::Notifier;
use crate::timer::Scheduler;
use std::rc::Rc;

/// Host surfaces, notifier and settings shared by renderer and preview.
///
/// Cloning is cheap; clones share every handle.
#[derive(Clone, Debug)]
pub struct UiContext {
	mount: Element,
	error_surface: Element,
	notifier: Notifier,
	settings: Rc<PagesSettings>,
}

impl UiContext {
	/// Create a context from existing surfaces.
	///
	/// `layer` receives notifications; in a browser this is `document.body`.
	pub fn new(
		mount: Element,
		error_surface: Element,
		layer: Element,
		scheduler: Rc<dyn Scheduler>,
		settings: PagesSettings,
	) -> Self {
		let notifier = Notifier::new(layer, scheduler, settings.notification.clone());
		Self {
			mount,
			error_surface,
			notifier,
			settings: Rc::new(settings),
		}
	}

	/// Create a context over fresh, detached surfaces.
	///
	/// # Examples
	///
	/// ```
	/// use formgen_pages::{PagesSettings, UiContext};
	/// use formgen_pages::timer::ManualScheduler;
	/// use std::rc::Rc;
	///
	/// let ctx = UiContext::headless(PagesSettings::default(), Rc::new(ManualScheduler::new()));
	/// assert_eq!(ctx.mount().id().as_deref(), Some("formPreview"));
	/// assert!(ctx.mount().children().is_empty());
	/// ```
	pub fn headless(settings: PagesSettings, scheduler: Rc<dyn Scheduler>) -> Self {
		let mount = Element::new("div");
		mount.set_attribute("id", "formPreview");
		let error_surface = Element::new("div");
		error_surface.set_attribute("id", "jsonError");
		Self::new(mount, error_surface, Element::new("body"), scheduler, settings)
	}

	/// Element the form preview is rendered into
	pub fn mount(&self) -> &Element {
		&self.mount
	}

	/// Element schema errors are shown in
	pub fn error_surface(&self) -> &Element {
		&self.error_surface
	}

	/// Notification layer
	pub fn notifier(&self) -> &Notifier {
		&self.notifier
	}

	/// Settings in use
	pub fn settings(&self) -> &PagesSettings {
		&self.settings
	}
}
