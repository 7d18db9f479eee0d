//! Transient notifications
//!
//! A [`Notifier`] shows at most one toast at a time in its layer element.
//! Each notification moves through [`NotificationPhase`]:
//!
//! ```text
//! Idle --notify--> Showing --(show delay) reveal--> Showing (.show)
//!      --(display) hide--> Hiding --(fade out) remove--> Idle
//! ```
//!
//! Requesting a new notification cancels the pending timer and removes the
//! current element at once. Every timer carries the generation it was
//! scheduled for, so a callback that belongs to a replaced notification
//! does nothing even if it already got queued.

use crate::builder::html::div;
use crate::config::NotificationSettings;
use crate::dom::Element;
use crate::timer::{Scheduler, TimerId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Lifecycle phase of the current notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
	/// Nothing shown
	Idle,
	/// Element inserted, revealed once it carries the `show` class
	Showing,
	/// Fading out, removed when the fade completes
	Hiding,
}

struct NotifierState {
	phase: NotificationPhase,
	generation: u64,
	element: Option<Element>,
	timer: Option<TimerId>,
}

struct NotifierInner {
	layer: Element,
	scheduler: Rc<dyn Scheduler>,
	timings: NotificationSettings,
	state: RefCell<NotifierState>,
}

/// Shows success notifications in a layer element.
///
/// Clones share the same state.
///
/// # Examples
///
/// ```
/// use formgen_pages::config::NotificationSettings;
/// use formgen_pages::dom::Element;
/// use formgen_pages::notification::{NotificationPhase, Notifier};
/// use formgen_pages::timer::ManualScheduler;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let body = Element::new("body");
/// let clock = Rc::new(ManualScheduler::new());
/// let notifier = Notifier::new(body.clone(), clock.clone(), NotificationSettings::default());
///
/// notifier.notify("Saved");
/// assert_eq!(body.query_by_class("notification").len(), 1);
///
/// clock.advance(Duration::from_millis(3310));
/// assert_eq!(notifier.phase(), NotificationPhase::Idle);
/// assert!(body.children().is_empty());
/// ```
#[derive(Clone)]
pub struct Notifier {
	inner: Rc<NotifierInner>,
}

type Step = fn(&Notifier, u64);

impl Notifier {
	/// Create a notifier that appends notifications to `layer`
	pub fn new(
		layer: Element,
		scheduler: Rc<dyn Scheduler>,
		timings: NotificationSettings,
	) -> Self {
		Self {
			inner: Rc::new(NotifierInner {
				layer,
				scheduler,
				timings,
				state: RefCell::new(NotifierState {
					phase: NotificationPhase::Idle,
					generation: 0,
					element: None,
					timer: None,
				}),
			}),
		}
	}

	/// Show a success notification, replacing any current one
	pub fn notify(&self, message: &str) {
		let generation = self.reset();

		let element = div().class("notification success").text(message).build();
		self.inner.layer.append_child(&element);
		{
			let mut state = self.inner.state.borrow_mut();
			state.element = Some(element);
			state.phase = NotificationPhase::Showing;
		}
		crate::debug_log!("notification {} requested", generation);

		self.schedule(self.inner.timings.show_delay(), generation, Self::reveal);
	}

	/// Remove the current notification immediately
	pub fn dismiss(&self) {
		self.reset();
	}

	/// Current phase
	pub fn phase(&self) -> NotificationPhase {
		self.inner.state.borrow().phase
	}

	/// Element of the current notification, if any
	pub fn current(&self) -> Option<Element> {
		self.inner.state.borrow().element.clone()
	}

	/// Element notifications are appended to
	pub fn layer(&self) -> &Element {
		&self.inner.layer
	}

	/// Timings in use
	pub fn timings(&self) -> &NotificationSettings {
		&self.inner.timings
	}

	/// Cancel the pending timer, drop the current element and start a new
	/// generation.
	fn reset(&self) -> u64 {
		let (timer, element, generation) = {
			let mut state = self.inner.state.borrow_mut();
			state.generation += 1;
			state.phase = NotificationPhase::Idle;
			(state.timer.take(), state.element.take(), state.generation)
		};
		if let Some(timer) = timer {
			self.inner.scheduler.cancel(timer);
		}
		if let Some(element) = element {
			element.remove();
		}
		generation
	}

	fn schedule(&self, delay: Duration, generation: u64, step: Step) {
		let weak: Weak<NotifierInner> = Rc::downgrade(&self.inner);
		let timer = self.inner.scheduler.schedule(
			delay,
			Box::new(move || {
				if let Some(inner) = weak.upgrade() {
					step(&Notifier { inner }, generation);
				}
			}),
		);
		self.inner.state.borrow_mut().timer = Some(timer);
	}

	/// Take the element of the given generation, clearing the fired timer.
	/// `None` for stale callbacks.
	fn claim(&self, generation: u64) -> Option<Element> {
		let mut state = self.inner.state.borrow_mut();
		if state.generation != generation {
			return None;
		}
		state.timer = None;
		state.element.clone()
	}

	fn reveal(&self, generation: u64) {
		let Some(element) = self.claim(generation) else {
			return;
		};
		element.add_class("show");
		self.schedule(self.inner.timings.display(), generation, Self::hide);
	}

	fn hide(&self, generation: u64) {
		let Some(element) = self.claim(generation) else {
			return;
		};
		element.remove_class("show");
		self.inner.state.borrow_mut().phase = NotificationPhase::Hiding;
		self.schedule(self.inner.timings.fade_out(), generation, Self::finish);
	}

	fn finish(&self, generation: u64) {
		let Some(element) = self.claim(generation) else {
			return;
		};
		element.remove();
		let mut state = self.inner.state.borrow_mut();
		state.element = None;
		state.phase = NotificationPhase::Idle;
	}
}

impl std::fmt::Debug for Notifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.inner.state.borrow();
		f.debug_struct("Notifier")
			.field("phase", &state.phase)
			.field("generation", &state.generation)
			.finish()
	}
}
