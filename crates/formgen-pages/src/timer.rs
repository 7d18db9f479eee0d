//! One-shot timers
//!
//! [`Scheduler`] is the seam between timed UI behaviour and the clock.
//! [`ManualScheduler`] runs on a virtual clock that only moves when told to,
//! which keeps notification timing deterministic off the browser. On
//! `wasm32`, [`BrowserScheduler`] is backed by `gloo-timers`.

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

/// Identifier of a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Callback run when a timer fires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Schedules one-shot callbacks.
pub trait Scheduler {
	/// Run `callback` once after `delay`.
	fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId;

	/// Cancel a timer. Unknown or already fired ids are ignored.
	fn cancel(&self, id: TimerId);
}

struct Pending {
	id: TimerId,
	deadline: Duration,
	callback: TimerCallback,
}

#[derive(Default)]
struct ManualState {
	now: Duration,
	next_id: u64,
	pending: Vec<Pending>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// # Examples
///
/// ```
/// use formgen_pages::timer::{ManualScheduler, Scheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// scheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(9));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct ManualScheduler {
	state: RefCell<ManualState>,
}

impl ManualScheduler {
	/// Create a scheduler at time zero
	pub fn new() -> Self {
		Self::default()
	}

	/// Current virtual time
	pub fn now(&self) -> Duration {
		self.state.borrow().now
	}

	/// Number of timers not yet fired
	pub fn pending(&self) -> usize {
		self.state.borrow().pending.len()
	}

	/// Move the clock forward, firing every timer that comes due.
	///
	/// Timers fire in deadline order, ties in scheduling order. Timers
	/// scheduled by a callback fire within the same call if they come due
	/// before the new time.
	pub fn advance(&self, by: Duration) {
		let target = self.now() + by;
		loop {
			let due = {
				let mut state = self.state.borrow_mut();
				let next = state
					.pending
					.iter()
					.enumerate()
					.filter(|(_, timer)| timer.deadline <= target)
					.min_by_key(|(_, timer)| (timer.deadline, timer.id))
					.map(|(index, _)| index);
				match next {
					Some(index) => {
						let timer = state.pending.remove(index);
						state.now = timer.deadline;
						timer
					}
					None => {
						state.now = target;
						break;
					}
				}
			};
			(due.callback)();
		}
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
		let mut state = self.state.borrow_mut();
		let id = TimerId(state.next_id);
		state.next_id += 1;
		let deadline = state.now + delay;
		state.pending.push(Pending {
			id,
			deadline,
			callback,
		});
		id
	}

	fn cancel(&self, id: TimerId) {
		self.state.borrow_mut().pending.retain(|timer| timer.id != id);
	}
}

impl fmt::Debug for ManualScheduler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("ManualScheduler")
			.field("now", &state.now)
			.field("pending", &state.pending.len())
			.finish()
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{Scheduler, TimerCallback, TimerId};
	use gloo_timers::callback::Timeout;
	use std::cell::RefCell;
	use std::collections::HashMap;
	use std::rc::Rc;
	use std::time::Duration;

	#[derive(Default)]
	struct BrowserState {
		next_id: u64,
		timeouts: HashMap<TimerId, Timeout>,
		// Fired timeouts whose closures may still be on the stack.
		fired: Vec<TimerId>,
	}

	/// Scheduler backed by `setTimeout`.
	///
	/// Cancelling drops the underlying [`Timeout`], which clears it.
	#[derive(Clone, Default)]
	pub struct BrowserScheduler {
		state: Rc<RefCell<BrowserState>>,
	}

	impl BrowserScheduler {
		/// Create a new scheduler
		pub fn new() -> Self {
			Self::default()
		}
	}

	impl Scheduler for BrowserScheduler {
		fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
			let id = {
				let mut state = self.state.borrow_mut();
				let id = TimerId(state.next_id);
				state.next_id += 1;
				id
			};

			let state = Rc::downgrade(&self.state);
			let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
			let timeout = Timeout::new(millis, move || {
				if let Some(state) = state.upgrade() {
					let stale: Vec<Timeout> = {
						let mut state = state.borrow_mut();
						let fired = std::mem::take(&mut state.fired);
						let stale = fired
							.iter()
							.filter_map(|fired| state.timeouts.remove(fired))
							.collect();
						state.fired.push(id);
						stale
					};
					drop(stale);
				}
				callback();
			});

			self.state.borrow_mut().timeouts.insert(id, timeout);
			id
		}

		fn cancel(&self, id: TimerId) {
			let removed = {
				let mut state = self.state.borrow_mut();
				if state.fired.contains(&id) {
					None
				} else {
					state.timeouts.remove(&id)
				}
			};
			drop(removed);
		}
	}
}
