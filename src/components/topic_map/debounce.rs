use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::warn;

/// One-shot timer the debouncer schedules on.
pub trait Timer {
	type Handle: Copy + 'static;

	fn start(&self, task: Box<dyn FnOnce()>, delay: Duration) -> Option<Self::Handle>;
	fn clear(&self, handle: Self::Handle);
}

/// `setTimeout` on the window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
	type Handle = TimeoutHandle;

	fn start(&self, task: Box<dyn FnOnce()>, delay: Duration) -> Option<TimeoutHandle> {
		set_timeout_with_handle(task, delay)
			.inspect_err(|e| warn!("could not schedule timer: {e:?}"))
			.ok()
	}

	fn clear(&self, handle: TimeoutHandle) {
		handle.clear();
	}
}

/// Runs only the last scheduled task once `delay` has passed without a newer
/// one. At most one timer is pending at a time.
pub struct Debouncer<T: Timer = BrowserTimer> {
	delay: Duration,
	timer: Rc<T>,
	pending: Rc<Cell<Option<T::Handle>>>,
}

impl<T: Timer> Clone for Debouncer<T> {
	fn clone(&self) -> Self {
		Self {
			delay: self.delay,
			timer: self.timer.clone(),
			pending: self.pending.clone(),
		}
	}
}

impl Debouncer<BrowserTimer> {
	pub fn new(delay: Duration) -> Self {
		Self::with_timer(delay, BrowserTimer)
	}
}

impl<T: Timer> Debouncer<T> {
	pub fn with_timer(delay: Duration, timer: T) -> Self {
		Self {
			delay,
			timer: Rc::new(timer),
			pending: Rc::new(Cell::new(None)),
		}
	}

	pub fn schedule(&self, task: impl FnOnce() + 'static) {
		self.cancel();
		let pending = self.pending.clone();
		let handle = self.timer.start(
			Box::new(move || {
				pending.set(None);
				task();
			}),
			self.delay,
		);
		self.pending.set(handle);
	}

	pub fn cancel(&self) {
		if let Some(handle) = self.pending.take() {
			self.timer.clear(handle);
		}
	}

	#[cfg(test)]
	fn is_pending(&self) -> bool {
		self.pending.get().is_some()
	}
}
