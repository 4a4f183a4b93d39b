//! In-memory window double for tests and headless runs.

use crate::event::ClickEvent;
use crate::location::Location;
use crate::window::{ClickListener, ListenerId, PopStateListener, Window};
use crate::DomError;
use futures::future::BoxFuture;
use parking_lot::Mutex;

struct WindowState {
	location: Location,
	/// History stack; the last entry is the current url.
	history: Vec<String>,
	popstate: Vec<(ListenerId, PopStateListener)>,
	clicks: Vec<(ListenerId, ClickListener)>,
	next_listener: u64,
}

/// A [`Window`] backed by plain memory.
///
/// Navigation mutates an internal [`Location`] and a history stack,
/// so tests can drive clicks and popstate without a browser.
pub struct FakeWindow {
	state: Mutex<WindowState>,
}

impl FakeWindow {
	/// A window at `https://localhost/`.
	pub fn new() -> Self {
		Self::at("/")
	}

	/// A window whose location starts at `url` (relative).
	pub fn at(url: &str) -> Self {
		let mut location = Location::default();
		location.apply_relative_url(url);
		let entry = location.relative_url();
		Self {
			state: Mutex::new(WindowState {
				location,
				history: vec![entry],
				popstate: Vec::new(),
				clicks: Vec::new(),
				next_listener: 0,
			}),
		}
	}

	/// Moves the location in place, replacing the current history entry.
	pub fn set_location(&self, url: &str) {
		let mut state = self.state.lock();
		state.location.apply_relative_url(url);
		let entry = state.location.relative_url();
		if let Some(top) = state.history.last_mut() {
			*top = entry;
		}
	}

	/// Urls pushed on top of the initial entry, oldest first.
	pub fn pushed_urls(&self) -> Vec<String> {
		let state = self.state.lock();
		state.history.iter().skip(1).cloned().collect()
	}

	/// Current depth of the history stack.
	pub fn history_len(&self) -> usize {
		self.state.lock().history.len()
	}

	/// Steps back one history entry and notifies popstate listeners,
	/// like the browser's back button. No-op at the initial entry.
	pub fn back(&self) {
		let listeners: Vec<PopStateListener> = {
			let mut state = self.state.lock();
			if state.history.len() < 2 {
				return;
			}
			state.history.pop();
			let entry = state
				.history
				.last()
				.cloned()
				.unwrap_or_else(|| "/".to_string());
			state.location.apply_relative_url(&entry);
			state.popstate.iter().map(|(_, l)| l.clone()).collect()
		};
		for listener in listeners {
			listener();
		}
	}

	/// Fires popstate listeners without touching the stack.
	pub fn emit_popstate(&self) {
		let listeners: Vec<PopStateListener> = {
			let state = self.state.lock();
			state.popstate.iter().map(|(_, l)| l.clone()).collect()
		};
		for listener in listeners {
			listener();
		}
	}

	/// Delivers a click to every document-level listener.
	pub fn click(&self, event: &ClickEvent) {
		let listeners: Vec<ClickListener> = {
			let state = self.state.lock();
			state.clicks.iter().map(|(_, l)| l.clone()).collect()
		};
		for listener in listeners {
			listener(event);
		}
	}

	/// Number of listeners currently attached, both kinds.
	pub fn listener_count(&self) -> usize {
		let state = self.state.lock();
		state.popstate.len() + state.clicks.len()
	}

	fn next_id(state: &mut WindowState) -> ListenerId {
		let id = ListenerId::from_raw(state.next_listener);
		state.next_listener += 1;
		id
	}
}

impl Default for FakeWindow {
	fn default() -> Self {
		Self::new()
	}
}

impl Window for FakeWindow {
	fn location(&self) -> Location {
		self.state.lock().location.clone()
	}

	fn push_state(&self, url: &str) -> Result<(), DomError> {
		let mut state = self.state.lock();
		state.location.apply_relative_url(url);
		let entry = state.location.relative_url();
		state.history.push(entry);
		Ok(())
	}

	fn on_popstate(&self, listener: PopStateListener) -> ListenerId {
		let mut state = self.state.lock();
		let id = Self::next_id(&mut state);
		state.popstate.push((id, listener));
		id
	}

	fn on_click(&self, listener: ClickListener) -> ListenerId {
		let mut state = self.state.lock();
		let id = Self::next_id(&mut state);
		state.clicks.push((id, listener));
		id
	}

	fn remove_listener(&self, id: ListenerId) {
		let mut state = self.state.lock();
		state.popstate.retain(|(lid, _)| *lid != id);
		state.clicks.retain(|(lid, _)| *lid != id);
	}

	fn spawn(&self, task: BoxFuture<'static, ()>) {
		tokio::spawn(task);
	}
}
