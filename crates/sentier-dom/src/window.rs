//! The window environment boundary.

use crate::error::DomError;
use crate::event::ClickEvent;
use crate::location::Location;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Handle to a registered listener, used to detach it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
	/// Wraps a raw id minted by a window implementation.
	pub fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	/// The raw id.
	pub fn as_raw(&self) -> u64 {
		self.0
	}
}

/// Callback invoked when the environment's history position changes.
pub type PopStateListener = Arc<dyn Fn() + Send + Sync>;

/// Callback invoked for document-level clicks.
pub type ClickListener = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// The host environment the router runs against.
///
/// Implementations wrap a real browser window or an in-memory double;
/// the router never reaches for an implicit global. `spawn` hands
/// asynchronous navigation work born in an event callback back to the
/// host's scheduler.
pub trait Window: Send + Sync {
	/// Snapshot of the current location.
	fn location(&self) -> Location;

	/// Pushes a new history entry and moves the location to `url`
	/// (relative). Does not notify popstate listeners.
	fn push_state(&self, url: &str) -> Result<(), DomError>;

	/// Registers a history-change listener.
	fn on_popstate(&self, listener: PopStateListener) -> ListenerId;

	/// Registers a document-level click listener.
	fn on_click(&self, listener: ClickListener) -> ListenerId;

	/// Detaches a listener registered by either hook.
	fn remove_listener(&self, id: ListenerId);

	/// Schedules a task on the host's executor.
	fn spawn(&self, task: BoxFuture<'static, ()>);
}
