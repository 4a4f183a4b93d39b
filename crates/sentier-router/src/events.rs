//! Navigation lifecycle events.

use parking_lot::RwLock;
use sentier_routes::ResolvedRoute;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stages of a navigation, in the order they fire.
///
/// A successful navigation emits `Start`, `Loaded` (skipped for the
/// first route, whose content is already on screen), then `Complete`
/// and `Update`. A failed one emits `Start`, possibly `Loaded`, then
/// `Failed` after the state rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteEventKind {
	/// The navigation was admitted and its target resolved.
	Start,
	/// Content for the target arrived; transitions have not run yet.
	Loaded,
	/// The transition sequence finished; the target is on screen.
	Complete,
	/// Fires right after `Complete`; the hook for route-change consumers.
	Update,
	/// The navigation failed and prior state was restored.
	Failed,
}

impl RouteEventKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Start => "start",
			Self::Loaded => "loaded",
			Self::Complete => "complete",
			Self::Update => "update",
			Self::Failed => "failed",
		}
	}
}

impl fmt::Display for RouteEventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Handle for detaching an event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Callback receiving the route a navigation targets.
pub type RouteListener = Arc<dyn Fn(&ResolvedRoute) + Send + Sync>;

struct Subscriber {
	id: SubscriberId,
	kind: RouteEventKind,
	listener: RouteListener,
}

/// Fan-out of navigation events to registered listeners.
#[derive(Default)]
pub(crate) struct Emitter {
	subscribers: RwLock<Vec<Subscriber>>,
	next_id: AtomicU64,
}

impl Emitter {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn subscribe(&self, kind: RouteEventKind, listener: RouteListener) -> SubscriberId {
		let id = SubscriberId(self.next_id.fetch_add(1, Ordering::Relaxed));
		self.subscribers.write().push(Subscriber { id, kind, listener });
		id
	}

	/// Detaches a listener; false when the id was already gone.
	pub(crate) fn unsubscribe(&self, id: SubscriberId) -> bool {
		let mut subscribers = self.subscribers.write();
		let before = subscribers.len();
		subscribers.retain(|subscriber| subscriber.id != id);
		subscribers.len() != before
	}

	/// Invokes every listener registered for `kind`, in subscription
	/// order. Listeners run outside the lock so they may subscribe,
	/// unsubscribe or navigate themselves.
	pub(crate) fn emit(&self, kind: RouteEventKind, route: &ResolvedRoute) {
		let listeners: Vec<RouteListener> = {
			let subscribers = self.subscribers.read();
			subscribers
				.iter()
				.filter(|subscriber| subscriber.kind == kind)
				.map(|subscriber| subscriber.listener.clone())
				.collect()
		};
		for listener in listeners {
			listener(route);
		}
	}

	pub(crate) fn count(&self, kind: RouteEventKind) -> usize {
		self.subscribers
			.read()
			.iter()
			.filter(|subscriber| subscriber.kind == kind)
			.count()
	}

	pub(crate) fn clear(&self) {
		self.subscribers.write().clear();
	}
}
