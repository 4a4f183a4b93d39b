//! The navigation state machine.

use crate::config::{ContentProvider, NotFoundHandler, RouterConfig};
use crate::error::NavError;
use crate::events::{Emitter, RouteEventKind, SubscriberId};
use futures::lock::Mutex as AsyncMutex;
use parking_lot::{Mutex, RwLock};
use sentier_dom::{ClickEvent, ListenerId, Window, check_link};
use sentier_routes::{ResolvedRoute, Route, RouteDecl, RouteParams, RouteTable};
use sentier_view::{CompileHook, View};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

struct NavState {
	current: Option<ResolvedRoute>,
	previous: Option<ResolvedRoute>,
	first_route: bool,
	transitioning: bool,
}

pub(crate) struct RouterInner {
	table: RouteTable,
	window: Arc<dyn Window>,
	view: AsyncMutex<View>,
	events: Emitter,
	state: RwLock<NavState>,
	listeners: Mutex<Vec<ListenerId>>,
	base_url: String,
	base_content: String,
	provider: Arc<dyn ContentProvider>,
	before_compile: CompileHook,
	not_found: Option<NotFoundHandler>,
	verbose: bool,
}

impl Drop for RouterInner {
	fn drop(&mut self) {
		for id in self.listeners.get_mut().drain(..) {
			self.window.remove_listener(id);
		}
	}
}

/// The navigation core.
///
/// A router resolves paths through its route table, loads content for
/// the target, and swaps pages through the view while reporting
/// progress as events. Clones share all state.
///
/// Construction wires nothing up; [`Router::start`] binds the window
/// listeners and performs the initial navigation for the location the
/// window is already at. That first navigation adopts the content on
/// screen and only plays its entry transition.
#[derive(Clone)]
pub struct Router {
	inner: Arc<RouterInner>,
}

impl Router {
	/// Builds a router over `window` from `config`.
	///
	/// An empty routes list falls back to a single `home` route so the
	/// router always has a default. Invalid route patterns and base
	/// content naming an unregistered component are reported here.
	pub fn new(window: Arc<dyn Window>, config: RouterConfig) -> Result<Self, NavError> {
		let routes = if config.routes.is_empty() {
			warn!("no routes declared, falling back to a single `home` route");
			vec![RouteDecl::from("home")]
		} else {
			config.routes
		};
		let table = RouteTable::parse(routes)?;
		let view = View::from_markup(config.registry, &config.initial_content)?;

		Ok(Self {
			inner: Arc::new(RouterInner {
				table,
				window,
				view: AsyncMutex::new(view),
				events: Emitter::new(),
				state: RwLock::new(NavState {
					current: None,
					previous: None,
					first_route: true,
					transitioning: false,
				}),
				listeners: Mutex::new(Vec::new()),
				base_url: config.base_url,
				base_content: config.base_content,
				provider: config.provider,
				before_compile: config.before_compile,
				not_found: config.not_found,
				verbose: config.verbose,
			}),
		})
	}

	/// Binds history and click listeners, then navigates to the
	/// location the window is currently at.
	pub async fn start(&self) -> Result<(), NavError> {
		self.bind();
		let path = self.inner.window.location().relative_url();
		self.load_route(&path).await
	}

	/// Detaches the window listeners bound by [`Router::start`].
	pub fn stop(&self) {
		let mut listeners = self.inner.listeners.lock();
		for id in listeners.drain(..) {
			self.inner.window.remove_listener(id);
		}
	}

	/// Stops the router and drops every event subscriber.
	pub fn dispose(&self) {
		self.stop();
		self.inner.events.clear();
	}

	/// Navigates to a relative url, pushing a history entry first.
	///
	/// The url is taken as the address bar would show it, base prefix
	/// included.
	pub async fn go_to(&self, url: &str) -> Result<(), NavError> {
		self.inner.window.push_state(url)?;
		let path = self.inner.window.location().relative_url();
		self.load_route(&path).await
	}

	/// Navigates to a route by id, substituting `params` into its path.
	pub async fn go_to_id(&self, id: &str, params: &RouteParams) -> Result<(), NavError> {
		let path = self
			.inner
			.table
			.reverse(id, params)
			.ok_or_else(|| NavError::UnknownRouteId(id.to_string()))?;
		let url = if self.inner.base_url.is_empty() {
			path
		} else {
			format!("{}{}", self.inner.base_url.trim_end_matches('/'), path)
		};
		self.go_to(&url).await
	}

	/// Subscribes a listener to one event kind.
	pub fn on<F>(&self, kind: RouteEventKind, listener: F) -> SubscriberId
	where
		F: Fn(&ResolvedRoute) + Send + Sync + 'static,
	{
		self.inner.events.subscribe(kind, Arc::new(listener))
	}

	/// Drops a subscription; false when the id was already gone.
	pub fn off(&self, id: SubscriberId) -> bool {
		self.inner.events.unsubscribe(id)
	}

	/// The route currently shown, if any navigation completed yet.
	pub fn current_route(&self) -> Option<ResolvedRoute> {
		self.inner.state.read().current.clone()
	}

	/// The route shown before the current one.
	pub fn previous_route(&self) -> Option<ResolvedRoute> {
		self.inner.state.read().previous.clone()
	}

	/// Whether the next navigation will be treated as the first.
	pub fn is_first_route(&self) -> bool {
		self.inner.state.read().first_route
	}

	/// Whether a navigation is currently in flight.
	pub fn is_transitioning(&self) -> bool {
		self.inner.state.read().transitioning
	}

	/// The parsed route table.
	pub fn table(&self) -> &RouteTable {
		&self.inner.table
	}

	/// The route definitions in declaration order.
	pub fn routes(&self) -> &[Route] {
		self.inner.table.routes()
	}

	/// The prefix the application is served under.
	pub fn base_url(&self) -> &str {
		&self.inner.base_url
	}

	/// The string handed to the content provider on every load.
	pub fn base_content(&self) -> &str {
		&self.inner.base_content
	}

	/// Number of listeners subscribed to `kind`.
	pub fn listener_count(&self, kind: RouteEventKind) -> usize {
		self.inner.events.count(kind)
	}

	/// Markup of the page currently mounted.
	pub async fn current_markup(&self) -> Option<String> {
		self.inner.view.lock().await.current_markup()
	}

	/// Component name of the page currently mounted.
	pub async fn current_component(&self) -> Option<String> {
		let view = self.inner.view.lock().await;
		view.current_component().map(str::to_string)
	}

	fn bind(&self) {
		let mut listeners = self.inner.listeners.lock();
		if !listeners.is_empty() {
			return;
		}
		let weak = Arc::downgrade(&self.inner);

		let on_pop = {
			let weak = weak.clone();
			move || {
				let Some(inner) = weak.upgrade() else { return };
				let path = inner.window.location().relative_url();
				let router = Router { inner: inner.clone() };
				inner.window.spawn(Box::pin(async move {
					// Failures surface through Failed events.
					let _ = router.load_route(&path).await;
				}));
			}
		};
		listeners.push(self.inner.window.on_popstate(Arc::new(on_pop)));

		let on_click = move |event: &ClickEvent| {
			let Some(inner) = weak.upgrade() else { return };
			let location = inner.window.location();
			let Some(url) = check_link(event, &location) else { return };
			debug!(url = %url, "link click intercepted");
			let router = Router { inner: inner.clone() };
			inner.window.spawn(Box::pin(async move {
				let _ = router.go_to(&url).await;
			}));
		};
		listeners.push(self.inner.window.on_click(Arc::new(on_click)));
	}

	/// Resolves `raw_path` and runs the navigation it names.
	async fn load_route(&self, raw_path: &str) -> Result<(), NavError> {
		let inner = &self.inner;

		let resolved = match inner.table.find_by_path_with_base(raw_path, &inner.base_url) {
			Some(resolved) => resolved,
			None => match &inner.not_found {
				Some(handler) => {
					debug!(path = %raw_path, "no route matched, delegating to not-found handler");
					handler(raw_path);
					return Ok(());
				}
				None => {
					let fallback = inner.table.resolve_default();
					debug!(path = %raw_path, default = %fallback.id, "no route matched, using default route");
					fallback
				}
			},
		};

		// Admission: one navigation at a time, and re-selecting the
		// current target is a no-op.
		let (resolved, snapshot) = {
			let mut state = inner.state.write();
			if state.transitioning {
				warn!(path = %raw_path, "navigation rejected, another one is in flight");
				return Err(NavError::TransitionInProgress);
			}
			if state
				.current
				.as_ref()
				.is_some_and(|current| current.same_target(&resolved))
			{
				debug!(path = %raw_path, "already at the requested route");
				return Ok(());
			}
			let snapshot = NavState {
				current: state.current.clone(),
				previous: state.previous.clone(),
				first_route: state.first_route,
				transitioning: false,
			};
			let resolved = resolved.with_first_route(state.first_route);
			state.previous = state.current.take();
			state.current = Some(resolved.clone());
			state.first_route = false;
			state.transitioning = true;
			(resolved, snapshot)
		};

		if inner.verbose {
			info!(id = %resolved.id, path = %raw_path, first_route = resolved.first_route, "navigation started");
		} else {
			debug!(id = %resolved.id, path = %raw_path, first_route = resolved.first_route, "navigation started");
		}
		inner.events.emit(RouteEventKind::Start, &resolved);

		match self.run_transition(&resolved, raw_path).await {
			Ok(()) => {
				inner.state.write().transitioning = false;
				inner.events.emit(RouteEventKind::Complete, &resolved);
				inner.events.emit(RouteEventKind::Update, &resolved);
				if inner.verbose {
					info!(id = %resolved.id, "navigation complete");
				} else {
					debug!(id = %resolved.id, "navigation complete");
				}
				Ok(())
			}
			Err(err) => {
				*inner.state.write() = snapshot;
				error!(id = %resolved.id, error = %err, "navigation failed, state rolled back");
				inner.events.emit(RouteEventKind::Failed, &resolved);
				Err(err)
			}
		}
	}

	async fn run_transition(&self, resolved: &ResolvedRoute, raw_path: &str) -> Result<(), NavError> {
		let inner = &self.inner;

		if resolved.first_route {
			// The first route's content is already on screen.
			let mut view = inner.view.lock().await;
			view.show_first_page().await;
			return Ok(());
		}

		let content = inner
			.provider
			.content(resolved, &inner.base_content, raw_path)
			.await
			.map_err(|source| NavError::Content {
				route: resolved.id.clone(),
				source,
			})?;
		inner.events.emit(RouteEventKind::Loaded, resolved);

		let mut view = inner.view.lock().await;
		view.show_page(&content, &inner.before_compile).await?;
		Ok(())
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.inner.state.read();
		f.debug_struct("Router")
			.field("routes", &self.inner.table.len())
			.field("current", &state.current.as_ref().map(|route| route.id.as_str()))
			.field("transitioning", &state.transitioning)
			.finish()
	}
}
