//! Integration test utilities for Sentier
//!
//! Shared fixtures for driving a router against the in-memory window:
//! recording pages, canned content providers and event capture.

use async_trait::async_trait;
use parking_lot::Mutex;
use sentier_dom::Element;
use sentier_router::{BoxError, ContentProvider, RouteEventKind, Router, provider_fn};
use sentier_routes::ResolvedRoute;
use sentier_view::{Page, PageRegistry};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

/// Shared log the fixtures append to.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
	Arc::new(Mutex::new(Vec::new()))
}

/// Installs level-filtered log output for a test run. Safe to call
/// more than once.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "sentier=debug".into()),
		)
		.with_test_writer()
		.try_init();
}

/// Page that records its lifecycle into a shared log.
pub struct RecordingPage {
	name: String,
	log: EventLog,
}

impl RecordingPage {
	pub fn new(name: impl Into<String>, log: &EventLog) -> Self {
		Self {
			name: name.into(),
			log: log.clone(),
		}
	}
}

#[async_trait]
impl Page for RecordingPage {
	async fn transition_in(&mut self) {
		self.log.lock().push(format!("enter:{}", self.name));
	}

	async fn transition_out(&mut self) {
		self.log.lock().push(format!("exit:{}", self.name));
	}

	fn dispose(&mut self) {
		self.log.lock().push(format!("dispose:{}", self.name));
	}
}

/// Registry producing a [`RecordingPage`] for each of `names`.
pub fn recording_registry(log: &EventLog, names: &[&str]) -> PageRegistry {
	let registry = PageRegistry::new();
	for name in names {
		let name = name.to_string();
		let log = log.clone();
		registry.register(name.clone(), move |_root: &Element| {
			Box::new(RecordingPage::new(name.clone(), &log)) as Box<dyn Page>
		});
	}
	registry
}

/// Subscribes to every event kind, recording `kind:route-id` lines.
pub fn record_events(router: &Router, log: &EventLog) {
	for kind in [
		RouteEventKind::Start,
		RouteEventKind::Loaded,
		RouteEventKind::Complete,
		RouteEventKind::Update,
		RouteEventKind::Failed,
	] {
		let log = log.clone();
		router.on(kind, move |route: &ResolvedRoute| {
			log.lock().push(format!("{kind}:{}", route.id));
		});
	}
}

/// Markup for a plain page without a component marker.
pub fn static_fragment(route_id: &str) -> String {
	format!(r#"<main data-route="{route_id}"><p>{route_id}</p></main>"#)
}

/// Markup mounting the named component.
pub fn component_fragment(name: &str) -> String {
	format!(r#"<section data-component="{name}"><p>{name}</p></section>"#)
}

/// Provider serving canned markup per route id; unknown ids fail.
pub fn canned_provider<I>(pages: I) -> Arc<dyn ContentProvider>
where
	I: IntoIterator<Item = (&'static str, String)>,
{
	let pages: HashMap<String, String> = pages
		.into_iter()
		.map(|(id, markup)| (id.to_string(), markup))
		.collect();
	provider_fn(move |route, _base, _path| {
		let markup = pages.get(&route.id).cloned();
		async move {
			markup.ok_or_else(|| BoxError::from(format!("no canned content for `{}`", route.id)))
		}
	})
}

/// Provider that holds every request until the gate is notified, for
/// tests that need a navigation caught in flight.
pub struct GatedProvider {
	gate: Arc<Notify>,
}

impl GatedProvider {
	pub fn new(gate: Arc<Notify>) -> Self {
		Self { gate }
	}
}

#[async_trait]
impl ContentProvider for GatedProvider {
	async fn content(
		&self,
		route: &ResolvedRoute,
		_base_content: &str,
		_path: &str,
	) -> Result<String, BoxError> {
		self.gate.notified().await;
		Ok(static_fragment(&route.id))
	}
}

/// Lets tasks spawned by window listeners run to completion.
pub async fn settle() {
	for _ in 0..8 {
		tokio::task::yield_now().await;
	}
}
