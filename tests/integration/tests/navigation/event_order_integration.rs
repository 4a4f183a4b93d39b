// Navigation event order integration tests
// The router reports every navigation as start -> loaded -> complete -> update,
// with the first route skipping the load because its content is already mounted

use std::sync::Arc;

use parking_lot::Mutex;
use sentier::prelude::*;
use sentier_integration_tests::{event_log, init_tracing, record_events, settle};

fn two_route_router(window: &Arc<FakeWindow>) -> Router {
	Router::new(window.clone(), RouterConfig::new().routes(["home", "about"]))
		.expect("valid routes")
}

// Test: the first navigation announces the already-rendered route without loading
#[tokio::test]
async fn test_first_navigation_skips_the_load_step() {
	init_tracing();
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);
	let log = event_log();
	record_events(&router, &log);

	router.start().await.expect("first navigation");

	assert_eq!(
		*log.lock(),
		vec!["start:home", "complete:home", "update:home"]
	);
	assert_eq!(router.current_route().map(|route| route.id), Some("home".to_string()));
}

// Test: every later navigation loads content between start and complete
#[tokio::test]
async fn test_later_navigations_report_the_full_sequence() {
	init_tracing();
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);
	router.start().await.expect("first navigation");

	let log = event_log();
	record_events(&router, &log);
	router.go_to("/about").await.expect("second navigation");

	assert_eq!(
		*log.lock(),
		vec!["start:about", "loaded:about", "complete:about", "update:about"]
	);
	assert_eq!(window.pushed_urls(), vec!["/about"]);
}

// Test: a single-kind subscription sees one event per navigation
#[tokio::test]
async fn test_update_subscription_fires_once_per_navigation() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);

	let updates = Arc::new(Mutex::new(Vec::new()));
	let seen = updates.clone();
	router.on(RouteEventKind::Update, move |route| {
		seen.lock().push(route.id.clone());
	});

	router.start().await.expect("first navigation");
	router.go_to("/about").await.expect("second navigation");

	assert_eq!(*updates.lock(), vec!["home", "about"]);
}

// Test: going back through history replays the sequence for the restored route
#[tokio::test]
async fn test_history_back_navigates_with_the_full_sequence() {
	init_tracing();
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);
	router.start().await.expect("first navigation");
	router.go_to("/about").await.expect("second navigation");

	let log = event_log();
	record_events(&router, &log);
	window.back();
	settle().await;

	assert_eq!(
		*log.lock(),
		vec!["start:home", "loaded:home", "complete:home", "update:home"]
	);
	assert_eq!(router.current_route().map(|route| route.id), Some("home".to_string()));
}

// Test: re-selecting the current route records history but emits nothing
#[tokio::test]
async fn test_same_target_navigation_emits_no_events() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);
	router.start().await.expect("first navigation");

	let log = event_log();
	record_events(&router, &log);
	router.go_to("/home").await.expect("same-target navigation");

	assert!(log.lock().is_empty());
	assert_eq!(window.pushed_urls(), vec!["/home"]);
}

// Test: only the first navigation carries the first-route flag
#[tokio::test]
async fn test_first_route_flag_clears_after_the_first_navigation() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);

	let flags = Arc::new(Mutex::new(Vec::new()));
	let seen = flags.clone();
	router.on(RouteEventKind::Start, move |route| {
		seen.lock().push(route.first_route);
	});

	assert!(router.is_first_route());
	router.start().await.expect("first navigation");
	assert!(!router.is_first_route());
	router.go_to("/about").await.expect("second navigation");

	assert_eq!(*flags.lock(), vec![true, false]);
}

// Test: an unsubscribed listener stops receiving events
#[tokio::test]
async fn test_unsubscribed_listener_is_silent() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = two_route_router(&window);

	let updates = Arc::new(Mutex::new(Vec::new()));
	let seen = updates.clone();
	let id = router.on(RouteEventKind::Update, move |route| {
		seen.lock().push(route.id.clone());
	});

	router.start().await.expect("first navigation");
	assert!(router.off(id));
	assert!(!router.off(id));
	router.go_to("/about").await.expect("second navigation");

	assert_eq!(*updates.lock(), vec!["home"]);
}
