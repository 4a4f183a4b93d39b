// Link click integration tests
// Document clicks reach the router through the window binding; qualifying
// anchors navigate in-app while claimed or external clicks stay untouched

use std::sync::Arc;

use sentier::prelude::*;
use sentier::{ClickEvent, Modifiers, MouseButton};
use sentier_integration_tests::{event_log, init_tracing, record_events, settle};

fn click_on(href: &str) -> ClickEvent {
	ClickEvent::new(vec![Element::new("a").with_attribute("href", href)])
}

async fn started_router(window: &Arc<FakeWindow>) -> Router {
	let router = Router::new(window.clone(), RouterConfig::new().routes(["home", "about"]))
		.expect("valid routes");
	router.start().await.expect("first navigation");
	router
}

// Test: a click inside a link bubbles up to the anchor and navigates
#[tokio::test]
async fn test_click_on_nested_element_navigates() {
	init_tracing();
	let window = Arc::new(FakeWindow::at("/home"));
	let router = started_router(&window).await;

	let event = ClickEvent::new(vec![
		Element::new("span"),
		Element::new("a").with_attribute("href", "/about"),
	]);
	window.click(&event);
	settle().await;

	assert!(event.default_prevented());
	assert_eq!(window.pushed_urls(), vec!["/about"]);
	assert_eq!(router.current_route().map(|route| route.id), Some("about".to_string()));
}

// Test: clicks the user or another handler claimed never navigate
#[tokio::test]
async fn test_claimed_clicks_are_left_alone() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = started_router(&window).await;

	let modified = [
		Modifiers { meta: true, ..Modifiers::default() },
		Modifiers { ctrl: true, ..Modifiers::default() },
		Modifiers { shift: true, ..Modifiers::default() },
		Modifiers { alt: true, ..Modifiers::default() },
	];
	for modifiers in modified {
		let event = click_on("/about").with_modifiers(modifiers);
		window.click(&event);
		settle().await;
		assert!(!event.default_prevented());
	}

	let event = click_on("/about").with_button(MouseButton::Secondary);
	window.click(&event);
	let event = click_on("/about").with_default_prevented();
	window.click(&event);
	settle().await;

	assert!(window.pushed_urls().is_empty());
	assert_eq!(router.current_route().map(|route| route.id), Some("home".to_string()));
}

// Test: anchors that opt out of in-app handling keep their default behavior
#[tokio::test]
async fn test_opted_out_anchors_are_left_to_the_environment() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = started_router(&window).await;

	let blank = ClickEvent::new(vec![
		Element::new("a")
			.with_attribute("href", "/about")
			.with_attribute("target", "_blank"),
	]);
	window.click(&blank);
	let external = click_on("https://other.example/about");
	window.click(&external);
	settle().await;

	assert!(!blank.default_prevented());
	assert!(!external.default_prevented());
	assert!(window.pushed_urls().is_empty());
	assert_eq!(router.current_route().map(|route| route.id), Some("home".to_string()));
}

// Test: a link to the page on screen is consumed without navigating
#[tokio::test]
async fn test_same_page_click_is_consumed_without_navigation() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = started_router(&window).await;

	let log = event_log();
	record_events(&router, &log);
	let event = click_on("/home");
	window.click(&event);
	settle().await;

	assert!(event.default_prevented());
	assert!(log.lock().is_empty());
	assert_eq!(window.history_len(), 1);
}

// Test: a hash link on the current page must not reload, and must not navigate
#[tokio::test]
async fn test_hash_only_click_on_current_page_is_consumed() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = started_router(&window).await;

	let log = event_log();
	record_events(&router, &log);
	let event = click_on("/home#section");
	window.click(&event);
	settle().await;

	assert!(event.default_prevented());
	assert!(log.lock().is_empty());
}

// Test: absolute same-origin links are treated like relative ones
#[tokio::test]
async fn test_absolute_same_origin_link_navigates() {
	let window = Arc::new(FakeWindow::at("/home"));
	let router = started_router(&window).await;

	let event = click_on("https://localhost/about");
	window.click(&event);
	settle().await;

	assert_eq!(router.current_route().map(|route| route.id), Some("about".to_string()));
}

// Test: under a base url, clicked hrefs carry the prefix and still resolve
#[tokio::test]
async fn test_click_under_a_base_url_resolves_the_route() {
	init_tracing();
	let window = Arc::new(FakeWindow::at("/app/home"));
	let config = RouterConfig::new()
		.routes(["home", "about"])
		.base_url("/app");
	let router = Router::new(window.clone(), config).expect("valid routes");
	router.start().await.expect("first navigation");
	assert_eq!(router.current_route().map(|route| route.id), Some("home".to_string()));

	let event = click_on("/app/about");
	window.click(&event);
	settle().await;

	assert_eq!(window.pushed_urls(), vec!["/app/about"]);
	assert_eq!(router.current_route().map(|route| route.id), Some("about".to_string()));
}
