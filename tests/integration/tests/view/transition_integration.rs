// View transition integration tests
// Page lifecycle hooks interleave with navigation events in a fixed order:
// the outgoing page exits and is disposed before the incoming page enters,
// all between the loaded and complete reports

use std::sync::Arc;

use sentier::COMPONENT_ATTR;
use sentier::prelude::*;
use sentier_integration_tests::{
	canned_provider, component_fragment, event_log, init_tracing, record_events,
	recording_registry, static_fragment,
};

// Test: lifecycle hooks and navigation events share one global order
#[tokio::test]
async fn test_page_lifecycle_interleaves_with_navigation_events() {
	init_tracing();
	let log = event_log();
	let window = Arc::new(FakeWindow::at("/home"));
	let config = RouterConfig::new()
		.routes(["home", "about"])
		.initial_content(component_fragment("home-page"))
		.registry(recording_registry(&log, &["home-page", "about-page"]))
		.content_provider(canned_provider([("about", component_fragment("about-page"))]));
	let router = Router::new(window.clone(), config).expect("valid routes");
	record_events(&router, &log);

	router.start().await.expect("first navigation");
	assert_eq!(
		*log.lock(),
		vec!["start:home", "enter:home-page", "complete:home", "update:home"]
	);

	log.lock().clear();
	router.go_to("/about").await.expect("second navigation");
	assert_eq!(
		*log.lock(),
		vec![
			"start:about",
			"loaded:about",
			"exit:home-page",
			"dispose:home-page",
			"enter:about-page",
			"complete:about",
			"update:about",
		]
	);
	assert_eq!(router.current_component().await.as_deref(), Some("about-page"));
}

// Test: content without a component mounts as a plain page
#[tokio::test]
async fn test_static_first_page_has_no_lifecycle() {
	let log = event_log();
	let window = Arc::new(FakeWindow::at("/home"));
	let config = RouterConfig::new()
		.routes(["home", "about"])
		.initial_content(static_fragment("home"))
		.registry(recording_registry(&log, &["about-page"]));
	let router = Router::new(window.clone(), config).expect("valid routes");
	record_events(&router, &log);

	router.start().await.expect("first navigation");

	assert_eq!(*log.lock(), vec!["start:home", "complete:home", "update:home"]);
	assert_eq!(router.current_component().await, None);
}

// Test: the compile hook can attach a component before mounting
#[tokio::test]
async fn test_compile_hook_injects_a_component() {
	init_tracing();
	let log = event_log();
	let window = Arc::new(FakeWindow::at("/home"));
	let config = RouterConfig::new()
		.routes(["home", "about"])
		.registry(recording_registry(&log, &["injected-page"]))
		.content_provider(canned_provider([("about", static_fragment("about"))]))
		.before_compile(|element| async move {
			element.with_attribute(COMPONENT_ATTR, "injected-page")
		});
	let router = Router::new(window.clone(), config).expect("valid routes");
	router.start().await.expect("first navigation");

	router.go_to("/about").await.expect("second navigation");

	assert!(log.lock().contains(&"enter:injected-page".to_string()));
	assert_eq!(router.current_component().await.as_deref(), Some("injected-page"));
}

// Test: a page whose replacement fails to build stays mounted and untouched
#[tokio::test]
async fn test_failed_replacement_leaves_the_old_page_alone() {
	let log = event_log();
	let window = Arc::new(FakeWindow::at("/home"));
	let config = RouterConfig::new()
		.routes(["home", "about"])
		.initial_content(component_fragment("home-page"))
		.registry(recording_registry(&log, &["home-page"]))
		.content_provider(canned_provider([("about", component_fragment("ghost"))]));
	let router = Router::new(window.clone(), config).expect("valid routes");
	router.start().await.expect("first navigation");

	router.go_to("/about").await.expect_err("unknown component");

	assert!(!log.lock().iter().any(|entry| entry.starts_with("exit:")));
	assert_eq!(router.current_component().await.as_deref(), Some("home-page"));
}

// Test: one page is mounted at a time across a chain of navigations
#[tokio::test]
async fn test_components_cycle_one_at_a_time() {
	let log = event_log();
	let window = Arc::new(FakeWindow::at("/alpha"));
	let config = RouterConfig::new()
		.routes(["alpha", "beta", "gamma"])
		.initial_content(component_fragment("alpha-page"))
		.registry(recording_registry(&log, &["alpha-page", "beta-page", "gamma-page"]))
		.content_provider(canned_provider([
			("beta", component_fragment("beta-page")),
			("gamma", component_fragment("gamma-page")),
		]));
	let router = Router::new(window.clone(), config).expect("valid routes");

	router.start().await.expect("first navigation");
	router.go_to("/beta").await.expect("second navigation");
	router.go_to("/gamma").await.expect("third navigation");

	assert_eq!(
		*log.lock(),
		vec![
			"enter:alpha-page",
			"exit:alpha-page",
			"dispose:alpha-page",
			"enter:beta-page",
			"exit:beta-page",
			"dispose:beta-page",
			"enter:gamma-page",
		]
	);
	assert_eq!(router.current_component().await.as_deref(), Some("gamma-page"));
}

// Test: navigating by id renders the route's parameters into the path
#[tokio::test]
async fn test_go_to_id_substitutes_parameters() {
	let window = Arc::new(FakeWindow::at("/home"));
	let config = RouterConfig::new().routes([
		RouteDecl::from("home"),
		RouteDecl::with_path("post", "post/:id"),
	]);
	let router = Router::new(window.clone(), config).expect("valid routes");
	router.start().await.expect("first navigation");

	let params = RouteParams::new().with("id", "42");
	router.go_to_id("post", &params).await.expect("navigation by id");

	assert_eq!(window.pushed_urls(), vec!["/post/42"]);
	let current = router.current_route().expect("routed");
	assert_eq!(current.id, "post");
	assert_eq!(current.params.get_str("id"), Some("42"));
}
