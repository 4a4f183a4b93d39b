// Route table integration tests
// Declarations parsed from configuration JSON, matched and reversed end to end

use sentier::prelude::*;

// Test: declarations read straight from configuration JSON
#[test]
fn test_routes_parsed_from_json_configuration() {
	let decls: Vec<RouteDecl> = serde_json::from_str(
		r#"["home", {"id": "post", "path": "post/:id"}, {"id": "files", "path": "files/:path+"}]"#,
	)
	.unwrap();
	let table = RouteTable::parse(decls).unwrap();

	assert_eq!(table.len(), 3);
	assert_eq!(table.default_route().id, "home");
	assert_eq!(table.find_by_path("/post/42").unwrap().id, "post");
}

// Test: optional and repeated parameters across one table
#[test]
fn test_modifier_matching_end_to_end() {
	let table = RouteTable::parse([
		RouteDecl::with_path("docs", "docs/:chapter?"),
		RouteDecl::with_path("files", "files/:path+"),
		RouteDecl::with_path("tags", "tags/:name*"),
	])
	.unwrap();

	// Unmatched optionals are absent, not empty.
	let hit = table.find_by_path("/docs").unwrap();
	assert_eq!(hit.id, "docs");
	assert!(!hit.params.contains("chapter"));

	let hit = table.find_by_path("/docs/intro").unwrap();
	assert_eq!(hit.params.get_str("chapter"), Some("intro"));

	// One-or-more needs at least one segment.
	assert!(table.find_by_path("/files").is_none());
	let hit = table.find_by_path("/files/a/b/c").unwrap();
	assert_eq!(
		hit.params.get_many("path"),
		Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
	);

	// Zero-or-more also matches bare.
	let hit = table.find_by_path("/tags").unwrap();
	assert!(!hit.params.contains("name"));
	let hit = table.find_by_path("/tags/rust/async").unwrap();
	assert_eq!(hit.params.get_many("name").map(<[String]>::len), Some(2));
}

// Test: matching tolerates case and trailing slashes
#[test]
fn test_matching_is_case_insensitive_and_trailing_slash_tolerant() {
	let table = RouteTable::parse(["about"]).unwrap();

	assert_eq!(table.find_by_path("/About").unwrap().id, "about");
	assert_eq!(table.find_by_path("/about/").unwrap().id, "about");
	assert_eq!(table.find_by_path("/ABOUT/").unwrap().id, "about");
}

// Test: a custom capture narrows what the parameter accepts
#[test]
fn test_custom_capture_restricts_the_segment() {
	let table = RouteTable::parse([RouteDecl::with_path("issue", r"issues/:num(\d+)")]).unwrap();

	let hit = table.find_by_path("/issues/42").unwrap();
	assert_eq!(hit.params.get_str("num"), Some("42"));
	assert!(table.find_by_path("/issues/latest").is_none());
}

// Test: a site hosted under a subfolder strips its base before matching
#[test]
fn test_base_url_and_query_are_ignored_for_matching() {
	let table = RouteTable::parse(["home", "about"]).unwrap();

	let hit = table
		.find_by_path_with_base("/subfolder/about?tab=team#top", "/subfolder")
		.unwrap();
	assert_eq!(hit.id, "about");
}

// Test: ids reverse into paths that resolve back to the same parameters
#[test]
fn test_reverse_then_match_round_trips() {
	let table = RouteTable::parse([
		RouteDecl::from("home"),
		RouteDecl::with_path("post", "post/:id"),
		RouteDecl::with_path("files", "files/:path+"),
	])
	.unwrap();

	let params = RouteParams::new().with("id", "42");
	let path = table.reverse("post", &params).unwrap();
	assert_eq!(path, "/post/42");
	assert_eq!(table.find_by_path(&path).unwrap().params, params);

	let params = RouteParams::new().with("path", vec!["a", "b"]);
	let path = table.reverse("files", &params).unwrap();
	assert_eq!(path, "/files/a/b");
	assert_eq!(table.find_by_path(&path).unwrap().params, params);
}

// Test: declaration order decides between overlapping routes
#[test]
fn test_first_declared_route_shadows_later_ones() {
	let table = RouteTable::parse([
		RouteDecl::with_path("page", "/:slug"),
		RouteDecl::from("about"),
	])
	.unwrap();

	let hit = table.find_by_path("/about").unwrap();
	assert_eq!(hit.id, "page");
	assert_eq!(hit.params.get_str("slug"), Some("about"));
}
