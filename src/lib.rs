//! # Sentier
//!
//! A navigation core for single-page applications.
//!
//! Sentier keeps a page-based application on one document: it matches
//! paths against declared routes, intercepts link clicks, binds the
//! host's history, loads content for the target route and swaps pages
//! through entry and exit transitions, reporting progress as events.
//!
//! The crate is a facade over four focused workspace members:
//!
//! - [`routes`] - path patterns, route declarations and the route table
//! - [`dom`] - locations, parsed elements, click events and the
//!   [`Window`] environment boundary
//! - [`view`] - the page lifecycle: component registry, mounting and
//!   transitions
//! - [`router`] - the navigation state machine tying it all together
//!
//! ## Feature Flags
//!
//! - `testing` - enables `FakeWindow`, an in-memory window double for
//!   tests and host-less runs
//!
//! ## Matching a path
//!
//! ```
//! use sentier::{RouteDecl, RouteTable};
//!
//! let table = RouteTable::parse([
//! 	RouteDecl::from("home"),
//! 	RouteDecl::with_path("post", "post/:id"),
//! ])?;
//!
//! let hit = table.find_by_path("/post/42").expect("path matches");
//! assert_eq!(hit.id, "post");
//! assert_eq!(hit.params.get_str("id"), Some("42"));
//!
//! // Unmatched paths resolve to nothing; the router falls back to the
//! // default route, which is the first one declared.
//! assert!(table.find_by_path("/elsewhere").is_none());
//! assert_eq!(table.default_route().id, "home");
//! # Ok::<(), sentier::RouteError>(())
//! ```
//!
//! ## Running a router
//!
//! ```rust,ignore
//! use sentier::prelude::*;
//! use std::sync::Arc;
//!
//! let config = RouterConfig::new()
//! 	.routes(["home", "about"])
//! 	.component("article", |root| Box::new(ArticlePage::from(root)) as Box<dyn Page>)
//! 	.content_fn(|route, _base, path| async move {
//! 		Ok(fetch_fragment(&path).await?)
//! 	});
//!
//! let router = Router::new(window, config)?;
//! router.on(RouteEventKind::Update, |route| update_menu(route));
//! router.start().await?;
//! ```

pub mod dom;
pub mod router;
pub mod routes;
pub mod view;

// Re-export routing
pub use sentier_routes::{
	ParamValue, PatternError, ResolvedRoute, Route, RouteDecl, RouteError, RouteParams,
	RoutePattern, RouteTable,
};

// Re-export the browser surface
#[cfg(feature = "testing")]
pub use sentier_dom::FakeWindow;
pub use sentier_dom::{
	ClickEvent, ClickListener, DomError, Element, ListenerId, Location, Modifiers, MouseButton,
	Node, PopStateListener, Window, check_link, parse_fragment,
};

// Re-export the page lifecycle
pub use sentier_view::{
	COMPONENT_ATTR, CompileHook, Page, PageFactory, PageRegistry, StaticPage, View, ViewError,
	identity_compile_hook,
};

// Re-export the navigation state machine
pub use sentier_router::{
	BoxError, ContentProvider, IdContent, NavError, NotFoundHandler, RouteEventKind,
	RouteListener, Router, RouterConfig, SubscriberId, provider_fn,
};

// Re-export common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};

pub mod prelude {
	//! Everything a typical application pulls in.

	pub use crate::{
		// Browser surface
		Element,
		Location,
		Window,
		// Page lifecycle
		Page,
		PageRegistry,
		StaticPage,
		// Navigation
		ContentProvider,
		NavError,
		// Routing
		ResolvedRoute,
		RouteDecl,
		RouteEventKind,
		RouteParams,
		RouteTable,
		Router,
		RouterConfig,
	};

	#[cfg(feature = "testing")]
	pub use crate::FakeWindow;

	// External
	pub use async_trait::async_trait;
}
