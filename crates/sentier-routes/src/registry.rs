//! The route table: ordered declarations and path resolution.

use crate::error::RouteError;
use crate::params::RouteParams;
use crate::route::{ResolvedRoute, Route, RouteDecl};
use tracing::debug;

/// An ordered, immutable collection of routes.
///
/// Routes keep their declaration order; resolution returns the first
/// match. The first declared route doubles as the default route.
#[derive(Debug, Clone)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	/// Parses route declarations into a table.
	///
	/// A bare id `"home"` becomes the route `/home`; a record uses its
	/// explicit path, falling back to the id. Paths are normalized to a
	/// leading slash and compiled once, here.
	///
	/// # Errors
	///
	/// Fails on an empty declaration list, an entry with an empty id,
	/// or a path that does not compile.
	pub fn parse<I, D>(decls: I) -> Result<Self, RouteError>
	where
		I: IntoIterator<Item = D>,
		D: Into<RouteDecl>,
	{
		let mut routes = Vec::new();
		for (index, decl) in decls.into_iter().enumerate() {
			let decl = decl.into();
			if decl.id().is_empty() {
				return Err(RouteError::EmptyId { index });
			}
			let path = decl.path().unwrap_or(decl.id()).to_string();
			routes.push(Route::new(decl.id(), path)?);
		}
		if routes.is_empty() {
			return Err(RouteError::Empty);
		}
		debug!(routes = routes.len(), "route table parsed");
		Ok(Self { routes })
	}

	/// Resolves a path against the table.
	///
	/// Equivalent to [`RouteTable::find_by_path_with_base`] with an
	/// empty base url.
	pub fn find_by_path(&self, path: &str) -> Option<ResolvedRoute> {
		self.find_by_path_with_base(path, "")
	}

	/// Resolves a path against the table, stripping a base url prefix
	/// first.
	///
	/// The query and fragment portions of the path are ignored for
	/// matching. Routes are tested in declaration order and the first
	/// match wins; `None` means no route matched.
	pub fn find_by_path_with_base(&self, path: &str, base_url: &str) -> Option<ResolvedRoute> {
		let stripped = if base_url.is_empty() {
			path
		} else {
			path.strip_prefix(base_url).unwrap_or(path)
		};
		let normalized = ensure_leading_slash(strip_query(stripped));

		self.routes.iter().find_map(|route| {
			route
				.matches(&normalized)
				.map(|params| route.resolve(params))
		})
	}

	/// Looks a route up by id.
	pub fn find_by_id(&self, id: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.id == id)
	}

	/// Generates a concrete path for a route id by substituting
	/// parameter values into its pattern.
	///
	/// Returns `None` for an unknown id. Parameters without a value
	/// keep their token text; values are not validated against the
	/// pattern's captures.
	pub fn reverse(&self, id: &str, params: &RouteParams) -> Option<String> {
		self.find_by_id(id)
			.map(|route| route.pattern().fill(params))
	}

	/// The default route: the first one declared.
	pub fn default_route(&self) -> &Route {
		// parse() guarantees at least one route
		&self.routes[0]
	}

	/// Resolves the default route with no parameters, the fallback for
	/// paths that match nothing.
	pub fn resolve_default(&self) -> ResolvedRoute {
		self.default_route().resolve(RouteParams::new())
	}

	/// All routes, in declaration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Number of routes in the table.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Whether the table is empty. Always false for a parsed table.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Iterates the routes in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &Route> {
		self.routes.iter()
	}
}

/// Ensures a single leading slash.
fn ensure_leading_slash(path: &str) -> String {
	format!("/{}", path.trim_start_matches('/'))
}

/// Cuts the query and fragment off a relative url.
fn strip_query(path: &str) -> &str {
	let end = path.find(['?', '#']).unwrap_or(path.len());
	&path[..end]
}
