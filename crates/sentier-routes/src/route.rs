//! Route declarations and resolved routes.

use crate::error::RouteError;
use crate::params::RouteParams;
use crate::pattern::RoutePattern;
use serde::{Deserialize, Serialize};

/// A route as declared by the application.
///
/// Declarations come in two shapes: a bare id (`"home"`), whose path is
/// derived as `/home`, or a record with an id and an optional explicit
/// path. The untagged serde form lets a routes list be read straight
/// from configuration:
///
/// ```
/// use sentier_routes::RouteDecl;
///
/// let decls: Vec<RouteDecl> =
/// 	serde_json::from_str(r#"["home", {"id": "post", "path": "post/:id"}]"#).unwrap();
/// assert_eq!(decls.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteDecl {
	/// A bare id; the path is derived from it.
	Id(String),
	/// An explicit id with an optional path.
	Record {
		id: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		path: Option<String>,
	},
}

impl RouteDecl {
	/// Declares a route with an explicit path.
	pub fn with_path(id: impl Into<String>, path: impl Into<String>) -> Self {
		Self::Record {
			id: id.into(),
			path: Some(path.into()),
		}
	}

	/// The declared id.
	pub fn id(&self) -> &str {
		match self {
			Self::Id(id) => id,
			Self::Record { id, .. } => id,
		}
	}

	/// The declared path, when one was given.
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::Id(_) => None,
			Self::Record { path, .. } => path.as_deref(),
		}
	}
}

impl From<&str> for RouteDecl {
	fn from(id: &str) -> Self {
		Self::Id(id.to_string())
	}
}

impl From<String> for RouteDecl {
	fn from(id: String) -> Self {
		Self::Id(id)
	}
}

impl From<(&str, &str)> for RouteDecl {
	fn from((id, path): (&str, &str)) -> Self {
		Self::with_path(id, path)
	}
}

/// A declared route with its compiled pattern.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
	/// Stable identifier, unique per table by convention.
	pub id: String,
	/// The normalized path pattern source.
	pub path: String,
	/// Compiled matcher for `path`.
	#[serde(skip)]
	pattern: RoutePattern,
}

impl Route {
	/// Builds a route from an id and a path pattern.
	///
	/// The path gets a leading slash if it lacks one; compilation
	/// failures carry the route id for context.
	pub fn new(id: impl Into<String>, path: impl Into<String>) -> Result<Self, RouteError> {
		let id = id.into();
		let pattern = RoutePattern::compile(&path.into()).map_err(|source| {
			RouteError::Pattern {
				id: id.clone(),
				source,
			}
		})?;
		Ok(Self {
			path: pattern.pattern().to_string(),
			pattern,
			id,
		})
	}

	/// The compiled pattern.
	pub fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	/// Matches a path against this route.
	pub fn matches(&self, path: &str) -> Option<RouteParams> {
		self.pattern.matches(path)
	}

	/// Resolves this route with the given parameters.
	pub(crate) fn resolve(&self, params: RouteParams) -> ResolvedRoute {
		ResolvedRoute {
			id: self.id.clone(),
			path: self.path.clone(),
			params,
			first_route: false,
		}
	}
}

impl PartialEq for Route {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && self.path == other.path
	}
}

impl Eq for Route {}

/// The outcome of resolving a concrete path against a route table.
///
/// Every resolution produces a fresh value; the table's stored routes
/// are never mutated by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoute {
	/// Id of the matched route.
	pub id: String,
	/// Path pattern of the matched route.
	pub path: String,
	/// Parameters extracted from the concrete path.
	pub params: RouteParams,
	/// Whether this resolution is the first the router performed.
	pub first_route: bool,
}

impl ResolvedRoute {
	/// Tags the resolution with the first-navigation flag.
	pub fn with_first_route(mut self, first_route: bool) -> Self {
		self.first_route = first_route;
		self
	}

	/// Whether two resolutions point at the same target: same route id
	/// and same parameters. The first-route tag is ignored.
	pub fn same_target(&self, other: &Self) -> bool {
		self.id == other.id && self.params == other.params
	}
}
