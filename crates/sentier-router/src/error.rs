//! Navigation errors.

use sentier_dom::DomError;
use sentier_routes::RouteError;
use sentier_view::ViewError;
use thiserror::Error;

/// Boxed error type content providers report with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while constructing a router or navigating.
#[derive(Debug, Error)]
pub enum NavError {
	/// Another navigation is still in flight.
	#[error("a navigation is already in progress")]
	TransitionInProgress,

	/// A navigation by id named a route the table does not know.
	#[error("no route with id `{0}`")]
	UnknownRouteId(String),

	/// The content provider failed for the target route.
	#[error("loading content for route `{route}` failed")]
	Content {
		route: String,
		#[source]
		source: BoxError,
	},

	#[error(transparent)]
	Routes(#[from] RouteError),

	#[error(transparent)]
	View(#[from] ViewError),

	#[error(transparent)]
	History(#[from] DomError),
}
