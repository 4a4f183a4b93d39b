//! Route declarations, path patterns and route resolution.
//!
//! This crate holds the navigation core's routing data model: the
//! [`RoutePattern`] compiler for `:name`-style path patterns, the
//! [`RouteTable`] that resolves concrete paths against an ordered list of
//! declared routes, and the value types ([`Route`], [`ResolvedRoute`],
//! [`RouteParams`]) the rest of the stack passes around.

mod error;
mod params;
mod pattern;
mod registry;
mod route;

pub use error::{PatternError, RouteError};
pub use params::{ParamValue, RouteParams};
pub use pattern::RoutePattern;
pub use registry::RouteTable;
pub use route::{ResolvedRoute, Route, RouteDecl};
