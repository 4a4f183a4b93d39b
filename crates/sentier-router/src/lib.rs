//! Navigation state machine for the sentier core.
//!
//! The [`Router`] ties the other crates together: it resolves paths
//! through a route table, pulls page content from a [`ContentProvider`],
//! hands the content to a view for the transition sequence, and reports
//! progress through [`RouteEventKind`] events. History changes and link
//! clicks arrive through the window the router is bound to.
//!
//! One navigation runs at a time. While a transition is in flight new
//! requests are rejected; a request for the route already shown is
//! skipped without side effects. On failure the router rolls back to
//! the state it had before the attempt and emits
//! [`RouteEventKind::Failed`].

mod config;
mod error;
mod events;
mod router;

pub use config::{ContentProvider, IdContent, NotFoundHandler, RouterConfig, provider_fn};
pub use error::{BoxError, NavError};
pub use events::{RouteEventKind, RouteListener, SubscriberId};
pub use router::Router;
