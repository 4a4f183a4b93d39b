//! The navigation state machine.
//!
//! A [`Router`](crate::Router) is built from a
//! [`RouterConfig`](crate::RouterConfig), bound to a window with
//! [`Router::start`](crate::Router::start), and reports navigation
//! progress through [`RouteEventKind`](crate::RouteEventKind) events.
//! Content comes from a [`ContentProvider`](crate::ContentProvider).

pub use sentier_router::*;
