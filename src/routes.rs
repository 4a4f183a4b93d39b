//! Path patterns, route declarations and the route table.
//!
//! Routes are declared as bare ids (`"home"` serves `/home`) or as
//! id/path records whose paths may carry `:name` parameters with `?`,
//! `+` and `*` modifiers and optional custom captures. The
//! [`RouteTable`](crate::RouteTable) resolves concrete paths in
//! declaration order and reverses ids back into paths.

pub use sentier_routes::*;
