//! Locations, parsed elements, click events and the window boundary.
//!
//! The router talks to its host exclusively through the
//! [`Window`](crate::Window) trait; [`check_link`](crate::check_link)
//! decides which clicks belong to the router. With the `testing`
//! feature this module also provides `FakeWindow`, an in-memory host.

pub use sentier_dom::*;
