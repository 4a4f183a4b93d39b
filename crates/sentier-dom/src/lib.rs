//! Browser-surface model for the navigation core.
//!
//! The router never touches a real browser directly; it talks to the
//! small interface boundary defined here. [`Window`] abstracts the host
//! environment (location, history, event sources, task spawning),
//! [`ClickEvent`] and [`check_link`] cover link interception, and
//! [`Element`] is the owned fragment model page content is parsed into.
//!
//! The `testing` feature adds [`FakeWindow`], an in-memory environment
//! used by the test suites and runnable demos.

mod element;
mod error;
mod event;
mod link;
mod location;
#[cfg(feature = "testing")]
mod testing;
mod window;

pub use element::{Element, Node, parse_fragment};
pub use error::DomError;
pub use event::{ClickEvent, Modifiers, MouseButton};
pub use link::check_link;
pub use location::Location;
#[cfg(feature = "testing")]
pub use testing::FakeWindow;
pub use window::{ClickListener, ListenerId, PopStateListener, Window};
