//! Page lifecycle for the navigation core.
//!
//! Content arrives as a markup string, gets parsed into an
//! [`Element`](sentier_dom::Element), optionally rewritten by a
//! [`CompileHook`], and mounted as a [`Page`]. The [`View`] owns at most
//! one mounted page at a time and drives the exit/dispose/entry sequence
//! when content is swapped.
//!
//! Interactive pages are produced by a [`PageRegistry`]: content marks
//! its root with a `data-component` attribute and the registry maps that
//! name to a factory. Content without the attribute mounts as an inert
//! [`StaticPage`].

mod error;
mod page;
mod view;

pub use error::ViewError;
pub use page::{Page, PageFactory, PageRegistry, StaticPage};
pub use view::{COMPONENT_ATTR, CompileHook, View, identity_compile_hook};
