//! The page lifecycle: component registry, mounting and transitions.
//!
//! Content marks its root element with a `data-component` attribute;
//! a [`PageRegistry`](crate::PageRegistry) maps that name to a factory
//! producing the [`Page`](crate::Page) that receives entry and exit
//! transitions. The [`View`](crate::View) holds at most one mounted
//! page and runs the swap sequence.

pub use sentier_view::*;
