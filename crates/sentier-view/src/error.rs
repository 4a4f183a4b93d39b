//! View errors.

use thiserror::Error;

/// Errors raised while mounting page content.
#[derive(Debug, Error)]
pub enum ViewError {
	/// Content named a component the registry has never heard of.
	#[error("unknown component `{0}` in page content")]
	UnknownComponent(String),
}
