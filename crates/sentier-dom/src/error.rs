//! Errors surfaced by window environments.

use thiserror::Error;

/// Failures reported by a [`Window`] implementation.
///
/// [`Window`]: crate::Window
#[derive(Debug, Error)]
pub enum DomError {
	/// The history API rejected a state push.
	#[error("history rejected `{url}`: {reason}")]
	History { url: String, reason: String },
}
