//! Error types for pattern compilation and route parsing.

use thiserror::Error;

/// Errors raised while compiling a path pattern.
#[derive(Debug, Error)]
pub enum PatternError {
	/// The pattern string exceeds the allowed byte length.
	#[error("pattern is {len} bytes, exceeding the {max} byte limit")]
	TooLong { len: usize, max: usize },

	/// The pattern has more segments than the allowed maximum.
	#[error("pattern has {count} segments, exceeding the limit of {max}")]
	TooManySegments { count: usize, max: usize },

	/// A `:` was not followed by a parameter name.
	#[error("parameter name missing after `:` at byte {at}")]
	MissingName { at: usize },

	/// A parameter name contains characters outside `[A-Za-z0-9_]` or
	/// starts with a digit.
	#[error("invalid parameter name `{0}`")]
	InvalidName(String),

	/// The same parameter name appears twice in one pattern.
	#[error("duplicate parameter name `{0}`")]
	DuplicateName(String),

	/// A custom capture `(...)` was opened but never closed.
	#[error("unclosed custom capture for parameter `{0}`")]
	UnclosedCapture(String),

	/// The compiled expression was rejected by the regex engine.
	#[error("pattern failed to compile: {0}")]
	Regex(#[from] regex::Error),
}

/// Errors raised while parsing route declarations into a [`RouteTable`].
///
/// [`RouteTable`]: crate::RouteTable
#[derive(Debug, Error)]
pub enum RouteError {
	/// The declaration list was empty.
	#[error("route list is empty")]
	Empty,

	/// A declaration at `index` has an empty id.
	#[error("route entry {index} has an empty id")]
	EmptyId { index: usize },

	/// A route's path failed to compile.
	#[error("route `{id}`: {source}")]
	Pattern {
		id: String,
		#[source]
		source: PatternError,
	},
}
