//! Extracted path parameters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single extracted parameter value.
///
/// Repeating parameters (`:name+`, `:name*`) produce [`ParamValue::Many`]
/// with one entry per matched segment; everything else produces
/// [`ParamValue::Single`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
	/// One path segment.
	Single(String),
	/// The segments of a repeating parameter, in path order.
	Many(Vec<String>),
}

impl ParamValue {
	/// Returns the value as a single segment, if it is one.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Single(value) => Some(value),
			Self::Many(_) => None,
		}
	}

	/// Returns the value as a segment list, if it is one.
	pub fn as_many(&self) -> Option<&[String]> {
		match self {
			Self::Single(_) => None,
			Self::Many(values) => Some(values),
		}
	}

	/// Renders the value the way it appeared in the path, joining
	/// repeated segments with `/`.
	pub fn to_path_piece(&self) -> String {
		match self {
			Self::Single(value) => value.clone(),
			Self::Many(values) => values.join("/"),
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_path_piece())
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}

impl From<Vec<String>> for ParamValue {
	fn from(values: Vec<String>) -> Self {
		Self::Many(values)
	}
}

impl From<Vec<&str>> for ParamValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Many(values.into_iter().map(str::to_string).collect())
	}
}

/// The parameters extracted by one successful pattern match.
///
/// Keys are parameter names; a parameter that did not participate in the
/// match (an unmatched optional) is absent rather than empty. The map
/// iterates in name order so renderings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams {
	values: BTreeMap<String, ParamValue>,
}

impl RouteParams {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a parameter, replacing any previous value for the name.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
		self.values.insert(name.into(), value.into());
	}

	/// Builder-style insert for literal construction.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Returns the value for `name`.
	pub fn get(&self, name: &str) -> Option<&ParamValue> {
		self.values.get(name)
	}

	/// Returns the value for `name` as a single segment.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.values.get(name).and_then(ParamValue::as_str)
	}

	/// Returns the value for `name` as a segment list.
	pub fn get_many(&self, name: &str) -> Option<&[String]> {
		self.values.get(name).and_then(ParamValue::as_many)
	}

	/// Whether a parameter named `name` is present.
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Number of extracted parameters.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether no parameters were extracted.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over `(name, value)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<'a> IntoIterator for &'a RouteParams {
	type Item = (&'a String, &'a ParamValue);
	type IntoIter = std::collections::btree_map::Iter<'a, String, ParamValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

impl FromIterator<(String, ParamValue)> for RouteParams {
	fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}
