//! Location snapshots.

use serde::{Deserialize, Serialize};

/// A snapshot of the environment's current location.
///
/// Field conventions follow the DOM: `protocol` keeps its trailing
/// colon (`"https:"`), `search` its leading `?` and `hash` its leading
/// `#`; `search` and `hash` are empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	/// Scheme with trailing colon, e.g. `"https:"`.
	pub protocol: String,
	/// Host name without port, e.g. `"example.org"`.
	pub hostname: String,
	/// Path with leading slash.
	pub pathname: String,
	/// Query string including `?`, or empty.
	pub search: String,
	/// Fragment including `#`, or empty.
	pub hash: String,
}

impl Location {
	/// Creates a location at the root path of the given origin.
	pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
		Self {
			protocol: protocol.into(),
			hostname: hostname.into(),
			pathname: "/".to_string(),
			search: String::new(),
			hash: String::new(),
		}
	}

	/// Builder-style pathname override.
	pub fn with_pathname(mut self, pathname: impl Into<String>) -> Self {
		self.pathname = ensure_leading_slash(&pathname.into());
		self
	}

	/// Builder-style query override; the leading `?` is added if missing.
	pub fn with_search(mut self, search: impl Into<String>) -> Self {
		let search = search.into();
		self.search = if search.is_empty() || search.starts_with('?') {
			search
		} else {
			format!("?{search}")
		};
		self
	}

	/// Builder-style fragment override; the leading `#` is added if missing.
	pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
		let hash = hash.into();
		self.hash = if hash.is_empty() || hash.starts_with('#') {
			hash
		} else {
			format!("#{hash}")
		};
		self
	}

	/// The relative url: pathname + search + hash, with the leading
	/// slash ensured.
	pub fn relative_url(&self) -> String {
		format!(
			"{}{}{}",
			ensure_leading_slash(&self.pathname),
			self.search,
			self.hash
		)
	}

	/// The absolute url for this location.
	pub fn href(&self) -> String {
		format!("{}//{}{}", self.protocol, self.hostname, self.relative_url())
	}

	/// Applies a relative url the way a history push does: pathname,
	/// search and hash are replaced, origin is kept.
	pub fn apply_relative_url(&mut self, url: &str) {
		let (rest, hash) = match url.find('#') {
			Some(i) => (&url[..i], url[i..].to_string()),
			None => (url, String::new()),
		};
		let (pathname, search) = match rest.find('?') {
			Some(i) => (&rest[..i], rest[i..].to_string()),
			None => (rest, String::new()),
		};
		self.pathname = ensure_leading_slash(pathname);
		self.search = search;
		self.hash = hash;
	}
}

impl Default for Location {
	fn default() -> Self {
		Self::new("https:", "localhost")
	}
}

fn ensure_leading_slash(path: &str) -> String {
	format!("/{}", path.trim_start_matches('/'))
}
