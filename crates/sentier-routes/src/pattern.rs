//! Path pattern compilation and matching.
//!
//! Patterns are segment oriented: literal segments are matched verbatim
//! while `:name` segments capture values. A parameter may carry a custom
//! capture in parentheses and one of the modifiers `?`, `+` or `*`:
//!
//! - `/about` - literal match
//! - `/post/:id` - one segment, captured as `id`
//! - `/post/:id(\d+)` - one segment restricted to the custom capture
//! - `/files/:rest*` - zero or more segments, captured as a sequence
//! - `/files/:rest+` - one or more segments, captured as a sequence
//! - `/page/:lang?` - zero or one segment
//!
//! Matching is case-insensitive, anchored to the whole path and tolerant
//! of a single trailing slash on either side.

use crate::error::PatternError;
use crate::params::RouteParams;
use std::collections::HashSet;
use std::fmt;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATTERN_SEGMENTS: usize = 32;

/// Maximum allowed size for the compiled regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// Default capture for a parameter segment: anything up to the next slash.
const SEGMENT_CAPTURE: &str = "[^/]+?";

/// Modifier attached to a parameter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
	None,
	/// `?` - zero or one segment.
	Optional,
	/// `+` - one or more segments.
	OneOrMore,
	/// `*` - zero or more segments.
	ZeroOrMore,
}

impl Modifier {
	fn as_str(self) -> &'static str {
		match self {
			Self::None => "",
			Self::Optional => "?",
			Self::OneOrMore => "+",
			Self::ZeroOrMore => "*",
		}
	}

	fn repeated(self) -> bool {
		matches!(self, Self::OneOrMore | Self::ZeroOrMore)
	}
}

/// One parsed piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
	/// Literal text, slashes included.
	Literal(String),
	/// A named parameter. The token owns its leading slash so the
	/// optional modifiers can elide it together with the value.
	Param {
		name: String,
		capture: Option<String>,
		modifier: Modifier,
	},
}

/// A parameter key recorded in pattern order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParamKey {
	name: String,
	repeated: bool,
}

/// A compiled path pattern.
///
/// Construction normalizes the source (leading slash ensured, one
/// trailing slash stripped) and compiles it into a single anchored,
/// case-insensitive regex with named captures.
#[derive(Debug, Clone)]
pub struct RoutePattern {
	/// The normalized source pattern.
	pattern: String,
	/// Compiled regex.
	regex: regex::Regex,
	/// Parsed tokens, kept for path generation.
	tokens: Vec<Token>,
	/// Parameter keys in pattern order.
	keys: Vec<ParamKey>,
	/// Whether the pattern has no parameters.
	is_static: bool,
}

impl RoutePattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns a [`PatternError`] if the pattern exceeds the length or
	/// segment limits, declares an invalid or duplicate parameter name,
	/// leaves a custom capture unclosed, or compiles to an invalid regex.
	pub fn compile(pattern: &str) -> Result<Self, PatternError> {
		let normalized = normalize(pattern);

		if normalized.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				len: normalized.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}
		let segment_count = normalized.split('/').count();
		if segment_count > MAX_PATTERN_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segment_count,
				max: MAX_PATTERN_SEGMENTS,
			});
		}

		let tokens = tokenize(&normalized)?;
		let (source, keys) = build_regex(&tokens)?;

		// Size limit keeps hostile patterns from exhausting memory.
		let regex = regex::RegexBuilder::new(&source)
			.case_insensitive(true)
			.size_limit(MAX_REGEX_SIZE)
			.build()?;

		let is_static = keys.is_empty();
		Ok(Self {
			pattern: normalized,
			regex,
			tokens,
			keys,
			is_static,
		})
	}

	/// Returns the normalized source pattern.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> Vec<&str> {
		self.keys.iter().map(|key| key.name.as_str()).collect()
	}

	/// Whether the pattern has no parameters.
	pub fn is_static(&self) -> bool {
		self.is_static
	}

	/// Tests a path without extracting parameters.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Matches a path, extracting parameters on success.
	///
	/// Repeating parameters are split on `/` into a sequence value. A
	/// parameter that did not participate in the match is absent from
	/// the result.
	pub fn matches(&self, path: &str) -> Option<RouteParams> {
		self.regex.captures(path).map(|caps| {
			let mut params = RouteParams::new();
			for key in &self.keys {
				if let Some(m) = caps.name(&key.name) {
					if key.repeated {
						let segments: Vec<String> =
							m.as_str().split('/').map(str::to_string).collect();
						params.insert(key.name.clone(), segments);
					} else {
						params.insert(key.name.clone(), m.as_str());
					}
				}
			}
			params
		})
	}

	/// Generates a path by substituting parameter values into the
	/// pattern.
	///
	/// Sequence values are joined with `/`. Parameters without a value
	/// keep their token text, so the caller can see what was left
	/// unresolved.
	pub fn fill(&self, params: &RouteParams) -> String {
		let mut out = String::new();
		for token in &self.tokens {
			match token {
				Token::Literal(text) => out.push_str(text),
				Token::Param {
					name,
					capture,
					modifier,
				} => match params.get(name) {
					Some(value) => {
						out.push('/');
						out.push_str(&value.to_path_piece());
					}
					None => {
						out.push('/');
						out.push(':');
						out.push_str(name);
						if let Some(capture) = capture {
							out.push('(');
							out.push_str(capture);
							out.push(')');
						}
						out.push_str(modifier.as_str());
					}
				},
			}
		}
		out
	}
}

impl PartialEq for RoutePattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

/// Ensures a leading slash and strips a single trailing slash.
fn normalize(pattern: &str) -> String {
	let trimmed = pattern.trim();
	let mut normalized = if trimmed.starts_with('/') {
		trimmed.to_string()
	} else {
		format!("/{trimmed}")
	};
	while normalized.len() > 1 && normalized.ends_with('/') {
		normalized.pop();
	}
	normalized
}

/// Splits a normalized pattern into literal and parameter tokens.
///
/// A `:` opens a parameter only at a segment boundary; anywhere else it
/// is literal text.
fn tokenize(pattern: &str) -> Result<Vec<Token>, PatternError> {
	let mut tokens = Vec::new();
	let mut literal = String::new();
	let mut chars = pattern.char_indices().peekable();

	while let Some((at, c)) = chars.next() {
		if c == '/' && matches!(chars.peek(), Some((_, ':'))) {
			chars.next(); // consume ':'
			if !literal.is_empty() {
				tokens.push(Token::Literal(std::mem::take(&mut literal)));
			}

			let mut name = String::new();
			while let Some(&(_, next)) = chars.peek() {
				if next.is_ascii_alphanumeric() || next == '_' {
					name.push(next);
					chars.next();
				} else {
					break;
				}
			}
			if name.is_empty() {
				return Err(PatternError::MissingName { at: at + 1 });
			}
			if name.starts_with(|c: char| c.is_ascii_digit()) {
				return Err(PatternError::InvalidName(name));
			}

			let capture = if matches!(chars.peek(), Some((_, '('))) {
				chars.next(); // consume '('
				Some(read_capture(&mut chars, &name)?)
			} else {
				None
			};

			let modifier = match chars.peek() {
				Some((_, '?')) => {
					chars.next();
					Modifier::Optional
				}
				Some((_, '+')) => {
					chars.next();
					Modifier::OneOrMore
				}
				Some((_, '*')) => {
					chars.next();
					Modifier::ZeroOrMore
				}
				_ => Modifier::None,
			};

			tokens.push(Token::Param {
				name,
				capture,
				modifier,
			});
		} else {
			literal.push(c);
		}
	}
	if !literal.is_empty() {
		tokens.push(Token::Literal(literal));
	}
	Ok(tokens)
}

/// Reads a custom capture up to its closing parenthesis, honoring
/// nesting and backslash escapes.
fn read_capture(
	chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
	name: &str,
) -> Result<String, PatternError> {
	let mut capture = String::new();
	let mut depth = 1usize;
	while let Some((_, c)) = chars.next() {
		match c {
			'\\' => {
				capture.push(c);
				if let Some((_, escaped)) = chars.next() {
					capture.push(escaped);
				}
			}
			'(' => {
				depth += 1;
				capture.push(c);
			}
			')' => {
				depth -= 1;
				if depth == 0 {
					return Ok(capture);
				}
				capture.push(c);
			}
			_ => capture.push(c),
		}
	}
	Err(PatternError::UnclosedCapture(name.to_string()))
}

/// Builds the anchored regex source and the ordered parameter keys.
fn build_regex(tokens: &[Token]) -> Result<(String, Vec<ParamKey>), PatternError> {
	let mut source = String::from("^");
	let mut keys = Vec::new();
	let mut seen = HashSet::new();

	for token in tokens {
		match token {
			Token::Literal(text) => {
				for c in text.chars() {
					push_escaped(&mut source, c);
				}
			}
			Token::Param {
				name,
				capture,
				modifier,
			} => {
				if !seen.insert(name.clone()) {
					return Err(PatternError::DuplicateName(name.clone()));
				}
				let inner = capture.as_deref().unwrap_or(SEGMENT_CAPTURE);
				match modifier {
					Modifier::None => {
						source.push_str(&format!("\\/(?P<{name}>{inner})"));
					}
					Modifier::Optional => {
						source.push_str(&format!("(?:\\/(?P<{name}>{inner}))?"));
					}
					Modifier::OneOrMore => {
						source.push_str(&format!(
							"\\/(?P<{name}>(?:{inner})(?:\\/(?:{inner}))*)"
						));
					}
					Modifier::ZeroOrMore => {
						source.push_str(&format!(
							"(?:\\/(?P<{name}>(?:{inner})(?:\\/(?:{inner}))*))?"
						));
					}
				}
				keys.push(ParamKey {
					name: name.clone(),
					repeated: modifier.repeated(),
				});
			}
		}
	}

	source.push_str("(?:\\/)?$");
	Ok((source, keys))
}

/// Escapes regex metacharacters in literal pattern text.
fn push_escaped(dst: &mut String, c: char) {
	match c {
		'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
		| '\\' => {
			dst.push('\\');
			dst.push(c);
		}
		_ => dst.push(c),
	}
}
