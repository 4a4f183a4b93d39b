//! Owned element fragments.
//!
//! Page content travels through the navigation core as markup strings
//! and is parsed into this small owned model: enough DOM to read and
//! strip attributes, walk children and render back to a string. It is
//! not a general HTML parser; it handles the well-formed page partials
//! a content provider returns.

/// A fragment node: an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
}

impl Node {
	/// The element inside this node, if it is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(el) => Some(el),
			Self::Text(_) => None,
		}
	}

	/// The text inside this node, if it is one.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Element(_) => None,
			Self::Text(text) => Some(text),
		}
	}
}

/// Tags that never hold children.
const VOID_TAGS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// An owned element: tag, attributes in document order, children.
///
/// Tag and attribute names are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: String,
	attributes: Vec<(String, String)>,
	children: Vec<Node>,
}

impl Element {
	/// Creates an empty element.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into().to_ascii_lowercase(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Builder-style attribute set.
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	/// Builder-style child append.
	pub fn with_child(mut self, node: Node) -> Self {
		self.children.push(node);
		self
	}

	/// Builder-style text child append.
	pub fn with_text(self, text: impl Into<String>) -> Self {
		self.with_child(Node::Text(text.into()))
	}

	/// The lowercased tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Whether this element never holds children.
	pub fn is_void(&self) -> bool {
		VOID_TAGS.contains(&self.tag.as_str())
	}

	/// Returns an attribute value. Names compare case-insensitively.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		let name = name.to_ascii_lowercase();
		self.attributes
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Whether an attribute is present.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attribute(name).is_some()
	}

	/// Sets an attribute, replacing an existing value in place.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into().to_ascii_lowercase();
		let value = value.into();
		match self.attributes.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attributes.push((name, value)),
		}
	}

	/// Removes an attribute, returning its value.
	pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
		let name = name.to_ascii_lowercase();
		let index = self.attributes.iter().position(|(n, _)| *n == name)?;
		Some(self.attributes.remove(index).1)
	}

	/// The attributes in document order.
	pub fn attributes(&self) -> &[(String, String)] {
		&self.attributes
	}

	/// Appends a child node.
	pub fn append_child(&mut self, node: Node) {
		self.children.push(node);
	}

	/// The child nodes in document order.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// The first child that is an element.
	pub fn first_element_child(&self) -> Option<&Element> {
		self.children.iter().find_map(Node::as_element)
	}

	/// Concatenated text of all descendant text nodes.
	pub fn text(&self) -> String {
		let mut out = String::new();
		collect_text(self, &mut out);
		out
	}

	/// Renders the element back to markup, escaping text and attribute
	/// values.
	pub fn render_to_string(&self) -> String {
		let mut out = String::new();
		render_element(self, &mut out);
		out
	}
}

fn collect_text(el: &Element, out: &mut String) {
	for child in &el.children {
		match child {
			Node::Text(text) => out.push_str(text),
			Node::Element(inner) => collect_text(inner, out),
		}
	}
}

fn render_element(el: &Element, out: &mut String) {
	out.push('<');
	out.push_str(&el.tag);
	for (name, value) in &el.attributes {
		out.push(' ');
		out.push_str(name);
		out.push_str("=\"");
		out.push_str(&escape_attr(value));
		out.push('"');
	}
	out.push('>');
	if el.is_void() {
		return;
	}
	for child in &el.children {
		match child {
			Node::Text(text) => out.push_str(&escape_text(text)),
			Node::Element(inner) => render_element(inner, out),
		}
	}
	out.push_str("</");
	out.push_str(&el.tag);
	out.push('>');
}

fn escape_text(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
	escape_text(value).replace('"', "&quot;")
}

/// Decodes the named and numeric entities the renderer produces.
fn decode_entities(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(start) = rest.find('&') {
		out.push_str(&rest[..start]);
		let tail = &rest[start..];
		let decoded = [
			("&amp;", '&'),
			("&lt;", '<'),
			("&gt;", '>'),
			("&quot;", '"'),
			("&#39;", '\''),
			("&apos;", '\''),
		]
		.iter()
		.find(|(entity, _)| tail.starts_with(entity));
		match decoded {
			Some((entity, c)) => {
				out.push(*c);
				rest = &tail[entity.len()..];
			}
			None => {
				out.push('&');
				rest = &tail[1..];
			}
		}
	}
	out.push_str(rest);
	out
}

/// Parses a markup fragment into its root element.
///
/// The first element in the fragment is the root; anything after it is
/// ignored, the way a container's first child would be read. Content
/// that starts with bare text is wrapped in a `div`, and an empty
/// fragment yields an empty `div`.
pub fn parse_fragment(markup: &str) -> Element {
	let mut parser = Parser {
		input: markup,
		pos: 0,
	};
	let nodes = parser.parse_nodes(true);

	let mut iter = nodes
		.into_iter()
		.skip_while(|node| matches!(node, Node::Text(text) if text.trim().is_empty()));
	match iter.next() {
		Some(Node::Element(el)) => el,
		Some(text_node) => {
			let mut wrapper = Element::new("div");
			wrapper.append_child(text_node);
			for node in iter {
				wrapper.append_child(node);
			}
			wrapper
		}
		None => Element::new("div"),
	}
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Parser<'a> {
	fn rest(&self) -> &'a str {
		&self.input[self.pos..]
	}

	fn bump(&mut self, bytes: usize) {
		self.pos += bytes;
	}

	fn eat(&mut self, prefix: &str) -> bool {
		if self.rest().starts_with(prefix) {
			self.bump(prefix.len());
			true
		} else {
			false
		}
	}

	fn skip_whitespace(&mut self) {
		let trimmed = self.rest().trim_start();
		self.pos = self.input.len() - trimmed.len();
	}

	/// Parses sibling nodes until the input ends or, unless at the top
	/// level, a closing tag is next.
	fn parse_nodes(&mut self, top_level: bool) -> Vec<Node> {
		let mut nodes = Vec::new();
		loop {
			let rest = self.rest();
			if rest.is_empty() {
				break;
			}
			if rest.starts_with("</") {
				if top_level {
					// Stray closing tag; skip it.
					self.skip_past('>');
					continue;
				}
				break;
			}
			if rest.starts_with("<!--") {
				self.skip_comment();
			} else if rest.starts_with("<!") || rest.starts_with("<?") {
				self.skip_past('>');
			} else if starts_element(rest) {
				if let Some(el) = self.parse_element() {
					nodes.push(Node::Element(el));
				}
			} else {
				nodes.push(Node::Text(self.parse_text()));
			}
		}
		nodes
	}

	fn parse_text(&mut self) -> String {
		let rest = self.rest();
		// A `<` that does not open a tag construct is literal text.
		let mut end = rest.len();
		for (i, c) in rest.char_indices() {
			if i == 0 || c != '<' {
				continue;
			}
			let tail = &rest[i..];
			if tail.starts_with("</")
				|| tail.starts_with("<!")
				|| tail.starts_with("<?")
				|| starts_element(tail)
			{
				end = i;
				break;
			}
		}
		let text = &rest[..end];
		self.bump(text.len());
		decode_entities(text)
	}

	fn parse_element(&mut self) -> Option<Element> {
		self.bump(1); // consume '<'
		let tag = self.take_name();
		if tag.is_empty() {
			return None;
		}
		let mut el = Element::new(tag);

		loop {
			self.skip_whitespace();
			if self.eat("/>") {
				return Some(el);
			}
			if self.eat(">") {
				break;
			}
			let name = self.take_name();
			if name.is_empty() {
				// Malformed attribute text; drop one char and go on.
				if let Some(c) = self.rest().chars().next() {
					self.bump(c.len_utf8());
				} else {
					return Some(el);
				}
				continue;
			}
			self.skip_whitespace();
			let value = if self.eat("=") {
				self.skip_whitespace();
				self.take_attr_value()
			} else {
				String::new()
			};
			el.set_attribute(name, value);
		}

		if el.is_void() {
			return Some(el);
		}
		for child in self.parse_nodes(false) {
			el.append_child(child);
		}
		if self.rest().starts_with("</") {
			self.skip_past('>');
		}
		Some(el)
	}

	fn take_name(&mut self) -> String {
		let mut name = String::new();
		for c in self.rest().chars() {
			if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':' {
				name.push(c);
			} else {
				break;
			}
		}
		self.bump(name.len());
		name
	}

	fn take_attr_value(&mut self) -> String {
		let rest = self.rest();
		if let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
			let inner = &rest[1..];
			let end = inner.find(quote).unwrap_or(inner.len());
			let value = &inner[..end];
			self.bump(1 + end + if end < inner.len() { 1 } else { 0 });
			decode_entities(value)
		} else {
			let end = rest
				.find(|c: char| c.is_whitespace() || c == '>')
				.unwrap_or(rest.len());
			let value = &rest[..end];
			self.bump(end);
			decode_entities(value)
		}
	}

	fn skip_comment(&mut self) {
		match self.rest().find("-->") {
			Some(i) => self.bump(i + 3),
			None => self.pos = self.input.len(),
		}
	}

	fn skip_past(&mut self, c: char) {
		match self.rest().find(c) {
			Some(i) => self.bump(i + c.len_utf8()),
			None => self.pos = self.input.len(),
		}
	}
}

/// Whether `rest` begins an opening tag.
fn starts_element(rest: &str) -> bool {
	let mut chars = rest.chars();
	chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}
