//! Click events as the environment delivers them.

use crate::element::Element;
use std::sync::atomic::{AtomicBool, Ordering};

/// Mouse button that triggered a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
	/// The primary button; the only one navigation reacts to.
	#[default]
	Primary,
	Auxiliary,
	Secondary,
}

/// Modifier-key state at click time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
	pub meta: bool,
	pub ctrl: bool,
	pub shift: bool,
	pub alt: bool,
}

impl Modifiers {
	/// Whether any modifier key was held.
	pub fn any(&self) -> bool {
		self.meta || self.ctrl || self.shift || self.alt
	}
}

/// A click event snapshot.
///
/// The environment hands the router the element chain from the event
/// target up to the document root (innermost first), plus the button
/// and modifier state. `prevent_default` uses interior mutability so a
/// shared event can be marked consumed from listener code.
#[derive(Debug)]
pub struct ClickEvent {
	chain: Vec<Element>,
	button: MouseButton,
	modifiers: Modifiers,
	default_prevented: AtomicBool,
}

impl ClickEvent {
	/// Creates a primary-button click with no modifiers held.
	pub fn new(chain: Vec<Element>) -> Self {
		Self {
			chain,
			button: MouseButton::Primary,
			modifiers: Modifiers::default(),
			default_prevented: AtomicBool::new(false),
		}
	}

	/// Builder-style button override.
	pub fn with_button(mut self, button: MouseButton) -> Self {
		self.button = button;
		self
	}

	/// Builder-style modifier override.
	pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}

	/// Marks the event as already handled by someone else.
	pub fn with_default_prevented(self) -> Self {
		self.prevent_default();
		self
	}

	/// The element chain from the target upwards, innermost first.
	pub fn target_chain(&self) -> &[Element] {
		&self.chain
	}

	/// Walks the chain to the nearest element with the given tag.
	pub fn find_ancestor(&self, tag: &str) -> Option<&Element> {
		self.chain.iter().find(|el| el.tag() == tag)
	}

	/// The button that produced the click.
	pub fn button(&self) -> MouseButton {
		self.button
	}

	/// The modifier-key state.
	pub fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	/// Suppresses the environment's default handling of this click.
	pub fn prevent_default(&self) {
		self.default_prevented.store(true, Ordering::SeqCst);
	}

	/// Whether default handling was suppressed.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.load(Ordering::SeqCst)
	}
}
