//! Page behavior and the component registry.

use async_trait::async_trait;
use parking_lot::RwLock;
use sentier_dom::Element;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Lifecycle hooks for a mounted piece of content.
///
/// All hooks default to no-ops, so a page implements only the stages it
/// cares about. `transition_out` runs on the old page while it is still
/// attached; `transition_in` runs on the new page once it is the only
/// one mounted. `dispose` releases resources right before detach.
#[async_trait]
pub trait Page: Send {
	/// Entry animation or set-up once the page is attached.
	async fn transition_in(&mut self) {}

	/// Exit animation or tear-down while the page is still attached.
	async fn transition_out(&mut self) {}

	/// Releases listeners and other resources before the page is dropped.
	fn dispose(&mut self) {}
}

/// Builds a page from the root element of its content.
pub type PageFactory = Arc<dyn Fn(&Element) -> Box<dyn Page> + Send + Sync>;

/// Inert page mounted for content without a component marker.
#[derive(Debug, Default)]
pub struct StaticPage;

#[async_trait]
impl Page for StaticPage {}

/// Maps component names to page factories.
///
/// Cloning is cheap and shares the underlying table, so the same
/// registry can be handed to a view and kept around for registration.
#[derive(Clone, Default)]
pub struct PageRegistry {
	factories: Arc<RwLock<HashMap<String, PageFactory>>>,
}

impl PageRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `factory` under `name`, replacing any previous entry.
	pub fn register<F>(&self, name: impl Into<String>, factory: F)
	where
		F: Fn(&Element) -> Box<dyn Page> + Send + Sync + 'static,
	{
		self.factories
			.write()
			.insert(name.into(), Arc::new(factory));
	}

	/// Builds the page registered under `name`, if any.
	pub fn build(&self, name: &str, root: &Element) -> Option<Box<dyn Page>> {
		// Factory runs outside the lock so it may register components itself.
		let factory = self.factories.read().get(name).cloned();
		factory.map(|factory| factory(root))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.factories.read().contains_key(name)
	}

	/// Registered component names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
		names.sort();
		names
	}
}

impl fmt::Debug for PageRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PageRegistry")
			.field("components", &self.names())
			.finish()
	}
}
