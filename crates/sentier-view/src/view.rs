//! Content mounting and the page swap sequence.

use crate::error::ViewError;
use crate::page::{Page, PageRegistry, StaticPage};
use futures::future::BoxFuture;
use sentier_dom::{Element, parse_fragment};
use std::sync::Arc;
use tracing::debug;

/// Attribute naming the component a piece of content mounts as.
pub const COMPONENT_ATTR: &str = "data-component";

/// Rewrites parsed content before it is mounted.
///
/// Runs after parsing and before the component is resolved, so a hook
/// may inject attributes, resolve includes or translate markup.
pub type CompileHook = Arc<dyn Fn(Element) -> BoxFuture<'static, Element> + Send + Sync>;

/// Hook that passes content through untouched.
pub fn identity_compile_hook() -> CompileHook {
	Arc::new(|element| Box::pin(async move { element }))
}

struct MountedPage {
	element: Element,
	page: Box<dyn Page>,
	component: Option<String>,
}

/// Owns the mounted page and drives swaps.
///
/// Outside of [`View::show_page`] the view holds either zero pages
/// (no content has arrived yet) or exactly one. A swap runs the old
/// page's exit hook while it is still attached, disposes and detaches
/// it, attaches the replacement, then runs the entry hook.
pub struct View {
	registry: PageRegistry,
	mounted: Vec<MountedPage>,
}

impl View {
	/// A view with nothing mounted.
	pub fn empty(registry: PageRegistry) -> Self {
		Self {
			registry,
			mounted: Vec::new(),
		}
	}

	/// Adopts already-rendered content, typically the markup the server
	/// delivered. The page is mounted without transitions; a later
	/// [`View::show_first_page`] plays its entry.
	///
	/// Whitespace-only markup yields an empty view.
	pub fn from_markup(registry: PageRegistry, markup: &str) -> Result<Self, ViewError> {
		let mut view = Self::empty(registry);
		if markup.trim().is_empty() {
			return Ok(view);
		}
		let element = parse_fragment(markup);
		let mounted = view.build_page(element)?;
		view.mounted.push(mounted);
		Ok(view)
	}

	/// Plays the entry hook of the adopted page. No-op when nothing is
	/// mounted.
	pub async fn show_first_page(&mut self) {
		if let Some(mounted) = self.mounted.last_mut() {
			mounted.page.transition_in().await;
		}
	}

	/// Swaps the mounted page for `content`.
	///
	/// The content is parsed, rewritten by `hook`, and resolved against
	/// the component registry before the old page is touched, so a bad
	/// component name leaves the current page in place.
	pub async fn show_page(&mut self, content: &str, hook: &CompileHook) -> Result<(), ViewError> {
		let element = parse_fragment(content);
		let element = hook(element).await;
		let replacement = self.build_page(element)?;

		if let Some(old) = self.mounted.last_mut() {
			old.page.transition_out().await;
		}
		while let Some(mut old) = self.mounted.pop() {
			old.page.dispose();
		}
		self.mounted.push(replacement);
		if let Some(mounted) = self.mounted.last_mut() {
			mounted.page.transition_in().await;
		}
		Ok(())
	}

	// The component attribute is consumed: it names the factory and is
	// stripped before the element is mounted.
	fn build_page(&self, mut element: Element) -> Result<MountedPage, ViewError> {
		let component = element.remove_attribute(COMPONENT_ATTR);
		let page: Box<dyn Page> = match &component {
			Some(name) => {
				let page = self
					.registry
					.build(name, &element)
					.ok_or_else(|| ViewError::UnknownComponent(name.clone()))?;
				debug!(component = %name, "mounting component page");
				page
			}
			None => Box::new(StaticPage),
		};
		Ok(MountedPage {
			element,
			page,
			component,
		})
	}

	/// Number of mounted pages, zero or one.
	pub fn page_count(&self) -> usize {
		self.mounted.len()
	}

	/// Component name of the mounted page, if it has one.
	pub fn current_component(&self) -> Option<&str> {
		self.mounted
			.last()
			.and_then(|mounted| mounted.component.as_deref())
	}

	/// Markup of the mounted page as currently held.
	pub fn current_markup(&self) -> Option<String> {
		self.mounted
			.last()
			.map(|mounted| mounted.element.render_to_string())
	}

	pub fn registry(&self) -> &PageRegistry {
		&self.registry
	}
}
