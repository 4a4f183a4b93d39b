//! Router configuration and the content provider boundary.

use crate::error::BoxError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use sentier_dom::Element;
use sentier_routes::{ResolvedRoute, RouteDecl};
use sentier_view::{CompileHook, Page, PageRegistry, identity_compile_hook};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Supplies page content for a resolved route.
///
/// `base_content` is the configured content prefix and `path` the raw
/// relative url being navigated to, so providers can build the address
/// of a partial from either.
#[async_trait]
pub trait ContentProvider: Send + Sync {
	async fn content(
		&self,
		route: &ResolvedRoute,
		base_content: &str,
		path: &str,
	) -> Result<String, BoxError>;
}

#[async_trait]
impl<P> ContentProvider for Arc<P>
where
	P: ContentProvider + ?Sized,
{
	async fn content(
		&self,
		route: &ResolvedRoute,
		base_content: &str,
		path: &str,
	) -> Result<String, BoxError> {
		(**self).content(route, base_content, path).await
	}
}

/// Default provider: resolves to the bare route id, which mounts as a
/// plain text page.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdContent;

#[async_trait]
impl ContentProvider for IdContent {
	async fn content(
		&self,
		route: &ResolvedRoute,
		_base_content: &str,
		_path: &str,
	) -> Result<String, BoxError> {
		Ok(route.id.clone())
	}
}

type ProviderFn =
	Box<dyn Fn(ResolvedRoute, String, String) -> BoxFuture<'static, Result<String, BoxError>> + Send + Sync>;

struct FnProvider {
	provider: ProviderFn,
}

#[async_trait]
impl ContentProvider for FnProvider {
	async fn content(
		&self,
		route: &ResolvedRoute,
		base_content: &str,
		path: &str,
	) -> Result<String, BoxError> {
		(self.provider)(route.clone(), base_content.to_string(), path.to_string()).await
	}
}

/// Wraps an async closure as a [`ContentProvider`].
pub fn provider_fn<F, Fut>(provider: F) -> Arc<dyn ContentProvider>
where
	F: Fn(ResolvedRoute, String, String) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
{
	Arc::new(FnProvider {
		provider: Box::new(move |route, base, path| Box::pin(provider(route, base, path))),
	})
}

/// Invoked with the raw path when no route matches. Installing one
/// replaces the default-route fallback; the router performs no state
/// change for the miss.
pub type NotFoundHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Everything a [`Router`](crate::Router) is built from.
///
/// The default configuration declares a single `home` route, serves
/// [`IdContent`], and passes content through uncompiled.
pub struct RouterConfig {
	/// Route declarations; the first is the default route.
	pub(crate) routes: Vec<RouteDecl>,
	/// Prefix stripped from incoming paths and prepended to reversed ones.
	pub(crate) base_url: String,
	/// Opaque string handed to the content provider on every load.
	pub(crate) base_content: String,
	/// Markup already on screen when the router starts.
	pub(crate) initial_content: String,
	pub(crate) registry: PageRegistry,
	pub(crate) provider: Arc<dyn ContentProvider>,
	pub(crate) before_compile: CompileHook,
	pub(crate) not_found: Option<NotFoundHandler>,
	pub(crate) verbose: bool,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			routes: vec![RouteDecl::from("home")],
			base_url: String::new(),
			base_content: String::new(),
			initial_content: String::new(),
			registry: PageRegistry::new(),
			provider: Arc::new(IdContent),
			before_compile: identity_compile_hook(),
			not_found: None,
			verbose: false,
		}
	}
}

impl RouterConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the route declarations. Order matters: resolution takes
	/// the first match and the first entry is the default route.
	pub fn routes<I, D>(mut self, routes: I) -> Self
	where
		I: IntoIterator<Item = D>,
		D: Into<RouteDecl>,
	{
		self.routes = routes.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the prefix the application is served under, e.g. `/app`.
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets the string passed to the content provider alongside every
	/// route, typically a prefix for partial urls.
	pub fn base_content(mut self, base_content: impl Into<String>) -> Self {
		self.base_content = base_content.into();
		self
	}

	/// Markup the server already rendered; adopted as the first page.
	pub fn initial_content(mut self, initial_content: impl Into<String>) -> Self {
		self.initial_content = initial_content.into();
		self
	}

	/// Supplies a prebuilt component registry.
	pub fn registry(mut self, registry: PageRegistry) -> Self {
		self.registry = registry;
		self
	}

	/// Registers a page factory under a component name.
	pub fn component<F>(self, name: impl Into<String>, factory: F) -> Self
	where
		F: Fn(&Element) -> Box<dyn Page> + Send + Sync + 'static,
	{
		self.registry.register(name, factory);
		self
	}

	/// Installs the content provider.
	pub fn content_provider<P>(mut self, provider: P) -> Self
	where
		P: ContentProvider + 'static,
	{
		self.provider = Arc::new(provider);
		self
	}

	/// Installs an async closure as the content provider.
	pub fn content_fn<F, Fut>(mut self, provider: F) -> Self
	where
		F: Fn(ResolvedRoute, String, String) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
	{
		self.provider = provider_fn(provider);
		self
	}

	/// Installs a hook that rewrites parsed content before mounting.
	pub fn before_compile<F, Fut>(mut self, hook: F) -> Self
	where
		F: Fn(Element) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Element> + Send + 'static,
	{
		self.before_compile = Arc::new(move |element| Box::pin(hook(element)));
		self
	}

	/// Installs a handler for paths no route matches.
	pub fn not_found<F>(mut self, handler: F) -> Self
	where
		F: Fn(&str) + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(handler));
		self
	}

	/// Logs navigations at info level instead of debug.
	pub fn verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}
}

impl fmt::Debug for RouterConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouterConfig")
			.field("routes", &self.routes)
			.field("base_url", &self.base_url)
			.field("base_content", &self.base_content)
			.field("registry", &self.registry)
			.field("has_not_found", &self.not_found.is_some())
			.field("verbose", &self.verbose)
			.finish()
	}
}
