//! A terminal walkthrough of the navigation core.
//!
//! Drives a router against the in-memory window double: pages mount and
//! unmount through transitions, link clicks and the back button behave
//! like a browser, and every navigation reports its progress.
//!
//! ```bash
//! RUST_LOG=sentier=debug cargo run -p spa-demo
//! ```

use std::process;
use std::sync::Arc;
use std::time::Duration;

use sentier::prelude::*;
use sentier::{ClickEvent, RouteEventKind, async_trait};
use tokio::time::sleep;

struct HomePage;

#[async_trait]
impl Page for HomePage {
	async fn transition_in(&mut self) {
		println!("  [home] sliding in");
	}

	async fn transition_out(&mut self) {
		println!("  [home] sliding out");
	}
}

struct ArticlePage {
	slug: String,
}

#[async_trait]
impl Page for ArticlePage {
	async fn transition_in(&mut self) {
		println!("  [article {}] fading in", self.slug);
	}

	async fn transition_out(&mut self) {
		println!("  [article {}] fading out", self.slug);
	}

	fn dispose(&mut self) {
		println!("  [article {}] dropped", self.slug);
	}
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "sentier=info".into()),
		)
		.init();

	if let Err(e) = run().await {
		eprintln!("Error: {}", e);
		process::exit(1);
	}
}

async fn run() -> Result<(), NavError> {
	let window = Arc::new(FakeWindow::at("/home"));

	let config = RouterConfig::new()
		.routes([
			RouteDecl::from("home"),
			RouteDecl::with_path("article", "article/:slug"),
		])
		.initial_content(r#"<main data-component="home"><h1>sentier</h1></main>"#)
		.component("home", |_root| Box::new(HomePage) as Box<dyn Page>)
		.component("article", |root| {
			let slug = root.attribute("data-slug").unwrap_or("untitled").to_string();
			Box::new(ArticlePage { slug }) as Box<dyn Page>
		})
		.content_fn(|route, _base, _path| async move {
			let markup = match route.id.as_str() {
				"article" => {
					let slug = route.params.get_str("slug").unwrap_or("untitled");
					format!(
						r#"<section data-component="article" data-slug="{slug}"><h1>{slug}</h1></section>"#
					)
				}
				_ => r#"<main data-component="home"><h1>sentier</h1></main>"#.to_string(),
			};
			Ok(markup)
		});

	let router = Router::new(window.clone(), config)?;
	router.on(RouteEventKind::Update, |route| {
		println!("=> showing {}", route.id);
	});

	println!("starting at {}", window.location().pathname);
	router.start().await?;

	println!("\nclicking a link to /article/ownership-and-borrowing");
	let link = Element::new("a").with_attribute("href", "/article/ownership-and-borrowing");
	window.click(&ClickEvent::new(vec![link]));
	sleep(Duration::from_millis(50)).await;

	println!("\nnavigating by id to article \"fearless-concurrency\"");
	let params = RouteParams::new().with("slug", "fearless-concurrency");
	router.go_to_id("article", &params).await?;

	println!("\npressing the back button");
	window.back();
	sleep(Duration::from_millis(50)).await;

	if let Some(markup) = router.current_markup().await {
		println!("\nfinal document:\n{}", markup);
	}
	router.dispose();
	Ok(())
}
