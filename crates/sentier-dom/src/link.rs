//! Click-to-navigation eligibility.

use crate::event::{ClickEvent, MouseButton};
use crate::location::Location;
use tracing::trace;
use url::Url;

/// Decides whether a click should turn into an in-app navigation.
///
/// The checks run in a fixed order: the nearest anchor in the target
/// chain is found, clicks the environment or the user already claimed
/// are left alone (default prevented, non-primary button, modifier
/// keys), and anchors that opt out of in-app handling are skipped
/// (`download`, `rel="external"`, `target="_blank"`, `mailto:` hrefs,
/// or an href resolving to another protocol or host).
///
/// Once a click qualifies, its default handling is suppressed *before*
/// the current-location comparison: a link to the page being shown
/// produces no navigation, but the browser must not reload either. In
/// that case `None` is returned. Otherwise the anchor's resolved
/// relative url (pathname + search + hash) is returned.
pub fn check_link(event: &ClickEvent, location: &Location) -> Option<String> {
	let anchor = event.find_ancestor("a")?;

	if event.default_prevented()
		|| event.button() != MouseButton::Primary
		|| event.modifiers().any()
	{
		return None;
	}
	if anchor.has_attribute("download") || anchor.attribute("rel") == Some("external") {
		return None;
	}
	if anchor.attribute("target") == Some("_blank") {
		return None;
	}

	let href = anchor.attribute("href")?;
	if href.starts_with("mailto:") {
		return None;
	}

	let base = Url::parse(&location.href()).ok()?;
	let resolved = base.join(href).ok()?;
	if resolved.scheme() != location.protocol.trim_end_matches(':')
		|| resolved.host_str() != Some(location.hostname.as_str())
	{
		trace!(href, "external link left to the environment");
		return None;
	}

	// Ours from here on; the environment must not handle it, even when
	// the target is the page already being shown.
	event.prevent_default();

	let search = resolved.query().map_or(String::new(), |q| format!("?{q}"));
	if resolved.path() == location.pathname && search == location.search {
		return None;
	}

	let hash = resolved
		.fragment()
		.map_or(String::new(), |f| format!("#{f}"));
	Some(format!("{}{search}{hash}", resolved.path()))
}
