//! Runtime settings, provided to the component tree through context.

use crate::components::network_graph::LayoutSettings;

/// Where the API lives when `MESH_API_URL` was not set at build time.
const FALLBACK_API_URL: &str = "http://localhost:8081";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Scheme and host of the mesh API; route paths carry their own `/api` prefix.
	pub api_url: String,
	pub status_poll_ms: i32,
	pub notification_ms: i32,
	pub layout: LayoutSettings,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_url: FALLBACK_API_URL.to_string(),
			status_poll_ms: 10_000,
			notification_ms: 4_500,
			layout: LayoutSettings::default(),
		}
	}
}

impl AppConfig {
	/// Build-time `MESH_API_URL`, else the page's own origin.
	pub fn from_env() -> Self {
		let api_url = option_env!("MESH_API_URL")
			.map(str::to_string)
			.or_else(window_origin)
			.unwrap_or_else(|| FALLBACK_API_URL.to_string());
		Self {
			api_url: api_url.trim_end_matches('/').to_string(),
			..Self::default()
		}
	}
}

fn window_origin() -> Option<String> {
	web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_documented_intervals() {
		let config = AppConfig::default();
		assert_eq!(config.status_poll_ms, 10_000);
		assert_eq!(config.notification_ms, 4_500);
		assert!(!config.api_url.ends_with('/'));
	}
}
