//! Loads the store from the API, reporting failures as notifications.

use leptos::prelude::*;
use log::{debug, warn};

use super::{Store, use_store};
use crate::components::notification::{Notifier, use_notifier};
use crate::config::AppConfig;
use crate::services::{self, ApiClient, ApiError};

/// Client for the current session, from context.
pub fn use_api() -> ApiClient {
	let config = expect_context::<AppConfig>();
	use_store().api(&config.api_url)
}

/// Surfaces a failed call; an expired session signs the user out.
pub fn report(store: Store, notifier: Notifier, context: &str, err: &ApiError) {
	warn!("{context}: {err}");
	if err.is_unauthorized() {
		store.logout();
	}
	notifier.error(format!("{context}: {}", err.message()));
}

macro_rules! loader {
	($(#[$doc:meta])* $name:ident, $field:ident, $call:path, $what:literal) => {
		$(#[$doc])*
		pub async fn $name(api: &ApiClient, store: Store, notifier: Notifier) {
			match $call(api).await {
				Ok(items) => {
					debug!("loaded {} {}", items.len(), $what);
					store.$field.set(items);
				}
				Err(err) => report(store, notifier, concat!("Failed to load ", $what), &err),
			}
		}
	};
}

loader!(refresh_hosts, hosts, services::hosts::list, "hosts");
loader!(refresh_nodes, nodes, services::nodes::list, "nodes");
loader!(refresh_networks, networks, services::networks::list, "networks");
loader!(refresh_clients, clients, services::ext_clients::list, "clients");
loader!(refresh_dns, dns, services::dns::list, "DNS entries");
loader!(refresh_keys, keys, services::enrollment_keys::list, "enrollment keys");
loader!(refresh_users, users, services::users::list, "users");

pub async fn refresh_server_config(api: &ApiClient, store: Store, notifier: Notifier) {
	match services::server::config(api).await {
		Ok(config) => store.server_config.set(Some(config)),
		Err(err) => report(store, notifier, "Failed to load server config", &err),
	}
}

/// Status polling stays quiet on failure; the overlay covers that case.
pub async fn refresh_server_status(api: &ApiClient, store: Store) {
	match services::server::status(api).await {
		Ok(status) => {
			if !status.is_healthy() {
				warn!("server reports unhealthy status: {status:?}");
			}
			store.set_server_status(status);
		}
		Err(err) => warn!("server status unavailable: {err}"),
	}
}

/// Everything the dashboard shows after sign in.
pub async fn refresh_all(api: &ApiClient, store: Store, notifier: Notifier) {
	refresh_server_config(api, store, notifier).await;
	refresh_networks(api, store, notifier).await;
	refresh_hosts(api, store, notifier).await;
	refresh_nodes(api, store, notifier).await;
	refresh_clients(api, store, notifier).await;
	refresh_dns(api, store, notifier).await;
}

/// Context handles every page action needs.
pub fn use_actions() -> (ApiClient, Store, Notifier) {
	(use_api(), use_store(), use_notifier())
}
