//! Leptos client-side app wiring and routes.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};

// Modules
pub mod components;
pub mod config;
pub mod forms;
pub mod i18n;
pub mod models;
mod pages;
pub mod services;
pub mod store;

use crate::components::modals::ServerMalfunctionModal;
use crate::components::nav::Nav;
use crate::components::notification::{NotificationHost, Notifier};
use crate::config::AppConfig;
use crate::services::auth;
use crate::store::actions::{refresh_all, refresh_server_status};
use crate::store::provide_store;

// Top-Level pages
use crate::pages::dashboard::Dashboard;
use crate::pages::enrollment_keys::EnrollmentKeys;
use crate::pages::hosts::Hosts;
use crate::pages::login::Login;
use crate::pages::network_details::NetworkDetails;
use crate::pages::networks::Networks;
use crate::pages::not_found::NotFound;
use crate::pages::users::Users;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Root component: shared context, status polling and the route table.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::from_env();
	provide_context(config.clone());
	provide_context(Notifier::new(config.notification_ms));
	let notifier = components::notification::use_notifier();
	let store = provide_store(auth::load_session());
	info!("dashboard using API at {}", config.api_url);

	if store.session.with_untracked(Option::is_some) {
		let api = store.api(&config.api_url);
		spawn_local(async move { refresh_all(&api, store, notifier).await });
	}

	let api_url = config.api_url.clone();
	let poll = move || {
		let api = store.api(&api_url);
		spawn_local(async move { refresh_server_status(&api, store).await });
	};
	poll();
	match set_interval_with_handle(poll, Duration::from_millis(config.status_poll_ms.max(1_000) as u64)) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("server status polling disabled: {err:?}"),
	}

	let logged_in = move || Some(store.is_logged_in());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || store.theme.get().as_str() />

		// sets the document title
		<Title text="Mesh Dashboard" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<NotificationHost />
			<ServerMalfunctionModal />
			<div class="layout">
				<Show when=move || store.is_logged_in()>
					<Nav />
				</Show>
				<main class="content">
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/login") view=Login />
						<ProtectedRoute
							path=path!("/")
							condition=logged_in
							redirect_path=|| "/login"
							view=Dashboard
						/>
						<ProtectedRoute
							path=path!("/networks")
							condition=logged_in
							redirect_path=|| "/login"
							view=Networks
						/>
						<ProtectedRoute
							path=path!("/networks/:netid")
							condition=logged_in
							redirect_path=|| "/login"
							view=NetworkDetails
						/>
						<ProtectedRoute
							path=path!("/hosts")
							condition=logged_in
							redirect_path=|| "/login"
							view=Hosts
						/>
						<ProtectedRoute
							path=path!("/enrollment-keys")
							condition=logged_in
							redirect_path=|| "/login"
							view=EnrollmentKeys
						/>
						<ProtectedRoute
							path=path!("/users")
							condition=logged_in
							redirect_path=|| "/login"
							view=Users
						/>
					</Routes>
				</main>
			</div>
		</Router>
	}
}
