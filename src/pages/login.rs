use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use log::warn;
use web_sys::SubmitEvent;

use crate::components::notification::use_notifier;
use crate::config::AppConfig;
use crate::i18n::t;
use crate::services::ApiClient;
use crate::services::auth;
use crate::services::dtos::LoginDto;
use crate::store::actions::refresh_all;
use crate::store::use_store;

#[component]
pub fn Login() -> impl IntoView {
	let store = use_store();
	let notifier = use_notifier();
	let config = expect_context::<AppConfig>();
	let navigate = use_navigate();
	let username = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let submitting = RwSignal::new(false);

	Effect::new(move |_| {
		if store.is_logged_in() {
			navigate("/", Default::default());
		}
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let dto = LoginDto {
			username: username.get_untracked().trim().to_string(),
			password: password.get_untracked(),
		};
		if dto.username.is_empty() || dto.password.is_empty() {
			notifier.error("Enter a username and password");
			return;
		}
		submitting.set(true);
		let api = ApiClient::new(config.api_url.clone());
		spawn_local(async move {
			match auth::login(&api, &dto).await {
				Ok(session) => {
					let api = api.with_token(Some(session.token.clone()));
					store.login(session);
					refresh_all(&api, store, notifier).await;
				}
				Err(err) => {
					warn!("sign in failed: {err}");
					notifier.error(format!("Failed to sign in: {}", err.message()));
				}
			}
			submitting.set(false);
		});
	};

	view! {
		<div class="page login">
			<form class="login-form" on:submit=on_submit>
				<h1>{t("signin.signin")}</h1>
				<label>{t("signin.username")} <input type="text" autocomplete="username" bind:value=username /></label>
				<label>
					{t("signin.password")}
					<input type="password" autocomplete="current-password" bind:value=password />
				</label>
				<button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
					{t("auth.login")}
				</button>
			</form>
		</div>
	}
}
