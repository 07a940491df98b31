use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::t;
use crate::store::{Theme, use_store};

#[component]
pub fn Nav() -> impl IntoView {
	let store = use_store();

	view! {
		<nav class="sidebar">
			<div class="brand">"Mesh"</div>
			<A href="/">"Dashboard"</A>
			<A href="/networks">"Networks"</A>
			<A href="/hosts">{t("common.hosts")}</A>
			<A href="/enrollment-keys">"Enrollment keys"</A>
			<A href="/users">"Users"</A>
			<div class="sidebar-footer">
				<span class="username">{move || store.username()}</span>
				<button
					class="btn btn-small"
					on:click=move |_| store.theme.update(|theme| *theme = theme.toggled())
				>
					{move || match store.theme.get() {
						Theme::Dark => "Light mode",
						Theme::Light => "Dark mode",
					}}
				</button>
				<button class="btn btn-small" on:click=move |_| store.logout()>
					{t("signin.logout")}
				</button>
			</div>
		</nav>
	}
}
