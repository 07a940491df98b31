use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::modals::AddNetworkModal;
use crate::i18n::t;
use crate::store::use_store;

/// Landing page with getting-started steps.
#[component]
pub fn Dashboard() -> impl IntoView {
	let store = use_store();
	let add_network = RwSignal::new(false);
	let has_networks = move || store.networks.with(|n| !n.is_empty());
	let has_hosts = move || store.hosts.with(|h| !h.is_empty());

	view! {
		<div class="page dashboard">
			<div class="banner" class:hidden=move || store.is_ee()>
				"You are on the free plan."
			</div>
			<h1>{move || format!("{}, {}", t("common.hello"), store.username())}</h1>
			<div class="cards">
				<section class="card" class:hidden=has_networks>
					<h3>"Start by creating a network"</h3>
					<p>"A network is a private overlay that hosts join."</p>
					<button class="btn btn-primary" on:click=move |_| add_network.set(true)>
						"Create network"
					</button>
				</section>
				<section class="card" class:hidden=has_hosts>
					<h3>{t("hosts.connectahost")}</h3>
					<p>"Create an enrollment key and use it to register a host."</p>
					<A href="/enrollment-keys">"Enrollment keys"</A>
				</section>
				<section class="card">
					<h3>{t("info.connectmultiplehosts")}</h3>
					<p>{t("info.connectatleasttwohostsonanetworktobegincommunication")}</p>
				</section>
				<section class="card stats">
					<p>{move || format!("{} networks", store.networks.with(Vec::len))}</p>
					<p>{move || format!("{} hosts", store.hosts.with(Vec::len))}</p>
					<p>{move || format!("{} nodes", store.nodes.with(Vec::len))}</p>
				</section>
			</div>
			<AddNetworkModal open=add_network />
		</div>
	}
}
