use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::MouseEvent;

use crate::components::confirm;
use crate::forms::NetworkForm;
use crate::models::Network;
use crate::services;
use crate::store::actions::{refresh_networks, report, use_actions};

#[component]
pub fn OverviewTab(network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let navigate = use_navigate();
	let current = Memo::new(move |_| store.network(&network.get()));

	let is_ipv4 = RwSignal::new(false);
	let range4 = RwSignal::new(String::new());
	let is_ipv6 = RwSignal::new(false);
	let range6 = RwSignal::new(String::new());
	let default_acl = RwSignal::new(false);
	let error = RwSignal::new(None::<String>);

	// keep the edit fields in step with the stored network
	Effect::new(move |_| {
		let form = current.get().map(|n| NetworkForm::from_network(&n)).unwrap_or_default();
		is_ipv4.set(form.is_ipv4);
		range4.set(form.address_range);
		is_ipv6.set(form.is_ipv6);
		range6.set(form.address_range6);
		default_acl.set(form.default_acl);
	});

	let save_api = api.clone();
	let on_save = move |_: MouseEvent| {
		let Some(existing) = current.get_untracked() else {
			return;
		};
		let form = NetworkForm {
			netid: existing.netid.clone(),
			is_ipv4: is_ipv4.get_untracked(),
			address_range: range4.get_untracked(),
			is_ipv6: is_ipv6.get_untracked(),
			address_range6: range6.get_untracked(),
			default_acl: default_acl.get_untracked(),
		};
		let edited = match form.validate() {
			Ok(edited) => Network {
				address_range: edited.address_range,
				address_range6: edited.address_range6,
				is_ipv4: edited.is_ipv4,
				is_ipv6: edited.is_ipv6,
				default_acl: edited.default_acl,
				..existing
			},
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		let api = save_api.clone();
		spawn_local(async move {
			match services::networks::update(&api, &edited).await {
				Ok(_) => {
					notifier.success(format!("Network {} updated", edited.netid));
					refresh_networks(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to update network", &err),
			}
		});
	};

	let on_delete = move |_: MouseEvent| {
		let netid = network.get_untracked();
		if !confirm(&format!("Delete network {netid}?")) {
			return;
		}
		let (api, navigate) = (api.clone(), navigate.clone());
		spawn_local(async move {
			match services::networks::delete(&api, &netid).await {
				Ok(()) => {
					notifier.success(format!("Network {netid} deleted"));
					refresh_networks(&api, store, notifier).await;
					navigate("/networks", Default::default());
				}
				Err(err) => report(store, notifier, "Failed to delete network", &err),
			}
		});
	};

	view! {
		<div class="overview">
			<dl class="details">
				<dt>"Listen port"</dt>
				<dd>{move || current.get().map(|n| n.default_listen_port).unwrap_or_default()}</dd>
				<dt>"MTU"</dt>
				<dd>{move || current.get().map(|n| n.default_mtu).unwrap_or_default()}</dd>
				<dt>"Keepalive"</dt>
				<dd>{move || current.get().map(|n| n.default_keepalive).unwrap_or_default()}</dd>
				<dt>"Nodes"</dt>
				<dd>{move || store.network_nodes(&network.get()).len()}</dd>
			</dl>
			<label class="inline"><input type="checkbox" bind:checked=is_ipv4 />"IPv4"</label>
			<label>"IPv4 range" <input type="text" bind:value=range4 /></label>
			<label class="inline"><input type="checkbox" bind:checked=is_ipv6 />"IPv6"</label>
			<label>"IPv6 range" <input type="text" bind:value=range6 /></label>
			<label class="inline">
				<input type="checkbox" bind:checked=default_acl />
				"Default ACL allows all"
			</label>
			<p class="form-error">{move || error.get().unwrap_or_default()}</p>
			<div class="actions">
				<button class="btn btn-primary" on:click=on_save>
					"Save"
				</button>
				<button class="btn btn-danger" on:click=on_delete>
					"Delete network"
				</button>
			</div>
		</div>
	}
}
