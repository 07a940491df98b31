use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use super::{FormErrorText, Modal};
use crate::forms::NetworkForm;
use crate::services;
use crate::store::actions::{refresh_networks, report, use_actions};

#[component]
pub fn AddNetworkModal(open: RwSignal<bool>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let defaults = NetworkForm::default();
	let netid = RwSignal::new(defaults.netid);
	let is_ipv4 = RwSignal::new(defaults.is_ipv4);
	let range4 = RwSignal::new(defaults.address_range);
	let is_ipv6 = RwSignal::new(defaults.is_ipv6);
	let range6 = RwSignal::new(defaults.address_range6);
	let default_acl = RwSignal::new(defaults.default_acl);
	let error = RwSignal::new(None::<String>);

	let on_submit = move |_: MouseEvent| {
		let form = NetworkForm {
			netid: netid.get_untracked(),
			is_ipv4: is_ipv4.get_untracked(),
			address_range: range4.get_untracked(),
			is_ipv6: is_ipv6.get_untracked(),
			address_range6: range6.get_untracked(),
			default_acl: default_acl.get_untracked(),
		};
		let network = match form.validate() {
			Ok(network) => network,
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		let api = api.clone();
		spawn_local(async move {
			match services::networks::create(&api, &network).await {
				Ok(created) => {
					notifier.success(format!("Network {} created", created.netid));
					open.set(false);
					netid.set(String::new());
					refresh_networks(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create network", &err),
			}
		});
	};

	view! {
		<Modal open=open title="Create a network">
			<label>"Network name" <input type="text" maxlength="32" bind:value=netid /></label>
			<label class="inline"><input type="checkbox" bind:checked=is_ipv4 />"IPv4"</label>
			<label class:hidden=move || !is_ipv4.get()>
				"IPv4 range"
				<input type="text" placeholder="10.101.0.0/16" bind:value=range4 />
			</label>
			<label class="inline"><input type="checkbox" bind:checked=is_ipv6 />"IPv6"</label>
			<label class:hidden=move || !is_ipv6.get()>
				"IPv6 range"
				<input type="text" placeholder="fd00:101::/64" bind:value=range6 />
			</label>
			<label class="inline">
				<input type="checkbox" bind:checked=default_acl />
				"Allow all nodes to talk to each other by default"
			</label>
			<FormErrorText error=error />
			<div class="modal-actions">
				<button class="btn" on:click=move |_| open.set(false)>
					"Cancel"
				</button>
				<button class="btn btn-primary" on:click=on_submit>
					"Create network"
				</button>
			</div>
		</Modal>
	}
}
