use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use super::{FormErrorText, Modal};
use crate::forms::ClientForm;
use crate::services;
use crate::store::actions::{refresh_clients, report, use_actions};
use crate::store::ingress_gateways;

#[component]
pub fn AddClientModal(open: RwSignal<bool>, #[prop(into)] network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let gateway_id = RwSignal::new(String::new());
	let client_id = RwSignal::new(String::new());
	let error = RwSignal::new(None::<String>);

	let on_submit = move |_: MouseEvent| {
		let form = ClientForm {
			gateway_id: gateway_id.get_untracked(),
			client_id: client_id.get_untracked(),
		};
		let (gateway, dto) = match form.validate() {
			Ok(valid) => valid,
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		let (api, netid) = (api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::ext_clients::create(&api, &netid, &gateway, &dto).await {
				Ok(()) => {
					notifier.success("Client created");
					open.set(false);
					client_id.set(String::new());
					refresh_clients(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create client", &err),
			}
		});
	};

	view! {
		<Modal open=open title="Create client">
			<label>
				"Gateway"
				<select on:change=move |ev| gateway_id.set(event_target_value(&ev))>
					<option value="">"Select a gateway"</option>
					{move || {
						ingress_gateways(&store.extended_nodes(&network.get()))
							.into_iter()
							.map(|gw| {
								let label = gw.name().to_string();
								view! { <option value=gw.node.id>{label}</option> }
							})
							.collect_view()
					}}
				</select>
			</label>
			<label>
				"Client ID (optional)"
				<input type="text" bind:value=client_id />
			</label>
			<FormErrorText error=error />
			<div class="modal-actions">
				<button class="btn" on:click=move |_| open.set(false)>
					"Cancel"
				</button>
				<button class="btn btn-primary" on:click=on_submit>
					"Create client"
				</button>
			</div>
		</Modal>
	}
}
