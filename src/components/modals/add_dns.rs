use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use super::{FormErrorText, Modal};
use crate::forms::DnsForm;
use crate::services;
use crate::store::actions::{refresh_dns, report, use_actions};

#[component]
pub fn AddDnsModal(open: RwSignal<bool>, #[prop(into)] network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let name = RwSignal::new(String::new());
	let address = RwSignal::new(String::new());
	let error = RwSignal::new(None::<String>);

	let on_submit = move |_: MouseEvent| {
		let form = DnsForm {
			name: name.get_untracked(),
			address: address.get_untracked(),
		};
		let dto = match form.validate(&network.get_untracked()) {
			Ok(dto) => dto,
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		let api = api.clone();
		spawn_local(async move {
			match services::dns::create(&api, &dto).await {
				Ok(entry) => {
					notifier.success(format!("DNS entry {} created", entry.fqdn()));
					open.set(false);
					name.set(String::new());
					address.set(String::new());
					refresh_dns(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create DNS entry", &err),
			}
		});
	};

	view! {
		<Modal open=open title="Create DNS entry">
			<label>"Name" <input type="text" bind:value=name /></label>
			<label>"Address" <input type="text" placeholder="10.101.0.5" bind:value=address /></label>
			<FormErrorText error=error />
			<div class="modal-actions">
				<button class="btn" on:click=move |_| open.set(false)>
					"Cancel"
				</button>
				<button class="btn btn-primary" on:click=on_submit>
					"Create entry"
				</button>
			</div>
		</Modal>
	}
}
