use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modals::AddDnsModal;
use crate::components::{confirm, matches_search};
use crate::services;
use crate::store::actions::{refresh_dns, report, use_actions};

#[component]
pub fn DnsTab(network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let add_dns = RwSignal::new(false);
	let search = RwSignal::new(String::new());

	let delete = Callback::new(move |name: String| {
		if !confirm(&format!("Delete DNS entry {name}?")) {
			return;
		}
		let (api, netid) = (api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::dns::delete(&api, &netid, &name).await {
				Ok(()) => {
					notifier.success(format!("DNS entry {name} deleted"));
					refresh_dns(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete DNS entry", &err),
			}
		});
	});

	view! {
		<div class="tab-dns">
			<header class="section-header">
				<input type="search" placeholder="Search DNS" bind:value=search />
				<button class="btn btn-primary" on:click=move |_| add_dns.set(true)>
					"Create DNS entry"
				</button>
			</header>
			<table class="table">
				<thead>
					<tr>
						<th>"Name"</th>
						<th>"Address"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						let query = search.get();
						store
							.network_dns(&network.get())
							.into_iter()
							.filter(|d| matches_search(&query, &[&d.name, &d.address, &d.address6]))
							.map(|entry| {
								let name = entry.name.clone();
								let fqdn = entry.fqdn();
								let address = if entry.address.is_empty() { entry.address6 } else { entry.address };
								view! {
									<tr>
										<td>{fqdn}</td>
										<td>{address}</td>
										<td>
											<button
												class="btn btn-danger btn-small"
												on:click=move |_| delete.run(name.clone())
											>
												"Delete"
											</button>
										</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
			<AddDnsModal open=add_dns network=network />
		</div>
	}
}
