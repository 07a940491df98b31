use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::confirm;
use crate::components::modals::AddNetworkModal;
use crate::services;
use crate::store::actions::{refresh_networks, report, use_actions};

#[component]
pub fn Networks() -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let add_network = RwSignal::new(false);

	let delete = Callback::new(move |netid: String| {
		if !confirm(&format!("Delete network {netid}?")) {
			return;
		}
		let api = api.clone();
		spawn_local(async move {
			match services::networks::delete(&api, &netid).await {
				Ok(()) => {
					notifier.success(format!("Network {netid} deleted"));
					refresh_networks(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete network", &err),
			}
		});
	});

	view! {
		<div class="page networks">
			<header class="page-header">
				<h1>"Networks"</h1>
				<button class="btn btn-primary" on:click=move |_| add_network.set(true)>
					"Create network"
				</button>
			</header>
			<table class="table">
				<thead>
					<tr>
						<th>"Name"</th>
						<th>"IPv4 range"</th>
						<th>"IPv6 range"</th>
						<th>"Default ACL"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						store
							.networks
							.get()
							.into_iter()
							.map(|network| {
								let netid = network.netid.clone();
								view! {
									<tr>
										<td>
											<A href=format!("/networks/{}", network.netid)>{network.netid}</A>
										</td>
										<td>{network.address_range}</td>
										<td>{network.address_range6}</td>
										<td>{if network.default_acl { "Allow" } else { "Deny" }}</td>
										<td>
											<button
												class="btn btn-danger btn-small"
												on:click=move |_| delete.run(netid.clone())
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
			<AddNetworkModal open=add_network />
		</div>
	}
}
