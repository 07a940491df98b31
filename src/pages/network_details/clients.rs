use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use crate::components::confirm;
use crate::components::modals::AddClientModal;
use crate::services;
use crate::services::dtos::CreateIngressNodeDto;
use crate::store::actions::{refresh_clients, refresh_nodes, report, use_actions};
use crate::store::ingress_gateways;

#[component]
pub fn ClientsTab(network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let add_client = RwSignal::new(false);
	let selected = RwSignal::new(None::<String>);
	let candidate = RwSignal::new(String::new());
	let gateways = Memo::new(move |_| ingress_gateways(&store.extended_nodes(&network.get())));

	let create_api = api.clone();
	let on_create_gateway = move |_: MouseEvent| {
		let node_id = candidate.get_untracked();
		if node_id.is_empty() {
			notifier.error("Select a host to turn into a gateway");
			return;
		}
		let (api, netid) = (create_api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::nodes::create_ingress(&api, &netid, &node_id, &CreateIngressNodeDto::default()).await {
				Ok(_) => {
					notifier.success("Gateway created");
					refresh_nodes(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create gateway", &err),
			}
		});
	};

	let gateway_api = api.clone();
	let delete_gateway = Callback::new(move |node_id: String| {
		if !confirm("Delete this gateway and all of its clients?") {
			return;
		}
		let (api, netid) = (gateway_api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::nodes::delete_ingress(&api, &netid, &node_id).await {
				Ok(_) => {
					notifier.success("Gateway deleted");
					if selected.get_untracked().as_deref() == Some(node_id.as_str()) {
						selected.set(None);
					}
					refresh_nodes(&api, store, notifier).await;
					refresh_clients(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete gateway", &err),
			}
		});
	});

	let delete_client = Callback::new(move |client_id: String| {
		if !confirm(&format!("Delete client {client_id}?")) {
			return;
		}
		let (api, netid) = (api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::ext_clients::delete(&api, &netid, &client_id).await {
				Ok(()) => {
					notifier.success(format!("Client {client_id} deleted"));
					refresh_clients(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete client", &err),
			}
		});
	});

	view! {
		<div class="tab-clients">
			<section>
				<header class="section-header">
					<h3>"Gateways"</h3>
					<select on:change=move |ev| candidate.set(event_target_value(&ev))>
						<option value="">"Select a host"</option>
						{move || {
							store
								.extended_nodes(&network.get())
								.into_iter()
								.filter(|n| !n.node.is_ingress_gateway)
								.map(|n| {
									let label = n.name().to_string();
									view! { <option value=n.node.id>{label}</option> }
								})
								.collect_view()
						}}
					</select>
					<button class="btn" on:click=on_create_gateway>
						"Create gateway"
					</button>
				</header>
				<table class="table">
					<thead>
						<tr>
							<th>"Gateway"</th>
							<th>"Address"</th>
							<th>"Endpoint"</th>
							<th>"Clients"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{move || {
							let clients = store.network_clients(&network.get());
							gateways
								.get()
								.into_iter()
								.map(|gw| {
									let id = gw.node.id.clone();
									let (select_id, delete_id) = (id.clone(), id.clone());
									let count = clients
										.iter()
										.filter(|c| c.ingress_gateway_id == id)
										.count();
									view! {
										<tr
											class:selected=move || selected.get().as_deref() == Some(id.as_str())
											on:click=move |_| selected.set(Some(select_id.clone()))
										>
											<td>{gw.name().to_string()}</td>
											<td>{gw.node.addresses()}</td>
											<td>{gw.host.endpoint_ip}</td>
											<td>{count}</td>
											<td>
												<button
													class="btn btn-danger btn-small"
													on:click=move |ev| {
														ev.stop_propagation();
														delete_gateway.run(delete_id.clone());
													}
												>
													"Delete gateway"
												</button>
											</td>
										</tr>
									}
								})
								.collect_view()
						}}
					</tbody>
				</table>
			</section>
			<section>
				<header class="section-header">
					<h3>"Clients"</h3>
					<button class="btn" class:hidden=move || selected.get().is_none() on:click=move |_| selected.set(None)>
						"Show all"
					</button>
					<button class="btn btn-primary" on:click=move |_| add_client.set(true)>
						"Create client"
					</button>
				</header>
				<table class="table">
					<thead>
						<tr>
							<th>"Client"</th>
							<th>"Allowed IPs"</th>
							<th>"Gateway endpoint"</th>
							<th>"Enabled"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{move || {
							let filter = selected.get();
							store
								.network_clients(&network.get())
								.into_iter()
								.filter(|c| filter.as_ref().is_none_or(|g| *g == c.ingress_gateway_id))
								.map(|client| {
									let id = client.client_id.clone();
									let allowed = client.allowed_ips();
									view! {
										<tr>
											<td>{client.client_id}</td>
											<td>{allowed}</td>
											<td>{client.ingress_gateway_endpoint}</td>
											<td>{if client.enabled { "Yes" } else { "No" }}</td>
											<td>
												<button
													class="btn btn-danger btn-small"
													on:click=move |_| delete_client.run(id.clone())
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
			</section>
			<AddClientModal open=add_client network=network />
		</div>
	}
}
