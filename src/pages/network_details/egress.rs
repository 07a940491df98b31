use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm;
use crate::components::modals::AddEgressModal;
use crate::services;
use crate::store::actions::{refresh_nodes, report, use_actions};
use crate::store::{egress_gateways, external_routes};

#[component]
pub fn EgressTab(network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let add_egress = RwSignal::new(false);
	let selected = RwSignal::new(None::<String>);
	let gateways = Memo::new(move |_| egress_gateways(&store.extended_nodes(&network.get())));
	let routes = Memo::new(move |_| {
		external_routes(&store.network_nodes(&network.get()), selected.get().as_deref())
	});

	let delete_egress = Callback::new(move |node_id: String| {
		if !confirm("Delete this egress gateway?") {
			return;
		}
		let (api, netid) = (api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::nodes::delete_egress(&api, &netid, &node_id).await {
				Ok(_) => {
					notifier.success("Egress gateway deleted");
					if selected.get_untracked().as_deref() == Some(node_id.as_str()) {
						selected.set(None);
					}
					refresh_nodes(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete egress gateway", &err),
			}
		});
	});

	view! {
		<div class="tab-egress">
			<section>
				<header class="section-header">
					<h3>"Egress gateways"</h3>
					<button class="btn btn-primary" on:click=move |_| add_egress.set(true)>
						"Create egress"
					</button>
				</header>
				<table class="table">
					<thead>
						<tr>
							<th>"Host"</th>
							<th>"Address"</th>
							<th>"NAT"</th>
							<th>"Ranges"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{move || {
							gateways
								.get()
								.into_iter()
								.map(|gw| {
									let id = gw.node.id.clone();
									let (select_id, delete_id) = (id.clone(), id.clone());
									view! {
										<tr
											class:selected=move || selected.get().as_deref() == Some(id.as_str())
											on:click=move |_| selected.set(Some(select_id.clone()))
										>
											<td>{gw.name().to_string()}</td>
											<td>{gw.node.addresses()}</td>
											<td>{if gw.node.egress_nat_enabled { "Yes" } else { "No" }}</td>
											<td>{gw.node.egress_gateway_ranges.len()}</td>
											<td>
												<button
													class="btn btn-danger btn-small"
													on:click=move |ev| {
														ev.stop_propagation();
														delete_egress.run(delete_id.clone());
													}
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
			<section>
				<header class="section-header">
					<h3>"External routes"</h3>
					<button class="btn" class:hidden=move || selected.get().is_none() on:click=move |_| selected.set(None)>
						"Show all"
					</button>
				</header>
				<table class="table">
					<thead>
						<tr>
							<th>"Range"</th>
							<th>"Gateway"</th>
						</tr>
					</thead>
					<tbody>
						{move || {
							let names = store.host_map();
							let nodes = store.network_nodes(&network.get());
							routes
								.get()
								.into_iter()
								.map(|route| {
									let gateway = nodes
										.iter()
										.find(|n| n.id == route.node_id)
										.and_then(|n| names.get(&n.host_id))
										.map(|h| h.name.clone())
										.unwrap_or(route.node_id);
									view! {
										<tr>
											<td>{route.range}</td>
											<td>{gateway}</td>
										</tr>
									}
								})
								.collect_view()
						}}
					</tbody>
				</table>
			</section>
			<AddEgressModal open=add_egress network=network />
		</div>
	}
}
