use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{confirm, matches_search, now};
use crate::services;
use crate::store::actions::{refresh_nodes, report, use_actions};

#[component]
pub fn HostsTab(network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let search = RwSignal::new(String::new());

	let remove = Callback::new(move |(node_id, name): (String, String)| {
		if !confirm(&format!("Remove {name} from this network?")) {
			return;
		}
		let (api, netid) = (api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::nodes::delete(&api, &netid, &node_id).await {
				Ok(()) => {
					notifier.success(format!("{name} removed from {netid}"));
					refresh_nodes(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to remove host", &err),
			}
		});
	});

	view! {
		<div class="tab-hosts">
			<input type="search" placeholder="Search by name or address" bind:value=search />
			<table class="table">
				<thead>
					<tr>
						<th>"Host"</th>
						<th>"Addresses"</th>
						<th>"Endpoint"</th>
						<th>"Health"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						let (query, now) = (search.get(), now());
						store
							.extended_nodes(&network.get())
							.into_iter()
							.filter(|n| {
								matches_search(&query, &[n.name(), &n.node.address, &n.node.address6])
							})
							.map(|n| {
								let health = n.node.connectivity(now);
								let row = (n.node.id.clone(), n.name().to_string());
								view! {
									<tr>
										<td>{n.name().to_string()}</td>
										<td>{n.node.addresses()}</td>
										<td>{n.host.endpoint_ip}</td>
										<td>
											<span class=health.css_class()>{health.label()}</span>
										</td>
										<td>
											<button
												class="btn btn-danger btn-small"
												on:click=move |_| remove.run(row.clone())
											>
												"Remove"
											</button>
										</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
		</div>
	}
}
