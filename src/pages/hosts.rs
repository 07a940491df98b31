use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modals::AddEnrollmentKeyModal;
use crate::components::{confirm, matches_search};
use crate::i18n::t;
use crate::services;
use crate::store::actions::{refresh_hosts, refresh_nodes, report, use_actions};

#[component]
pub fn Hosts() -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let search = RwSignal::new(String::new());
	let add_key = RwSignal::new(false);

	let delete = Callback::new(move |(id, name): (String, String)| {
		if !confirm(&format!("Delete host {name}?")) {
			return;
		}
		let api = api.clone();
		spawn_local(async move {
			match services::hosts::delete(&api, &id).await {
				Ok(()) => {
					notifier.success(format!("Host {name} deleted"));
					refresh_hosts(&api, store, notifier).await;
					refresh_nodes(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete host", &err),
			}
		});
	});

	view! {
		<div class="page hosts">
			<header class="page-header">
				<h1>{t("common.hosts")}</h1>
				<input type="search" placeholder="Search hosts" bind:value=search />
				<button class="btn btn-primary" on:click=move |_| add_key.set(true)>
					{t("hosts.connectahost")}
				</button>
			</header>
			<table class="table">
				<thead>
					<tr>
						<th>"Name"</th>
						<th>"Endpoint"</th>
						<th>"Listen port"</th>
						<th>"OS"</th>
						<th>"Version"</th>
						<th>"NAT"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						let query = search.get();
						store
							.hosts
							.get()
							.into_iter()
							.filter(|h| matches_search(&query, &[&h.name, &h.endpoint_ip]))
							.map(|host| {
								let row = (host.id.clone(), host.name.clone());
								view! {
									<tr>
										<td>
											{host.name}
											{host.is_default.then_some(" (default)")}
										</td>
										<td>{host.endpoint_ip}</td>
										<td>{host.listen_port}</td>
										<td>{host.os}</td>
										<td>{host.version}</td>
										<td>{host.nat_type}</td>
										<td>
											<button
												class="btn btn-danger btn-small"
												on:click=move |_| delete.run(row.clone())
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
			<AddEnrollmentKeyModal open=add_key />
		</div>
	}
}
