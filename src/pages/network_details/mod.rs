//! `/networks/:netid`: one network, split into tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::models::AclMatrix;
use crate::services;
use crate::store::actions::{refresh_clients, refresh_dns, refresh_nodes, report, use_actions};

mod acls;
mod clients;
mod dns;
mod egress;
mod graph;
mod hosts;
mod overview;

use acls::AclsTab;
use clients::ClientsTab;
use dns::DnsTab;
use egress::EgressTab;
use graph::GraphTab;
use hosts::HostsTab;
use overview::OverviewTab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
	#[default]
	Overview,
	Hosts,
	Graph,
	Acls,
	Clients,
	Egress,
	Dns,
}

impl Tab {
	const ALL: [Tab; 7] = [
		Tab::Overview,
		Tab::Hosts,
		Tab::Graph,
		Tab::Acls,
		Tab::Clients,
		Tab::Egress,
		Tab::Dns,
	];

	fn label(self) -> &'static str {
		match self {
			Tab::Overview => "Overview",
			Tab::Hosts => "Hosts",
			Tab::Graph => "Graph",
			Tab::Acls => "ACLs",
			Tab::Clients => "Clients",
			Tab::Egress => "Egress",
			Tab::Dns => "DNS",
		}
	}
}

#[component]
pub fn NetworkDetails() -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let params = use_params_map();
	let netid = Signal::derive(move || params.read().get("netid").unwrap_or_default());
	let tab = RwSignal::new(Tab::default());
	// grants as last fetched or saved; the ACL tab edits its own draft
	let acl = RwSignal::new(AclMatrix::new());

	// reload whatever belongs to this network whenever the route changes
	Effect::new(move |_| {
		let id = netid.get();
		if id.is_empty() {
			return;
		}
		let api = api.clone();
		spawn_local(async move {
			refresh_nodes(&api, store, notifier).await;
			refresh_clients(&api, store, notifier).await;
			refresh_dns(&api, store, notifier).await;
			match services::networks::acls(&api, &id).await {
				Ok(matrix) => acl.set(matrix),
				Err(err) => report(store, notifier, "Failed to load ACLs", &err),
			}
		});
	});

	view! {
		<div class="page network-details">
			<header class="page-header">
				<h1>{move || netid.get()}</h1>
			</header>
			<nav class="tabs">
				{Tab::ALL
					.into_iter()
					.map(|t| {
						view! {
							<button
								class="tab"
								class:active=move || tab.get() == t
								on:click=move |_| tab.set(t)
							>
								{t.label()}
							</button>
						}
					})
					.collect_view()}
			</nav>
			<section class="tab-body">
				{move || match tab.get() {
					Tab::Overview => view! { <OverviewTab network=netid /> }.into_any(),
					Tab::Hosts => view! { <HostsTab network=netid /> }.into_any(),
					Tab::Graph => view! { <GraphTab network=netid acl=acl /> }.into_any(),
					Tab::Acls => view! { <AclsTab network=netid saved=acl /> }.into_any(),
					Tab::Clients => view! { <ClientsTab network=netid /> }.into_any(),
					Tab::Egress => view! { <EgressTab network=netid /> }.into_any(),
					Tab::Dns => view! { <DnsTab network=netid /> }.into_any(),
				}}
			</section>
		</div>
	}
}
