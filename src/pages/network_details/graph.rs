use leptos::prelude::*;

use crate::components::network_graph::{LayoutStrategy, NetworkGraph};
use crate::i18n::t;
use crate::models::AclMatrix;
use crate::store::{Theme, use_store};

#[component]
pub fn GraphTab(network: Signal<String>, #[prop(into)] acl: Signal<AclMatrix>) -> impl IntoView {
	let store = use_store();
	let strategy = RwSignal::new(LayoutStrategy::default());
	let nodes = Signal::derive(move || store.network_nodes(&network.get()));
	let clients = Signal::derive(move || store.network_clients(&network.get()));
	let dark = Signal::derive(move || store.theme.get() == Theme::Dark);

	view! {
		<div class="tab-graph">
			<div class="graph-controls">
				<label>
					"Layout"
					<select on:change=move |ev| {
						if let Some(s) = LayoutStrategy::from_key(&event_target_value(&ev)) {
							strategy.set(s);
						}
					}>
						{LayoutStrategy::ALL
							.into_iter()
							.map(|s| {
								view! {
									<option value=s.key() selected=move || strategy.get() == s>
										{s.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<p class="muted" class:hidden=move || nodes.with(|n| n.len() >= 2)>
					{t("info.connectatleasttwohostsonanetworktobegincommunication")}
				</p>
			</div>
			<NetworkGraph
				nodes=nodes
				hosts=store.hosts
				acl=acl
				clients=clients
				strategy=strategy
				dark=dark
			/>
		</div>
	}
}
