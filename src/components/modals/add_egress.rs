use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use super::{FormErrorText, Modal};
use crate::forms::EgressForm;
use crate::services;
use crate::store::actions::{refresh_nodes, report, use_actions};

/// Ranges typed one per line or comma separated.
fn split_ranges(raw: &str) -> Vec<String> {
	raw.split(['\n', ','])
		.map(str::trim)
		.filter(|r| !r.is_empty())
		.map(str::to_string)
		.collect()
}

#[component]
pub fn AddEgressModal(open: RwSignal<bool>, #[prop(into)] network: Signal<String>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let node_id = RwSignal::new(String::new());
	let nat_enabled = RwSignal::new(true);
	let ranges = RwSignal::new(String::new());
	let error = RwSignal::new(None::<String>);
	let submitting = RwSignal::new(false);

	let on_submit = move |_: MouseEvent| {
		let form = EgressForm {
			node_id: node_id.get_untracked(),
			nat_enabled: nat_enabled.get_untracked(),
			ranges: split_ranges(&ranges.get_untracked()),
		};
		let (node, dto) = match form.validate() {
			Ok(valid) => valid,
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		submitting.set(true);
		let (api, netid) = (api.clone(), network.get_untracked());
		spawn_local(async move {
			match services::nodes::create_egress(&api, &netid, &node, &dto).await {
				Ok(_) => {
					notifier.success("Egress gateway created");
					open.set(false);
					ranges.set(String::new());
					refresh_nodes(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create egress gateway", &err),
			}
			submitting.set(false);
		});
	};

	view! {
		<Modal open=open title="Create egress">
			<label>
				"Host"
				<select on:change=move |ev| node_id.set(event_target_value(&ev))>
					<option value="">"Select a host"</option>
					{move || {
						store
							.extended_nodes(&network.get())
							.into_iter()
							.filter(|n| !n.node.is_egress_gateway)
							.map(|n| {
								let label = format!("{} ({})", n.name(), n.node.addresses());
								view! { <option value=n.node.id>{label}</option> }
							})
							.collect_view()
					}}
				</select>
			</label>
			<label class="inline">
				<input type="checkbox" bind:checked=nat_enabled />
				"Enable NAT"
			</label>
			<label>
				"External ranges"
				<textarea
					rows="4"
					placeholder="10.0.0.0/24, one per line"
					bind:value=ranges
				></textarea>
			</label>
			<FormErrorText error=error />
			<div class="modal-actions">
				<button class="btn" on:click=move |_| open.set(false)>
					"Cancel"
				</button>
				<button class="btn btn-primary" disabled=move || submitting.get() on:click=on_submit>
					"Create egress"
				</button>
			</div>
		</Modal>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_lines_and_commas() {
		assert_eq!(
			split_ranges("10.0.0.0/24,\n fd00::/64 \n\n"),
			vec!["10.0.0.0/24", "fd00::/64"]
		);
		assert!(split_ranges("  ").is_empty());
	}
}
