use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use crate::models::{AclLevel, AclMatrix};
use crate::services;
use crate::store::actions::{report, use_actions};

/// Flips the grant between `a` and `b` in a working copy of the matrix.
fn toggle_cell(draft: &mut AclMatrix, a: &str, b: &str) {
	let next = if draft.can_communicate(a, b) {
		AclLevel::Denied
	} else {
		AclLevel::Allowed
	};
	draft.set_pair(a, b, next);
}

/// Editable pairwise grants. A cell toggles both directions at once.
///
/// Edits go to a local draft; `saved` only changes from the server's reply,
/// so the graph never shows unsaved grants.
#[component]
pub fn AclsTab(network: Signal<String>, saved: RwSignal<AclMatrix>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let draft = RwSignal::new(saved.get_untracked());
	let dirty = Memo::new(move |_| saved.with(|s| draft.with(|d| d != s)));
	let nodes = Memo::new(move |_| store.extended_nodes(&network.get()));

	// a fresh load or save replaces whatever was being edited
	Effect::new(move |_| draft.set(saved.get()));

	let toggle = Callback::new(move |(a, b): (String, String)| {
		draft.update(|m| toggle_cell(m, &a, &b));
	});

	let on_reset = move |_: MouseEvent| draft.set(saved.get_untracked());

	let on_save = move |_: MouseEvent| {
		let (api, netid, matrix) = (api.clone(), network.get_untracked(), draft.get_untracked());
		spawn_local(async move {
			match services::networks::update_acls(&api, &netid, &matrix).await {
				Ok(updated) => {
					saved.set(updated);
					notifier.success("ACLs updated");
				}
				Err(err) => report(store, notifier, "Failed to update ACLs", &err),
			}
		});
	};

	view! {
		<div class="tab-acls">
			<table class="table acl-matrix">
				<thead>
					<tr>
						<th></th>
						{move || {
							nodes
								.get()
								.into_iter()
								.map(|n| view! { <th>{n.name().to_string()}</th> })
								.collect_view()
						}}
					</tr>
				</thead>
				<tbody>
					{move || {
						let nodes = nodes.get();
						nodes
							.iter()
							.map(|row| {
								let cells = nodes
									.iter()
									.map(|col| {
										let (a, b) = (row.node.id.clone(), col.node.id.clone());
										if a == b {
											return view! { <td class="acl-self">"-"</td> }.into_any();
										}
										let (ca, cb) = (a.clone(), b.clone());
										let allowed = move || draft.with(|m| m.can_communicate(&ca, &cb));
										let allowed_class = allowed.clone();
										view! {
											<td>
												<button
													class="acl-cell"
													class:allowed=allowed_class
													on:click=move |_| toggle.run((a.clone(), b.clone()))
												>
													{move || if allowed() { "Allowed" } else { "Denied" }}
												</button>
											</td>
										}
											.into_any()
									})
									.collect_view();
								view! {
									<tr>
										<th>{row.name().to_string()}</th>
										{cells}
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
			<div class="actions">
				<button class="btn" disabled=move || !dirty.get() on:click=on_reset>
					"Reset"
				</button>
				<button class="btn btn-primary" disabled=move || !dirty.get() on:click=on_save>
					"Save ACLs"
				</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggling_a_draft_leaves_saved_alone() {
		let mut saved = AclMatrix::new();
		saved.set_pair("node-1", "node-2", AclLevel::Allowed);

		let mut draft = saved.clone();
		toggle_cell(&mut draft, "node-1", "node-2");

		assert!(!draft.can_communicate("node-1", "node-2"));
		assert!(saved.can_communicate("node-1", "node-2"));
		assert_ne!(draft, saved);
	}

	#[test]
	fn toggling_twice_restores_a_clean_draft() {
		let mut saved = AclMatrix::new();
		saved.set_pair("node-1", "node-2", AclLevel::Denied);

		let mut draft = saved.clone();
		toggle_cell(&mut draft, "node-2", "node-1");
		assert_eq!(draft.level("node-1", "node-2"), AclLevel::Allowed);
		assert_eq!(draft.level("node-2", "node-1"), AclLevel::Allowed);

		toggle_cell(&mut draft, "node-1", "node-2");
		assert_eq!(draft, saved);
	}

	#[test]
	fn one_sided_grant_toggles_to_allowed() {
		let mut draft = AclMatrix::new();
		draft.set("node-1", "node-2", AclLevel::Allowed);
		toggle_cell(&mut draft, "node-1", "node-2");
		assert!(draft.can_communicate("node-1", "node-2"));
	}
}
