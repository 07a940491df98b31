use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use super::{FormErrorText, Modal};
use crate::forms::EnrollmentKeyForm;
use crate::models::EnrollmentKeyKind;
use crate::services;
use crate::store::actions::{refresh_keys, report, use_actions};

fn kind_from_value(value: &str) -> EnrollmentKeyKind {
	match value {
		"uses" => EnrollmentKeyKind::Uses,
		"time" => EnrollmentKeyKind::TimeBound,
		_ => EnrollmentKeyKind::Unlimited,
	}
}

#[component]
pub fn AddEnrollmentKeyModal(open: RwSignal<bool>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let name = RwSignal::new(String::new());
	let kind = RwSignal::new(EnrollmentKeyKind::Unlimited);
	let uses = RwSignal::new("1".to_string());
	let expiration = RwSignal::new(String::new());
	let networks = RwSignal::new(Vec::<String>::new());
	let error = RwSignal::new(None::<String>);

	let on_submit = move |_: MouseEvent| {
		let form = EnrollmentKeyForm {
			name: name.get_untracked(),
			kind: kind.get_untracked(),
			uses: uses.get_untracked(),
			expiration: expiration.get_untracked(),
			networks: networks.get_untracked(),
		};
		let dto = match form.validate() {
			Ok(dto) => dto,
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		let api = api.clone();
		spawn_local(async move {
			match services::enrollment_keys::create(&api, &dto).await {
				Ok(key) => {
					notifier.success(format!(
						"Enrollment key with name {} created",
						key.tags.join(", ")
					));
					open.set(false);
					name.set(String::new());
					refresh_keys(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create enrollment key", &err),
			}
		});
	};

	view! {
		<Modal open=open title="Create enrollment key">
			<label>"Name" <input type="text" bind:value=name /></label>
			<label>
				"Type"
				<select on:change=move |ev| kind.set(kind_from_value(&event_target_value(&ev)))>
					<option value="unlimited">"Unlimited"</option>
					<option value="uses">"Limited number of uses"</option>
					<option value="time">"Time bound"</option>
				</select>
			</label>
			<label class:hidden=move || kind.get() != EnrollmentKeyKind::Uses>
				"Number of uses"
				<input type="number" min="1" bind:value=uses />
			</label>
			<label class:hidden=move || kind.get() != EnrollmentKeyKind::TimeBound>
				"Expires at"
				<input type="datetime-local" bind:value=expiration />
			</label>
			<fieldset>
				<legend>"Networks"</legend>
				{move || {
					store
						.networks
						.get()
						.into_iter()
						.map(|network| {
							let (checked_id, toggle_id) = (network.netid.clone(), network.netid.clone());
							view! {
								<label class="inline">
									<input
										type="checkbox"
										prop:checked=move || networks.with(|n| n.contains(&checked_id))
										on:change=move |_| {
											networks
												.update(|n| {
													match n.iter().position(|id| *id == toggle_id) {
														Some(i) => {
															n.remove(i);
														}
														None => n.push(toggle_id.clone()),
													}
												})
										}
									/>
									{network.netid}
								</label>
							}
						})
						.collect_view()
				}}
			</fieldset>
			<FormErrorText error=error />
			<div class="modal-actions">
				<button class="btn" on:click=move |_| open.set(false)>
					"Cancel"
				</button>
				<button class="btn btn-primary" on:click=on_submit>
					"Create key"
				</button>
			</div>
		</Modal>
	}
}
