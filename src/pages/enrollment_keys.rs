use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modals::AddEnrollmentKeyModal;
use crate::components::{confirm, now};
use crate::models::{EnrollmentKey, EnrollmentKeyKind};
use crate::services;
use crate::store::actions::{refresh_keys, report, use_actions};

fn usage(key: &EnrollmentKey) -> String {
	match key.kind() {
		EnrollmentKeyKind::Unlimited => "Unlimited".to_string(),
		EnrollmentKeyKind::Uses => format!("{} uses left", key.uses_remaining),
		EnrollmentKeyKind::TimeBound => chrono::DateTime::from_timestamp(key.expiration, 0)
			.map(|dt| format!("Until {}", dt.format("%Y-%m-%d %H:%M UTC")))
			.unwrap_or_default(),
	}
}

#[component]
pub fn EnrollmentKeys() -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let add_key = RwSignal::new(false);

	let load_api = api.clone();
	Effect::new(move |_| {
		let api = load_api.clone();
		spawn_local(async move { refresh_keys(&api, store, notifier).await });
	});

	let delete = Callback::new(move |value: String| {
		if !confirm("Delete this enrollment key?") {
			return;
		}
		let api = api.clone();
		spawn_local(async move {
			match services::enrollment_keys::delete(&api, &value).await {
				Ok(()) => {
					notifier.success("Enrollment key deleted");
					refresh_keys(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete enrollment key", &err),
			}
		});
	});

	view! {
		<div class="page enrollment-keys">
			<header class="page-header">
				<h1>"Enrollment keys"</h1>
				<button class="btn btn-primary" on:click=move |_| add_key.set(true)>
					"Create key"
				</button>
			</header>
			<table class="table">
				<thead>
					<tr>
						<th>"Name"</th>
						<th>"Type"</th>
						<th>"Usage"</th>
						<th>"Networks"</th>
						<th>"Valid"</th>
						<th>"Token"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						let now = now();
						store
							.keys
							.get()
							.into_iter()
							.map(|key| {
								let value = key.value.clone();
								let usage = usage(&key);
								let valid = key.is_valid(now);
								view! {
									<tr>
										<td>{key.tags.join(", ")}</td>
										<td>{key.kind().label()}</td>
										<td>{usage}</td>
										<td>{key.networks.join(", ")}</td>
										<td class=if valid { "status-ok" } else { "status-error" }>
											{if valid { "Valid" } else { "Invalid" }}
										</td>
										<td><code class="token">{key.token}</code></td>
										<td>
											<button
												class="btn btn-danger btn-small"
												on:click=move |_| delete.run(value.clone())
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

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn usage_text_follows_kind() {
		let mut key = EnrollmentKey {
			unlimited: true,
			..Default::default()
		};
		assert_eq!(usage(&key), "Unlimited");
		key.unlimited = false;
		key.uses_remaining = 3;
		assert_eq!(usage(&key), "3 uses left");
	}
}
