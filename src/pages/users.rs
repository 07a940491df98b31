use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm;
use crate::components::modals::AddUserModal;
use crate::services;
use crate::store::actions::{refresh_users, report, use_actions};

#[component]
pub fn Users() -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let add_user = RwSignal::new(false);
	let groups = RwSignal::new(Vec::<String>::new());

	let load_api = api.clone();
	Effect::new(move |_| {
		let api = load_api.clone();
		spawn_local(async move {
			refresh_users(&api, store, notifier).await;
			match services::users::groups(&api).await {
				Ok(names) => groups.set(names),
				Err(err) => log::warn!("user groups unavailable: {err}"),
			}
		});
	});

	let delete = Callback::new(move |username: String| {
		if username == store.username() {
			notifier.error("You cannot delete your own account");
			return;
		}
		if !confirm(&format!("Delete user {username}?")) {
			return;
		}
		let api = api.clone();
		spawn_local(async move {
			match services::users::delete(&api, &username).await {
				Ok(()) => {
					notifier.success(format!("User {username} deleted"));
					refresh_users(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to delete user", &err),
			}
		});
	});

	view! {
		<div class="page users">
			<header class="page-header">
				<h1>"Users"</h1>
				<button class="btn btn-primary" on:click=move |_| add_user.set(true)>
					"Create user"
				</button>
			</header>
			<table class="table">
				<thead>
					<tr>
						<th>"Username"</th>
						<th>"Role"</th>
						<th>"Networks"</th>
						<th>"Groups"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						store
							.users
							.get()
							.into_iter()
							.map(|user| {
								let username = user.username.clone();
								view! {
									<tr>
										<td>{user.username}</td>
										<td>{if user.is_admin { "Admin" } else { "User" }}</td>
										<td>{user.networks.unwrap_or_default().join(", ")}</td>
										<td>{user.groups.unwrap_or_default().join(", ")}</td>
										<td>
											<button
												class="btn btn-danger btn-small"
												on:click=move |_| delete.run(username.clone())
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
			<p class="muted">
				{move || {
					groups
						.with(|g| {
							if g.is_empty() {
								String::new()
							} else {
								format!("Groups: {}", g.join(", "))
							}
						})
				}}
			</p>
			<AddUserModal open=add_user />
		</div>
	}
}
