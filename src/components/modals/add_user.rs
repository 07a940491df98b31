use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use super::{FormErrorText, Modal};
use crate::forms::UserForm;
use crate::i18n::t;
use crate::services;
use crate::store::actions::{refresh_users, report, use_actions};

#[component]
pub fn AddUserModal(open: RwSignal<bool>) -> impl IntoView {
	let (api, store, notifier) = use_actions();
	let username = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let confirm = RwSignal::new(String::new());
	let is_admin = RwSignal::new(false);
	let error = RwSignal::new(None::<String>);

	let on_submit = move |_: MouseEvent| {
		let form = UserForm {
			username: username.get_untracked(),
			password: password.get_untracked(),
			confirm_password: confirm.get_untracked(),
			is_admin: is_admin.get_untracked(),
		};
		let dto = match form.validate() {
			Ok(dto) => dto,
			Err(err) => return error.set(Some(err.to_string())),
		};
		error.set(None);
		let api = api.clone();
		spawn_local(async move {
			match services::users::create(&api, &dto).await {
				Ok(user) => {
					notifier.success(format!("User {} created", user.username));
					open.set(false);
					for field in [username, password, confirm] {
						field.set(String::new());
					}
					refresh_users(&api, store, notifier).await;
				}
				Err(err) => report(store, notifier, "Failed to create user", &err),
			}
		});
	};

	view! {
		<Modal open=open title="Create user">
			<label>{t("signin.username")} <input type="text" bind:value=username /></label>
			<label>{t("signin.password")} <input type="password" bind:value=password /></label>
			<label>
				{t("signin.confirm-password")}
				<input type="password" bind:value=confirm />
			</label>
			<label class="inline"><input type="checkbox" bind:checked=is_admin />"Admin"</label>
			<FormErrorText error=error />
			<div class="modal-actions">
				<button class="btn" on:click=move |_| open.set(false)>
					"Cancel"
				</button>
				<button class="btn btn-primary" on:click=on_submit>
					"Create user"
				</button>
			</div>
		</Modal>
	}
}
