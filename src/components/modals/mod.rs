//! Create dialogs. Each validates locally, calls its service, refreshes the
//! store and reports through the notifier.

use leptos::prelude::*;

mod add_client;
mod add_dns;
mod add_egress;
mod add_enrollment_key;
mod add_network;
mod add_user;
mod server_malfunction;

pub use add_client::AddClientModal;
pub use add_dns::AddDnsModal;
pub use add_egress::AddEgressModal;
pub use add_enrollment_key::AddEnrollmentKeyModal;
pub use add_network::AddNetworkModal;
pub use add_user::AddUserModal;
pub use server_malfunction::ServerMalfunctionModal;

/// Dialog shell; hidden rather than unmounted so form state survives.
#[component]
pub fn Modal(open: RwSignal<bool>, #[prop(into)] title: String, children: Children) -> impl IntoView {
	view! {
		<div class="modal-backdrop" class:hidden=move || !open.get()>
			<div class="modal" role="dialog">
				<header class="modal-header">
					<h3>{title}</h3>
					<button class="modal-close" on:click=move |_| open.set(false)>
						"×"
					</button>
				</header>
				{children()}
			</div>
		</div>
	}
}

/// First validation error of the form, if any.
#[component]
fn FormErrorText(error: RwSignal<Option<String>>) -> impl IntoView {
	view! { <p class="form-error">{move || error.get().unwrap_or_default()}</p> }
}
