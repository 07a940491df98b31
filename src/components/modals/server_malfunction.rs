use leptos::prelude::*;

use crate::i18n::t;
use crate::store::use_store;

/// Blocks the whole UI while the server reports itself unhealthy.
#[component]
pub fn ServerMalfunctionModal() -> impl IntoView {
	let store = use_store();

	view! {
		<div class="malfunction-overlay" class:hidden=move || store.is_healthy()>
			<div class="modal">
				<h3>{t("error.servermalfunction")}</h3>
				<p>{t("error.contactyourserveradmin")}</p>
			</div>
		</div>
	}
}
