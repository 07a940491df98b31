use leptos::prelude::*;
use mesh_dashboard::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
