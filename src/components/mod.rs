pub mod modals;
pub mod nav;
pub mod network_graph;
pub mod notification;

/// Native confirmation dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.confirm_with_message(message).ok())
		.unwrap_or(false)
}

/// Current time in unix seconds.
pub fn now() -> i64 {
	chrono::Utc::now().timestamp()
}

/// Case-insensitive match of `query` against any of `fields`.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
	let query = query.trim().to_lowercase();
	query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn search_is_case_insensitive() {
		assert!(matches_search("", &["anything"]));
		assert!(matches_search(" LAP ", &["10.0.0.1", "laptop"]));
		assert!(!matches_search("nas", &["10.0.0.1", "laptop"]));
	}
}
