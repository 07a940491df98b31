use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
	Success,
	Info,
	Error,
}

impl NoticeLevel {
	fn css_class(self) -> &'static str {
		match self {
			Self::Success => "notice notice-success",
			Self::Info => "notice notice-info",
			Self::Error => "notice notice-error",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
	pub id: u64,
	pub level: NoticeLevel,
	pub message: String,
}

/// Queue of short-lived, non-blocking messages.
#[derive(Clone, Copy)]
pub struct Notifier {
	notices: RwSignal<Vec<Notice>>,
	next_id: StoredValue<u64>,
	lifetime: Duration,
}

impl Notifier {
	pub fn new(lifetime_ms: i32) -> Self {
		Self {
			notices: RwSignal::new(Vec::new()),
			next_id: StoredValue::new(0),
			lifetime: Duration::from_millis(lifetime_ms.max(0) as u64),
		}
	}

	pub fn success(&self, message: impl Into<String>) {
		self.push(NoticeLevel::Success, message.into());
	}

	pub fn info(&self, message: impl Into<String>) {
		self.push(NoticeLevel::Info, message.into());
	}

	pub fn error(&self, message: impl Into<String>) {
		self.push(NoticeLevel::Error, message.into());
	}

	fn push(&self, level: NoticeLevel, message: String) {
		let id = self.next_id.get_value();
		self.next_id.set_value(id + 1);
		self.notices.update(|n| n.push(Notice { id, level, message }));
		let this = *self;
		set_timeout(move || this.dismiss(id), self.lifetime);
	}

	pub fn dismiss(&self, id: u64) {
		self.notices.update(|n| n.retain(|notice| notice.id != id));
	}
}

pub fn use_notifier() -> Notifier {
	expect_context::<Notifier>()
}

/// Renders the notification stack in a corner of the page.
#[component]
pub fn NotificationHost() -> impl IntoView {
	let notifier = use_notifier();
	let dismiss = Callback::new(move |id: u64| notifier.dismiss(id));

	view! {
		<div class="notifications">
			{move || {
				notifier
					.notices
					.get()
					.into_iter()
					.map(|notice| {
						let id = notice.id;
						view! {
							<div class=notice.level.css_class()>
								<span>{notice.message}</span>
								<button class="notice-close" on:click=move |_| dismiss.run(id)>
									"×"
								</button>
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}
