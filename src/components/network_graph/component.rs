use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::html::Canvas;
use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::builder::build_topology;
use super::job::{BackgroundLayout, LayoutRunner};
use super::layout::{LayoutSettings, LayoutStrategy, apply_layout};
use super::render;
use super::state::GraphViewState;
use super::types::{
	CLIENT_COLOR, DISCONNECTED_EDGE_COLOR, EGRESS_COLOR, EGRESS_RANGE_COLOR, HOST_COLOR,
	HOST_EDGE_COLOR,
};
use crate::config::AppConfig;
use crate::models::{AclMatrix, ExternalClient, Host, Node};

const DARK_LABEL: &str = "#e6e6e6";
const LIGHT_LABEL: &str = "#262626";
const FALLBACK_WIDTH: f64 = 800.0;

fn label_color(dark: bool) -> String {
	if dark { DARK_LABEL } else { LIGHT_LABEL }.to_string()
}

/// Canvas width for a container of `parent` CSS pixels; hidden or
/// unattached containers report zero.
fn fit_width(parent: Option<i32>) -> f64 {
	parent
		.map(f64::from)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH)
}

fn container_width(canvas: &HtmlCanvasElement) -> f64 {
	fit_width(canvas.parent_element().map(|p| p.client_width()))
}

/// Mouse position relative to the canvas' top-left corner.
fn local_point(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Interactive topology view of one network.
///
/// The graph is rebuilt from scratch whenever any input changes. A live
/// force layout belongs to this view alone and is stopped on rebuild and on
/// unmount.
#[component]
pub fn NetworkGraph(
	#[prop(into)] nodes: Signal<Vec<Node>>,
	#[prop(into)] hosts: Signal<Vec<Host>>,
	#[prop(into)] acl: Signal<AclMatrix>,
	#[prop(into)] clients: Signal<Vec<ExternalClient>>,
	#[prop(into)] strategy: Signal<LayoutStrategy>,
	#[prop(into, optional)] dark: Signal<bool>,
	#[prop(default = 560.0)] height: f64,
) -> impl IntoView {
	let settings: LayoutSettings = use_context::<AppConfig>()
		.map(|config| config.layout)
		.unwrap_or_default();
	let canvas_ref = NodeRef::<Canvas>::new();
	let runner = LayoutRunner::default();
	let alive = Arc::new(AtomicBool::new(true));
	let (layout_running, set_layout_running) = signal(false);

	let graph =
		Memo::new(move |_| build_topology(&nodes.get(), &hosts.get(), &acl.get(), &clients.get()));

	let state: Rc<RefCell<Option<GraphViewState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (state_init, animate_init, resize_cb_init, runner_init, alive_init, settings_init) = (
		state.clone(),
		animate.clone(),
		resize_cb.clone(),
		runner.clone(),
		alive.clone(),
		settings.clone(),
	);
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let mut topology = graph.get();
		let strategy = strategy.get();
		let label = label_color(dark.get_untracked());

		let w = container_width(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);

		let background = apply_layout(&mut topology, strategy, &settings_init, &runner_init);
		set_layout_running.set(background.is_some());

		let mut slot = state_init.borrow_mut();
		match slot.as_mut() {
			Some(s) => {
				s.graph = topology;
				s.background = background;
				s.hover = Default::default();
				s.release();
				s.resize(w, height);
			}
			None => *slot = Some(GraphViewState::new(topology, background, w, height, label)),
		}
		drop(slot);

		if animate_init.borrow().is_some() {
			return;
		}
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("canvas 2d context unavailable");
			return;
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let nw = container_width(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, height);
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb_init.borrow().as_ref()) {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, alive_anim, resize_anim) = (
			state_init.clone(),
			animate_init.clone(),
			alive_init.clone(),
			resize_cb_init.clone(),
		);
		let mut was_running = false;
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.load(Ordering::Acquire) {
				// unmounted: the loop ends here, take the resize listener with it
				if let (Some(window), Some(cb)) = (web_sys::window(), resize_anim.borrow().as_ref()) {
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
				let running = s.layout_running();
				if running != was_running {
					was_running = running;
					set_layout_running.set(running);
				}
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_theme = state.clone();
	Effect::new(move |_| {
		let color = label_color(dark.get());
		if let Some(ref mut s) = *state_theme.borrow_mut() {
			s.label_color = color;
		}
	});

	let (runner_cleanup, alive_cleanup) = (runner.clone(), alive.clone());
	on_cleanup(move || {
		alive_cleanup.store(false, Ordering::Release);
		runner_cleanup.stop();
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(idx) => s.begin_drag(idx, x, y),
				None => s.begin_pan(x, y),
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				s.pan_to(x, y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.release();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.release();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(x, y, ev.delta_y() < 0.0);
		}
	};

	let (state_toggle, runner_toggle) = (state.clone(), runner.clone());
	let on_toggle = move |_: MouseEvent| {
		if runner_toggle.is_running() {
			runner_toggle.stop();
			set_layout_running.set(false);
			return;
		}
		if let Some(ref mut s) = *state_toggle.borrow_mut() {
			let job = runner_toggle.start();
			s.background = Some(BackgroundLayout::new(&s.graph, settings.force.clone(), job));
			set_layout_running.set(true);
		}
	};

	let legend = [
		(HOST_COLOR, "Host"),
		(EGRESS_COLOR, "Egress gateway"),
		(EGRESS_RANGE_COLOR, "External ranges"),
		(CLIENT_COLOR, "Client"),
		(HOST_EDGE_COLOR, "Connected"),
		(DISCONNECTED_EDGE_COLOR, "Disconnected"),
	];

	view! {
		<div class="network-graph">
			<div class="graph-toolbar" class:hidden=move || strategy.get() != LayoutStrategy::ForceBackground>
				<button class="btn btn-small" on:click=on_toggle>
					{move || if layout_running.get() { "Stop layout" } else { "Resume layout" }}
				</button>
			</div>
			<canvas
				node_ref=canvas_ref
				class="network-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<ul class="graph-legend">
				{legend
					.into_iter()
					.map(|(color, label)| {
						view! {
							<li>
								<span class="swatch" style=format!("background: {color}")></span>
								{label}
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn canvas_follows_container_width() {
		assert_eq!(fit_width(Some(1024)), 1024.0);
		assert_eq!(fit_width(Some(640)), 640.0);
	}

	#[test]
	fn collapsed_container_falls_back() {
		assert_eq!(fit_width(Some(0)), FALLBACK_WIDTH);
		assert_eq!(fit_width(None), FALLBACK_WIDTH);
	}
}
