use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::info;

use super::layout::{ForceLayout, ForceSettings};
use super::types::TopologyGraph;

/// Cancellation handle for one live layout run.
///
/// Clones share the same flag; once stopped a job never runs again.
#[derive(Clone, Debug)]
pub struct LayoutJob {
	id: u64,
	running: Arc<AtomicBool>,
}

impl LayoutJob {
	fn new(id: u64) -> Self {
		Self {
			id,
			running: Arc::new(AtomicBool::new(true)),
		}
	}

	pub fn id(&self) -> u64 {
		self.id
	}

	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Acquire)
	}

	pub fn stop(&self) {
		if self.running.swap(false, Ordering::AcqRel) {
			info!("layout job {} stopped", self.id);
		}
	}
}

#[derive(Debug, Default)]
struct RunnerSlot {
	current: Option<LayoutJob>,
	next_id: u64,
}

/// Owns at most one live layout job for a single graph view.
///
/// Each mounted view creates its own runner, so two views never share or
/// overwrite each other's job.
#[derive(Clone, Debug, Default)]
pub struct LayoutRunner {
	slot: Arc<Mutex<RunnerSlot>>,
}

impl LayoutRunner {
	/// Stops the previous job, if any, and hands out a new running one.
	pub fn start(&self) -> LayoutJob {
		let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
		if let Some(previous) = slot.current.take() {
			previous.stop();
		}
		slot.next_id += 1;
		let job = LayoutJob::new(slot.next_id);
		info!("layout job {} started", job.id);
		slot.current = Some(job.clone());
		job
	}

	pub fn stop(&self) {
		let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
		if let Some(job) = slot.current.take() {
			job.stop();
		}
	}

	pub fn is_running(&self) -> bool {
		self.slot
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.current
			.as_ref()
			.is_some_and(LayoutJob::is_running)
	}

	pub fn current(&self) -> Option<LayoutJob> {
		self.slot
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.current
			.clone()
	}
}

/// Live force-directed layout tied to a job handle.
///
/// The owner calls [`BackgroundLayout::step`] once per frame; stepping is a
/// no-op once the job has been stopped from anywhere.
pub struct BackgroundLayout {
	layout: ForceLayout,
	job: LayoutJob,
	settings: ForceSettings,
	ticks: u32,
	calm_ticks: u32,
}

impl BackgroundLayout {
	pub fn new(graph: &TopologyGraph, settings: ForceSettings, job: LayoutJob) -> Self {
		Self {
			layout: ForceLayout::from_settings(graph, &settings),
			job,
			settings,
			ticks: 0,
			calm_ticks: 0,
		}
	}

	pub fn job(&self) -> &LayoutJob {
		&self.job
	}

	pub fn is_running(&self) -> bool {
		self.job.is_running()
	}

	pub fn stop(&self) {
		self.job.stop();
	}

	pub fn ticks(&self) -> u32 {
		self.ticks
	}

	/// Advances one tick and writes positions back. Returns `false` when idle.
	pub fn step(&mut self, graph: &mut TopologyGraph) -> bool {
		if !self.job.is_running() {
			return false;
		}
		let moved = self.layout.tick(self.settings.dt);
		self.layout.write_positions(graph);
		self.ticks += 1;

		if moved < self.settings.settle_threshold {
			self.calm_ticks += 1;
		} else {
			self.calm_ticks = 0;
		}
		if self.calm_ticks >= self.settings.settle_ticks {
			info!("layout job {} converged after {} ticks", self.job.id(), self.ticks);
			self.job.stop();
		} else if self.ticks >= self.settings.max_ticks {
			info!("layout job {} hit the tick limit", self.job.id());
			self.job.stop();
		}
		true
	}

	/// Moves a node, pinning it while the user holds it.
	pub fn place(&mut self, index: usize, x: f64, y: f64, anchor: bool) {
		self.layout.place(index, x, y, anchor);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::{LayoutSettings, build_topology, circular};
	use crate::models::{AclMatrix, Host, Node};

	fn graph() -> TopologyGraph {
		let hosts = vec![Host {
			id: "h1".into(),
			name: "one".into(),
			..Default::default()
		}];
		let nodes = ["n1", "n2", "n3"]
			.iter()
			.map(|id| Node {
				id: id.to_string(),
				host_id: "h1".into(),
				..Default::default()
			})
			.collect::<Vec<_>>();
		let mut graph = build_topology(&nodes, &hosts, &AclMatrix::new(), &[]);
		circular(&mut graph, &LayoutSettings::default());
		graph
	}

	#[test]
	fn starting_again_stops_the_previous_job() {
		let runner = LayoutRunner::default();
		let first = runner.start();
		assert!(first.is_running());

		let second = runner.start();
		assert!(!first.is_running());
		assert!(second.is_running());
		assert_ne!(first.id(), second.id());
		assert_eq!(runner.current().map(|j| j.id()), Some(second.id()));
	}

	#[test]
	fn teardown_stops_the_running_job() {
		let runner = LayoutRunner::default();
		let job = runner.start();
		let view_handle = runner.clone();
		view_handle.stop();
		assert!(!job.is_running());
		assert!(!runner.is_running());
		assert!(runner.current().is_none());
	}

	#[test]
	fn stepping_stops_after_the_tick_cap() {
		let runner = LayoutRunner::default();
		let mut graph = graph();
		let settings = ForceSettings {
			max_ticks: 5,
			settle_ticks: u32::MAX,
			..Default::default()
		};
		let mut layout = BackgroundLayout::new(&graph, settings, runner.start());
		let mut steps = 0;
		while layout.step(&mut graph) {
			steps += 1;
			assert!(steps <= 5);
		}
		assert_eq!(layout.ticks(), 5);
		assert!(!layout.is_running());
		assert!(!runner.is_running());
	}

	#[test]
	fn stopped_job_does_not_move_nodes() {
		let runner = LayoutRunner::default();
		let mut graph = graph();
		let mut layout = BackgroundLayout::new(&graph, ForceSettings::default(), runner.start());
		runner.stop();
		let before = graph.clone();
		assert!(!layout.step(&mut graph));
		assert_eq!(before, graph);
	}
}
