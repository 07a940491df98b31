//! Topology graph of a mesh network: construction, layout and the canvas view.

mod builder;
mod component;
mod job;
mod layout;
mod render;
mod state;
pub mod types;

pub use builder::{build_topology, egress_range_id};
pub use component::NetworkGraph;
pub use job::{BackgroundLayout, LayoutJob, LayoutRunner};
pub use layout::{
	BatchSettings, ForceLayout, ForceSettings, LayoutSettings, LayoutStrategy, apply_layout,
	circular, run_batch,
};
pub use state::GraphViewState;
pub use types::{EdgeKind, GraphEdge, GraphNode, NodeKind, TopologyGraph};
