//! Force-directed entity graph on an HTML canvas.
//!
//! Nodes are drawn as glowing circles with label cards, links as lines with
//! lower-cased relationship labels laid along them. Background drag pans,
//! the wheel zooms, and clicking a node flies the camera to it.

pub mod camera;
mod component;
pub mod interaction;
pub mod layout;
pub mod links;
mod loader;
pub mod nodes;
mod payload;
pub mod pick;
mod render;
mod state;
pub mod surface;
#[cfg(test)]
mod testing;
mod types;

pub use component::ForceGraphCanvas;
pub use loader::{LoadSequence, LoadTicket};
pub use payload::parse_graph;
pub use types::{GraphData, GraphLink, GraphNode, NodeKind};
