use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{debug, info};

use super::camera::Camera;
use super::interaction;
use super::layout::Simulation;
use super::nodes::NodeView;
use super::types::{GraphData, NodeKind};
use crate::config::{FocusConfig, LayoutConfig};

const NODE_MASS: f32 = 10.0;
const SEED_RADIUS: f64 = 100.0;

/// Pointer travel, in pixels, below which a press and release is a click.
pub const CLICK_TOLERANCE: f64 = 3.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub ordinal: usize,
}

#[derive(Clone, Debug)]
struct NodeRecord {
	id: String,
	kind: NodeKind,
}

#[derive(Clone, Debug)]
struct LinkRecord {
	source: Option<usize>,
	target: Option<usize>,
	label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
struct Forces {
	charge_strength: f64,
	link_distance: f64,
}

impl Forces {
	/// force_graph has repulsive charge and rest-length-free springs. A
	/// linked pair feels `charge * m² / d²` apart and `0.5 * spring * d`
	/// together, so the spring constant below balances them at
	/// `link_distance`.
	fn parameters(&self) -> SimulationParameters {
		let charge = self.charge_strength.abs() as f32;
		let distance = self.link_distance.max(1.0) as f32;
		SimulationParameters {
			force_charge: charge,
			force_spring: 2.0 * charge * NODE_MASS * NODE_MASS / distance.powi(3),
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

impl From<&LayoutConfig> for Forces {
	fn from(config: &LayoutConfig) -> Self {
		Self {
			charge_strength: config.charge_strength,
			link_distance: config.link_distance,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub last_x: f64,
	pub last_y: f64,
}

/// The running layout engine: simulated graph, camera and pointer gestures.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub camera: Camera,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	nodes: Vec<NodeRecord>,
	links: Vec<LinkRecord>,
	handles: Vec<DefaultNodeIdx>,
	forces: Forces,
	forces_dirty: bool,
}

fn seed_position(ordinal: usize, count: usize) -> (f32, f32) {
	let angle = (ordinal as f64) * 2.0 * PI / count.max(1) as f64;
	(
		(SEED_RADIUS * angle.cos()) as f32,
		(SEED_RADIUS * angle.sin()) as f32,
	)
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let forces = Forces::from(&LayoutConfig::default());
		let mut state = Self {
			graph: ForceGraph::new(forces.parameters()),
			camera: Camera::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			nodes: Vec::new(),
			links: Vec::new(),
			handles: Vec::new(),
			forces,
			forces_dirty: false,
		};
		state.set_data(data);
		state
	}

	/// Replaces the whole data set. Nodes whose id survives keep their position.
	pub fn set_data(&mut self, data: &GraphData) {
		let previous: HashMap<String, (f32, f32)> = self
			.nodes
			.iter()
			.map(|n| n.id.clone())
			.zip(self.node_positions())
			.collect();
		let count = data.nodes.len();
		let positions: Vec<(f32, f32)> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				previous
					.get(&node.id)
					.copied()
					.unwrap_or_else(|| seed_position(i, count))
			})
			.collect();

		let ordinals: HashMap<&str, usize> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.as_str(), i))
			.collect();
		self.nodes = data
			.nodes
			.iter()
			.map(|node| NodeRecord {
				id: node.id.clone(),
				kind: node.kind,
			})
			.collect();
		self.links = data
			.links
			.iter()
			.map(|link| LinkRecord {
				source: ordinals.get(link.source.as_str()).copied(),
				target: ordinals.get(link.target.as_str()).copied(),
				label: link.label.clone(),
			})
			.collect();
		self.drag = DragState::default();
		self.build_graph(&positions);

		let unresolved = self
			.links
			.iter()
			.filter(|l| l.source.is_none() || l.target.is_none())
			.count();
		info!(
			"graph data set: {} nodes, {} links ({} unresolved)",
			self.nodes.len(),
			self.links.len(),
			unresolved
		);
	}

	fn build_graph(&mut self, positions: &[(f32, f32)]) {
		let mut graph = ForceGraph::new(self.forces.parameters());
		self.handles = positions
			.iter()
			.enumerate()
			.map(|(ordinal, &(x, y))| {
				graph.add_node(NodeData {
					x,
					y,
					mass: NODE_MASS,
					is_anchor: false,
					user_data: NodeInfo { ordinal },
				})
			})
			.collect();
		for link in &self.links {
			if let (Some(src), Some(tgt)) = (link.source, link.target) {
				if src != tgt {
					graph.add_edge(self.handles[src], self.handles[tgt], EdgeData::default());
				}
			}
		}
		self.graph = graph;
	}

	fn node_positions(&self) -> Vec<(f32, f32)> {
		let mut positions = vec![(0.0, 0.0); self.nodes.len()];
		self.graph.visit_nodes(|node| {
			if let Some(slot) = positions.get_mut(node.data.user_data.ordinal) {
				*slot = (node.x(), node.y());
			}
		});
		positions
	}

	/// Nodes at their current simulated positions, in data set order.
	pub fn node_views(&self) -> Vec<NodeView<'_>> {
		self.nodes
			.iter()
			.zip(self.node_positions())
			.map(|(node, (x, y))| NodeView {
				id: &node.id,
				kind: node.kind,
				x: x as f64,
				y: y as f64,
			})
			.collect()
	}

	/// Links as `(source, target, label)`, endpoints given as node ordinals.
	pub fn link_endpoints(&self) -> impl Iterator<Item = (Option<usize>, Option<usize>, Option<&str>)> {
		self.links
			.iter()
			.map(|l| (l.source, l.target, l.label.as_deref()))
	}

	/// Current `(charge_strength, link_distance)` and whether the engine has
	/// yet to pick them up.
	pub fn forces(&self) -> (f64, f64, bool) {
		(
			self.forces.charge_strength,
			self.forces.link_distance,
			self.forces_dirty,
		)
	}

	/// One physics step of `dt` seconds plus `elapsed_ms` of camera animation.
	pub fn tick(&mut self, dt: f32, elapsed_ms: f64) {
		if self.forces_dirty {
			let positions = self.node_positions();
			self.build_graph(&positions);
			self.forces_dirty = false;
			debug!(
				"layout forces applied: charge {}, link distance {}",
				self.forces.charge_strength, self.forces.link_distance
			);
		}
		if !self.nodes.is_empty() {
			self.graph.update(dt);
		}
		self.camera.advance(elapsed_ms);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Starts a gesture. `hit` is the node under the pointer, if any.
	pub fn pointer_down(&mut self, x: f64, y: f64, hit: Option<usize>) {
		let positions = self.node_positions();
		match hit.and_then(|ordinal| Some((ordinal, *positions.get(ordinal)?))) {
			Some((ordinal, (nx, ny))) => {
				self.drag = DragState {
					node: Some(ordinal),
					start_x: x,
					start_y: y,
					node_start_x: nx,
					node_start_y: ny,
					moved: false,
				};
			}
			None => {
				self.pan = PanState {
					active: true,
					last_x: x,
					last_y: y,
				};
			}
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if let Some(ordinal) = self.drag.node {
			let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
			if !self.drag.moved && dx.hypot(dy) <= CLICK_TOLERANCE {
				return;
			}
			self.drag.moved = true;
			let k = self.camera.zoom;
			let (nx, ny) = (
				self.drag.node_start_x + (dx / k) as f32,
				self.drag.node_start_y + (dy / k) as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.data.user_data.ordinal == ordinal {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.camera
				.pan_by(x - self.pan.last_x, y - self.pan.last_y);
			self.pan.last_x = x;
			self.pan.last_y = y;
		}
	}

	/// Ends a gesture. A press and release on a node without dragging it is a
	/// click: the camera focuses on the node and its ordinal is returned.
	pub fn pointer_up(&mut self, focus: &FocusConfig) -> Option<usize> {
		let drag = std::mem::take(&mut self.drag);
		self.pan.active = false;
		let ordinal = drag.node?;
		self.release(ordinal);
		if drag.moved {
			return None;
		}
		self.focus(ordinal, focus);
		Some(ordinal)
	}

	pub fn pointer_leave(&mut self) {
		if let Some(ordinal) = std::mem::take(&mut self.drag).node {
			self.release(ordinal);
		}
		self.pan.active = false;
	}

	pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.camera
			.zoom_about(x, y, factor, self.width, self.height);
	}

	fn release(&mut self, ordinal: usize) {
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.ordinal == ordinal {
				node.data.is_anchor = false;
			}
		});
	}

	/// Runs the click-to-focus camera move for the node at `ordinal`.
	pub fn focus(&mut self, ordinal: usize, focus: &FocusConfig) {
		let positions = self.node_positions();
		let (Some(record), Some(&(x, y))) = (self.nodes.get(ordinal), positions.get(ordinal)) else {
			return;
		};
		let view = NodeView {
			id: &record.id,
			kind: record.kind,
			x: x as f64,
			y: y as f64,
		};
		interaction::focus_node(&mut self.camera, &view, focus);
	}
}

impl Simulation for ForceGraphState {
	fn set_charge_strength(&mut self, strength: f64) {
		self.forces.charge_strength = strength;
		self.forces_dirty = true;
	}

	fn set_link_distance(&mut self, distance: f64) {
		self.forces.link_distance = distance;
		self.forces_dirty = true;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::camera::Point;
	use crate::components::force_graph::layout::configure_layout;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str, kind: NodeKind) -> GraphNode {
		GraphNode {
			id: id.into(),
			kind,
		}
	}

	fn link(source: &str, target: &str, label: Option<&str>) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			label: label.map(Into::into),
		}
	}

	fn pair() -> GraphData {
		GraphData {
			nodes: vec![node("a", NodeKind::Virus), node("b", NodeKind::Drug)],
			links: vec![link("a", "b", None), link("a", "ghost", Some("x"))],
		}
	}

	#[test]
	fn seeds_nodes_on_a_circle_and_resolves_links() {
		let state = ForceGraphState::new(&pair(), 800.0, 600.0);
		let views = state.node_views();
		assert_eq!(views.len(), 2);
		assert!((views[0].x - 100.0).abs() < 1e-3 && views[0].y.abs() < 1e-3);
		assert!((views[1].x + 100.0).abs() < 1e-3);

		let links: Vec<_> = state.link_endpoints().collect();
		assert_eq!(links, [(Some(0), Some(1), None), (Some(0), None, Some("x"))]);
	}

	#[test]
	fn replacing_data_keeps_surviving_positions() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		let b = state.node_views()[1];
		let b_before = (b.x, b.y);

		state.set_data(&GraphData {
			nodes: vec![node("c", NodeKind::Paper), node("b", NodeKind::Drug)],
			links: vec![link("c", "b", Some("cites"))],
		});
		let views = state.node_views();
		let ids: Vec<_> = views.iter().map(|v| v.id).collect();
		assert_eq!(ids, ["c", "b"]);
		assert_eq!((views[1].x, views[1].y), b_before);
		assert_eq!(
			state.link_endpoints().collect::<Vec<_>>(),
			[(Some(0), Some(1), Some("cites"))]
		);
	}

	#[test]
	fn configured_forces_apply_on_next_step() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		let config = LayoutConfig {
			charge_strength: -250.0,
			link_distance: 60.0,
		};
		configure_layout(Some(&mut state), &config);
		assert_eq!(state.forces(), (-250.0, 60.0, true));

		state.tick(0.016, 16.0);
		assert_eq!(state.forces(), (-250.0, 60.0, false));
		assert_eq!(state.node_views().len(), 2);
	}

	#[test]
	fn linked_pair_settles_at_link_distance() {
		let mut state = ForceGraphState::new(
			&GraphData {
				nodes: vec![node("a", NodeKind::Virus), node("b", NodeKind::Drug)],
				links: vec![link("a", "b", None)],
			},
			800.0,
			600.0,
		);
		configure_layout(Some(&mut state), &LayoutConfig::default());
		for _ in 0..20_000 {
			state.tick(0.016, 16.0);
		}
		let views = state.node_views();
		let d = (views[0].x - views[1].x).hypot(views[0].y - views[1].y);
		assert!((d - 100.0).abs() < 5.0, "settled at {}", d);
	}

	#[test]
	fn resize_moves_the_wheel_zoom_anchor() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		state.resize(400.0, 300.0);
		assert_eq!((state.width, state.height), (400.0, 300.0));
		state.wheel(200.0, 150.0, -1.0);
		assert!((state.camera.zoom - 1.1).abs() < 1e-12);
		assert_eq!(state.camera.center, Point::default());
	}

	#[test]
	fn click_focuses_the_node() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		let target = {
			let v = state.node_views()[1];
			Point { x: v.x, y: v.y }
		};
		state.pointer_down(400.0, 300.0, Some(1));
		state.pointer_move(401.0, 301.0);
		assert_eq!(state.pointer_up(&FocusConfig::default()), Some(1));

		let center = state.camera.center_transition().unwrap();
		assert_eq!(center.target(), target);
		assert_eq!(state.camera.zoom_transition().unwrap().target(), 8.0);
	}

	#[test]
	fn dragging_a_node_moves_it_without_focusing() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		let start = {
			let v = state.node_views()[0];
			(v.x, v.y)
		};
		state.pointer_down(500.0, 300.0, Some(0));
		state.pointer_move(520.0, 310.0);
		let moved = state.node_views()[0];
		assert!((moved.x - (start.0 + 20.0)).abs() < 1e-3);
		assert!((moved.y - (start.1 + 10.0)).abs() < 1e-3);

		assert_eq!(state.pointer_up(&FocusConfig::default()), None);
		assert!(!state.camera.is_animating());
	}

	#[test]
	fn background_drag_pans() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		state.pointer_down(100.0, 100.0, None);
		state.pointer_move(130.0, 80.0);
		assert_eq!(state.camera.center, Point { x: -30.0, y: 20.0 });
		assert_eq!(state.pointer_up(&FocusConfig::default()), None);

		state.pointer_move(200.0, 200.0);
		assert_eq!(state.camera.center, Point { x: -30.0, y: 20.0 });
	}

	#[test]
	fn wheel_zooms_in_and_out() {
		let mut state = ForceGraphState::new(&pair(), 800.0, 600.0);
		state.wheel(400.0, 300.0, -1.0);
		assert!((state.camera.zoom - 1.1).abs() < 1e-12);
		state.wheel(400.0, 300.0, 1.0);
		assert!((state.camera.zoom - 0.99).abs() < 1e-12);
		assert_eq!(state.camera.center, Point::default());
	}

	#[test]
	fn empty_data_ticks_quietly() {
		let mut state = ForceGraphState::new(&GraphData::default(), 800.0, 600.0);
		state.tick(0.016, 16.0);
		assert!(state.node_views().is_empty());
		assert_eq!(state.pointer_up(&FocusConfig::default()), None);
	}
}
