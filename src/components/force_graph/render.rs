use super::links::paint_link;
use super::nodes::{paint_node, paint_node_pointer_area};
use super::pick::probe_color;
use super::state::ForceGraphState;
use super::surface::Surface;
use crate::config::{GraphConfig, NodeStyle};

const BACKGROUND: &str = "#f8fafc";

/// Draws one frame: background, then links, then nodes on top.
pub fn render<S: Surface + ?Sized>(state: &ForceGraphState, config: &GraphConfig, surface: &mut S) {
	surface.set_fill(BACKGROUND);
	surface.fill_rect(0.0, 0.0, state.width, state.height);
	surface.save();
	state.camera.apply(surface, state.width, state.height);

	let scale = state.camera.zoom;
	let nodes = state.node_views();
	for (source, target, label) in state.link_endpoints() {
		paint_link(
			source.and_then(|i| nodes.get(i)),
			target.and_then(|i| nodes.get(i)),
			label,
			scale,
			&config.link,
			config.node.radius,
			surface,
		);
	}
	for node in &nodes {
		paint_node(node, scale, &config.node, surface);
	}
	surface.restore();
}

/// Draws the pick buffer: every node's hit area in its probe color.
pub fn render_pointer_areas<S: Surface + ?Sized>(
	state: &ForceGraphState,
	style: &NodeStyle,
	surface: &mut S,
) {
	surface.clear_rect(0.0, 0.0, state.width, state.height);
	surface.save();
	state.camera.apply(surface, state.width, state.height);
	for (ordinal, node) in state.node_views().iter().enumerate() {
		paint_node_pointer_area(node, &probe_color(ordinal), style, surface);
	}
	surface.restore();
}
