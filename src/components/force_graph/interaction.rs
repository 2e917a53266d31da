//! Click-to-focus camera moves.

use log::debug;

use super::camera::{Camera, Point};
use super::nodes::NodeView;
use crate::config::FocusConfig;

/// Animated camera moves offered by the render engine. Each request replaces
/// any running transition of the same kind.
pub trait CameraControl {
	/// Moves the view center to graph point `(x, y)`.
	fn center_at(&mut self, x: f64, y: f64, duration_ms: f64);
	/// Zooms to `level`.
	fn zoom(&mut self, level: f64, duration_ms: f64);
}

impl CameraControl for Camera {
	fn center_at(&mut self, x: f64, y: f64, duration_ms: f64) {
		self.animate_center(Point { x, y }, duration_ms);
	}

	fn zoom(&mut self, level: f64, duration_ms: f64) {
		self.animate_zoom(level, duration_ms);
	}
}

/// Centers on the clicked node and zooms in, both moves starting together.
pub fn focus_node<C: CameraControl + ?Sized>(camera: &mut C, node: &NodeView, focus: &FocusConfig) {
	debug!("focusing node {:?} at ({:.1}, {:.1})", node.id, node.x, node.y);
	camera.center_at(node.x, node.y, focus.center_duration_ms);
	camera.zoom(focus.zoom_level, focus.zoom_duration_ms);
}
