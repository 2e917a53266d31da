//! The view transform and its animated transitions.
//!
//! Center and zoom animate independently. Requesting a new target while a
//! transition is running restarts it from the current interpolated value.

use super::surface::Surface;

/// Smallest zoom the camera allows.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom the camera allows.
pub const MAX_ZOOM: f64 = 10.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// A point in graph coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

/// Values a [`Transition`] can interpolate.
pub trait Lerp: Copy {
	/// Linear interpolation from `self` to `to` at `t` in `[0, 1]`.
	fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
	fn lerp(self, to: Self, t: f64) -> Self {
		self + (to - self) * t
	}
}

impl Lerp for Point {
	fn lerp(self, to: Self, t: f64) -> Self {
		Point {
			x: self.x.lerp(to.x, t),
			y: self.y.lerp(to.y, t),
		}
	}
}

/// An eased move from one value to another over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<T> {
	from: T,
	to: T,
	elapsed_ms: f64,
	duration_ms: f64,
}

impl<T: Lerp> Transition<T> {
	/// Starts a transition. Negative durations count as zero.
	pub fn new(from: T, to: T, duration_ms: f64) -> Self {
		Self {
			from,
			to,
			elapsed_ms: 0.0,
			duration_ms: duration_ms.max(0.0),
		}
	}

	/// Final value.
	pub fn target(&self) -> T {
		self.to
	}

	/// True once the full duration has elapsed.
	pub fn is_done(&self) -> bool {
		self.elapsed_ms >= self.duration_ms
	}

	/// Current eased value.
	pub fn value(&self) -> T {
		if self.is_done() {
			return self.to;
		}
		self.from
			.lerp(self.to, ease_out_cubic(self.elapsed_ms / self.duration_ms))
	}

	fn advance(&mut self, dt_ms: f64) -> T {
		self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
		self.value()
	}
}

/// Center and zoom of the view, plus any running transitions.
#[derive(Clone, Debug)]
pub struct Camera {
	/// Graph point shown at the middle of the canvas.
	pub center: Point,
	/// Screen pixels per graph unit.
	pub zoom: f64,
	center_transition: Option<Transition<Point>>,
	zoom_transition: Option<Transition<f64>>,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			center: Point::default(),
			zoom: 1.0,
			center_transition: None,
			zoom_transition: None,
		}
	}
}

impl Camera {
	/// Starts moving the center to `target`. A zero duration jumps.
	pub fn animate_center(&mut self, target: Point, duration_ms: f64) {
		let transition = Transition::new(self.center, target, duration_ms);
		self.center = transition.value();
		self.center_transition = (!transition.is_done()).then_some(transition);
	}

	/// Starts zooming to `level`, clamped to the zoom range.
	pub fn animate_zoom(&mut self, level: f64, duration_ms: f64) {
		let level = level.clamp(MIN_ZOOM, MAX_ZOOM);
		let transition = Transition::new(self.zoom, level, duration_ms);
		self.zoom = transition.value();
		self.zoom_transition = (!transition.is_done()).then_some(transition);
	}

	/// The running center move, if any.
	pub fn center_transition(&self) -> Option<&Transition<Point>> {
		self.center_transition.as_ref()
	}

	/// The running zoom move, if any.
	pub fn zoom_transition(&self) -> Option<&Transition<f64>> {
		self.zoom_transition.as_ref()
	}

	/// True while either transition runs.
	pub fn is_animating(&self) -> bool {
		self.center_transition.is_some() || self.zoom_transition.is_some()
	}

	/// Moves running transitions forward by `dt_ms`, dropping finished ones.
	pub fn advance(&mut self, dt_ms: f64) {
		if let Some(t) = &mut self.center_transition {
			self.center = t.advance(dt_ms);
			if t.is_done() {
				self.center_transition = None;
			}
		}
		if let Some(t) = &mut self.zoom_transition {
			self.zoom = t.advance(dt_ms);
			if t.is_done() {
				self.zoom_transition = None;
			}
		}
	}

	/// Pans by a screen-space delta. Cancels a running center transition.
	pub fn pan_by(&mut self, dx: f64, dy: f64) {
		self.center_transition = None;
		self.center.x -= dx / self.zoom;
		self.center.y -= dy / self.zoom;
	}

	/// Multiplies the zoom by `factor`, keeping the graph point under the
	/// screen position `(sx, sy)` fixed. Cancels a running zoom transition.
	pub fn zoom_about(&mut self, sx: f64, sy: f64, factor: f64, width: f64, height: f64) {
		self.zoom_transition = None;
		let anchor = self.screen_to_graph(sx, sy, width, height);
		self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		self.center.x = anchor.x - (sx - width / 2.0) / self.zoom;
		self.center.y = anchor.y - (sy - height / 2.0) / self.zoom;
	}

	/// Graph point under canvas pixel `(sx, sy)`.
	pub fn screen_to_graph(&self, sx: f64, sy: f64, width: f64, height: f64) -> Point {
		Point {
			x: (sx - width / 2.0) / self.zoom + self.center.x,
			y: (sy - height / 2.0) / self.zoom + self.center.y,
		}
	}

	/// Applies the view transform so subsequent drawing uses graph coordinates.
	pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, height: f64) {
		surface.translate(width / 2.0, height / 2.0);
		surface.scale(self.zoom);
		surface.translate(-self.center.x, -self.center.y);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transitions_finish_on_target() {
		let mut camera = Camera::default();
		camera.animate_center(Point { x: 100.0, y: -50.0 }, 1000.0);
		camera.animate_zoom(8.0, 2000.0);

		camera.advance(500.0);
		assert!(camera.center.x > 50.0 && camera.center.x < 100.0);
		assert!(camera.zoom > 1.0 && camera.zoom < 8.0);

		camera.advance(500.0);
		assert_eq!(camera.center, Point { x: 100.0, y: -50.0 });
		assert!(camera.center_transition().is_none());
		assert!(camera.zoom < 8.0);

		camera.advance(1000.0);
		assert_eq!(camera.zoom, 8.0);
		assert!(!camera.is_animating());
	}

	#[test]
	fn retargeting_starts_from_current_value() {
		let mut camera = Camera::default();
		camera.animate_center(Point { x: 100.0, y: 0.0 }, 1000.0);
		camera.advance(500.0);
		let midway = camera.center;

		camera.animate_center(Point { x: -100.0, y: 0.0 }, 1000.0);
		assert_eq!(camera.center, midway);
		assert_eq!(camera.center_transition().unwrap().target(), Point { x: -100.0, y: 0.0 });

		camera.advance(1000.0);
		assert_eq!(camera.center.x, -100.0);
	}

	#[test]
	fn zero_duration_jumps() {
		let mut camera = Camera::default();
		camera.animate_zoom(4.0, 0.0);
		assert_eq!(camera.zoom, 4.0);
		assert!(!camera.is_animating());
	}

	#[test]
	fn zoom_about_keeps_anchor_fixed() {
		let mut camera = Camera::default();
		camera.center = Point { x: 10.0, y: 20.0 };
		let before = camera.screen_to_graph(700.0, 100.0, 800.0, 600.0);
		camera.zoom_about(700.0, 100.0, 1.1, 800.0, 600.0);
		let after = camera.screen_to_graph(700.0, 100.0, 800.0, 600.0);
		assert!((before.x - after.x).abs() < 1e-9);
		assert!((before.y - after.y).abs() < 1e-9);

		camera.zoom_about(0.0, 0.0, 1000.0, 800.0, 600.0);
		assert_eq!(camera.zoom, MAX_ZOOM);
	}

	#[test]
	fn manual_pan_cancels_center_transition_only() {
		let mut camera = Camera::default();
		camera.animate_center(Point { x: 100.0, y: 0.0 }, 1000.0);
		camera.animate_zoom(2.0, 1000.0);
		camera.pan_by(10.0, 0.0);
		assert!(camera.center_transition().is_none());
		assert!(camera.zoom_transition().is_some());
		assert_eq!(camera.center.x, -10.0);
	}
}
