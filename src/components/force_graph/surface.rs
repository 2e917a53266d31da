//! The 2D drawing surface the painters draw on.

use web_sys::CanvasRenderingContext2d;

/// Drawing primitives used by the painters, modelled on the canvas 2D context.
///
/// Paths are built with [`Surface::begin_path`] and the path primitives, then
/// painted with [`Surface::fill`] or [`Surface::stroke`].
pub trait Surface {
	/// Pushes the transform and style state.
	fn save(&mut self);
	/// Pops the state pushed by the matching [`Surface::save`].
	fn restore(&mut self);
	/// Moves the origin.
	fn translate(&mut self, x: f64, y: f64);
	/// Rotates by `angle` radians.
	fn rotate(&mut self, angle: f64);
	/// Uniform scale.
	fn scale(&mut self, k: f64);

	/// Fill style for shapes and text.
	fn set_fill(&mut self, color: &str);
	/// Stroke style and line width.
	fn set_stroke(&mut self, color: &str, width: f64);
	/// Sets the shadow used as glow. A blur of 0 clears it.
	fn set_shadow(&mut self, color: &str, blur: f64);

	/// CSS font shorthand, e.g. `600 14px Inter, sans-serif`.
	fn set_font(&mut self, font: &str);
	/// Canvas `textAlign` keyword.
	fn set_text_align(&mut self, align: &str);
	/// Canvas `textBaseline` keyword.
	fn set_text_baseline(&mut self, baseline: &str);
	/// Width of `text` in the current font.
	fn measure_text(&self, text: &str) -> f64;
	/// Draws `text` anchored at `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64);

	/// Fills an axis-aligned rectangle.
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	/// Clears a rectangle to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

	/// Starts a new path.
	fn begin_path(&mut self);
	/// Adds a full circle to the current path.
	fn circle(&mut self, x: f64, y: f64, r: f64);
	/// Starts a subpath at `(x, y)`.
	fn move_to(&mut self, x: f64, y: f64);
	/// Adds a straight segment.
	fn line_to(&mut self, x: f64, y: f64);
	/// Adds a quadratic Bézier segment with control point `(cpx, cpy)`.
	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
	/// Closes the current subpath.
	fn close_path(&mut self);
	/// Fills the current path.
	fn fill(&mut self);
	/// Strokes the current path.
	fn stroke(&mut self);
}

type Ctx = CanvasRenderingContext2d;

impl Surface for Ctx {
	fn save(&mut self) {
		Ctx::save(self);
	}

	fn restore(&mut self) {
		Ctx::restore(self);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = Ctx::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = Ctx::rotate(self, angle);
	}

	fn scale(&mut self, k: f64) {
		let _ = Ctx::scale(self, k, k);
	}

	fn set_fill(&mut self, color: &str) {
		Ctx::set_fill_style_str(self, color);
	}

	fn set_stroke(&mut self, color: &str, width: f64) {
		Ctx::set_stroke_style_str(self, color);
		Ctx::set_line_width(self, width);
	}

	fn set_shadow(&mut self, color: &str, blur: f64) {
		Ctx::set_shadow_color(self, color);
		Ctx::set_shadow_blur(self, blur);
	}

	fn set_font(&mut self, font: &str) {
		Ctx::set_font(self, font);
	}

	fn set_text_align(&mut self, align: &str) {
		Ctx::set_text_align(self, align);
	}

	fn set_text_baseline(&mut self, baseline: &str) {
		Ctx::set_text_baseline(self, baseline);
	}

	fn measure_text(&self, text: &str) -> f64 {
		Ctx::measure_text(self, text)
			.map(|m| m.width())
			.unwrap_or(0.0)
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64) {
		let _ = Ctx::fill_text(self, text, x, y);
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		Ctx::fill_rect(self, x, y, w, h);
	}

	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		Ctx::clear_rect(self, x, y, w, h);
	}

	fn begin_path(&mut self) {
		Ctx::begin_path(self);
	}

	fn circle(&mut self, x: f64, y: f64, r: f64) {
		let _ = Ctx::arc(self, x, y, r, 0.0, std::f64::consts::TAU);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		Ctx::move_to(self, x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		Ctx::line_to(self, x, y);
	}

	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
		Ctx::quadratic_curve_to(self, cpx, cpy, x, y);
	}

	fn close_path(&mut self) {
		Ctx::close_path(self);
	}

	fn fill(&mut self) {
		Ctx::fill(self);
	}

	fn stroke(&mut self) {
		Ctx::stroke(self);
	}
}
