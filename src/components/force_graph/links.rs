//! Relationship lines, arrow heads and their oriented labels.

use std::f64::consts::{FRAC_PI_2, PI};

use super::nodes::NodeView;
use super::surface::Surface;
use crate::config::LinkStyle;

const LINE_COLOR: &str = "#cbd5e1";
const LABEL_FILL: &str = "rgba(255, 255, 255, 0.8)";
const LABEL_COLOR: &str = "#64748b";

/// Rotation applied to a label on a line at `angle` radians, flipped by half
/// a turn when the text would otherwise read upside down.
pub fn label_rotation(angle: f64) -> f64 {
	if angle.abs() > FRAC_PI_2 {
		angle + PI
	} else {
		angle
	}
}

/// Draws one link between two resolved endpoints.
///
/// Either endpoint being `None` (not resolved by the layout engine) skips the
/// link entirely. The label is drawn lower-cased along the line, and only if
/// the line minus `end_margin` is longer than the text.
pub fn paint_link<S: Surface + ?Sized>(
	source: Option<&NodeView>,
	target: Option<&NodeView>,
	label: Option<&str>,
	scale: f64,
	style: &LinkStyle,
	node_radius: f64,
	surface: &mut S,
) {
	let (Some(source), Some(target)) = (source, target) else {
		return;
	};
	let (dx, dy) = (target.x - source.x, target.y - source.y);
	let length = (dx * dx + dy * dy).sqrt();

	surface.begin_path();
	surface.move_to(source.x, source.y);
	surface.line_to(target.x, target.y);
	surface.set_stroke(LINE_COLOR, 1.0 / scale);
	surface.stroke();

	if length > node_radius + style.arrow_length {
		paint_arrow(target, dx / length, dy / length, style.arrow_length, node_radius, surface);
	}

	let Some(label) = label.filter(|l| !l.is_empty()) else {
		return;
	};
	let text = label.to_lowercase();
	let font_size = style.font_size / scale;
	surface.set_font(&format!("{}px Inter, sans-serif", font_size));
	let text_width = surface.measure_text(&text);
	let pad = font_size * 0.5;
	let (box_w, box_h) = (text_width + pad, font_size + pad);

	if length - style.end_margin <= text_width {
		return;
	}

	let (mid_x, mid_y) = (source.x + dx * 0.5, source.y + dy * 0.5);
	surface.save();
	surface.translate(mid_x, mid_y);
	surface.rotate(label_rotation(dy.atan2(dx)));
	surface.set_fill(LABEL_FILL);
	surface.fill_rect(-box_w / 2.0, -box_h / 2.0, box_w, box_h);
	surface.set_text_align("center");
	surface.set_text_baseline("middle");
	surface.set_fill(LABEL_COLOR);
	surface.fill_text(&text, 0.0, 0.0);
	surface.restore();
}

fn paint_arrow<S: Surface + ?Sized>(
	target: &NodeView,
	ux: f64,
	uy: f64,
	size: f64,
	node_radius: f64,
	surface: &mut S,
) {
	let (tip_x, tip_y) = (target.x - ux * node_radius, target.y - uy * node_radius);
	let (back_x, back_y) = (tip_x - ux * size, tip_y - uy * size);
	let (px, py) = (-uy * size * 0.5, ux * size * 0.5);
	surface.set_fill(LINE_COLOR);
	surface.begin_path();
	surface.move_to(tip_x, tip_y);
	surface.line_to(back_x + px, back_y + py);
	surface.line_to(back_x - px, back_y - py);
	surface.close_path();
	surface.fill();
}
