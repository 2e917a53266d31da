//! Node glyphs and their label cards.

use super::surface::Surface;
use super::types::NodeKind;
use crate::config::NodeStyle;

const CARD_FILL: &str = "rgba(255, 255, 255, 0.9)";
const CARD_BORDER: &str = "#e2e8f0";
const LABEL_COLOR: &str = "#1e293b";

/// A node as the painters see it: identity plus its current simulated position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView<'a> {
	/// Node id, drawn as the label.
	pub id: &'a str,
	/// Entity kind, picks the color.
	pub kind: NodeKind,
	/// Simulated x.
	pub x: f64,
	/// Simulated y.
	pub y: f64,
}

/// Bounding box of a node's label card, in graph coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelCard {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Card width.
	pub width: f64,
	/// Card height.
	pub height: f64,
}

impl LabelCard {
	/// Card for a label of `text_width` at `font_size`, hung below the node.
	pub fn below(node_x: f64, node_y: f64, text_width: f64, font_size: f64, style: &NodeStyle) -> Self {
		let pad = font_size * 0.8;
		let (width, height) = (text_width + pad, font_size + pad);
		Self {
			x: node_x - width / 2.0,
			y: node_y + style.radius + style.label_gap,
			width,
			height,
		}
	}

	fn center_y(&self) -> f64 {
		self.y + self.height / 2.0
	}
}

fn rounded_rect<S: Surface + ?Sized>(surface: &mut S, card: &LabelCard, radius: f64) {
	let LabelCard { x, y, width: w, height: h } = *card;
	let r = radius.min(w / 2.0).min(h / 2.0);
	surface.begin_path();
	surface.move_to(x + r, y);
	surface.line_to(x + w - r, y);
	surface.quadratic_curve_to(x + w, y, x + w, y + r);
	surface.line_to(x + w, y + h - r);
	surface.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
	surface.line_to(x + r, y + h);
	surface.quadratic_curve_to(x, y + h, x, y + h - r);
	surface.line_to(x, y + r);
	surface.quadratic_curve_to(x, y, x + r, y);
	surface.close_path();
}

/// Draws a node's glowing circle and its label card.
///
/// `scale` is the current zoom; the label font shrinks with it so labels keep
/// a constant on-screen size while the circle scales with the view.
pub fn paint_node<S: Surface + ?Sized>(node: &NodeView, scale: f64, style: &NodeStyle, surface: &mut S) {
	let color = node.kind.color();

	surface.begin_path();
	surface.circle(node.x, node.y, style.radius);
	surface.set_fill(color);
	surface.set_shadow(color, style.glow_blur);
	surface.fill();
	surface.set_shadow(color, 0.0);

	let font_size = style.font_size / scale;
	surface.set_font(&format!("600 {}px Inter, sans-serif", font_size));
	let text_width = surface.measure_text(node.id);
	let card = LabelCard::below(node.x, node.y, text_width, font_size, style);

	rounded_rect(surface, &card, style.card_corner_radius);
	surface.set_fill(CARD_FILL);
	surface.fill();
	surface.set_stroke(CARD_BORDER, 1.0 / scale);
	surface.stroke();

	surface.set_text_align("center");
	surface.set_text_baseline("middle");
	surface.set_fill(LABEL_COLOR);
	surface.fill_text(node.id, node.x, card.center_y());
}

/// Draws the node's hit area in a solid probe color for the pick buffer.
pub fn paint_node_pointer_area<S: Surface + ?Sized>(
	node: &NodeView,
	probe_color: &str,
	style: &NodeStyle,
	surface: &mut S,
) {
	surface.set_fill(probe_color);
	surface.begin_path();
	surface.circle(node.x, node.y, style.radius);
	surface.fill();
}
