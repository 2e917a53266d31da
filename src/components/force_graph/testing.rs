//! A recording [`Surface`] for painter tests.

use super::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
	Save,
	Restore,
	Translate(f64, f64),
	Rotate(f64),
	Scale(f64),
	Fill(String),
	Stroke(String, f64),
	Shadow(String, f64),
	Font(String),
	TextAlign(String),
	TextBaseline(String),
	FillText(String, f64, f64),
	FillRect(f64, f64, f64, f64),
	ClearRect(f64, f64, f64, f64),
	BeginPath,
	Circle(f64, f64, f64),
	MoveTo(f64, f64),
	LineTo(f64, f64),
	QuadTo(f64, f64, f64, f64),
	ClosePath,
	FillPath,
	StrokePath,
}

/// Records every call. Text measures `chars * font_px * 0.5`.
#[derive(Default)]
pub struct RecordingSurface {
	pub ops: Vec<Op>,
	font_px: f64,
}

impl RecordingSurface {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn texts(&self) -> Vec<&str> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::FillText(t, ..) => Some(t.as_str()),
				_ => None,
			})
			.collect()
	}

	pub fn circles(&self) -> Vec<(f64, f64, f64)> {
		self.ops
			.iter()
			.filter_map(|op| match *op {
				Op::Circle(x, y, r) => Some((x, y, r)),
				_ => None,
			})
			.collect()
	}

	pub fn rotations(&self) -> Vec<f64> {
		self.ops
			.iter()
			.filter_map(|op| match *op {
				Op::Rotate(a) => Some(a),
				_ => None,
			})
			.collect()
	}

	pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
		self.ops.iter().filter(|op| pred(op)).count()
	}

	pub fn text_width(text: &str, font_px: f64) -> f64 {
		text.chars().count() as f64 * font_px * 0.5
	}
}

fn font_px(font: &str) -> f64 {
	font.split_whitespace()
		.find_map(|token| token.strip_suffix("px")?.parse().ok())
		.unwrap_or(10.0)
}

impl Surface for RecordingSurface {
	fn save(&mut self) {
		self.ops.push(Op::Save);
	}

	fn restore(&mut self) {
		self.ops.push(Op::Restore);
	}

	fn translate(&mut self, x: f64, y: f64) {
		self.ops.push(Op::Translate(x, y));
	}

	fn rotate(&mut self, angle: f64) {
		self.ops.push(Op::Rotate(angle));
	}

	fn scale(&mut self, k: f64) {
		self.ops.push(Op::Scale(k));
	}

	fn set_fill(&mut self, color: &str) {
		self.ops.push(Op::Fill(color.into()));
	}

	fn set_stroke(&mut self, color: &str, width: f64) {
		self.ops.push(Op::Stroke(color.into(), width));
	}

	fn set_shadow(&mut self, color: &str, blur: f64) {
		self.ops.push(Op::Shadow(color.into(), blur));
	}

	fn set_font(&mut self, font: &str) {
		self.font_px = font_px(font);
		self.ops.push(Op::Font(font.into()));
	}

	fn set_text_align(&mut self, align: &str) {
		self.ops.push(Op::TextAlign(align.into()));
	}

	fn set_text_baseline(&mut self, baseline: &str) {
		self.ops.push(Op::TextBaseline(baseline.into()));
	}

	fn measure_text(&self, text: &str) -> f64 {
		Self::text_width(text, self.font_px)
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64) {
		self.ops.push(Op::FillText(text.into(), x, y));
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ops.push(Op::FillRect(x, y, w, h));
	}

	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ops.push(Op::ClearRect(x, y, w, h));
	}

	fn begin_path(&mut self) {
		self.ops.push(Op::BeginPath);
	}

	fn circle(&mut self, x: f64, y: f64, r: f64) {
		self.ops.push(Op::Circle(x, y, r));
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(Op::MoveTo(x, y));
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ops.push(Op::LineTo(x, y));
	}

	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
		self.ops.push(Op::QuadTo(cpx, cpy, x, y));
	}

	fn close_path(&mut self) {
		self.ops.push(Op::ClosePath);
	}

	fn fill(&mut self) {
		self.ops.push(Op::FillPath);
	}

	fn stroke(&mut self) {
		self.ops.push(Op::StrokePath);
	}
}
