//! Runtime configuration for the graph view.
//!
//! Defaults reproduce the stock look; a page can override any subset by
//! embedding JSON in `<script id="graph-config" type="application/json">`.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the optional script element carrying a JSON config override.
pub const CONFIG_ELEMENT_ID: &str = "graph-config";

/// Force parameters handed to the layout engine on every data change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Charge between every pair of nodes. Negative repels.
	pub charge_strength: f64,
	/// Rest length of link springs, in graph units.
	pub link_distance: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			charge_strength: -400.0,
			link_distance: 100.0,
		}
	}
}

/// Camera move requested when a node is clicked.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
	/// Zoom reached after the click.
	pub zoom_level: f64,
	/// Duration of the centering move.
	pub center_duration_ms: f64,
	/// Duration of the zoom move.
	pub zoom_duration_ms: f64,
}

impl Default for FocusConfig {
	fn default() -> Self {
		Self {
			zoom_level: 8.0,
			center_duration_ms: 1000.0,
			zoom_duration_ms: 2000.0,
		}
	}
}

/// Node glyph and label card geometry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
	/// Circle radius in graph units.
	pub radius: f64,
	/// Gap between the circle and the top of the label card.
	pub label_gap: f64,
	/// Label font size at zoom 1.
	pub font_size: f64,
	/// Corner radius of the label card.
	pub card_corner_radius: f64,
	/// Shadow blur of the node glow.
	pub glow_blur: f64,
}

impl Default for NodeStyle {
	fn default() -> Self {
		Self {
			radius: 6.0,
			label_gap: 2.0,
			font_size: 14.0,
			card_corner_radius: 4.0,
			glow_blur: 10.0,
		}
	}
}

/// Link line and label geometry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Label font size at zoom 1.
	pub font_size: f64,
	/// Length kept free of label text, subtracted from the link length.
	pub end_margin: f64,
	/// Arrow head length at the target end.
	pub arrow_length: f64,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			font_size: 10.0,
			end_margin: 10.0,
			arrow_length: 4.0,
		}
	}
}

/// Everything configurable about the graph view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// Base URL of the analysis backend serving `/graph/{subject}`.
	pub api_base_url: String,
	/// Layout engine forces.
	pub layout: LayoutConfig,
	/// Click-to-focus camera move.
	pub focus: FocusConfig,
	/// Node painting.
	pub node: NodeStyle,
	/// Link painting.
	pub link: LinkStyle,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			api_base_url: "http://localhost:8000".into(),
			layout: LayoutConfig::default(),
			focus: FocusConfig::default(),
			node: NodeStyle::default(),
			link: LinkStyle::default(),
		}
	}
}

impl GraphConfig {
	/// Parses a (possibly partial) JSON override on top of the defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Reads the override embedded in the page, falling back to defaults.
	pub fn from_document() -> Self {
		let Some(json) = config_element_text() else {
			return Self::default();
		};
		match Self::from_json(&json) {
			Ok(config) => {
				info!("graph config loaded from #{}", CONFIG_ELEMENT_ID);
				config
			}
			Err(e) => {
				warn!("ignoring invalid graph config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_element_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
