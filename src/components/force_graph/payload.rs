//! Validation of the `/graph/{subject}` JSON payload.
//!
//! The endpoint is loosely typed: node kinds arrive as `kind` or `type`, link
//! labels as `label` or `type`, and individual records may be malformed. Each
//! record is converted on its own so one bad entry only drops itself.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use super::types::{GraphData, GraphLink, GraphNode, NodeKind};

#[derive(Deserialize)]
struct RawGraph {
	#[serde(default)]
	nodes: Vec<Value>,
	#[serde(default)]
	links: Vec<Value>,
}

#[derive(Deserialize)]
struct RawNode {
	id: String,
	#[serde(default)]
	kind: Option<String>,
	#[serde(default, rename = "type")]
	tag: Option<String>,
}

#[derive(Deserialize)]
struct RawLink {
	source: String,
	target: String,
	#[serde(default)]
	label: Option<String>,
	#[serde(default, rename = "type")]
	relation: Option<String>,
}

impl From<RawNode> for GraphNode {
	fn from(raw: RawNode) -> Self {
		let kind = [raw.kind, raw.tag]
			.into_iter()
			.flatten()
			.find(|k| !k.is_empty())
			.map(|k| NodeKind::from_tag(&k))
			.unwrap_or_default();
		Self { id: raw.id, kind }
	}
}

impl From<RawLink> for GraphLink {
	fn from(raw: RawLink) -> Self {
		let label = [raw.label, raw.relation]
			.into_iter()
			.flatten()
			.find(|l| !l.is_empty());
		Self {
			source: raw.source,
			target: raw.target,
			label,
		}
	}
}

/// Parses a graph payload, dropping malformed node and link records.
///
/// Fails only when the payload as a whole is not a `{ nodes, links }` object.
/// Duplicate node ids keep their first occurrence.
pub fn parse_graph(json: &str) -> Result<GraphData, serde_json::Error> {
	let raw: RawGraph = serde_json::from_str(json)?;
	let mut data = GraphData::default();

	for value in raw.nodes {
		match serde_json::from_value::<RawNode>(value) {
			Ok(node) if data.nodes.iter().any(|n| n.id == node.id) => {
				warn!("dropping duplicate node {:?}", node.id);
			}
			Ok(node) => data.nodes.push(node.into()),
			Err(e) => warn!("dropping malformed node record: {}", e),
		}
	}
	for value in raw.links {
		match serde_json::from_value::<RawLink>(value) {
			Ok(link) => data.links.push(link.into()),
			Err(e) => warn!("dropping malformed link record: {}", e),
		}
	}
	Ok(data)
}
