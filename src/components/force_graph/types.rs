//! Graph data model shared by the loader, the layout engine and the painters.

use std::fmt;

/// The kind of entity a node stands for. Determines the node's paint color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// A virus, the usual subject of a graph.
	Virus,
	/// A drug candidate.
	Drug,
	/// A paper the relationship was mined from.
	Paper,
	/// Anything the backend labelled with a kind we don't know.
	#[default]
	Unknown,
}

impl NodeKind {
	/// Parses the backend's kind tag. Unrecognized tags map to [`NodeKind::Unknown`].
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"Virus" => Self::Virus,
			"Drug" => Self::Drug,
			"Paper" => Self::Paper,
			_ => Self::Unknown,
		}
	}

	/// Fill color used for nodes of this kind.
	pub fn color(self) -> &'static str {
		match self {
			Self::Virus => "#4ade80",
			Self::Drug => "#60a5fa",
			Self::Paper => "#f87171",
			Self::Unknown => "#94a3b8",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tag = match self {
			Self::Virus => "Virus",
			Self::Drug => "Drug",
			Self::Paper => "Paper",
			Self::Unknown => "Unknown",
		};
		f.write_str(tag)
	}
}

/// A node in the graph. The id doubles as the display label.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique identifier within a data set.
	pub id: String,
	/// Entity kind.
	pub kind: NodeKind,
}

/// A directed relationship between two nodes, referenced by id.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Relationship type or description.
	pub label: Option<String>,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes, in payload order.
	pub nodes: Vec<GraphNode>,
	/// Links, possibly referencing absent nodes.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
