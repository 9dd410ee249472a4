//! Graph data structures for input to the force graph component.

use serde::Deserialize;

/// Kind of artifact a node represents. Determines its color and default priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
	/// Server or world configuration file.
	Config,
	/// SQL schema or deployment script.
	Sql,
	/// Gameplay script.
	Script,
	/// Compiled module or plugin.
	Module,
	/// Data asset (localization tables, item templates, ...).
	Asset,
	/// Anything the scanner could not classify.
	#[default]
	#[serde(other)]
	Unknown,
}

impl NodeCategory {
	/// Priority used when a record does not carry one. Higher draws on top.
	pub fn default_priority(self) -> i32 {
		match self {
			NodeCategory::Config => 40,
			NodeCategory::Module => 30,
			NodeCategory::Sql => 20,
			NodeCategory::Script => 20,
			NodeCategory::Asset => 10,
			NodeCategory::Unknown => 0,
		}
	}
}

/// Relationship an edge expresses between two nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
	/// Source textually includes target.
	Includes,
	/// Source mentions target by name or id.
	References,
	/// Source overrides values defined by target.
	Overrides,
	/// Source needs target to function. Unrecognized kinds land here.
	#[default]
	#[serde(other)]
	Depends,
}

/// A node as produced by the dependency scanner.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeRecord {
	/// Unique identifier for this node. Used to reference nodes in edges.
	pub id: String,
	/// Display label. Falls back to the id when absent.
	#[serde(default)]
	pub label: Option<String>,
	/// Artifact category.
	#[serde(default)]
	pub category: NodeCategory,
	/// Draw priority override. Derived from `category` when absent.
	#[serde(default)]
	pub priority: Option<i32>,
}

impl NodeRecord {
	/// Convenience constructor with label equal to the id.
	pub fn new(id: impl Into<String>, category: NodeCategory) -> Self {
		Self {
			id: id.into(),
			label: None,
			category,
			priority: None,
		}
	}

	/// Set the display label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

/// A directed edge between two nodes, referenced by id.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
	/// Source node ID.
	#[serde(alias = "source")]
	pub source_id: String,
	/// Target node ID.
	#[serde(alias = "target")]
	pub target_id: String,
	/// Relationship kind.
	#[serde(default, rename = "type")]
	pub kind: EdgeKind,
}

impl EdgeRecord {
	/// Build an edge record.
	pub fn new(source_id: impl Into<String>, target_id: impl Into<String>, kind: EdgeKind) -> Self {
		Self {
			source_id: source_id.into(),
			target_id: target_id.into(),
			kind,
		}
	}
}

/// Complete graph data: nodes and edges.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	/// Node records, in scanner order.
	#[serde(default)]
	pub nodes: Vec<NodeRecord>,
	/// Edge records. Endpoints may reference ids that are not (yet) present.
	#[serde(default, alias = "links")]
	pub edges: Vec<EdgeRecord>,
}
