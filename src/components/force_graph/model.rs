//! Node and edge storage.
//!
//! Nodes live in a flat `Vec` addressed by [`NodeHandle`], with a side table
//! from string id to handle. A simulation tick mutates the vector in place;
//! handles stay valid until the next [`GraphModel::set_data`] or
//! [`GraphModel::clear`].

use std::collections::HashMap;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{EdgeKind, EdgeRecord, NodeCategory, NodeRecord};
use super::viewport::WorldRect;

/// Fraction of the extent left empty on each side when scattering nodes.
const SCATTER_MARGIN: f64 = 0.1;

/// Stable index of a node inside a [`GraphModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
	/// Position of the node in [`GraphModel::nodes`].
	pub fn index(self) -> usize {
		self.0
	}
}

/// A node with its simulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique, immutable identifier.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Artifact category.
	pub category: NodeCategory,
	/// Draw priority. Higher draws on top.
	pub priority: i32,
	/// World x position.
	pub x: f64,
	/// World y position.
	pub y: f64,
	/// Velocity along x.
	pub vx: f64,
	/// Velocity along y.
	pub vy: f64,
}

impl GraphNode {
	fn from_record(record: NodeRecord, x: f64, y: f64) -> Self {
		let priority = record
			.priority
			.unwrap_or_else(|| record.category.default_priority());
		Self {
			label: record.label.unwrap_or_else(|| record.id.clone()),
			id: record.id,
			category: record.category,
			priority,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
		}
	}

	fn merge(&mut self, record: NodeRecord) {
		self.priority = record
			.priority
			.unwrap_or_else(|| record.category.default_priority());
		self.label = record.label.unwrap_or(record.id);
		self.category = record.category;
	}
}

/// An edge plus its cached endpoint resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// Source node id.
	pub source_id: String,
	/// Target node id.
	pub target_id: String,
	/// Relationship kind.
	pub kind: EdgeKind,
	endpoints: Option<(NodeHandle, NodeHandle)>,
}

impl GraphEdge {
	/// Resolved `(source, target)` handles, or `None` while either id is unknown.
	pub fn endpoints(&self) -> Option<(NodeHandle, NodeHandle)> {
		self.endpoints
	}
}

/// The current set of nodes and edges.
pub struct GraphModel {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
	index: HashMap<String, NodeHandle>,
	extent: WorldRect,
	rng: SmallRng,
}

impl GraphModel {
	/// Create an empty model. New nodes are scattered over `extent`, with
	/// `seed` driving the placement.
	pub fn new(seed: u64, extent: WorldRect) -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			index: HashMap::new(),
			extent,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Update the scatter region, typically the visible part of the world.
	pub fn set_extent(&mut self, extent: WorldRect) {
		self.extent = extent;
	}

	/// Replace all nodes and edges. Every node gets a fresh random position
	/// inside the central 80% of the extent and zero velocity.
	pub fn set_data(&mut self, nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) {
		self.nodes.clear();
		self.edges.clear();
		self.index.clear();
		self.nodes.reserve(nodes.len());
		self.edges.reserve(edges.len());

		for record in nodes {
			self.insert_node(record);
		}
		for record in edges {
			self.insert_edge(record);
		}

		debug!(
			"graph model: loaded {} nodes, {} edges ({} unresolved)",
			self.nodes.len(),
			self.edges.len(),
			self.edges.iter().filter(|e| e.endpoints.is_none()).count()
		);
	}

	/// Append a node, or merge metadata into an existing node with the same id.
	/// Existing positions are never touched.
	pub fn add_node(&mut self, record: NodeRecord) -> NodeHandle {
		let known = self.index.len();
		let handle = self.insert_node(record);
		if self.index.len() != known {
			let id = &self.nodes[handle.0].id;
			let pending = self
				.edges
				.iter()
				.any(|e| e.endpoints.is_none() && (&e.source_id == id || &e.target_id == id));
			if pending {
				self.resolve_pending();
			}
		}
		handle
	}

	/// Append an edge. Endpoints are not validated.
	pub fn add_edge(&mut self, record: EdgeRecord) {
		self.insert_edge(record);
	}

	/// Remove every node and edge.
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.edges.clear();
		self.index.clear();
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges, resolved or not.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Look up a node by id.
	pub fn get_node(&self, id: &str) -> Option<&GraphNode> {
		self.handle_of(id).map(|h| &self.nodes[h.0])
	}

	/// Handle for a node id.
	pub fn handle_of(&self, id: &str) -> Option<NodeHandle> {
		self.index.get(id).copied()
	}

	/// Node behind a handle. Returns `None` for handles from a previous load.
	pub fn node(&self, handle: NodeHandle) -> Option<&GraphNode> {
		self.nodes.get(handle.0)
	}

	/// Mutable access to the node behind a handle.
	pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut GraphNode> {
		self.nodes.get_mut(handle.0)
	}

	/// All nodes in insertion order.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Nodes paired with their handles, in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &GraphNode)> {
		self.nodes.iter().enumerate().map(|(i, n)| (NodeHandle(i), n))
	}

	/// Mutable slice of all nodes, for in-place simulation updates.
	pub fn nodes_mut(&mut self) -> &mut [GraphNode] {
		&mut self.nodes
	}

	/// All edges in insertion order, including unresolved ones.
	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	/// Edges whose endpoints both resolve, with their handles.
	pub fn resolved_edges(&self) -> impl Iterator<Item = (&GraphEdge, NodeHandle, NodeHandle)> {
		self.edges
			.iter()
			.filter_map(|e| e.endpoints.map(|(s, t)| (e, s, t)))
	}

	fn insert_node(&mut self, record: NodeRecord) -> NodeHandle {
		if let Some(&handle) = self.index.get(&record.id) {
			self.nodes[handle.0].merge(record);
			return handle;
		}
		let (x, y) = self.scatter_point();
		let handle = NodeHandle(self.nodes.len());
		self.index.insert(record.id.clone(), handle);
		self.nodes.push(GraphNode::from_record(record, x, y));
		handle
	}

	fn insert_edge(&mut self, record: EdgeRecord) {
		let endpoints = self.resolve(&record.source_id, &record.target_id);
		self.edges.push(GraphEdge {
			source_id: record.source_id,
			target_id: record.target_id,
			kind: record.kind,
			endpoints,
		});
	}

	fn resolve(&self, source: &str, target: &str) -> Option<(NodeHandle, NodeHandle)> {
		Some((self.handle_of(source)?, self.handle_of(target)?))
	}

	fn resolve_pending(&mut self) {
		let index = &self.index;
		for edge in self.edges.iter_mut().filter(|e| e.endpoints.is_none()) {
			if let (Some(&s), Some(&t)) = (index.get(&edge.source_id), index.get(&edge.target_id)) {
				edge.endpoints = Some((s, t));
			}
		}
	}

	fn scatter_point(&mut self) -> (f64, f64) {
		let WorldRect {
			min_x,
			min_y,
			max_x,
			max_y,
		} = self.extent;
		let (w, h) = (max_x - min_x, max_y - min_y);
		let x = min_x + w * (SCATTER_MARGIN + (1.0 - 2.0 * SCATTER_MARGIN) * self.rng.random::<f64>());
		let y = min_y + h * (SCATTER_MARGIN + (1.0 - 2.0 * SCATTER_MARGIN) * self.rng.random::<f64>());
		(x, y)
	}
}
