//! Force-directed layout simulation.
//!
//! One [`ForceLayoutEngine::step`] applies pairwise inverse-square repulsion,
//! zero-rest-length spring attraction along resolved edges, then damped
//! explicit integration. Repulsion is O(n²) per step, which is fine for the
//! tens to few hundreds of nodes this viewer targets.
// TODO: switch repulsion to a Barnes-Hut quadtree if graphs grow past ~500 nodes.

use std::f64::consts::PI;

use super::config::LayoutConfig;
use super::model::{GraphModel, NodeHandle};

/// Golden angle in radians, used to spread coincident pairs apart.
const GOLDEN_ANGLE: f64 = PI * 0.763_932_022_500_210_3;

/// Repulsive force that node `b` exerts on node `a`.
///
/// Magnitude is `repulsion_strength / d²` with `d` clamped to `min_distance`,
/// directed from `b` to `a`. Coincident points get a deterministic direction
/// derived from `pair_seed` so they still separate.
pub fn repulsion(config: &LayoutConfig, a: (f64, f64), b: (f64, f64), pair_seed: usize) -> (f64, f64) {
	let (dx, dy) = (a.0 - b.0, a.1 - b.1);
	let dist = (dx * dx + dy * dy).sqrt();
	let d = dist.max(config.min_distance);
	let magnitude = config.repulsion_strength / (d * d);
	let (ux, uy) = if dist > f64::EPSILON {
		(dx / dist, dy / dist)
	} else {
		let angle = pair_seed as f64 * GOLDEN_ANGLE;
		(angle.cos(), angle.sin())
	};
	(ux * magnitude, uy * magnitude)
}

/// Spring force pulling `source` toward `target`: `distance * attraction_strength`
/// along the connecting line.
pub fn attraction(config: &LayoutConfig, source: (f64, f64), target: (f64, f64)) -> (f64, f64) {
	(
		(target.0 - source.0) * config.attraction_strength,
		(target.1 - source.1) * config.attraction_strength,
	)
}

/// Advances node positions one tick at a time.
///
/// Holds a force accumulator that is reused between steps, so a step only
/// allocates when the node count grows.
pub struct ForceLayoutEngine {
	config: LayoutConfig,
	forces: Vec<(f64, f64)>,
}

impl ForceLayoutEngine {
	/// Create an engine with the given constants.
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			config,
			forces: Vec::new(),
		}
	}

	/// Run one simulation tick. `pinned` is excluded from integration and has
	/// its velocity zeroed, but still pushes and pulls the other nodes.
	pub fn step(&mut self, model: &mut GraphModel, pinned: Option<NodeHandle>) {
		let n = model.node_count();
		self.forces.clear();
		self.forces.resize(n, (0.0, 0.0));

		let nodes = model.nodes();
		for i in 0..n {
			let a = (nodes[i].x, nodes[i].y);
			for j in (i + 1)..n {
				let b = (nodes[j].x, nodes[j].y);
				let (fx, fy) = repulsion(&self.config, a, b, i * n + j);
				self.forces[i].0 += fx;
				self.forces[i].1 += fy;
				self.forces[j].0 -= fx;
				self.forces[j].1 -= fy;
			}
		}

		for (_, s, t) in model.resolved_edges() {
			let (s, t) = (s.index(), t.index());
			let (fx, fy) = attraction(&self.config, (nodes[s].x, nodes[s].y), (nodes[t].x, nodes[t].y));
			self.forces[s].0 += fx;
			self.forces[s].1 += fy;
			self.forces[t].0 -= fx;
			self.forces[t].1 -= fy;
		}

		let damping = self.config.damping;
		let pinned = pinned.map(NodeHandle::index);
		for (i, (node, &(fx, fy))) in model.nodes_mut().iter_mut().zip(&self.forces).enumerate() {
			if pinned == Some(i) {
				node.vx = 0.0;
				node.vy = 0.0;
				continue;
			}
			node.vx = (node.vx + fx) * damping;
			node.vy = (node.vy + fy) * damping;
			node.x += node.vx;
			node.y += node.vy;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{EdgeKind, EdgeRecord, NodeCategory, NodeRecord};
	use crate::components::force_graph::viewport::WorldRect;

	fn magnitude((x, y): (f64, f64)) -> f64 {
		(x * x + y * y).sqrt()
	}

	fn place(model: &mut GraphModel, id: &str, x: f64, y: f64) {
		let h = model.handle_of(id).unwrap();
		let node = model.node_mut(h).unwrap();
		node.x = x;
		node.y = y;
	}

	fn pair(edge: bool) -> GraphModel {
		let mut model = GraphModel::new(1, WorldRect::new(0.0, 0.0, 800.0, 600.0));
		let edges = if edge {
			vec![EdgeRecord::new("a", "b", EdgeKind::Depends)]
		} else {
			Vec::new()
		};
		model.set_data(
			vec![
				NodeRecord::new("a", NodeCategory::Config),
				NodeRecord::new("b", NodeCategory::Config),
			],
			edges,
		);
		model
	}

	#[test]
	fn repulsion_decreases_with_distance() {
		let config = LayoutConfig::default();
		let a = (0.0, 0.0);
		let samples = [(15.0, 0.0), (0.0, 30.0), (-45.0, 45.0), (200.0, -10.0)];
		for w in samples.windows(2) {
			let near = magnitude(repulsion(&config, a, w[0], 0));
			let far = magnitude(repulsion(&config, a, w[1], 0));
			assert!(near > far, "{near} should exceed {far}");
		}
	}

	#[test]
	fn repulsion_points_away_from_other_node() {
		let config = LayoutConfig::default();
		let (fx, fy) = repulsion(&config, (10.0, 0.0), (0.0, 0.0), 0);
		assert!(fx > 0.0);
		assert_eq!(fy, 0.0);
	}

	#[test]
	fn coincident_nodes_get_finite_force() {
		let config = LayoutConfig::default();
		let f = repulsion(&config, (3.0, 3.0), (3.0, 3.0), 1);
		assert!(f.0.is_finite() && f.1.is_finite());
		let expected = config.repulsion_strength / (config.min_distance * config.min_distance);
		assert!((magnitude(f) - expected).abs() < 1e-9);
	}

	#[test]
	fn forces_are_equal_and_opposite() {
		let mut model = pair(false);
		place(&mut model, "a", -5.0, 0.0);
		place(&mut model, "b", 5.0, 0.0);
		ForceLayoutEngine::new(LayoutConfig::default()).step(&mut model, None);
		let (a, b) = (model.get_node("a").unwrap(), model.get_node("b").unwrap());
		assert!((a.vx + b.vx).abs() < 1e-12);
		assert!(a.vx < 0.0 && b.vx > 0.0);
	}

	#[test]
	fn coincident_pair_separates_and_settles() {
		let mut model = pair(true);
		place(&mut model, "a", 0.0, 0.0);
		place(&mut model, "b", 0.0, 0.0);
		let mut engine = ForceLayoutEngine::new(LayoutConfig::default());

		let distance = |m: &GraphModel| {
			let (a, b) = (m.get_node("a").unwrap(), m.get_node("b").unwrap());
			((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
		};
		let mut previous = distance(&model);
		let mut delta = f64::INFINITY;
		for _ in 0..200 {
			engine.step(&mut model, None);
			let current = distance(&model);
			delta = (current - previous).abs();
			previous = current;
		}
		assert!(previous > 0.0);
		assert!(delta < 1e-3, "still moving by {delta}");
	}

	#[test]
	fn pinned_node_does_not_integrate() {
		let mut model = pair(true);
		place(&mut model, "a", 0.0, 0.0);
		place(&mut model, "b", 30.0, 0.0);
		let pinned = model.handle_of("a");
		ForceLayoutEngine::new(LayoutConfig::default()).step(&mut model, pinned);

		let a = model.get_node("a").unwrap();
		assert_eq!((a.x, a.y, a.vx, a.vy), (0.0, 0.0, 0.0, 0.0));
		assert_ne!(model.get_node("b").unwrap().x, 30.0);
	}

	#[test]
	fn dangling_edge_contributes_nothing() {
		let mut with_dangling = GraphModel::new(3, WorldRect::new(0.0, 0.0, 800.0, 600.0));
		with_dangling.set_data(
			vec![
				NodeRecord::new("a", NodeCategory::Config),
				NodeRecord::new("b", NodeCategory::Sql),
			],
			vec![EdgeRecord::new("a", "missing", EdgeKind::References)],
		);
		let mut without = pair(false);
		for m in [&mut with_dangling, &mut without] {
			place(m, "a", 10.0, 20.0);
			place(m, "b", 60.0, 20.0);
		}
		let mut engine = ForceLayoutEngine::new(LayoutConfig::default());
		engine.step(&mut with_dangling, None);
		engine.step(&mut without, None);

		let (a1, a2) = (with_dangling.get_node("a").unwrap(), without.get_node("a").unwrap());
		assert_eq!((a1.x, a1.y), (a2.x, a2.y));
	}

	#[test]
	fn self_edge_is_inert() {
		let mut model = GraphModel::new(0, WorldRect::new(0.0, 0.0, 800.0, 600.0));
		model.set_data(
			vec![NodeRecord::new("a", NodeCategory::Config)],
			vec![EdgeRecord::new("a", "a", EdgeKind::Depends)],
		);
		place(&mut model, "a", 4.0, 4.0);
		ForceLayoutEngine::new(LayoutConfig::default()).step(&mut model, None);
		let a = model.get_node("a").unwrap();
		assert_eq!((a.x, a.y), (4.0, 4.0));
	}
}
