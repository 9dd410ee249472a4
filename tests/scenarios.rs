//! End-to-end scenarios through the host-facing state.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::RecordingSurface;
use depgraph_view::{
	EdgeKind, EdgeRecord, ForceGraphState, GraphConfig, GraphData, InteractionState, NodeCategory,
	NodeRecord, PointerEvent, Theme,
};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn state() -> ForceGraphState {
	ForceGraphState::new(GraphConfig::default(), Theme::default(), W, H)
}

fn data(nodes: &[&str], edges: &[(&str, &str)]) -> GraphData {
	GraphData {
		nodes: nodes
			.iter()
			.map(|id| NodeRecord::new(*id, NodeCategory::Config))
			.collect(),
		edges: edges
			.iter()
			.map(|(s, t)| EdgeRecord::new(*s, *t, EdgeKind::Depends))
			.collect(),
	}
}

fn place(state: &mut ForceGraphState, id: &str, x: f64, y: f64) {
	let h = state.model.handle_of(id).unwrap();
	let node = state.model.node_mut(h).unwrap();
	node.x = x;
	node.y = y;
	node.vx = 0.0;
	node.vy = 0.0;
}

fn distance(state: &ForceGraphState, a: &str, b: &str) -> f64 {
	let (a, b) = (state.model.get_node(a).unwrap(), state.model.get_node(b).unwrap());
	((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn two_coincident_nodes_separate_and_stabilize() {
	let mut s = state();
	s.set_graph_data(&data(&["a", "b"], &[("a", "b")]));
	place(&mut s, "a", 0.0, 0.0);
	place(&mut s, "b", 0.0, 0.0);

	let mut previous = distance(&s, "a", "b");
	let mut delta = f64::INFINITY;
	for _ in 0..200 {
		s.step();
		let d = distance(&s, "a", "b");
		delta = (d - previous).abs();
		previous = d;
	}
	assert!(previous > 0.0);
	assert!(delta < 1e-3, "separation still changing by {delta}");
}

#[test]
fn dangling_edge_neither_panics_nor_pulls() {
	let mut dangling = state();
	dangling.set_graph_data(&data(&["a", "b"], &[("a", "missing")]));
	let mut plain = state();
	plain.set_graph_data(&data(&["a", "b"], &[]));
	for s in [&mut dangling, &mut plain] {
		place(s, "a", 200.0, 200.0);
		place(s, "b", 260.0, 230.0);
		s.step();
		let mut surface = RecordingSurface::new(W, H);
		s.draw(&mut surface);
		assert!(surface.lines().iter().all(|c| matches!(c, common::DrawCall::Line { width, .. } if *width == 1.0)));
	}
	let (a1, a2) = (dangling.model.get_node("a").unwrap(), plain.model.get_node("a").unwrap());
	assert_eq!((a1.x, a1.y), (a2.x, a2.y));
}

#[test]
fn set_graph_data_scatters_into_visible_area() {
	let mut s = state();
	s.viewport.pan(-400.0, 250.0);
	s.viewport.zoom(2.0);
	let ids: Vec<String> = (0..50).map(|i| format!("n{i}")).collect();
	let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
	s.set_graph_data(&data(&refs, &[]));

	for node in s.model.nodes() {
		let (sx, sy) = s.viewport.world_to_screen(node.x, node.y);
		assert!((0.1 * W - 1e-9..=0.9 * W + 1e-9).contains(&sx), "sx {sx}");
		assert!((0.1 * H - 1e-9..=0.9 * H + 1e-9).contains(&sy), "sy {sy}");
		assert_eq!((node.vx, node.vy), (0.0, 0.0));
	}
}

#[test]
fn center_puts_graph_centroid_mid_canvas() {
	let mut s = state();
	s.set_graph_data(&data(&["a", "b", "c"], &[]));
	place(&mut s, "a", -500.0, 40.0);
	place(&mut s, "b", 900.0, -220.0);
	place(&mut s, "c", 10.0, 1300.0);
	s.viewport.zoom(0.4);
	s.center();

	let (cx, cy) = ((-500.0 + 900.0) / 2.0, (-220.0 + 1300.0) / 2.0);
	let (sx, sy) = s.viewport.world_to_screen(cx, cy);
	assert!((sx - W / 2.0).abs() <= 1.0 && (sy - H / 2.0).abs() <= 1.0);
}

#[test]
fn center_on_empty_graph_keeps_view() {
	let mut s = state();
	s.viewport.pan(12.0, 34.0);
	s.center();
	assert_eq!(s.viewport.offset(), (12.0, 34.0));
}

#[test]
fn dragged_node_stays_put_while_simulating() {
	let mut s = state();
	s.set_graph_data(&data(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
	place(&mut s, "a", 100.0, 100.0);
	place(&mut s, "b", 140.0, 100.0);
	place(&mut s, "c", 180.0, 130.0);

	s.handle_pointer(PointerEvent::Down { x: 100.0, y: 100.0 });
	s.handle_pointer(PointerEvent::Move { x: 400.0, y: 300.0 });
	for _ in 0..10 {
		s.step();
	}
	let a = s.model.get_node("a").unwrap();
	assert_eq!((a.x, a.y, a.vx, a.vy), (400.0, 300.0, 0.0, 0.0));

	s.handle_pointer(PointerEvent::Up { x: 400.0, y: 300.0, click_count: 1 });
	assert_eq!(s.interaction.state(), InteractionState::Idle);
	s.step();
	let a = s.model.get_node("a").unwrap();
	assert_ne!((a.x, a.y), (400.0, 300.0));
}

#[test]
fn selection_callbacks_reach_every_subscriber() {
	let mut s = state();
	s.set_graph_data(&data(&["a"], &[]));
	place(&mut s, "a", 250.0, 250.0);

	let log = Rc::new(RefCell::new(Vec::new()));
	let first = {
		let log = log.clone();
		s.on_node_selected(move |id| log.borrow_mut().push(format!("first {id}")))
	};
	{
		let log = log.clone();
		s.on_node_selected(move |id| log.borrow_mut().push(format!("second {id}")));
	}
	{
		let log = log.clone();
		s.on_node_double_click(move |id| log.borrow_mut().push(format!("open {id}")));
	}

	s.handle_pointer(PointerEvent::Down { x: 250.0, y: 250.0 });
	s.handle_pointer(PointerEvent::Up { x: 250.0, y: 250.0, click_count: 1 });
	assert_eq!(s.selected_node().map(|n| n.id.as_str()), Some("a"));

	assert!(s.interaction.on_node_selected.unsubscribe(first));
	s.handle_pointer(PointerEvent::Down { x: 250.0, y: 250.0 });
	s.handle_pointer(PointerEvent::Up { x: 250.0, y: 250.0, click_count: 2 });

	assert_eq!(*log.borrow(), ["first a", "second a", "open a"]);
}

#[test]
fn clear_resets_selection_and_hover() {
	let mut s = state();
	s.set_graph_data(&data(&["a"], &[]));
	place(&mut s, "a", 250.0, 250.0);
	s.handle_pointer(PointerEvent::Move { x: 250.0, y: 250.0 });
	s.handle_pointer(PointerEvent::Down { x: 250.0, y: 250.0 });
	s.handle_pointer(PointerEvent::Up { x: 250.0, y: 250.0, click_count: 1 });
	assert!(s.selected_node().is_some());

	s.clear();
	assert_eq!(s.model.node_count(), 0);
	assert_eq!(s.model.edge_count(), 0);
	assert!(s.selected_node().is_none());
	assert!(s.hovered_node().is_none());
}

#[test]
fn paused_simulation_redraws_only_on_demand() {
	let mut s = state();
	s.set_graph_data(&data(&["a", "b"], &[("a", "b")]));
	place(&mut s, "a", 100.0, 100.0);
	place(&mut s, "b", 400.0, 100.0);
	s.set_running(false);

	let mut surface = RecordingSurface::new(W, H);
	assert!(s.tick(&mut surface));
	let frozen = s.model.nodes().to_vec();
	assert!(!s.tick(&mut surface));
	assert_eq!(s.model.nodes(), &frozen[..]);

	assert!(s.handle_pointer(PointerEvent::Move { x: 100.0, y: 100.0 }));
	assert!(s.tick(&mut surface));
	assert!(!s.handle_pointer(PointerEvent::Move { x: 101.0, y: 100.0 }));
	assert!(!s.tick(&mut surface));

	s.toggle_running();
	assert!(s.is_running());
	assert!(s.tick(&mut surface));
	assert_ne!(s.model.nodes(), &frozen[..]);
}

#[test]
fn incremental_loading_resolves_late_edges() {
	let mut s = state();
	s.add_node(NodeRecord::new("a", NodeCategory::Config));
	s.add_edge(EdgeRecord::new("a", "b", EdgeKind::Includes));
	let mut surface = RecordingSurface::new(W, H);
	s.step();
	s.draw(&mut surface);
	assert!(surface.polygons().is_empty());

	s.add_node(NodeRecord::new("b", NodeCategory::Sql));
	place(&mut s, "a", 100.0, 100.0);
	place(&mut s, "b", 400.0, 100.0);
	let mut surface = RecordingSurface::new(W, H);
	s.draw(&mut surface);
	assert_eq!(surface.polygons().len(), 1);
}

#[test]
fn wheel_zoom_saturates() {
	let mut s = state();
	for _ in 0..100 {
		s.handle_pointer(PointerEvent::Wheel { x: 10.0, y: 10.0, delta: 1.0 });
	}
	assert_eq!(s.viewport.scale(), 5.0);
	for _ in 0..100 {
		s.handle_pointer(PointerEvent::Wheel { x: 10.0, y: 10.0, delta: -1.0 });
	}
	assert_eq!(s.viewport.scale(), 0.1);
	s.reset_view();
	assert_eq!(s.viewport.scale(), 1.0);
}
