//! Host-facing graph state.
//!
//! Bundles the model, layout engine, viewport, interaction controller, and
//! renderer. The embedding environment calls [`ForceGraphState::tick`] at its
//! own cadence (once per display frame in the browser) and forwards pointer
//! events to [`ForceGraphState::handle_pointer`]. Both run to completion on
//! the host thread, so the renderer never sees a half-updated model.

use log::debug;

use super::config::GraphConfig;
use super::interaction::{InteractionController, PointerEvent};
use super::layout::ForceLayoutEngine;
use super::model::{GraphModel, GraphNode};
use super::observer::Subscription;
use super::render::{Highlight, Renderer};
use super::surface::Surface;
use super::theme::Theme;
use super::types::{EdgeRecord, GraphData, NodeRecord};
use super::viewport::ViewportTransform;

/// Core graph state driven by the host's frame loop.
pub struct ForceGraphState {
	/// Nodes and edges.
	pub model: GraphModel,
	/// Physics simulation.
	pub layout: ForceLayoutEngine,
	/// Pan and zoom.
	pub viewport: ViewportTransform,
	/// Pointer state machine and selection observers.
	pub interaction: InteractionController,
	/// Draw pass configuration.
	pub renderer: Renderer,
	running: bool,
	dirty: bool,
}

impl ForceGraphState {
	/// Empty graph over a canvas of the given size.
	pub fn new(config: GraphConfig, theme: Theme, width: f64, height: f64) -> Self {
		let viewport = ViewportTransform::new(width, height);
		Self {
			model: GraphModel::new(config.seed, viewport.visible_world_rect()),
			layout: ForceLayoutEngine::new(config.layout),
			viewport,
			interaction: InteractionController::new(config.interaction, config.node_radius),
			renderer: Renderer::new(config.render, theme, config.node_radius),
			running: true,
			dirty: true,
		}
	}

	/// Replace the whole graph. Positions are re-randomized inside the
	/// visible area and hover/selection are cleared.
	pub fn set_graph_data(&mut self, data: &GraphData) {
		self.model.set_extent(self.viewport.visible_world_rect());
		self.model.set_data(data.nodes.clone(), data.edges.clone());
		self.interaction.reset();
		self.dirty = true;
	}

	/// Append or merge one node.
	pub fn add_node(&mut self, record: NodeRecord) {
		self.model.set_extent(self.viewport.visible_world_rect());
		self.model.add_node(record);
		self.dirty = true;
	}

	/// Append one edge.
	pub fn add_edge(&mut self, record: EdgeRecord) {
		self.model.add_edge(record);
		self.dirty = true;
	}

	/// Drop all nodes and edges, hover, and selection.
	pub fn clear(&mut self) {
		self.model.clear();
		self.interaction.reset();
		self.dirty = true;
	}

	/// Whether the simulation advances on each tick.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Start or stop the simulation. Stopping leaves every node where it is.
	pub fn set_running(&mut self, running: bool) {
		if self.running != running {
			debug!("graph: simulation {}", if running { "resumed" } else { "paused" });
		}
		self.running = running;
		self.dirty = true;
	}

	/// Flip the running flag.
	pub fn toggle_running(&mut self) {
		self.set_running(!self.running);
	}

	/// Pan so the graph's bounding box is centered on the canvas.
	pub fn center(&mut self) {
		self.viewport.center_on(self.model.nodes().iter().map(|n| (n.x, n.y)));
		self.dirty = true;
	}

	/// Back to zoom 1 with no pan.
	pub fn reset_view(&mut self) {
		self.viewport.reset();
		self.dirty = true;
	}

	/// Track a canvas resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport.resize(width, height);
		self.dirty = true;
	}

	/// Currently selected node.
	pub fn selected_node(&self) -> Option<&GraphNode> {
		self.interaction.selected().and_then(|h| self.model.node(h))
	}

	/// Currently hovered node.
	pub fn hovered_node(&self) -> Option<&GraphNode> {
		self.interaction.hovered().and_then(|h| self.model.node(h))
	}

	/// Register a handler for single-click selection.
	pub fn on_node_selected(&mut self, handler: impl FnMut(&str) + 'static) -> Subscription {
		self.interaction.on_node_selected.subscribe(handler)
	}

	/// Register a handler for double-clicks on nodes.
	pub fn on_node_double_click(&mut self, handler: impl FnMut(&str) + 'static) -> Subscription {
		self.interaction.on_node_double_click.subscribe(handler)
	}

	/// Feed a pointer event. Returns `true` when a redraw was requested.
	pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
		let redraw = self
			.interaction
			.handle(event, &mut self.model, &mut self.viewport);
		self.dirty |= redraw;
		redraw
	}

	/// Advance the simulation one step, ignoring the running flag.
	pub fn step(&mut self) {
		self.layout.step(&mut self.model, self.interaction.pinned());
		self.dirty = true;
	}

	/// Draw the current frame.
	pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		let highlight = Highlight {
			hovered: self.interaction.hovered(),
			selected: self.interaction.selected(),
		};
		self.renderer.draw(surface, &self.model, &self.viewport, highlight);
		self.dirty = false;
	}

	/// One host frame: step while running, then draw if anything changed.
	/// Returns whether a frame was drawn.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
		if self.running {
			self.step();
		}
		if !self.dirty {
			return false;
		}
		self.draw(surface);
		true
	}
}
