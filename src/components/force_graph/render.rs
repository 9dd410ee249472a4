//! Draw pass for the force graph.
//!
//! Rendering is a pure function of the model, viewport, and highlight state.
//! Passes, back to front:
//! 1. Background and grid (screen space, grid origin follows the pan)
//! 2. Edges with arrowheads, clipped to node boundaries
//! 3. Nodes in ascending priority, hovered and selected nodes last

use std::borrow::Cow;

use super::config::RenderConfig;
use super::model::{GraphModel, GraphNode, NodeHandle};
use super::surface::{Font, Surface};
use super::theme::Theme;
use super::viewport::ViewportTransform;

/// Marker appended to truncated labels.
const ELLIPSIS: char = '…';

/// Fraction of the node diameter a label may occupy.
const LABEL_FILL: f64 = 0.85;

/// Transient per-frame emphasis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Highlight {
	/// Node under the pointer.
	pub hovered: Option<NodeHandle>,
	/// Selected node.
	pub selected: Option<NodeHandle>,
}

impl Highlight {
	/// Whether `handle` is hovered or selected.
	pub fn emphasizes(&self, handle: NodeHandle) -> bool {
		self.hovered == Some(handle) || self.selected == Some(handle)
	}

	/// Paint order key. Nodes with larger keys are drawn later, on top.
	pub fn stacking_key(&self, handle: NodeHandle, node: &GraphNode) -> (bool, i32, NodeHandle) {
		(self.emphasizes(handle), node.priority, handle)
	}
}

/// Shorten `label` with a trailing ellipsis until it measures at most
/// `max_width`. Returns an empty string when not even the ellipsis fits.
///
/// The cut point is found by bisection, so a label costs O(log n) calls to
/// [`Surface::measure_text`].
pub fn fit_label<'a, S: Surface + ?Sized>(
	surface: &S,
	label: &'a str,
	font: &Font,
	max_width: f64,
) -> Cow<'a, str> {
	if surface.measure_text(label, font) <= max_width {
		return Cow::Borrowed(label);
	}
	let truncated = |end: usize| format!("{}{ELLIPSIS}", label[..end].trim_end());
	let cuts: Vec<usize> = label.char_indices().map(|(i, _)| i).collect();
	let fitting = cuts.partition_point(|&end| surface.measure_text(&truncated(end), font) <= max_width);
	match fitting {
		0 => Cow::Borrowed(""),
		n => Cow::Owned(truncated(cuts[n - 1])),
	}
}

/// Stateless renderer holding only visual configuration.
#[derive(Clone, Debug)]
pub struct Renderer {
	config: RenderConfig,
	theme: Theme,
	node_radius: f64,
}

impl Renderer {
	/// Create a renderer. `node_radius` is in world units.
	pub fn new(config: RenderConfig, theme: Theme, node_radius: f64) -> Self {
		Self {
			config,
			theme,
			node_radius,
		}
	}

	/// Active theme.
	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	/// Draw one frame. Neither the model nor the viewport is modified.
	pub fn draw<S: Surface + ?Sized>(
		&self,
		surface: &mut S,
		model: &GraphModel,
		viewport: &ViewportTransform,
		highlight: Highlight,
	) {
		surface.clear();
		if self.config.show_grid {
			self.draw_grid(surface, viewport);
		}
		self.draw_edges(surface, model, viewport);
		self.draw_nodes(surface, model, viewport, highlight);
	}

	fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S, viewport: &ViewportTransform) {
		let period = self.config.grid_spacing * viewport.scale();
		if period < 2.0 {
			return;
		}
		let (w, h) = (surface.width(), surface.height());
		let color = self.theme.grid;

		let mut x = viewport.offset_x.rem_euclid(period);
		while x <= w {
			surface.stroke_line(x, 0.0, x, h, 1.0, color);
			x += period;
		}
		let mut y = viewport.offset_y.rem_euclid(period);
		while y <= h {
			surface.stroke_line(0.0, y, w, y, 1.0, color);
			y += period;
		}
	}

	fn draw_edges<S: Surface + ?Sized>(&self, surface: &mut S, model: &GraphModel, viewport: &ViewportTransform) {
		let r = self.node_radius * viewport.scale();
		let width = self.config.edge_width;
		let arrow = self.config.arrow_size;

		for (edge, s, t) in model.resolved_edges() {
			let (Some(source), Some(target)) = (model.node(s), model.node(t)) else {
				continue;
			};
			let color = self.theme.edges.get(edge.kind);
			let (x1, y1) = viewport.world_to_screen(source.x, source.y);

			if s == t {
				let loop_r = r * 0.5;
				surface.set_stroke_color(color);
				surface.stroke_circle(x1, y1 - r - loop_r * 0.6, loop_r, width);
				continue;
			}

			let (x2, y2) = viewport.world_to_screen(target.x, target.y);
			let (dx, dy) = (x2 - x1, y2 - y1);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist <= 2.0 * r || dist < 0.001 {
				continue;
			}
			let (ux, uy) = (dx / dist, dy / dist);
			let (start_x, start_y) = (x1 + ux * r, y1 + uy * r);
			let (tip_x, tip_y) = (x2 - ux * r, y2 - uy * r);
			surface.stroke_line(start_x, start_y, tip_x, tip_y, width, color);

			let (back_x, back_y) = (tip_x - ux * arrow, tip_y - uy * arrow);
			let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);
			surface.fill_polygon(
				&[(tip_x, tip_y), (back_x + px, back_y + py), (back_x - px, back_y - py)],
				color,
			);
		}
	}

	fn draw_nodes<S: Surface + ?Sized>(
		&self,
		surface: &mut S,
		model: &GraphModel,
		viewport: &ViewportTransform,
		highlight: Highlight,
	) {
		let mut order: Vec<(NodeHandle, &GraphNode)> = model.iter().collect();
		order.sort_by_key(|&(h, n)| highlight.stacking_key(h, n));

		let r = self.node_radius * viewport.scale();
		let font = Font::sans(self.config.label_font_size * viewport.scale().min(2.0));

		for (handle, node) in order {
			let (x, y) = viewport.world_to_screen(node.x, node.y);
			let base = self.theme.nodes.get(node.category);
			let hovered = highlight.hovered == Some(handle);

			let fill = if hovered {
				surface.set_fill_color(self.theme.hover_halo);
				surface.fill_circle(x, y, r * 1.35);
				base.lighten(self.theme.hover_lighten)
			} else {
				base
			};
			surface.set_fill_color(fill);
			surface.fill_circle(x, y, r);
			surface.set_stroke_color(base.darken(self.theme.border_darken));
			surface.stroke_circle(x, y, r, self.config.border_width);

			if highlight.selected == Some(handle) {
				let ring = self.config.selection_ring_width;
				surface.set_stroke_color(self.theme.selection_ring);
				surface.stroke_circle(x, y, r + self.config.selection_ring_gap + ring / 2.0, ring);
			}

			if r >= self.config.min_label_radius {
				let text = fit_label(&*surface, &node.label, &font, 2.0 * r * LABEL_FILL);
				if !text.is_empty() {
					surface.set_fill_color(self.theme.label);
					surface.fill_text(&text, x, y, &font);
				}
			}
		}
	}
}
