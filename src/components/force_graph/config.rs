//! Tunable parameters for layout, rendering, and interaction.
//!
//! Every section deserializes with `#[serde(default)]`, so a host can supply a
//! partial JSON object and inherit the remaining values.

use serde::Deserialize;

/// Physics constants for [`ForceLayoutEngine`](super::layout::ForceLayoutEngine).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Numerator of the inverse-square repulsion between every node pair.
	pub repulsion_strength: f64,
	/// Spring constant of the zero-rest-length attraction along edges.
	pub attraction_strength: f64,
	/// Velocity multiplier per tick. Must be below 1.0 for the layout to settle.
	pub damping: f64,
	/// Lower bound on pair distance before computing repulsion.
	pub min_distance: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			repulsion_strength: 5000.0,
			attraction_strength: 0.01,
			damping: 0.85,
			min_distance: 10.0,
		}
	}
}

/// Visual sizes for [`Renderer`](super::render::Renderer), in screen pixels
/// unless noted otherwise.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
	/// Draw the background grid.
	pub show_grid: bool,
	/// Grid period in world units.
	pub grid_spacing: f64,
	/// Edge stroke width.
	pub edge_width: f64,
	/// Arrowhead length. Constant regardless of zoom.
	pub arrow_size: f64,
	/// Node border stroke width.
	pub border_width: f64,
	/// Selection ring stroke width.
	pub selection_ring_width: f64,
	/// Gap between the node boundary and the selection ring.
	pub selection_ring_gap: f64,
	/// Label font size at zoom 1.0.
	pub label_font_size: f64,
	/// Labels are hidden when the on-screen node radius drops below this.
	pub min_label_radius: f64,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			show_grid: true,
			grid_spacing: 50.0,
			edge_width: 1.5,
			arrow_size: 8.0,
			border_width: 1.5,
			selection_ring_width: 3.0,
			selection_ring_gap: 3.0,
			label_font_size: 11.0,
			min_label_radius: 8.0,
		}
	}
}

/// Pointer handling settings for [`InteractionController`](super::interaction::InteractionController).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
	/// Maximum pointer travel (screen pixels) for a press to still count as a click.
	pub click_slop: f64,
	/// Zoom factor applied for a positive wheel delta.
	pub zoom_in_factor: f64,
	/// Zoom factor applied for a non-positive wheel delta.
	pub zoom_out_factor: f64,
}

impl Default for InteractionConfig {
	fn default() -> Self {
		Self {
			click_slop: 4.0,
			zoom_in_factor: 1.1,
			zoom_out_factor: 0.9,
		}
	}
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// Physics constants.
	pub layout: LayoutConfig,
	/// Node radius in world units, shared by hit testing and rendering.
	pub node_radius: f64,
	/// Rendering sizes.
	pub render: RenderConfig,
	/// Pointer handling.
	pub interaction: InteractionConfig,
	/// Seed for the initial-position generator.
	pub seed: u64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			layout: LayoutConfig::default(),
			node_radius: 20.0,
			render: RenderConfig::default(),
			interaction: InteractionConfig::default(),
			seed: 0x5eed_cafe,
		}
	}
}
