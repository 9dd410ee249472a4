//! Visual theming for the force graph.
//!
//! Colors per node category and edge kind, plus background, grid, selection,
//! and hover styling.

use super::types::{EdgeKind, NodeCategory};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in 0.0..=1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill colors per node category.
#[derive(Clone, Debug)]
pub struct CategoryPalette {
	/// Configuration files.
	pub config: Color,
	/// SQL scripts.
	pub sql: Color,
	/// Gameplay scripts.
	pub script: Color,
	/// Modules and plugins.
	pub module: Color,
	/// Data assets.
	pub asset: Color,
	/// Unclassified nodes.
	pub unknown: Color,
}

impl CategoryPalette {
	/// Fill color for a category.
	pub fn get(&self, category: NodeCategory) -> Color {
		match category {
			NodeCategory::Config => self.config,
			NodeCategory::Sql => self.sql,
			NodeCategory::Script => self.script,
			NodeCategory::Module => self.module,
			NodeCategory::Asset => self.asset,
			NodeCategory::Unknown => self.unknown,
		}
	}
}

/// Stroke colors per edge kind.
#[derive(Clone, Debug)]
pub struct EdgePalette {
	/// `depends` edges.
	pub depends: Color,
	/// `includes` edges.
	pub includes: Color,
	/// `references` edges.
	pub references: Color,
	/// `overrides` edges.
	pub overrides: Color,
}

impl EdgePalette {
	/// Stroke color for an edge kind.
	pub fn get(&self, kind: EdgeKind) -> Color {
		match kind {
			EdgeKind::Depends => self.depends,
			EdgeKind::Includes => self.includes,
			EdgeKind::References => self.references,
			EdgeKind::Overrides => self.overrides,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background.
	pub background: Color,
	/// Grid line color.
	pub grid: Color,
	/// Node fills.
	pub nodes: CategoryPalette,
	/// Edge strokes and arrowheads.
	pub edges: EdgePalette,
	/// How much darker the node border is than its fill.
	pub border_darken: f64,
	/// How much a hovered node's fill is brightened.
	pub hover_lighten: f64,
	/// Soft halo drawn behind a hovered node.
	pub hover_halo: Color,
	/// Ring around the selected node.
	pub selection_ring: Color,
	/// Label text.
	pub label: Color,
}

impl Theme {
	/// Dark theme, the default.
	pub fn dark() -> Self {
		Self {
			background: Color::rgb(22, 27, 34),
			grid: Color::rgba(140, 160, 180, 0.08),
			nodes: CategoryPalette {
				config: Color::rgb(25, 118, 210),
				sql: Color::rgb(230, 81, 0),
				script: Color::rgb(46, 125, 50),
				module: Color::rgb(123, 31, 162),
				asset: Color::rgb(0, 131, 143),
				unknown: Color::rgb(117, 117, 117),
			},
			edges: EdgePalette {
				depends: Color::rgba(140, 160, 180, 0.7),
				includes: Color::rgba(100, 181, 246, 0.8),
				references: Color::rgba(174, 213, 129, 0.7),
				overrides: Color::rgba(239, 154, 154, 0.8),
			},
			border_darken: 0.35,
			hover_lighten: 0.3,
			hover_halo: Color::rgba(255, 255, 255, 0.18),
			selection_ring: Color::rgb(255, 213, 79),
			label: Color::rgba(255, 255, 255, 0.95),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}
