//! Backend-agnostic drawing surface.
//!
//! The [`Renderer`](super::render::Renderer) only talks to this trait; the
//! browser canvas backend lives in [`canvas`](super::canvas), and tests use a
//! recording implementation.

use super::theme::Color;

/// Font used for labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
	/// Size in pixels.
	pub size: f64,
	/// CSS font family.
	pub family: &'static str,
	/// Bold weight.
	pub bold: bool,
}

impl Font {
	/// Regular sans-serif font of the given size.
	pub fn sans(size: f64) -> Self {
		Self {
			size,
			family: "sans-serif",
			bold: false,
		}
	}

	/// CSS `font` shorthand, e.g. `"bold 11px sans-serif"`.
	pub fn to_css(&self) -> String {
		let weight = if self.bold { "bold " } else { "" };
		format!("{weight}{}px {}", self.size, self.family)
	}
}

/// A 2D drawing target. Coordinates are screen pixels.
pub trait Surface {
	/// Width in pixels.
	fn width(&self) -> f64;
	/// Height in pixels.
	fn height(&self) -> f64;
	/// Erase everything.
	fn clear(&mut self);
	/// Color used by [`fill_circle`](Self::fill_circle) and [`fill_text`](Self::fill_text).
	fn set_fill_color(&mut self, color: Color);
	/// Color used by [`stroke_circle`](Self::stroke_circle).
	fn set_stroke_color(&mut self, color: Color);
	/// Filled circle.
	fn fill_circle(&mut self, x: f64, y: f64, r: f64);
	/// Circle outline.
	fn stroke_circle(&mut self, x: f64, y: f64, r: f64, width: f64);
	/// Straight line segment.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);
	/// Filled closed polygon.
	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color);
	/// Text centered horizontally and vertically on `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font);

	/// Rendered width of `text`. The default is a rough average-glyph estimate;
	/// backends with real metrics should override it.
	fn measure_text(&self, text: &str, font: &Font) -> f64 {
		text.chars().count() as f64 * font.size * 0.6
	}
}
