//! Shared test fixtures: a surface that records draw calls.

#![allow(dead_code)]

use depgraph_view::{Color, Font, Surface};

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear,
	FillColor(Color),
	StrokeColor(Color),
	FillCircle { x: f64, y: f64, r: f64 },
	StrokeCircle { x: f64, y: f64, r: f64, width: f64 },
	Line { x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color },
	Polygon { points: Vec<(f64, f64)>, color: Color },
	Text { text: String, x: f64, y: f64 },
}

/// Surface that stores every call. Text is measured as `chars * char_width`.
pub struct RecordingSurface {
	pub width: f64,
	pub height: f64,
	pub char_width: f64,
	pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			char_width: 6.0,
			calls: Vec::new(),
		}
	}

	pub fn lines(&self) -> Vec<&DrawCall> {
		self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. })).collect()
	}

	pub fn polygons(&self) -> Vec<&DrawCall> {
		self.calls.iter().filter(|c| matches!(c, DrawCall::Polygon { .. })).collect()
	}

	pub fn texts(&self) -> Vec<&str> {
		self.calls
			.iter()
			.filter_map(|c| match c {
				DrawCall::Text { text, .. } => Some(text.as_str()),
				_ => None,
			})
			.collect()
	}

	pub fn fill_circles(&self) -> Vec<(f64, f64, f64)> {
		self.calls
			.iter()
			.filter_map(|c| match *c {
				DrawCall::FillCircle { x, y, r } => Some((x, y, r)),
				_ => None,
			})
			.collect()
	}

	pub fn stroke_circles(&self) -> Vec<(f64, f64, f64, f64)> {
		self.calls
			.iter()
			.filter_map(|c| match *c {
				DrawCall::StrokeCircle { x, y, r, width } => Some((x, y, r, width)),
				_ => None,
			})
			.collect()
	}
}

impl Surface for RecordingSurface {
	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn clear(&mut self) {
		self.calls.push(DrawCall::Clear);
	}

	fn set_fill_color(&mut self, color: Color) {
		self.calls.push(DrawCall::FillColor(color));
	}

	fn set_stroke_color(&mut self, color: Color) {
		self.calls.push(DrawCall::StrokeColor(color));
	}

	fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
		self.calls.push(DrawCall::FillCircle { x, y, r });
	}

	fn stroke_circle(&mut self, x: f64, y: f64, r: f64, width: f64) {
		self.calls.push(DrawCall::StrokeCircle { x, y, r, width });
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
		self.calls.push(DrawCall::Line { x1, y1, x2, y2, width, color });
	}

	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
		self.calls.push(DrawCall::Polygon {
			points: points.to_vec(),
			color,
		});
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, _font: &Font) {
		self.calls.push(DrawCall::Text {
			text: text.to_string(),
			x,
			y,
		});
	}

	fn measure_text(&self, text: &str, _font: &Font) -> f64 {
		text.chars().count() as f64 * self.char_width
	}
}
