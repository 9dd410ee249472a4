//! [`Surface`] backed by an HTML canvas 2D context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::surface::{Font, Surface};
use super::theme::Color;

/// Draws onto a `CanvasRenderingContext2d`. `clear` paints the background color.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
	width: f64,
	height: f64,
	background: Color,
}

impl<'a> CanvasSurface<'a> {
	/// Wrap a context for one frame.
	pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64, background: Color) -> Self {
		Self {
			ctx,
			width,
			height,
			background,
		}
	}

	fn circle_path(&self, x: f64, y: f64, r: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, r.max(0.0), 0.0, 2.0 * PI);
	}
}

impl Surface for CanvasSurface<'_> {
	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn clear(&mut self) {
		let _ = self.ctx.set_line_dash(&js_sys::Array::new());
		self.ctx.set_global_alpha(1.0);
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
		self.ctx.set_fill_style_str(&self.background.to_css());
		self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
	}

	fn set_fill_color(&mut self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
	}

	fn set_stroke_color(&mut self, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
	}

	fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
		self.circle_path(x, y, r);
		self.ctx.fill();
	}

	fn stroke_circle(&mut self, x: f64, y: f64, r: f64, width: f64) {
		self.circle_path(x, y, r);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}

	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
		let Some((&(x0, y0), rest)) = points.split_first() else {
			return;
		};
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		self.ctx.move_to(x0, y0);
		for &(x, y) in rest {
			self.ctx.line_to(x, y);
		}
		self.ctx.close_path();
		self.ctx.fill();
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font) {
		self.ctx.set_font(&font.to_css());
		self.ctx.set_text_align("center");
		self.ctx.set_text_baseline("middle");
		let _ = self.ctx.fill_text(text, x, y);
	}

	fn measure_text(&self, text: &str, font: &Font) -> f64 {
		self.ctx.set_font(&font.to_css());
		match self.ctx.measure_text(text) {
			Ok(metrics) => metrics.width(),
			Err(_) => text.chars().count() as f64 * font.size * 0.6,
		}
	}
}
