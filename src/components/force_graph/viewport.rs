//! Pan and zoom transform between world and screen coordinates.
//!
//! `screen = world * scale + offset`. The scale is clamped to
//! [`MIN_SCALE`]..=[`MAX_SCALE`] so the transform is always invertible.

/// Smallest allowed zoom.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed zoom.
pub const MAX_SCALE: f64 = 5.0;

/// Axis-aligned rectangle in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldRect {
	/// Left edge.
	pub min_x: f64,
	/// Top edge.
	pub min_y: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub max_y: f64,
}

impl WorldRect {
	/// Build a rectangle from its corners.
	pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		Self {
			min_x,
			min_y,
			max_x,
			max_y,
		}
	}

	/// Bounding box of a set of points, or `None` when the set is empty.
	pub fn bounding(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
		points.into_iter().fold(None, |acc, (x, y)| {
			Some(match acc {
				None => Self::new(x, y, x, y),
				Some(r) => Self::new(r.min_x.min(x), r.min_y.min(y), r.max_x.max(x), r.max_y.max(y)),
			})
		})
	}

	/// Center point.
	pub fn center(&self) -> (f64, f64) {
		((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
	}
}

/// Pan offset, zoom scale, and the canvas size they apply to.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportTransform {
	/// Horizontal pan in screen pixels.
	pub offset_x: f64,
	/// Vertical pan in screen pixels.
	pub offset_y: f64,
	scale: f64,
	width: f64,
	height: f64,
}

impl ViewportTransform {
	/// Identity transform over a canvas of the given size.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			offset_x: 0.0,
			offset_y: 0.0,
			scale: 1.0,
			width,
			height,
		}
	}

	/// Current zoom factor.
	pub fn scale(&self) -> f64 {
		self.scale
	}

	/// Canvas width in screen pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Canvas height in screen pixels.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Pan offset as a pair.
	pub fn offset(&self) -> (f64, f64) {
		(self.offset_x, self.offset_y)
	}

	/// Track a canvas resize. Pan and zoom are kept.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Map a world point to screen pixels.
	pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
		(x * self.scale + self.offset_x, y * self.scale + self.offset_y)
	}

	/// Map a screen point back to world coordinates.
	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.offset_x) / self.scale, (sy - self.offset_y) / self.scale)
	}

	/// Multiply the scale by `factor`, clamped to the allowed range.
	pub fn zoom(&mut self, factor: f64) {
		let scaled = self.scale * factor;
		if !scaled.is_nan() {
			self.scale = scaled.clamp(MIN_SCALE, MAX_SCALE);
		}
	}

	/// Zoom while keeping the world point under `(sx, sy)` fixed on screen.
	pub fn zoom_at_point(&mut self, sx: f64, sy: f64, factor: f64) {
		let (wx, wy) = self.screen_to_world(sx, sy);
		self.zoom(factor);
		self.offset_x = sx - wx * self.scale;
		self.offset_y = sy - wy * self.scale;
	}

	/// Back to scale 1 with no pan.
	pub fn reset(&mut self) {
		self.scale = 1.0;
		self.offset_x = 0.0;
		self.offset_y = 0.0;
	}

	/// Shift the pan offset by a screen-space delta.
	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.offset_x += dx;
		self.offset_y += dy;
	}

	/// Pan so the center of the points' bounding box sits at the canvas
	/// center. No-op for an empty set.
	pub fn center_on(&mut self, points: impl IntoIterator<Item = (f64, f64)>) {
		let Some(bounds) = WorldRect::bounding(points) else {
			return;
		};
		let (cx, cy) = bounds.center();
		self.offset_x = self.width / 2.0 - cx * self.scale;
		self.offset_y = self.height / 2.0 - cy * self.scale;
	}

	/// World-space rectangle currently visible on the canvas.
	pub fn visible_world_rect(&self) -> WorldRect {
		let (min_x, min_y) = self.screen_to_world(0.0, 0.0);
		let (max_x, max_y) = self.screen_to_world(self.width, self.height);
		WorldRect::new(min_x, min_y, max_x, max_y)
	}
}
