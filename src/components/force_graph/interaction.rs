//! Pointer input state machine.
//!
//! Raw pointer events are turned into node drags, canvas pans, selection,
//! and wheel zoom. Hit testing always happens in world space, so it stays
//! correct under any pan or zoom.

use log::info;

use super::config::InteractionConfig;
use super::model::{GraphModel, NodeHandle};
use super::observer::Observers;
use super::render::Highlight;
use super::viewport::ViewportTransform;

/// A pointer event in canvas-relative screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	/// Primary button pressed.
	Down {
		/// Pointer x.
		x: f64,
		/// Pointer y.
		y: f64,
	},
	/// Pointer moved, with or without a button held.
	Move {
		/// Pointer x.
		x: f64,
		/// Pointer y.
		y: f64,
	},
	/// Primary button released.
	Up {
		/// Pointer x.
		x: f64,
		/// Pointer y.
		y: f64,
		/// Host click count for this release (1 = single, 2 = double, ...).
		click_count: u32,
	},
	/// Wheel scrolled. Positive `delta` zooms in.
	Wheel {
		/// Pointer x.
		x: f64,
		/// Pointer y.
		y: f64,
		/// Scroll amount.
		delta: f64,
	},
	/// Pointer left the canvas.
	Leave,
}

/// DOM `MouseEvent.button` value of the main button.
pub const PRIMARY_BUTTON: i16 = 0;

impl PointerEvent {
	/// `Down` for a main-button press. Other buttons are ignored.
	pub fn press(button: i16, x: f64, y: f64) -> Option<Self> {
		(button == PRIMARY_BUTTON).then_some(PointerEvent::Down { x, y })
	}

	/// `Up` for a main-button release. `detail` is the host click counter,
	/// which some hosts report as 0.
	pub fn release(button: i16, x: f64, y: f64, detail: i32) -> Option<Self> {
		(button == PRIMARY_BUTTON).then(|| PointerEvent::Up {
			x,
			y,
			click_count: detail.max(1).unsigned_abs(),
		})
	}
}

/// What the pointer is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
	/// No button held.
	#[default]
	Idle,
	/// A node follows the pointer.
	DraggingNode(NodeHandle),
	/// The canvas follows the pointer.
	PanningCanvas {
		/// Pan offset when the press started.
		origin_offset: (f64, f64),
		/// Pointer position when the press started.
		origin_pointer: (f64, f64),
	},
}

/// Where the current press started and whether it has left the click slop.
#[derive(Clone, Copy, Debug)]
struct Press {
	x: f64,
	y: f64,
	node: Option<NodeHandle>,
	moved: bool,
}

/// Find the node whose center lies within `radius` of a world point.
/// When several overlap, the one painted on top under `highlight` wins.
pub fn hit_test(
	model: &GraphModel,
	wx: f64,
	wy: f64,
	radius: f64,
	highlight: Highlight,
) -> Option<NodeHandle> {
	let r2 = radius * radius;
	model
		.iter()
		.filter(|(_, n)| {
			let (dx, dy) = (n.x - wx, n.y - wy);
			dx * dx + dy * dy <= r2
		})
		.max_by_key(|&(h, n)| highlight.stacking_key(h, n))
		.map(|(handle, _)| handle)
}

/// Interprets pointer events against a model and viewport.
pub struct InteractionController {
	config: InteractionConfig,
	node_radius: f64,
	state: InteractionState,
	press: Option<Press>,
	hovered: Option<NodeHandle>,
	selected: Option<NodeHandle>,
	/// Fired with the node id when a single click selects a node.
	pub on_node_selected: Observers<str>,
	/// Fired with the node id when a node is double-clicked.
	pub on_node_double_click: Observers<str>,
}

impl InteractionController {
	/// Create an idle controller. `node_radius` is the world-space hit radius.
	pub fn new(config: InteractionConfig, node_radius: f64) -> Self {
		Self {
			config,
			node_radius,
			state: InteractionState::Idle,
			press: None,
			hovered: None,
			selected: None,
			on_node_selected: Observers::default(),
			on_node_double_click: Observers::default(),
		}
	}

	/// Current state.
	pub fn state(&self) -> InteractionState {
		self.state
	}

	/// Node under the pointer, if any.
	pub fn hovered(&self) -> Option<NodeHandle> {
		self.hovered
	}

	/// Selected node, if any.
	pub fn selected(&self) -> Option<NodeHandle> {
		self.selected
	}

	/// Node that the layout must leave alone.
	pub fn pinned(&self) -> Option<NodeHandle> {
		match self.state {
			InteractionState::DraggingNode(h) => Some(h),
			_ => None,
		}
	}

	/// Forget hover, selection, and any gesture in progress. Call whenever
	/// the model's handles are invalidated.
	pub fn reset(&mut self) {
		self.state = InteractionState::Idle;
		self.press = None;
		self.hovered = None;
		self.selected = None;
	}

	/// Feed one pointer event. Returns `true` when the view needs a redraw.
	pub fn handle(
		&mut self,
		event: PointerEvent,
		model: &mut GraphModel,
		viewport: &mut ViewportTransform,
	) -> bool {
		match event {
			PointerEvent::Down { x, y } => self.pointer_down(x, y, model, viewport),
			PointerEvent::Move { x, y } => self.pointer_move(x, y, model, viewport),
			PointerEvent::Up { x, y, click_count } => self.pointer_up(x, y, click_count, model),
			PointerEvent::Wheel { x, y, delta } => {
				let factor = if delta > 0.0 {
					self.config.zoom_in_factor
				} else {
					self.config.zoom_out_factor
				};
				viewport.zoom_at_point(x, y, factor);
				true
			}
			PointerEvent::Leave => {
				let changed = self.hovered.is_some() || self.state != InteractionState::Idle;
				self.state = InteractionState::Idle;
				self.press = None;
				self.hovered = None;
				changed
			}
		}
	}

	fn node_at(&self, x: f64, y: f64, model: &GraphModel, viewport: &ViewportTransform) -> Option<NodeHandle> {
		let (wx, wy) = viewport.screen_to_world(x, y);
		let highlight = Highlight {
			hovered: self.hovered,
			selected: self.selected,
		};
		hit_test(model, wx, wy, self.node_radius, highlight)
	}

	fn pointer_down(&mut self, x: f64, y: f64, model: &GraphModel, viewport: &ViewportTransform) -> bool {
		let node = self.node_at(x, y, model, viewport);
		self.state = match node {
			Some(handle) => InteractionState::DraggingNode(handle),
			None => InteractionState::PanningCanvas {
				origin_offset: viewport.offset(),
				origin_pointer: (x, y),
			},
		};
		self.press = Some(Press {
			x,
			y,
			node,
			moved: false,
		});
		false
	}

	fn pointer_move(
		&mut self,
		x: f64,
		y: f64,
		model: &mut GraphModel,
		viewport: &mut ViewportTransform,
	) -> bool {
		if let Some(press) = &mut self.press {
			let (dx, dy) = (x - press.x, y - press.y);
			if dx * dx + dy * dy > self.config.click_slop * self.config.click_slop {
				press.moved = true;
			}
		}

		match self.state {
			InteractionState::Idle => {
				let hovered = self.node_at(x, y, model, viewport);
				let changed = hovered != self.hovered;
				self.hovered = hovered;
				changed
			}
			InteractionState::DraggingNode(handle) => {
				let (wx, wy) = viewport.screen_to_world(x, y);
				if let Some(node) = model.node_mut(handle) {
					node.x = wx;
					node.y = wy;
					node.vx = 0.0;
					node.vy = 0.0;
				}
				true
			}
			InteractionState::PanningCanvas {
				origin_offset,
				origin_pointer,
			} => {
				viewport.offset_x = origin_offset.0 + (x - origin_pointer.0);
				viewport.offset_y = origin_offset.1 + (y - origin_pointer.1);
				true
			}
		}
	}

	fn pointer_up(&mut self, x: f64, y: f64, click_count: u32, model: &GraphModel) -> bool {
		let was_active = self.state != InteractionState::Idle;
		self.state = InteractionState::Idle;
		let Some(press) = self.press.take() else {
			return was_active;
		};

		let (dx, dy) = (x - press.x, y - press.y);
		let slop = self.config.click_slop;
		if press.moved || dx * dx + dy * dy > slop * slop {
			return true;
		}

		let Some(handle) = press.node else {
			self.selected = None;
			return true;
		};
		let Some(node) = model.node(handle) else {
			return true;
		};
		let id = node.id.clone();
		if click_count >= 2 {
			info!("graph: double-click on {id}");
			self.on_node_double_click.emit(&id);
		} else {
			info!("graph: selected {id}");
			self.selected = Some(handle);
			self.on_node_selected.emit(&id);
		}
		true
	}
}
