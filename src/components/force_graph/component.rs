//! Leptos component wrapping the force-directed graph canvas.
//!
//! The component creates an HTML canvas element and wires up mouse, wheel, and
//! keyboard handlers. An animation loop runs via `requestAnimationFrame`,
//! calling [`ForceGraphState::tick`] once per frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window,
};

use super::canvas::CanvasSurface;
use super::config::GraphConfig;
use super::interaction::PointerEvent;
use super::state::ForceGraphState;
use super::theme::Theme;
use super::types::GraphData;

type Shared<T> = Rc<RefCell<Option<T>>>;

fn window_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an interactive force-directed graph on a canvas element.
///
/// Pass graph data via the reactive `data` signal; each change reloads the
/// graph. The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize automatically with the
/// window. Explicit `width`/`height` override automatic sizing.
///
/// Keys (with the canvas focused): Space toggles the simulation, `c` centers
/// the graph, `0` resets pan and zoom.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: GraphConfig,
	#[prop(optional)] theme: Option<Theme>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional, into)] on_node_selected: Option<Callback<String>>,
	#[prop(optional, into)] on_node_double_click: Option<Callback<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared<ForceGraphState> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	let theme = theme.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("graph: canvas 2d context unavailable");
			return;
		};

		let mut state = ForceGraphState::new(config.clone(), theme.clone(), w, h);
		if let Some(cb) = on_node_selected {
			state.on_node_selected(move |id| cb.run(id.to_string()));
		}
		if let Some(cb) = on_node_double_click {
			state.on_node_double_click(move |id| cb.run(id.to_string()));
		}
		state.set_graph_data(&data.get_untracked());
		*context_init.borrow_mut() = Some(state);
		debug!("graph: canvas ready at {w}x{h}");

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut state) = *context_resize.borrow_mut() {
					state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut state) = *context_anim.borrow_mut() {
				let mut surface = CanvasSurface::new(
					&ctx,
					state.viewport.width(),
					state.viewport.height(),
					state.renderer.theme().background,
				);
				state.tick(&mut surface);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_data = context.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut state) = *context_data.borrow_mut() {
			state.set_graph_data(&data);
		}
	});

	let dispatch = {
		let context = context.clone();
		move |event: PointerEvent| {
			if let Some(ref mut state) = *context.borrow_mut() {
				state.handle_pointer(event);
			}
		}
	};

	let on_mousedown = {
		let dispatch = dispatch.clone();
		move |ev: MouseEvent| {
			let event = canvas_point(canvas_ref, &ev)
				.and_then(|(x, y)| PointerEvent::press(ev.button(), x, y));
			if let Some(event) = event {
				dispatch(event);
			}
		}
	};

	let on_mousemove = {
		let dispatch = dispatch.clone();
		move |ev: MouseEvent| {
			if let Some((x, y)) = canvas_point(canvas_ref, &ev) {
				dispatch(PointerEvent::Move { x, y });
			}
		}
	};

	let on_mouseup = {
		let dispatch = dispatch.clone();
		move |ev: MouseEvent| {
			let event = canvas_point(canvas_ref, &ev)
				.and_then(|(x, y)| PointerEvent::release(ev.button(), x, y, ev.detail()));
			if let Some(event) = event {
				dispatch(event);
			}
		}
	};

	let on_mouseleave = {
		let dispatch = dispatch.clone();
		move |_: MouseEvent| dispatch(PointerEvent::Leave)
	};

	let on_wheel = {
		let dispatch = dispatch.clone();
		move |ev: WheelEvent| {
			ev.prevent_default();
			if let Some((x, y)) = canvas_point(canvas_ref, &ev) {
				// DOM wheel deltas are positive when scrolling down.
				dispatch(PointerEvent::Wheel {
					x,
					y,
					delta: -ev.delta_y(),
				});
			}
		}
	};

	let context_key = context.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if let Some(ref mut state) = *context_key.borrow_mut() {
			match ev.key().as_str() {
				" " => state.toggle_running(),
				"c" | "C" => state.center(),
				"0" => state.reset_view(),
				_ => return,
			}
			ev.prevent_default();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			tabindex="0"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:keydown=on_keydown
			style="display: block; cursor: grab; outline: none;"
		/>
	}
}
