//! depgraph-view: interactive force-directed dependency graph viewer.
//!
//! This crate provides a WASM-based graph visualization component that renders
//! configuration dependency graphs with physics-based layout, pan/zoom, node
//! dragging, and selection callbacks. The engine itself (model, layout,
//! viewport, interaction, renderer) is backend-agnostic and runs natively.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::force_graph::{
	Color, EdgeKind, EdgeRecord, Font, ForceGraphCanvas, ForceGraphState, GraphConfig, GraphData,
	GraphModel, GraphNode, InteractionState, NodeCategory, NodeHandle, NodeRecord, PointerEvent,
	Surface, Theme, ViewportTransform,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("depgraph-view: logging initialized");
}

/// Parse the JSON text of a `<script>` element with the given id.
fn load_script_json<T: DeserializeOwned>(element_id: &str) -> Option<T> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(element_id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<T>(&json_text) {
		Ok(value) => Some(value),
		Err(e) => {
			warn!("depgraph-view: failed to parse #{}: {}", element_id, e);
			None
		}
	}
}

/// Load graph data from a script element with id="graph-data".
/// Expected format: JSON with { nodes: [...], edges: [...] }
fn load_graph_data() -> Option<GraphData> {
	let data: GraphData = load_script_json("graph-data")?;
	info!(
		"depgraph-view: loaded {} nodes, {} edges",
		data.nodes.len(),
		data.edges.len()
	);
	Some(data)
}

/// Load optional engine tunables from a script element with id="graph-config".
fn load_graph_config() -> GraphConfig {
	load_script_json("graph-config").unwrap_or_default()
}

/// Main application component.
/// Loads graph data from DOM and renders the force-directed visualization.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph_data = load_graph_data().unwrap_or_default();
	let graph_signal = Signal::derive(move || graph_data.clone());
	let (selected, set_selected) = signal(None::<String>);

	let on_select = Callback::new(move |id: String| set_selected.set(Some(id)));
	let on_open = Callback::new(move |id: String| info!("depgraph-view: open {}", id));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Dependency Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas
				data=graph_signal
				config=load_graph_config()
				fullscreen=true
				on_node_selected=on_select
				on_node_double_click=on_open
			/>
			<div class="graph-overlay">
				<h1>"Dependency Graph"</h1>
				<p class="subtitle">
					"Drag nodes to reposition. Scroll to zoom. Drag background to pan. Space pauses, C centers."
				</p>
				<p class="selection">
					{move || selected.get().map(|id| format!("Selected: {id}")).unwrap_or_default()}
				</p>
			</div>
		</div>
	}
}
