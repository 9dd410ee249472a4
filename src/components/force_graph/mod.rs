//! Force-directed dependency graph viewer.
//!
//! Renders an interactive force-directed graph with:
//! - Pairwise repulsion and edge springs advanced one tick per frame
//! - Pan, pivot-preserving zoom, and node dragging
//! - Hover emphasis, click selection, and double-click callbacks
//! - A backend-agnostic draw pass over the [`Surface`] trait
//!
//! # Example
//!
//! ```ignore
//! use depgraph_view::{EdgeKind, EdgeRecord, ForceGraphCanvas, GraphData, NodeCategory, NodeRecord};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         NodeRecord::new("world.conf", NodeCategory::Config),
//!         NodeRecord::new("auth.sql", NodeCategory::Sql),
//!     ],
//!     edges: vec![EdgeRecord::new("world.conf", "auth.sql", EdgeKind::Includes)],
//! };
//!
//! view! { <ForceGraphCanvas data=data.into() fullscreen=true /> }
//! ```

mod canvas;
mod component;
pub mod config;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod observer;
pub mod render;
mod state;
pub mod surface;
pub mod theme;
mod types;
pub mod viewport;

pub use canvas::CanvasSurface;
pub use component::ForceGraphCanvas;
pub use config::GraphConfig;
pub use interaction::{InteractionState, PointerEvent};
pub use model::{GraphModel, GraphNode, NodeHandle};
pub use state::ForceGraphState;
pub use surface::{Font, Surface};
pub use theme::{Color, Theme};
pub use types::{EdgeKind, EdgeRecord, GraphData, NodeCategory, NodeRecord};
pub use viewport::ViewportTransform;
