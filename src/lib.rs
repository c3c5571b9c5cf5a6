//! Graph views of an OSPF link-state topology.
//!
//! Takes topology snapshots and outage simulation results as produced by the
//! collector and turns them into a flat list of [`GraphElement`]s (nodes and
//! edges tagged with [`ElementClass`]es) that any graph renderer can draw.
//! Nothing here fetches data or lays anything out.

pub mod api;
pub mod error;
pub mod graph;
pub mod topology;

#[cfg(target_arch = "wasm32")]
mod bindings;

pub use error::{Error, Result};
pub use graph::{
	ElementClass, GraphElement, ViewSettings, build_explorer_elements, build_outage_elements,
};
pub use topology::{Edge, Node, Snapshot};

/// Initialize logging and panic hooks for the WASM target.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
	use log::{Level, info};

	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}
