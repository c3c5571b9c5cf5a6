//! Collector snapshot schema.

pub mod nn;
mod types;

pub use types::{
	DEFAULT_ROUTE, Edge, ExitHop, ExitPaths, NetworkLink, Networks, Node, OutageLists, Snapshot,
};
