//! Builders turning snapshots into graph elements.

mod aggregate;
mod explorer;
mod outage;
pub mod path;
mod settings;
mod types;

pub use aggregate::{AggregatedPair, PairKey, aggregate};
pub use explorer::{
	MISMATCH_LABEL, PLACEHOLDER_SUFFIX, build_explorer_elements, placeholder_id, placeholder_owner,
};
pub use outage::{SEVERED_LABEL, build_outage_elements};
pub use settings::ViewSettings;
pub use types::{EdgeElement, ElementClass, GraphElement, NodeElement};
