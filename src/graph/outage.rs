use log::debug;

use super::aggregate::aggregate;
use super::types::{EdgeElement, ElementClass, GraphElement, NodeElement};
use crate::topology::Snapshot;

/// Label of a link that lost every advertisement in the simulated outage.
pub const SEVERED_LABEL: &str = "X";

/// Builds the outage impact view of a simulation result.
///
/// Each router is tagged with its outage classification and points at the
/// first hop of its post-outage exit path. Links with no surviving cost are
/// drawn dashed with an `X`; links touching an offline router are drawn
/// plain so the offline routers stay attached to the graph.
pub fn build_outage_elements(snapshot: &Snapshot) -> Vec<GraphElement> {
	let pairs = aggregate(&snapshot.edges);
	let lists = &snapshot.outage_lists;
	let mut elements = Vec::with_capacity(snapshot.nodes.len() * 2 + pairs.len());

	for node in &snapshot.nodes {
		let mut element = NodeElement::new(&node.id, node.label())
			.with_class(ElementClass::PrimaryNode)
			.with_classes(lists.classify(&node.id));

		if node.exit_paths.is_exit() {
			element = element.with_class(ElementClass::Exit);
		}
		elements.push(element.into());

		if let Some(next_hop) = node.exit_paths.first_hop() {
			elements.push(
				EdgeElement::new(&node.id, next_hop)
					.with_id(format!("{}->{}", node.id, next_hop))
					.with_class(ElementClass::DirectionalEdge)
					.into(),
			);
		}
	}

	let mut severed = 0usize;
	for (key, pair) in &pairs {
		let (low, high) = (key.low(), key.high());
		if pair.lowest_cost().is_none() {
			severed += 1;
			elements.push(
				EdgeElement::new(low, high)
					.with_id(key.to_string())
					.with_label(SEVERED_LABEL)
					.with_class(ElementClass::DashedEdge)
					.into(),
			);
		}
		if lists.is_offline(low) || lists.is_offline(high) {
			elements.push(EdgeElement::new(low, high).into());
		}
	}

	debug!(
		"outage view: {} elements, {} severed links, {} routers affected",
		elements.len(),
		severed,
		lists.affected_count()
	);
	elements
}
