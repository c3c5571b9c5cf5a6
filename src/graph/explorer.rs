use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, trace};

use super::aggregate::{AggregatedPair, PairKey, aggregate};
use super::path::{link_on_any_path, on_any_path};
use super::settings::ViewSettings;
use super::types::{EdgeElement, ElementClass, GraphElement, NodeElement};
use crate::topology::Snapshot;

/// Suffix of the placeholder node standing in for a router's hidden links.
pub const PLACEHOLDER_SUFFIX: &str = "_missing";

/// Label drawn instead of a cost when the two directions disagree.
pub const MISMATCH_LABEL: &str = "Mismatch";

/// Element id of `node_id`'s placeholder.
pub fn placeholder_id(node_id: &str) -> String {
	format!("{node_id}{PLACEHOLDER_SUFFIX}")
}

/// The router a placeholder element id belongs to, so a click on
/// `"<id>_missing"` can select `<id>` itself.
pub fn placeholder_owner(element_id: &str) -> Option<&str> {
	element_id
		.strip_suffix(PLACEHOLDER_SUFFIX)
		.filter(|owner| !owner.is_empty())
}

/// Builds the explorer view of `snapshot` around `selected`.
///
/// Routers outside the search radius are left out unless
/// `settings.include_egress` is set; links to them are summarized on a
/// per-router `"<n> more"` placeholder. Links along the selected router's
/// outbound and return exit paths are tagged [`ElementClass::Egress`].
pub fn build_explorer_elements(
	snapshot: &Snapshot,
	settings: &ViewSettings,
	selected: Option<&str>,
) -> Vec<GraphElement> {
	let pairs = aggregate(&snapshot.edges);
	let mut view = ExplorerView::new(snapshot, settings, selected);

	view.add_nodes();
	if settings.lowest_cost_only {
		view.add_aggregated_edges(&pairs);
	} else {
		view.add_raw_edges(&pairs);
	}
	view.add_placeholders();

	debug!(
		"explorer view: {} elements from {} nodes and {} edges ({} placeholders)",
		view.elements.len(),
		snapshot.nodes.len(),
		snapshot.edges.len(),
		view.placeholders
	);
	view.elements
}

/// Per-call scratch state. Counters live here so the snapshot is only read.
struct ExplorerView<'a> {
	snapshot: &'a Snapshot,
	settings: &'a ViewSettings,
	selected: Option<&'a str>,
	included: HashSet<&'a str>,
	missing: HashMap<&'a str, u32>,
	hidden_egress: HashSet<&'a str>,
	outbound: Vec<&'a str>,
	inbound: Vec<&'a str>,
	elements: Vec<GraphElement>,
	placeholders: usize,
}

impl<'a> ExplorerView<'a> {
	fn new(snapshot: &'a Snapshot, settings: &'a ViewSettings, selected: Option<&'a str>) -> Self {
		let exit_paths = selected
			.and_then(|id| snapshot.node(id))
			.map(|node| &node.exit_paths);

		Self {
			snapshot,
			settings,
			selected,
			included: HashSet::new(),
			missing: HashMap::new(),
			hidden_egress: HashSet::new(),
			outbound: exit_paths.map(|paths| paths.outbound_ids()).unwrap_or_default(),
			inbound: exit_paths.map(|paths| paths.return_ids()).unwrap_or_default(),
			elements: Vec::new(),
			placeholders: 0,
		}
	}

	fn egress_paths(&self) -> [&[&'a str]; 2] {
		[self.outbound.as_slice(), self.inbound.as_slice()]
	}

	fn is_included(&self, id: &str) -> bool {
		self.included.contains(id)
	}

	/// Only routers present in the snapshot carry a counter.
	fn count_missing(&mut self, id: &str) {
		if let Some(count) = self.missing.get_mut(id) {
			*count += 1;
		}
	}

	fn mark_hidden_egress(&mut self, id: &str) {
		if let Some(&id) = self.included.get(id) {
			self.hidden_egress.insert(id);
		}
	}

	fn add_nodes(&mut self) {
		let snapshot = self.snapshot;
		for node in &snapshot.nodes {
			if self.missing.contains_key(node.id.as_str()) {
				trace!("skipping duplicate node {}", node.id);
				continue;
			}
			self.missing.insert(&node.id, node.missing_edges);

			if !self.settings.include_egress && !node.in_neighbor_set {
				continue;
			}
			self.included.insert(&node.id);

			let is_selected = self.selected == Some(node.id.as_str());
			let mut element = NodeElement::new(&node.id, node.label())
				.with_class(ElementClass::PrimaryNode)
				.selected(is_selected);
			if is_selected {
				element = element.with_class(ElementClass::Selected);
			}
			if node.exit_paths.is_exit() {
				element = element.with_class(ElementClass::Exit);
			}
			self.elements.push(element.into());
		}
	}

	fn add_aggregated_edges(&mut self, pairs: &BTreeMap<PairKey, AggregatedPair>) {
		for pair in pairs.values() {
			let (low, high) = (pair.key().low(), pair.key().high());
			let (low_in, high_in) = (self.is_included(low), self.is_included(high));

			if !(low_in && high_in) {
				self.count_missing(low);
				self.count_missing(high);
				if low_in != high_in && link_on_any_path(low, high, &self.egress_paths()) {
					self.mark_hidden_egress(if low_in { low } else { high });
				}
				continue;
			}

			let forward_egress = on_any_path(low, high, &self.egress_paths());
			let backward_egress = on_any_path(high, low, &self.egress_paths());
			let common = pair
				.is_invalid()
				.then_some(ElementClass::InvalidCosts);

			if self.settings.both_directions {
				for (from, to, egress) in [(low, high, forward_egress), (high, low, backward_egress)] {
					let mut edge = EdgeElement::new(from, to)
						.with_class(ElementClass::DirectionalEdge)
						.with_classes(common);
					if let Some(cost) = pair.lowest_from(from) {
						edge = edge.with_label(cost.to_string());
					}
					if egress {
						edge = edge.with_class(ElementClass::Egress);
					}
					self.elements.push(edge.into());
				}
			} else {
				let mut edge = EdgeElement::new(low, high).with_classes(common);
				if pair.is_invalid() {
					edge = edge.with_label(MISMATCH_LABEL);
				} else if let Some(cost) = pair.lowest_cost() {
					edge = edge.with_label(cost.to_string());
				}
				if forward_egress || backward_egress {
					edge = edge.with_class(ElementClass::Egress);
				}
				self.elements.push(edge.into());
			}
		}
	}

	fn add_raw_edges(&mut self, pairs: &BTreeMap<PairKey, AggregatedPair>) {
		let snapshot = self.snapshot;
		let mut counted: HashSet<&PairKey> = HashSet::new();

		for edge in &snapshot.edges {
			let Some((key, pair)) = pairs.get_key_value(&PairKey::new(&edge.from, &edge.to)) else {
				continue;
			};
			let (from, to) = (edge.from.as_str(), edge.to.as_str());
			let (low, high) = (key.low(), key.high());
			let (low_in, high_in) = (self.is_included(low), self.is_included(high));

			if !(low_in && high_in) {
				if counted.insert(key) {
					self.count_missing(low);
					self.count_missing(high);
					if low_in != high_in && link_on_any_path(low, high, &self.egress_paths()) {
						self.mark_hidden_egress(if low_in { low } else { high });
					}
				}
				continue;
			}

			let mut element = if self.settings.both_directions {
				EdgeElement::new(from, to).with_class(ElementClass::DirectionalEdge)
			} else if from == low || pair.costs_from(low).is_empty() {
				// A pair only the high side advertises is still drawn, low to high.
				EdgeElement::new(low, high)
			} else {
				continue;
			};
			if pair.is_invalid() {
				element = element.with_class(ElementClass::InvalidCosts);
			}
			if !self.settings.both_directions && pair.is_invalid() {
				element = element.with_label(MISMATCH_LABEL);
			} else if let Some(weight) = edge.weight {
				element = element.with_label(weight.to_string());
			}

			// Only the cheapest advertisement of a direction carries traffic.
			let cheapest = edge.weight.is_some() && edge.weight == pair.lowest_from(from);
			let egress = on_any_path(from, to, &self.egress_paths())
				|| (!self.settings.both_directions && on_any_path(to, from, &self.egress_paths()));
			if cheapest && egress {
				element = element.with_class(ElementClass::Egress);
			}
			self.elements.push(element.into());
		}
	}

	fn add_placeholders(&mut self) {
		let snapshot = self.snapshot;
		let mut seen: HashSet<&str> = HashSet::new();

		for node in &snapshot.nodes {
			let id = node.id.as_str();
			if !self.is_included(id) || !seen.insert(id) {
				continue;
			}
			let count = self.missing.get(id).copied().unwrap_or_default();
			if count == 0 {
				continue;
			}

			let placeholder = placeholder_id(id);
			let mut link = EdgeElement::new(id, &placeholder).with_class(ElementClass::DashedEdge);
			if self.hidden_egress.contains(id) {
				link = link
					.with_class(ElementClass::Egress)
					.with_class(ElementClass::DirectionalEdge);
			}
			self.elements.push(
				NodeElement::new(placeholder, format!("{count} more"))
					.with_class(ElementClass::InvisibleNode)
					.into(),
			);
			self.elements.push(link.into());
			self.placeholders += 1;
		}
	}
}
