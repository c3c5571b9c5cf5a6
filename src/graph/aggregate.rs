use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use crate::topology::Edge;

/// Identity of an unordered router pair, endpoints in lexicographic order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
	low: String,
	high: String,
}

impl PairKey {
	/// Key of the pair `a`, `b` in either order.
	pub fn new(a: &str, b: &str) -> Self {
		let (low, high) = if a <= b { (a, b) } else { (b, a) };
		Self {
			low: low.to_string(),
			high: high.to_string(),
		}
	}

	/// Lexicographically smaller endpoint.
	pub fn low(&self) -> &str {
		&self.low
	}

	/// Lexicographically larger endpoint.
	pub fn high(&self) -> &str {
		&self.high
	}

	/// Whether `id` is one of the endpoints.
	pub fn contains(&self, id: &str) -> bool {
		self.low == id || self.high == id
	}
}

impl fmt::Display for PairKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}->{}", self.low, self.high)
	}
}

/// Every cost advertised between two routers, in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedPair {
	key: PairKey,
	/// Weights advertised from `key.low` toward `key.high`, ascending.
	low_costs: Vec<u32>,
	/// Weights advertised from `key.high` toward `key.low`, ascending.
	high_costs: Vec<u32>,
	lowest_cost: Option<u32>,
	invalid: bool,
}

impl AggregatedPair {
	fn empty(key: PairKey) -> Self {
		Self {
			key,
			low_costs: Vec::new(),
			high_costs: Vec::new(),
			lowest_cost: None,
			invalid: false,
		}
	}

	fn observe(&mut self, from: &str, weight: u32) {
		if from == self.key.low {
			self.low_costs.push(weight);
		} else {
			self.high_costs.push(weight);
		}
	}

	fn finish(&mut self) {
		self.low_costs.sort_unstable();
		self.high_costs.sort_unstable();
		self.lowest_cost = self.low_costs.iter().chain(&self.high_costs).min().copied();
		// Equal sorted lists mean both sides advertise the same costs; this
		// also flags a pair where only one side advertised anything.
		self.invalid = self.low_costs != self.high_costs;
	}

	/// The pair's endpoints.
	pub fn key(&self) -> &PairKey {
		&self.key
	}

	/// Ascending costs advertised by `from` toward the other endpoint. Empty
	/// when `from` is not an endpoint of this pair.
	pub fn costs_from(&self, from: &str) -> &[u32] {
		if from == self.key.low {
			&self.low_costs
		} else if from == self.key.high {
			&self.high_costs
		} else {
			&[]
		}
	}

	/// Cheapest cost advertised by `from`, if it advertised any.
	pub fn lowest_from(&self, from: &str) -> Option<u32> {
		self.costs_from(from).first().copied()
	}

	/// Cheapest cost in either direction. `None` when no cost survives.
	pub fn lowest_cost(&self) -> Option<u32> {
		self.lowest_cost
	}

	/// The two directions disagree on their advertised costs.
	pub fn is_invalid(&self) -> bool {
		self.invalid
	}
}

/// Groups directed advertisements by unordered router pair.
///
/// Withdrawn advertisements (`weight: None`) register the pair without
/// contributing a cost. Edges missing an endpoint, and self-loops, are
/// skipped.
pub fn aggregate<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> BTreeMap<PairKey, AggregatedPair> {
	let mut pairs: BTreeMap<PairKey, AggregatedPair> = BTreeMap::new();
	let mut advertisements = 0usize;

	for edge in edges {
		if !edge.is_well_formed() {
			trace!("skipping malformed edge {:?} -> {:?}", edge.from, edge.to);
			continue;
		}
		advertisements += 1;
		let key = PairKey::new(&edge.from, &edge.to);
		let pair = pairs
			.entry(key)
			.or_insert_with_key(|key| AggregatedPair::empty(key.clone()));
		if let Some(weight) = edge.weight {
			pair.observe(&edge.from, weight);
		}
	}

	for pair in pairs.values_mut() {
		pair.finish();
	}

	debug!(
		"aggregated {} advertisements into {} router pairs ({} with mismatched costs)",
		advertisements,
		pairs.len(),
		pairs.values().filter(|pair| pair.invalid).count()
	);
	pairs
}
