use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::graph::ElementClass;

/// Destination id OSPF routers use to advertise a default route.
pub const DEFAULT_ROUTE: &str = "0.0.0.0/0";

/// Decodes an explicit JSON `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Network numbers arrive either as display strings or as bare integers.
fn nn_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Number(u64),
	}

	Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
		Raw::Text(text) => text,
		Raw::Number(number) => number.to_string(),
	}))
}

/// One advertised destination of a router.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLink {
	/// Destination prefix or router id.
	#[serde(default)]
	pub id: String,
	/// Type 1 metric.
	#[serde(default)]
	pub metric: Option<u32>,
	/// Type 2 external metric.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metric2: Option<u32>,
}

/// Destinations a router advertises, split by OSPF link type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Networks {
	#[serde(default, deserialize_with = "null_as_default")]
	/// Point-to-point links to other routers.
	pub router: Vec<NetworkLink>,
	/// Transit networks.
	#[serde(default, deserialize_with = "null_as_default")]
	pub network: Vec<NetworkLink>,
	/// External routes, including the default route.
	#[serde(default, deserialize_with = "null_as_default")]
	pub external: Vec<NetworkLink>,
	/// Stub networks.
	#[serde(default, deserialize_with = "null_as_default")]
	pub stubnet: Vec<NetworkLink>,
}

impl Networks {
	/// Cost at which this router advertises a default route, if it does.
	pub fn default_route_cost(&self) -> Option<u32> {
		self.external
			.iter()
			.find(|link| link.id == DEFAULT_ROUTE)
			.and_then(|link| link.metric.or(link.metric2))
	}
}

/// A `[node_id, cost]` step of an exit path. Hop zero has no cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitHop(pub String, pub Option<u32>);

impl ExitHop {
	/// Router at this hop.
	pub fn node_id(&self) -> &str {
		&self.0
	}

	/// Cost of the link into this hop.
	pub fn cost(&self) -> Option<u32> {
		self.1
	}
}

/// Precomputed routes between a router and the network egress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitPaths {
	/// From the router to the egress.
	#[serde(default, deserialize_with = "null_as_default")]
	pub outbound: Vec<ExitHop>,
	/// From the egress back to the router.
	#[serde(rename = "return", default, deserialize_with = "null_as_default")]
	pub return_path: Vec<ExitHop>,
}

impl ExitPaths {
	/// Router ids along the outbound path.
	pub fn outbound_ids(&self) -> Vec<&str> {
		self.outbound.iter().map(ExitHop::node_id).collect()
	}

	/// Router ids along the return path.
	pub fn return_ids(&self) -> Vec<&str> {
		self.return_path.iter().map(ExitHop::node_id).collect()
	}

	/// A router whose outbound path is only itself is an egress.
	pub fn is_exit(&self) -> bool {
		self.outbound.len() == 1
	}

	/// The neighbor traffic leaves through on its way to the egress.
	pub fn first_hop(&self) -> Option<&str> {
		self.outbound.get(1).map(ExitHop::node_id)
	}
}

/// A router in a topology snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
	/// Router id, usually its loopback address.
	#[serde(default)]
	pub id: String,
	/// Network number, when the router belongs to the mesh.
	#[serde(default, deserialize_with = "nn_label")]
	pub nn: Option<String>,
	/// Numeric form of `nn`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nn_int: Option<u32>,
	/// Cost of this router's own default route, if it is an egress.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub exit_network_cost: Option<u32>,
	/// Whether the router lies within the requested search radius, as opposed
	/// to being pulled in only as the endpoint of an edge.
	#[serde(default, alias = "inNeighborSet", deserialize_with = "null_as_default")]
	pub in_neighbor_set: bool,
	/// Links the collector already knows were cut off by the search radius.
	#[serde(default, alias = "missingEdgeCount", deserialize_with = "null_as_default")]
	pub missing_edges: u32,
	/// Routes to and from the egress.
	#[serde(default, alias = "exitPaths", deserialize_with = "null_as_default")]
	pub exit_paths: ExitPaths,
	/// Advertised destinations.
	#[serde(default, deserialize_with = "null_as_default")]
	pub networks: Networks,
}

impl Node {
	/// Display label: the network number, falling back to the id.
	pub fn label(&self) -> &str {
		self.nn.as_deref().unwrap_or(&self.id)
	}
}

/// A single directed cost advertisement. `weight` is `None` when the
/// advertisement was withdrawn, as in outage simulation results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
	/// Advertising router.
	#[serde(default)]
	pub from: String,
	/// Neighbor the cost applies toward.
	#[serde(default)]
	pub to: String,
	/// Advertised cost.
	#[serde(default)]
	pub weight: Option<u32>,
}

impl Edge {
	/// A single advertisement.
	pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Option<u32>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			weight,
		}
	}

	/// Both endpoints are present and distinct.
	pub fn is_well_formed(&self) -> bool {
		!self.from.is_empty() && !self.to.is_empty() && self.from != self.to
	}
}

/// How an outage simulation classified the routers it touched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageLists {
	/// Routers left without a route to the egress.
	#[serde(default, deserialize_with = "null_as_default")]
	pub offline: Vec<String>,
	/// Routers the operator took down.
	#[serde(default, deserialize_with = "null_as_default")]
	pub removed: Vec<String>,
	/// Routers that still reach the egress over a new path.
	#[serde(default, deserialize_with = "null_as_default")]
	pub rerouted: Vec<String>,
}

impl OutageLists {
	/// Whether `id` lost its route to the egress.
	pub fn is_offline(&self, id: &str) -> bool {
		self.offline.iter().any(|offline| offline == id)
	}

	/// Outage tags for a router, in offline, removed, rerouted order.
	pub fn classify(&self, id: &str) -> Vec<ElementClass> {
		[
			(&self.offline, ElementClass::Offline),
			(&self.removed, ElementClass::Removed),
			(&self.rerouted, ElementClass::Rerouted),
		]
		.into_iter()
		.filter(|(ids, _)| ids.iter().any(|listed| listed == id))
		.map(|(_, class)| class)
		.collect()
	}

	/// Number of classified routers.
	pub fn affected_count(&self) -> usize {
		self.offline.len() + self.removed.len() + self.rerouted.len()
	}
}

/// A topology snapshot as delivered by the collector, optionally carrying
/// the classification lists of an outage simulation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
	/// Routers, in collector order.
	#[serde(default, deserialize_with = "null_as_default")]
	pub nodes: Vec<Node>,
	/// Directed advertisements, possibly several per pair.
	#[serde(default, deserialize_with = "null_as_default")]
	pub edges: Vec<Edge>,
	/// Collection time in seconds since the Unix epoch.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<f64>,
	/// Outage classification. Empty outside simulation results.
	#[serde(default, alias = "outageLists", deserialize_with = "null_as_default")]
	pub outage_lists: OutageLists,
}

impl Snapshot {
	/// First router with id `id`.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// Collection time, when the snapshot carries one.
	pub fn updated_at(&self) -> Option<DateTime<Utc>> {
		let updated = self.updated.filter(|secs| secs.is_finite())?;
		let secs = updated.floor();
		let nanos = ((updated - secs) * 1e9) as u32;
		DateTime::from_timestamp(secs as i64, nanos)
	}
}
