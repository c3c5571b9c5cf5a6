use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display tags a renderer maps onto its own styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementClass {
	/// A router drawn from the snapshot.
	PrimaryNode,
	/// The router the view is centered on.
	Selected,
	/// A router that is itself the network egress.
	Exit,
	/// The label-only "<n> more" placeholder.
	InvisibleNode,
	/// Drawn dashed: placeholder links and severed links.
	DashedEdge,
	/// Drawn with an arrowhead.
	DirectionalEdge,
	/// The two directions advertise different costs.
	InvalidCosts,
	/// Lies on the selected router's exit path.
	Egress,
	/// Lost its route to the egress in the simulated outage.
	Offline,
	/// Taken down by the operator in the simulation.
	Removed,
	/// Still reachable, over a different path.
	Rerouted,
}

impl ElementClass {
	/// Tag name as the renderer sees it.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::PrimaryNode => "primaryNode",
			Self::Selected => "selected",
			Self::Exit => "exit",
			Self::InvisibleNode => "invisibleNode",
			Self::DashedEdge => "dashedEdge",
			Self::DirectionalEdge => "directionalEdge",
			Self::InvalidCosts => "invalidCosts",
			Self::Egress => "egress",
			Self::Offline => "offline",
			Self::Removed => "removed",
			Self::Rerouted => "rerouted",
		}
	}
}

impl fmt::Display for ElementClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A node to draw.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeElement {
	/// Element id, unique among nodes.
	pub id: String,
	/// Text drawn on the node.
	pub label: String,
	/// Display tags.
	#[serde(default)]
	pub classes: BTreeSet<ElementClass>,
	/// Whether the renderer should start with this node selected.
	#[serde(default)]
	pub selected: bool,
}

impl NodeElement {
	/// Unselected node with no tags.
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			classes: BTreeSet::new(),
			selected: false,
		}
	}

	/// Adds one tag.
	pub fn with_class(mut self, class: ElementClass) -> Self {
		self.classes.insert(class);
		self
	}

	/// Adds several tags.
	pub fn with_classes(mut self, classes: impl IntoIterator<Item = ElementClass>) -> Self {
		self.classes.extend(classes);
		self
	}

	/// Sets the initial selection state.
	pub fn selected(mut self, selected: bool) -> Self {
		self.selected = selected;
		self
	}
}

/// An edge to draw from `source` to `target`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeElement {
	/// Id of the source node.
	pub source: String,
	/// Id of the target node.
	pub target: String,
	/// Text drawn along the edge.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Explicit element id, when the renderer needs a stable one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Display tags.
	#[serde(default)]
	pub classes: BTreeSet<ElementClass>,
}

impl EdgeElement {
	/// Unlabeled edge with no tags.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			label: None,
			id: None,
			classes: BTreeSet::new(),
		}
	}

	/// Sets the label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets the element id.
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Adds one tag.
	pub fn with_class(mut self, class: ElementClass) -> Self {
		self.classes.insert(class);
		self
	}

	/// Adds several tags.
	pub fn with_classes(mut self, classes: impl IntoIterator<Item = ElementClass>) -> Self {
		self.classes.extend(classes);
		self
	}
}

/// A renderer-agnostic graph element. Serialized with a `group` tag of
/// `"node"` or `"edge"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "group", rename_all = "lowercase")]
pub enum GraphElement {
	/// A node.
	Node(NodeElement),
	/// An edge.
	Edge(EdgeElement),
}

impl GraphElement {
	/// The node, if this is one.
	pub fn as_node(&self) -> Option<&NodeElement> {
		match self {
			Self::Node(node) => Some(node),
			Self::Edge(_) => None,
		}
	}

	/// The edge, if this is one.
	pub fn as_edge(&self) -> Option<&EdgeElement> {
		match self {
			Self::Edge(edge) => Some(edge),
			Self::Node(_) => None,
		}
	}

	/// Display tags of either kind of element.
	pub fn classes(&self) -> &BTreeSet<ElementClass> {
		match self {
			Self::Node(node) => &node.classes,
			Self::Edge(edge) => &edge.classes,
		}
	}

	/// Whether the element carries `class`.
	pub fn has_class(&self, class: ElementClass) -> bool {
		self.classes().contains(&class)
	}
}

impl From<NodeElement> for GraphElement {
	fn from(node: NodeElement) -> Self {
		Self::Node(node)
	}
}

impl From<EdgeElement> for GraphElement {
	fn from(edge: EdgeElement) -> Self {
		Self::Edge(edge)
	}
}
