use ospf_graph_view::graph::{EdgeElement, NodeElement, placeholder_owner};
use ospf_graph_view::{
	ElementClass, GraphElement, Snapshot, ViewSettings, build_explorer_elements,
	build_outage_elements,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};

fn snapshot(value: Value) -> Snapshot {
	serde_json::from_value(value).expect("fixture decodes")
}

fn nodes(elements: &[GraphElement]) -> Vec<&NodeElement> {
	elements.iter().filter_map(GraphElement::as_node).collect()
}

fn edges(elements: &[GraphElement]) -> Vec<&EdgeElement> {
	elements.iter().filter_map(GraphElement::as_edge).collect()
}

fn sorted(mut elements: Vec<GraphElement>) -> Vec<GraphElement> {
	elements.sort();
	elements
}

/// A four-router slice of the mesh around 10.69.0.3, with 10.70.0.4 outside
/// the search radius and two parallel advertisements toward it.
fn neighborhood() -> Snapshot {
	snapshot(json!({
		"nodes": [
			{
				"id": "10.69.0.1", "nn": "1", "in_neighbor_set": true, "missing_edges": 0,
				"exit_paths": {"outbound": [["10.69.0.1", null]], "return": [["10.69.0.1", null]]},
				"networks": {"external": [{"id": "0.0.0.0/0", "metric": 10}]}
			},
			{
				"id": "10.69.0.2", "nn": "2", "in_neighbor_set": true, "missing_edges": 0,
				"exit_paths": {
					"outbound": [["10.69.0.2", null], ["10.69.0.1", 10]],
					"return": [["10.69.0.1", null], ["10.69.0.2", 10]]
				}
			},
			{
				"id": "10.69.0.3", "nn": "3", "in_neighbor_set": true, "missing_edges": 0,
				"exit_paths": {
					"outbound": [["10.69.0.3", null], ["10.69.0.2", 100], ["10.69.0.1", 10]],
					"return": [["10.69.0.1", null], ["10.69.0.2", 10], ["10.69.0.3", 100]]
				}
			},
			{
				"id": "10.70.0.4", "in_neighbor_set": false, "missing_edges": 0,
				"exit_paths": {"outbound": null, "return": null}
			}
		],
		"edges": [
			{"from": "10.69.0.1", "to": "10.69.0.2", "weight": 10},
			{"from": "10.69.0.2", "to": "10.69.0.1", "weight": 10},
			{"from": "10.69.0.2", "to": "10.69.0.3", "weight": 100},
			{"from": "10.69.0.3", "to": "10.69.0.2", "weight": 100},
			{"from": "10.69.0.3", "to": "10.70.0.4", "weight": 10},
			{"from": "10.69.0.3", "to": "10.70.0.4", "weight": 100},
			{"from": "10.70.0.4", "to": "10.69.0.3", "weight": 10},
			{"from": "10.70.0.4", "to": "10.69.0.3", "weight": 100}
		],
		"updated": 1_680_000_000
	}))
}

#[test]
fn explorer_view_of_a_neighborhood() {
	let snapshot = neighborhood();
	let elements = build_explorer_elements(&snapshot, &ViewSettings::default(), Some("10.69.0.3"));

	let labels: Vec<(&str, &str)> = nodes(&elements)
		.iter()
		.map(|node| (node.id.as_str(), node.label.as_str()))
		.collect();
	assert_eq!(
		labels,
		vec![
			("10.69.0.1", "1"),
			("10.69.0.2", "2"),
			("10.69.0.3", "3"),
			("10.69.0.3_missing", "1 more"),
		]
	);
	assert!(nodes(&elements)[0].classes.contains(&ElementClass::Exit));
	assert!(nodes(&elements)[2].selected);

	let links: Vec<(&str, &str, Option<&str>, bool)> = edges(&elements)
		.iter()
		.map(|edge| {
			(
				edge.source.as_str(),
				edge.target.as_str(),
				edge.label.as_deref(),
				edge.classes.contains(&ElementClass::Egress),
			)
		})
		.collect();
	assert_eq!(
		links,
		vec![
			("10.69.0.1", "10.69.0.2", Some("10"), true),
			("10.69.0.2", "10.69.0.3", Some("100"), true),
			("10.69.0.3", "10.69.0.3_missing", None, false),
		]
	);
	assert_eq!(placeholder_owner("10.69.0.3_missing"), Some("10.69.0.3"));
	assert_eq!(snapshot.node("10.69.0.1").and_then(|node| node.networks.default_route_cost()), Some(10));
	assert_eq!(snapshot.updated_at().map(|at| at.timestamp()), Some(1_680_000_000));
}

#[test]
fn explorer_view_with_every_router_and_direction() {
	let settings = ViewSettings {
		both_directions: true,
		lowest_cost_only: true,
		include_egress: true,
		..Default::default()
	};
	let elements = build_explorer_elements(&neighborhood(), &settings, None);

	assert_eq!(nodes(&elements).len(), 4);
	assert_eq!(edges(&elements).len(), 6);
	let to_outside: Vec<Option<&str>> = edges(&elements)
		.iter()
		.filter(|edge| edge.source == "10.70.0.4" || edge.target == "10.70.0.4")
		.map(|edge| edge.label.as_deref())
		.collect();
	assert_eq!(to_outside, vec![Some("10"), Some("10")]);
	assert!(!elements.iter().any(|element| element.has_class(ElementClass::InvalidCosts)));
}

#[test]
fn search_radius_cutoff_becomes_a_count() {
	let snapshot = snapshot(json!({
		"nodes": [
			{"id": "A", "in_neighbor_set": true},
			{"id": "B", "in_neighbor_set": true},
			{"id": "C", "in_neighbor_set": false}
		],
		"edges": [
			{"from": "A", "to": "B", "weight": 10},
			{"from": "B", "to": "A", "weight": 10},
			{"from": "B", "to": "C", "weight": 5}
		]
	}));

	let elements = build_explorer_elements(&snapshot, &ViewSettings::default(), None);
	let output = serde_json::to_value(&elements).unwrap();
	assert_eq!(
		output,
		json!([
			{"group": "node", "id": "A", "label": "A", "classes": ["primaryNode"], "selected": false},
			{"group": "node", "id": "B", "label": "B", "classes": ["primaryNode"], "selected": false},
			{"group": "edge", "source": "A", "target": "B", "label": "10", "classes": []},
			{"group": "node", "id": "B_missing", "label": "1 more", "classes": ["invisibleNode"], "selected": false},
			{"group": "edge", "source": "B", "target": "B_missing", "classes": ["dashedEdge"]}
		])
	);
}

#[test]
fn asymmetric_costs_show_mismatch() {
	let snapshot = snapshot(json!({
		"nodes": [
			{"id": "A", "in_neighbor_set": true},
			{"id": "B", "in_neighbor_set": true}
		],
		"edges": [
			{"from": "A", "to": "B", "weight": 4},
			{"from": "B", "to": "A", "weight": 6}
		]
	}));
	let settings = ViewSettings {
		both_directions: false,
		lowest_cost_only: true,
		..Default::default()
	};
	let elements = build_explorer_elements(&snapshot, &settings, None);
	let links = edges(&elements);

	assert_eq!(links.len(), 1);
	assert_eq!((links[0].source.as_str(), links[0].target.as_str()), ("A", "B"));
	assert_eq!(links[0].label.as_deref(), Some("Mismatch"));
	assert!(links[0].classes.contains(&ElementClass::InvalidCosts));
}

#[test]
fn outage_view_of_a_simulation_result() {
	let snapshot = snapshot(json!({
		"nodes": [
			{
				"id": "10.69.0.1", "nn": "1",
				"exit_paths": {"outbound": [["10.69.0.1", null]], "return": [["10.69.0.1", null]]},
				"missing_edges": 0
			},
			{
				"id": "10.69.0.5", "nn": "5",
				"exit_paths": {
					"outbound": [["10.69.0.5", null], ["10.69.0.1", 10]],
					"return": [["10.69.0.1", null], ["10.69.0.5", 10]]
				},
				"missing_edges": 0
			},
			{"id": "X", "exit_paths": {"outbound": null, "return": null}, "missing_edges": 0},
			{"id": "Y", "exit_paths": {"outbound": null, "return": null}, "missing_edges": 0}
		],
		"edges": [
			{"from": "10.69.0.1", "to": "10.69.0.5", "weight": 10},
			{"from": "10.69.0.5", "to": "10.69.0.1", "weight": 10},
			{"from": "X", "to": "Y", "weight": null},
			{"from": "Y", "to": "X", "weight": null}
		],
		"outage_lists": {"offline": ["X"], "removed": ["Y"], "rerouted": ["10.69.0.5"]}
	}));
	let elements = build_outage_elements(&snapshot);

	let severed: Vec<&EdgeElement> = edges(&elements)
		.into_iter()
		.filter(|edge| edge.label.as_deref() == Some("X"))
		.collect();
	assert_eq!(severed.len(), 1);
	assert_eq!((severed[0].source.as_str(), severed[0].target.as_str()), ("X", "Y"));
	assert!(severed[0].classes.contains(&ElementClass::DashedEdge));

	let classes = |id: &str| -> Vec<ElementClass> {
		nodes(&elements)
			.into_iter()
			.find(|node| node.id == id)
			.map(|node| node.classes.iter().copied().collect())
			.unwrap_or_default()
	};
	assert_eq!(classes("X"), vec![ElementClass::PrimaryNode, ElementClass::Offline]);
	assert_eq!(classes("Y"), vec![ElementClass::PrimaryNode, ElementClass::Removed]);
	assert_eq!(classes("10.69.0.5"), vec![ElementClass::PrimaryNode, ElementClass::Rerouted]);
	assert_eq!(classes("10.69.0.1"), vec![ElementClass::PrimaryNode, ElementClass::Exit]);

	let toward_exit = edges(&elements)
		.into_iter()
		.find(|edge| edge.source == "10.69.0.5")
		.unwrap();
	assert_eq!(toward_exit.target, "10.69.0.1");
	assert_eq!(toward_exit.label, None);
	assert_eq!(edges(&elements).len(), 3);
}

#[test]
fn builders_are_idempotent() {
	let snapshot = neighborhood();
	for settings in [
		ViewSettings::default(),
		ViewSettings {
			both_directions: true,
			lowest_cost_only: false,
			include_egress: true,
			..Default::default()
		},
	] {
		let first = build_explorer_elements(&snapshot, &settings, Some("10.69.0.2"));
		let second = build_explorer_elements(&snapshot, &settings, Some("10.69.0.2"));
		assert_eq!(first, second);
	}
	assert_eq!(build_outage_elements(&snapshot), build_outage_elements(&snapshot));
}

proptest! {
	#[test]
	fn edge_order_does_not_change_the_view(
		edges in Just(neighborhood().edges).prop_shuffle(),
		both_directions in any::<bool>(),
		include_egress in any::<bool>(),
	) {
		let original = neighborhood();
		let mut shuffled = original.clone();
		shuffled.edges = edges;
		let settings = ViewSettings {
			both_directions,
			lowest_cost_only: true,
			include_egress,
			..Default::default()
		};

		prop_assert_eq!(
			sorted(build_explorer_elements(&original, &settings, Some("10.69.0.3"))),
			sorted(build_explorer_elements(&shuffled, &settings, Some("10.69.0.3")))
		);
		prop_assert_eq!(
			sorted(build_outage_elements(&original)),
			sorted(build_outage_elements(&shuffled))
		);
	}
}
