//! WebAssembly exports consumed by the browser front end.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::graph::{self, ViewSettings};
use crate::topology::{Snapshot, nn};

/// Installs logging when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
	crate::init_logging();
}

fn from_js<T: DeserializeOwned + Default>(what: &str, value: JsValue) -> Result<T, JsError> {
	if value.is_null() || value.is_undefined() {
		return Ok(T::default());
	}
	serde_wasm_bindgen::from_value(value)
		.map_err(|err| JsError::new(&format!("failed to decode {what}: {err}")))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
	value
		.serialize(&Serializer::json_compatible())
		.map_err(|err| JsError::new(&format!("failed to encode graph elements: {err}")))
}

/// Explorer view elements for a neighbors snapshot.
#[wasm_bindgen(js_name = explorerElements)]
pub fn explorer_elements(
	snapshot: JsValue,
	settings: JsValue,
	selected: Option<String>,
) -> Result<JsValue, JsError> {
	let snapshot: Snapshot = from_js("topology snapshot", snapshot)?;
	let settings: ViewSettings = from_js("view settings", settings)?;
	settings.validate()?;
	to_js(&graph::build_explorer_elements(
		&snapshot,
		&settings,
		selected.as_deref(),
	))
}

/// Outage impact elements for a simulation result.
#[wasm_bindgen(js_name = outageElements)]
pub fn outage_elements(snapshot: JsValue) -> Result<JsValue, JsError> {
	let snapshot: Snapshot = from_js("outage result", snapshot)?;
	to_js(&graph::build_outage_elements(&snapshot))
}

/// Display label for a router address.
#[wasm_bindgen(js_name = humanLabelFromIp)]
pub fn human_label_from_ip(ip: &str) -> String {
	nn::human_label_from_ip(ip)
}

/// Address for a search term that is either an address or a network number.
#[wasm_bindgen(js_name = ipFromMaybeNn)]
pub fn ip_from_maybe_nn(maybe_nn: &str) -> String {
	nn::ip_from_maybe_nn(maybe_nn)
}

/// Router id behind a `"<id>_missing"` placeholder, if `element_id` is one.
#[wasm_bindgen(js_name = placeholderOwner)]
pub fn placeholder_owner(element_id: &str) -> Option<String> {
	graph::placeholder_owner(element_id).map(str::to_string)
}

/// Crate version.
#[wasm_bindgen]
pub fn version() -> String {
	env!("CARGO_PKG_VERSION").to_string()
}
