//! JSON-in, JSON-out entry points for callers holding raw collector output.

use crate::error::{Error, Result};
use crate::graph::{GraphElement, ViewSettings, build_explorer_elements, build_outage_elements};
use crate::topology::Snapshot;

/// Decodes a topology snapshot or outage simulation result.
pub fn decode_snapshot(json: &str) -> Result<Snapshot> {
	serde_json::from_str(json).map_err(|source| Error::Decode {
		what: "topology snapshot",
		source,
	})
}

/// Decodes and validates view settings. Blank input or `null` yields the
/// defaults.
pub fn decode_settings(json: &str) -> Result<ViewSettings> {
	if json.trim().is_empty() {
		return Ok(ViewSettings::default());
	}
	let settings: Option<ViewSettings> =
		serde_json::from_str(json).map_err(|source| Error::Decode {
			what: "view settings",
			source,
		})?;
	let settings = settings.unwrap_or_default();
	settings.validate()?;
	Ok(settings)
}

fn encode(elements: &[GraphElement]) -> Result<String> {
	serde_json::to_string(elements).map_err(Error::Encode)
}

/// Explorer view elements, as JSON, for a snapshot, settings and selection.
pub fn explorer_elements_json(
	snapshot: &str,
	settings: &str,
	selected: Option<&str>,
) -> Result<String> {
	let snapshot = decode_snapshot(snapshot)?;
	let settings = decode_settings(settings)?;
	encode(&build_explorer_elements(&snapshot, &settings, selected))
}

/// Outage impact elements, as JSON, for a simulation result.
pub fn outage_elements_json(snapshot: &str) -> Result<String> {
	let snapshot = decode_snapshot(snapshot)?;
	encode(&build_outage_elements(&snapshot))
}
