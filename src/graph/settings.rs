use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display options for the explorer view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewSettings {
	/// Schema version the caller wrote these settings against.
	pub version: u32,
	/// Draw each direction's cost as its own directed edge.
	pub both_directions: bool,
	/// Collapse parallel advertisements of a router pair into one aggregate.
	pub lowest_cost_only: bool,
	/// Draw routers that are only edge endpoints outside the search radius.
	pub include_egress: bool,
}

impl ViewSettings {
	/// Newest settings version this crate understands.
	pub const VERSION: u32 = 1;

	/// Rejects settings written for a newer version.
	pub fn validate(&self) -> Result<()> {
		if self.version > Self::VERSION {
			return Err(Error::UnsupportedSettingsVersion {
				found: self.version,
				supported: Self::VERSION,
			});
		}
		Ok(())
	}
}

impl Default for ViewSettings {
	fn default() -> Self {
		Self {
			version: Self::VERSION,
			both_directions: false,
			lowest_cost_only: true,
			include_egress: false,
		}
	}
}
