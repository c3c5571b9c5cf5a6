//! Errors raised at the JSON boundary. Building graph elements from an
//! already decoded snapshot cannot fail.

use thiserror::Error;

/// Failure to read or write one of the JSON documents.
#[derive(Debug, Error)]
pub enum Error {
	/// Input JSON did not match the expected shape.
	#[error("failed to decode {what}: {source}")]
	Decode {
		/// Which document failed.
		what: &'static str,
		/// Underlying parser error.
		#[source]
		source: serde_json::Error,
	},

	/// Output elements could not be serialized.
	#[error("failed to encode graph elements: {0}")]
	Encode(#[source] serde_json::Error),

	/// Settings were written for a newer version of this crate.
	#[error("view settings version {found} is newer than supported version {supported}")]
	UnsupportedSettingsVersion {
		/// Version the settings declare.
		found: u32,
		/// Newest version this crate understands.
		supported: u32,
	},
}

/// Result of a JSON boundary operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;
