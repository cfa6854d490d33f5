//! Crate-wide error type.

use thiserror::Error;

/// Errors raised by the PulseGov client.
#[derive(Error, Debug)]
pub enum PulseError {
	/// Build-time settings failed validation.
	#[error("Invalid configuration: {0}")]
	Config(String),

	/// The feedback request never got a response.
	#[error("Request to feedback service failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The feedback service answered with a non-2xx status.
	#[error("Feedback service responded with status {0}")]
	Status(u16),

	/// The feedback reply could not be turned into a result.
	#[error("Malformed feedback reply: {0}")]
	MalformedReply(String),

	/// A frame on the analysis stream did not follow the Socket.IO framing.
	#[error("Malformed stream frame: {0}")]
	MalformedFrame(String),

	/// A browser API returned an exception.
	#[error("Browser call failed: {0}")]
	Browser(String),
}

impl From<wasm_bindgen::JsValue> for PulseError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		PulseError::Browser(format!("{value:?}"))
	}
}
