//! Build-time client settings.

use crate::error::PulseError;

const DEFAULT_SERVICE_BASE: &str = "http://localhost:5000";

/// Where the feedback service and the analysis stream live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
	/// Base URL of the feedback HTTP service.
	pub api_base: String,
	/// Base URL of the Socket.IO server pushing `analysis_update` events.
	pub stream_base: String,
	/// Classify feedback locally instead of calling the service.
	pub offline: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			api_base: DEFAULT_SERVICE_BASE.into(),
			stream_base: DEFAULT_SERVICE_BASE.into(),
			offline: false,
		}
	}
}

impl Settings {
	/// Reads `PULSEGOV_API_BASE`, `PULSEGOV_STREAM_BASE` and `PULSEGOV_OFFLINE`
	/// as they were set when the bundle was compiled.
	pub fn from_build_env() -> Result<Self, PulseError> {
		let settings = Self::from_values(
			option_env!("PULSEGOV_API_BASE"),
			option_env!("PULSEGOV_STREAM_BASE"),
			option_env!("PULSEGOV_OFFLINE"),
		);
		settings.validate()?;
		Ok(settings)
	}

	fn from_values(api_base: Option<&str>, stream_base: Option<&str>, offline: Option<&str>) -> Self {
		let defaults = Self::default();
		Self {
			api_base: api_base.map(normalize_base).unwrap_or(defaults.api_base),
			stream_base: stream_base
				.map(normalize_base)
				.unwrap_or(defaults.stream_base),
			offline: offline.is_some_and(parse_flag),
		}
	}

	/// Validates the settings and returns an error if invalid.
	pub fn validate(&self) -> Result<(), PulseError> {
		validate_base("api base", &self.api_base)?;
		validate_base("stream base", &self.stream_base)?;
		Ok(())
	}

	/// Endpoint accepting `POST` feedback submissions.
	pub fn submit_url(&self) -> String {
		format!("{}/submit_feedback", self.api_base)
	}

	/// Engine.IO v4 websocket endpoint derived from the stream base.
	pub fn stream_url(&self) -> Result<String, PulseError> {
		let ws_base = if let Some(rest) = self.stream_base.strip_prefix("https://") {
			format!("wss://{rest}")
		} else if let Some(rest) = self.stream_base.strip_prefix("http://") {
			format!("ws://{rest}")
		} else {
			return Err(PulseError::Config(format!(
				"stream base {} has no http(s) scheme",
				self.stream_base
			)));
		};
		Ok(format!("{ws_base}/socket.io/?EIO=4&transport=websocket"))
	}
}

fn normalize_base(raw: &str) -> String {
	raw.trim().trim_end_matches('/').to_string()
}

fn parse_flag(raw: &str) -> bool {
	matches!(
		raw.trim().to_ascii_lowercase().as_str(),
		"1" | "true" | "yes" | "on"
	)
}

/// Validates that a base URL is non-blank and carries an http(s) scheme.
fn validate_base(name: &str, base: &str) -> Result<(), PulseError> {
	if base.trim().is_empty() {
		return Err(PulseError::Config(format!("{name} cannot be empty")));
	}
	if !(base.starts_with("http://") || base.starts_with("https://")) {
		return Err(PulseError::Config(format!(
			"{name} must start with http:// or https://, got {base}"
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_point_at_local_service() {
		let settings = Settings::from_values(None, None, None);
		assert_eq!(settings, Settings::default());
		assert_eq!(settings.submit_url(), "http://localhost:5000/submit_feedback");
		assert!(!settings.offline);
		assert!(settings.validate().is_ok());
	}

	#[test]
	fn test_trailing_slash_is_trimmed() {
		let settings = Settings::from_values(Some("https://pulse.example.org/"), None, None);
		assert_eq!(
			settings.submit_url(),
			"https://pulse.example.org/submit_feedback"
		);
	}

	#[test]
	fn test_offline_flag_values() {
		for raw in ["1", "true", "YES", " on "] {
			assert!(Settings::from_values(None, None, Some(raw)).offline, "{raw}");
		}
		for raw in ["0", "false", "", "nope"] {
			assert!(!Settings::from_values(None, None, Some(raw)).offline, "{raw}");
		}
	}

	#[test]
	fn test_validate_blank_base_fails() {
		let settings = Settings::from_values(Some("   "), None, None);
		let err = settings.validate().unwrap_err();
		assert!(err.to_string().contains("api base cannot be empty"));
	}

	#[test]
	fn test_validate_missing_scheme_fails() {
		let settings = Settings::from_values(None, Some("localhost:5000"), None);
		let err = settings.validate().unwrap_err();
		assert!(err.to_string().contains("stream base must start with"));
	}

	#[test]
	fn test_stream_url_swaps_scheme() {
		let plain = Settings::default();
		assert_eq!(
			plain.stream_url().unwrap(),
			"ws://localhost:5000/socket.io/?EIO=4&transport=websocket"
		);

		let secure = Settings::from_values(None, Some("https://pulse.example.org"), None);
		assert_eq!(
			secure.stream_url().unwrap(),
			"wss://pulse.example.org/socket.io/?EIO=4&transport=websocket"
		);
	}
}
