use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::PulseError;
use crate::sentiment::{SentimentLabel, SentimentResult};

const REMOTE_CONFIDENCE: f64 = 90.0;
const DEFAULT_NOTE: &str = "Thanks for the feedback!";

#[derive(Debug, Serialize)]
struct FeedbackRequest<'a> {
	text: &'a str,
	department: &'a str,
	year: &'static str,
}

#[derive(Debug, Deserialize)]
struct RawReply {
	sentiment: Option<String>,
	message: Option<String>,
	encouragement: Option<String>,
}

/// Turns the service's reply body into a result, rejecting anything that
/// does not carry a known label and a non-blank message.
pub fn parse_reply(body: &str) -> Result<SentimentResult, PulseError> {
	let raw: RawReply =
		serde_json::from_str(body).map_err(|e| PulseError::MalformedReply(e.to_string()))?;

	let label: SentimentLabel = raw
		.sentiment
		.ok_or_else(|| PulseError::MalformedReply("missing sentiment".into()))?
		.parse()?;
	let message = raw
		.message
		.filter(|m| !m.trim().is_empty())
		.ok_or_else(|| PulseError::MalformedReply("missing message".into()))?;
	let note = raw
		.encouragement
		.filter(|e| !e.trim().is_empty())
		.unwrap_or_else(|| DEFAULT_NOTE.into());

	Ok(SentimentResult {
		label,
		confidence: REMOTE_CONFIDENCE,
		message,
		note,
	})
}

/// HTTP client for `POST /submit_feedback`.
#[derive(Clone, Debug)]
pub struct FeedbackClient {
	http: reqwest::Client,
	submit_url: String,
}

impl FeedbackClient {
	/// Client posting to the service named in `settings`.
	pub fn new(settings: &Settings) -> Self {
		Self {
			http: reqwest::Client::new(),
			submit_url: settings.submit_url(),
		}
	}

	/// Full submission endpoint.
	pub fn submit_url(&self) -> &str {
		&self.submit_url
	}

	/// Sends one submission. `ministry` is an empty string when none was chosen.
	pub async fn submit(&self, text: &str, ministry: &str) -> Result<SentimentResult, PulseError> {
		let request = FeedbackRequest {
			text,
			department: ministry,
			year: "NA",
		};
		debug!("Submitting feedback to {}", self.submit_url);

		let response = self.http.post(&self.submit_url).json(&request).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(PulseError::Status(status.as_u16()));
		}

		let body = response.text().await?;
		parse_reply(&body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_request_body_shape() {
		let body = serde_json::to_value(FeedbackRequest {
			text: "Trains are late",
			department: "",
			year: "NA",
		})
		.unwrap();
		assert_eq!(
			body,
			serde_json::json!({ "text": "Trains are late", "department": "", "year": "NA" })
		);
	}

	#[test]
	fn test_reply_with_encouragement() {
		let result = parse_reply(
			r#"{"sentiment":"negative","message":"Recorded.","encouragement":"Keep going!"}"#,
		)
		.unwrap();
		assert_eq!(result.label, SentimentLabel::Negative);
		assert_eq!(result.confidence, 90.0);
		assert_eq!(result.message, "Recorded.");
		assert_eq!(result.note, "Keep going!");
	}

	#[test]
	fn test_reply_without_encouragement_uses_default_note() {
		let result = parse_reply(r#"{"sentiment":"positive","message":"Thanks"}"#).unwrap();
		assert_eq!(result.note, "Thanks for the feedback!");
	}

	#[test]
	fn test_unknown_label_is_malformed() {
		let err = parse_reply(r#"{"sentiment":"ecstatic","message":"hi"}"#).unwrap_err();
		assert!(matches!(err, PulseError::MalformedReply(_)));
		assert!(err.to_string().contains("ecstatic"));
	}

	#[test]
	fn test_missing_fields_are_malformed() {
		for body in [
			r#"{"message":"hi"}"#,
			r#"{"sentiment":"neutral"}"#,
			r#"{"sentiment":"neutral","message":"  "}"#,
			r#"{"error":"Please enter your feedback before submitting."}"#,
		] {
			assert!(
				matches!(parse_reply(body), Err(PulseError::MalformedReply(_))),
				"{body}"
			);
		}
	}

	#[test]
	fn test_non_json_is_malformed() {
		assert!(matches!(
			parse_reply("<html>502</html>"),
			Err(PulseError::MalformedReply(_))
		));
	}

	#[test]
	fn test_client_targets_configured_endpoint() {
		let client = FeedbackClient::new(&Settings::default());
		assert_eq!(client.submit_url(), "http://localhost:5000/submit_feedback");
	}
}
