//! Engine.IO v4 / Socket.IO v5 text framing for the `analysis_update` feed.
//!
//! Only the websocket transport and the default namespace are handled;
//! binary packets are ignored.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::dashboard::TrendPoint;
use crate::error::PulseError;

/// Event name the analysis service emits.
pub const ANALYSIS_UPDATE: &str = "analysis_update";

/// Sent after the Engine.IO handshake to join the default namespace.
const CONNECT_DEFAULT_NAMESPACE: &str = "40";

/// What the socket should do after one incoming frame.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamAction {
	/// Write this frame back to the server.
	Reply(String),
	/// Joined the default namespace.
	Connected,
	/// Server closed the session or left the namespace.
	Disconnected,
	/// Server refused the namespace connection.
	Rejected(String),
	/// A decoded `analysis_update` event.
	Update(AnalysisUpdate),
	/// Anything this client has no use for.
	Ignore,
}

/// One entry of `weekly_trend_data`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawTrendPoint {
	/// Axis label.
	pub week: String,
	/// Positive share in percent.
	pub positive: f64,
}

/// Payload of an `analysis_update` event.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnalysisUpdate {
	/// Trending topics, most discussed first.
	#[serde(default)]
	pub topics: Vec<String>,
	/// Replacement for the whole weekly chart.
	#[serde(default)]
	pub weekly_trend_data: Vec<RawTrendPoint>,
}

impl AnalysisUpdate {
	/// Weekly trend in chart form.
	///
	/// The feed only carries the positive share, so neutral is filled as the
	/// remainder and negative is left at zero.
	pub fn trend(&self) -> Vec<TrendPoint> {
		self.weekly_trend_data
			.iter()
			.map(|p| TrendPoint {
				week: p.week.clone(),
				positive: p.positive,
				neutral: 100.0 - p.positive,
				negative: 0.0,
			})
			.collect()
	}
}

/// Interprets one text frame received on the websocket.
pub fn handle_frame(frame: &str) -> Result<StreamAction, PulseError> {
	let mut chars = frame.chars();
	let kind = chars
		.next()
		.ok_or_else(|| PulseError::MalformedFrame("empty frame".into()))?;
	let rest = chars.as_str();

	match kind {
		// open handshake
		'0' => Ok(StreamAction::Reply(CONNECT_DEFAULT_NAMESPACE.into())),
		'1' => Ok(StreamAction::Disconnected),
		// heartbeat: answer ping with pong carrying the same data
		'2' => Ok(StreamAction::Reply(format!("3{rest}"))),
		'3' | '5' | '6' => Ok(StreamAction::Ignore),
		'4' => handle_socket_packet(rest),
		other => Err(PulseError::MalformedFrame(format!(
			"unknown engine packet type {other:?}"
		))),
	}
}

fn handle_socket_packet(packet: &str) -> Result<StreamAction, PulseError> {
	let mut chars = packet.chars();
	let kind = chars
		.next()
		.ok_or_else(|| PulseError::MalformedFrame("empty socket packet".into()))?;
	let body = chars.as_str();

	match kind {
		'0' => Ok(StreamAction::Connected),
		'1' => Ok(StreamAction::Disconnected),
		'2' => handle_event(body),
		'4' => Ok(StreamAction::Rejected(body.to_string())),
		_ => Ok(StreamAction::Ignore),
	}
}

fn handle_event(body: &str) -> Result<StreamAction, PulseError> {
	let (name, payload) = parse_event(body)?;
	if name != ANALYSIS_UPDATE {
		debug!("Ignoring stream event {name}");
		return Ok(StreamAction::Ignore);
	}
	let update: AnalysisUpdate = serde_json::from_value(payload)
		.map_err(|e| PulseError::MalformedFrame(format!("{ANALYSIS_UPDATE}: {e}")))?;
	Ok(StreamAction::Update(update))
}

/// Splits `[/nsp,][ack-id]["name", payload]` into name and payload.
fn parse_event(body: &str) -> Result<(String, Value), PulseError> {
	let body = match body.strip_prefix('/') {
		Some(namespaced) => namespaced
			.split_once(',')
			.map(|(_, rest)| rest)
			.ok_or_else(|| PulseError::MalformedFrame("unterminated namespace".into()))?,
		None => body,
	};
	let body = body.trim_start_matches(|c: char| c.is_ascii_digit());

	let args: Vec<Value> =
		serde_json::from_str(body).map_err(|e| PulseError::MalformedFrame(e.to_string()))?;
	let mut args = args.into_iter();
	let name = match args.next() {
		Some(Value::String(name)) => name,
		other => {
			warn!("Event packet without a name: {other:?}");
			return Err(PulseError::MalformedFrame("event name missing".into()));
		}
	};
	Ok((name, args.next().unwrap_or(Value::Null)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_open_handshake_joins_default_namespace() {
		let frame = r#"0{"sid":"lv_VI97HAXpY6yYWAAAC","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#;
		assert_eq!(handle_frame(frame).unwrap(), StreamAction::Reply("40".into()));
	}

	#[test]
	fn test_ping_is_answered_with_pong() {
		assert_eq!(handle_frame("2").unwrap(), StreamAction::Reply("3".into()));
		assert_eq!(
			handle_frame("2probe").unwrap(),
			StreamAction::Reply("3probe".into())
		);
	}

	#[test]
	fn test_connect_and_disconnect_packets() {
		assert_eq!(
			handle_frame(r#"40{"sid":"abc"}"#).unwrap(),
			StreamAction::Connected
		);
		assert_eq!(handle_frame("41").unwrap(), StreamAction::Disconnected);
		assert_eq!(handle_frame("1").unwrap(), StreamAction::Disconnected);
	}

	#[test]
	fn test_connect_error_is_reported() {
		let action = handle_frame(r#"44{"message":"Not authorized"}"#).unwrap();
		assert_eq!(
			action,
			StreamAction::Rejected(r#"{"message":"Not authorized"}"#.into())
		);
	}

	#[test]
	fn test_analysis_update_decodes_and_fills_trend() {
		let frame = r#"42["analysis_update",{"topics":["rail fares","clinics"],"weekly_trend_data":[{"week":"Mon","positive":45},{"week":"Tue","positive":52.5}]}]"#;
		let StreamAction::Update(update) = handle_frame(frame).unwrap() else {
			panic!("expected update");
		};
		assert_eq!(update.topics, vec!["rail fares", "clinics"]);

		let trend = update.trend();
		assert_eq!(trend.len(), 2);
		assert_eq!(trend[0].week, "Mon");
		assert_eq!(trend[0].positive, 45.0);
		assert_eq!(trend[0].neutral, 55.0);
		assert_eq!(trend[0].negative, 0.0);
		assert_eq!(trend[1].neutral, 47.5);
	}

	#[test]
	fn test_namespace_and_ack_id_are_skipped() {
		let frame = r#"42/admin,17["analysis_update",{"topics":[]}]"#;
		let StreamAction::Update(update) = handle_frame(frame).unwrap() else {
			panic!("expected update");
		};
		assert!(update.topics.is_empty());
		assert!(update.trend().is_empty());
	}

	#[test]
	fn test_other_events_are_ignored() {
		assert_eq!(
			handle_frame(r#"42["chat",{"text":"hi"}]"#).unwrap(),
			StreamAction::Ignore
		);
		assert_eq!(handle_frame("6").unwrap(), StreamAction::Ignore);
	}

	#[test]
	fn test_malformed_frames_error() {
		assert!(handle_frame("").is_err());
		assert!(handle_frame("9").is_err());
		assert!(handle_frame("42not json").is_err());
		assert!(handle_frame("42[1,2]").is_err());
		assert!(handle_frame(r#"42["analysis_update",{"topics":"oops"}]"#).is_err());
	}
}
