//! CSV export of the dashboard's analytics.

use std::fmt::Write;

use super::data::{FlaggedComment, MinistryScore, SentimentSlice, TrendPoint};

/// Download name of the exported report.
pub const REPORT_FILE_NAME: &str = "pulsegov-report.csv";

/// Everything the Reports tab exports.
pub struct Report<'a> {
	/// Sentiment distribution.
	pub sentiment: &'a [SentimentSlice],
	/// Weekly trend as currently charted.
	pub trend: &'a [TrendPoint],
	/// Ministry leaderboard.
	pub ministries: &'a [MinistryScore],
	/// Comments still in the moderation queue.
	pub flagged: &'a [FlaggedComment],
}

impl Report<'_> {
	/// Renders the report as CSV, one blank-line-separated section per table.
	pub fn to_csv(&self) -> String {
		let mut out = String::new();

		section(&mut out, "sentiment", &["label", "count"]);
		for slice in self.sentiment {
			row(&mut out, &[slice.name(), &slice.value.to_string()]);
		}

		out.push('\n');
		section(&mut out, "weekly trend", &["week", "positive", "neutral", "negative"]);
		for point in self.trend {
			row(
				&mut out,
				&[
					&point.week,
					&point.positive.to_string(),
					&point.neutral.to_string(),
					&point.negative.to_string(),
				],
			);
		}

		out.push('\n');
		section(
			&mut out,
			"ministry leaderboard",
			&["ministry", "positive", "total", "percentage"],
		);
		for m in self.ministries {
			row(
				&mut out,
				&[
					m.name,
					&m.positive.to_string(),
					&m.total.to_string(),
					&m.percentage.to_string(),
				],
			);
		}

		out.push('\n');
		section(&mut out, "flagged comments", &["id", "ministry", "severity", "text"]);
		for c in self.flagged {
			row(
				&mut out,
				&[&c.id.to_string(), &c.ministry, c.severity.as_str(), &c.text],
			);
		}

		out
	}
}

fn section(out: &mut String, title: &str, header: &[&str]) {
	let _ = writeln!(out, "# {title}");
	row(out, header);
}

fn row(out: &mut String, fields: &[&str]) {
	let line = fields
		.iter()
		.map(|f| escape(f))
		.collect::<Vec<_>>()
		.join(",");
	out.push_str(&line);
	out.push('\n');
}

fn escape(field: &str) -> String {
	if field.contains([',', '"', '\n', '\r']) {
		format!("\"{}\"", field.replace('"', "\"\""))
	} else {
		field.to_string()
	}
}
