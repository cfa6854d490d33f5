//! Dashboard datasets and the figures derived from them.

use crate::sentiment::SentimentLabel;

/// Negative share (percent) above which the crisis banner shows.
pub const CRISIS_THRESHOLD: f64 = 35.0;

/// Leaderboard percentage above which a ministry earns the trophy badge.
pub const LEADER_THRESHOLD: u32 = 60;

/// Submissions carrying one label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentimentSlice {
	/// Label counted.
	pub label: SentimentLabel,
	/// Number of submissions.
	pub value: u32,
}

impl SentimentSlice {
	/// Capitalised label for legends.
	pub fn name(&self) -> &'static str {
		match self.label {
			SentimentLabel::Positive => "Positive",
			SentimentLabel::Neutral => "Neutral",
			SentimentLabel::Negative => "Negative",
		}
	}
}

/// One day of the weekly mood chart, values in percent.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
	/// Axis label.
	pub week: String,
	/// Positive share.
	pub positive: f64,
	/// Neutral share.
	pub neutral: f64,
	/// Negative share.
	pub negative: f64,
}

/// Leaderboard row: positive feedback received by one ministry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinistryScore {
	/// Ministry name.
	pub name: &'static str,
	/// Positive submissions.
	pub positive: u32,
	/// All submissions.
	pub total: u32,
	/// `positive / total`, rounded, in percent.
	pub percentage: u32,
}

impl MinistryScore {
	/// Earns the trophy badge.
	pub fn is_leading(&self) -> bool {
		self.percentage > LEADER_THRESHOLD
	}
}

/// How urgently a flagged comment needs a moderator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	/// Review when convenient.
	Medium,
	/// Review first.
	High,
}

impl Severity {
	/// Lower-case name used in badges and the report.
	pub fn as_str(self) -> &'static str {
		match self {
			Severity::Medium => "medium",
			Severity::High => "high",
		}
	}
}

/// Comment held for moderation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlaggedComment {
	/// Stable id used for deletion.
	pub id: u32,
	/// Comment body.
	pub text: String,
	/// Ministry the comment was addressed to.
	pub ministry: String,
	/// Moderation priority.
	pub severity: Severity,
}

/// Overall sentiment distribution.
pub fn sentiment_distribution() -> Vec<SentimentSlice> {
	vec![
		SentimentSlice {
			label: SentimentLabel::Positive,
			value: 340,
		},
		SentimentSlice {
			label: SentimentLabel::Neutral,
			value: 280,
		},
		SentimentSlice {
			label: SentimentLabel::Negative,
			value: 380,
		},
	]
}

/// Mock Mon..Sun mood, replaced by the first stream update.
pub fn default_weekly_trend() -> Vec<TrendPoint> {
	[
		("Mon", 45.0, 30.0, 55.0),
		("Tue", 52.0, 28.0, 48.0),
		("Wed", 38.0, 35.0, 62.0),
		("Thu", 41.0, 32.0, 58.0),
		("Fri", 48.0, 29.0, 51.0),
		("Sat", 43.0, 31.0, 56.0),
		("Sun", 39.0, 33.0, 60.0),
	]
	.into_iter()
	.map(|(week, positive, neutral, negative)| TrendPoint {
		week: week.into(),
		positive,
		neutral,
		negative,
	})
	.collect()
}

/// Mock leaderboard, best first.
pub fn ministry_leaderboard() -> Vec<MinistryScore> {
	[
		("Health", 85, 120, 71),
		("Education", 78, 110, 71),
		("Environment", 92, 135, 68),
		("Railways", 45, 85, 53),
		("Defence", 34, 75, 45),
		("Finance", 28, 95, 29),
	]
	.into_iter()
	.map(|(name, positive, total, percentage)| MinistryScore {
		name,
		positive,
		total,
		percentage,
	})
	.collect()
}

/// Mock moderation queue.
pub fn flagged_comments() -> Vec<FlaggedComment> {
	[
		(
			1,
			"This policy is absolutely ridiculous and shows how out of touch the government is",
			"Finance",
			Severity::High,
		),
		(
			2,
			"Complete waste of taxpayer money, typical government incompetence",
			"Railways",
			Severity::Medium,
		),
		(
			3,
			"This is just another way to control citizens, wake up people!",
			"Home Affairs",
			Severity::High,
		),
	]
	.into_iter()
	.map(|(id, text, ministry, severity)| FlaggedComment {
		id,
		text: text.into(),
		ministry: ministry.into(),
		severity,
	})
	.collect()
}

/// Sum of all slices.
pub fn total_submissions(slices: &[SentimentSlice]) -> u32 {
	slices.iter().map(|s| s.value).sum()
}

/// Submissions carrying `label`; 0 when absent.
pub fn count_for(slices: &[SentimentSlice], label: SentimentLabel) -> u32 {
	slices
		.iter()
		.filter(|s| s.label == label)
		.map(|s| s.value)
		.sum()
}

/// Negative share of all submissions in percent; 0 when there are none.
pub fn negative_share(slices: &[SentimentSlice]) -> f64 {
	let total = total_submissions(slices);
	if total == 0 {
		return 0.0;
	}
	count_for(slices, SentimentLabel::Negative) as f64 * 100.0 / total as f64
}

/// True when the negative share exceeds [`CRISIS_THRESHOLD`].
pub fn is_policy_crisis(slices: &[SentimentSlice]) -> bool {
	negative_share(slices) > CRISIS_THRESHOLD
}

/// Drops the comment with `id`; unknown ids leave the list untouched.
pub fn without_comment(comments: &[FlaggedComment], id: u32) -> Vec<FlaggedComment> {
	comments.iter().filter(|c| c.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mock_distribution_is_a_crisis() {
		let slices = sentiment_distribution();
		assert_eq!(total_submissions(&slices), 1000);
		assert_eq!(negative_share(&slices), 38.0);
		assert!(is_policy_crisis(&slices));
	}

	#[test]
	fn test_threshold_is_strict() {
		let slices = [
			SentimentSlice {
				label: SentimentLabel::Negative,
				value: 35,
			},
			SentimentSlice {
				label: SentimentLabel::Positive,
				value: 65,
			},
		];
		assert_eq!(negative_share(&slices), 35.0);
		assert!(!is_policy_crisis(&slices));
	}

	#[test]
	fn test_empty_distribution_has_no_share() {
		assert_eq!(negative_share(&[]), 0.0);
		assert!(!is_policy_crisis(&[]));
	}

	#[test]
	fn test_leaderboard_badges() {
		let leaders: Vec<_> = ministry_leaderboard()
			.into_iter()
			.filter(MinistryScore::is_leading)
			.map(|m| m.name)
			.collect();
		assert_eq!(leaders, vec!["Health", "Education", "Environment"]);
	}

	#[test]
	fn test_default_trend_covers_the_week() {
		let trend = default_weekly_trend();
		assert_eq!(trend.len(), 7);
		assert_eq!(trend[0].week, "Mon");
		assert_eq!(trend[6].week, "Sun");
	}

	#[test]
	fn test_without_comment() {
		let comments = flagged_comments();
		let remaining = without_comment(&comments, 2);
		assert_eq!(remaining.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
		assert_eq!(without_comment(&comments, 99), comments);
	}
}
