use std::fmt;
use std::str::FromStr;

use super::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS, phrasing};
use crate::error::PulseError;

const BASE_CONFIDENCE: f64 = 60.0;
const CONFIDENCE_PER_MATCH: f64 = 10.0;
const MAX_CONFIDENCE: f64 = 95.0;
const NEUTRAL_FLOOR: f64 = 70.0;
const NEUTRAL_SPAN: f64 = 20.0;
/// Largest confidence a neutral draw may produce; the range is `[70, 90)`.
const NEUTRAL_CEIL: f64 = f64::from_bits((NEUTRAL_FLOOR + NEUTRAL_SPAN).to_bits() - 1);

/// Polarity of a piece of feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
	/// More positive than negative matches.
	Positive,
	/// Tied matches, including none.
	Neutral,
	/// More negative than positive matches.
	Negative,
}

impl SentimentLabel {
	/// Wire name, as the feedback service spells it.
	pub fn as_str(self) -> &'static str {
		match self {
			SentimentLabel::Positive => "positive",
			SentimentLabel::Neutral => "neutral",
			SentimentLabel::Negative => "negative",
		}
	}

	/// Display colour shared by badges, chart slices and constellation stars.
	pub fn color(self) -> &'static str {
		match self {
			SentimentLabel::Positive => "#10B981",
			SentimentLabel::Neutral => "#6B7280",
			SentimentLabel::Negative => "#EF4444",
		}
	}
}

impl fmt::Display for SentimentLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SentimentLabel {
	type Err = PulseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"positive" => Ok(SentimentLabel::Positive),
			"neutral" => Ok(SentimentLabel::Neutral),
			"negative" => Ok(SentimentLabel::Negative),
			other => Err(PulseError::MalformedReply(format!(
				"unknown sentiment label {other:?}"
			))),
		}
	}
}

/// Outcome of classifying one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SentimentResult {
	/// Assigned label.
	pub label: SentimentLabel,
	/// Percentage in `0..=100`.
	pub confidence: f64,
	/// Headline shown on the result card.
	pub message: String,
	/// Sticker line under the card.
	pub note: String,
}

impl SentimentResult {
	pub(crate) fn new(label: SentimentLabel, confidence: f64) -> Self {
		let phrasing = phrasing(label);
		Self {
			label,
			confidence,
			message: phrasing.message.into(),
			note: phrasing.note.into(),
		}
	}
}

/// Counts tokens containing a positive and a negative fragment.
///
/// A token is counted at most once per list but may count toward both.
pub fn tally(text: &str) -> (usize, usize) {
	let lowered = text.to_lowercase();
	lowered
		.split_whitespace()
		.fold((0, 0), |(pos, neg), token| {
			let is_pos = POSITIVE_WORDS.iter().any(|w| token.contains(w));
			let is_neg = NEGATIVE_WORDS.iter().any(|w| token.contains(w));
			(pos + is_pos as usize, neg + is_neg as usize)
		})
}

/// Labels `text` with the lexicon heuristic.
///
/// Callers reject blank input before getting here.
pub fn classify(text: &str) -> SentimentResult {
	classify_with(text, unit_random)
}

/// Same as [`classify`], drawing the neutral confidence from `unit`, which must
/// return a value in `[0, 1)`.
pub fn classify_with(text: &str, unit: impl FnOnce() -> f64) -> SentimentResult {
	let (pos, neg) = tally(text);
	if pos > neg {
		SentimentResult::new(SentimentLabel::Positive, scaled_confidence(pos))
	} else if neg > pos {
		SentimentResult::new(SentimentLabel::Negative, scaled_confidence(neg))
	} else {
		let draw = unit().clamp(0.0, 1.0);
		let confidence = (NEUTRAL_FLOOR + draw * NEUTRAL_SPAN).min(NEUTRAL_CEIL);
		SentimentResult::new(SentimentLabel::Neutral, confidence)
	}
}

fn scaled_confidence(matches: usize) -> f64 {
	(BASE_CONFIDENCE + CONFIDENCE_PER_MATCH * matches as f64).min(MAX_CONFIDENCE)
}

#[cfg(target_arch = "wasm32")]
fn unit_random() -> f64 {
	js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn unit_random() -> f64 {
	rand::random::<f64>()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_healthcare_plan_is_positive_at_80() {
		let result = classify_with("The healthcare plan is great and wonderful", || 0.0);
		assert_eq!(result.label, SentimentLabel::Positive);
		assert_eq!(result.confidence, 80.0);
		assert_eq!(result.message, "Positive vibes detected! Democracy is working ✨");
		assert_eq!(result.note, "Big policy energy detected.");
	}

	#[test]
	fn test_substring_match_and_case_folding() {
		assert_eq!(tally("GREATEST Supporters"), (2, 0));
		assert_eq!(tally("badly wronged"), (0, 2));
	}

	#[test]
	fn test_disagree_counts_toward_both_lists() {
		assert_eq!(tally("disagree"), (1, 1));
		let result = classify_with("disagree", || 0.25);
		assert_eq!(result.label, SentimentLabel::Neutral);
		assert_eq!(result.confidence, 75.0);
	}

	#[test]
	fn test_token_counted_once_per_list() {
		// "goodgreat" holds two positive fragments but is one token
		assert_eq!(tally("goodgreat"), (1, 0));
	}

	#[test]
	fn test_negative_confidence_caps_at_95() {
		let result = classify_with("bad awful terrible wrong hate stupid", || 0.0);
		assert_eq!(result.label, SentimentLabel::Negative);
		assert_eq!(result.confidence, 95.0);
		assert_eq!(result.note, "Policy is listening.");
	}

	#[test]
	fn test_no_matches_is_neutral() {
		let result = classify_with("the budget was published on tuesday", || 0.5);
		assert_eq!(result.label, SentimentLabel::Neutral);
		assert_eq!(result.confidence, 80.0);
	}

	#[test]
	fn test_neutral_draw_stays_below_90() {
		let result = classify_with("nothing to see", || 1.0);
		assert!(result.confidence < 90.0);
		assert!(result.confidence >= 70.0);
	}

	#[test]
	fn test_largest_unit_draw_rounds_below_90() {
		// 70 + (1 - 2^-53) * 20 rounds to exactly 90 before bounding
		let result = classify_with("nothing here", || 1.0 - f64::EPSILON / 2.0);
		assert_eq!(result.label, SentimentLabel::Neutral);
		assert!(result.confidence < 90.0, "got {}", result.confidence);
		assert!(result.confidence > 89.99);
	}

	#[test]
	fn test_host_draw_is_a_unit_fraction() {
		for _ in 0..1000 {
			let draw = unit_random();
			assert!((0.0..1.0).contains(&draw), "draw {draw}");
		}
	}

	#[test]
	fn test_whitespace_variants_split_tokens() {
		assert_eq!(tally("good\tgreat\nperfect"), (3, 0));
	}

	#[test]
	fn test_label_round_trips_through_str() {
		for label in [
			SentimentLabel::Positive,
			SentimentLabel::Neutral,
			SentimentLabel::Negative,
		] {
			assert_eq!(label.as_str().parse::<SentimentLabel>().unwrap(), label);
		}
		assert!("Positive".parse::<SentimentLabel>().is_err());
	}

	#[test]
	fn test_classify_uses_ambient_draw_for_neutral() {
		let result = classify("plain statement");
		assert_eq!(result.label, SentimentLabel::Neutral);
		assert!((70.0..90.0).contains(&result.confidence));
	}

	mod prop {
		use super::*;
		use proptest::prelude::*;

		fn positive_text(n: usize) -> String {
			POSITIVE_WORDS
				.iter()
				.cycle()
				.take(n)
				.copied()
				.collect::<Vec<_>>()
				.join(" ")
		}

		proptest! {
			#[test]
			fn positive_only_text_is_positive_and_bounded(n in 1usize..30) {
				let result = classify_with(&positive_text(n), || 0.0);
				prop_assert_eq!(result.label, SentimentLabel::Positive);
				prop_assert!((60.0..=95.0).contains(&result.confidence));
			}

			#[test]
			fn confidence_non_decreasing_in_matches(n in 1usize..30) {
				let fewer = classify_with(&positive_text(n), || 0.0);
				let more = classify_with(&positive_text(n + 1), || 0.0);
				prop_assert!(more.confidence >= fewer.confidence);
			}

			#[test]
			fn balanced_text_is_neutral(n in 0usize..10, draw in 0.0f64..1.0) {
				let text = format!("{} {}", "good ".repeat(n), "bad ".repeat(n));
				let result = classify_with(&text, || draw);
				prop_assert_eq!(result.label, SentimentLabel::Neutral);
				prop_assert!(result.confidence >= 70.0 && result.confidence < 90.0);
			}
		}
	}
}
