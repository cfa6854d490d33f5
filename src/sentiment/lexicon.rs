use super::SentimentLabel;

/// Fragments that mark a token as approving.
pub const POSITIVE_WORDS: &[&str] = &[
	"good", "great", "excellent", "support", "agree", "wonderful", "amazing", "perfect",
];

/// Fragments that mark a token as disapproving.
pub const NEGATIVE_WORDS: &[&str] = &[
	"bad", "terrible", "wrong", "disagree", "oppose", "awful", "hate", "stupid",
];

pub(super) struct Phrasing {
	pub message: &'static str,
	pub note: &'static str,
}

pub(super) fn phrasing(label: SentimentLabel) -> Phrasing {
	match label {
		SentimentLabel::Positive => Phrasing {
			message: "Positive vibes detected! Democracy is working ✨",
			note: "Big policy energy detected.",
		},
		SentimentLabel::Negative => Phrasing {
			message: "Negative. Democracy is spicy 🌶️",
			note: "Policy is listening.",
		},
		SentimentLabel::Neutral => Phrasing {
			message: "Neutral territory. The democracy Switzerland 🇨🇭",
			note: "Every voice counts. Yes, even yours.",
		},
	}
}
