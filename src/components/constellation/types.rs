use crate::sentiment::SentimentLabel;

/// A keyword star. `x`/`y` are fractions of the canvas size.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordNode {
	pub text: String,
	pub frequency: u32,
	pub sentiment: SentimentLabel,
	pub x: f64,
	pub y: f64,
	/// Texts of related keywords, in declaration order.
	pub related: Vec<String>,
	pub quotes: Vec<String>,
}

impl KeywordNode {
	pub fn new(
		text: &str,
		frequency: u32,
		sentiment: SentimentLabel,
		(x, y): (f64, f64),
		related: &[&str],
		quotes: &[&str],
	) -> Self {
		Self {
			text: text.into(),
			frequency,
			sentiment,
			x: x.clamp(0.0, 1.0),
			y: y.clamp(0.0, 1.0),
			related: related.iter().map(|s| s.to_string()).collect(),
			quotes: quotes.iter().map(|s| s.to_string()).collect(),
		}
	}
}

/// Directed relation between two keywords; `strength` is in `(0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordEdge {
	pub from: String,
	pub to: String,
	pub strength: f64,
}
