use super::types::KeywordNode;
use crate::sentiment::SentimentLabel::{Negative, Neutral, Positive};

/// Keywords extracted from recent feedback.
pub fn keyword_constellation() -> Vec<KeywordNode> {
	vec![
		KeywordNode::new(
			"healthcare",
			48,
			Positive,
			(0.2, 0.3),
			&["budget", "development", "jobs"],
			&[
				"Healthcare reforms are much needed for rural areas",
				"The healthcare budget allocation seems reasonable",
				"Healthcare infrastructure development is progressing well",
			],
		),
		KeywordNode::new(
			"budget",
			42,
			Negative,
			(0.6, 0.2),
			&["healthcare", "taxes", "corruption"],
			&[
				"Budget allocation seems unfair across ministries",
				"Healthcare budget should be increased significantly",
				"Tax burden vs budget transparency is concerning",
			],
		),
		KeywordNode::new(
			"education",
			38,
			Positive,
			(0.8, 0.7),
			&["development", "jobs", "infrastructure"],
			&[
				"Education policy changes are very promising",
				"Digital education infrastructure is improving",
				"Job creation through education reforms",
			],
		),
		KeywordNode::new(
			"transparency",
			35,
			Neutral,
			(0.4, 0.8),
			&["corruption", "bureaucracy"],
			&[
				"Government transparency has improved slightly",
				"More transparency needed in policy making",
				"Bureaucratic transparency is still lacking",
			],
		),
		KeywordNode::new(
			"corruption",
			32,
			Negative,
			(0.7, 0.4),
			&["budget", "transparency", "bureaucracy"],
			&[
				"Corruption in budget allocation is concerning",
				"Need more transparency to fight corruption",
				"Bureaucratic corruption affects policy implementation",
			],
		),
		KeywordNode::new(
			"development",
			30,
			Positive,
			(0.3, 0.6),
			&["healthcare", "education", "infrastructure"],
			&[
				"Rural development programs showing good results",
				"Healthcare development initiatives are promising",
				"Educational development is progressing steadily",
			],
		),
		KeywordNode::new(
			"taxes",
			28,
			Negative,
			(0.5, 0.1),
			&["budget", "bureaucracy"],
			&[
				"Tax policies are burdensome for middle class",
				"Budget allocation vs tax collection transparency",
				"Bureaucratic tax processes need simplification",
			],
		),
		KeywordNode::new(
			"infrastructure",
			26,
			Neutral,
			(0.9, 0.5),
			&["education", "development", "jobs"],
			&[
				"Infrastructure development is slow but steady",
				"Educational infrastructure needs more focus",
				"Infrastructure projects creating employment",
			],
		),
		KeywordNode::new(
			"jobs",
			24,
			Positive,
			(0.1, 0.7),
			&["healthcare", "education", "infrastructure"],
			&[
				"Job creation in healthcare sector is positive",
				"Education reforms leading to better job prospects",
				"Infrastructure projects generating employment",
			],
		),
		KeywordNode::new(
			"bureaucracy",
			22,
			Negative,
			(0.6, 0.6),
			&["corruption", "transparency", "taxes"],
			&[
				"Bureaucratic red tape is still a major issue",
				"Corruption within bureaucracy needs addressing",
				"Tax-related bureaucracy is overly complex",
			],
		),
	]
}
