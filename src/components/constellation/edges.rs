use std::collections::{HashMap, HashSet};

use super::types::{KeywordEdge, KeywordNode};

/// Emits one edge per resolvable `related` reference, in node order.
///
/// References to unknown keywords are skipped. A pair that names each other
/// yields two edges of equal strength.
pub fn derive_edges(nodes: &[KeywordNode]) -> Vec<KeywordEdge> {
	let mut by_text: HashMap<&str, &KeywordNode> = HashMap::with_capacity(nodes.len());
	for node in nodes {
		by_text.entry(node.text.as_str()).or_insert(node);
	}

	let mut edges = Vec::new();
	for node in nodes {
		for related in &node.related {
			let Some(target) = by_text.get(related.as_str()) else {
				continue;
			};
			if let Some(strength) = strength(node.frequency, target.frequency) {
				edges.push(KeywordEdge {
					from: node.text.clone(),
					to: target.text.clone(),
					strength,
				});
			}
		}
	}
	edges
}

/// Collapses `A→B`/`B→A` into the first one emitted.
pub fn dedup_edges(edges: Vec<KeywordEdge>) -> Vec<KeywordEdge> {
	let mut seen = HashSet::new();
	edges
		.into_iter()
		.filter(|e| {
			let key = if e.from <= e.to {
				(e.from.clone(), e.to.clone())
			} else {
				(e.to.clone(), e.from.clone())
			};
			seen.insert(key)
		})
		.collect()
}

/// Ratio of the smaller frequency to the larger.
///
/// Two silent keywords are treated as equally weighted; a silent keyword next
/// to a mentioned one has no edge.
fn strength(a: u32, b: u32) -> Option<f64> {
	match (a.min(b), a.max(b)) {
		(_, 0) => Some(1.0),
		(0, _) => None,
		(lo, hi) => Some(lo as f64 / hi as f64),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::constellation::keywords::keyword_constellation;
	use crate::sentiment::SentimentLabel;

	fn node(text: &str, frequency: u32, related: &[&str]) -> KeywordNode {
		KeywordNode::new(text, frequency, SentimentLabel::Neutral, (0.5, 0.5), related, &[])
	}

	#[test]
	fn test_strength_is_min_over_max() {
		let edges = derive_edges(&[node("a", 48, &["b"]), node("b", 24, &[])]);
		assert_eq!(
			edges,
			vec![KeywordEdge {
				from: "a".into(),
				to: "b".into(),
				strength: 0.5,
			}]
		);
	}

	#[test]
	fn test_mutual_references_yield_two_edges() {
		let edges = derive_edges(&[node("a", 10, &["b"]), node("b", 40, &["a"])]);
		assert_eq!(edges.len(), 2);
		assert_eq!((edges[0].from.as_str(), edges[0].to.as_str()), ("a", "b"));
		assert_eq!((edges[1].from.as_str(), edges[1].to.as_str()), ("b", "a"));
		assert_eq!(edges[0].strength, edges[1].strength);
		assert_eq!(edges[0].strength, 0.25);
	}

	#[test]
	fn test_unknown_reference_is_dropped() {
		let edges = derive_edges(&[node("a", 10, &["ghost", "b"]), node("b", 10, &[])]);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].to, "b");
	}

	#[test]
	fn test_zero_frequencies() {
		let edges = derive_edges(&[
			node("quiet", 0, &["silent", "loud"]),
			node("silent", 0, &[]),
			node("loud", 5, &[]),
		]);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].to, "silent");
		assert_eq!(edges[0].strength, 1.0);
	}

	#[test]
	fn test_self_reference_has_full_strength() {
		let edges = derive_edges(&[node("echo", 7, &["echo"])]);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].strength, 1.0);
	}

	#[test]
	fn test_dataset_edges() {
		let keywords = keyword_constellation();
		let edges = derive_edges(&keywords);
		assert_eq!(edges.len(), 28);
		assert_eq!(edges[0].from, "healthcare");
		assert_eq!(edges[0].to, "budget");
		assert_eq!(edges[0].strength, 42.0 / 48.0);
		assert!(edges.iter().all(|e| e.strength > 0.0 && e.strength <= 1.0));

		let unique = dedup_edges(edges);
		assert_eq!(unique.len(), 14);
		assert_eq!(unique[0].from, "healthcare");
	}

	#[test]
	fn test_dedup_keeps_first_direction() {
		let edges = derive_edges(&[node("b", 10, &["a"]), node("a", 10, &["b"])]);
		let unique = dedup_edges(edges);
		assert_eq!(unique.len(), 1);
		assert_eq!(unique[0].from, "b");
	}

	mod prop {
		use super::*;
		use proptest::prelude::*;

		fn arb_nodes() -> impl Strategy<Value = Vec<KeywordNode>> {
			proptest::collection::vec(
				(0u32..100, proptest::collection::vec(0usize..12, 0..4)),
				0..8,
			)
			.prop_map(|specs| {
				specs
					.iter()
					.enumerate()
					.map(|(i, (freq, refs))| {
						let refs: Vec<String> = refs.iter().map(|r| format!("k{r}")).collect();
						let refs: Vec<&str> = refs.iter().map(String::as_str).collect();
						node(&format!("k{i}"), *freq, &refs)
					})
					.collect()
			})
		}

		proptest! {
			#[test]
			fn derivation_is_deterministic(nodes in arb_nodes()) {
				prop_assert_eq!(derive_edges(&nodes), derive_edges(&nodes));
			}

			#[test]
			fn edges_resolve_and_stay_in_range(nodes in arb_nodes()) {
				let texts: HashSet<&str> = nodes.iter().map(|n| n.text.as_str()).collect();
				let total_refs: usize = nodes.iter().map(|n| n.related.len()).sum();
				let edges = derive_edges(&nodes);
				prop_assert!(edges.len() <= total_refs);
				for e in &edges {
					prop_assert!(texts.contains(e.from.as_str()));
					prop_assert!(texts.contains(e.to.as_str()));
					prop_assert!(e.strength > 0.0 && e.strength <= 1.0);
				}
			}
		}
	}
}
