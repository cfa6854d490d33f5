use std::collections::HashMap;

use super::edges::{dedup_edges, derive_edges};
use super::types::KeywordNode;

/// Extra pointer slack around a star, in pixels.
pub const HIT_SLOP: f64 = 4.0;

const IDLE_EDGE_ALPHA: f64 = 0.2;
const HIGHLIGHT_EDGE_ALPHA: f64 = 0.8;
const IDLE_EDGE_WIDTH: f64 = 1.5;
const HIGHLIGHT_EDGE_WIDTH: f64 = 3.0;

/// Star diameter in pixels for a mention count.
pub fn star_size(frequency: u32) -> f64 {
	(frequency as f64 / 2.0).clamp(8.0, 24.0)
}

/// An edge with both endpoints resolved to node indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedEdge {
	pub from: usize,
	pub to: usize,
	pub strength: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
}

pub struct ConstellationState {
	pub nodes: Vec<KeywordNode>,
	pub edges: Vec<ResolvedEdge>,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub time: f64,
}

impl ConstellationState {
	/// With `merge_mutual`, `A→B` and `B→A` are drawn as one line.
	pub fn new(nodes: Vec<KeywordNode>, merge_mutual: bool, width: f64, height: f64) -> Self {
		let index: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.rev()
			.map(|(i, n)| (n.text.as_str(), i))
			.collect();
		let mut edges = derive_edges(&nodes);
		if merge_mutual {
			edges = dedup_edges(edges);
		}
		let edges = edges
			.into_iter()
			.filter_map(|e| {
				Some(ResolvedEdge {
					from: *index.get(e.from.as_str())?,
					to: *index.get(e.to.as_str())?,
					strength: e.strength,
				})
			})
			.collect();

		Self {
			nodes,
			edges,
			hover: HoverState::default(),
			width,
			height,
			time: 0.0,
		}
	}

	/// Pixel position of node `idx` on the current canvas.
	pub fn project(&self, idx: usize) -> (f64, f64) {
		let node = &self.nodes[idx];
		(node.x * self.width, node.y * self.height)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let mut found = None;
		for (idx, node) in self.nodes.iter().enumerate() {
			let (x, y) = self.project(idx);
			let (dx, dy) = (x - sx, y - sy);
			// later stars paint on top, so they win overlaps
			if (dx * dx + dy * dy).sqrt() <= star_size(node.frequency) / 2.0 + HIT_SLOP {
				found = Some(idx);
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		if node.is_none() {
			self.hover.prev_node = self.hover.node.take();
		} else {
			self.hover.prev_node = None;
		}
		self.hover.node = node;
	}

	pub fn hovered_text(&self) -> Option<&str> {
		self.hover.node.map(|idx| self.nodes[idx].text.as_str())
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	/// Alpha and line width for an edge, easing toward the highlighted look
	/// when either endpoint is hovered.
	pub fn edge_style(&self, edge: &ResolvedEdge) -> (f64, f64) {
		let t = if self.is_hovered(edge.from) || self.is_hovered(edge.to) {
			self.hover.highlight_t
		} else {
			0.0
		};
		(
			IDLE_EDGE_ALPHA + (HIGHLIGHT_EDGE_ALPHA - IDLE_EDGE_ALPHA) * t,
			edge.strength * (IDLE_EDGE_WIDTH + (HIGHLIGHT_EDGE_WIDTH - IDLE_EDGE_WIDTH) * t),
		)
	}

	pub fn tick(&mut self, dt: f64) {
		self.time += dt;

		let (target, speed) = if self.hover.node.is_some() {
			(1.0, 10.0)
		} else {
			(0.0, 6.0)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);

		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_node = None;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
