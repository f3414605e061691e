use std::collections::HashSet;

use crate::game::{Graph, NodeId};

pub const NODE_RADIUS: f64 = 18.0;

/// Maps the fixed board (generator layout) into the canvas, letterboxed.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<NodeId>,
	pub neighbors: HashSet<NodeId>,
	pub highlight_t: f64,
}

pub struct BoardState {
	pub transform: ViewTransform,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub pulse_time: f64,
	board_width: f64,
	board_height: f64,
}

impl BoardState {
	pub fn new(board_width: f64, board_height: f64, width: f64, height: f64) -> Self {
		let mut state = Self {
			transform: ViewTransform::default(),
			hover: HoverState::default(),
			width,
			height,
			pulse_time: 0.0,
			board_width,
			board_height,
		};
		state.fit();
		state
	}

	fn fit(&mut self) {
		let k = (self.width / self.board_width)
			.min(self.height / self.board_height)
			.max(0.1);
		self.transform = ViewTransform {
			x: (self.width - self.board_width * k) / 2.0,
			y: (self.height - self.board_height * k) / 2.0,
			k,
		};
	}

	pub fn screen_to_board(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn set_hover(&mut self, node: Option<NodeId>, graph: &Graph) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		self.hover.highlight_t = 0.0;
		if let Some(id) = node {
			if let Some(n) = graph.node(id) {
				self.hover.neighbors.extend(n.neighbors().iter().copied());
			}
		}
	}

	pub fn is_hovered(&self, id: NodeId) -> bool {
		self.hover.node == Some(id)
	}

	/// Edge touches the hovered node.
	pub fn is_highlighted_edge(&self, (u, v): (NodeId, NodeId)) -> bool {
		self.is_hovered(u) || self.is_hovered(v)
	}

	pub fn tick(&mut self, dt: f64) {
		self.pulse_time += dt;
		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * 6.0 * dt;
		if self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}
	}
}
