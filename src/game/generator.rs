//! Layered random graph generation.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::config::Layout;
use super::difficulty::{DifficultyProfile, Mode};
use super::graph::{Graph, NodeId, ROOT};

/// Cycle edges are only added once more than this many nodes exist.
const MIN_NODES_FOR_CYCLES: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct LevelGenerator {
	layout: Layout,
}

impl LevelGenerator {
	pub fn new(layout: Layout) -> Self {
		Self { layout }
	}

	pub fn layout(&self) -> &Layout {
		&self.layout
	}

	/// Builds a connected layered graph rooted at node 0.
	///
	/// Every node of layer `i` gets a tree edge to a random node of layer
	/// `i - 1`. Once a layer is complete each of its nodes may also get one
	/// cycle edge to a random earlier node, with the profile's cycle density
	/// halved in DFS mode.
	pub fn generate<R: Rng>(
		&self,
		profile: &DifficultyProfile,
		mode: Mode,
		rng: &mut R,
	) -> Graph {
		let layout = &self.layout;
		let layers = profile.layer_count.max(1);
		let layer_height = (layout.height - layout.margin_top - layout.margin_bottom) / layers as i32;

		let mut graph = Graph::new();
		graph.add_node(ROOT, (layout.width / 2) as f64, layout.margin_top as f64);
		let mut previous: Vec<NodeId> = vec![ROOT];
		let mut next_id: NodeId = 1;

		let cycle_chance = match mode {
			Mode::Bfs => profile.cycle_density,
			Mode::Dfs => profile.cycle_density * 0.5,
		};

		for layer in 1..=layers {
			let y_base = layout.margin_top + layer as i32 * layer_height;
			let count = rng.random_range(
				profile.min_nodes_per_layer.max(1)
					..=profile.max_nodes_per_layer.max(profile.min_nodes_per_layer.max(1)),
			);
			let sector = (layout.width - 2 * layout.margin_x) / count as i32;
			let mut current = Vec::with_capacity(count);

			for slot in 0..count {
				let jitter_x = rng.random_range(-layout.jitter_x..=layout.jitter_x);
				let jitter_y = rng.random_range(-layout.jitter_y..=layout.jitter_y);
				let x = layout.margin_x + slot as i32 * sector + sector / 2 + jitter_x;
				let y = y_base + jitter_y;

				let id = next_id;
				graph.add_node(id, x as f64, y as f64);
				current.push(id);
				next_id += 1;

				let parent = previous.choose(rng).copied().unwrap_or(ROOT);
				graph.add_edge(parent, id);
			}

			for &id in &current {
				if rng.random::<f64>() < cycle_chance && next_id > MIN_NODES_FOR_CYCLES {
					let target = rng.random_range(0..=next_id - 2);
					if target != id && graph.add_edge(id, target) {
						debug!("cycle edge {id} -> {target}");
					}
				}
			}

			previous = current;
		}

		if let Some(root) = graph.node_mut(ROOT) {
			root.visited = true;
		}
		graph
	}
}
