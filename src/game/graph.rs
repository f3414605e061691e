//! Arena-backed undirected graph.
//!
//! Nodes are stored in a `Vec` indexed by their id, so adjacency and edges are
//! plain id lists. Graphs are built once per level and discarded on the next
//! level start; there are no removal operations.

/// Node identifier. Ids are assigned sequentially from 0 and 0 is the root.
pub type NodeId = usize;

/// Root of every generated graph.
pub const ROOT: NodeId = 0;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	/// Player has correctly selected this node (root starts visited).
	pub visited: bool,
	/// Frontier hint for rendering only.
	pub queued: bool,
	neighbors: Vec<NodeId>,
}

impl Node {
	fn new(id: NodeId, x: f64, y: f64) -> Self {
		Self {
			id,
			x,
			y,
			visited: false,
			queued: false,
			neighbors: Vec::new(),
		}
	}

	/// Neighbor ids in edge insertion order.
	pub fn neighbors(&self) -> &[NodeId] {
		&self.neighbors
	}
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a node. Ids must be handed out sequentially, which keeps the
	/// arena index equal to the id.
	///
	/// # Panics
	///
	/// Panics if `id` is not the next sequential id.
	pub fn add_node(&mut self, id: NodeId, x: f64, y: f64) -> &mut Node {
		assert_eq!(id, self.nodes.len(), "node ids must be sequential");
		self.nodes.push(Node::new(id, x, y));
		&mut self.nodes[id]
	}

	/// Connects `u` and `v`. Returns `false` when the unordered pair is already
	/// connected, in which case nothing changes.
	pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
		if self.contains_edge(u, v) {
			return false;
		}
		self.nodes[u].neighbors.push(v);
		self.nodes[v].neighbors.push(u);
		self.edges.push((u, v));
		true
	}

	pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
		self.nodes
			.get(u)
			.is_some_and(|node| node.neighbors.contains(&v))
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id)
	}

	pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
		self.nodes.get_mut(id)
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[(NodeId, NodeId)] {
		&self.edges
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Nearest node whose centre lies strictly within `radius` of `(x, y)`.
	pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<NodeId> {
		self.nodes
			.iter()
			.map(|node| (node.id, (node.x - x).hypot(node.y - y)))
			.filter(|&(_, dist)| dist < radius)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(id, _)| id)
	}

	/// Marks as queued exactly the unvisited nodes adjacent to a visited one.
	pub fn refresh_frontier(&mut self) {
		let frontier: Vec<bool> = self
			.nodes
			.iter()
			.map(|node| {
				!node.visited && node.neighbors.iter().any(|&n| self.nodes[n].visited)
			})
			.collect();
		for (node, queued) in self.nodes.iter_mut().zip(frontier) {
			node.queued = queued;
		}
	}

	/// Both endpoints of the edge have been visited.
	pub fn edge_visited(&self, (u, v): (NodeId, NodeId)) -> bool {
		self.nodes[u].visited && self.nodes[v].visited
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn path(n: usize) -> Graph {
		let mut graph = Graph::new();
		for id in 0..n {
			graph.add_node(id, id as f64 * 10.0, 0.0);
		}
		for id in 1..n {
			graph.add_edge(id - 1, id);
		}
		graph
	}

	#[test]
	fn duplicate_edge_is_ignored_in_either_direction() {
		let mut graph = path(2);
		assert!(!graph.add_edge(0, 1));
		assert!(!graph.add_edge(1, 0));
		assert_eq!(graph.edges().len(), 1);
		assert_eq!(graph.node(0).unwrap().neighbors(), &[1]);
		assert_eq!(graph.node(1).unwrap().neighbors(), &[0]);
	}

	#[test]
	fn neighbors_keep_insertion_order() {
		let mut graph = path(4);
		graph.add_edge(3, 0);
		assert_eq!(graph.node(0).unwrap().neighbors(), &[1, 3]);
	}

	#[test]
	fn node_at_picks_nearest_within_radius() {
		let graph = path(3);
		assert_eq!(graph.node_at(12.0, 1.0, 20.0), Some(1));
		assert_eq!(graph.node_at(4.0, 0.0, 20.0), Some(0));
		assert_eq!(graph.node_at(100.0, 100.0, 20.0), None);
	}

	#[test]
	fn frontier_tracks_visited_neighbours() {
		let mut graph = path(4);
		graph.node_mut(0).unwrap().visited = true;
		graph.refresh_frontier();
		let queued: Vec<bool> = graph.nodes().iter().map(|n| n.queued).collect();
		assert_eq!(queued, vec![false, true, false, false]);

		graph.node_mut(1).unwrap().visited = true;
		graph.refresh_frontier();
		let queued: Vec<bool> = graph.nodes().iter().map(|n| n.queued).collect();
		assert_eq!(queued, vec![false, false, true, false]);
		assert!(graph.edge_visited((0, 1)));
		assert!(!graph.edge_visited((1, 2)));
	}
}
