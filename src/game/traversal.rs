//! Canonical BFS/DFS visitation order ("answer key").
//!
//! Ties between siblings are always broken by ascending node id so the order
//! depends only on the graph's structure, never on insertion or hash order.
//! BFS marks a node when it is enqueued and DFS when it is popped; the two
//! rules give different orders on graphs with cycles and both are kept as is.

use std::collections::VecDeque;

use super::difficulty::Mode;
use super::graph::{Graph, NodeId, ROOT};

/// Visitation order from the root, root excluded.
pub fn answer_key(graph: &Graph, mode: Mode) -> Vec<NodeId> {
	if graph.is_empty() {
		return Vec::new();
	}
	match mode {
		Mode::Bfs => bfs(graph),
		Mode::Dfs => dfs(graph),
	}
}

fn sorted_neighbors(graph: &Graph, id: NodeId) -> Vec<NodeId> {
	let mut neighbors = graph
		.node(id)
		.map(|node| node.neighbors().to_vec())
		.unwrap_or_default();
	neighbors.sort_unstable();
	neighbors
}

fn bfs(graph: &Graph) -> Vec<NodeId> {
	let mut order = Vec::with_capacity(graph.len().saturating_sub(1));
	let mut seen = vec![false; graph.len()];
	let mut queue = VecDeque::from([ROOT]);
	seen[ROOT] = true;

	while let Some(current) = queue.pop_front() {
		if current != ROOT {
			order.push(current);
		}
		for next in sorted_neighbors(graph, current) {
			if !seen[next] {
				seen[next] = true;
				queue.push_back(next);
			}
		}
	}
	order
}

fn dfs(graph: &Graph) -> Vec<NodeId> {
	let mut order = Vec::with_capacity(graph.len().saturating_sub(1));
	let mut seen = vec![false; graph.len()];
	seen[ROOT] = true;

	// Descending push so that the smallest id is popped first.
	let mut stack: Vec<NodeId> = sorted_neighbors(graph, ROOT).into_iter().rev().collect();

	while let Some(current) = stack.pop() {
		if seen[current] {
			continue;
		}
		seen[current] = true;
		order.push(current);
		stack.extend(
			sorted_neighbors(graph, current)
				.into_iter()
				.rev()
				.filter(|&next| !seen[next]),
		);
	}
	order
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph(n: usize, edges: &[(NodeId, NodeId)]) -> Graph {
		let mut graph = Graph::new();
		for id in 0..n {
			graph.add_node(id, 0.0, 0.0);
		}
		for &(u, v) in edges {
			graph.add_edge(u, v);
		}
		graph
	}

	#[test]
	fn path_graph() {
		let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
		assert_eq!(answer_key(&g, Mode::Bfs), vec![1, 2, 3]);
		assert_eq!(answer_key(&g, Mode::Dfs), vec![1, 2, 3]);
	}

	#[test]
	fn dfs_descends_before_backtracking() {
		let g = graph(4, &[(0, 1), (0, 2), (1, 3)]);
		assert_eq!(answer_key(&g, Mode::Bfs), vec![1, 2, 3]);
		assert_eq!(answer_key(&g, Mode::Dfs), vec![1, 3, 2]);
	}

	#[test]
	fn order_ignores_edge_insertion_order() {
		let g = graph(4, &[(1, 3), (0, 2), (0, 1)]);
		assert_eq!(answer_key(&g, Mode::Bfs), vec![1, 2, 3]);
		assert_eq!(answer_key(&g, Mode::Dfs), vec![1, 3, 2]);
	}

	#[test]
	fn cycle_edge_changes_dfs_but_not_bfs_layers() {
		// 0-1, 0-2, 1-3, 3-2: DFS reaches 2 through 3 before backtracking.
		let g = graph(4, &[(0, 1), (0, 2), (1, 3), (3, 2)]);
		assert_eq!(answer_key(&g, Mode::Bfs), vec![1, 2, 3]);
		assert_eq!(answer_key(&g, Mode::Dfs), vec![1, 3, 2]);

		// 0-1, 0-3, 1-2, 2-3
		let g = graph(4, &[(0, 1), (0, 3), (1, 2), (2, 3)]);
		assert_eq!(answer_key(&g, Mode::Bfs), vec![1, 3, 2]);
		assert_eq!(answer_key(&g, Mode::Dfs), vec![1, 2, 3]);
	}

	#[test]
	fn root_only() {
		let g = graph(1, &[]);
		assert!(answer_key(&g, Mode::Bfs).is_empty());
		assert!(answer_key(&g, Mode::Dfs).is_empty());
		assert!(answer_key(&Graph::new(), Mode::Dfs).is_empty());
	}
}
