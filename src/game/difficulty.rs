//! Traversal modes and the fixed difficulty registry.

use std::fmt;
use std::str::FromStr;

use super::error::GameError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	#[default]
	Bfs,
	Dfs,
}

impl Mode {
	pub const ALL: [Mode; 2] = [Mode::Bfs, Mode::Dfs];

	pub fn label(self) -> &'static str {
		match self {
			Mode::Bfs => "BFS",
			Mode::Dfs => "DFS",
		}
	}

	/// One-line rule shown in the menu.
	pub fn rule(self) -> &'static str {
		match self {
			Mode::Bfs => "Rule: visit every neighbour (the whole layer) before going deeper.",
			Mode::Dfs => "Rule: go as deep as possible before backtracking.",
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Mode {
	type Err = GameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Mode::ALL
			.into_iter()
			.find(|mode| mode.label().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| GameError::UnknownMode(s.to_string()))
	}
}

/// Generation parameters for one difficulty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
	pub layer_count: usize,
	/// Chance in `[0, 1]` that a node gets an extra edge to an earlier node.
	pub cycle_density: f64,
	pub min_nodes_per_layer: usize,
	pub max_nodes_per_layer: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
	Noob,
	Easy,
	#[default]
	Normal,
	Pro,
	Professor,
}

impl Difficulty {
	/// Menu order.
	pub const ALL: [Difficulty; 5] = [
		Difficulty::Noob,
		Difficulty::Easy,
		Difficulty::Normal,
		Difficulty::Pro,
		Difficulty::Professor,
	];

	pub fn name(self) -> &'static str {
		match self {
			Difficulty::Noob => "Noob",
			Difficulty::Easy => "Easy",
			Difficulty::Normal => "Normal",
			Difficulty::Pro => "Pro",
			Difficulty::Professor => "Professor",
		}
	}

	pub fn profile(self) -> DifficultyProfile {
		let (layer_count, cycle_density, min_nodes_per_layer, max_nodes_per_layer) = match self {
			Difficulty::Noob => (2, 0.0, 1, 2),
			Difficulty::Easy => (3, 0.1, 2, 3),
			Difficulty::Normal => (4, 0.3, 2, 4),
			Difficulty::Pro => (5, 0.5, 3, 5),
			Difficulty::Professor => (10, 0.8, 8, 15),
		};
		DifficultyProfile {
			layer_count,
			cycle_density,
			min_nodes_per_layer,
			max_nodes_per_layer,
		}
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Difficulty {
	type Err = GameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Difficulty::ALL
			.into_iter()
			.find(|d| d.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
	}
}

/// Ranking group key, e.g. `BFS_Normal`.
pub fn record_key(mode: Mode, difficulty: Difficulty) -> String {
	format!("{}_{}", mode, difficulty)
}
