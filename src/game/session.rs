//! Level lifecycle and move validation.
//!
//! ```text
//! Menu --start_level--> Playing --last correct node--> AwaitingName --submit--> Ranking
//!                          |                     \--(records disabled)--> Won
//!                          +--energy hits 0--> Lost
//! Ranking | Lost | Won --return_to_menu--> Menu
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use web_time::Instant;

use super::config::GameConfig;
use super::difficulty::{Difficulty, Mode, record_key};
use super::generator::LevelGenerator;
use super::graph::{Graph, NodeId, ROOT};
use super::records::{Record, RecordStore};
use super::traversal;

/// Name stored when the player submits an empty name.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
	#[default]
	Menu,
	Playing,
	AwaitingName,
	Ranking,
	Lost,
	/// Level finished with records disabled.
	Won,
}

impl SessionState {
	pub fn is_over(self) -> bool {
		matches!(self, SessionState::Ranking | SessionState::Lost | SessionState::Won)
	}
}

/// Keyboard input after translation by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
	Char(char),
	Backspace,
	Enter,
}

/// Result of a single click or selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
	/// Nothing changed: not playing, no node hit, or node already visited.
	Ignored,
	Advanced { remaining: usize },
	Completed { score: u32 },
	Penalized { energy: f64 },
	Lost,
}

#[derive(Clone, Debug)]
pub struct GameSession {
	config: GameConfig,
	generator: LevelGenerator,
	rng: ChaCha8Rng,
	state: SessionState,
	mode: Mode,
	difficulty: Difficulty,
	graph: Graph,
	answer_key: VecDeque<NodeId>,
	current: Option<NodeId>,
	energy: f64,
	started_at: Option<Instant>,
	finished_after: Option<Duration>,
	score: Option<u32>,
	name: String,
	records: RecordStore,
	last_rank: Option<usize>,
}

impl GameSession {
	/// Creates a session in the menu. `seed` drives every generated level.
	pub fn new(config: GameConfig, records: RecordStore, seed: u64) -> Self {
		Self {
			generator: LevelGenerator::new(config.layout.clone()),
			energy: config.energy_max,
			config,
			rng: ChaCha8Rng::seed_from_u64(seed),
			state: SessionState::Menu,
			mode: Mode::default(),
			difficulty: Difficulty::default(),
			graph: Graph::new(),
			answer_key: VecDeque::new(),
			current: None,
			started_at: None,
			finished_after: None,
			score: None,
			name: String::new(),
			records,
			last_rank: None,
		}
	}

	pub fn set_mode(&mut self, mode: Mode) {
		if self.state == SessionState::Menu && self.mode != mode {
			debug!("mode set to {mode}");
			self.mode = mode;
		}
	}

	/// Generates a new level and starts playing it. Only valid from the menu.
	pub fn start_level(&mut self, difficulty: Difficulty, mode: Mode, now: Instant) {
		if self.state != SessionState::Menu {
			debug!("start_level ignored in {:?}", self.state);
			return;
		}
		self.mode = mode;
		self.difficulty = difficulty;
		self.graph = self
			.generator
			.generate(&difficulty.profile(), mode, &mut self.rng);
		self.graph.refresh_frontier();
		self.answer_key = traversal::answer_key(&self.graph, mode).into();
		self.current = Some(ROOT);
		self.energy = self.config.energy_max;
		self.started_at = Some(now);
		self.finished_after = None;
		self.score = None;
		self.name.clear();
		self.last_rank = None;
		self.state = SessionState::Playing;

		info!(
			"level started: {} {} with {} nodes and {} edges",
			mode,
			difficulty,
			self.graph.len(),
			self.graph.edges().len()
		);
		debug!("answer key: {:?}", self.answer_key);
	}

	/// Resolves a board click to the nearest node within the hit radius.
	pub fn click(&mut self, x: f64, y: f64, now: Instant) -> MoveOutcome {
		if self.state != SessionState::Playing {
			return MoveOutcome::Ignored;
		}
		match self.graph.node_at(x, y, self.config.hit_radius) {
			Some(id) => self.select(id, now),
			None => MoveOutcome::Ignored,
		}
	}

	/// Checks `id` against the head of the answer key.
	pub fn select(&mut self, id: NodeId, now: Instant) -> MoveOutcome {
		if self.state != SessionState::Playing {
			return MoveOutcome::Ignored;
		}
		let Some(node) = self.graph.node(id) else {
			return MoveOutcome::Ignored;
		};
		if node.visited {
			return MoveOutcome::Ignored;
		}
		let Some(&expected) = self.answer_key.front() else {
			return MoveOutcome::Ignored;
		};

		if id == expected {
			self.answer_key.pop_front();
			if let Some(node) = self.graph.node_mut(id) {
				node.visited = true;
			}
			self.current = Some(id);
			self.graph.refresh_frontier();
			debug!("node {id} correct, {} left", self.answer_key.len());

			if self.answer_key.is_empty() {
				return self.finish(now);
			}
			return MoveOutcome::Advanced {
				remaining: self.answer_key.len(),
			};
		}

		self.energy -= self.config.wrong_move_penalty;
		if self.energy <= 0.0 {
			self.energy = 0.0;
			self.finished_after = self
				.started_at
				.and_then(|start| now.checked_duration_since(start));
			self.state = SessionState::Lost;
			info!("level lost: {} {}", self.mode, self.difficulty);
			return MoveOutcome::Lost;
		}
		debug!("node {id} wrong (expected {expected}), energy {}", self.energy);
		MoveOutcome::Penalized {
			energy: self.energy,
		}
	}

	fn finish(&mut self, now: Instant) -> MoveOutcome {
		let elapsed = self
			.started_at
			.and_then(|start| now.checked_duration_since(start))
			.unwrap_or_default();
		let score = self
			.config
			.scoring
			.score(self.energy, elapsed.as_secs_f64());
		self.finished_after = Some(elapsed);
		self.score = Some(score);
		self.state = if self.config.records_enabled {
			SessionState::AwaitingName
		} else {
			SessionState::Won
		};
		info!(
			"level cleared: {} {} score {} in {:.1}s",
			self.mode,
			self.difficulty,
			score,
			elapsed.as_secs_f64()
		);
		MoveOutcome::Completed { score }
	}

	/// Routes a key press according to the current state.
	pub fn handle_key(&mut self, key: Key) {
		match (self.state, key) {
			(SessionState::AwaitingName, Key::Char(c)) => {
				self.push_char(c);
			}
			(SessionState::AwaitingName, Key::Backspace) => {
				self.name.pop();
			}
			(SessionState::AwaitingName, Key::Enter) => {
				self.submit_name();
			}
			(state, Key::Char('m' | 'M')) if state.is_over() => {
				self.return_to_menu();
			}
			_ => {}
		}
	}

	/// Appends a printable character to the name buffer. Characters past the
	/// length limit are dropped.
	pub fn push_char(&mut self, c: char) -> bool {
		if self.state != SessionState::AwaitingName
			|| c.is_control()
			|| self.name.chars().count() >= self.config.name_max_len
		{
			return false;
		}
		self.name.push(c);
		true
	}

	/// Replaces the name buffer, applying the same filtering as typed input.
	pub fn enter_name(&mut self, name: &str) {
		if self.state != SessionState::AwaitingName {
			return;
		}
		self.name.clear();
		for c in name.chars() {
			self.push_char(c);
		}
	}

	/// Commits the name buffer as a ranking entry and shows the ranking.
	pub fn submit_name(&mut self) -> Option<Record> {
		if self.state != SessionState::AwaitingName {
			return None;
		}
		let trimmed = self.name.trim();
		let name = if trimmed.is_empty() {
			ANONYMOUS.to_string()
		} else {
			trimmed.to_string()
		};
		let record = Record {
			name,
			score: self.score.unwrap_or_default(),
			elapsed_seconds: self.finished_after.unwrap_or_default().as_secs_f64(),
		};
		let key = record_key(self.mode, self.difficulty);
		self.last_rank = self
			.records
			.insert(&key, record.clone(), self.config.ranking_size);
		info!("record for {key}: {} {} (rank {:?})", record.name, record.score, self.last_rank);
		self.name.clear();
		self.state = SessionState::Ranking;
		Some(record)
	}

	pub fn return_to_menu(&mut self) -> bool {
		if !self.state.is_over() {
			return false;
		}
		self.state = SessionState::Menu;
		true
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	pub fn config(&self) -> &GameConfig {
		&self.config
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Remaining answer key, next expected node first.
	pub fn answer_key(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.answer_key.iter().copied()
	}

	pub fn remaining(&self) -> usize {
		self.answer_key.len()
	}

	/// Most recently selected node (the root right after level start).
	pub fn current(&self) -> Option<NodeId> {
		self.current
	}

	pub fn energy(&self) -> f64 {
		self.energy
	}

	pub fn energy_fraction(&self) -> f64 {
		if self.config.energy_max > 0.0 {
			(self.energy / self.config.energy_max).clamp(0.0, 1.0)
		} else {
			0.0
		}
	}

	/// Time since level start, frozen once the level is cleared.
	pub fn elapsed(&self, now: Instant) -> Duration {
		if let Some(done) = self.finished_after {
			return done;
		}
		match (self.state, self.started_at) {
			(SessionState::Playing, Some(start)) => {
				now.checked_duration_since(start).unwrap_or_default()
			}
			_ => Duration::ZERO,
		}
	}

	pub fn score(&self) -> Option<u32> {
		self.score
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn records(&self) -> &RecordStore {
		&self.records
	}

	/// Top entries for the current mode and difficulty.
	pub fn ranking(&self) -> &[Record] {
		self.records.top(&record_key(self.mode, self.difficulty))
	}

	/// Position of the last submitted record in its ranking, if it made it.
	pub fn last_rank(&self) -> Option<usize> {
		self.last_rank
	}
}
