//! Balance and layout constants.

/// Score formula weights. The score on completion is
/// `energy * energy_weight + max(0, time_bonus_base - elapsed * time_bonus_per_second)`,
/// each term truncated to an integer.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringConfig {
	pub energy_weight: f64,
	pub time_bonus_base: f64,
	pub time_bonus_per_second: f64,
}

impl Default for ScoringConfig {
	fn default() -> Self {
		Self {
			energy_weight: 100.0,
			time_bonus_base: 5000.0,
			time_bonus_per_second: 10.0,
		}
	}
}

impl ScoringConfig {
	pub fn score(&self, energy: f64, elapsed_secs: f64) -> u32 {
		let energy_points = (energy * self.energy_weight).max(0.0) as u32;
		let time_bonus =
			(self.time_bonus_base - elapsed_secs * self.time_bonus_per_second).max(0.0) as u32;
		energy_points + time_bonus
	}
}

/// Board geometry used by the level generator.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	pub width: i32,
	pub height: i32,
	pub margin_x: i32,
	pub margin_top: i32,
	pub margin_bottom: i32,
	pub jitter_x: i32,
	pub jitter_y: i32,
}

impl Default for Layout {
	fn default() -> Self {
		Self {
			width: 800,
			height: 600,
			margin_x: 50,
			margin_top: 100,
			margin_bottom: 50,
			jitter_x: 20,
			jitter_y: 15,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
	pub energy_max: f64,
	pub wrong_move_penalty: f64,
	/// Click distance (board units) within which a node counts as hit.
	pub hit_radius: f64,
	pub name_max_len: usize,
	pub ranking_size: usize,
	/// Arcade mode: finished levels ask for a name and land in the ranking.
	/// When off, a finished level simply shows the win banner.
	pub records_enabled: bool,
	pub scoring: ScoringConfig,
	pub layout: Layout,
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			energy_max: 100.0,
			wrong_move_penalty: 15.0,
			hit_radius: 20.0,
			name_max_len: 12,
			ranking_size: 5,
			records_enabled: true,
			scoring: ScoringConfig::default(),
			layout: Layout::default(),
		}
	}
}
