use thiserror::Error;

/// Configuration errors. These indicate a programming mistake, never a game
/// state the player can reach.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
	#[error("unknown difficulty '{0}'")]
	UnknownDifficulty(String),

	#[error("unknown traversal mode '{0}'")]
	UnknownMode(String),
}

/// Failures loading or saving the record store.
#[derive(Debug, Error)]
pub enum RecordError {
	#[error("record store i/o failed: {0}")]
	Io(#[from] std::io::Error),

	#[error("record store is malformed: {0}")]
	Format(#[from] serde_json::Error),

	#[error("record storage unavailable: {0}")]
	Unavailable(String),
}
