//! Game core: graph model, level generation, traversal answer keys, the
//! session state machine and the high-score store.
//!
//! Nothing in here touches the browser, so the whole core runs and tests
//! natively.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod generator;
pub mod graph;
pub mod records;
pub mod session;
pub mod traversal;

pub use config::{GameConfig, Layout, ScoringConfig};
pub use difficulty::{Difficulty, DifficultyProfile, Mode, record_key};
pub use error::{GameError, RecordError};
pub use generator::LevelGenerator;
pub use graph::{Graph, Node, NodeId, ROOT};
pub use records::{FileBackend, Record, RecordBackend, RecordStore};
pub use session::{GameSession, Key, MoveOutcome, SessionState};
pub use traversal::answer_key;
