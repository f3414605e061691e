//! High-score table grouped by `MODE_DIFFICULTY`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// Default number of entries kept per group.
pub const DEFAULT_RANKING_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
	pub name: String,
	pub score: u32,
	pub elapsed_seconds: f64,
}

/// Ranking groups, each sorted by descending score.
///
/// Serialises as a plain JSON object: `{"BFS_Normal": [{"name": .., "score": ..,
/// "elapsedSeconds": ..}, ..], ..}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
	groups: BTreeMap<String, Vec<Record>>,
}

impl RecordStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a record under `key`, keeping the group sorted by descending
	/// score and at most `limit` long. Equal scores keep insertion order.
	/// Returns the record's rank (0-based) if it made the cut.
	pub fn insert(&mut self, key: &str, record: Record, limit: usize) -> Option<usize> {
		let group = self.groups.entry(key.to_string()).or_default();
		group.push(record);
		let inserted = group.len() - 1;
		let mut indexed: Vec<(usize, Record)> = group.drain(..).enumerate().collect();
		indexed.sort_by(|a, b| b.1.score.cmp(&a.1.score));
		let rank = indexed.iter().position(|(i, _)| *i == inserted);
		group.extend(indexed.into_iter().map(|(_, r)| r).take(limit));
		rank.filter(|&r| r < limit)
	}

	pub fn top(&self, key: &str) -> &[Record] {
		self.groups.get(key).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.groups.keys().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.groups.values().all(Vec::is_empty)
	}

	pub fn to_json(&self) -> Result<String, RecordError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Parses a stored table. Groups are re-sorted and cut to
	/// [`DEFAULT_RANKING_SIZE`], since the file may have been edited by hand.
	pub fn from_json(json: &str) -> Result<Self, RecordError> {
		let mut store: Self = serde_json::from_str(json)?;
		store.normalize(DEFAULT_RANKING_SIZE);
		Ok(store)
	}

	/// Sorts every group by descending score (stable) and keeps at most
	/// `limit` entries per group.
	pub fn normalize(&mut self, limit: usize) {
		for group in self.groups.values_mut() {
			group.sort_by(|a, b| b.score.cmp(&a.score));
			group.truncate(limit);
		}
	}

	/// Loads from `backend`, falling back to an empty store on any failure.
	pub fn load_or_default(backend: &impl RecordBackend) -> Self {
		match backend.load() {
			Ok(store) => store,
			Err(err) => {
				warn!("starting with an empty record store: {err}");
				Self::default()
			}
		}
	}
}

/// Somewhere a [`RecordStore`] can be persisted. Saves always overwrite.
pub trait RecordBackend {
	fn load(&self) -> Result<RecordStore, RecordError>;
	fn save(&self, store: &RecordStore) -> Result<(), RecordError>;
}

/// JSON file on disk. A missing file loads as an empty store.
#[derive(Clone, Debug)]
pub struct FileBackend {
	path: PathBuf,
}

impl FileBackend {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl RecordBackend for FileBackend {
	fn load(&self) -> Result<RecordStore, RecordError> {
		match fs::read_to_string(&self.path) {
			Ok(json) => RecordStore::from_json(&json),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(RecordStore::default()),
			Err(err) => Err(err.into()),
		}
	}

	fn save(&self, store: &RecordStore) -> Result<(), RecordError> {
		fs::write(&self.path, store.to_json()?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(name: &str, score: u32) -> Record {
		Record {
			name: name.into(),
			score,
			elapsed_seconds: 1.5,
		}
	}

	fn names(store: &RecordStore, key: &str) -> Vec<String> {
		store.top(key).iter().map(|r| r.name.clone()).collect()
	}

	#[test]
	fn keeps_top_five_descending() {
		let mut store = RecordStore::new();
		for (i, score) in [300, 100, 500, 200, 400, 50, 600].into_iter().enumerate() {
			store.insert("BFS_Pro", record(&format!("p{i}"), score), DEFAULT_RANKING_SIZE);
		}
		let scores: Vec<u32> = store.top("BFS_Pro").iter().map(|r| r.score).collect();
		assert_eq!(scores, vec![600, 500, 400, 300, 200]);
	}

	#[test]
	fn ties_keep_insertion_order() {
		let mut store = RecordStore::new();
		store.insert("k", record("first", 10), 5);
		store.insert("k", record("second", 10), 5);
		store.insert("k", record("third", 20), 5);
		assert_eq!(names(&store, "k"), vec!["third", "first", "second"]);
	}

	#[test]
	fn insert_reports_rank() {
		let mut store = RecordStore::new();
		assert_eq!(store.insert("k", record("a", 10), 2), Some(0));
		assert_eq!(store.insert("k", record("b", 30), 2), Some(0));
		assert_eq!(store.insert("k", record("c", 20), 2), Some(1));
		assert_eq!(store.insert("k", record("d", 5), 2), None);
		assert_eq!(names(&store, "k"), vec!["b", "c"]);
	}

	#[test]
	fn groups_are_independent() {
		let mut store = RecordStore::new();
		store.insert("BFS_Noob", record("a", 1), 5);
		store.insert("DFS_Noob", record("b", 2), 5);
		assert_eq!(names(&store, "BFS_Noob"), vec!["a"]);
		assert_eq!(names(&store, "DFS_Noob"), vec!["b"]);
		assert!(store.top("DFS_Pro").is_empty());
	}

	#[test]
	fn json_shape() {
		let mut store = RecordStore::new();
		store.insert("DFS_Easy", record("ana", 9000), 5);
		let value: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
		assert_eq!(
			value,
			serde_json::json!({
				"DFS_Easy": [{"name": "ana", "score": 9000, "elapsedSeconds": 1.5}]
			})
		);
	}

	#[test]
	fn loaded_groups_are_sorted_and_cut() {
		let json = r#"{"BFS_Pro": [
			{"name": "a", "score": 10, "elapsedSeconds": 1.0},
			{"name": "b", "score": 70, "elapsedSeconds": 1.0},
			{"name": "c", "score": 30, "elapsedSeconds": 1.0},
			{"name": "d", "score": 70, "elapsedSeconds": 1.0},
			{"name": "e", "score": 50, "elapsedSeconds": 1.0},
			{"name": "f", "score": 30, "elapsedSeconds": 1.0},
			{"name": "g", "score": 20, "elapsedSeconds": 1.0}
		]}"#;
		let store = RecordStore::from_json(json).unwrap();
		assert_eq!(names(&store, "BFS_Pro"), vec!["b", "d", "e", "c", "f"]);
	}

	#[test]
	fn corrupt_json_is_an_error() {
		assert!(matches!(
			RecordStore::from_json("{not json"),
			Err(RecordError::Format(_))
		));
	}
}
