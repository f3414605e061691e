use std::fs;

use tempfile::TempDir;
use traversal_arcade::game::{FileBackend, Record, RecordBackend, RecordStore};

fn record(name: &str, score: u32, elapsed_seconds: f64) -> Record {
	Record {
		name: name.into(),
		score,
		elapsed_seconds,
	}
}

#[test]
fn save_and_reload_keeps_order() {
	let dir = TempDir::new().unwrap();
	let backend = FileBackend::new(dir.path().join("records.json"));

	let mut store = RecordStore::new();
	for (name, score) in [("ana", 900), ("bo", 1200), ("cy", 900), ("di", 300), ("ed", 1500), ("fi", 100)] {
		store.insert("BFS_Pro", record(name, score, 12.5), 5);
	}
	store.insert("DFS_Noob", record("gus", 14_000, 2.25), 5);
	backend.save(&store).unwrap();

	let reloaded = backend.load().unwrap();
	assert_eq!(reloaded, store);
	let names: Vec<&str> = reloaded.top("BFS_Pro").iter().map(|r| r.name.as_str()).collect();
	assert_eq!(names, vec!["ed", "bo", "ana", "cy", "di"]);
	assert_eq!(reloaded.top("DFS_Noob")[0].elapsed_seconds, 2.25);
}

#[test]
fn save_overwrites_previous_contents() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("records.json");
	let backend = FileBackend::new(&path);

	let mut store = RecordStore::new();
	store.insert("BFS_Easy", record("one", 10, 1.0), 5);
	backend.save(&store).unwrap();
	store.insert("BFS_Easy", record("two", 20, 1.0), 5);
	backend.save(&store).unwrap();

	let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
	assert_eq!(json["BFS_Easy"].as_array().unwrap().len(), 2);
	assert_eq!(json["BFS_Easy"][0]["name"], "two");
}

#[test]
fn missing_file_is_empty_store() {
	let dir = TempDir::new().unwrap();
	let backend = FileBackend::new(dir.path().join("nope.json"));
	assert!(backend.load().unwrap().is_empty());
}

#[test]
fn corrupt_file_falls_back_to_empty() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("records.json");
	fs::write(&path, "{\"BFS_Pro\": [{\"name\": 3}]").unwrap();
	let backend = FileBackend::new(&path);

	assert!(backend.load().is_err());
	assert!(RecordStore::load_or_default(&backend).is_empty());
}

#[test]
fn hand_edited_file_is_normalised_on_load() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("records.json");
	let entries: Vec<_> = [5, 40, 10, 40, 30, 20, 60]
		.into_iter()
		.enumerate()
		.map(|(i, score)| serde_json::json!({"name": format!("p{i}"), "score": score, "elapsedSeconds": 2.0}))
		.collect();
	fs::write(&path, serde_json::json!({ "DFS_Normal": entries }).to_string()).unwrap();
	let backend = FileBackend::new(&path);

	let store = RecordStore::load_or_default(&backend);
	let names: Vec<&str> = store.top("DFS_Normal").iter().map(|r| r.name.as_str()).collect();
	assert_eq!(names, vec!["p6", "p1", "p3", "p4", "p5"]);
}
