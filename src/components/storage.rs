use web_sys::Storage;

use crate::game::{RecordBackend, RecordError, RecordStore};

/// Key under which the ranking JSON is kept.
pub const RECORDS_KEY: &str = "traversal-arcade.records";

/// Record store persisted in the browser's `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageBackend {
	key: String,
}

impl LocalStorageBackend {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into() }
	}

	fn storage(&self) -> Result<Storage, RecordError> {
		web_sys::window()
			.ok_or_else(|| RecordError::Unavailable("no window".into()))?
			.local_storage()
			.map_err(|_| RecordError::Unavailable("localStorage access denied".into()))?
			.ok_or_else(|| RecordError::Unavailable("localStorage disabled".into()))
	}
}

impl RecordBackend for LocalStorageBackend {
	fn load(&self) -> Result<RecordStore, RecordError> {
		match self.storage()?.get_item(&self.key) {
			Ok(Some(json)) => RecordStore::from_json(&json),
			Ok(None) => Ok(RecordStore::default()),
			Err(_) => Err(RecordError::Unavailable(format!("cannot read '{}'", self.key))),
		}
	}

	fn save(&self, store: &RecordStore) -> Result<(), RecordError> {
		let json = store.to_json()?;
		self.storage()?
			.set_item(&self.key, &json)
			.map_err(|_| RecordError::Unavailable(format!("cannot write '{}'", self.key)))
	}
}
