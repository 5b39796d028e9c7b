use crate::errors::AppError;
use crate::models::Entry;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

/// The one key the whole entry collection lives under.
pub const ENTRIES_KEY: &str = "health-tracker-entries";

pub fn resolve_data_dir() -> PathBuf {
    match env::var("APP_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}

/// Key-value store keeping each key's blob in `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::bad_request(format!("invalid storage key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    /// `Ok(None)` when nothing has been saved under `key` yet.
    pub async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(self.path_for(key)?).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites whatever was stored under `key`.
    pub async fn save(&self, key: &str, blob: &[u8]) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, blob).await?;
        fs::rename(&staging, &path).await?;
        Ok(())
    }
}

/// Decodes a stored collection. Entries that no longer decode (an unknown
/// `type`, a missing timestamp) are skipped rather than failing the load.
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<Entry>, serde_json::Error> {
    let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let mut entries = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<Entry>(value) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("skipping unreadable stored entry: {err}"),
        }
    }
    Ok(entries)
}

pub fn encode_entries(entries: &[Entry]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(entries)
}

/// Missing or unreadable data means an empty journal.
pub async fn load_entries(store: &FileStore) -> Vec<Entry> {
    match store.load(ENTRIES_KEY).await {
        Ok(Some(bytes)) => match decode_entries(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse stored entries: {err}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            error!("failed to read stored entries: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_entries(store: &FileStore, entries: &[Entry]) -> Result<(), AppError> {
    let payload = encode_entries(entries)?;
    store.save(ENTRIES_KEY, &payload).await
}
