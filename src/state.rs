use crate::journal::Journal;
use crate::storage::{persist_entries, FileStore};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub store: FileStore,
    pub journal: Arc<Mutex<Journal>>,
}

impl AppState {
    pub fn new(store: FileStore, journal: Journal) -> Self {
        Self {
            store,
            journal: Arc::new(Mutex::new(journal)),
        }
    }

    /// Writes the whole journal out. A failed save is logged and the in-memory
    /// journal stays as it is.
    pub async fn commit(&self, journal: &Journal) {
        if let Err(err) = persist_entries(&self.store, journal.entries()).await {
            error!("failed to save entries: {err}");
        }
    }
}
