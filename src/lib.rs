pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod score;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use journal::Journal;
pub use score::compute_score;
pub use state::AppState;
pub use storage::{load_entries, resolve_data_dir, FileStore};
