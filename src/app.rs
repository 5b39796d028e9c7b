use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries", post(handlers::form_add_entry))
        .route("/entries/:id/delete", post(handlers::form_delete_entry))
        .route("/api/today", get(handlers::get_today))
        .route("/api/activities", get(handlers::get_activities))
        .route("/api/entries", get(handlers::list_entries).post(handlers::add_entry))
        .route("/api/entries/:id", delete(handlers::delete_entry))
        .with_state(state)
}
