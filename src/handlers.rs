use crate::catalog::{catalog, CategoryGroup};
use crate::errors::AppError;
use crate::models::{Entry, EntryDraft, TodayResponse};
use crate::state::AppState;
use crate::stats::build_today;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Utc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let journal = state.journal.lock().await;
    let today = build_today(&journal);
    Html(render_index(&today, journal.entries()))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let journal = state.journal.lock().await;
    Json(build_today(&journal))
}

pub async fn get_activities() -> Json<Vec<CategoryGroup>> {
    Json(catalog())
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    let journal = state.journal.lock().await;
    Json(journal.entries().to_vec())
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(draft): Json<EntryDraft>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    let entry = apply_add(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    apply_delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn form_add_entry(
    State(state): State<AppState>,
    Form(draft): Form<EntryDraft>,
) -> Result<Redirect, AppError> {
    apply_add(&state, draft).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    apply_delete(&state, id).await?;
    Ok(Redirect::to("/#entries"))
}

async fn apply_add(state: &AppState, draft: EntryDraft) -> Result<Entry, AppError> {
    let mut journal = state.journal.lock().await;
    let entry = journal.add(draft, Utc::now())?;
    info!(id = entry.id, kind = %entry.kind(), "logged entry");

    state.commit(&journal).await;
    Ok(entry)
}

async fn apply_delete(state: &AppState, id: u64) -> Result<Entry, AppError> {
    let mut journal = state.journal.lock().await;
    let removed = journal
        .remove(id)
        .ok_or_else(|| AppError::not_found(format!("no entry with id {id}")))?;
    info!(id, kind = %removed.kind(), "deleted entry");

    state.commit(&journal).await;
    Ok(removed)
}
