//! Note Routes
//!
//! JSON endpoints for the browser UI.
//!
//! - GET /api/v1/notes - List notes in display order
//! - GET /api/v1/notes/:slug - Get one note with its rendered body

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{NoteDetailResponse, NoteListResponse, NoteSummary, SiteLinks};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<NoteListResponse> {
    let links = state.scene.links();
    let registry = state.registry();

    let notes: Vec<NoteSummary> = registry
        .all()
        .iter()
        .map(|note| NoteSummary::from_note(note, links))
        .collect();

    Json(NoteListResponse {
        total: notes.len(),
        generated_at: registry.generated_at(),
        static_breakpoint: state.layout.static_breakpoint.to_string(),
        links: SiteLinks {
            source_url: links.source_url(),
            new_note_url: links.new_note_url(),
        },
        notes,
    })
}

/// GET /api/v1/notes/:slug
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<NoteDetailResponse>> {
    let note = state
        .registry()
        .lookup(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("Note '{}' not found", slug)))?;

    Ok(Json(NoteDetailResponse::from_note(note, state.scene.links())))
}
