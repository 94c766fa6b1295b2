use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, info};

use crate::db::Note;
use crate::error::{NotesError, StatusEnvelope};
use crate::middleware::{NoteBody, NoteId};
use crate::router::NotesState;

/// POST /notes -> inserts with a store-assigned id.
pub async fn create_note(
    State(state): State<NotesState>,
    NoteBody(fields): NoteBody,
) -> Result<(StatusCode, Json<Note>), NotesError> {
    let note = state.storage.insert(fields).await?;
    info!(id = note.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// POST /notes/{id} -> inserts under the caller's id; the store decides if it is usable.
pub async fn create_note_with_id(
    State(state): State<NotesState>,
    Path(custom_id): Path<String>,
    NoteBody(fields): NoteBody,
) -> Result<(StatusCode, Json<Note>), NotesError> {
    let note = state.storage.insert_with_id(&custom_id, fields).await?;
    info!(id = note.id, "note created with custom id");
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes
pub async fn list_notes(State(state): State<NotesState>) -> Result<Json<Vec<Note>>, NotesError> {
    let notes = state.storage.list().await?;
    debug!(count = notes.len(), "listed notes");
    Ok(Json(notes))
}

/// PUT /notes/{id} -> full replace of title, description and priority.
pub async fn update_note(
    State(state): State<NotesState>,
    NoteId(id): NoteId,
    NoteBody(fields): NoteBody,
) -> Result<Json<StatusEnvelope>, NotesError> {
    let changed = state.storage.update_by_id(id, fields).await?;
    if changed == 0 {
        debug!(id, "update matched no note");
        return Err(NotesError::NotFound(id.to_string()));
    }
    info!(id, "note updated");
    Ok(Json(StatusEnvelope::new(StatusCode::OK, "Nota modificada")))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<NotesState>,
    NoteId(id): NoteId,
) -> Result<Json<StatusEnvelope>, NotesError> {
    let changed = state.storage.delete_by_id(id).await?;
    if changed == 0 {
        debug!(id, "delete matched no note");
        return Err(NotesError::NotFound(id.to_string()));
    }
    info!(id, "note deleted");
    Ok(Json(StatusEnvelope::new(StatusCode::OK, "Nota eliminada")))
}

/// DELETE /notes -> removes every row but keeps the id counter.
pub async fn delete_all_notes(
    State(state): State<NotesState>,
) -> Result<Json<StatusEnvelope>, NotesError> {
    let removed = state.storage.delete_all().await?;
    info!(removed, "all notes deleted");
    Ok(Json(StatusEnvelope::new(StatusCode::OK, "Notas eliminadas")))
}

/// DELETE /reset-notes -> removes every row and rewinds the id counter.
pub async fn reset_notes(
    State(state): State<NotesState>,
) -> Result<Json<StatusEnvelope>, NotesError> {
    state.storage.reset().await?;
    info!("notes reset");
    Ok(Json(StatusEnvelope::new(
        StatusCode::OK,
        "Primary key reiniciada y notas eliminadas",
    )))
}
