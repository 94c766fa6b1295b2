use axum::{
    Router,
    routing::{delete, get},
};

use crate::db::NotesStorage;
use crate::handlers::notes::{
    create_note, create_note_with_id, delete_all_notes, delete_note, list_notes, reset_notes,
    update_note,
};

/// Shared router state: the process-wide store handle, opened once at startup.
#[derive(Clone)]
pub struct NotesState {
    pub storage: NotesStorage,
}

impl NotesState {
    pub fn new(storage: NotesStorage) -> Self {
        Self { storage }
    }
}

pub fn notes_router(state: NotesState) -> Router {
    Router::new()
        .route(
            "/notes",
            get(list_notes).post(create_note).delete(delete_all_notes),
        )
        .route(
            "/notes/{id}",
            delete(delete_note).put(update_note).post(create_note_with_id),
        )
        .route("/reset-notes", delete(reset_notes))
        .with_state(state)
}
