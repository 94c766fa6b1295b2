use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

/// Store operation that failed; selects the message reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Create,
    List,
    Update,
    Delete,
    DeleteAll,
    ClearRows,
    ResetSequence,
}

impl StoreAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreAction::Create => "Error al guardar la nota",
            StoreAction::List => "Error al obtener las notas",
            StoreAction::Update => "Error al modificar la nota",
            StoreAction::Delete => "Error al eliminar la nota",
            StoreAction::DeleteAll => "Error al eliminar las notas",
            StoreAction::ClearRows => "Error al reiniciar las notas",
            StoreAction::ResetSequence => "Error al reiniciar la primary key",
        }
    }
}

#[derive(Debug, ThisError)]
pub enum NotesError {
    #[error("invalid note id: {0:?}")]
    InvalidId(String),

    #[error("note {0} not found")]
    NotFound(String),

    #[error("unreadable note body: {0}")]
    InvalidBody(String),

    #[error("Database error during {action:?}: {source}")]
    Store {
        action: StoreAction,
        #[source]
        source: SqlxError,
    },

    /// Failures outside request handling (schema bootstrap, pool setup).
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl NotesError {
    pub fn store(action: StoreAction) -> impl FnOnce(SqlxError) -> Self {
        move |source| NotesError::Store { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            NotesError::InvalidId(_) | NotesError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            NotesError::NotFound(_) => StatusCode::NOT_FOUND,
            NotesError::Store { .. } | NotesError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            NotesError::InvalidId(_) => "ID de nota no válido",
            NotesError::NotFound(_) => "Nota no encontrada",
            NotesError::InvalidBody(_) => "Cuerpo de la nota no válido",
            NotesError::Store { action, source } => {
                error!(action = ?action, error = %source, "note store operation failed");
                action.failure_message()
            }
            NotesError::Database(source) => {
                error!(error = %source, "database error");
                "Error interno de la base de datos"
            }
        };
        (status, Json(StatusEnvelope::new(status, message))).into_response()
    }
}

/// `{status, message}` body returned by mutation routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusEnvelope {
    pub status: u16,
    pub message: String,
}

impl StatusEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn rendered(err: NotesError) -> (StatusCode, StatusEnvelope) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let envelope = serde_json::from_slice(&bytes).expect("envelope json");
        (status, envelope)
    }

    #[tokio::test]
    async fn database_error_renders_spanish_envelope() {
        let (status, envelope) = rendered(NotesError::Database(SqlxError::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            envelope,
            StatusEnvelope::new(status, "Error interno de la base de datos")
        );
    }

    #[tokio::test]
    async fn invalid_body_renders_400_envelope() {
        let (status, envelope) = rendered(NotesError::InvalidBody("eof".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.message, "Cuerpo de la nota no válido");
    }
}
