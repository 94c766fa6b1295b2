use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use tracing::warn;

use crate::db::NoteFields;
use crate::error::NotesError;

/// Note body for create and update.
///
/// A request without a JSON content type, or with an empty body, is read as `{}` so every
/// field is stored as NULL. A JSON body that does not decode into [`NoteFields`] is
/// rejected as [`NotesError::InvalidBody`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteBody(pub NoteFields);

fn is_json_content(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        == Some(true)
}

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = NotesError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content(&req);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| NotesError::InvalidBody(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(NoteBody::default());
        }

        serde_json::from_slice(&bytes).map(NoteBody).map_err(|e| {
            warn!(error = %e, "rejecting note body");
            NotesError::InvalidBody(e.to_string())
        })
    }
}
