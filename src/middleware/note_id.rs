use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::NotesError;

/// Validate a path id against `^\d+$` and turn it into a key.
///
/// Digit strings too large for an `i64` cannot name any stored row, so they are
/// reported as not found rather than invalid.
pub fn parse_note_id(raw: &str) -> Result<i64, NotesError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotesError::InvalidId(raw.to_string()));
    }
    raw.parse::<i64>()
        .map_err(|_| NotesError::NotFound(raw.to_string()))
}

/// `{id}` path segment that passed [`parse_note_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteId(pub i64);

impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        parse_note_id(&raw).map(NoteId).map_err(|e| {
            warn!(id = %raw, error = %e, "rejecting note id");
            e.into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_digits() {
        assert_eq!(parse_note_id("0").unwrap(), 0);
        assert_eq!(parse_note_id("42").unwrap(), 42);
        assert_eq!(parse_note_id("007").unwrap(), 7);
    }

    #[test]
    fn rejects_anything_but_digits() {
        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "1a", "١٢"] {
            assert!(
                matches!(parse_note_id(raw), Err(NotesError::InvalidId(_))),
                "{raw:?} should be invalid"
            );
        }
    }

    #[test]
    fn oversized_digits_are_not_found() {
        assert!(matches!(
            parse_note_id("99999999999999999999"),
            Err(NotesError::NotFound(_))
        ));
    }
}
