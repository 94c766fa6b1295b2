use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
}

/// Request body shared by create and update; absent fields are stored as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoteFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
}

impl Note {
    pub fn from_fields(id: i64, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
        }
    }
}
