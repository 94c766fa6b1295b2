//! Database module: models, schema and SQLite access for notes.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: `NotesStorage`, one method per route operation

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Note, NoteFields};
pub use schema::SQLITE_INIT;
pub use sqlite::{NotesStorage, SqlitePool, connect};
