//! SQL DDL for initializing the notes store.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so the high-water mark lives in
///   `sqlite_sequence` and survives a bulk delete until explicitly reset
/// - `title`, `description`, `priority` all nullable and unconstrained
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NULL,
    description TEXT NULL,
    priority INTEGER NULL
);
"#;

/// Name under which SQLite tracks the `notes` autoincrement counter.
pub const NOTES_SEQUENCE: &str = "notes";

/// Rebuild of a `notes` table created without `AUTOINCREMENT`: rows and ids are kept,
/// and copying them in seeds `sqlite_sequence` with the current high-water mark.
pub const SQLITE_UPGRADE_LEGACY: [&str; 4] = [
    "ALTER TABLE notes RENAME TO notes_legacy",
    SQLITE_INIT,
    "INSERT INTO notes (id, title, description, priority) \
     SELECT id, title, description, priority FROM notes_legacy",
    "DROP TABLE notes_legacy",
];
