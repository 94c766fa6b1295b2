use crate::db::models::{Note, NoteFields};
use crate::db::schema::{NOTES_SEQUENCE, SQLITE_INIT, SQLITE_UPGRADE_LEGACY};
use crate::error::{NotesError, StoreAction};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, warn};

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the SQLite database and make sure the schema exists.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<NotesStorage, NotesError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(connect_opts)
        .await?;
    let storage = NotesStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct NotesStorage {
    pool: SqlitePool,
}

impl NotesStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `notes` table, upgrading one left without `AUTOINCREMENT`.
    pub async fn init_schema(&self) -> Result<(), NotesError> {
        let existing: Option<String> = sqlx::query_scalar(
            "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'notes'",
        )
        .fetch_optional(&self.pool)
        .await?;

        match existing {
            Some(ddl) if !ddl.to_ascii_uppercase().contains("AUTOINCREMENT") => {
                self.upgrade_legacy_table().await
            }
            _ => {
                sqlx::query(SQLITE_INIT).execute(&self.pool).await?;
                Ok(())
            }
        }
    }

    async fn upgrade_legacy_table(&self) -> Result<(), NotesError> {
        let mut tx = self.pool.begin().await?;
        for stmt in SQLITE_UPGRADE_LEGACY {
            sqlx::query(stmt).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        warn!("upgraded notes table without AUTOINCREMENT; existing ids kept");
        Ok(())
    }

    /// Insert with a store-assigned id.
    pub async fn insert(&self, fields: NoteFields) -> Result<Note, NotesError> {
        let res = sqlx::query("INSERT INTO notes (title, description, priority) VALUES (?, ?, ?)")
            .bind(fields.title.as_deref())
            .bind(fields.description.as_deref())
            .bind(fields.priority)
            .execute(&self.pool)
            .await
            .map_err(NotesError::store(StoreAction::Create))?;
        Ok(Note::from_fields(res.last_insert_rowid(), fields))
    }

    /// Insert with a client-supplied id.
    ///
    /// The id is bound as given; column affinity turns integer text into the key and
    /// anything else is rejected by SQLite, as is a duplicate key.
    pub async fn insert_with_id(
        &self,
        custom_id: &str,
        fields: NoteFields,
    ) -> Result<Note, NotesError> {
        let res = sqlx::query(
            "INSERT INTO notes (id, title, description, priority) VALUES (?, ?, ?, ?)",
        )
        .bind(custom_id)
        .bind(fields.title.as_deref())
        .bind(fields.description.as_deref())
        .bind(fields.priority)
        .execute(&self.pool)
        .await
        .map_err(NotesError::store(StoreAction::Create))?;
        Ok(Note::from_fields(res.last_insert_rowid(), fields))
    }

    pub async fn list(&self) -> Result<Vec<Note>, NotesError> {
        sqlx::query_as::<_, Note>("SELECT id, title, description, priority FROM notes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(NotesError::store(StoreAction::List))
    }

    /// Replace all fields of one note. Returns the number of rows changed.
    pub async fn update_by_id(&self, id: i64, fields: NoteFields) -> Result<u64, NotesError> {
        let res = sqlx::query(
            "UPDATE notes SET title = ?, description = ?, priority = ? WHERE id = ?",
        )
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.priority)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(NotesError::store(StoreAction::Update))?;
        Ok(res.rows_affected())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64, NotesError> {
        let res = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(NotesError::store(StoreAction::Delete))?;
        Ok(res.rows_affected())
    }

    /// Remove every note. The autoincrement counter is left untouched.
    pub async fn delete_all(&self) -> Result<u64, NotesError> {
        let res = sqlx::query("DELETE FROM notes")
            .execute(&self.pool)
            .await
            .map_err(NotesError::store(StoreAction::DeleteAll))?;
        Ok(res.rows_affected())
    }

    /// Remove every note, then rewind the autoincrement counter.
    ///
    /// The counter is only touched once the rows are gone; the first failing step is
    /// returned and the remaining one is skipped.
    pub async fn reset(&self) -> Result<(), NotesError> {
        let cleared = sqlx::query("DELETE FROM notes")
            .execute(&self.pool)
            .await
            .map_err(NotesError::store(StoreAction::ClearRows))?
            .rows_affected();

        sqlx::query("DELETE FROM sqlite_sequence WHERE name = ?")
            .bind(NOTES_SEQUENCE)
            .execute(&self.pool)
            .await
            .map_err(NotesError::store(StoreAction::ResetSequence))?;

        debug!(cleared, "notes table reset");
        Ok(())
    }
}
