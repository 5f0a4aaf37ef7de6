/*!
 * Database schema definition and one-time creation.
 *
 * The schema is three tables: `st_langs`, `st_texts`, and
 * `st_translations` (one row per text/language pair). Creation is
 * idempotent: it runs only when the primary table is absent and there
 * is no migration machinery beyond that.
 */

use log::{debug, info};
use rusqlite::Connection;

use crate::errors::Result;

/// Table whose presence marks an initialized store.
pub const PRIMARY_TABLE: &str = "st_texts";

/// Outcome of an `ensure_schema` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The schema was already in place; nothing was touched.
    AlreadyExisted,
    /// The tables were created by this call.
    Created,
}

/// Ensure the three tables exist, creating them if the store is fresh.
pub fn ensure_schema(conn: &Connection) -> Result<SchemaStatus> {
    if primary_table_exists(conn)? {
        debug!("Schema already present, skipping creation");
        return Ok(SchemaStatus::AlreadyExisted);
    }

    info!("Fresh store, creating translation schema");
    create_all_tables(conn)?;
    Ok(SchemaStatus::Created)
}

/// Check for the primary table in the store metadata.
fn primary_table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
        [PRIMARY_TABLE],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Create all three tables with their foreign-key relationships.
///
/// `st_translations` carries a uniqueness constraint on
/// `(text_id, lang_id)`: at most one translation per text and language.
/// Inserts through the repository upsert on that pair, so the latest
/// write wins.
fn create_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS st_langs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            language TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS st_texts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS st_translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lang_id INTEGER NOT NULL REFERENCES st_langs(id),
            text_id INTEGER NOT NULL REFERENCES st_texts(id),
            translation TEXT NOT NULL,
            UNIQUE(text_id, lang_id)
        );

        CREATE INDEX IF NOT EXISTS idx_translations_lang ON st_translations(lang_id);
        "#,
    )?;

    info!("Translation schema created");
    Ok(())
}

/// Drop all tables (for testing purposes only).
#[cfg(test)]
pub fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS st_translations;
        DROP TABLE IF EXISTS st_texts;
        DROP TABLE IF EXISTS st_langs;
        "#,
    )?;
    Ok(())
}
