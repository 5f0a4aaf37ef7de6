/*!
 * Repository layer for store operations.
 *
 * This module provides a high-level API for all reads and writes
 * against the three-table schema, abstracting away the SQL details.
 * Every public operation is one parameterized statement and one
 * blocking round trip; no transactions span multiple statements.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, OptionalExtension};

use super::connection::{StoreConfig, StoreConnection};
use super::models::{InsertOutcome, LanguageRecord, TextRecord, TranslationRow};
use crate::errors::{Result, TranslatorError};

/// Language names are letters and whitespace only.
static LANGUAGE_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid language name regex"));

/// Repository for translation store operations.
#[derive(Clone)]
pub struct Repository {
    /// Store connection
    db: StoreConnection,
}

impl Repository {
    /// Create a new repository with the given store connection.
    pub fn new(db: StoreConnection) -> Self {
        Self { db }
    }

    /// Open a repository over the store described by `config`.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Ok(Self::new(StoreConnection::open(config)?))
    }

    /// Create a repository with an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(StoreConnection::open_in_memory()?))
    }

    /// The underlying store connection.
    pub fn connection(&self) -> &StoreConnection {
        &self.db
    }

    // =========================================================================
    // Insert Operations
    // =========================================================================

    /// Insert a language.
    ///
    /// The name must contain only letters and whitespace; anything else
    /// is rejected before the store is touched.
    pub fn insert_language(&self, name: &str) -> Result<InsertOutcome> {
        if !LANGUAGE_NAME_REGEX.is_match(name) {
            return Err(TranslatorError::Validation(format!(
                "invalid language name: {:?} (letters and whitespace only)",
                name
            )));
        }

        self.db.execute(|conn| {
            let affected = conn.execute(
                "INSERT INTO st_langs (language) VALUES (?1)",
                params![name],
            )?;

            if affected == 0 {
                return Ok(InsertOutcome::nothing_inserted("language"));
            }

            let id = conn.last_insert_rowid();
            debug!("Inserted language {:?} with id {}", name, id);
            Ok(InsertOutcome::inserted("language", id))
        })
    }

    /// Insert a source text. No content constraint beyond non-null.
    pub fn insert_text(&self, text: &str) -> Result<InsertOutcome> {
        self.db.execute(|conn| {
            let affected =
                conn.execute("INSERT INTO st_texts (text) VALUES (?1)", params![text])?;

            if affected == 0 {
                return Ok(InsertOutcome::nothing_inserted("text"));
            }

            let id = conn.last_insert_rowid();
            debug!("Inserted text with id {}", id);
            Ok(InsertOutcome::inserted("text", id))
        })
    }

    /// Insert a translation for a text/language pair.
    ///
    /// Both ids must be positive; referential validity is left to the
    /// store's foreign keys. At most one translation exists per pair:
    /// inserting again for the same pair replaces the previous one.
    pub fn insert_translation(
        &self,
        translation: &str,
        language_id: i64,
        text_id: i64,
    ) -> Result<InsertOutcome> {
        if language_id <= 0 || text_id <= 0 {
            return Err(TranslatorError::Validation(format!(
                "language id and text id must be positive (got {} and {})",
                language_id, text_id
            )));
        }

        self.db.execute(|conn| {
            let id: Option<i64> = conn
                .query_row(
                    r#"
                    INSERT INTO st_translations (lang_id, text_id, translation)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT(text_id, lang_id) DO UPDATE SET
                        translation = excluded.translation
                    RETURNING id
                    "#,
                    params![language_id, text_id, translation],
                    |row| row.get(0),
                )
                .optional()?;

            match id {
                Some(id) => {
                    debug!(
                        "Stored translation for text {} in language {} (row {})",
                        text_id, language_id, id
                    );
                    Ok(InsertOutcome::inserted("translation", id))
                }
                None => Ok(InsertOutcome::nothing_inserted("translation")),
            }
        })
    }

    // =========================================================================
    // List Operations
    // =========================================================================

    /// List languages, optionally filtered by exact id.
    ///
    /// Ordering is storage-determined; callers must not rely on it.
    pub fn list_languages(&self, id: Option<i64>) -> Result<Vec<LanguageRecord>> {
        self.db.execute(|conn| {
            fn parse_row(row: &rusqlite::Row) -> rusqlite::Result<LanguageRecord> {
                Ok(LanguageRecord {
                    id: row.get(0)?,
                    language: row.get(1)?,
                })
            }

            let languages: Vec<LanguageRecord> = if let Some(id) = id {
                let mut stmt =
                    conn.prepare("SELECT id, language FROM st_langs WHERE id = ?1")?;
                stmt.query_map([id], parse_row)?
                    .filter_map(|r| r.ok())
                    .collect()
            } else {
                let mut stmt = conn.prepare("SELECT id, language FROM st_langs")?;
                stmt.query_map([], parse_row)?
                    .filter_map(|r| r.ok())
                    .collect()
            };

            Ok(languages)
        })
    }

    /// List source texts, optionally filtered by exact id.
    pub fn list_texts(&self, id: Option<i64>) -> Result<Vec<TextRecord>> {
        self.db.execute(|conn| {
            fn parse_row(row: &rusqlite::Row) -> rusqlite::Result<TextRecord> {
                Ok(TextRecord {
                    id: row.get(0)?,
                    text: row.get(1)?,
                })
            }

            let texts: Vec<TextRecord> = if let Some(id) = id {
                let mut stmt = conn.prepare("SELECT id, text FROM st_texts WHERE id = ?1")?;
                stmt.query_map([id], parse_row)?
                    .filter_map(|r| r.ok())
                    .collect()
            } else {
                let mut stmt = conn.prepare("SELECT id, text FROM st_texts")?;
                stmt.query_map([], parse_row)?
                    .filter_map(|r| r.ok())
                    .collect()
            };

            Ok(texts)
        })
    }

    /// List translations denormalized with their language and source
    /// text, optionally filtered by the translation's exact id.
    pub fn list_translations(&self, id: Option<i64>) -> Result<Vec<TranslationRow>> {
        self.db.execute(|conn| {
            fn parse_row(row: &rusqlite::Row) -> rusqlite::Result<TranslationRow> {
                Ok(TranslationRow {
                    id: row.get(0)?,
                    lang: row.get(1)?,
                    text: row.get(2)?,
                    translation: row.get(3)?,
                })
            }

            const BASE_QUERY: &str = r#"
                SELECT tr.id, l.language, t.text, tr.translation
                FROM st_translations tr
                INNER JOIN st_texts t ON tr.text_id = t.id
                INNER JOIN st_langs l ON l.id = tr.lang_id
            "#;

            let translations: Vec<TranslationRow> = if let Some(id) = id {
                let mut stmt =
                    conn.prepare(&format!("{} WHERE tr.id = ?1", BASE_QUERY))?;
                stmt.query_map([id], parse_row)?
                    .filter_map(|r| r.ok())
                    .collect()
            } else {
                let mut stmt = conn.prepare(BASE_QUERY)?;
                stmt.query_map([], parse_row)?
                    .filter_map(|r| r.ok())
                    .collect()
            };

            Ok(translations)
        })
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Find the translation of `text` into `language`.
    ///
    /// The text is matched with SQL `LIKE`, so matching is ASCII
    /// case-insensitive and honors `%`/`_` wildcards embedded by the
    /// caller; the language is matched exactly. When a wildcard matches
    /// several texts the first by insertion order wins.
    pub fn find_translation(&self, text: &str, language: &str) -> Result<Option<String>> {
        self.db.execute(|conn| {
            let result: Option<String> = conn
                .query_row(
                    r#"
                    SELECT tr.translation
                    FROM st_texts t
                    INNER JOIN st_translations tr ON tr.text_id = t.id
                    INNER JOIN st_langs l ON l.id = tr.lang_id
                    WHERE t.text LIKE ?1 AND l.language = ?2
                    ORDER BY t.id, tr.id
                    LIMIT 1
                    "#,
                    params![text, language],
                    |row| row.get(0),
                )
                .optional()?;

            debug!(
                "Lookup for {:?} in {:?}: {}",
                text,
                language,
                if result.is_some() { "hit" } else { "miss" }
            );
            Ok(result)
        })
    }
}
