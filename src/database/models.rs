/*!
 * Database entity models and DTOs.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

/// A language row from `st_langs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Generated row id
    pub id: i64,
    /// Language name, letters and whitespace only on the validated path
    pub language: String,
}

/// A source text row from `st_texts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Generated row id
    pub id: i64,
    /// The source text
    pub text: String,
}

/// A translation row denormalized with its language and source text,
/// as returned by the listing join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRow {
    /// Generated row id of the translation
    pub id: i64,
    /// Language name from `st_langs`
    pub lang: String,
    /// Source text from `st_texts`
    pub text: String,
    /// The translated text
    pub translation: String,
}

/// Structured result of an insert operation.
///
/// `ok: false` reports the "statement ran but affected zero rows" path;
/// statement failures are raised as storage errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    /// Whether a row was inserted
    pub ok: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Generated id of the inserted row, when one was inserted
    pub row_id: Option<i64>,
}

impl InsertOutcome {
    /// Successful insert of the row with the given generated id.
    pub fn inserted(what: &str, row_id: i64) -> Self {
        Self {
            ok: true,
            message: format!("{} inserted successfully", what),
            row_id: Some(row_id),
        }
    }

    /// The statement ran but no row was affected.
    pub fn nothing_inserted(what: &str) -> Self {
        Self {
            ok: false,
            message: format!("error inserting the {}", what),
            row_id: None,
        }
    }
}
