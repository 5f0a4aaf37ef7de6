/*!
 * Translator facade over the repository.
 *
 * A `Translator` owns one store connection for its lifetime and exposes
 * the full public surface of the library: inserts, listings, and the
 * `translate` lookup. The target language is an explicit parameter of
 * every lookup, so a facade carries no mutable state and is safe to
 * share behind its own serialization (see the crate docs for the
 * concurrency model).
 */

use crate::database::connection::StoreStats;
use crate::database::models::{InsertOutcome, LanguageRecord, TextRecord, TranslationRow};
use crate::database::{Repository, StoreConfig, StoreConnection};
use crate::errors::{Result, TranslatorError};

/// The value `translate` returns when no translation exists.
///
/// A miss is not an error; callers distinguish hit from miss by value.
pub fn miss_sentinel(text: &str) -> String {
    format!("no_translation({})", text)
}

/// Stateless translation lookup facade.
///
/// Construction opens the store and ensures the schema exists; any
/// failure there is fatal and no facade is returned. A successfully
/// constructed facade is always ready for queries. The connection is
/// released when the facade (and any clones) are dropped.
#[derive(Clone)]
pub struct Translator {
    repo: Repository,
}

impl Translator {
    /// Open a translator over the store described by `config`.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            repo: Repository::open(config)?,
        })
    }

    /// Open a translator over the store at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(&StoreConfig::default())
    }

    /// Open a translator over an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            repo: Repository::open_in_memory()?,
        })
    }

    /// Build a translator over an already-open store connection.
    pub fn with_connection(db: StoreConnection) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }

    /// The repository backing this facade.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Translate `text` into `language`.
    ///
    /// The input is trimmed and matched case-insensitively (ASCII);
    /// `%`/`_` wildcards embedded in `text` are honored by the
    /// underlying LIKE match. Returns the stored translation, or the
    /// miss sentinel `no_translation(<text>)` when no row matches. Only
    /// an empty (or whitespace-only) input is an error.
    pub fn translate(&self, text: &str, language: &str) -> Result<String> {
        Ok(self
            .lookup(text, language)?
            .unwrap_or_else(|| miss_sentinel(text)))
    }

    /// Typed variant of [`translate`](Self::translate): `None` on a
    /// miss instead of the sentinel string.
    pub fn lookup(&self, text: &str, language: &str) -> Result<Option<String>> {
        let needle = text.trim();
        if needle.is_empty() {
            return Err(TranslatorError::Validation(
                "cannot translate an empty string".to_string(),
            ));
        }

        self.repo.find_translation(needle, language)
    }

    // =========================================================================
    // Inserts
    // =========================================================================

    /// Insert a language. The name must be letters and whitespace only.
    pub fn add_language(&self, name: &str) -> Result<InsertOutcome> {
        self.repo.insert_language(name)
    }

    /// Insert a source text.
    pub fn add_text(&self, text: &str) -> Result<InsertOutcome> {
        self.repo.insert_text(text)
    }

    /// Insert a translation for the given language and text ids.
    /// Re-inserting for the same pair replaces the stored translation.
    pub fn add_translation(
        &self,
        translation: &str,
        language_id: i64,
        text_id: i64,
    ) -> Result<InsertOutcome> {
        self.repo.insert_translation(translation, language_id, text_id)
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// All languages, or the one with the given id.
    pub fn get_languages(&self, id: Option<i64>) -> Result<Vec<LanguageRecord>> {
        self.repo.list_languages(id)
    }

    /// All source texts, or the one with the given id.
    pub fn get_texts(&self, id: Option<i64>) -> Result<Vec<TextRecord>> {
        self.repo.list_texts(id)
    }

    /// All translations (denormalized with language and text), or the
    /// one with the given id.
    pub fn get_translations(&self, id: Option<i64>) -> Result<Vec<TranslationRow>> {
        self.repo.list_translations(id)
    }

    /// `get_languages` serialized to a JSON array.
    pub fn get_languages_json(&self, id: Option<i64>) -> Result<String> {
        to_json(&self.get_languages(id)?)
    }

    /// `get_texts` serialized to a JSON array.
    pub fn get_texts_json(&self, id: Option<i64>) -> Result<String> {
        to_json(&self.get_texts(id)?)
    }

    /// `get_translations` serialized to a JSON array.
    pub fn get_translations_json(&self, id: Option<i64>) -> Result<String> {
        to_json(&self.get_translations(id)?)
    }

    /// Row counts and file size of the backing store.
    pub fn stats(&self) -> Result<StoreStats> {
        self.repo.connection().stats()
    }
}

fn to_json<T: serde::Serialize>(rows: &T) -> Result<String> {
    serde_json::to_string(rows).map_err(|e| TranslatorError::Storage(e.to_string()))
}
