/*!
 * # transtore - a key-text translation store
 *
 * A Rust library that keeps source texts, languages, and per-language
 * translations in a small SQLite schema and answers lookups with a
 * single join query.
 *
 * ## Features
 *
 * - Idempotent schema creation on first open
 * - Validated inserts for languages, texts, and translations
 * - Case-insensitive, wildcard-capable `translate` lookup with a
 *   by-value miss sentinel
 * - Denormalized listings with optional id filters, plain or as JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `database`: SQLite persistence
 *   - `database::connection`: store configuration and connection handling
 *   - `database::schema`: table definitions and one-time creation
 *   - `database::repository`: parameterized CRUD and the lookup query
 *   - `database::models`: row records and insert outcomes
 * - `translator`: the stateless lookup facade
 * - `errors`: custom error types for the library
 *
 * ## Concurrency model
 *
 * Every operation is one synchronous, blocking round trip to the store.
 * A facade owns its connection exclusively; callers wanting parallelism
 * should open one facade per worker rather than sharing a single
 * instance across threads.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Public modules
pub mod database;
pub mod errors;
pub mod translator;

// Re-export main types for easier usage
pub use database::{Repository, StoreConfig, StoreConnection, StoreStats};
pub use database::models::{InsertOutcome, LanguageRecord, TextRecord, TranslationRow};
pub use errors::{Result, TranslatorError};
pub use translator::{miss_sentinel, Translator};
