/*!
 * Database module for persistent storage of translations.
 *
 * This module provides SQLite-based persistence for:
 * - Languages, source texts, and per-language translations
 * - The join-based lookup behind `Translator::translate`
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::{StoreConfig, StoreConnection, StoreStats};
pub use repository::Repository;
