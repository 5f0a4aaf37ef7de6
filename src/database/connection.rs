/*!
 * Store connection management.
 *
 * This module handles SQLite connection creation and initialization.
 * Opening a connection also ensures the schema exists, so a
 * successfully constructed `StoreConnection` is always ready for
 * queries; any failure along the way is a fatal initialization error.
 */

use log::{debug, info};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::schema;
use crate::errors::{Result, TranslatorError};

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "transtore.db";

/// Default database directory name under the user's data directory
const DEFAULT_DB_DIRNAME: &str = "transtore";

/// Default per-call busy timeout in milliseconds
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Configuration for opening a translation store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the database file
    pub path: PathBuf,

    /// How long a statement may wait on a locked store before failing,
    /// in milliseconds. This is the only timeout the library enforces.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl StoreConfig {
    /// Configuration for a store at the given path with default timeout.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

/// Default database path under the user's data directory.
///
/// Falls back to a path relative to the working directory when no data
/// directory can be determined.
pub fn default_database_path() -> PathBuf {
    let base_dir = dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."));

    base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME)
}

/// Store connection wrapper with thread-safe access.
///
/// The inner mutex serializes accidental cross-thread use; the
/// supported model remains one connection per worker. The underlying
/// connection is released when the last clone is dropped.
#[derive(Clone)]
pub struct StoreConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl StoreConnection {
    /// Open (or create) the store described by `config` and ensure the
    /// schema exists.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = config.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TranslatorError::Initialization(format!(
                    "failed to create store directory {:?}: {}",
                    parent, e
                ))
            })?;
        }

        info!("Opening translation store at: {:?}", config.path);

        let conn = Connection::open(&config.path).map_err(|e| {
            TranslatorError::Initialization(format!(
                "failed to open store {:?}: {}",
                config.path, e
            ))
        })?;

        // WAL for crash recovery on file-backed stores
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| TranslatorError::Initialization(e.to_string()))?;

        Self::finish_open(conn, config.path.clone(), config.busy_timeout_ms)
    }

    /// Open the store at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(&StoreConfig::default())
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        debug!("Creating in-memory store");

        let conn = Connection::open_in_memory().map_err(|e| {
            TranslatorError::Initialization(format!("failed to create in-memory store: {}", e))
        })?;

        Self::finish_open(conn, PathBuf::from(":memory:"), DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Shared tail of the open paths: pragmas and schema creation.
    fn finish_open(conn: Connection, db_path: PathBuf, busy_timeout_ms: u64) -> Result<Self> {
        conn.busy_timeout(Duration::from_millis(busy_timeout_ms))
            .map_err(|e| TranslatorError::Initialization(e.to_string()))?;

        // Foreign keys are per-connection in SQLite
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|e| TranslatorError::Initialization(e.to_string()))?;

        schema::ensure_schema(&conn)
            .map_err(|e| TranslatorError::Initialization(e.to_string()))?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the database file path.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a store operation with the connection.
    pub fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .connection
            .lock()
            .map_err(|e| TranslatorError::Storage(format!("failed to acquire store lock: {}", e)))?;

        f(&conn)
    }

    /// Execute a mutable store operation with the connection.
    pub fn execute_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self
            .connection
            .lock()
            .map_err(|e| TranslatorError::Storage(format!("failed to acquire store lock: {}", e)))?;

        f(&mut conn)
    }

    /// Get store statistics.
    pub fn stats(&self) -> Result<StoreStats> {
        self.execute(|conn| {
            let language_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM st_langs", [], |row| row.get(0))
                .unwrap_or(0);

            let text_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM st_texts", [], |row| row.get(0))
                .unwrap_or(0);

            let translation_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM st_translations", [], |row| row.get(0))
                .unwrap_or(0);

            // File size only makes sense for file-backed stores
            let file_size = if self.db_path.to_string_lossy() != ":memory:" {
                std::fs::metadata(&self.db_path)
                    .map(|m| m.len())
                    .unwrap_or(0)
            } else {
                0
            };

            Ok(StoreStats {
                language_count,
                text_count,
                translation_count,
                file_size_bytes: file_size,
            })
        })
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    /// Number of languages
    pub language_count: i64,
    /// Number of source texts
    pub text_count: i64,
    /// Number of translations
    pub translation_count: i64,
    /// Database file size in bytes
    pub file_size_bytes: u64,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Languages: {}, Texts: {}, Translations: {}, Size: {} KB",
            self.language_count,
            self.text_count,
            self.translation_count,
            self.file_size_bytes / 1024
        )
    }
}
