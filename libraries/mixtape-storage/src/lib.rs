//! Mixtape Storage
//!
//! `SQLite` database layer for Mixtape playlists and their songs.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each entity owns its own queries (`playlists`, `songs`)
//! - **Context**: `LocalStorageContext` implements `mixtape_core::StorageContext`
//!   on top of those slices so the server only sees the trait
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_storage::{LocalStorageContext, create_pool, run_migrations};
//! use mixtape_core::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://mixtape.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let playlists = storage.get_all_playlists().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlists;
pub mod songs;

pub use context::LocalStorageContext;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://mixtape.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    create_pool_with(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Default upper bound on pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a new `SQLite` pool with an explicit connection limit
pub async fn create_pool_with(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, max_connections, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true) // songs cascade with their playlist
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    Ok(pool)
}
