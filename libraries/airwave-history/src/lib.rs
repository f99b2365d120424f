//! Airwave History
//!
//! `SQLite`-backed storage for the recently-played history, plus an
//! in-memory store for tests and database-free deployments.
//!
//! Both stores enforce the same recency-cache contract:
//!
//! - At most one record per track id: replaying a track removes its old
//!   record and re-inserts at the head with a fresh timestamp
//! - At most [`RETENTION_CAP`] records: the oldest entries are evicted
//! - `list_recent` returns newest first
//!
//! # Example
//!
//! ```rust,no_run
//! use airwave_core::{PlayHistory, TrackSummary};
//! use airwave_history::{create_pool, run_migrations, SqliteHistory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://airwave.db").await?;
//! run_migrations(&pool).await?;
//!
//! let history = SqliteHistory::new(pool);
//! let track = TrackSummary::new("42", "One More Time", "Daft Punk");
//! history.record_play(&track).await?;
//!
//! let recent = history.list_recent(20).await?;
//! println!("{} recent plays", recent.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
pub mod recent;
mod sqlite;

pub use error::StorageError;
pub use memory::MemoryHistory;
pub use sqlite::SqliteHistory;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

/// Maximum number of history records retained
pub const RETENTION_CAP: usize = 20;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at application startup to bring the schema up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g. `sqlite://airwave.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
