use anyhow::{anyhow, Result};
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use std::path::PathBuf;
use tracing::info;

/// File behind a SQLite URL. Accepts `sqlite:path`, `sqlite://path` and
/// `sqlite:///absolute/path`, ignoring any `?options`. In-memory databases
/// have no file and yield `None`, as do non-SQLite URLs.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

#[derive(Clone)]
pub struct DatabaseManager {
    pub pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self> {
        if let Some(parent) = sqlite_file_path(database_url).as_deref().and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating directory {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }

        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Deletes the database file. Returns `false` when there was none.
    pub async fn drop_database(database_url: &str) -> Result<bool> {
        let path = sqlite_file_path(database_url)
            .ok_or_else(|| anyhow!("Reset is only supported for file-backed SQLite databases"))?;

        if !path.exists() {
            return Ok(false);
        }

        Sqlite::drop_database(database_url).await?;
        info!("Dropped database {}", path.display());
        Ok(true)
    }
}
