#![cfg(test)]
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;
use models::db::{connect_and_migrate, DatabaseConfig};

/// Migrated SQLite database that lives as long as this value.
pub struct TestDb {
    pub db: DatabaseConnection,
    _file: NamedTempFile,
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let file = NamedTempFile::new()?;
    // One connection: SQLite allows a single writer and update/seed paths hold transactions.
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", file.path().display()),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout: std::time::Duration::from_secs(10),
        ..DatabaseConfig::default()
    };
    let db = connect_and_migrate(&cfg).await?;
    Ok(TestDb { db, _file: file })
}
