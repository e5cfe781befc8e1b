//! Database-backed tests run against a throwaway SQLite file migrated with
//! the real migrator, so no external server is needed.
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;

use crate::db::{connect_and_migrate, DatabaseConfig};




pub struct TestDb {
    pub db: DatabaseConnection,
    _file: NamedTempFile,
}

/// Fresh, migrated database. A single pooled connection keeps SQLite writers serialized.
pub async fn setup_test_db() -> anyhow::Result<TestDb> {
    let file = NamedTempFile::new()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", file.path().display()),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_and_migrate(&cfg).await?;
    Ok(TestDb { db, _file: file })
}

pub fn sample(title: &str) -> crate::product::NewProduct {
    crate::product::NewProduct {
        title: title.to_string(),
        price: Some(35.0),
        description: Some(format!("{title} description")),
        slug: None,
        stock: Some(5),
        sizes: vec!["S".into(), "M".into()],
        gender: "unisex".into(),
        tags: vec!["shirt".into()],
    }
}
