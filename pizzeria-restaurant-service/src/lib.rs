use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use tracing::info;

pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

pub use error::StoreError;
pub use repository::{DieselRepository, PizzeriaRepository};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Used when neither `DATABASE_URL` nor `DB_URI` is set.
pub const DEFAULT_DATABASE_URL: &str = "app.db";

const SQLALCHEMY_SQLITE_PREFIX: &str = "sqlite:///";

pub fn database_url() -> String {
    resolve_database_url(env::var("DATABASE_URL").ok(), env::var("DB_URI").ok())
}

/// `DATABASE_URL` takes precedence over `DB_URI`. Blank values count as unset.
/// A `sqlite:///path` URI is reduced to `path`.
pub fn resolve_database_url(database_url: Option<String>, db_uri: Option<String>) -> String {
    database_url
        .filter(|url| !url.trim().is_empty())
        .or_else(|| db_uri.filter(|url| !url.trim().is_empty()))
        .map(|url| match url.strip_prefix(SQLALCHEMY_SQLITE_PREFIX) {
            Some(path) => path.to_string(),
            None => url,
        })
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

pub fn establish_connection(database_url: &str) -> Result<SqliteConnection, StoreError> {
    let mut conn = SqliteConnection::establish(database_url)?;
    // SQLite leaves foreign keys off unless asked per connection.
    conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")?;
    Ok(conn)
}

pub fn run_migrations(database_url: &str) -> Result<(), StoreError> {
    let mut conn = establish_connection(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
