//! Database initialization
//!
//! Pool construction and idempotent schema creation.

use crate::error::PersistenceResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA_SQL: &str = r#"
    -- Checking accounts
    CREATE TABLE IF NOT EXISTS contas (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        numero  TEXT NOT NULL UNIQUE,
        titular TEXT NOT NULL,
        saldo   TEXT NOT NULL DEFAULT '0'
    );

    -- Deposit/withdrawal records, append-only
    CREATE TABLE IF NOT EXISTS transacoes (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        conta_id   INTEGER NOT NULL,
        tipo       TEXT NOT NULL,
        valor      TEXT NOT NULL,
        descricao  TEXT,
        created_at DATETIME NOT NULL,
        FOREIGN KEY (conta_id) REFERENCES contas(id)
    );

    CREATE INDEX IF NOT EXISTS idx_transacoes_conta_id ON transacoes(conta_id);
"#;

/// Connect to the database, creating the file and schema if missing.
///
/// The pool is capped at a single connection; SQLite serializes writers
/// anyway, and this keeps `sqlite::memory:` usable as a shared database.
pub async fn init_database(database_url: &str) -> PersistenceResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Create the schema if it does not exist yet.
pub async fn create_schema(pool: &SqlitePool) -> PersistenceResult<()> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}
