//! Repository implementations for SQLite
//!
//! Query functions are generic over the executor so callers can run them
//! against the pool or inside an open database transaction.

use crate::error::{PersistenceError, PersistenceResult};
use crate::schema::{AccountRow, TransactionRow};
use chrono::{DateTime, Utc};
use minibank_core::TransactionKind;
use rust_decimal::Decimal;
use sqlx::SqliteExecutor;

// ============================================================================
// Account Repository
// ============================================================================

/// Repository for the `contas` table
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account with a zero balance, returning its id
    pub async fn insert<'e, E>(executor: E, numero: &str, titular: &str) -> PersistenceResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("INSERT INTO contas (numero, titular, saldo) VALUES (?, ?, '0')")
            .bind(numero)
            .bind(titular)
            .execute(executor)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    PersistenceError::UniqueViolation(format!("contas.numero = {numero}"))
                } else {
                    PersistenceError::Database(e)
                }
            })?;
        Ok(result.last_insert_rowid())
    }

    /// Fetch an account by id
    pub async fn get_by_id<'e, E>(executor: E, id: i64) -> PersistenceResult<AccountRow>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<_, AccountRow>("SELECT * FROM contas WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Account", &id.to_string()))
    }

    /// Overwrite the stored balance of an account
    pub async fn update_saldo<'e, E>(executor: E, id: i64, saldo: Decimal) -> PersistenceResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("UPDATE contas SET saldo = ? WHERE id = ?")
            .bind(saldo.to_string())
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("Account", &id.to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Transaction Repository
// ============================================================================

/// Repository for the `transacoes` table
pub struct TransactionRepo;

impl TransactionRepo {
    /// Append a new transaction record, returning its id
    pub async fn insert<'e, E>(
        executor: E,
        conta_id: i64,
        kind: TransactionKind,
        valor: Decimal,
        descricao: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> PersistenceResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query(
            "INSERT INTO transacoes (conta_id, tipo, valor, descricao, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(conta_id)
        .bind(kind.as_str())
        .bind(valor.to_string())
        .bind(descricao)
        .bind(created_at)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Fetch a transaction by id
    pub async fn get_by_id<'e, E>(executor: E, id: i64) -> PersistenceResult<TransactionRow>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<_, TransactionRow>("SELECT * FROM transacoes WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Transaction", &id.to_string()))
    }

    /// All transactions of an account, most recent first.
    ///
    /// Ties on `created_at` keep insertion order via the ascending id.
    pub async fn get_by_conta<'e, E>(
        executor: E,
        conta_id: i64,
    ) -> PersistenceResult<Vec<TransactionRow>>
    where
        E: SqliteExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, TransactionRow>(
            "SELECT * FROM transacoes WHERE conta_id = ? ORDER BY created_at DESC, id ASC",
        )
        .bind(conta_id)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    /// Number of transactions recorded for an account
    pub async fn count_by_conta<'e, E>(executor: E, conta_id: i64) -> PersistenceResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transacoes WHERE conta_id = ?")
            .bind(conta_id)
            .fetch_one(executor)
            .await?;
        Ok(row.0)
    }
}
