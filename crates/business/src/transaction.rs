//! Transaction creation - the balance-mutation protocol
//!
//! Deposits and withdrawals go through [`TransactionService::apply`], which
//! validates the request, adjusts the stored balance and appends the
//! transaction record in a single database transaction.

use crate::error::{BusinessError, BusinessResult};
use chrono::Utc;
use minibank_core::{Account, CoreError, Transaction, TransactionKind};
use minibank_persistence::{AccountRepo, PersistenceError, TransactionRepo};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

/// Transaction Service - applies deposits and withdrawals to an account
pub struct TransactionService;

impl TransactionService {
    /// Apply a deposit or withdrawal to an account.
    ///
    /// The amount must be positive; a withdrawal that would take the balance
    /// below zero fails with [`CoreError::InsufficientBalance`]. On success
    /// exactly one account row is updated and one transaction row inserted,
    /// both inside one database transaction; any failure rolls back with no
    /// mutation.
    pub async fn apply(
        pool: &SqlitePool,
        account_id: i64,
        kind: TransactionKind,
        amount: Decimal,
        description: Option<String>,
    ) -> BusinessResult<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount).into());
        }

        let mut tx = pool.begin().await.map_err(PersistenceError::from)?;

        let row = AccountRepo::get_by_id(&mut *tx, account_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    BusinessError::Core(CoreError::AccountNotFound(account_id))
                } else {
                    BusinessError::Persistence(e)
                }
            })?;
        let account = Account::try_from(row)?;

        let new_balance = match kind {
            TransactionKind::Deposit => account.balance + amount,
            TransactionKind::Withdrawal => {
                if account.balance < amount {
                    return Err(CoreError::InsufficientBalance {
                        requested: amount,
                        available: account.balance,
                    }
                    .into());
                }
                account.balance - amount
            }
        };

        AccountRepo::update_saldo(&mut *tx, account_id, new_balance).await?;

        let created_at = Utc::now();
        let transaction_id = TransactionRepo::insert(
            &mut *tx,
            account_id,
            kind,
            amount,
            description.as_deref(),
            created_at,
        )
        .await?;
        let row = TransactionRepo::get_by_id(&mut *tx, transaction_id).await?;

        tx.commit().await.map_err(PersistenceError::from)?;

        tracing::info!(account_id, kind = %kind, amount = %amount, "transaction applied");
        Ok(Transaction::try_from(row)?)
    }
}
