//! Statement assembly
//!
//! Composes the account summary, its transaction history (most recent
//! first) and the stored balance at query time.

use crate::account::AccountService;
use crate::error::BusinessResult;
use minibank_core::{Statement, Transaction};
use minibank_persistence::TransactionRepo;
use sqlx::SqlitePool;

/// Statement Service - read view over one account
pub struct StatementService;

impl StatementService {
    /// Build the statement for an account.
    ///
    /// Fails with AccountNotFound if the account does not exist. The balance
    /// reported is the one held by the account store, not a sum over the
    /// transaction list.
    pub async fn build(pool: &SqlitePool, account_id: i64) -> BusinessResult<Statement> {
        let account = AccountService::get(pool, account_id).await?;

        let rows = TransactionRepo::get_by_conta(pool, account_id).await?;
        let transactions = rows
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Statement::new(account, transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BusinessError;
    use crate::transaction::TransactionService;
    use minibank_core::{CoreError, TransactionKind};
    use minibank_persistence::init_database;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_statement_follows_the_account_history() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let account = AccountService::create(&pool, "001", "A").await.unwrap();

        TransactionService::apply(&pool, account.id, TransactionKind::Deposit, dec!(100), None)
            .await
            .unwrap();
        TransactionService::apply(&pool, account.id, TransactionKind::Withdrawal, dec!(30), None)
            .await
            .unwrap();

        // Overdraft attempt must not show up anywhere
        TransactionService::apply(&pool, account.id, TransactionKind::Withdrawal, dec!(1000), None)
            .await
            .unwrap_err();

        let statement = StatementService::build(&pool, account.id).await.unwrap();
        assert_eq!(statement.account.id, account.id);
        assert_eq!(statement.current_balance, dec!(70));
        assert_eq!(statement.transactions.len(), 2);

        // Most recent first: the withdrawal precedes the deposit
        assert_eq!(statement.transactions[0].kind, TransactionKind::Withdrawal);
        assert_eq!(statement.transactions[0].amount, dec!(30));
        assert_eq!(statement.transactions[1].kind, TransactionKind::Deposit);
        assert_eq!(statement.transactions[1].amount, dec!(100));
    }

    #[tokio::test]
    async fn test_statement_for_empty_account() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let account = AccountService::create(&pool, "002", "B").await.unwrap();

        let statement = StatementService::build(&pool, account.id).await.unwrap();
        assert!(statement.transactions.is_empty());
        assert_eq!(statement.current_balance, dec!(0));
    }

    #[tokio::test]
    async fn test_statement_for_missing_account() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let err = StatementService::build(&pool, 99).await.unwrap_err();
        assert!(matches!(
            err,
            BusinessError::Core(CoreError::AccountNotFound(99))
        ));
    }
}
