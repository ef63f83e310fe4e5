//! Account operations - create and fetch checking accounts

use crate::error::{BusinessError, BusinessResult};
use minibank_core::{Account, CoreError};
use minibank_persistence::{AccountRepo, PersistenceError};
use sqlx::SqlitePool;

/// Account Service - checking account creation and lookup
pub struct AccountService;

impl AccountService {
    /// Create a new checking account with a zero balance.
    ///
    /// A duplicate account number fails with [`BusinessError::NumberTaken`].
    pub async fn create(pool: &SqlitePool, number: &str, holder: &str) -> BusinessResult<Account> {
        let id = AccountRepo::insert(pool, number, holder)
            .await
            .map_err(|e| match e {
                PersistenceError::UniqueViolation(_) => {
                    BusinessError::NumberTaken(number.to_string())
                }
                other => BusinessError::Persistence(other),
            })?;

        let row = AccountRepo::get_by_id(pool, id).await?;
        let account = Account::try_from(row)?;

        tracing::info!(account_id = id, "account created");
        Ok(account)
    }

    /// Fetch an account by id.
    pub async fn get(pool: &SqlitePool, id: i64) -> BusinessResult<Account> {
        let row = AccountRepo::get_by_id(pool, id).await.map_err(|e| {
            if e.is_not_found() {
                BusinessError::Core(CoreError::AccountNotFound(id))
            } else {
                BusinessError::Persistence(e)
            }
        })?;
        Ok(Account::try_from(row)?)
    }
}
