//! # Minibank Business
//!
//! Business logic for the checking-account API:
//!
//! - [`AccountService`] - create and fetch accounts
//! - [`TransactionService`] - the balance-mutation protocol behind deposits
//!   and withdrawals
//! - [`StatementService`] - statement assembly
//!
//! Services are stateless; every operation takes the database pool.

pub mod account;
pub mod error;
pub mod statement;
pub mod transaction;

pub use account::AccountService;
pub use error::{BusinessError, BusinessResult};
pub use statement::StatementService;
pub use transaction::TransactionService;
