//! # Minibank Persistence
//!
//! SQLite persistence for the checking-account API: the `contas` and
//! `transacoes` tables, their row types, and the repositories that query
//! them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use minibank_persistence::{init_database, AccountRepo};
//!
//! let pool = init_database("sqlite:minibank.db").await?;
//! let row = AccountRepo::get_by_id(&pool, 1).await?;
//! ```

pub mod db;
pub mod error;
pub mod repos;
pub mod schema;

pub use db::{create_schema, init_database};
pub use error::{PersistenceError, PersistenceResult};
pub use repos::{AccountRepo, TransactionRepo};
pub use schema::{AccountRow, TransactionRow};
