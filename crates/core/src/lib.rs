//! # Minibank Core
//!
//! Core domain types for the checking-account API: accounts, deposit and
//! withdrawal transactions, statements, and the domain error taxonomy.
//!
//! This crate is infrastructure-free; persistence and HTTP concerns live in
//! `minibank-persistence` and `minibank-api`.

pub mod account;
pub mod error;
pub mod statement;
pub mod transaction;

pub use account::Account;
pub use error::{CoreError, CoreResult};
pub use statement::Statement;
pub use transaction::{Transaction, TransactionKind};
