//! # Statement Module
//!
//! Read view combining an account summary, its transaction history and the
//! stored balance at query time.

use crate::account::Account;
use crate::transaction::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank statement for one account.
///
/// `current_balance` is the balance held by the account store at assembly
/// time, never a sum recomputed from the transaction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account: Account,
    /// Transactions ordered most recent first
    pub transactions: Vec<Transaction>,
    pub current_balance: Decimal,
}

impl Statement {
    /// Assemble a statement from the stored account and its transactions.
    pub fn new(account: Account, transactions: Vec<Transaction>) -> Self {
        let current_balance = account.balance;
        Self {
            account,
            transactions,
            current_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_statement_balance_comes_from_account() {
        let account = Account {
            id: 1,
            number: "001".to_string(),
            holder: "Alice".to_string(),
            balance: dec!(70),
        };
        let statement = Statement::new(account, Vec::new());
        assert_eq!(statement.current_balance, dec!(70));
        assert!(statement.transactions.is_empty());
    }
}
