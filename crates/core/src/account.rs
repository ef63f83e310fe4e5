//! # Account Module
//!
//! Defines the checking account - a named balance-holding entity identified
//! by a unique account number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A checking account.
///
/// Accounts are created with a zero balance. The balance is mutated only by
/// the transaction service, which refuses withdrawals that would take it
/// below zero. Accounts are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Surrogate key assigned by the database
    pub id: i64,
    /// Unique account number
    pub number: String,
    /// Holder name
    pub holder: String,
    /// Current balance
    pub balance: Decimal,
}

impl Account {
    /// Maximum length of the account number
    pub const MAX_NUMBER_LEN: usize = 20;
    /// Maximum length of the holder name
    pub const MAX_HOLDER_LEN: usize = 100;
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (holder: {}, balance: {})",
            self.number, self.holder, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_display() {
        let account = Account {
            id: 1,
            number: "001".to_string(),
            holder: "Alice".to_string(),
            balance: dec!(70),
        };
        assert_eq!(
            format!("{}", account),
            "Account 001 (holder: Alice, balance: 70)"
        );
    }

    #[test]
    fn test_account_serializes_balance_as_number() {
        let account = Account {
            id: 1,
            number: "001".to_string(),
            holder: "Alice".to_string(),
            balance: dec!(100.50),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json["balance"].is_number());
    }
}
