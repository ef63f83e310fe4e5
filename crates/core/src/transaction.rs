//! # Transaction Module
//!
//! Defines the transaction record - an immutable deposit or withdrawal tied
//! to one account - and the closed set of transaction kinds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a transaction.
///
/// Persisted and transmitted as the wire strings `deposito` / `saque`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "deposito")]
    Deposit,
    #[serde(rename = "saque")]
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposito",
            TransactionKind::Withdrawal => "saque",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "deposito" => Some(TransactionKind::Deposit),
            "saque" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A deposit or withdrawal applied to an account.
///
/// Append-only: rows are inserted by the transaction service and never
/// updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Surrogate key assigned by the database
    pub id: i64,
    /// Account this transaction belongs to
    pub account_id: i64,
    pub kind: TransactionKind,
    /// Amount moved, always positive regardless of kind
    pub amount: Decimal,
    pub description: Option<String>,
    /// Server-assigned creation time
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Maximum length of the free-form description
    pub const MAX_DESCRIPTION_LEN: usize = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(TransactionKind::Deposit.as_str(), "deposito");
        assert_eq!(TransactionKind::Withdrawal.as_str(), "saque");
        assert_eq!(
            TransactionKind::from_str("deposito"),
            Some(TransactionKind::Deposit)
        );
        assert_eq!(
            TransactionKind::from_str("saque"),
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(TransactionKind::from_str("transferencia"), None);
    }

    #[test]
    fn test_kind_serde_wire_strings() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Deposit).unwrap(),
            "\"deposito\""
        );
        let kind: TransactionKind = serde_json::from_str("\"saque\"").unwrap();
        assert_eq!(kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn test_kind_rejects_unknown_wire_string() {
        assert!(serde_json::from_str::<TransactionKind>("\"pix\"").is_err());
    }
}
