//! Database schema definitions
//!
//! Row types for sqlx mapping from the SQLite tables. Field names mirror
//! the column names persisted by the API (`contas` / `transacoes`); the
//! conversions below translate rows into the domain types.

use crate::error::PersistenceError;
use chrono::{DateTime, Utc};
use minibank_core::{Account, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row type for the `contas` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AccountRow {
    pub id: i64,
    pub numero: String,
    pub titular: String,
    pub saldo: String, // Decimal stored as TEXT
}

/// Row type for the `transacoes` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: i64,
    pub conta_id: i64,
    pub tipo: String,
    pub valor: String, // Decimal stored as TEXT
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = PersistenceError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let balance = row
            .saldo
            .parse::<Decimal>()
            .map_err(|_| PersistenceError::InvalidDecimal(row.saldo.clone()))?;
        Ok(Account {
            id: row.id,
            number: row.numero,
            holder: row.titular,
            balance,
        })
    }
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = PersistenceError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let kind = TransactionKind::from_str(&row.tipo).ok_or_else(|| {
            PersistenceError::InvalidEnumValue {
                field: "tipo".to_string(),
                value: row.tipo.clone(),
            }
        })?;
        let amount = row
            .valor
            .parse::<Decimal>()
            .map_err(|_| PersistenceError::InvalidDecimal(row.valor.clone()))?;
        Ok(Transaction {
            id: row.id,
            account_id: row.conta_id,
            kind,
            amount,
            description: row.descricao,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_row_conversion() {
        let row = AccountRow {
            id: 1,
            numero: "001".to_string(),
            titular: "Alice".to_string(),
            saldo: "100.50".to_string(),
        };
        let account = Account::try_from(row).unwrap();
        assert_eq!(account.number, "001");
        assert_eq!(account.balance, dec!(100.50));
    }

    #[test]
    fn test_account_row_rejects_bad_decimal() {
        let row = AccountRow {
            id: 1,
            numero: "001".to_string(),
            titular: "Alice".to_string(),
            saldo: "not-a-number".to_string(),
        };
        assert!(Account::try_from(row).is_err());
    }

    #[test]
    fn test_transaction_row_conversion() {
        let row = TransactionRow {
            id: 3,
            conta_id: 1,
            tipo: "saque".to_string(),
            valor: "30".to_string(),
            descricao: None,
            created_at: Utc::now(),
        };
        let tx = Transaction::try_from(row).unwrap();
        assert_eq!(tx.kind, TransactionKind::Withdrawal);
        assert_eq!(tx.amount, dec!(30));
    }

    #[test]
    fn test_transaction_row_rejects_unknown_kind() {
        let row = TransactionRow {
            id: 3,
            conta_id: 1,
            tipo: "pix".to_string(),
            valor: "30".to_string(),
            descricao: None,
            created_at: Utc::now(),
        };
        assert!(Transaction::try_from(row).is_err());
    }
}
