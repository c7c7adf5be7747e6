//! Income and expense records.
//!
//! # Invariants
//! - `amount` is stored unsigned; `kind` decides the sign when aggregating.
//! - `date` is Unix epoch milliseconds.

use super::id::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: i64,
}

impl Transaction {
    /// Contribution of this transaction to the balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Income and expense subtotals; `balance = income - expense`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
}

impl LedgerTotals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}
