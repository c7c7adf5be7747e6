//! Transaction transitions and balance aggregation.

use super::is_blank;
use crate::model::finance::{LedgerTotals, Transaction, TransactionType};
use crate::model::id::EntityId;

/// Parses amount text typed by the user.
///
/// Accepts finite numbers greater than zero; everything else is `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Prepends a transaction. Blank descriptions and invalid amounts leave the
/// list unchanged.
pub fn add(
    transactions: &[Transaction],
    description: &str,
    amount_text: &str,
    kind: TransactionType,
    now_millis: i64,
) -> Vec<Transaction> {
    let Some(amount) = parse_amount(amount_text) else {
        return transactions.to_vec();
    };
    if is_blank(description) {
        return transactions.to_vec();
    }

    let mut next = Vec::with_capacity(transactions.len() + 1);
    next.push(Transaction {
        id: EntityId::generate(),
        description: description.to_string(),
        amount,
        kind,
        date: now_millis,
    });
    next.extend_from_slice(transactions);
    next
}

pub fn remove(transactions: &[Transaction], id: &EntityId) -> Vec<Transaction> {
    transactions.iter().filter(|t| &t.id != id).cloned().collect()
}

/// Income minus expenses over every transaction, recomputed from scratch.
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Income and expense subtotals.
pub fn totals(transactions: &[Transaction]) -> LedgerTotals {
    transactions
        .iter()
        .fold(LedgerTotals::default(), |mut totals, t| {
            match t.kind {
                TransactionType::Income => totals.income += t.amount,
                TransactionType::Expense => totals.expense += t.amount,
            }
            totals
        })
}
