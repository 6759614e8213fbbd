//! Transaction log and running balance
//!
//! Transactions are immutable, append-only entries kept newest-first.
//! `Balance.total` is maintained incrementally; [`Balance::replay_total`]
//! recomputes it from the log so drift introduced by expense update/delete
//! (which adjust the total without logging) can be measured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a balance-affecting entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds added to the balance
    Credit,
    /// Funds removed from the balance
    Debit,
}

/// One immutable entry in the balance log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Credit or debit
    pub kind: TransactionKind,

    /// Amount moved (positive)
    pub amount: Money,

    /// When the entry was recorded
    pub date: DateTime<Utc>,

    /// Human-readable description
    pub description: String,
}

impl Transaction {
    /// A credit entry dated now
    pub fn credit(amount: Money, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Credit,
            amount,
            date: Utc::now(),
            description: description.into(),
        }
    }

    /// A debit entry with an explicit timestamp
    pub fn debit_at(amount: Money, date: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Debit,
            amount,
            date,
            description: description.into(),
        }
    }

    /// Amount with the sign this entry applies to the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TransactionKind::Credit => "+",
            TransactionKind::Debit => "-",
        };
        write!(f, "{} {}{} {}", self.date.date_naive(), sign, self.amount, self.description)
    }
}

/// Running balance: a signed total plus its newest-first transaction log
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Balance {
    /// Current total (signed; may go negative)
    pub total: Money,

    /// Log entries, newest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Balance {
    /// Record an entry: prepend to the log and apply its signed amount
    pub fn record(&mut self, transaction: Transaction) {
        self.total += transaction.signed_amount();
        self.transactions.insert(0, transaction);
    }

    /// Apply a signed delta to the total without logging an entry
    ///
    /// Used by expense update/delete, which intentionally do not append
    /// transactions.
    pub fn adjust(&mut self, delta: Money) {
        self.total += delta;
    }

    /// Recompute the total from the log (credits minus debits)
    ///
    /// Equals `total` as long as only `record` has mutated the balance.
    pub fn replay_total(&self) -> Money {
        self.transactions.iter().map(|t| t.signed_amount()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_credit_and_debit() {
        let mut balance = Balance::default();

        balance.record(Transaction::credit(Money::from_units(1000), "top up"));
        assert_eq!(balance.total, Money::from_units(1000));

        balance.record(Transaction::debit_at(
            Money::from_units(200),
            Utc::now(),
            "lunch",
        ));
        assert_eq!(balance.total, Money::from_units(800));

        // newest first
        assert_eq!(balance.transactions[0].description, "lunch");
        assert_eq!(balance.transactions[1].description, "top up");
    }

    #[test]
    fn test_replay_matches_recorded_total() {
        let mut balance = Balance::default();
        balance.record(Transaction::credit(Money::from_units(500), "a"));
        balance.record(Transaction::debit_at(Money::from_units(120), Utc::now(), "b"));
        balance.record(Transaction::debit_at(Money::from_units(80), Utc::now(), "c"));

        assert_eq!(balance.replay_total(), balance.total);
        assert_eq!(balance.total, Money::from_units(300));
    }

    #[test]
    fn test_adjust_skips_log() {
        let mut balance = Balance::default();
        balance.record(Transaction::credit(Money::from_units(100), "a"));

        balance.adjust(Money::from_units(-30));
        assert_eq!(balance.total, Money::from_units(70));
        assert_eq!(balance.transactions.len(), 1);

        // replay no longer matches once adjust has been used
        assert_ne!(balance.replay_total(), balance.total);
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Debit).unwrap(),
            "\"debit\""
        );
        let back: TransactionKind = serde_json::from_str("\"credit\"").unwrap();
        assert_eq!(back, TransactionKind::Credit);
    }
}
