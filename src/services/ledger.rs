//! Ledger service
//!
//! Maintains the expense list and the derived balance. Creating an expense
//! logs a debit; updating or deleting one adjusts the total without logging,
//! so the transaction log stays an audit trail of create/top-up events only.
//!
//! The service trusts its input: positivity and non-empty-field checks are
//! the caller's job (see `ExpenseDraft::validate`), applied before the
//! mutation reaches the ledger.

use chrono::NaiveTime;

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{AppState, Expense, ExpenseDraft, ExpenseId, Money, Transaction};

/// Service for expense and balance management
pub struct LedgerService<'a> {
    state: &'a mut AppState,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger over the given state
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Record a new expense
    ///
    /// Assigns a fresh id, appends to the expense list, logs a debit for the
    /// amount (dated at the expense's calendar date) and decreases the
    /// balance total accordingly.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = Expense::from_draft(draft);

        let logged_at = expense.date.and_time(NaiveTime::MIN).and_utc();
        self.state.balance.record(Transaction::debit_at(
            expense.amount,
            logged_at,
            expense.description.clone(),
        ));

        self.state.expenses.push(expense.clone());
        expense
    }

    /// Replace an existing expense
    ///
    /// The balance total moves by `old.amount - updated.amount`; no
    /// transaction is logged for the adjustment.
    pub fn update_expense(&mut self, updated: Expense) -> SpendbookResult<Expense> {
        let slot = self
            .state
            .expenses
            .iter_mut()
            .find(|e| e.id == updated.id)
            .ok_or_else(|| SpendbookError::expense_not_found(updated.id.to_string()))?;

        let delta = slot.amount - updated.amount;
        *slot = updated.clone();
        self.state.balance.adjust(delta);

        Ok(updated)
    }

    /// Delete an expense, returning the amount to the balance
    ///
    /// No transaction is logged for the refund.
    pub fn delete_expense(&mut self, id: ExpenseId) -> SpendbookResult<Expense> {
        let position = self
            .state
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SpendbookError::expense_not_found(id.to_string()))?;

        let expense = self.state.expenses.remove(position);
        self.state.balance.adjust(expense.amount);
        Ok(expense)
    }

    /// Add funds to the balance, logging a credit dated now
    ///
    /// Caller ensures `amount` is positive.
    pub fn add_funds(&mut self, amount: Money, description: impl Into<String>) -> Transaction {
        let transaction = Transaction::credit(amount, description);
        self.state.balance.record(transaction.clone());
        transaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn draft(amount: i64, category: &str) -> ExpenseDraft {
        ExpenseDraft {
            amount: Money::from_units(amount),
            description: "lunch".into(),
            category: category.into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            purpose: "meal".into(),
        }
    }

    #[test]
    fn test_add_expense_sequence_decreases_balance() {
        let mut state = AppState::default();
        state.balance.adjust(Money::from_units(1000));
        let mut ledger = LedgerService::new(&mut state);

        for amount in [100, 250, 50] {
            ledger.add_expense(draft(amount, "Food"));
        }

        // B0 - sum(amounts)
        assert_eq!(state.balance.total, Money::from_units(600));
        assert_eq!(state.expenses.len(), 3);
        assert_eq!(state.balance.transactions.len(), 3);
    }

    #[test]
    fn test_add_expense_logs_debit() {
        let mut state = AppState::default();
        let mut ledger = LedgerService::new(&mut state);

        ledger.add_expense(draft(200, "Food"));

        let logged = &state.balance.transactions[0];
        assert_eq!(logged.kind, TransactionKind::Debit);
        assert_eq!(logged.amount, Money::from_units(200));
        assert_eq!(logged.description, "lunch");
        assert_eq!(
            logged.date.date_naive(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_update_adjusts_total_without_logging() {
        // scenario from the reconciliation contract: 1000 -> add 200 -> 800,
        // raise to 300 -> 700, log unchanged
        let mut state = AppState::default();
        state.balance.adjust(Money::from_units(1000));
        let mut ledger = LedgerService::new(&mut state);

        let expense = ledger.add_expense(draft(200, "Food"));
        assert_eq!(state.balance.total, Money::from_units(800));
        let log_len = state.balance.transactions.len();

        let mut ledger = LedgerService::new(&mut state);
        let mut updated = expense;
        updated.amount = Money::from_units(300);
        ledger.update_expense(updated).unwrap();

        assert_eq!(state.balance.total, Money::from_units(700));
        assert_eq!(state.balance.transactions.len(), log_len);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut state = AppState::default();
        let mut ledger = LedgerService::new(&mut state);

        let phantom = Expense::from_draft(draft(10, "Food"));
        let err = ledger.update_expense(phantom).unwrap_err();
        assert!(err.is_not_found());
        assert!(state.balance.total.is_zero());
    }

    #[test]
    fn test_delete_then_readd_restores_total() {
        let mut state = AppState::default();
        state.balance.adjust(Money::from_units(1000));
        let mut ledger = LedgerService::new(&mut state);

        let expense = ledger.add_expense(draft(150, "Food"));
        let before_delete = state.balance.total;

        let mut ledger = LedgerService::new(&mut state);
        ledger.delete_expense(expense.id).unwrap();
        assert_eq!(state.balance.total, Money::from_units(1000));

        let mut ledger = LedgerService::new(&mut state);
        ledger.add_expense(draft(150, "Food"));
        assert_eq!(state.balance.total, before_delete);
    }

    #[test]
    fn test_delete_does_not_log() {
        let mut state = AppState::default();
        let mut ledger = LedgerService::new(&mut state);

        let expense = ledger.add_expense(draft(75, "Food"));
        let log_len = state.balance.transactions.len();

        let mut ledger = LedgerService::new(&mut state);
        ledger.delete_expense(expense.id).unwrap();

        assert!(state.expenses.is_empty());
        assert_eq!(state.balance.transactions.len(), log_len);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut state = AppState::default();
        let mut ledger = LedgerService::new(&mut state);

        let err = ledger.delete_expense(ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_funds_logs_credit() {
        let mut state = AppState::default();
        let mut ledger = LedgerService::new(&mut state);

        ledger.add_funds(Money::from_units(1000), "salary");

        assert_eq!(state.balance.total, Money::from_units(1000));
        let logged = &state.balance.transactions[0];
        assert_eq!(logged.kind, TransactionKind::Credit);
        assert_eq!(logged.description, "salary");
    }
}
