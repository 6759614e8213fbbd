//! Session: the root owner of application state
//!
//! One `Session` exists per running app. It loads the blob for the active
//! scope, applies every ledger/registry mutation to in-memory state, and
//! mirrors the whole blob back to the scope after each change. Writes are
//! last-writer-wins; there is no cross-process locking.

use log::debug;

use crate::error::SpendbookResult;
use crate::models::{
    AppState, Budget, BudgetDraft, BudgetId, Category, CategoryId, Expense, ExpenseDraft,
    ExpenseId, Money, Transaction,
};
use crate::storage::{Scope, StoreRouter};

use super::budget::BudgetService;
use super::category::CategoryService;
use super::ledger::LedgerService;

/// A loaded expense-tracking session bound to one persistence scope
pub struct Session {
    state: AppState,
    scope: Scope,
    store: StoreRouter,
}

impl Session {
    /// Open a session for a scope, loading its blob or seeding a fresh one
    pub fn open(store: StoreRouter, scope: Scope) -> SpendbookResult<Self> {
        let state = store.load(&scope)?.unwrap_or_default();
        debug!("session opened for scope {}", scope.key());
        Ok(Self {
            state,
            scope,
            store,
        })
    }

    // === Read accessors ===

    /// The full state blob
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// All recorded expenses, oldest first
    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    /// All categories
    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    /// All budgets
    pub fn budgets(&self) -> &[Budget] {
        &self.state.budgets
    }

    /// The running balance total
    pub fn balance_total(&self) -> Money {
        self.state.balance.total
    }

    /// The transaction log, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.balance.transactions
    }

    /// The display currency code
    pub fn currency(&self) -> &str {
        &self.state.currency
    }

    /// The active persistence scope
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Display color for a category name, with the dangling-reference fallback
    pub fn category_color(&self, name: &str) -> &str {
        crate::models::category::color_for(&self.state.categories, name)
    }

    // === Ledger mutations ===

    /// Record a new expense and persist
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> SpendbookResult<Expense> {
        let expense = LedgerService::new(&mut self.state).add_expense(draft);
        self.persist()?;
        Ok(expense)
    }

    /// Replace an expense and persist
    pub fn update_expense(&mut self, updated: Expense) -> SpendbookResult<Expense> {
        let expense = LedgerService::new(&mut self.state).update_expense(updated)?;
        self.persist()?;
        Ok(expense)
    }

    /// Delete an expense and persist
    pub fn delete_expense(&mut self, id: ExpenseId) -> SpendbookResult<Expense> {
        let expense = LedgerService::new(&mut self.state).delete_expense(id)?;
        self.persist()?;
        Ok(expense)
    }

    /// Add funds to the balance and persist
    pub fn add_funds(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> SpendbookResult<Transaction> {
        let transaction = LedgerService::new(&mut self.state).add_funds(amount, description);
        self.persist()?;
        Ok(transaction)
    }

    // === Registry mutations ===

    /// Create a category and persist
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> SpendbookResult<Category> {
        let category = CategoryService::new(&mut self.state).add_category(name, color)?;
        self.persist()?;
        Ok(category)
    }

    /// Replace a category and persist
    pub fn update_category(&mut self, updated: Category) -> SpendbookResult<Category> {
        let category = CategoryService::new(&mut self.state).update_category(updated)?;
        self.persist()?;
        Ok(category)
    }

    /// Delete a category (cascading to its budgets) and persist
    pub fn delete_category(&mut self, id: CategoryId) -> SpendbookResult<Category> {
        let category = CategoryService::new(&mut self.state).delete_category(id)?;
        self.persist()?;
        Ok(category)
    }

    /// Create a budget and persist
    pub fn add_budget(&mut self, draft: BudgetDraft) -> SpendbookResult<Budget> {
        let budget = BudgetService::new(&mut self.state).add_budget(draft);
        self.persist()?;
        Ok(budget)
    }

    /// Replace a budget and persist
    pub fn update_budget(&mut self, updated: Budget) -> SpendbookResult<Budget> {
        let budget = BudgetService::new(&mut self.state).update_budget(updated)?;
        self.persist()?;
        Ok(budget)
    }

    /// Delete a budget and persist
    pub fn delete_budget(&mut self, id: BudgetId) -> SpendbookResult<Budget> {
        let budget = BudgetService::new(&mut self.state).delete_budget(id)?;
        self.persist()?;
        Ok(budget)
    }

    // === Settings ===

    /// Change the display currency and persist
    pub fn set_currency(&mut self, code: impl Into<String>) -> SpendbookResult<()> {
        self.state.currency = code.into();
        self.persist()
    }

    // === Scope lifecycle ===

    /// Switch to another scope (sign-in/sign-out transition)
    ///
    /// Loads the new scope's blob (or a fresh default); subsequent saves
    /// target the new scope. The old scope keeps whatever was last persisted.
    pub fn switch_scope(&mut self, scope: Scope) -> SpendbookResult<()> {
        let state = self.store.load(&scope)?.unwrap_or_default();
        debug!("scope switched {} -> {}", self.scope.key(), scope.key());
        self.state = state;
        self.scope = scope;
        Ok(())
    }

    /// Reset everything in the active scope to the pristine default
    ///
    /// The default blob is persisted first; in-memory state is only replaced
    /// once the write succeeded, so a failed reset leaves the session
    /// untouched. Confirmation is the presentation layer's responsibility.
    pub fn reset_all(&mut self) -> SpendbookResult<()> {
        let pristine = AppState::default();
        self.store.save(&self.scope, &pristine)?;
        self.state = pristine;
        Ok(())
    }

    fn persist(&self) -> SpendbookResult<()> {
        self.store.save(&self.scope, &self.state)
    }
}
