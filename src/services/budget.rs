//! Budget registry
//!
//! CRUD over the budget list, keyed by id. Each budget references a category
//! by name; nothing prevents a budget from referencing a category that no
//! longer exists.

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{AppState, Budget, BudgetDraft, BudgetId};

/// Service for budget management
pub struct BudgetService<'a> {
    state: &'a mut AppState,
}

impl<'a> BudgetService<'a> {
    /// Create a budget service over the given state
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Create a new budget
    pub fn add_budget(&mut self, draft: BudgetDraft) -> Budget {
        let budget = Budget::from_draft(draft);
        self.state.budgets.push(budget.clone());
        budget
    }

    /// Replace an existing budget
    pub fn update_budget(&mut self, updated: Budget) -> SpendbookResult<Budget> {
        let slot = self
            .state
            .budgets
            .iter_mut()
            .find(|b| b.id == updated.id)
            .ok_or_else(|| SpendbookError::budget_not_found(updated.id.to_string()))?;

        *slot = updated.clone();
        Ok(updated)
    }

    /// Delete a budget
    pub fn delete_budget(&mut self, id: BudgetId) -> SpendbookResult<Budget> {
        let position = self
            .state
            .budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| SpendbookError::budget_not_found(id.to_string()))?;

        Ok(self.state.budgets.remove(position))
    }

    /// Get a budget by id
    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.state.budgets.iter().find(|b| b.id == id)
    }

    /// List all budgets in insertion order
    pub fn list(&self) -> &[Budget] {
        &self.state.budgets
    }

    /// All budgets for a category name
    pub fn for_category(&self, name: &str) -> Vec<&Budget> {
        self.state
            .budgets
            .iter()
            .filter(|b| b.category == name)
            .collect()
    }
}
