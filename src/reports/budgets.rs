//! Render-time budget usage
//!
//! Spent/allocated fractions are computed on demand and never persisted.

use crate::models::{Budget, Expense, Money};

/// How much of a budget the given expenses have consumed
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub budget: Budget,
    /// Total spent in the budget's category over the given expenses
    pub spent: Money,
    /// `spent / budget.amount` (0.0 when the amount is zero)
    pub fraction: f64,
    /// Spending reached or passed the budgeted amount
    pub exceeded: bool,
    /// Spending reached the budget's alert threshold, if one is set
    pub alert_triggered: bool,
}

/// Compute usage for every budget over an expense slice
///
/// Callers wanting a periodic view (e.g. this month only) pre-filter the
/// expenses with `reports::filter_by_month`.
pub fn budget_usage(budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetUsage> {
    budgets
        .iter()
        .map(|budget| {
            let spent: Money = expenses
                .iter()
                .filter(|e| e.category == budget.category)
                .map(|e| e.amount)
                .sum();
            let fraction = spent.fraction_of(budget.amount);
            BudgetUsage {
                spent,
                fraction,
                exceeded: spent >= budget.amount,
                alert_triggered: budget
                    .alert_threshold
                    .map(|t| fraction * 100.0 >= f64::from(t))
                    .unwrap_or(false),
                budget: budget.clone(),
            }
        })
        .collect()
}
