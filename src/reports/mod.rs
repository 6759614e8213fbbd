//! Derived views over the expense list
//!
//! Everything here is pure and stateless: recomputed from the current state
//! on every call, never cached, never persisted.

pub mod budgets;
pub mod summary;

pub use budgets::{budget_usage, BudgetUsage};
pub use summary::{
    filter_by_month, group_by_category, monthly_summary, total_of, CategoryRow, CategoryTotal,
    MonthlySummary,
};
