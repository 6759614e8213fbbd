//! Core data models for spendbook

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod state;
pub mod transaction;

pub use budget::{Budget, BudgetDraft, BudgetPeriod, BudgetValidationError};
pub use category::{Category, CategoryValidationError};
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use ids::{BudgetId, CategoryId, ExpenseId, TransactionId};
pub use money::Money;
pub use state::AppState;
pub use transaction::{Balance, Transaction, TransactionKind};
