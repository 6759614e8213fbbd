//! The persisted application state
//!
//! One blob per scope, loaded wholesale at session start and written back
//! wholesale after every mutation.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::category::Category;
use super::expense::Expense;
use super::transaction::Balance;

/// Everything a scope persists: expenses, categories, budgets, balance and
/// the display currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub balance: Balance,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for AppState {
    /// The pristine state a new scope starts with: the seed categories,
    /// empty collections, zero balance, INR
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            categories: Category::default_set(),
            budgets: Vec::new(),
            balance: Balance::default(),
            currency: default_currency(),
        }
    }
}
