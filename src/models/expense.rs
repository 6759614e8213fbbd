//! Expense model
//!
//! An expense references its category by name, matching the persisted blob
//! schema. Deleting a category leaves the literal string behind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, immutable for the lifetime of the record
    pub id: ExpenseId,

    /// Amount spent (positive)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Category name this expense belongs to
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Why the money was spent
    pub purpose: String,
}

/// Input for creating an expense; the ledger assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub purpose: String,
}

impl ExpenseDraft {
    /// Validate draft input at the presentation boundary
    ///
    /// The ledger itself trusts its input; callers are expected to run this
    /// before invoking a mutation.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.purpose.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyPurpose);
        }
        Ok(())
    }
}

impl Expense {
    /// Materialize a draft with a fresh id
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self {
            id: ExpenseId::new(),
            amount: draft.amount,
            description: draft.description,
            category: draft.category,
            date: draft.date,
            purpose: draft.purpose,
        }
    }

    /// Validate a full record (same rules as the draft)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        self.as_draft().validate()
    }

    fn as_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            amount: self.amount,
            description: self.description.clone(),
            category: self.category.clone(),
            date: self.date,
            purpose: self.purpose.clone(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
    EmptyCategory,
    EmptyPurpose,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::EmptyPurpose => write!(f, "Expense purpose cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
