//! Budget model
//!
//! A budget caps spending for one category, optionally over a period and
//! with an alert threshold. Nothing ties `amount` to the running balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Recurrence period for a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A per-category spending budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category name this budget applies to
    pub category: String,

    /// Budgeted amount (positive)
    pub amount: Money,

    /// Recurrence period, if any
    #[serde(default)]
    pub period: Option<BudgetPeriod>,

    /// Percentage of `amount` at which consumers should warn (0-100)
    #[serde(default)]
    pub alert_threshold: Option<u8>,
}

/// Input for creating a budget; the registry assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDraft {
    pub category: String,
    pub amount: Money,
    #[serde(default)]
    pub period: Option<BudgetPeriod>,
    #[serde(default)]
    pub alert_threshold: Option<u8>,
}

impl BudgetDraft {
    /// Validate draft input at the presentation boundary
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }
        if let Some(threshold) = self.alert_threshold {
            if threshold > 100 {
                return Err(BudgetValidationError::ThresholdOutOfRange(threshold));
            }
        }
        Ok(())
    }
}

impl Budget {
    /// Materialize a draft with a fresh id
    pub fn from_draft(draft: BudgetDraft) -> Self {
        Self {
            id: BudgetId::new(),
            category: draft.category,
            amount: draft.amount,
            period: draft.period,
            alert_threshold: draft.alert_threshold,
        }
    }

    /// Validate a full record (same rules as the draft)
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        BudgetDraft {
            category: self.category.clone(),
            amount: self.amount,
            period: self.period,
            alert_threshold: self.alert_threshold,
        }
        .validate()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period {
            Some(period) => write!(f, "{}: {} ({})", self.category, self.amount, period),
            None => write!(f, "{}: {}", self.category, self.amount),
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NonPositiveAmount,
    ThresholdOutOfRange(u8),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Budget amount must be positive"),
            Self::ThresholdOutOfRange(t) => {
                write!(f, "Alert threshold must be 0-100, got {}", t)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
