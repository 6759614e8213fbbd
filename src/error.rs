//! Custom error types for spendbook
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendbook operations
#[derive(Error, Debug)]
pub enum SpendbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Local storage errors (file I/O, JSON corruption)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote persistence failures that the local fallback could not absorb
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendbookError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Convenience alias for Results with SpendbookError
pub type SpendbookResult<T> = Result<T, SpendbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helpers() {
        let err = SpendbookError::expense_not_found("exp-1234");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Expense not found: exp-1234");

        let err = SpendbookError::category_not_found("Food");
        assert_eq!(err.to_string(), "Category not found: Food");
    }

    #[test]
    fn test_duplicate_display() {
        let err = SpendbookError::Duplicate {
            entity_type: "Category",
            identifier: "Food".into(),
        };
        assert_eq!(err.to_string(), "Category already exists: Food");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_display() {
        let err = SpendbookError::Validation("amount must be positive".into());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
    }
}
