//! Category model
//!
//! Categories are referenced by name from expenses and budgets. Consumers
//! rendering a dangling reference fall back to [`Category::FALLBACK_COLOR`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// An expense category with a display color hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique within a state blob)
    pub name: String,

    /// Display color, as a `#rrggbb` hex string
    pub color: String,
}

impl Category {
    /// Neutral gray used when an expense or budget references a category
    /// that no longer exists
    pub const FALLBACK_COLOR: &'static str = "#6B7280";

    /// Create a new category
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// The categories a fresh state blob is seeded with
    pub fn default_set() -> Vec<Category> {
        vec![
            Category::new("Food", "#EF4444"),
            Category::new("Transportation", "#3B82F6"),
            Category::new("Entertainment", "#F59E0B"),
            Category::new("Housing", "#10B981"),
            Category::new("Utilities", "#8B5CF6"),
            Category::new("Other", Self::FALLBACK_COLOR),
        ]
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }
        if self.color.trim().is_empty() {
            return Err(CategoryValidationError::EmptyColor);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Resolve the display color for a category name, case-insensitively,
/// falling back to [`Category::FALLBACK_COLOR`] for dangling references
pub fn color_for<'a>(categories: &'a [Category], name: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.color.as_str())
        .unwrap_or(Category::FALLBACK_COLOR)
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyColor,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::EmptyColor => write!(f, "Category color cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
