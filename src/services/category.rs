//! Category registry
//!
//! CRUD over the category list. Deleting a category cascades to every budget
//! referencing it by name; expenses keep their literal category string and
//! render with the fallback color.

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{AppState, Category, CategoryId};

/// Service for category management
pub struct CategoryService<'a> {
    state: &'a mut AppState,
}

impl<'a> CategoryService<'a> {
    /// Create a category service over the given state
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Create a new category
    ///
    /// Names are unique within a state blob (case-insensitive).
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> SpendbookResult<Category> {
        let name = name.into();
        if self.by_name(&name).is_some() {
            return Err(SpendbookError::Duplicate {
                entity_type: "Category",
                identifier: name,
            });
        }

        let category = Category::new(name, color);
        self.state.categories.push(category.clone());
        Ok(category)
    }

    /// Replace an existing category
    ///
    /// Renaming does not rewrite expenses or budgets that reference the old
    /// name; those become dangling references by design.
    pub fn update_category(&mut self, updated: Category) -> SpendbookResult<Category> {
        if let Some(existing) = self.by_name(&updated.name) {
            if existing.id != updated.id {
                return Err(SpendbookError::Duplicate {
                    entity_type: "Category",
                    identifier: updated.name,
                });
            }
        }

        let slot = self
            .state
            .categories
            .iter_mut()
            .find(|c| c.id == updated.id)
            .ok_or_else(|| SpendbookError::category_not_found(updated.id.to_string()))?;

        *slot = updated.clone();
        Ok(updated)
    }

    /// Delete a category and cascade to its budgets
    ///
    /// Every budget whose `category` equals the deleted category's name is
    /// removed. Expenses referencing the name are left untouched.
    pub fn delete_category(&mut self, id: CategoryId) -> SpendbookResult<Category> {
        let position = self
            .state
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SpendbookError::category_not_found(id.to_string()))?;

        let category = self.state.categories.remove(position);
        self.state.budgets.retain(|b| b.category != category.name);
        Ok(category)
    }

    /// Get a category by id
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.state.categories.iter().find(|c| c.id == id)
    }

    /// Get a category by name (case-insensitive)
    pub fn by_name(&self, name: &str) -> Option<&Category> {
        self.state
            .categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// List all categories in insertion order
    pub fn list(&self) -> &[Category] {
        &self.state.categories
    }

    /// Display color for a category name, falling back for dangling references
    pub fn color_of(&self, name: &str) -> &str {
        crate::models::category::color_for(&self.state.categories, name)
    }
}
