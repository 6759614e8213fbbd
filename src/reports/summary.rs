//! Aggregation utilities and the single-month summary report

use chrono::Datelike;

use crate::models::category::color_for;
use crate::models::{Category, Expense, Money};

/// One category's summed spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Sum expenses per category name, in first-seen order
pub fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    totals
}

/// Total of all amounts in the list
pub fn total_of(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Expenses whose date falls in the given calendar month
///
/// `month0` is zero-indexed (0 = January, 3 = April), mirroring how the
/// presentation layer's month picker indexes months.
pub fn filter_by_month(expenses: &[Expense], month0: u32, year: i32) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date.month0() == month0 && e.date.year() == year)
        .cloned()
        .collect()
}

/// One row of the monthly report: a category with its resolved color,
/// summed amount and share of the month's total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub color: String,
    pub total: Money,
    /// Fraction of the month's total spending (0.0 - 1.0)
    pub share: f64,
}

/// The single-month report view
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month0: u32,
    pub year: i32,
    pub total: Money,
    /// Rows sorted by amount, largest first
    pub rows: Vec<CategoryRow>,
}

/// Build the report for one calendar month
pub fn monthly_summary(
    expenses: &[Expense],
    categories: &[Category],
    month0: u32,
    year: i32,
) -> MonthlySummary {
    let filtered = filter_by_month(expenses, month0, year);
    let total = total_of(&filtered);

    let mut rows: Vec<CategoryRow> = group_by_category(&filtered)
        .into_iter()
        .map(|t| CategoryRow {
            color: color_for(categories, &t.category).to_string(),
            share: t.total.fraction_of(total),
            category: t.category,
            total: t.total,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    MonthlySummary {
        month0,
        year,
        total,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use chrono::NaiveDate;

    fn expense(amount: i64, category: &str, date: (i32, u32, u32)) -> Expense {
        Expense::from_draft(ExpenseDraft {
            amount: Money::from_units(amount),
            description: "x".into(),
            category: category.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            purpose: "y".into(),
        })
    }

    #[test]
    fn test_group_by_category_first_seen_order() {
        let expenses = vec![
            expense(100, "Food", (2024, 4, 1)),
            expense(50, "Transportation", (2024, 4, 2)),
            expense(25, "Food", (2024, 4, 3)),
        ];

        let grouped = group_by_category(&expenses);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].category, "Food");
        assert_eq!(grouped[0].total, Money::from_units(125));
        assert_eq!(grouped[1].category, "Transportation");
        assert_eq!(grouped[1].total, Money::from_units(50));
    }

    #[test]
    fn test_group_totals_sum_to_total_of() {
        let expenses = vec![
            expense(10, "Food", (2024, 1, 1)),
            expense(20, "Housing", (2024, 2, 2)),
            expense(30, "Food", (2024, 3, 3)),
        ];

        let grouped_sum: Money = group_by_category(&expenses).iter().map(|t| t.total).sum();
        assert_eq!(grouped_sum, total_of(&expenses));
        assert_eq!(total_of(&expenses), Money::from_units(60));
    }

    #[test]
    fn test_total_of_empty() {
        assert!(total_of(&[]).is_zero());
    }

    #[test]
    fn test_filter_by_month_is_zero_indexed() {
        let expenses = vec![
            expense(100, "Food", (2024, 4, 1)),  // April
            expense(200, "Food", (2024, 4, 30)), // April
            expense(300, "Food", (2024, 5, 1)),  // May
            expense(400, "Food", (2023, 4, 15)), // April, wrong year
        ];

        // month0 = 3 selects April
        let april = filter_by_month(&expenses, 3, 2024);
        assert_eq!(april.len(), 2);
        assert!(april.iter().all(|e| e.date.month() == 4 && e.date.year() == 2024));

        assert!(filter_by_month(&expenses, 11, 2024).is_empty());
    }

    #[test]
    fn test_monthly_summary_sorted_with_shares() {
        let categories = Category::default_set();
        let expenses = vec![
            expense(100, "Food", (2024, 4, 1)),
            expense(300, "Housing", (2024, 4, 2)),
            expense(600, "Food", (2024, 3, 2)), // other month, excluded
        ];

        let summary = monthly_summary(&expenses, &categories, 3, 2024);
        assert_eq!(summary.total, Money::from_units(400));
        assert_eq!(summary.rows.len(), 2);

        // largest first
        assert_eq!(summary.rows[0].category, "Housing");
        assert!((summary.rows[0].share - 0.75).abs() < f64::EPSILON);
        assert_eq!(summary.rows[0].color, "#10B981");

        assert_eq!(summary.rows[1].category, "Food");
        assert!((summary.rows[1].share - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monthly_summary_dangling_category_color() {
        let categories = Category::default_set();
        let expenses = vec![expense(10, "Ghost", (2024, 4, 1))];

        let summary = monthly_summary(&expenses, &categories, 3, 2024);
        assert_eq!(summary.rows[0].color, Category::FALLBACK_COLOR);
    }

    #[test]
    fn test_monthly_summary_empty_month() {
        let summary = monthly_summary(&[], &Category::default_set(), 0, 2024);
        assert!(summary.total.is_zero());
        assert!(summary.rows.is_empty());
    }
}
