//! Monthly totals and spending-share statistics.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use time::Date;

use crate::{Category, Transaction, report::effective_category, report::math};

/// Net transaction totals per calendar month.
///
/// Months are keyed by their first day, so all of September's transactions
/// land under September 1st. Transactions without a date are skipped; sums
/// are signed, so income and expenses offset within a month.
pub fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<Date, f64> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        let Some(date) = transaction.date else {
            continue;
        };

        let month = date.replace_day(1).unwrap();
        *totals.entry(month).or_insert(0.0) += transaction.amount.unwrap_or(0.0);
    }

    totals
}

/// The spending share of one category over the reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// The category the expenses belong to.
    pub category: Category,

    /// Total absolute expense amount in the category.
    pub total: f64,

    /// Percentage of all expenses in the window, 0–100.
    pub share_of_total: f64,

    /// Mean expense per month across the months the window covers.
    pub monthly_average: f64,

    /// Number of distinct months among the dated expenses.
    ///
    /// Zero when no expense carried a date; the average above then treats
    /// the whole window as a single month.
    pub months_of_data: usize,
}

/// Expense-only spending shares per category.
///
/// Only debits (negative amounts) count; income never inflates a category's
/// share. Categories without expenses are omitted, and the remaining shares
/// are in canonical category order with percentages that sum to ~100.
pub fn spending_shares(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .collect();

    let total_expenses: f64 = expenses
        .iter()
        .map(|transaction| transaction.abs_amount())
        .sum();

    let months: HashSet<Date> = expenses
        .iter()
        .filter_map(|transaction| transaction.date)
        .map(|date| date.replace_day(1).unwrap())
        .collect();
    let months_of_data = months.len();

    let mut totals = vec![0.0; Category::ALL.len()];
    for transaction in &expenses {
        totals[effective_category(transaction).index()] += transaction.abs_amount();
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let total = totals[category.index()];

            if total == 0.0 {
                return None;
            }

            Some(CategoryShare {
                category,
                total,
                share_of_total: math::percentage(total, total_expenses),
                monthly_average: total / months_of_data.max(1) as f64,
                months_of_data,
            })
        })
        .collect()
}
