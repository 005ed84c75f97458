//! Per-category aggregation of transaction lists.

use crate::{Category, Transaction};

/// Summary statistics for the transactions in one category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryStats<'a> {
    /// Number of member transactions.
    pub count: usize,

    /// Sum of the absolute amounts of the members.
    ///
    /// Credits and debits both count towards the total; a missing amount
    /// contributes zero.
    pub total_amount: f64,

    /// The member transactions, in input order.
    pub transactions: Vec<&'a Transaction>,
}

/// Per-category statistics over a transaction list.
///
/// Always holds one entry per category in [Category::ALL], in canonical
/// order, even when the input was empty: the dashboard renders every
/// category, matched or not.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown<'a> {
    /// Stats indexed by the category's canonical position.
    entries: Vec<CategoryStats<'a>>,
}

impl<'a> CategoryBreakdown<'a> {
    /// A breakdown with a zeroed entry for every category.
    fn zeroed() -> Self {
        Self {
            entries: Category::ALL.iter().map(|_| CategoryStats::default()).collect(),
        }
    }

    /// The statistics for `category`.
    pub fn get(&self, category: Category) -> &CategoryStats<'a> {
        &self.entries[category.index()]
    }

    /// Iterate `(category, stats)` pairs in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStats<'a>)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of transactions across all categories.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|stats| stats.count).sum()
    }

    /// Total absolute amount across all categories.
    pub fn total_amount(&self) -> f64 {
        self.entries.iter().map(|stats| stats.total_amount).sum()
    }
}

/// Aggregate transactions into per-category statistics.
///
/// Every category starts zeroed before any transaction is processed. Each
/// transaction then lands, in input order, in its [effective_category];
/// amounts accumulate as absolute values in that same order, so the
/// floating-point totals are reproducible for a fixed input sequence. This
/// function is total: malformed records take the fallback paths instead of
/// aborting the aggregation.
pub fn aggregate(transactions: &[Transaction]) -> CategoryBreakdown<'_> {
    let mut breakdown = CategoryBreakdown::zeroed();

    for transaction in transactions {
        let stats = &mut breakdown.entries[effective_category(transaction).index()];

        stats.count += 1;
        stats.total_amount += transaction.abs_amount();
        stats.transactions.push(transaction);
    }

    tracing::debug!(
        "aggregated {} transactions across {} categories",
        transactions.len(),
        Category::ALL.len(),
    );

    breakdown
}

/// The category a transaction counts towards: its stored label when that
/// names a taxonomy category, otherwise [Category::Others].
pub fn effective_category(transaction: &Transaction) -> Category {
    transaction
        .category
        .as_deref()
        .and_then(|label| label.parse().ok())
        .unwrap_or(Category::Others)
}

#[cfg(test)]
mod aggregate_tests {
    use crate::{
        Category, Transaction,
        report::{aggregate, effective_category},
    };

    #[test]
    fn empty_input_yields_a_complete_zeroed_breakdown() {
        let breakdown = aggregate(&[]);

        let entries: Vec<Category> = breakdown.iter().map(|(category, _)| category).collect();
        assert_eq!(entries, Category::ALL);

        for (_, stats) in breakdown.iter() {
            assert_eq!(stats.count, 0);
            assert_eq!(stats.total_amount, 0.0);
            assert!(stats.transactions.is_empty());
        }
    }

    #[test]
    fn totals_sum_absolute_amounts() {
        let transactions = vec![
            Transaction::new("dinner", -250.0).category("Food & Dining"),
            Transaction::new("refund", 100.0).category("Food & Dining"),
        ];

        let breakdown = aggregate(&transactions);
        let stats = breakdown.get(Category::FoodAndDining);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_amount, 350.0);
    }

    #[test]
    fn members_keep_input_order() {
        let transactions = vec![
            Transaction::new("swiggy 1", -100.0).category("Food & Dining"),
            Transaction::new("uber", -80.0).category("Transport"),
            Transaction::new("swiggy 2", -200.0).category("Food & Dining"),
        ];

        let breakdown = aggregate(&transactions);
        let stats = breakdown.get(Category::FoodAndDining);

        assert_eq!(stats.transactions, [&transactions[0], &transactions[2]]);
    }

    #[test]
    fn unrecognized_or_missing_categories_fall_back_to_others() {
        let transactions = vec![
            Transaction::new("old data", -10.0).category("Miscellaneous"),
            Transaction::new("never classified", -20.0),
            Transaction::default(),
        ];

        let breakdown = aggregate(&transactions);
        let stats = breakdown.get(Category::Others);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_amount, 30.0);
    }

    #[test]
    fn missing_amounts_contribute_zero_but_still_count() {
        let mut no_amount = Transaction::new("gift card", 0.0).category("Shopping");
        no_amount.amount = None;
        let transactions = vec![
            no_amount,
            Transaction::new("headphones", -900.0).category("Shopping"),
        ];

        let breakdown = aggregate(&transactions);
        let stats = breakdown.get(Category::Shopping);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_amount, 900.0);
    }

    #[test]
    fn breakdown_totals_cover_all_categories() {
        let transactions = vec![
            Transaction::new("fuel", -500.0).category("Fuel"),
            Transaction::new("salary", 5000.0).category("Transfers"),
            Transaction::new("??", -1.5),
        ];

        let breakdown = aggregate(&transactions);

        assert_eq!(breakdown.total_count(), 3);
        assert_eq!(breakdown.total_amount(), 5501.5);
    }

    #[test]
    fn effective_category_parses_known_labels() {
        let transaction = Transaction::new("x", 0.0).category("groceries");

        assert_eq!(effective_category(&transaction), Category::Groceries);
        assert_eq!(effective_category(&Transaction::default()), Category::Others);
    }
}
