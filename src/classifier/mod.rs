//! First-match keyword classification of transaction descriptions.
//!
//! The classifier scans its [PatternTable] in canonical category order and
//! returns the category of the first pattern contained in the normalized
//! description. There is no specificity or length tie-break; table order is
//! the whole contract. Matching is case-insensitive substring containment
//! with no word-boundary requirement, so "dominos" also matches inside
//! "dominoski", an accepted false-positive tradeoff for simplicity.

mod shared;
mod table;

pub use shared::SharedClassifier;
pub use table::PatternTable;

use std::time::Instant;

use crate::{Category, Error, Transaction};

/// Classifies transaction descriptions against a keyword table.
///
/// Each classifier owns its table: construct one per process (or per test)
/// and share it behind a [SharedClassifier] if multiple threads need to
/// extend it at runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classifier {
    table: PatternTable,
}

impl Classifier {
    /// A classifier using the built-in keyword table.
    pub fn new() -> Self {
        Self {
            table: PatternTable::builtin(),
        }
    }

    /// A classifier with no patterns at all.
    ///
    /// Every description classifies as [Category::Others] until patterns are
    /// added. Useful as the base for [Classifier::with_pattern] chains.
    pub fn empty() -> Self {
        Self {
            table: PatternTable::empty(),
        }
    }

    /// A classifier over a custom pattern table, e.g. one loaded with
    /// [PatternTable::from_json_str].
    pub fn with_table(table: PatternTable) -> Self {
        Self { table }
    }

    /// The fixed taxonomy, in canonical order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// A read-only view of the pattern table.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Classify a description into a category.
    ///
    /// The description is trimmed and lowercased, then checked for each
    /// pattern as a substring: categories in canonical order, patterns in
    /// insertion order, first hit wins. Empty or all-whitespace descriptions,
    /// and descriptions no pattern matches, return [Category::Others]. This
    /// function is total; there is no input it fails on.
    pub fn classify(&self, description: &str) -> Category {
        self.first_match(description).unwrap_or(Category::Others)
    }

    /// Classify a description that may be missing entirely.
    ///
    /// `None` returns [Category::Others], mirroring how the apps treat
    /// records whose description field was never set.
    pub fn classify_opt(&self, description: Option<&str>) -> Category {
        match description {
            Some(description) => self.classify(description),
            None => Category::Others,
        }
    }

    /// The category of the first matching pattern, or `None` when the
    /// description is blank or nothing matches.
    fn first_match(&self, description: &str) -> Option<Category> {
        let normalized = description.trim().to_lowercase();

        if normalized.is_empty() {
            return None;
        }

        for (category, patterns) in self.table.iter() {
            for pattern in patterns {
                if normalized.contains(pattern.as_str()) {
                    return Some(category);
                }
            }
        }

        tracing::trace!("no pattern matched description {normalized:?}");
        None
    }

    /// Add a keyword pattern for the category named by `label`.
    ///
    /// This is the string boundary used by the apps' settings screens: the
    /// label arrives as user or persistence-layer input. Returns `false` if
    /// `label` does not name a taxonomy category or `pattern` is blank, and
    /// `true` otherwise, including when the pattern was already present,
    /// since repeating a call leaves the table unchanged.
    pub fn add_pattern(&mut self, label: &str, pattern: &str) -> bool {
        let category = match label.parse::<Category>() {
            Ok(category) => category,
            Err(error) => {
                tracing::debug!("ignoring pattern {pattern:?}: {error}");
                return false;
            }
        };

        match self.table.insert(category, pattern) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!("ignoring pattern for {category}: {error}");
                false
            }
        }
    }

    /// Add a keyword pattern for a category.
    ///
    /// The typed counterpart of [Classifier::add_pattern] for callers that
    /// already hold a [Category]. Idempotent like the string variant.
    ///
    /// # Errors
    /// This function will return an [Error::EmptyPattern] if `pattern` is
    /// blank.
    pub fn insert_pattern(&mut self, category: Category, pattern: &str) -> Result<(), Error> {
        self.table.insert(category, pattern)
    }

    /// Return a classifier extended with one more pattern.
    ///
    /// The pure-functional variant of [Classifier::add_pattern] for building
    /// a classifier as a chain of values. Blank patterns are skipped.
    pub fn with_pattern(mut self, category: Category, pattern: &str) -> Self {
        if let Err(error) = self.table.insert(category, pattern) {
            tracing::debug!("skipping pattern for {category}: {error}");
        }

        self
    }

    /// Classify a batch of transactions.
    ///
    /// Returns one category per transaction, in input order, without mutating
    /// the transactions; callers decide whether to write the assignments
    /// back. Missing descriptions take the same [Category::Others] fallback
    /// as [Classifier::classify_opt].
    pub fn classify_batch(&self, transactions: &[Transaction]) -> BatchOutcome {
        let start_time = Instant::now();

        let mut assignments = Vec::with_capacity(transactions.len());
        let mut matched = 0;

        for transaction in transactions {
            let category = transaction
                .description
                .as_deref()
                .and_then(|description| self.first_match(description));

            if category.is_some() {
                matched += 1;
            }

            assignments.push(category.unwrap_or(Category::Others));
        }

        let fell_back = transactions.len() - matched;
        tracing::info!(
            "classified {} transactions in {:.2}ms: {} matched, {} fell back to {}",
            transactions.len(),
            start_time.elapsed().as_secs_f64() * 1000.0,
            matched,
            fell_back,
            Category::Others,
        );

        BatchOutcome {
            assignments,
            matched,
            fell_back,
        }
    }
}

/// Result of classifying a batch of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// One category per input transaction, in input order.
    pub assignments: Vec<Category>,
    /// Number of descriptions some pattern matched.
    pub matched: usize,
    /// Number of transactions that fell back to [Category::Others] because
    /// their description was missing, blank, or unmatched.
    pub fell_back: usize,
}


#[cfg(test)]
mod add_pattern_tests {
    use crate::{Category, Classifier};

    #[test]
    fn add_pattern_then_classify_round_trips() {
        let mut classifier = Classifier::new();

        assert!(classifier.add_pattern("Groceries", "newstorechain"));
        assert_eq!(
            classifier.classify("Receipt from NewStoreChain #4"),
            Category::Groceries
        );
    }

    #[test]
    fn add_pattern_rejects_unknown_categories() {
        let mut classifier = Classifier::new();
        let before = classifier.table().clone();

        assert!(!classifier.add_pattern("Witchcraft", "wand"));
        assert_eq!(classifier.table(), &before);
    }

    #[test]
    fn add_pattern_rejects_blank_patterns() {
        let mut classifier = Classifier::new();
        let before = classifier.table().clone();

        assert!(!classifier.add_pattern("Groceries", "   "));
        assert_eq!(classifier.table(), &before);
    }

    #[test]
    fn add_pattern_is_idempotent() {
        let mut classifier = Classifier::empty();

        assert!(classifier.add_pattern("Transfers", "wise"));
        let after_first = classifier.table().clone();

        assert!(classifier.add_pattern("Transfers", "wise"));
        assert!(classifier.add_pattern("Transfers", " WISE "));

        assert_eq!(classifier.table(), &after_first);
        assert_eq!(classifier.table().patterns(Category::Transfers), ["wise"]);
    }

    #[test]
    fn add_pattern_accepts_label_case_variants() {
        let mut classifier = Classifier::empty();

        assert!(classifier.add_pattern("food & dining", "tiffin"));
        assert_eq!(classifier.classify("Tiffin service May"), Category::FoodAndDining);
    }
}
