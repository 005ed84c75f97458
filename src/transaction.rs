//! Defines the transaction record consumed from the persistence layer.

use serde::{Deserialize, Serialize};
use time::Date;

/// An expense or income, i.e. an event where money was either spent or
/// earned, as stored by the apps' document database.
///
/// The documents are loosely structured and any field may be missing, so
/// every field is optional and deserialization never fails on incomplete
/// records. The classifier and aggregator treat missing fields as "fall back"
/// signals rather than errors: a missing description classifies as
/// [crate::Category::Others] and a missing amount contributes zero.
///
/// This crate never mutates transactions; callers assign the categories the
/// classifier returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// A text description of what the transaction was for, e.g.
    /// "Dominos order #4821" or "UPI/PAYTM/groceries".
    #[serde(default)]
    pub description: Option<String>,

    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values represent income/credits, negative values represent
    /// expenses/debits.
    #[serde(default)]
    pub amount: Option<f64>,

    /// The display label of the category the transaction belongs to, if one
    /// has been assigned, e.g. "Groceries".
    ///
    /// Stored as a label rather than a [crate::Category] because the
    /// persistence layer may hold labels written by older app versions;
    /// unrecognized labels aggregate under [crate::Category::Others].
    #[serde(default)]
    pub category: Option<String>,

    /// When the transaction happened.
    #[serde(default)]
    pub date: Option<Date>,
}

impl Transaction {
    /// Create a transaction with a description and a signed amount.
    pub fn new(description: &str, amount: f64) -> Self {
        Self {
            description: Some(description.to_owned()),
            amount: Some(amount),
            category: None,
            date: None,
        }
    }

    /// Set the category label for the transaction.
    pub fn category(mut self, label: &str) -> Self {
        self.category = Some(label.to_owned());
        self
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// The absolute amount, treating a missing amount as zero.
    pub fn abs_amount(&self) -> f64 {
        self.amount.unwrap_or(0.0).abs()
    }

    /// Whether this is an expense (negative amount).
    pub fn is_expense(&self) -> bool {
        self.amount.unwrap_or(0.0) < 0.0
    }
}
