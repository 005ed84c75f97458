//! This file defines the fixed category taxonomy shared by the expense and
//! fuel tracking apps. A transaction belongs to exactly one category.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A label from the fixed taxonomy that a transaction can be classified into.
///
/// Variant order is the canonical order. It determines the scan order in
/// [crate::Classifier::classify] and the entry order of
/// [crate::report::CategoryBreakdown], and when patterns from two categories
/// match the same description, the earlier category wins. Reordering the
/// variants therefore changes classification results for existing data, so
/// the order is part of the crate's compatibility contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// Supermarkets and grocery delivery.
    #[serde(rename = "Groceries")]
    Groceries,

    /// Restaurants, takeaway, and food delivery.
    #[serde(rename = "Food & Dining")]
    FoodAndDining,

    /// Ride hailing, public transport, parking, and tolls.
    #[serde(rename = "Transport")]
    Transport,

    /// Petrol and diesel fill-ups.
    #[serde(rename = "Fuel")]
    Fuel,

    /// Online and in-store retail.
    #[serde(rename = "Shopping")]
    Shopping,

    /// Streaming, events, and games.
    #[serde(rename = "Entertainment")]
    Entertainment,

    /// Utilities, phone, internet, and other recurring bills.
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,

    /// Pharmacies, clinics, and hospitals.
    #[serde(rename = "Health")]
    Health,

    /// Flights, hotels, and trip bookings.
    #[serde(rename = "Travel")]
    Travel,

    /// Money moved between accounts or people.
    #[serde(rename = "Transfers")]
    Transfers,

    /// The catch-all for transactions no pattern matches.
    ///
    /// Always last in the canonical order and never removed from the
    /// taxonomy: every classification and aggregation falls back to it.
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Category; 11] = [
        Category::Groceries,
        Category::FoodAndDining,
        Category::Transport,
        Category::Fuel,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Health,
        Category::Travel,
        Category::Transfers,
        Category::Others,
    ];

    /// The display label used by the apps and stored by the persistence
    /// layer, e.g. "Food & Dining".
    pub fn label(self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::FoodAndDining => "Food & Dining",
            Category::Transport => "Transport",
            Category::Fuel => "Fuel",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Transfers => "Transfers",
            Category::Others => "Others",
        }
    }

    /// Position of the category in the canonical order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a display label back into a category.
    ///
    /// Matching ignores surrounding whitespace and ASCII case so labels that
    /// round-tripped through user input still resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();

        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::UnknownCategory(label.to_string()))
    }
}

#[cfg(test)]
mod category_tests {
    use crate::{Category, Error};

    #[test]
    fn all_is_in_declaration_order_and_ends_with_others() {
        assert_eq!(Category::ALL.len(), 11);
        assert_eq!(Category::ALL[0], Category::Groceries);
        assert_eq!(Category::ALL[Category::ALL.len() - 1], Category::Others);

        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in Category::ALL {
            let got = category.label().parse::<Category>();

            assert_eq!(got, Ok(category));
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(" groceries ".parse(), Ok(Category::Groceries));
        assert_eq!("FOOD & DINING".parse(), Ok(Category::FoodAndDining));
    }

    #[test]
    fn from_str_fails_on_unknown_label() {
        let got = "Witchcraft".parse::<Category>();

        assert_eq!(got, Err(Error::UnknownCategory("Witchcraft".to_string())));
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Category::BillsAndUtilities).unwrap();

        assert_eq!(json, "\"Bills & Utilities\"");
        assert_eq!(
            serde_json::from_str::<Category>(&json).unwrap(),
            Category::BillsAndUtilities
        );
    }
}
