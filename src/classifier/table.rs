//! The keyword table that drives classification.

use std::collections::BTreeMap;

use crate::{Category, Error};

/// Built-in keywords the apps ship with, in canonical category order.
///
/// All entries are lowercase; [PatternTable::builtin] copies them verbatim.
const BUILTIN_PATTERNS: &[(Category, &[&str])] = &[
    (
        Category::Groceries,
        &[
            "bigbasket",
            "blinkit",
            "zepto",
            "dmart",
            "reliance fresh",
            "grocer",
            "supermarket",
            "walmart",
            "aldi",
        ],
    ),
    (
        Category::FoodAndDining,
        &[
            "swiggy",
            "zomato",
            "dominos",
            "mcdonald",
            "kfc",
            "subway",
            "starbucks",
            "pizza",
            "restaurant",
            "cafe",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber", "ola cabs", "rapido", "lyft", "metro", "irctc", "redbus", "parking", "toll",
        ],
    ),
    (
        Category::Fuel,
        &[
            "petrol",
            "diesel",
            "fuel",
            "gas station",
            "indian oil",
            "hpcl",
            "bharat petroleum",
            "shell",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon", "flipkart", "myntra", "ikea", "target", "ebay", "mall",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "netflix",
            "spotify",
            "hotstar",
            "prime video",
            "youtube",
            "bookmyshow",
            "cinema",
            "pvr",
            "steam",
        ],
    ),
    (
        Category::BillsAndUtilities,
        &[
            "electricity",
            "water bill",
            "broadband",
            "airtel",
            "jio",
            "vodafone",
            "recharge",
            "dth",
            "internet bill",
        ],
    ),
    (
        Category::Health,
        &[
            "pharmacy", "apollo", "medplus", "1mg", "netmeds", "hospital", "clinic", "dental",
        ],
    ),
    (
        Category::Travel,
        &[
            "makemytrip",
            "goibibo",
            "oyo",
            "airbnb",
            "hotel",
            "hostel",
            "indigo",
            "booking.com",
        ],
    ),
    (
        Category::Transfers,
        &[
            "upi", "neft", "imps", "rtgs", "transfer", "zelle", "venmo", "paypal", "remit",
        ],
    ),
    // Others intentionally has no patterns; it is the fallback.
];

/// An ordered mapping from every category to its lowercase substring
/// patterns.
///
/// Invariants:
/// - every category in [Category::ALL] has an entry, possibly empty;
/// - patterns keep insertion order within a category;
/// - entries iterate in canonical category order.
///
/// The table is a value owned by its [crate::Classifier] rather than shared
/// module state, so tests and hosts can hold independent tables.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternTable {
    /// Pattern lists indexed by the category's canonical position.
    entries: Vec<Vec<String>>,
}

impl PatternTable {
    /// A table with an empty pattern list for every category.
    pub fn empty() -> Self {
        Self {
            entries: vec![Vec::new(); Category::ALL.len()],
        }
    }

    /// The built-in keyword table the apps ship with.
    pub fn builtin() -> Self {
        let mut table = Self::empty();

        for &(category, patterns) in BUILTIN_PATTERNS {
            for &pattern in patterns {
                table.entries[category.index()].push(pattern.to_owned());
            }
        }

        table
    }

    /// The patterns for `category`, in insertion order.
    pub fn patterns(&self, category: Category) -> &[String] {
        &self.entries[category.index()]
    }

    /// Iterate `(category, patterns)` pairs in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.patterns(category)))
    }

    /// The number of patterns across all categories.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// Whether the table holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    /// Append `pattern` to the list for `category` unless it is already
    /// present.
    ///
    /// The pattern is trimmed and lowercased before the duplicate check, so
    /// `" UPI "` and `"upi"` are the same pattern. Inserting an existing
    /// pattern is a no-op, not an error.
    ///
    /// # Errors
    /// This function will return an [Error::EmptyPattern] if `pattern` is
    /// empty after trimming.
    pub fn insert(&mut self, category: Category, pattern: &str) -> Result<(), Error> {
        let normalized = pattern.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let patterns = &mut self.entries[category.index()];
        if !patterns.contains(&normalized) {
            patterns.push(normalized);
        }

        Ok(())
    }

    /// Parse a table from the `{"label": ["pattern", ...]}` JSON document the
    /// apps persist their keyword table in.
    ///
    /// Categories absent from the document keep empty pattern lists, so the
    /// complete-key-set invariant holds for any input. Pattern order within a
    /// category follows the JSON array; key order in the document is not
    /// significant because scan order always comes from the canonical
    /// category order.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidPatternConfig] if `json` is not a map of string
    ///   lists,
    /// - [Error::UnknownCategory] if a key does not name a taxonomy category,
    /// - [Error::EmptyPattern] if any listed pattern is blank.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|error| Error::InvalidPatternConfig(error.to_string()))?;

        let mut table = Self::empty();

        for (label, value) in document {
            let category = label.parse::<Category>()?;
            let patterns: Vec<String> = serde_json::from_value(value)
                .map_err(|error| Error::InvalidPatternConfig(error.to_string()))?;

            for pattern in patterns {
                table.insert(category, &pattern)?;
            }
        }

        Ok(table)
    }

    /// Serialize the table as the `{"label": ["pattern", ...]}` JSON
    /// document, omitting categories with no patterns.
    ///
    /// # Errors
    /// This function will return an [Error::JsonSerialization] if the table
    /// could not be serialized.
    pub fn to_json_string(&self) -> Result<String, Error> {
        let document: BTreeMap<&str, &[String]> = self
            .iter()
            .filter(|(_, patterns)| !patterns.is_empty())
            .map(|(category, patterns)| (category.label(), patterns))
            .collect();

        serde_json::to_string_pretty(&document)
            .map_err(|error| Error::JsonSerialization(error.to_string()))
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}
