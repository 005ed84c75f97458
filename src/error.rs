//! Defines the crate level error type.

/// The errors that may occur at the crate's configuration boundary.
///
/// Classification and aggregation are total functions and never return these;
/// only pattern-table construction and category label parsing do.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A label was used that does not name a category in the fixed taxonomy.
    #[error("\"{0}\" does not name a category in the taxonomy")]
    UnknownCategory(String),

    /// An empty (or all-whitespace) string was used to create a pattern.
    ///
    /// The empty string is a substring of every description, so storing it
    /// would route every transaction to one category ahead of later table
    /// entries.
    #[error("a pattern must contain at least one non-whitespace character")]
    EmptyPattern,

    /// The pattern table document had issues that prevented it from being
    /// parsed.
    #[error("could not parse the pattern table: {0}")]
    InvalidPatternConfig(String),

    /// An error occurred while serializing the pattern table as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),
}
