//! Quote records and their JSON shapes.

use serde::{Deserialize, Serialize};

/// A single quotation.
///
/// Serialized as `{"id": 1, "quote": "...", "author": "..."}`. Unknown
/// fields in the dataset are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier from the dataset. Uniqueness is the dataset's business.
    pub id: i64,
    /// The quotation body.
    pub quote: String,
    /// Attributed author, as written in the dataset.
    pub author: String,
}

/// How many quotes one author has, keyed by the exact author string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub author: String,
    pub quote_count: usize,
}
