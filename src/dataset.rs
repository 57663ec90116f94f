//! Startup-time dataset loading.
//!
//! The dataset is a JSON array of `{id, quote, author}` records. Any problem
//! with it is fatal: the service does not start on a partial or broken store.

use std::path::Path;

use tracing::info;

use crate::error::{DatasetError, Error};
use crate::quote::Quote;
use crate::store::QuoteStore;

/// Reads and validates the dataset at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<QuoteStore, Error> {
    let path = path.as_ref();
    let wrap = |source: DatasetError| Error::Dataset { path: path.to_path_buf(), source };

    let bytes = std::fs::read(path).map_err(|e| wrap(DatasetError::Read(e)))?;
    let store = parse(&bytes).map_err(wrap)?;

    info!(path = %path.display(), quotes = store.len(), "dataset loaded");
    Ok(store)
}

/// Parses a dataset from raw JSON bytes.
pub fn parse(bytes: &[u8]) -> Result<QuoteStore, DatasetError> {
    let quotes: Vec<Quote> = serde_json::from_slice(bytes)?;

    for (index, q) in quotes.iter().enumerate() {
        if q.quote.is_empty() {
            return Err(DatasetError::EmptyField { index, field: "quote" });
        }
        if q.author.is_empty() {
            return Err(DatasetError::EmptyField { index, field: "author" });
        }
    }

    Ok(QuoteStore::new(quotes))
}
