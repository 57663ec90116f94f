//! The four quote endpoints.
//!
//! Each handler is a single read of the shared [`QuoteStore`]. Failures are
//! [`ApiError`]s and only ever affect the request that produced them.

use std::num::IntErrorKind;
use std::sync::Arc;

use crate::error::ApiError;
use crate::quote::{AuthorCount, Quote};
use crate::request::Request;
use crate::response::Json;
use crate::store::QuoteStore;

const NO_QUOTES: &str = "No quotes available";

/// `GET /random-quotes/{count}`
///
/// `count` quotes sampled without replacement, or the whole store in dataset
/// order when `count` reaches its size.
///
/// Checks run in order: `count` is an integer (422), the store has quotes
/// (404), `count` is positive (400).
pub async fn random_quotes(
    req: Request,
    store: Arc<QuoteStore>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let count = parse_count(req.param("count").unwrap_or_default())?;

    if store.is_empty() {
        return Err(ApiError::NotFound(NO_QUOTES.to_owned()));
    }
    if count <= 0 {
        return Err(ApiError::InvalidArgument("Count must be greater than zero".to_owned()));
    }

    let count = usize::try_from(count).unwrap_or(usize::MAX);
    let picked = store.sample(count, &mut rand::rng());
    Ok(Json(picked.into_iter().cloned().collect()))
}

/// `GET /random-quote`
pub async fn random_quote(_req: Request, store: Arc<QuoteStore>) -> Result<Json<Quote>, ApiError> {
    store
        .choose(&mut rand::rng())
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NO_QUOTES.to_owned()))
}

/// `GET /quotes-by-author/{author_name}`
pub async fn quotes_by_author(
    req: Request,
    store: Arc<QuoteStore>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let author = req.param("author_name").unwrap_or_default();
    let matches = store.by_author(author);

    if matches.is_empty() {
        return Err(ApiError::NotFound(format!("No quotes found for author: {author}")));
    }
    Ok(Json(matches.into_iter().cloned().collect()))
}

/// `GET /authors`
pub async fn authors(_req: Request, store: Arc<QuoteStore>) -> Json<Vec<AuthorCount>> {
    Json(store.author_counts())
}

/// Reads the `count` path segment as an integer.
///
/// Integers outside `i64` saturate: too large still means "more than the
/// store holds", too negative is still not positive.
fn parse_count(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) => Err(ApiError::Unprocessable(format!("count must be an integer, got: {raw}"))),
    }
}
