//! # quotes-api
//!
//! A small read-only HTTP service over a static set of quotations.
//!
//! The dataset is read once at startup into a [`QuoteStore`]; the store is
//! handed to the [`Router`] as shared state and never written again. Every
//! request is a single read of it.
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `GET /random-quotes/{count}` | `count` random quotes, or all of them in order | 400 `count <= 0`, 404 empty store, 422 not an integer |
//! | `GET /random-quote` | one random quote | 404 empty store |
//! | `GET /quotes-by-author/{author_name}` | that author's quotes, case-insensitive | 404 no match |
//! | `GET /authors` | `[{author, quote_count}]` by first appearance | — |
//! | `GET /healthz`, `GET /readyz` | probes | — |
//!
//! Errors are JSON: `{"detail": "<message>"}`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use quotes_api::{Server, app, dataset};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), quotes_api::Error> {
//!     let store = dataset::load("quotes.json")?;
//!     let server = Server::bind("127.0.0.1:8000".parse().unwrap()).await?;
//!     server.serve(app(store)).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod quote;
mod request;
mod response;
mod router;
mod server;
mod status;
mod store;

pub mod config;
pub mod dataset;
pub mod handlers;
pub mod health;

pub use error::{ApiError, DatasetError, Error};
pub use handler::Handler;
pub use method::Method;
pub use quote::{AuthorCount, Quote};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::QuoteStore;

/// The service's routing table around `store`.
pub fn app(store: QuoteStore) -> Router<QuoteStore> {
    Router::new(store)
        .get("/random-quotes/{count}",          handlers::random_quotes)
        .get("/random-quote",                   handlers::random_quote)
        .get("/quotes-by-author/{author_name}", handlers::quotes_by_author)
        .get("/authors",                        handlers::authors)
        .get("/healthz",                        health::liveness)
        .get("/readyz",                         health::readiness)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_store() -> QuoteStore {
        dataset::parse(br#"[
            {"id": 1, "quote": "A", "author": "X"},
            {"id": 2, "quote": "B", "author": "Y"},
            {"id": 3, "quote": "C", "author": "X"}
        ]"#)
        .unwrap()
    }

    async fn get(router: &Router<QuoteStore>, path: &str) -> (u16, serde_json::Value) {
        let res = router.call(Request::new(Method::Get, path)).await;
        let body = serde_json::from_slice(res.body()).unwrap_or(serde_json::Value::Null);
        (res.status_code(), body)
    }

    #[tokio::test]
    async fn worked_example() {
        let router = app(example_store());

        let (status, body) = get(&router, "/authors").await;
        assert_eq!(status, 200);
        assert_eq!(
            body,
            serde_json::json!([
                {"author": "X", "quote_count": 2},
                {"author": "Y", "quote_count": 1},
            ])
        );

        let (status, body) = get(&router, "/quotes-by-author/x").await;
        assert_eq!(status, 200);
        assert_eq!(body.as_array().map(Vec::len), Some(2));

        let (status, body) = get(&router, "/random-quotes/5").await;
        assert_eq!(status, 200);
        assert_eq!(body, serde_json::to_value(router.state().all()).unwrap());

        let (status, _) = get(&router, "/random-quotes/0").await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn author_names_are_percent_decoded() {
        let store = dataset::parse(br#"[{"id": 1, "quote": "A", "author": "Mark Twain"}]"#).unwrap();
        let router = app(store);

        let (status, body) = get(&router, "/quotes-by-author/mark%20twain").await;
        assert_eq!(status, 200);
        assert_eq!(body[0]["author"], "Mark Twain");

        let (status, body) = get(&router, "/quotes-by-author/Ann%C3%A9e").await;
        assert_eq!(status, 404);
        assert_eq!(body["detail"], "No quotes found for author: Année");
    }

    #[tokio::test]
    async fn probes() {
        let router = app(example_store());

        let res = router.call(Request::new(Method::Get, "/healthz")).await;
        assert_eq!(res.body(), b"ok");

        let (status, body) = get(&router, "/readyz").await;
        assert_eq!(status, 200);
        assert_eq!(body, serde_json::json!({"status": "ready", "quotes": 3}));
    }

    #[tokio::test]
    async fn unknown_routes_and_methods() {
        let router = app(example_store());

        let (status, body) = get(&router, "/quotes").await;
        assert_eq!(status, 404);
        assert_eq!(body["detail"], "Not Found");

        let res = router.call(Request::new(Method::Delete, "/authors")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET"));
    }
}
