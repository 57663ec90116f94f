//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers return anything that implements [`IntoResponse`]: a [`Response`],
//! a [`Json`] value, an [`ApiError`](crate::ApiError), or a `Result` of those.

use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::error::detail_response;
use crate::status::Status;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use quotes_api::{Response, Status};
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("ok");
/// Response::builder()
///     .status(Status::BadRequest)
///     .json(br#"{"detail":"Count must be greater than zero"}"#.to_vec());
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` — `application/json`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::builder().json(body)
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok.into() }
    }

    /// Appends a header to an already built response.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn status_code(&self) -> u16 { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Converts into the `http` response hyper writes to the wire.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(Bytes::from(self.body))).unwrap_or_else(|e| {
            error!("invalid response parts: {e}");
            let mut fallback = http::Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = Status::InternalServerError.into();
            fallback
        })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        self.finish(JSON, body)
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish(TEXT, body.into().into_bytes())
    }

    /// Terminate with no body (e.g. `Status::TemporaryRedirect`).
    pub fn no_body(self) -> Response {
        Response { body: Vec::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: &str, body: Vec<u8>) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

/// A `200 OK` JSON body serialized with serde.
///
/// ```rust
/// use quotes_api::{IntoResponse, Json};
///
/// let res = Json(vec![1, 2, 3]).into_response();
/// assert_eq!(res.body(), b"[1,2,3]");
/// ```
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                error!("failed to serialize response body: {e}");
                detail_response(Status::InternalServerError, "Internal Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_puts_content_type_first() {
        let res = Response::builder()
            .status(Status::NotFound)
            .header("x-request-id", "abc")
            .json(b"{}".to_vec());
        assert_eq!(res.status_code(), 404);
        assert_eq!(res.headers[0], ("content-type".to_owned(), JSON.to_owned()));
        assert_eq!(res.header("X-Request-Id"), Some("abc"));
    }

    #[test]
    fn converts_into_http_response() {
        let res = Response::text("ok").with_header("allow", "GET").into_inner();
        assert_eq!(res.status(), http::StatusCode::OK);
        assert_eq!(res.headers()["content-type"], TEXT);
        assert_eq!(res.headers()["allow"], "GET");
    }

    #[test]
    fn result_picks_the_matching_arm() {
        let ok: Result<Json<u8>, Response> = Ok(Json(7));
        assert_eq!(ok.into_response().body(), b"7");

        let err: Result<Json<u8>, Response> =
            Err(Response::builder().status(Status::BadRequest).text("no"));
        assert_eq!(err.into_response().status_code(), 400);
    }
}
