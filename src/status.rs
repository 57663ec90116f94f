//! HTTP status codes the service answers with.
//!
//! ```rust
//! use quotes_api::{Response, Status};
//!
//! let res = Response::builder()
//!     .status(Status::NotFound)
//!     .json(br#"{"detail":"No quotes available"}"#.to_vec());
//! assert_eq!(res.status_code(), 404);
//! ```

/// The status codes produced by handlers and the router.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200

    // ── 3xx Redirection ───────────────────────────────────────────────────────
    TemporaryRedirect,    // 307

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    NotFound,             // 404
    MethodNotAllowed,     // 405
    UnprocessableContent, // 422

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                   => 200,
            Status::TemporaryRedirect    => 307,
            Status::BadRequest           => 400,
            Status::NotFound             => 404,
            Status::MethodNotAllowed     => 405,
            Status::UnprocessableContent => 422,
            Status::InternalServerError  => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        // Every variant maps to a registered code.
        http::StatusCode::from_u16(s.into()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}
