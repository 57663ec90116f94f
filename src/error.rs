//! Error types.
//!
//! Two families live here and they never mix:
//!
//! - [`Error`] — startup and infrastructure failures (reading the dataset,
//!   binding the listener). These stop the process.
//! - [`ApiError`] — request-time failures. Each one becomes an HTTP response
//!   with a `{"detail": "..."}` body and never outlives its request.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// Startup and infrastructure failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Binding the listener or accepting on it failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The quote dataset could not be read, parsed or validated.
    #[error("dataset {}: {source}", .path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },
}

/// Why a dataset was rejected.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unreadable: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record carries an empty `quote` or `author`.
    #[error("record {index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
}

/// A request-time failure, rendered as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    /// Carries the methods the path does answer to, for the `allow` header.
    #[error("Method Not Allowed")]
    MethodNotAllowed(Vec<&'static str>),

    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidArgument(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::MethodNotAllowed(_) => Status::MethodNotAllowed,
            Self::Unprocessable(_) => Status::UnprocessableContent,
        }
    }
}

#[derive(Serialize)]
struct Detail<'a> {
    detail: &'a str,
}

/// Renders `{"detail": message}` with the given status.
pub(crate) fn detail_response(status: Status, message: &str) -> Response {
    // A struct with one string field always serializes.
    let body = serde_json::to_vec(&Detail { detail: message }).unwrap_or_default();
    Response::builder().status(status).json(body)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = detail_response(self.status(), &self.to_string());
        match self {
            Self::MethodNotAllowed(methods) => response.with_header("allow", &methods.join(", ")),
            _ => response,
        }
    }
}
