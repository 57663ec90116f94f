//! Incoming HTTP request type.

use std::collections::HashMap;

use crate::method::Method;

/// An incoming request as handlers see it: method, path and the decoded
/// path parameters of the matched route. Requests carry no body.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// A request for `path`. Path parameters are filled in by the router.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), params: HashMap::new() }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Returns a named, percent-decoded path parameter.
    ///
    /// For a route `/quotes-by-author/{author_name}`, `req.param("author_name")`
    /// on `/quotes-by-author/Mark%20Twain` returns `Some("Mark Twain")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
