//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler, and every handler sees the same shared application state.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::error::ApiError;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The application router.
///
/// Build it once at startup around the state value `S`; pass it to
/// [`Server::serve`](crate::Server::serve). Registrations chain.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: Arc<S>,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn new(state: S) -> Self {
        Self { routes: HashMap::new(), state: Arc::new(state) }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Shorthand for `on(Method::Get, …)`.
    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Routes one request and produces one response.
    ///
    /// Unknown paths answer `404`; known paths under another method answer
    /// `405` with an `allow` header; a stray or missing trailing slash
    /// answers `307` to the registered path.
    pub async fn call(&self, mut req: Request) -> Response {
        match self.lookup(req.method, &req.path) {
            Some((handler, params)) => {
                req.params = params;
                handler.call(req, Arc::clone(&self.state)).await
            }
            None => self.reject(&req.path),
        }
    }

    /// The response for a path no registered method matched.
    ///
    /// A path that only differs from a route by its trailing slash is
    /// redirected there with `307`, keeping the method.
    pub(crate) fn reject(&self, path: &str) -> Response {
        let allowed = self.allowed_methods(path);
        if !allowed.is_empty() {
            return ApiError::MethodNotAllowed(allowed).into_response();
        }

        let toggled = match path.strip_suffix('/') {
            Some(trimmed) => trimmed.to_owned(),
            None => format!("{path}/"),
        };
        if !toggled.is_empty() && !self.allowed_methods(&toggled).is_empty() {
            return Response::builder()
                .status(Status::TemporaryRedirect)
                .header("location", &toggled)
                .no_body();
        }

        ApiError::NotFound("Not Found".to_owned()).into_response()
    }

    fn allowed_methods(&self, path: &str) -> Vec<&'static str> {
        Method::ALL
            .into_iter()
            .filter(|m| self.routes.get(m).is_some_and(|tree| tree.at(path).is_ok()))
            .map(Method::as_str)
            .collect()
    }

    fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), percent_decode(v).into_owned()))
            .collect();
        Some((handler, params))
    }
}

/// Decodes `%XX` escapes; a value that does not decode to UTF-8 is kept raw.
fn percent_decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo(req: Request, state: Arc<&'static str>) -> Response {
        let name = req.param("name").unwrap_or("-");
        Response::text(format!("{state}:{name}"))
    }

    fn router() -> Router<&'static str> {
        Router::new("state").get("/echo/{name}", echo)
    }

    #[tokio::test]
    async fn matches_and_decodes_params() {
        let res = router().call(Request::new(Method::Get, "/echo/Mark%20Twain")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"state:Mark Twain");
    }

    #[tokio::test]
    async fn undecodable_params_pass_through_raw() {
        let res = router().call(Request::new(Method::Get, "/echo/%FF")).await;
        assert_eq!(res.body(), b"state:%FF");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let res = router().call(Request::new(Method::Get, "/nope")).await;
        assert_eq!(res.status_code(), 404);
        assert_eq!(res.body(), br#"{"detail":"Not Found"}"#);
    }

    #[tokio::test]
    async fn wrong_method_is_not_allowed() {
        let res = router().call(Request::new(Method::Post, "/echo/x")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET"));
    }

    #[tokio::test]
    async fn trailing_slash_redirects_to_the_route() {
        let router = router().get("/list", echo);

        let res = router.call(Request::new(Method::Get, "/list/")).await;
        assert_eq!(res.status_code(), 307);
        assert_eq!(res.header("location"), Some("/list"));
        assert!(res.body().is_empty());

        let res = router.call(Request::new(Method::Get, "/echo/x/")).await;
        assert_eq!(res.status_code(), 307);
        assert_eq!(res.header("location"), Some("/echo/x"));

        let res = router.call(Request::new(Method::Get, "/")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = router().get("/echo/{other}", echo);
    }
}
