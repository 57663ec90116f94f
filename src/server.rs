//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C (or when the future given to
//! [`Server::serve_with_shutdown`] resolves) the server:
//! 1. Stops calling `listener.accept()`. No new connections are made.
//! 2. Asks every open connection to close once its current request is
//!    answered. Idle keep-alive connections close immediately.
//! 3. Waits for those connections, then returns so `main` can exit.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::method::Method;
use crate::request::Request;
use crate::router::Router;

/// The HTTP server.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listener. Port `0` picks a free port; see [`Server::local_addr`].
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves `router` until SIGTERM or Ctrl-C, then drains.
    pub async fn serve<S>(self, router: Router<S>) -> Result<(), Error>
    where
        S: Send + Sync + 'static,
    {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Serves `router` until `signal` resolves, then drains in-flight
    /// connections before returning.
    pub async fn serve_with_shutdown<S>(
        self,
        router: Router<S>,
        signal: impl Future<Output = ()> + Send,
    ) -> Result<(), Error>
    where
        S: Send + Sync + 'static,
    {
        let addr = self.local_addr()?;
        let router = Arc::new(router);

        info!(%addr, "quotes-api listening");

        // One builder for every connection; HTTP/1.1 or HTTP/2, whichever
        // the client speaks.
        let builder = ConnBuilder::new(TokioExecutor::new());
        // Tells open connections to wind down once the signal fires: HTTP/1
        // closes after the current request (idle keep-alives at once), HTTP/2
        // sends GOAWAY.
        let graceful = GracefulShutdown::new();
        // Tracks every connection task so shutdown can wait for them.
        let mut tasks = tokio::task::JoinSet::new();

        tokio::pin!(signal);

        loop {
            tokio::select! {
                // Shutdown first, so a signal stops accepting even with a
                // backlog of queued connections.
                biased;

                () = &mut signal => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = self.listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    // Called once per request on the connection.
                    let svc = service_fn(move |req| {
                        let router = Arc::clone(&router);
                        async move { dispatch(router, req).await }
                    });

                    let conn = graceful.watch(builder.serve_connection(io, svc).into_owned());
                    tasks.spawn(async move {
                        if let Err(e) = conn.await {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the set stays small.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        graceful.shutdown().await;
        while tasks.join_next().await.is_some() {}

        info!("quotes-api stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and writes one access-log line.
///
/// Every failure is already a response by this point, so hyper never sees
/// an error.
async fn dispatch<S>(
    router: Arc<Router<S>>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<http_body_util::Full<bytes::Bytes>>, std::convert::Infallible>
where
    S: Send + Sync + 'static,
{
    let started = Instant::now();
    let path = req.uri().path().to_owned();

    let response = match req.method().as_str().parse::<Method>() {
        Ok(method) => router.call(Request::new(method, path.as_str())).await,
        Err(()) => router.reject(&path),
    };

    info!(
        method = %req.method(),
        path = %path,
        status = response.status_code(),
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "request"
    );

    Ok(response.into_inner())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on SIGTERM or SIGINT (Ctrl-C). On Windows only Ctrl-C exists.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
