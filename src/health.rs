//! Liveness and readiness probes.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the service answer queries? |
//!
//! The dataset is loaded before the listener binds, so any process that can
//! answer `/readyz` has its store in place.

use std::sync::Arc;

use serde::Serialize;

use crate::request::Request;
use crate::response::Json;
use crate::store::QuoteStore;

#[derive(Serialize)]
pub struct Readiness {
    status: &'static str,
    quotes: usize,
}

/// Always `200 OK` with body `"ok"`.
pub async fn liveness(_req: Request, _store: Arc<QuoteStore>) -> &'static str {
    "ok"
}

/// `200 OK` with `{"status":"ready","quotes":<n>}`.
pub async fn readiness(_req: Request, store: Arc<QuoteStore>) -> Json<Readiness> {
    Json(Readiness { status: "ready", quotes: store.len() })
}
