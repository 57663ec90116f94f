//! quotes-api server binary.
//!
//! Run with:
//!   cargo run -- --dataset quotes.json --bind 127.0.0.1:8000
//!
//! Try:
//!   curl http://localhost:8000/random-quotes/3
//!   curl http://localhost:8000/random-quote
//!   curl http://localhost:8000/quotes-by-author/mark%20twain
//!   curl http://localhost:8000/authors

use std::process::ExitCode;

use clap::Parser;
use quotes_api::config::Config;
use quotes_api::{Server, app, dataset};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(config).await {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(config: Config) -> Result<(), quotes_api::Error> {
    // The store must exist before the first connection is accepted.
    let store = dataset::load(&config.dataset)?;
    let server = Server::bind(config.bind).await?;
    server.serve(app(store)).await
}
