//! Command-line configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serve quotations from a static JSON dataset over HTTP.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// JSON file holding an array of `{id, quote, author}` records.
    #[arg(long, env = "QUOTES_DATASET", default_value = "quotes.json")]
    pub dataset: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "QUOTES_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `quotes_api=debug`).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["quotes-api"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "quotes-api",
            "--dataset", "/srv/quotes.json",
            "--bind", "0.0.0.0:9000",
        ])
        .unwrap();
        assert_eq!(config.dataset, PathBuf::from("/srv/quotes.json"));
        assert_eq!(config.bind.port(), 9000);
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Config::try_parse_from(["quotes-api", "--bind", "localhost"]).is_err());
    }
}
