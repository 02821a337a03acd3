// src/error.rs
//! Error taxonomy.
//!
//! Only [`InputError`] (and a failed report write) aborts a run. Fetch and
//! parse failures are per-request / per-field and degrade to empty columns.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by the runner and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Usage(String),

    #[error("cannot open log file {}: {source}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a logger is already installed")]
    LoggerInstalled,
}

/// The store list could not be loaded. Fatal.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("input file {} contains no store domains", path.display())]
    Empty { path: PathBuf },
}

/// One page could not be fetched. Treated as "no content".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is unavailable")]
    Unavailable { url: String },
}

/// A payload was fetched but did not have the expected shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload has no `product` object")]
    MissingProduct,
}

/// The report file could not be written.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}
