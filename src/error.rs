//! Error types.
//!
//! Two tiers exist. [`RequestError`] covers a malformed request and ends the
//! process with exit code 1. [`FetchError`] and [`ScrapeError`] happen while
//! extracting and never leave a site strategy: they are logged and the
//! strategy returns an empty record instead.

use thiserror::Error;

/// Failures of the HTTP collaborator.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },
}

/// Failures inside a site strategy.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Page has no usable markup")]
    EmptyPage,
}

/// Request-shape errors. These are fatal for the invocation.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Missing command argument")]
    MissingCommand,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Missing URL in input")]
    MissingUrl,

    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
