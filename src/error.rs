// src/error.rs
use thiserror::Error;

/// Everything that can go wrong with a single GET.
/// None of these are retried; the first one ends the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect failure, timeout, or the body could not be read.
    #[error("Network or HTTP error: {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Network or HTTP error: {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Response is not valid JSON: {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// `raw` is the received `total` rendered as JSON, or `missing`.
    #[error("Server returned an invalid total: {raw}")]
    InvalidTotal { raw: String },

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this failure. Every failure is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
