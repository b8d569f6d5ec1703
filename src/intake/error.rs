//! Errors raised while talking to the intake endpoint

use thiserror::Error;

/// The request could not be completed or its reply could not be read
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Connection, DNS, TLS or timeout failure
    #[error("intake request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a body that is not the expected JSON
    #[error("malformed intake response (status {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
