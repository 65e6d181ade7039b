// Error types for the upstream clients.
// Distinguishes HTTP status failures from transport failures so callers can
// pick the right fallback without a blanket catch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status}")]
    Http { status: u16 },

    /// Network failure, timeout, or an undecodable body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The body decoded but did not have the expected shape.
    #[error("unexpected upstream response: {0}")]
    Malformed(String),

    /// A required credential is absent; nothing was sent upstream.
    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    #[error("invalid credential header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl UpstreamError {
    /// HTTP status code, when the failure was a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
