use serde_json::Value;
use thiserror::Error;

/// Errors raised by identity-provider calls.
///
/// `Remote` carries the provider's response body verbatim; the login flow
/// passes these through to the caller without wrapping or rewriting them.
#[derive(Debug, Error, Clone)]
pub enum IdxError {
    /// Non-success response from the identity provider.
    #[error("Remote error ({status}): {body}")]
    Remote { status: u16, body: Value },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A request URL could not be constructed from the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for IdxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Encoding(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
