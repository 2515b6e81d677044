//! Error types for login-flow orchestration

use thiserror::Error;

use crate::idx::IdxError;

/// Fixed message raised when no usable token or handle exists.
///
/// The literal string, stray quote included, is part of the observable
/// contract with host applications.
pub const CONFIG_ERROR_MESSAGE: &str = "Set \"useInteractionCodeFlow\" to true in configuration \
     to enable the interaction_code\" flow for self-hosted widget.";

/// Errors that can occur while orchestrating a login flow
#[derive(Debug, Error)]
pub enum LoginFlowError {
    /// No state token or persisted handle to introspect against. Raised
    /// before any network call is attempted.
    #[error("{}", CONFIG_ERROR_MESSAGE)]
    Config,

    /// Rejection from the identity client, passed through unmodified.
    #[error(transparent)]
    Idx(#[from] IdxError),
}

impl LoginFlowError {
    /// Stable error name for caller inspection.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Config => "CONFIG_ERROR",
            Self::Idx(_) => "REMOTE_ERROR",
        }
    }

    /// Log the error and return self, allowing for method chaining.
    pub fn log(self) -> Self {
        match &self {
            Self::Config => tracing::error!("Config error: {}", self),
            Self::Idx(err) => tracing::error!("Identity client error: {}", err),
        }
        self
    }
}
