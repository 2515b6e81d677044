//! idx-signin - Login-flow orchestration for an embeddable IDX sign-in widget
//!
//! This crate implements the control-flow contract for initiating and
//! resuming an authentication session against an IDX identity provider:
//! deciding which network calls to issue from prior session state, retrying
//! once against a fallback token source, and normalizing the remote context
//! into a single `AuthContext` consumed by downstream views.

mod config;
mod events;
mod flow;
mod idx;
mod session;
mod settings;

#[cfg(test)]
mod test_utils;

// Re-export the main flow components
pub use flow::{
    AppState, CONFIG_ERROR_MESSAGE, DeviceFingerprintGenerator, FingerprintError, LoginFlowError,
    ResolvedToken, TokenSource, collect_device_fingerprint, configure_idx_client,
    resolve_state_token, start_login_flow,
};

pub use idx::{
    AuthContext, DEVICE_FINGERPRINT_HEADER, HttpIdxClient, IdxClient, IdxError, InteractResponse,
    IntrospectParams, Remediation,
};

pub use session::{InMemoryStateHandleStore, SessionError, StateHandleStore};

pub use settings::{Features, WidgetSettings};

pub use events::{EventBus, EventKind, RenderContext, WidgetEvent};

pub use config::{IDX_API_VERSION, WIDGET_USER_AGENT};
