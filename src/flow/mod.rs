//! Login-flow orchestration
//!
//! High-level functions deciding which identity-provider calls to issue for a
//! given widget configuration and prior session state. This is the main entry
//! point of the crate.
//!
//! The module is divided into several submodules:
//! - `configure`: building the HTTP client from settings and app state
//! - `errors`: error types specific to flow orchestration
//! - `fingerprint`: best-effort device fingerprint enrichment
//! - `login_flow`: the `start_login_flow` decision procedure
//! - `token`: session-token resolution precedence

mod configure;
mod errors;
mod fingerprint;
mod login_flow;
mod token;

pub use configure::configure_idx_client;
pub use errors::{CONFIG_ERROR_MESSAGE, LoginFlowError};
pub use fingerprint::{
    AppState, DeviceFingerprintGenerator, FingerprintError, collect_device_fingerprint,
};
pub use login_flow::start_login_flow;
pub use token::{ResolvedToken, TokenSource, resolve_state_token};
