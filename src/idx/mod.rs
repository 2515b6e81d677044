//! Identity-provider client for the IDX interaction-code protocol
//!
//! The module is divided into several submodules:
//! - `client`: the `IdxClient` capability consumed by the login flow
//! - `errors`: error types for identity-provider calls
//! - `http`: the reqwest-backed client implementation
//! - `types`: wire and result types, including `AuthContext` normalization

mod client;
mod errors;
mod http;
mod types;

pub use client::IdxClient;
pub use errors::IdxError;
pub use http::{DEVICE_FINGERPRINT_HEADER, HttpIdxClient};
pub use types::{AuthContext, InteractResponse, IntrospectParams, Remediation};
