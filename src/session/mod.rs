//! Tab-scoped persistence of the IDX state handle
//!
//! The state handle written by a previous flow invocation is the preferred
//! token for the next one. Storage is abstracted as an injected capability so
//! the flow is testable without a real browser storage backend.

mod errors;
mod store;

pub use errors::SessionError;
pub use store::{InMemoryStateHandleStore, StateHandleStore};
