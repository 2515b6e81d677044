//! Typed widget configuration
//!
//! The host application's configuration bag, modeled as an explicit value
//! passed by read-only reference into the login flow. The flow never mutates
//! it.

mod types;

pub use types::{Features, WidgetSettings};
