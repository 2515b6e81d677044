//! Central configuration for the idx-signin crate

use std::sync::LazyLock;

/// IDX API version sent in the `Accept` header of introspect requests
///
/// Default: "1.0.0"
pub static IDX_API_VERSION: LazyLock<String> =
    LazyLock::new(|| std::env::var("IDX_API_VERSION").unwrap_or_else(|_| "1.0.0".to_string()));

/// User agent reported by the widget's HTTP client
pub static WIDGET_USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("idx-signin-{}", env!("CARGO_PKG_VERSION")));
