use serde_json::Value;
use url::Url;

/// Feature toggles affecting the surrounding submission flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    /// Collect a best-effort device fingerprint before submitting credentials.
    pub device_fingerprinting: bool,
}

/// Host-supplied widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSettings {
    /// Identity provider base URL.
    pub base_url: Url,
    /// Token identifying a server-side authentication state.
    pub state_token: Option<String>,
    /// Select the interaction-code protocol variant.
    pub use_interaction_code_flow: bool,
    /// Force `state_token` even when a persisted handle exists.
    pub override_existing_state_token: bool,
    /// Pre-fetched authentication context, bypassing all network calls.
    pub proxy_idx_response: Option<Value>,
    /// Client id sent when obtaining an interaction handle.
    pub client_id: Option<String>,
    pub features: Features,
}

impl WidgetSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            state_token: None,
            use_interaction_code_flow: false,
            override_existing_state_token: false,
            proxy_idx_response: None,
            client_id: None,
            features: Features::default(),
        }
    }
}
