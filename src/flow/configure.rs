use crate::idx::HttpIdxClient;
use crate::settings::WidgetSettings;

use super::fingerprint::AppState;

/// Build the HTTP identity client for a flow invocation.
///
/// Carries the configured client id and, when fingerprint enrichment already
/// ran, the collected fingerprint as a request header.
pub fn configure_idx_client(settings: &WidgetSettings, app_state: &AppState) -> HttpIdxClient {
    let mut client = HttpIdxClient::new(settings.base_url.clone());

    if let Some(client_id) = &settings.client_id {
        client = client.with_client_id(client_id);
    }

    if let Some(fingerprint) = &app_state.device_fingerprint {
        client = client.with_device_fingerprint(fingerprint);
    }

    client
}
