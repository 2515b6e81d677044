//! Best-effort device fingerprint enrichment
//!
//! Before credentials are submitted, a fingerprint may be requested from an
//! external generator and attached to application state for a subsequent
//! request header. Generation failures are swallowed; enrichment never blocks
//! the primary operation.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::settings::WidgetSettings;

/// Mutable per-widget state shared across the submission flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub device_fingerprint: Option<String>,
}

#[derive(Debug, Error, Clone)]
pub enum FingerprintError {
    #[error("Fingerprint generation timed out")]
    Timeout,

    #[error("Fingerprint generation failed: {0}")]
    Failed(String),
}

/// External fingerprint generator bound to the provider base URL.
#[async_trait]
pub trait DeviceFingerprintGenerator: Send + Sync {
    async fn generate(&self, base_url: &Url) -> Result<String, FingerprintError>;
}

/// Request a fingerprint and attach it to the app state.
///
/// Skipped unless the feature is enabled. A failed generation leaves the app
/// state untouched and is logged at debug only; it is not part of the flow's
/// error surface.
pub async fn collect_device_fingerprint(
    settings: &WidgetSettings,
    app_state: &mut AppState,
    generator: &dyn DeviceFingerprintGenerator,
) {
    if !settings.features.device_fingerprinting {
        return;
    }

    match generator.generate(&settings.base_url).await {
        Ok(fingerprint) => {
            app_state.device_fingerprint = Some(fingerprint);
        }
        Err(err) => {
            // Keep going even if device fingerprint fails
            tracing::debug!("Device fingerprint generation failed: {}", err);
        }
    }
}
