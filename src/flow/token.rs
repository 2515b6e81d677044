use crate::session::StateHandleStore;
use crate::settings::WidgetSettings;

use super::errors::LoginFlowError;

/// Where the effective state token came from. Decides fallback eligibility
/// when introspection rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Settings,
    SessionStorage,
}

/// The single token chosen to introspect against.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedToken {
    pub value: String,
    pub source: TokenSource,
}

/// Choose the state token for the legacy/session path.
///
/// Precedence, highest first:
/// 1. `override_existing_state_token` forces the configured token, ignoring
///    any persisted handle. A missing token here does not fall through.
/// 2. A handle persisted by a previous flow invocation.
/// 3. The configured token.
///
/// With neither source available the flow cannot start; the host either
/// supplies a token or switches to the interaction-code flow.
pub async fn resolve_state_token(
    settings: &WidgetSettings,
    store: &dyn StateHandleStore,
) -> Result<ResolvedToken, LoginFlowError> {
    let (value, source) = if settings.override_existing_state_token {
        tracing::debug!("Existing state handle overridden by configuration");
        (settings.state_token.clone(), TokenSource::Settings)
    } else if let Some(handle) = store.get_state_handle().await {
        (Some(handle), TokenSource::SessionStorage)
    } else {
        (settings.state_token.clone(), TokenSource::Settings)
    };

    match value {
        Some(value) => Ok(ResolvedToken { value, source }),
        None => Err(LoginFlowError::Config.log()),
    }
}
