use crate::idx::{AuthContext, IdxClient, IntrospectParams};
use crate::session::StateHandleStore;
use crate::settings::WidgetSettings;

use super::errors::LoginFlowError;
use super::token::{TokenSource, resolve_state_token};

/// Start or resume an authentication session.
///
/// The decision procedure, in order:
/// 1. A host-supplied `proxy_idx_response` is returned verbatim; no token
///    resolution, no network calls.
/// 2. With `use_interaction_code_flow` set, `interact()` obtains a fresh
///    interaction handle which is introspected directly. Failures propagate;
///    this path has no fallback.
/// 3. Otherwise the effective state token is resolved and introspected. When
///    the rejected token came from session storage and a distinct configured
///    token exists, introspection is retried exactly once with the configured
///    token; that outcome is final.
///
/// Identity-client rejections are surfaced unmodified. The one synthetic
/// error this function introduces is the config error for the
/// unresolvable-token case, raised before any network call.
pub async fn start_login_flow(
    settings: &WidgetSettings,
    client: &dyn IdxClient,
    store: &dyn StateHandleStore,
) -> Result<AuthContext, LoginFlowError> {
    if let Some(proxy) = &settings.proxy_idx_response {
        tracing::debug!("Using proxied IDX response from settings");
        return Ok(AuthContext::from_proxy(proxy.clone()));
    }

    if settings.use_interaction_code_flow {
        let interact = client.interact().await?;
        tracing::debug!("Obtained interaction handle, introspecting");
        let context = client
            .introspect(IntrospectParams::InteractionHandle(
                interact.interaction_handle,
            ))
            .await?;
        return Ok(context);
    }

    let resolved = resolve_state_token(settings, store).await?;
    tracing::debug!("Introspecting with token from {:?}", resolved.source);

    match client
        .introspect(IntrospectParams::StateHandle(resolved.value.clone()))
        .await
    {
        Ok(context) => Ok(context),
        Err(err) => {
            if resolved.source == TokenSource::SessionStorage {
                if let Some(fallback) = settings.state_token.as_deref() {
                    if fallback != resolved.value {
                        tracing::debug!(
                            "Persisted state handle rejected, retrying with configured token"
                        );
                        let context = client
                            .introspect(IntrospectParams::StateHandle(fallback.to_string()))
                            .await?;
                        return Ok(context);
                    }
                }
            }
            Err(LoginFlowError::from(err).log())
        }
    }
}
