use async_trait::async_trait;

use super::errors::IdxError;
use super::types::{AuthContext, InteractResponse, IntrospectParams};

/// Capability over the identity provider's IDX endpoints.
///
/// The login flow consumes exactly these two operations; everything else the
/// provider offers is out of this crate's scope.
#[async_trait]
pub trait IdxClient: Send + Sync {
    /// Obtain a fresh interaction handle for the interaction-code flow.
    async fn interact(&self) -> Result<InteractResponse, IdxError>;

    /// Exchange a state or interaction handle for an authentication context.
    async fn introspect(&self, params: IntrospectParams) -> Result<AuthContext, IdxError>;
}
