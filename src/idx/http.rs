use http::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use async_trait::async_trait;

use crate::config::{IDX_API_VERSION, WIDGET_USER_AGENT};

use super::client::IdxClient;
use super::errors::IdxError;
use super::types::{AuthContext, InteractResponse, IntrospectParams};

/// Request header carrying the best-effort device fingerprint.
pub const DEVICE_FINGERPRINT_HEADER: &str = "X-Device-Fingerprint";

/// Reqwest-backed IDX client bound to an identity provider base URL.
pub struct HttpIdxClient {
    base_url: Url,
    client_id: Option<String>,
    device_fingerprint: Option<String>,
    client: reqwest::Client,
}

impl HttpIdxClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client_id: None,
            device_fingerprint: None,
            client: get_client(),
        }
    }

    /// Client id sent on `interact()` requests.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Attach a collected device fingerprint to every request.
    pub fn with_device_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.device_fingerprint = Some(fingerprint.into());
        self
    }

    pub fn device_fingerprint(&self) -> Option<&str> {
        self.device_fingerprint.as_deref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn ion_content_type() -> String {
        format!(
            "application/ion+json; okta-version={}",
            IDX_API_VERSION.as_str()
        )
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(url);
        if let Some(fingerprint) = &self.device_fingerprint {
            builder = builder.header(DEVICE_FINGERPRINT_HEADER, fingerprint.as_str());
        }
        builder
    }
}

/// Shared reqwest client settings.
///
/// The 30 second timeout bounds a hung provider; flows should not hold the
/// widget open indefinitely on a dead connection.
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(WIDGET_USER_AGENT.as_str())
        .build()
        .unwrap_or_default()
}

#[async_trait]
impl IdxClient for HttpIdxClient {
    async fn interact(&self) -> Result<InteractResponse, IdxError> {
        let url = self.endpoint("oauth2/v1/interact");
        tracing::debug!("Requesting interaction handle from: {}", url);

        let mut form: Vec<(&str, &str)> = Vec::new();
        if let Some(client_id) = &self.client_id {
            form.push(("client_id", client_id));
        }

        let response = self.request(&url).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(remote_error(status.as_u16(), response).await);
        }

        let interact: InteractResponse = response.json().await?;
        Ok(interact)
    }

    async fn introspect(&self, params: IntrospectParams) -> Result<AuthContext, IdxError> {
        let url = self.endpoint("idp/idx/introspect");
        tracing::debug!("Introspecting against: {}", url);

        let response = self
            .request(&url)
            .header(ACCEPT, Self::ion_content_type())
            .header(CONTENT_TYPE, Self::ion_content_type())
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(remote_error(status.as_u16(), response).await);
        }

        let body: Value = response.json().await?;
        Ok(AuthContext::from_idx_response(body))
    }
}

/// Build a `Remote` error preserving the provider's response body verbatim.
async fn remote_error(status: u16, response: reqwest::Response) -> IdxError {
    let body = match response.text().await {
        Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        Err(_) => Value::Null,
    };
    tracing::error!("Identity provider returned {}: {}", status, body);
    IdxError::Remote { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.okta.com").unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        // Url::parse normalizes the host to a trailing slash; the endpoint
        // helper must not produce "//" in the path
        let client = HttpIdxClient::new(base_url());
        assert_eq!(
            client.endpoint("idp/idx/introspect"),
            "https://example.okta.com/idp/idx/introspect"
        );
        assert_eq!(
            client.endpoint("oauth2/v1/interact"),
            "https://example.okta.com/oauth2/v1/interact"
        );
    }

    #[test]
    fn test_endpoint_with_custom_path_base() {
        let client = HttpIdxClient::new(Url::parse("https://example.okta.com/oauth2/default/").unwrap());
        assert_eq!(
            client.endpoint("v1/interact"),
            "https://example.okta.com/oauth2/default/v1/interact"
        );
    }

    #[test]
    fn test_builder_attaches_fingerprint() {
        let client = HttpIdxClient::new(base_url());
        assert!(client.device_fingerprint().is_none());

        let client = client.with_device_fingerprint("fp-1234");
        assert_eq!(client.device_fingerprint(), Some("fp-1234"));
    }

    #[test]
    fn test_ion_content_type_carries_api_version() {
        crate::test_utils::init_test_environment();
        let content_type = HttpIdxClient::ion_content_type();
        assert!(content_type.starts_with("application/ion+json; okta-version="));
    }
}
