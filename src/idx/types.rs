use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of a successful `interact()` call.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InteractResponse {
    pub interaction_handle: String,
}

/// Parameter of an `introspect()` call.
///
/// The IDX introspect endpoint accepts exactly one of an interaction handle
/// or a state handle; the enum makes passing both unrepresentable.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum IntrospectParams {
    InteractionHandle(String),
    StateHandle(String),
}

/// One remediation step offered by an IDX response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Remediation {
    pub name: String,
    pub href: Option<String>,
    pub method: Option<String>,
    #[serde(default)]
    pub value: Value,
}

/// Normalized authentication context consumed by downstream views.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthContext {
    /// The remote response as received, untouched.
    pub raw_idx_state: Value,
    /// The response with the remediation block stripped out.
    pub context: Value,
    /// Remediation steps parsed from the response, in offer order.
    pub needed_to_proceed: Vec<Remediation>,
    /// When the server-side authentication state expires, if stated.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    /// Wrap a host-supplied proxied response verbatim.
    ///
    /// The proxy value becomes both the raw state and the context, with no
    /// remediation steps; no normalization is applied.
    pub fn from_proxy(proxy: Value) -> Self {
        Self {
            raw_idx_state: proxy.clone(),
            context: proxy,
            needed_to_proceed: Vec::new(),
            expires_at: None,
        }
    }

    /// Normalize a raw IDX response body.
    ///
    /// Remediation entries that don't carry a `name` are skipped rather than
    /// failing the whole response.
    pub fn from_idx_response(body: Value) -> Self {
        let needed_to_proceed = body
            .get("remediation")
            .and_then(|r| r.get("value"))
            .and_then(Value::as_array)
            .map(|steps| {
                steps
                    .iter()
                    .filter_map(|step| {
                        serde_json::from_value::<Remediation>(step.clone()).ok()
                    })
                    .collect()
            })
            .unwrap_or_default();

        let expires_at = body
            .get("expiresAt")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let mut context = body.clone();
        if let Some(obj) = context.as_object_mut() {
            obj.remove("remediation");
        }

        Self {
            raw_idx_state: body,
            context,
            needed_to_proceed,
            expires_at,
        }
    }
}
