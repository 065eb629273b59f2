use purgesign_core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Response of a purge request.
///
/// Every field is optional and kept as a string. Numeric JSON values, like
/// the `201` the CCU API returns in `httpStatus`, are kept as their decimal
/// form. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeResponse {
    /// HTTP status reported by the API.
    #[serde(default, deserialize_with = "string_or_number")]
    pub http_status: Option<String>,
    /// Human readable detail.
    #[serde(default, deserialize_with = "string_or_number")]
    pub detail: Option<String>,
    /// Estimated seconds until the purge completes.
    #[serde(default, deserialize_with = "string_or_number")]
    pub estimated_seconds: Option<String>,
    /// Identifier of the purge.
    #[serde(default, deserialize_with = "string_or_number")]
    pub purge_id: Option<String>,
    /// Identifier to quote when contacting support.
    #[serde(default, deserialize_with = "string_or_number")]
    pub support_id: Option<String>,
    /// URI to poll the purge status, CCU v2 only.
    #[serde(default, deserialize_with = "string_or_number")]
    pub progress_uri: Option<String>,
    /// Seconds to wait before polling, CCU v2 only.
    #[serde(default, deserialize_with = "string_or_number")]
    pub ping_after_seconds: Option<String>,
}

impl PurgeResponse {
    /// Decode a purge response from a JSON body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| Error::unexpected("failed to decode purge response").with_source(e))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(v) => Err(D::Error::custom(format!(
            "expected string or number, found {v}"
        ))),
    }
}
