use bytes::Bytes;
use purgesign_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// What the objects of a purge request identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeType {
    /// Objects are URLs or paths.
    Url,
    /// Objects are CP-codes.
    Cpcode,
}

/// Purge request sent to both CCU v2 and CCU v3.
///
/// `T` is `String` for URL purges and `i64` for CP-code purges. Serialized
/// as `{"type":..,"hostname":..,"objects":[..]}` with absent fields omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeRequest<T> {
    /// Purge type, only sent on the legacy path.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub purge_type: Option<PurgeType>,
    /// Hostname the objects belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Objects to purge.
    #[serde(default)]
    pub objects: Vec<T>,
}

impl<T> PurgeRequest<T> {
    /// Create a new purge request for `objects`.
    pub fn new(objects: impl IntoIterator<Item = T>) -> Self {
        Self {
            purge_type: None,
            hostname: None,
            objects: objects.into_iter().collect(),
        }
    }

    /// Set the hostname the objects belong to.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the purge type.
    pub fn with_purge_type(mut self, purge_type: PurgeType) -> Self {
        self.purge_type = Some(purge_type);
        self
    }
}

impl<T: Serialize> PurgeRequest<T> {
    /// Serialize into the compact JSON body that is both hashed and sent.
    pub fn to_canonical_json(&self) -> Result<Bytes> {
        serde_json::to_vec(self)
            .map(Bytes::from)
            .map_err(|e| Error::signing_error("failed to serialize purge request").with_source(e))
    }
}
