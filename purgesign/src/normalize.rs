//! Purge request normalization.
//!
//! Every function here is pure: it validates its input and returns a new
//! canonical value, leaving the input untouched. Normalizing an already
//! normalized value returns it unchanged.

use crate::{PurgeRequest, PurgeType};
use purgesign_core::utils::has_text;
use purgesign_core::{Error, Result};
use serde::Serialize;
use std::fmt::Debug;

/// An object that can be purged.
pub trait PurgeObject: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Purge type of requests carrying this object.
    const PURGE_TYPE: PurgeType;

    /// Canonical form of this object, or `None` if it must be dropped.
    fn normalize(&self) -> Option<Self>;
}

impl PurgeObject for String {
    const PURGE_TYPE: PurgeType = PurgeType::Url;

    /// Blank URLs are dropped. The rest are lower-cased and prefixed with `/`
    /// unless they already start with `/` or `http`.
    fn normalize(&self) -> Option<Self> {
        if !has_text(self) {
            return None;
        }

        let url = self.to_lowercase();
        if url.starts_with('/') || url.starts_with("http") {
            Some(url)
        } else {
            Some(format!("/{url}"))
        }
    }
}

impl PurgeObject for i64 {
    const PURGE_TYPE: PurgeType = PurgeType::Cpcode;

    /// CP-codes are positive.
    fn normalize(&self) -> Option<Self> {
        (*self > 0).then_some(*self)
    }
}

/// Validate the hostname a signed purge is sent to.
///
/// It must be non-empty and start with `https` in any case. Returns the
/// lower-cased hostname without trailing `/`.
pub fn normalize_hostname(hostname: &str) -> Result<String> {
    if !has_text(hostname) {
        return Err(Error::invalid_argument("hostname cannot be empty"));
    }

    let hostname = hostname.trim().trim_end_matches('/').to_lowercase();
    if !hostname.starts_with("https") {
        return Err(Error::invalid_argument(format!(
            "hostname should start with https: {hostname}"
        )));
    }

    Ok(hostname)
}

/// Normalize the objects of a purge request, keeping order.
///
/// Fails if the request has no objects, before or after filtering.
pub fn normalize<T: PurgeObject>(req: &PurgeRequest<T>) -> Result<PurgeRequest<T>> {
    if req.objects.is_empty() {
        return Err(Error::invalid_argument("purge request objects cannot be empty"));
    }

    let objects: Vec<T> = req.objects.iter().filter_map(|o| o.normalize()).collect();
    if objects.is_empty() {
        return Err(Error::invalid_argument(format!(
            "purge request has no valid objects: {:?}",
            req.objects
        )));
    }

    Ok(PurgeRequest {
        purge_type: req.purge_type,
        hostname: req.hostname.clone(),
        objects,
    })
}

/// Normalize a request for the legacy Basic-auth API.
///
/// Objects are normalized like [`normalize`], the request's own hostname is
/// lower-cased and CP-code requests carry `type = cpcode`.
pub fn normalize_legacy<T: PurgeObject>(req: &PurgeRequest<T>) -> Result<PurgeRequest<T>> {
    let mut normalized = normalize(req)?;

    normalized.hostname = normalized.hostname.map(|h| h.to_lowercase());
    if T::PURGE_TYPE == PurgeType::Cpcode {
        normalized.purge_type = Some(PurgeType::Cpcode);
    }

    Ok(normalized)
}
