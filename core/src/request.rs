use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};

use crate::{Error, Result};

/// Media type sent and accepted by every purge request.
pub const APPLICATION_JSON: &str = "application/json";

/// Everything a [`SignRequest`](crate::SignRequest) needs to authorize one request.
///
/// The body is the exact byte sequence that will be put on the wire. Signers
/// that hash the payload must hash these bytes, and dispatchers must send
/// them unchanged.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Target hostname, optionally prefixed by its scheme (`https://host`).
    pub hostname: String,
    /// Endpoint path, e.g. `/ccu/v3/invalidate/url/production`.
    pub path: String,
    /// Serialized request body.
    pub body: Bytes,
}

impl SigningRequest {
    /// Create a POST signing request.
    pub fn post(hostname: impl Into<String>, path: impl Into<String>, body: Bytes) -> Self {
        Self {
            method: Method::POST,
            hostname: hostname.into(),
            path: path.into(),
            body,
        }
    }

    /// Build a signing request from an `http::Request`.
    pub fn build(req: &http::Request<Bytes>) -> Result<Self> {
        let uri = req.uri();
        let authority = uri
            .authority()
            .ok_or_else(|| Error::invalid_argument("request without authority is invalid for signing"))?;
        let hostname = match uri.scheme_str() {
            Some(scheme) => format!("{scheme}://{authority}"),
            None => authority.to_string(),
        };

        Ok(Self {
            method: req.method().clone(),
            hostname,
            path: uri.path().to_string(),
            body: req.body().clone(),
        })
    }

    /// Hostname with a leading `https://` stripped.
    pub fn host_without_scheme(&self) -> &str {
        self.hostname
            .strip_prefix("https://")
            .unwrap_or(&self.hostname)
    }
}

/// Headers produced by signing one request.
///
/// Created fresh for every request and never reused: schemes like EdgeGrid
/// embed a one-time nonce and timestamp in the authorization value.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    authorization: String,
}

impl SignedHeaders {
    /// Create signed headers from an authorization value.
    pub fn new(authorization: impl Into<String>) -> Self {
        Self {
            authorization: authorization.into(),
        }
    }

    /// The `Authorization` header value.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// The `Content-Type` header value.
    pub fn content_type(&self) -> &'static str {
        APPLICATION_JSON
    }

    /// The `Accept` header value.
    pub fn accept(&self) -> &'static str {
        APPLICATION_JSON
    }

    /// Convert into a header map.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = self.authorization.parse()?;
            value.set_sensitive(true);

            value
        });
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        Ok(headers)
    }

    /// Apply the signed headers to http::request::Parts.
    pub fn apply(&self, parts: &mut http::request::Parts) -> Result<()> {
        for (name, value) in self.to_header_map()? {
            if let Some(name) = name {
                parts.headers.insert(name, value);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for SignedHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("authorization", &"<redacted>")
            .field("content_type", &APPLICATION_JSON)
            .field("accept", &APPLICATION_JSON)
            .finish()
    }
}
