use crate::constants::*;
use crate::{Config, Credential};
use log::{debug, warn};
use purgesign_core::hash::{base64_hmac_sha256, base64_sha256};
use purgesign_core::time::{format_edgegrid_timestamp, now, DateTime};
use purgesign_core::{Error, Result, SignRequest, SignedHeaders, SigningRequest};
use std::fmt::Write;

/// RequestSigner that implements EdgeGrid v1 (`EG1-HMAC-SHA256`).
///
/// The signer holds no credential: every call receives one, derives a fresh
/// signing key from the request timestamp and produces a one-time
/// authorization value carrying its own nonce.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    max_body_size: usize,
    verbose: bool,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new EdgeGrid signer hashing at most [`DEFAULT_MAX_BODY_SIZE`] body bytes.
    pub fn new() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            verbose: false,

            time: None,
            nonce: None,
        }
    }

    /// Create a new EdgeGrid signer from config.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_max_body_size(config.max_body_size())
    }

    /// Set the maximum number of body bytes covered by the content hash.
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Log the string to sign, the signature and the final header at debug level.
    ///
    /// Off by default. Anyone reading these logs can replay the request until
    /// its timestamp expires.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// We should always take a fresh nonce to sign requests.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<SignedHeaders> {
        let Some(cred) = credential else {
            return Err(Error::invalid_argument(
                "credential is required for EdgeGrid signing",
            ));
        };

        let timestamp = format_edgegrid_timestamp(self.time.unwrap_or_else(now));
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let auth_data = auth_data(cred, &timestamp, &nonce)?;
        let signing_key = base64_hmac_sha256(cred.client_secret().as_bytes(), timestamp.as_bytes())?;

        let content_hash = content_hash(&req.body, self.max_body_size);
        let creq = canonical_request(req, "", &content_hash)?;
        let string_to_sign = format!("{creq}{auth_data}");
        if self.verbose {
            debug!("calculated string to sign: {string_to_sign}");
        }

        let signature = base64_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())?;
        if self.verbose {
            debug!("calculated signature: {signature}");
        }

        let authorization = format!("{auth_data}{AUTH_SIGNATURE_NAME}={signature}");
        if self.verbose {
            debug!("calculated authorization: {authorization}");
        }

        Ok(SignedHeaders::new(authorization))
    }
}

/// Auth data in its fixed field order:
///
/// ```text
/// EG1-HMAC-SHA256 client_token=<ct>;access_token=<at>;timestamp=<ts>;nonce=<n>;
/// ```
fn auth_data(cred: &Credential, timestamp: &str, nonce: &str) -> Result<String> {
    let mut s = String::with_capacity(256);
    write!(s, "{EDGEGRID_ALGORITHM} ")?;
    write!(s, "{AUTH_CLIENT_TOKEN_NAME}={};", cred.client_token())?;
    write!(s, "{AUTH_ACCESS_TOKEN_NAME}={};", cred.access_token())?;
    write!(s, "{AUTH_TIMESTAMP_NAME}={timestamp};")?;
    write!(s, "{AUTH_NONCE_NAME}={nonce};")?;
    Ok(s)
}

/// Base64 SHA-256 over at most `max_body_size` leading bytes of the body.
fn content_hash(body: &[u8], max_body_size: usize) -> String {
    let content = if body.len() > max_body_size {
        warn!(
            "request body is {} bytes, content hash only covers the first {max_body_size}",
            body.len()
        );
        &body[..max_body_size]
    } else {
        body
    };

    base64_sha256(content)
}

/// Canonical request, every field terminated by a tab:
///
/// ```text
/// POST\thttps\t<host>\t<path>\t<headers>\t<content hash>\t
/// ```
fn canonical_request(req: &SigningRequest, headers: &str, content_hash: &str) -> Result<String> {
    let mut s = String::with_capacity(128);
    write!(s, "{}\t", req.method.as_str())?;
    write!(s, "https\t")?;
    write!(s, "{}\t", req.host_without_scheme())?;
    write!(s, "{}\t", req.path)?;
    write!(s, "{headers}\t")?;
    write!(s, "{content_hash}\t")?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    const CLIENT_TOKEN: &str = "akab-client-token-xxx-xxxxxxxxxxxxxxxx";
    const ACCESS_TOKEN: &str = "akab-access-token-xxx-xxxxxxxxxxxxxxxx";
    const CLIENT_SECRET: &str = "SOMESECRETSOMESECRETSOMESECRETSOMESECRET11=";
    const NONCE: &str = "nonce-xx-xxxx-xxxx";

    fn credential() -> Credential {
        Credential::new(
            CLIENT_TOKEN,
            ACCESS_TOKEN,
            CLIENT_SECRET,
            "https://akab-host.purge.akamaiapis.net",
        )
        .unwrap()
    }

    fn request() -> SigningRequest {
        SigningRequest::post(
            "https://akab-host.purge.akamaiapis.net",
            "/ccu/v3/invalidate/url/production",
            Bytes::from_static(br#"{"objects":["/index.html"]}"#),
        )
    }

    fn time() -> DateTime {
        Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_sign_with_fixed_time_and_nonce() -> Result<()> {
        let signer = RequestSigner::new().with_time(time()).with_nonce(NONCE);

        let headers = signer.sign_request(&request(), Some(&credential()))?;
        assert_eq!(
            headers.authorization(),
            format!(
                "EG1-HMAC-SHA256 client_token={CLIENT_TOKEN};access_token={ACCESS_TOKEN};\
                 timestamp=20240315T08:30:00+0000;nonce={NONCE};\
                 signature=ZzlZjWujgIWI+IZrTqOZO8fUhmoTZ4VQ3Trz75c4sfM="
            )
        );
        assert_eq!(headers.content_type(), "application/json");
        assert_eq!(headers.accept(), "application/json");
        Ok(())
    }

    #[test]
    fn test_sign_is_deterministic() -> Result<()> {
        let signer = RequestSigner::new()
            .with_time(time())
            .with_nonce(NONCE)
            .with_verbose(true);

        let first = signer.sign_request(&request(), Some(&credential()))?;
        let second = signer.sign_request(&request(), Some(&credential()))?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_sign_uses_fresh_nonce() -> Result<()> {
        let signer = RequestSigner::new().with_time(time());

        let first = signer.sign_request(&request(), Some(&credential()))?;
        let second = signer.sign_request(&request(), Some(&credential()))?;
        assert_ne!(first.authorization(), second.authorization());
        assert!(first
            .authorization()
            .starts_with(&format!("EG1-HMAC-SHA256 client_token={CLIENT_TOKEN};")));
        Ok(())
    }

    #[test]
    fn test_sign_distinct_nonces_differ() -> Result<()> {
        let signature = |nonce: &str| -> Result<String> {
            let headers = RequestSigner::new()
                .with_time(time())
                .with_nonce(nonce)
                .sign_request(&request(), Some(&credential()))?;
            let (_, signature) = headers
                .authorization()
                .rsplit_once("signature=")
                .expect("authorization must carry signature");
            Ok(signature.to_string())
        };

        assert_ne!(signature("nonce-a")?, signature("nonce-b")?);
        Ok(())
    }

    #[test]
    fn test_sign_host_without_scheme_is_equivalent() -> Result<()> {
        let signer = RequestSigner::new().with_time(time()).with_nonce(NONCE);

        let mut req = request();
        let expected = signer.sign_request(&req, Some(&credential()))?;
        req.hostname = "akab-host.purge.akamaiapis.net".to_string();
        let actual = signer.sign_request(&req, Some(&credential()))?;
        assert_eq!(expected, actual);
        Ok(())
    }

    #[test]
    fn test_sign_without_credential() {
        let err = RequestSigner::new()
            .sign_request(&request(), None)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_content_hash_truncates_body() {
        let body = br#"{"objects":["/index.html"]}"#;

        assert_eq!(
            content_hash(body, 10),
            "E0NEbA29FGIhNE74pNvL72l8vZ571c6b+Zl6ObJFDjk="
        );
        assert_eq!(
            content_hash(body, DEFAULT_MAX_BODY_SIZE),
            "wQyU1LHTQsY4j6i/HZCcH9dCFOL9dq/YzxOquLncDAk="
        );
        assert_eq!(
            content_hash(b"", DEFAULT_MAX_BODY_SIZE),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[test]
    fn test_content_hash_ignores_bytes_past_limit() {
        let max = 100;
        let body: Vec<u8> = (0..max + 3).map(|i| i as u8).collect();

        let expected = content_hash(&body[..max], max);
        for k in 1..=3 {
            assert_eq!(content_hash(&body[..max + k], max), expected);
        }
        assert_ne!(content_hash(&body[..max - 1], max), expected);
    }

    #[test]
    fn test_canonical_request() -> Result<()> {
        let creq = canonical_request(&request(), "", "hash")?;
        assert_eq!(
            creq,
            "POST\thttps\takab-host.purge.akamaiapis.net\t/ccu/v3/invalidate/url/production\t\thash\t"
        );
        Ok(())
    }

    #[test]
    fn test_from_config() {
        let signer = RequestSigner::from_config(&Config::new().with_max_body_size(10));
        assert_eq!(signer.max_body_size, 10);
    }
}
