//! Clients for the CCU purge APIs.
//!
//! Each call performs exactly one attempt: normalize the request, serialize
//! it once, sign those bytes, POST the same bytes and decode the response.

use log::debug;
use purgesign_core::{Context, Error, Result, SignedHeaders, Signer, SigningRequest};

use crate::normalize::{normalize, normalize_hostname, normalize_legacy, PurgeObject};
use crate::{basic, edgegrid, PurgeRequest, PurgeResponse};

/// CCU v3 endpoint invalidating URLs on the production network.
pub const URL_INVALIDATE_ENDPOINT: &str = "/ccu/v3/invalidate/url/production";
/// CCU v3 endpoint invalidating CP-codes on the production network.
pub const CPCODE_INVALIDATE_ENDPOINT: &str = "/ccu/v3/invalidate/cpcode/production";
/// CCU v2 host, shared by every client.
pub const CCU_V2_HOSTNAME: &str = "https://api.ccu.akamai.com";
/// CCU v2 default purge queue.
pub const CCU_V2_QUEUE_ENDPOINT: &str = "/ccu/v2/queues/default";

/// Client for the CCU v3 (Fast Purge) API, authenticated with EdgeGrid v1.
///
/// Requests go to the `base_url` of the loaded credential.
#[derive(Debug, Clone)]
pub struct CcuV3Client {
    signer: Signer<edgegrid::Credential>,
}

impl CcuV3Client {
    /// Create a new client from an EdgeGrid signer.
    pub fn new(signer: Signer<edgegrid::Credential>) -> Self {
        Self { signer }
    }

    /// Create a new client loading credentials from the environment or `.edgerc`.
    pub fn from_context(ctx: Context) -> Self {
        let config = edgegrid::Config::default().from_env(&ctx);
        let builder = edgegrid::RequestSigner::from_config(&config);
        let loader = edgegrid::DefaultCredentialProvider::from_config(config);

        Self::new(Signer::new(ctx, loader, builder))
    }

    /// Invalidate URLs.
    pub async fn purge_by_url(&self, req: &PurgeRequest<String>) -> Result<PurgeResponse> {
        self.purge(req, URL_INVALIDATE_ENDPOINT).await
    }

    /// Invalidate CP-codes.
    pub async fn purge_by_cpcode(&self, req: &PurgeRequest<i64>) -> Result<PurgeResponse> {
        self.purge(req, CPCODE_INVALIDATE_ENDPOINT).await
    }

    async fn purge<T: PurgeObject>(
        &self,
        req: &PurgeRequest<T>,
        endpoint: &str,
    ) -> Result<PurgeResponse> {
        let req = normalize(req)?;
        let cred = self.signer.credential().await?;
        let hostname = normalize_hostname(cred.base_url())?;

        let signing_req = SigningRequest::post(hostname, endpoint, req.to_canonical_json()?);
        let headers = self.signer.sign(&signing_req).await?;
        dispatch(self.signer.context(), signing_req, &headers).await
    }
}

/// Client for the legacy CCU v2 API, authenticated with HTTP Basic.
#[derive(Debug, Clone)]
pub struct CcuV2Client {
    signer: Signer<basic::Credential>,
}

impl CcuV2Client {
    /// Create a new client from a Basic signer.
    pub fn new(signer: Signer<basic::Credential>) -> Self {
        Self { signer }
    }

    /// Create a new client loading credentials from the environment.
    pub fn from_context(ctx: Context) -> Self {
        Self::new(Signer::new(
            ctx,
            basic::DefaultCredentialProvider::new(),
            basic::RequestSigner::new(),
        ))
    }

    /// Purge URLs.
    pub async fn purge_by_url(&self, req: &PurgeRequest<String>) -> Result<PurgeResponse> {
        self.purge(req).await
    }

    /// Purge CP-codes. The request is sent with `type = cpcode`.
    pub async fn purge_by_cpcode(&self, req: &PurgeRequest<i64>) -> Result<PurgeResponse> {
        self.purge(req).await
    }

    async fn purge<T: PurgeObject>(&self, req: &PurgeRequest<T>) -> Result<PurgeResponse> {
        let req = normalize_legacy(req)?;
        debug!(
            "purging {} objects of type {:?} through ccu v2",
            req.objects.len(),
            req.purge_type.unwrap_or(T::PURGE_TYPE)
        );

        let signing_req =
            SigningRequest::post(CCU_V2_HOSTNAME, CCU_V2_QUEUE_ENDPOINT, req.to_canonical_json()?);
        let headers = self.signer.sign(&signing_req).await?;
        dispatch(self.signer.context(), signing_req, &headers).await
    }
}

/// POST the signed body and decode the purge response.
///
/// A non-2xx status is an unexpected error carrying the status and body.
async fn dispatch(
    ctx: &Context,
    req: SigningRequest,
    headers: &SignedHeaders,
) -> Result<PurgeResponse> {
    let url = format!("{}{}", req.hostname, req.path);
    let (mut parts, body) = http::Request::builder()
        .method(req.method)
        .uri(url.as_str())
        .body(req.body)?
        .into_parts();
    headers.apply(&mut parts)?;

    debug!("sending purge request to {url}");
    let resp = ctx.http_send(http::Request::from_parts(parts, body)).await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::unexpected(format!(
            "purge request to {url} failed with status {status}: {}",
            String::from_utf8_lossy(resp.body())
        )));
    }

    let resp = PurgeResponse::from_slice(resp.body())?;
    debug!("purge response: {resp:?}");
    Ok(resp)
}
