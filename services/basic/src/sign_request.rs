use crate::Credential;
use log::debug;
use purgesign_core::hash::base64_encode;
use purgesign_core::{Error, Result, SignRequest, SignedHeaders, SigningRequest};

/// RequestSigner that produces an HTTP Basic `Authorization` value.
///
/// The value is `Basic base64(username:password)` and does not depend on the
/// request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new Basic signer.
    pub fn new() -> Self {
        Self
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
                "credential is required for basic authentication",
            ));
        };

        debug!(
            "signing {} {}{} with basic authentication",
            req.method, req.hostname, req.path
        );
        Ok(SignedHeaders::new(basic_authorization(cred)))
    }
}

/// `Basic ` followed by the base64 of `username:password`.
pub fn basic_authorization(cred: &Credential) -> String {
    let token = format!("{}:{}", cred.username(), cred.password());
    format!("Basic {}", base64_encode(token.as_bytes()))
}
