use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SignedHeaders, SigningCredential,
    SigningRequest,
};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads a credential through its provider, keeps the last valid one for
/// later calls, and hands it by reference to the request signer.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the context.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Replace the credential provider and forget the loaded credential.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.loader = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// Context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Return a valid credential, loading it through the provider if needed.
    pub async fn credential(&self) -> Result<K> {
        let cached = self.lock()?.clone();
        if let Some(cred) = cached.filter(|c| c.is_valid()) {
            return Ok(cred);
        }

        let cred = self
            .loader
            .provide_credential(&self.ctx)
            .await?
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::credential_invalid("no valid credential provided"))?;
        *self.lock()? = Some(cred.clone());
        Ok(cred)
    }

    /// Sign the request and return the headers to attach to it.
    pub async fn sign(&self, req: &SigningRequest) -> Result<SignedHeaders> {
        let cred = self.credential().await?;
        self.builder.sign_request(req, Some(&cred))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<K>>> {
        self.credential
            .lock()
            .map_err(|_| Error::unexpected("credential lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct Token(String);

    impl SigningCredential for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug, Default)]
    struct CountingProvider {
        token: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Token(self.token.to_string())))
        }
    }

    #[derive(Debug)]
    struct TokenSigner;

    impl SignRequest for TokenSigner {
        type Credential = Token;

        fn sign_request(
            &self,
            req: &SigningRequest,
            credential: Option<&Self::Credential>,
        ) -> Result<SignedHeaders> {
            let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
            Ok(SignedHeaders::new(format!("Token {}@{}", cred.0, req.path)))
        }
    }

    fn request() -> SigningRequest {
        SigningRequest::post("https://example.com", "/purge", Bytes::new())
    }

    #[tokio::test]
    async fn test_sign_reuses_loaded_credential() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            token: "abc",
            calls: calls.clone(),
        };
        let signer = Signer::new(Context::new(), provider, TokenSigner);

        let headers = signer.sign(&request()).await?;
        assert_eq!(headers.authorization(), "Token abc@/purge");
        signer.sign(&request()).await?;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_rejects_invalid_credential() {
        let signer = Signer::new(Context::new(), CountingProvider::default(), TokenSigner);

        let err = signer.sign(&request()).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CredentialInvalid);
    }
}
