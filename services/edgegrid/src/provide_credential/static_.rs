use crate::Credential;
use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed EdgeGrid credential.
///
/// This provider is used when the tokens and secret are already at hand and
/// need no dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    ///
    /// Fails with an invalid argument error if any field is empty.
    pub fn new(
        client_token: &str,
        access_token: &str,
        client_secret: &str,
        base_url: &str,
    ) -> Result<Self> {
        Ok(Self {
            credential: Credential::new(client_token, access_token, client_secret, base_url)?,
        })
    }

    /// Create a new StaticCredentialProvider from a built credential.
    pub fn from_credential(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
