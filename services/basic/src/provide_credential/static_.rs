use crate::Credential;
use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed username and password.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(username: &str, password: &str) -> Result<Self> {
        Ok(Self {
            credential: Credential::new(username, password)?,
        })
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> Result<()> {
        let provider = StaticCredentialProvider::new("u", "p")?;

        let cred = provider.provide_credential(&Context::new()).await?.unwrap();
        assert_eq!(cred.username(), "u");
        assert_eq!(cred.password(), "p");
        Ok(())
    }
}
