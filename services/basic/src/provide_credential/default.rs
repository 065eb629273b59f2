use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::provide_credential::EnvCredentialProvider;
use crate::Credential;

/// DefaultCredentialProvider loads Basic credentials from the environment.
///
/// Use [`DefaultCredentialProvider::push_front`] to try other sources first.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCredentialProvider;
    use purgesign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_loader_without_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::new(),
        });

        let cred = DefaultCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_default_loader_push_front() -> Result<()> {
        let cred = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("u", "p")?)
            .provide_credential(&Context::new())
            .await?
            .unwrap();
        assert_eq!(cred.username(), "u");
        Ok(())
    }
}
