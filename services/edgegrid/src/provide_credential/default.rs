use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::provide_credential::{
    ConfigCredentialProvider, EdgercCredentialProvider, EnvCredentialProvider,
};
use crate::{Config, Credential};

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Credential fields set on [`Config`]
/// 2. Environment variables
/// 3. The `.edgerc` file
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
        Self::from_config(Config::default())
    }

    /// Create a new DefaultCredentialProvider from config.
    pub fn from_config(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config.clone()))
            .push(EnvCredentialProvider::new())
            .push(EdgercCredentialProvider::from_config(config));

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// This allows adding a high-priority credential source that will be tried
    /// before all other providers in the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use purgesign_edgegrid::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// # fn main() -> purgesign_core::Result<()> {
    /// let provider = DefaultCredentialProvider::new().push_front(StaticCredentialProvider::new(
    ///     "client_token",
    ///     "access_token",
    ///     "client_secret",
    ///     "https://akab-xxxx.luna.akamaiapis.net",
    /// )?);
    /// # Ok(())
    /// # }
    /// ```
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
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use purgesign_core::StaticEnv;
    use purgesign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::io::Write;

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::new(),
            });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_prefers_env_over_edgerc() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            b"[default]\nclient_secret = file-secret\nhost = file.akamaiapis.net\naccess_token = file-at\nclient_token = file-ct\n",
        )
        .unwrap();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([
                    (AKAMAI_CLIENT_TOKEN.to_string(), "env-ct".to_string()),
                    (AKAMAI_ACCESS_TOKEN.to_string(), "env-at".to_string()),
                    (AKAMAI_CLIENT_SECRET.to_string(), "env-secret".to_string()),
                    (AKAMAI_HOST.to_string(), "env.akamaiapis.net".to_string()),
                    (
                        AKAMAI_EDGERC.to_string(),
                        f.path().to_string_lossy().to_string(),
                    ),
                ]),
            });

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.client_token(), "env-ct");
    }

    #[tokio::test]
    async fn test_default_loader_falls_back_to_edgerc() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            b"[default]\nclient_secret = file-secret\nhost = file.akamaiapis.net\naccess_token = file-at\nclient_token = file-ct\n",
        )
        .unwrap();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::new(),
            });

        let cred = DefaultCredentialProvider::from_config(
            Config::new().with_edgerc(f.path().to_string_lossy()),
        )
        .provide_credential(&ctx)
        .await
        .unwrap()
        .unwrap();
        assert_eq!(cred.client_token(), "file-ct");
        assert_eq!(cred.base_url(), "https://file.akamaiapis.net");
    }

    #[tokio::test]
    async fn test_default_loader_prefers_config_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (AKAMAI_CLIENT_TOKEN.to_string(), "env-ct".to_string()),
                (AKAMAI_ACCESS_TOKEN.to_string(), "env-at".to_string()),
                (AKAMAI_CLIENT_SECRET.to_string(), "env-secret".to_string()),
                (AKAMAI_HOST.to_string(), "env.akamaiapis.net".to_string()),
            ]),
        });

        let config = Config::new()
            .with_client_token("ct1")
            .with_access_token("at1")
            .with_client_secret("secret")
            .with_host("example.akamaiapi.net");
        let cred = DefaultCredentialProvider::from_config(config)
            .provide_credential(&ctx)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.client_token(), "ct1");
        assert_eq!(cred.base_url(), "https://example.akamaiapi.net");
    }

    #[tokio::test]
    async fn test_default_loader_push_front() {
        let ctx = Context::new();

        let cred = DefaultCredentialProvider::new()
            .push_front(
                StaticCredentialProvider::new("ct", "at", "cs", "https://static.akamaiapis.net")
                    .unwrap(),
            )
            .provide_credential(&ctx)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.base_url(), "https://static.akamaiapis.net");
    }
}
