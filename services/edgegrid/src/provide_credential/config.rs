use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, Result};

use crate::config::{host_to_base_url, Config};
use crate::Credential;

/// ConfigCredentialProvider will load credential from the fields set on [`Config`].
///
/// Returns `None` unless `client_token`, `access_token`, `client_secret` and
/// `host` are all set.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match (
            &self.config.client_token,
            &self.config.access_token,
            &self.config.client_secret,
            &self.config.host,
        ) {
            (Some(ct), Some(at), Some(cs), Some(host)) => {
                Credential::new(ct, at, cs, host_to_base_url(host)).map(Some)
            }
            _ => Ok(None),
        }
    }
}
