use crate::config::host_to_base_url;
use crate::{constants::*, Credential};
use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads EdgeGrid credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AKAMAI_CLIENT_TOKEN`: The client token
/// - `AKAMAI_ACCESS_TOKEN`: The access token
/// - `AKAMAI_CLIENT_SECRET`: The client secret
/// - `AKAMAI_HOST`: The API host, with or without `https://`
///
/// Returns `None` unless all four are set.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (
            envs.get(AKAMAI_CLIENT_TOKEN),
            envs.get(AKAMAI_ACCESS_TOKEN),
            envs.get(AKAMAI_CLIENT_SECRET),
            envs.get(AKAMAI_HOST),
        ) {
            (Some(ct), Some(at), Some(cs), Some(host)) => {
                Credential::new(ct, at, cs, host_to_base_url(host)).map(Some)
            }
            _ => Ok(None),
        }
    }
}
