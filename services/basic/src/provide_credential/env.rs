use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use purgesign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the username and password from
/// `AKAMAI_CCU_USERNAME` and `AKAMAI_CCU_PASSWORD`.
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
        match (
            ctx.env_var(AKAMAI_CCU_USERNAME),
            ctx.env_var(AKAMAI_CCU_PASSWORD),
        ) {
            (Some(username), Some(password)) => Credential::new(username, password).map(Some),
            _ => Ok(None),
        }
    }
}
