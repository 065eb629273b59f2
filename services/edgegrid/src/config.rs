use std::fmt::{Debug, Formatter};

use crate::constants::*;
use purgesign_core::utils::Redact;
use purgesign_core::Context;

/// Config carries all the configuration for EdgeGrid signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `client_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_CLIENT_TOKEN`]
    pub client_token: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_ACCESS_TOKEN`]
    pub access_token: Option<String>,
    /// `client_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_CLIENT_SECRET`]
    pub client_secret: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_HOST`]
    ///
    /// A host without scheme gets `https://` prepended when the credential is built.
    pub host: Option<String>,
    /// `edgerc` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_EDGERC`]
    /// - default to: `~/.edgerc`
    pub edgerc: Option<String>,
    /// `section` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_EDGERC_SECTION`]
    /// - default to: `default`
    pub section: Option<String>,
    /// `max_body_size` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKAMAI_MAX_BODY`]
    /// - default to: `50000`
    pub max_body_size: Option<usize>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client_token
    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }

    /// Set access_token
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set client_secret
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set edgerc path
    pub fn with_edgerc(mut self, edgerc: impl Into<String>) -> Self {
        self.edgerc = Some(edgerc.into());
        self
    }

    /// Set edgerc section
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set max body size
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = Some(max_body_size);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AKAMAI_CLIENT_TOKEN) {
            self.client_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKAMAI_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKAMAI_CLIENT_SECRET) {
            self.client_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKAMAI_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKAMAI_EDGERC) {
            self.edgerc.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKAMAI_EDGERC_SECTION) {
            self.section.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKAMAI_MAX_BODY) {
            match v.parse() {
                Ok(size) => {
                    self.max_body_size.get_or_insert(size);
                }
                Err(_) => log::warn!("ignoring invalid {AKAMAI_MAX_BODY} value: {v}"),
            }
        }

        self
    }

    /// The edgerc path to read, before home dir expansion.
    pub fn edgerc_path(&self) -> &str {
        self.edgerc.as_deref().unwrap_or(DEFAULT_EDGERC_PATH)
    }

    /// The edgerc section to read.
    pub fn section_name(&self) -> &str {
        self.section.as_deref().unwrap_or(DEFAULT_EDGERC_SECTION)
    }

    /// The max body size used for content hashing.
    pub fn max_body_size(&self) -> usize {
        self.max_body_size.unwrap_or(DEFAULT_MAX_BODY_SIZE)
    }
}

/// Prefix `https://` to a host given without scheme, as `.edgerc` files do.
pub(crate) fn host_to_base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_token", &self.client_token.as_ref().map(Redact::from))
            .field("access_token", &self.access_token.as_ref().map(Redact::from))
            .field("client_secret", &self.client_secret.as_ref().map(Redact::from))
            .field("host", &self.host)
            .field("edgerc", &self.edgerc)
            .field("section", &self.section)
            .field("max_body_size", &self.max_body_size)
            .finish()
    }
}
