use crate::config::host_to_base_url;
use crate::{Config, Credential};
use async_trait::async_trait;
use ini::Ini;
use log::debug;
use purgesign_core::{Context, Error, ProvideCredential, Result};

/// EdgercCredentialProvider loads EdgeGrid credentials from an `.edgerc` file.
///
/// The file is INI formatted:
///
/// ```ini
/// [default]
/// client_secret = xxxxxxxx
/// host = akab-xxxxxxxx.luna.akamaiapis.net
/// access_token = akab-xxxxxxxx
/// client_token = akab-xxxxxxxx
/// ```
///
/// The path is taken from `with_path()`, then `AKAMAI_EDGERC`, then `~/.edgerc`.
/// The section is taken from `with_section()`, then `AKAMAI_EDGERC_SECTION`,
/// then `default`.
///
/// A missing file or section yields `None`; a file that is not valid INI is a
/// config error.
#[derive(Debug, Default)]
pub struct EdgercCredentialProvider {
    config: Config,
}

impl EdgercCredentialProvider {
    /// Create a new EdgercCredentialProvider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EdgercCredentialProvider from config.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the path to the edgerc file.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.config.edgerc = Some(path.into());
        self
    }

    /// Set the section name to read.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.config.section = Some(section.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for EdgercCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.clone().from_env(ctx);

        let path = config.edgerc_path();
        let Some(expanded_path) = ctx.expand_home_dir(path) else {
            debug!("failed to expand homedir for path: {path}");
            return Ok(None);
        };

        let content = match ctx.file_read_as_string(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read edgerc file {expanded_path}: {err:?}");
                return Ok(None);
            }
        };

        let conf = Ini::load_from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse edgerc file {expanded_path}"))
                .with_source(e)
        })?;

        let section = config.section_name();
        let Some(props) = conf.section(Some(section)) else {
            debug!("section {section} not found in edgerc file {expanded_path}");
            return Ok(None);
        };

        match (
            props.get("client_token"),
            props.get("access_token"),
            props.get("client_secret"),
            props.get("host"),
        ) {
            (Some(ct), Some(at), Some(cs), Some(host)) => {
                Credential::new(ct, at, cs, host_to_base_url(host)).map(Some)
            }
            _ => {
                debug!("section {section} in edgerc file {expanded_path} is incomplete");
                Ok(None)
            }
        }
    }
}
