// Env values used by edgegrid services.
pub const AKAMAI_CLIENT_TOKEN: &str = "AKAMAI_CLIENT_TOKEN";
pub const AKAMAI_ACCESS_TOKEN: &str = "AKAMAI_ACCESS_TOKEN";
pub const AKAMAI_CLIENT_SECRET: &str = "AKAMAI_CLIENT_SECRET";
pub const AKAMAI_HOST: &str = "AKAMAI_HOST";
pub const AKAMAI_EDGERC: &str = "AKAMAI_EDGERC";
pub const AKAMAI_EDGERC_SECTION: &str = "AKAMAI_EDGERC_SECTION";
pub const AKAMAI_MAX_BODY: &str = "AKAMAI_MAX_BODY";

// Defaults.
pub const DEFAULT_EDGERC_PATH: &str = "~/.edgerc";
pub const DEFAULT_EDGERC_SECTION: &str = "default";
pub const DEFAULT_MAX_BODY_SIZE: usize = 50000;

// Authorization header layout.
pub const EDGEGRID_ALGORITHM: &str = "EG1-HMAC-SHA256";
pub const AUTH_CLIENT_TOKEN_NAME: &str = "client_token";
pub const AUTH_ACCESS_TOKEN_NAME: &str = "access_token";
pub const AUTH_TIMESTAMP_NAME: &str = "timestamp";
pub const AUTH_NONCE_NAME: &str = "nonce";
pub const AUTH_SIGNATURE_NAME: &str = "signature";
