//! Akamai EdgeGrid v1 signing implementation for purgesign.
//!
//! This crate signs requests to Akamai OPEN APIs, such as the Fast Purge
//! (CCU v3) endpoints, with the `EG1-HMAC-SHA256` scheme.
//!
//! ## Overview
//!
//! Every signature derives a one-time signing key from the client secret and
//! the request timestamp, hashes the first bytes of the body, and covers the
//! host and path of the request. The resulting `Authorization` value embeds a
//! fresh nonce, so a header is valid for exactly one request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bytes::Bytes;
//! use purgesign_core::{Context, OsEnv, Result, Signer, SigningRequest};
//! use purgesign_edgegrid::{DefaultCredentialProvider, RequestSigner};
//! use purgesign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//!
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let cred = signer.credential().await?;
//!     let req = SigningRequest::post(
//!         cred.base_url(),
//!         "/ccu/v3/invalidate/url/production",
//!         Bytes::from_static(br#"{"objects":["/index.html"]}"#),
//!     );
//!     let headers = signer.sign(&req).await?;
//!     println!("{}", headers.authorization());
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export AKAMAI_CLIENT_TOKEN=akab-client-token
//! export AKAMAI_ACCESS_TOKEN=akab-access-token
//! export AKAMAI_CLIENT_SECRET=client-secret
//! export AKAMAI_HOST=akab-xxxx.purge.akamaiapis.net
//! ```
//!
//! ### `.edgerc` File
//!
//! The section named by `AKAMAI_EDGERC_SECTION` (default `default`) of the
//! file at `AKAMAI_EDGERC` (default `~/.edgerc`).

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
