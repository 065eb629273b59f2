//! HTTP Basic authentication for purgesign.
//!
//! Used by the legacy CCU v2 purge API, which authenticates every request
//! with `Authorization: Basic base64(username:password)`.
//!
//! ```no_run
//! use purgesign_basic::{RequestSigner, StaticCredentialProvider};
//! use purgesign_core::{Context, Result, Signer, SigningRequest};
//!
//! # async fn example() -> Result<()> {
//! let provider = StaticCredentialProvider::new("username", "password")?;
//! let signer = Signer::new(Context::new(), provider, RequestSigner::new());
//!
//! let req = SigningRequest::post(
//!     "https://api.ccu.akamai.com",
//!     "/ccu/v2/queues/default",
//!     bytes::Bytes::new(),
//! );
//! let headers = signer.sign(&req).await?;
//! assert!(headers.authorization().starts_with("Basic "));
//! # Ok(())
//! # }
//! ```

mod constants;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{basic_authorization, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
