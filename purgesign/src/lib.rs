//! Signing and dispatching CDN purge requests.
//!
//! `purgesign` re-exports [`purgesign_core`] and wires the EdgeGrid and Basic
//! signers to the CCU purge APIs.
//!
//! ## Example
//!
//! ```no_run
//! use purgesign::{default_context, CcuV3Client, PurgeRequest, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = CcuV3Client::from_context(default_context());
//!
//! let req = PurgeRequest::new(["/index.html".to_string(), "/css/site.css".to_string()]);
//! let resp = client.purge_by_url(&req).await?;
//! println!("purge {:?} accepted", resp.purge_id);
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub use purgesign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

/// EdgeGrid v1 signing.
pub mod edgegrid {
    pub use purgesign_edgegrid::*;
}

/// HTTP Basic authentication.
pub mod basic {
    pub use purgesign_basic::*;
}

mod request;
pub use request::{PurgeRequest, PurgeType};

mod response;
pub use response::PurgeResponse;

pub mod normalize;

mod ccu;
pub use ccu::*;
