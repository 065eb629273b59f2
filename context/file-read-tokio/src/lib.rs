// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Tokio-based file reading implementation for purgesign.
//!
//! `TokioFileRead` implements the `FileRead` trait from `purgesign_core`
//! with `tokio::fs`, so that credential providers can read `.edgerc` files
//! without blocking the runtime.
//!
//! ## Example
//!
//! ```no_run
//! use purgesign_core::{Context, OsEnv};
//! use purgesign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     match ctx.file_read("/home/purge/.edgerc").await {
//!         Ok(content) => println!("Read {} bytes", content.len()),
//!         Err(e) => eprintln!("Failed to read file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use purgesign_core::{Error, FileRead, Result};

/// Tokio-based implementation of the `FileRead` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::unexpected(format!("failed to read file {path}")).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use purgesign_core::Context;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_existing_file() -> Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        f.write_all(b"[default]\nhost = example.akamaiapis.net\n")?;

        let ctx = Context::new().with_file_read(TokioFileRead);
        let content = ctx
            .file_read_as_string(&f.path().to_string_lossy())
            .await?;
        assert!(content.contains("example.akamaiapis.net"));
        Ok(())
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let ctx = Context::new().with_file_read(TokioFileRead);
        assert!(ctx.file_read("/definitely/not/here/.edgerc").await.is_err());
    }
}
