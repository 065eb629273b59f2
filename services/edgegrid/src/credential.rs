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

use std::fmt::{Debug, Formatter};

use purgesign_core::utils::{has_text, Redact};
use purgesign_core::{Error, Result, SigningCredential};

/// Credential for EdgeGrid v1 signing.
///
/// Holds the client token that identifies the API client, the access token
/// that carries its authorizations, the secret used to derive signing keys
/// and the base URL of the API host the tokens were issued for.
///
/// All fields are non-empty and cannot change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    client_token: String,
    access_token: String,
    client_secret: String,
    base_url: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// Returns an invalid argument error if any field is empty or blank.
    pub fn new(
        client_token: impl Into<String>,
        access_token: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let cred = Self {
            client_token: client_token.into(),
            access_token: access_token.into(),
            client_secret: client_secret.into(),
            base_url: base_url.into(),
        };

        for (name, value) in [
            ("client token", &cred.client_token),
            ("access token", &cred.access_token),
            ("client secret", &cred.client_secret),
            ("base URL", &cred.base_url),
        ] {
            if !has_text(value) {
                return Err(Error::invalid_argument(format!("{name} cannot be empty")));
            }
        }

        Ok(cred)
    }

    /// The client token.
    pub fn client_token(&self) -> &str {
        &self.client_token
    }

    /// The access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The secret associated with the client token.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The base URL associated with the client token, e.g.
    /// `https://akab-xxxx.luna.akamaiapis.net`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_token", &Redact::from(&self.client_token))
            .field("access_token", &Redact::from(&self.access_token))
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        has_text(&self.client_token)
            && has_text(&self.access_token)
            && has_text(&self.client_secret)
            && has_text(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_new_credential() {
        let cred = Credential::new("ct1", "at1", "secret", "https://example.akamaiapi.net")
            .expect("credential must be valid");
        assert_eq!(cred.client_token(), "ct1");
        assert_eq!(cred.access_token(), "at1");
        assert_eq!(cred.client_secret(), "secret");
        assert_eq!(cred.base_url(), "https://example.akamaiapi.net");
        assert!(cred.is_valid());
    }

    #[test_case("", "at", "cs", "https://h" ; "empty client token")]
    #[test_case("ct", " ", "cs", "https://h" ; "blank access token")]
    #[test_case("ct", "at", "", "https://h" ; "empty client secret")]
    #[test_case("ct", "at", "cs", "" ; "empty base url")]
    fn test_new_credential_rejects_empty(ct: &str, at: &str, cs: &str, url: &str) {
        let err = Credential::new(ct, at, cs, url).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new(
            "akab-client-token-xxxx",
            "akab-access-token-yyyy",
            "super-secret-client-secret",
            "https://example.akamaiapi.net",
        )
        .unwrap();

        let s = format!("{cred:?}");
        assert!(!s.contains("super-secret-client-secret"));
        assert!(s.contains("aka***xxx"));
        assert!(s.contains("https://example.akamaiapi.net"));
    }
}
