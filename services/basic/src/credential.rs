use std::fmt::{Debug, Formatter};

use purgesign_core::utils::{has_text, Redact};
use purgesign_core::{Error, Result, SigningCredential};

/// Username and password for HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    /// Create a new credential, rejecting an empty username or password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let cred = Self {
            username: username.into(),
            password: password.into(),
        };

        if !has_text(&cred.username) {
            return Err(Error::invalid_argument("username cannot be empty"));
        }
        if !has_text(&cred.password) {
            return Err(Error::invalid_argument("password cannot be empty"));
        }

        Ok(cred)
    }

    /// The username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &Redact::from(&self.password))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        has_text(&self.username) && has_text(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejects_empty_fields() {
        assert!(Credential::new("", "p").unwrap_err().is_invalid_argument());
        assert!(Credential::new("u", "  ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_debug_redacts_password() {
        let cred = Credential::new("purge-user", "very-secret-password").unwrap();

        let s = format!("{cred:?}");
        assert!(s.contains("purge-user"));
        assert!(!s.contains("very-secret-password"));
    }
}
