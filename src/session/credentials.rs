use sha2::{Digest, Sha256};

use crate::config::AuthConfig;

/// The single account allowed to log in, with its password stored as a
/// lowercase hex SHA-256 digest.
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    email: String,
    password_sha256: String,
}

impl AccountCredentials {
    pub fn new(email: impl Into<String>, password_sha256: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_sha256: password_sha256.into().to_ascii_lowercase(),
        }
    }

    pub fn from_config(auth: &AuthConfig) -> Self {
        Self::new(auth.account_email.clone(), auth.account_password_sha256.clone())
    }

    /// Email match is case-insensitive. An unconfigured account never matches.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        if self.email.is_empty() || self.password_sha256.is_empty() {
            return false;
        }
        if !self.email.eq_ignore_ascii_case(email.trim()) {
            return false;
        }

        hash_password(password) == self.password_sha256
    }
}

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_lowercase_hex() {
        assert_eq!(
            hash_password("demo"),
            "2a97516c354b68848cdbd8f54a226a0a55b21ed138e207ad6c5cbb9c00aa5aea"
        );
    }

    #[test]
    fn verifies_matching_account() {
        let account = AccountCredentials::new("demo@pocketbook.local", hash_password("demo"));
        assert!(account.verify("demo@pocketbook.local", "demo"));
        assert!(account.verify(" Demo@Pocketbook.Local ", "demo"));
        assert!(!account.verify("demo@pocketbook.local", "Demo"));
        assert!(!account.verify("someone@else.example", "demo"));
    }

    #[test]
    fn unconfigured_account_rejects_everything() {
        let account = AccountCredentials::new("", "");
        assert!(!account.verify("", ""));
    }
}
