//! Locations used by the provisioning steps.
//!
//! # Configuration
//!
//! - `SCHEMA_PATH`: SQL schema script (default: `database.sql`)
//! - `REGISTRATION_URL`: endpoint that creates the test accounts
//!   (default: `http://localhost:8080/api/v1/register_testing_users/`)
//! - `PRIVATE_KEY_PATH`: PKCS#8 private key output (default: `ecc_private_key.pem`)
//! - `PUBLIC_KEY_PATH`: public key output (default: `ecc_public_key.pem`)

use std::path::PathBuf;

pub const DEFAULT_REGISTRATION_URL: &str = "http://localhost:8080/api/v1/register_testing_users/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub schema_path: PathBuf,
    pub registration_url: String,
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("database.sql"),
            registration_url: DEFAULT_REGISTRATION_URL.to_string(),
            private_key_path: PathBuf::from("ecc_private_key.pem"),
            public_key_path: PathBuf::from("ecc_public_key.pem"),
        }
    }
}

impl ProvisionConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            schema_path: non_empty("SCHEMA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_path),
            registration_url: non_empty("REGISTRATION_URL").unwrap_or(defaults.registration_url),
            private_key_path: non_empty("PRIVATE_KEY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.private_key_path),
            public_key_path: non_empty("PUBLIC_KEY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_key_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProvisionConfig::from_lookup(|_| None);
        assert_eq!(config.schema_path, PathBuf::from("database.sql"));
        assert_eq!(config.registration_url, DEFAULT_REGISTRATION_URL);
        assert_eq!(config.private_key_path, PathBuf::from("ecc_private_key.pem"));
        assert_eq!(config.public_key_path, PathBuf::from("ecc_public_key.pem"));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = ProvisionConfig::from_lookup(|key| match key {
            "SCHEMA_PATH" => Some("/srv/schema.sql".to_string()),
            "REGISTRATION_URL" => Some("".to_string()),
            "PUBLIC_KEY_PATH" => Some("keys/pub.pem".to_string()),
            _ => None,
        });
        assert_eq!(config.schema_path, PathBuf::from("/srv/schema.sql"));
        assert_eq!(config.registration_url, DEFAULT_REGISTRATION_URL);
        assert_eq!(config.public_key_path, PathBuf::from("keys/pub.pem"));
        assert_eq!(config.private_key_path, PathBuf::from("ecc_private_key.pem"));
    }
}
