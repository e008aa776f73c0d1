//! Authority configuration.

use crate::authority::SerialStrategy;
use serde::{Deserialize, Serialize};

/// File name of the persisted private key.
pub const KEY_FILE_NAME: &str = "ca.key";

/// File name of the persisted root certificate.
pub const CERT_FILE_NAME: &str = "ca.crt";

/// Configuration for issuing the root credential.
///
/// All fields default to the values the external verifier expects;
/// deployments only override what they must.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityConfig {
    /// Common name of the certificate issuer (CA-style name).
    #[serde(default = "default_issuer_name")]
    pub issuer_name: String,

    /// Common name of the certificate subject (identity name).
    #[serde(default = "default_subject_name")]
    pub subject_name: String,

    /// RSA modulus size in bits.
    #[serde(default = "default_key_bits")]
    pub key_bits: usize,

    /// Certificate lifetime in days, counted from the issuance instant.
    #[serde(default = "default_validity_days")]
    pub validity_days: i64,

    /// Hours to backdate `notBefore`, tolerating clock skew on
    /// verifying systems.
    #[serde(default = "default_skew_hours")]
    pub skew_hours: i64,

    /// How certificate serial numbers are generated.
    #[serde(default)]
    pub serial: SerialStrategy,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            issuer_name: default_issuer_name(),
            subject_name: default_subject_name(),
            key_bits: default_key_bits(),
            validity_days: default_validity_days(),
            skew_hours: default_skew_hours(),
            serial: SerialStrategy::default(),
        }
    }
}

fn default_issuer_name() -> String {
    "JetProfile CA".to_string()
}

fn default_subject_name() -> String {
    "keymint-root".to_string()
}

fn default_key_bits() -> usize {
    4096
}

fn default_validity_days() -> i64 {
    3650
}

fn default_skew_hours() -> i64 {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthorityConfig::default();
        assert_eq!(config.issuer_name, "JetProfile CA");
        assert_eq!(config.key_bits, 4096);
        assert_eq!(config.validity_days, 3650);
        assert_eq!(config.skew_hours, 24);
        assert_eq!(config.serial, SerialStrategy::Clock);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: AuthorityConfig =
            serde_json::from_str(r#"{"subject_name":"acme-root","serial":"random"}"#).unwrap();
        assert_eq!(config.subject_name, "acme-root");
        assert_eq!(config.serial, SerialStrategy::Random);
        assert_eq!(config.issuer_name, "JetProfile CA");
        assert_eq!(config.key_bits, 4096);
    }
}
