//! Root authority issuance.
//!
//! The authority runs once: it generates an RSA keypair, self-signs a
//! root certificate over it, and hands both back as PEM documents. Every
//! later token-builder run reloads the persisted credential read-only.

use crate::config::{AuthorityConfig, CERT_FILE_NAME, KEY_FILE_NAME};
use crate::error::LicenseError;
use chrono::Utc;
use rand::RngCore;
use rand::rngs::OsRng;
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair, PKCS_RSA_SHA256, SerialNumber};
use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::pkcs8::{DecodePrivateKey, EncodePrivateKey, LineEnding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use time::{Duration, OffsetDateTime};

/// How certificate serial numbers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialStrategy {
    /// Milliseconds since epoch at issuance. Matches the original
    /// issuer; not collision-resistant across rapid re-issuance or
    /// multiple authorities.
    #[default]
    Clock,

    /// 16 random bytes from the OS rng.
    Random,
}

impl SerialStrategy {
    /// Produce the next serial number as big-endian bytes.
    pub fn next_serial(&self) -> Vec<u8> {
        match self {
            Self::Clock => (Utc::now().timestamp_millis() as u64).to_be_bytes().to_vec(),
            Self::Random => {
                let mut bytes = [0u8; 16];
                OsRng.fill_bytes(&mut bytes);
                // Keep the DER integer positive
                bytes[0] &= 0x7f;
                bytes.to_vec()
            }
        }
    }
}

/// The root credential: a private key and the self-signed certificate
/// binding its public half.
///
/// Created once by [`issue`], persisted as two PEM documents
/// (`ca.key`, `ca.crt`), never mutated afterwards.
#[derive(Clone)]
pub struct RootCredential {
    private_key: RsaPrivateKey,
    key_pem: String,
    cert_pem: String,
    cert_der: Vec<u8>,
}

impl std::fmt::Debug for RootCredential {
    // Key material stays out of debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootCredential")
            .field("key_bits", &(self.private_key.size() * 8))
            .field("cert_der_len", &self.cert_der.len())
            .finish_non_exhaustive()
    }
}

impl RootCredential {
    /// The RSA private key.
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// The private key as a PKCS#8 PEM document.
    pub fn key_pem(&self) -> &str {
        &self.key_pem
    }

    /// The root certificate as a PEM document.
    pub fn certificate_pem(&self) -> &str {
        &self.cert_pem
    }

    /// The root certificate in DER encoding, as embedded into tokens.
    pub fn certificate_der(&self) -> &[u8] {
        &self.cert_der
    }

    /// Write `ca.key` and `ca.crt` into `dir`, creating it if needed.
    ///
    /// Returns the two paths written.
    pub fn save_to_dir(&self, dir: &Path) -> Result<(PathBuf, PathBuf), LicenseError> {
        fs::create_dir_all(dir)?;
        let key_path = dir.join(KEY_FILE_NAME);
        let cert_path = dir.join(CERT_FILE_NAME);
        fs::write(&key_path, &self.key_pem)?;
        fs::write(&cert_path, &self.cert_pem)?;
        tracing::info!(
            key = %key_path.display(),
            cert = %cert_path.display(),
            "persisted root credential"
        );
        Ok((key_path, cert_path))
    }

    /// Load a previously persisted credential from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::CredentialLoad`] if either file is
    /// missing, unreadable or malformed.
    pub fn load_from_dir(dir: &Path) -> Result<Self, LicenseError> {
        let key_path = dir.join(KEY_FILE_NAME);
        let key_pem = fs::read_to_string(&key_path)
            .map_err(|e| LicenseError::CredentialLoad(format!("{}: {e}", key_path.display())))?;
        // ca.key may be PKCS#8 ("BEGIN PRIVATE KEY") or the older
        // PKCS#1 framing ("BEGIN RSA PRIVATE KEY"); accept both.
        let private_key = RsaPrivateKey::from_pkcs8_pem(&key_pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(&key_pem))
            .map_err(|e| LicenseError::CredentialLoad(format!("{}: {e}", key_path.display())))?;

        let cert_path = dir.join(CERT_FILE_NAME);
        let cert_pem = fs::read_to_string(&cert_path)
            .map_err(|e| LicenseError::CredentialLoad(format!("{}: {e}", cert_path.display())))?;
        let mut reader = BufReader::new(cert_pem.as_bytes());
        let cert_der = rustls_pemfile::certs(&mut reader)
            .next()
            .ok_or_else(|| {
                LicenseError::CredentialLoad(format!(
                    "{}: no certificate in file",
                    cert_path.display()
                ))
            })?
            .map_err(|e| LicenseError::CredentialLoad(format!("{}: {e}", cert_path.display())))?
            .to_vec();

        tracing::debug!(dir = %dir.display(), "loaded root credential");
        Ok(Self {
            private_key,
            key_pem,
            cert_pem,
            cert_der,
        })
    }
}

/// Issue a fresh root credential.
///
/// Generates an RSA keypair of `config.key_bits` bits from the OS rng,
/// then builds a certificate with the configured issuer and subject
/// common names, a serial from the configured [`SerialStrategy`], and a
/// validity window backdated by `skew_hours` and running
/// `validity_days` into the future. The certificate is signed with the
/// generated key itself, using SHA-256-with-RSA.
///
/// Persistence is the caller's concern; see
/// [`RootCredential::save_to_dir`].
///
/// # Errors
///
/// [`LicenseError::KeyGeneration`] if the key primitive or the random
/// source fails, [`LicenseError::CertificateBuild`] if self-signing
/// fails.
pub fn issue(config: &AuthorityConfig) -> Result<RootCredential, LicenseError> {
    tracing::debug!(key_bits = config.key_bits, "generating root keypair");
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, config.key_bits)
        .map_err(|e| LicenseError::KeyGeneration(e.to_string()))?;
    let key_pem = private_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| LicenseError::KeyGeneration(e.to_string()))?
        .to_string();

    let key_pair = KeyPair::from_pem_and_sign_algo(&key_pem, &PKCS_RSA_SHA256)
        .map_err(|e| LicenseError::CertificateBuild(e.to_string()))?;

    let now = OffsetDateTime::now_utc();
    let not_before = now - Duration::hours(config.skew_hours);
    let not_after = now + Duration::days(config.validity_days);

    // Carrier for the issuer name: the subject certificate below is
    // signed by this one, which shares the same key. The subject and
    // issuer common names differ, per the original format.
    let mut issuer_params = CertificateParams::default();
    let mut issuer_dn = DistinguishedName::new();
    issuer_dn.push(DnType::CommonName, config.issuer_name.as_str());
    issuer_params.distinguished_name = issuer_dn;
    issuer_params.not_before = not_before;
    issuer_params.not_after = not_after;
    let issuer_cert = issuer_params
        .self_signed(&key_pair)
        .map_err(|e| LicenseError::CertificateBuild(e.to_string()))?;

    let mut params = CertificateParams::default();
    let mut subject_dn = DistinguishedName::new();
    subject_dn.push(DnType::CommonName, config.subject_name.as_str());
    params.distinguished_name = subject_dn;
    params.not_before = not_before;
    params.not_after = not_after;
    params.serial_number = Some(SerialNumber::from(config.serial.next_serial()));

    let cert = params
        .signed_by(&key_pair, &issuer_cert, &key_pair)
        .map_err(|e| LicenseError::CertificateBuild(e.to_string()))?;

    let cert_pem = cert.pem();
    let cert_der = cert.der().to_vec();

    tracing::info!(
        issuer = %config.issuer_name,
        subject = %config.subject_name,
        key_bits = config.key_bits,
        "issued root credential"
    );
    Ok(RootCredential {
        private_key,
        key_pem,
        cert_pem,
        cert_der,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_serial_is_current_millis() {
        let before = Utc::now().timestamp_millis();
        let serial = SerialStrategy::Clock.next_serial();
        let after = Utc::now().timestamp_millis();

        assert_eq!(serial.len(), 8);
        let value = i64::from_be_bytes(serial.try_into().unwrap());
        assert!(value >= before && value <= after);
    }

    #[test]
    fn test_random_serial_is_positive_and_unique() {
        let a = SerialStrategy::Random.next_serial();
        let b = SerialStrategy::Random.next_serial();

        assert_eq!(a.len(), 16);
        assert_eq!(a[0] & 0x80, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_load_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = RootCredential::load_from_dir(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, LicenseError::CredentialLoad(_)));
    }

    #[test]
    fn test_load_malformed_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(KEY_FILE_NAME), "not a pem").unwrap();
        std::fs::write(dir.path().join(CERT_FILE_NAME), "not a pem").unwrap();

        let err = RootCredential::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LicenseError::CredentialLoad(_)));
    }
}
