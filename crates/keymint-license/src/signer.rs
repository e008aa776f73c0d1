//! Descriptor signing.
//!
//! The signature algorithm is SHA-1-with-RSA, PKCS#1 v1.5 padding,
//! computed over the raw serialized descriptor bytes (never the base64
//! text). This is a fixed legacy choice dictated by compatibility with
//! an external verifier outside this system's control. Do not upgrade
//! it unilaterally; a future-compatible fork can swap the algorithm
//! here without touching the rest of the pipeline.

use crate::error::LicenseError;
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha1::Sha1;

/// Sign `payload` with the root private key.
///
/// Deterministic: PKCS#1 v1.5 needs no signer-side randomness, so the
/// same payload and key always yield the same signature bytes.
///
/// # Errors
///
/// [`LicenseError::Signing`] if the primitive rejects the
/// key/algorithm pairing.
pub fn sign(payload: &[u8], key: &RsaPrivateKey) -> Result<Vec<u8>, LicenseError> {
    let signing_key = SigningKey::<Sha1>::new(key.clone());
    let signature = signing_key
        .try_sign(payload)
        .map_err(|e| LicenseError::Signing(e.to_string()))?;
    tracing::debug!(payload_len = payload.len(), "signed descriptor payload");
    Ok(signature.to_vec())
}
