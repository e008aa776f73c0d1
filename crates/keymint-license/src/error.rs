//! Error types for the license crate.

use thiserror::Error;

/// Errors that can occur during issuance and token assembly.
///
/// None of these are recovered locally: every error aborts the current
/// run and is surfaced to the caller with the failing stage attached.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Failed to generate the RSA keypair.
    #[error("failed to generate root keypair: {0}")]
    KeyGeneration(String),

    /// Failed to build or self-sign the root certificate.
    #[error("failed to build root certificate: {0}")]
    CertificateBuild(String),

    /// Root credential file missing, unreadable or malformed.
    #[error("failed to load root credential: {0}")]
    CredentialLoad(String),

    /// The signature primitive rejected the key/algorithm pairing.
    #[error("failed to sign descriptor: {0}")]
    Signing(String),

    /// Descriptor could not be serialized.
    ///
    /// Reserved: the canonical serializer is total for well-formed
    /// descriptors, so this only fires if input validation is added.
    #[error("failed to serialize descriptor: {0}")]
    Serialization(String),

    /// A token string did not match the four-segment wire format.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// IO error (reading/writing credential files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
