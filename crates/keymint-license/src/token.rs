//! Token assembly and splitting.

use crate::authority::RootCredential;
use crate::descriptor::EntitlementDescriptor;
use crate::error::LicenseError;
use crate::serialize::{CompatSerializer, DescriptorSerializer};
use crate::signer;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Join the four token segments with the literal `-` separator.
///
/// Standard base64 only: its alphabet excludes `-`, so no encoded
/// segment can collide with the separator. A URL-safe variant would
/// break that invariant and must not be substituted here. The plain
/// `license_id` segment is the caller's responsibility: an id
/// containing `-` yields a token that no longer splits into four
/// segments.
pub fn assemble(
    license_id: &str,
    descriptor_bytes: &[u8],
    signature: &[u8],
    cert_der: &[u8],
) -> String {
    format!(
        "{}-{}-{}-{}",
        license_id,
        STANDARD.encode(descriptor_bytes),
        STANDARD.encode(signature),
        STANDARD.encode(cert_der),
    )
}

/// Builder running the full mint pipeline against one loaded credential.
///
/// Holds no mutable state; every [`mint`](TokenBuilder::mint) call is
/// an independent build → serialize → sign → assemble run.
pub struct TokenBuilder {
    credential: RootCredential,
    serializer: Box<dyn DescriptorSerializer>,
}

impl TokenBuilder {
    /// Create a builder using the wire-compatible serializer.
    pub fn new(credential: RootCredential) -> Self {
        Self {
            credential,
            serializer: Box::new(CompatSerializer),
        }
    }

    /// Swap in a different serializer (e.g. the escaping variant for
    /// deployments free of the compatibility constraint).
    pub fn with_serializer(mut self, serializer: impl DescriptorSerializer + 'static) -> Self {
        self.serializer = Box::new(serializer);
        self
    }

    /// Mint one token: build the descriptor for `license_id` and
    /// `codes` paid through `paid_up_to`, serialize, sign with the root
    /// key, and assemble the four-segment string.
    pub fn mint<S: AsRef<str>>(
        &self,
        license_id: &str,
        codes: &[S],
        paid_up_to: &str,
    ) -> Result<String, LicenseError> {
        let descriptor = EntitlementDescriptor::new(license_id, codes, paid_up_to);
        self.mint_descriptor(&descriptor)
    }

    /// Mint a token from an already-built descriptor.
    pub fn mint_descriptor(
        &self,
        descriptor: &EntitlementDescriptor,
    ) -> Result<String, LicenseError> {
        let payload = self.serializer.serialize(descriptor);
        let signature = signer::sign(&payload, self.credential.private_key())?;
        let token = assemble(
            &descriptor.license_id,
            &payload,
            &signature,
            self.credential.certificate_der(),
        );
        tracing::info!(
            license_id = %descriptor.license_id,
            products = descriptor.products.len(),
            "minted license token"
        );
        Ok(token)
    }

    /// The credential this builder signs with.
    pub fn credential(&self) -> &RootCredential {
        &self.credential
    }
}

/// The four segments of a token, with the payload decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts {
    /// First segment, the plain license id.
    pub license_id: String,
    /// Second segment decoded: the serialized descriptor text.
    pub payload: String,
    /// Third segment, still base64.
    pub signature_b64: String,
    /// Fourth segment, still base64 (DER certificate).
    pub certificate_b64: String,
}

/// Split a token into its segments and decode the payload.
///
/// This is parsing for inspection, not verification: the signature is
/// not checked here.
///
/// # Errors
///
/// [`LicenseError::InvalidToken`] unless the input has exactly four
/// `-`-separated segments and the second decodes to UTF-8 text.
pub fn split(token: &str) -> Result<TokenParts, LicenseError> {
    let segments: Vec<&str> = token.trim().split('-').collect();
    if segments.len() != 4 {
        return Err(LicenseError::InvalidToken(format!(
            "expected 4 dash-separated segments, found {}",
            segments.len()
        )));
    }

    let payload_bytes = STANDARD
        .decode(segments[1])
        .map_err(|e| LicenseError::InvalidToken(format!("payload is not base64: {e}")))?;
    let payload = String::from_utf8(payload_bytes)
        .map_err(|e| LicenseError::InvalidToken(format!("payload is not UTF-8: {e}")))?;

    Ok(TokenParts {
        license_id: segments[0].to_string(),
        payload,
        signature_b64: segments[2].to_string(),
        certificate_b64: segments[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_joins_four_segments() {
        let token = assemble("ID1", b"payload", b"sig", b"cert");
        let segments: Vec<&str> = token.split('-').collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], "ID1");
        assert_eq!(STANDARD.decode(segments[1]).unwrap(), b"payload");
        assert_eq!(STANDARD.decode(segments[2]).unwrap(), b"sig");
        assert_eq!(STANDARD.decode(segments[3]).unwrap(), b"cert");
    }

    #[test]
    fn test_assemble_segments_never_contain_separator() {
        // Bytes that would produce '-' under the url-safe alphabet
        let awkward: Vec<u8> = (0u8..=255).collect();
        let token = assemble("ID", &awkward, &awkward, &awkward);
        assert_eq!(token.split('-').count(), 4);
    }

    #[test]
    fn test_split_roundtrip() {
        let token = assemble("LID", "{\"licenseId\":\"LID\"}".as_bytes(), b"sig", b"cert");
        let parts = split(&token).unwrap();
        assert_eq!(parts.license_id, "LID");
        assert_eq!(parts.payload, "{\"licenseId\":\"LID\"}");
        assert_eq!(STANDARD.decode(&parts.signature_b64).unwrap(), b"sig");
        assert_eq!(STANDARD.decode(&parts.certificate_b64).unwrap(), b"cert");
    }

    #[test]
    fn test_split_rejects_wrong_segment_count() {
        let err = split("only-three-segments").unwrap_err();
        assert!(matches!(err, LicenseError::InvalidToken(_)));

        let err = split("a-b-c-d-e").unwrap_err();
        assert!(matches!(err, LicenseError::InvalidToken(_)));
    }

    #[test]
    fn test_split_rejects_bad_base64_payload() {
        let err = split("ID-!!!notbase64!!!-c2ln-Y2VydA==").unwrap_err();
        assert!(matches!(err, LicenseError::InvalidToken(_)));
    }
}
