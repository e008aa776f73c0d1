//! # keymint-license
//!
//! Root authority issuance and license token assembly for Keymint.
//!
//! This crate provides functionality for:
//! - Issuing a self-signed RSA root credential (private key + certificate)
//! - Building entitlement descriptors (identity, product list, policy flags)
//! - Serializing descriptors into the exact byte stream that gets signed
//! - Signing descriptors and assembling the final delimited token string
//!
//! ## Pipeline
//!
//! Two pipelines share one artifact, the root credential:
//!
//! | Pipeline | Runs | Produces |
//! |----------|------|----------|
//! | **Authority issuer** | Once, out-of-band | `ca.key` + `ca.crt` |
//! | **Token builder** | Per license | One delimited token string |
//!
//! Every token-builder run is a pure function of the persisted root
//! credential, the entitlement request and the current time. There is no
//! shared mutable runtime state and no retry logic anywhere: any failure
//! aborts the run and surfaces to the caller.
//!
//! ## Token wire format
//!
//! ```text
//! <licenseId>-<base64(descriptor bytes)>-<base64(signature)>-<base64(certificate DER)>
//! ```
//!
//! Standard base64 alphabet throughout. The signature is SHA-1-with-RSA
//! (PKCS#1 v1.5) over the raw descriptor bytes, a fixed legacy choice
//! dictated by an external verifier; see [`signer`] before considering
//! any change to it.

pub mod authority;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod serialize;
pub mod signer;
pub mod token;

pub use authority::{RootCredential, SerialStrategy, issue};
pub use catalog::DEFAULT_PRODUCT_CODES;
pub use config::AuthorityConfig;
pub use descriptor::{EntitlementDescriptor, ProductEntitlement};
pub use error::LicenseError;
pub use serialize::{CompatSerializer, DescriptorSerializer, EscapingSerializer};
pub use token::{TokenBuilder, TokenParts, assemble, split};
