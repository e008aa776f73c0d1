//! CLI command implementations for Keymint.

pub mod authority;
pub mod inspect;
pub mod mint;
