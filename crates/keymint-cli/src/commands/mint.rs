//! Token minting.
//!
//! `keymint mint` - Load the persisted root credential and emit one
//! license token.

use anyhow::Context;
use chrono::{Months, Utc};
use keymint_license::{DEFAULT_PRODUCT_CODES, RootCredential, TokenBuilder};
use std::fs;
use std::path::PathBuf;

/// Mint a token and print it to stdout (or write it to `output`).
pub fn mint(
    authority: PathBuf,
    license_id: String,
    codes: Vec<String>,
    paid_up_to: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let credential = RootCredential::load_from_dir(&authority).with_context(|| {
        format!(
            "No usable root credential in {}. Run `keymint authority issue` first",
            authority.display()
        )
    })?;
    let builder = TokenBuilder::new(credential);

    let codes: Vec<String> = if codes.is_empty() {
        DEFAULT_PRODUCT_CODES.iter().map(|c| c.to_string()).collect()
    } else {
        codes
    };

    let paid_up_to = match paid_up_to {
        Some(date) => date,
        None => default_paid_up_to()?,
    };

    let token = builder.mint(&license_id, &codes, &paid_up_to)?;

    if let Some(output_path) = output {
        fs::write(&output_path, &token)?;
        println!("✔ Token written to: {}", output_path.display());
        println!("  License id: {license_id}");
        println!("  Products:   {}", codes.len());
        println!("  Paid up to: {paid_up_to}");
    } else {
        println!("{token}");
    }

    Ok(())
}

/// Ten years out from today, the original issuer's horizon.
fn default_paid_up_to() -> anyhow::Result<String> {
    let date = Utc::now()
        .date_naive()
        .checked_add_months(Months::new(120))
        .context("pay-through date out of range")?;
    Ok(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymint_license::{AuthorityConfig, split};
    use tempfile::tempdir;

    #[test]
    fn test_default_paid_up_to_is_ten_years_out() {
        let date = default_paid_up_to().unwrap();
        let expected_year = Utc::now().date_naive().format("%Y").to_string();
        let expected_year: i32 = expected_year.parse().unwrap();
        assert!(date.starts_with(&(expected_year + 10).to_string()));
    }

    #[test]
    fn test_mint_with_default_catalog() {
        let dir = tempdir().unwrap();
        let config = AuthorityConfig {
            key_bits: 2048,
            ..Default::default()
        };
        let credential = keymint_license::issue(&config).unwrap();
        credential.save_to_dir(dir.path()).unwrap();

        let token_path = dir.path().join("license.txt");
        mint(
            dir.path().to_path_buf(),
            "CLITEST".to_string(),
            Vec::new(),
            Some("2034-01-01".to_string()),
            Some(token_path.clone()),
        )
        .unwrap();

        let token = fs::read_to_string(&token_path).unwrap();
        let parts = split(&token).unwrap();
        assert_eq!(parts.license_id, "CLITEST");
        // Empty code list falls back to the full catalog
        assert_eq!(
            parts.payload.matches("\"code\":").count(),
            DEFAULT_PRODUCT_CODES.len()
        );
    }

    #[test]
    fn test_mint_without_credential_fails() {
        let dir = tempdir().unwrap();
        let err = mint(
            dir.path().to_path_buf(),
            "X".to_string(),
            vec!["II".to_string()],
            Some("2030-01-01".to_string()),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("authority issue"));
    }
}
