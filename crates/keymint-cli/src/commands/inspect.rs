//! Token inspection.
//!
//! `keymint inspect` - Split a token into its segments and show the
//! decoded payload. No signature check happens here.

use keymint_license::split;
use std::fs;
use std::path::Path;

/// Inspect a token passed literally or as a file path.
pub fn inspect(token: String) -> anyhow::Result<()> {
    // Try to load from file if it looks like a path
    let token_str = if Path::new(&token).exists() {
        fs::read_to_string(&token)?.trim().to_string()
    } else {
        token
    };

    let parts = split(&token_str)?;

    println!("License id:  {}", parts.license_id);
    match serde_json::from_str::<serde_json::Value>(&parts.payload) {
        Ok(value) => println!("Payload:\n{}", serde_json::to_string_pretty(&value)?),
        // Unescaped quotes inside string fields make the payload
        // non-JSON; show it verbatim then.
        Err(_) => println!("Payload (raw):\n{}", parts.payload),
    }
    println!("Signature:   {} base64 chars", parts.signature_b64.len());
    println!("Certificate: {} base64 chars", parts.certificate_b64.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymint_license::assemble;
    use tempfile::tempdir;

    #[test]
    fn test_inspect_token_from_file() {
        let token = assemble("FILE", b"{\"licenseId\":\"FILE\"}", b"sig", b"cert");
        let dir = tempdir().unwrap();
        let path = dir.path().join("token.txt");
        fs::write(&path, format!("{token}\n")).unwrap();

        inspect(path.to_string_lossy().into_owned()).unwrap();
    }

    #[test]
    fn test_inspect_rejects_malformed_token() {
        assert!(inspect("not-a-token".to_string()).is_err());
    }
}
