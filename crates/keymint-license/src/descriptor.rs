//! Entitlement descriptors: what is licensed, to whom, until when.

use serde::Serialize;

/// Fixed metadata string carried through every descriptor unmodified.
pub const DEFAULT_METADATA: &str = "0120230914PSAX000005";

/// Fixed hash string carried through every descriptor unmodified.
pub const DEFAULT_HASH: &str = "TRIAL:-1920204289";

/// One licensed product or feature.
///
/// The `Serialize` derive is for inspection output only; the signed
/// wire form comes from [`crate::serialize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntitlement {
    /// Short uppercase product identifier.
    pub code: String,
    /// Nominal paid-through date, `YYYY-MM-DD`.
    pub fallback_date: String,
    /// Same value as `fallback_date` in this design.
    pub paid_up_to: String,
    /// Always asserted.
    pub extended: bool,
}

impl ProductEntitlement {
    /// Entitle `code` through `date` (both the fallback and the
    /// paid-up-to date take the same value).
    pub fn new(code: impl Into<String>, date: impl Into<String>) -> Self {
        let date = date.into();
        Self {
            code: code.into(),
            fallback_date: date.clone(),
            paid_up_to: date,
            extended: true,
        }
    }
}

/// The signed payload's logical content.
///
/// Field order here is load-bearing: the canonical serializer emits
/// fields in declaration order, and that byte stream is what gets
/// signed. Do not reorder or omit fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementDescriptor {
    pub license_id: String,
    pub licensee_name: String,
    pub assignee_name: String,
    pub assignee_email: String,
    pub license_restriction: String,
    pub check_concurrent_use: bool,
    /// Ordered: preserved exactly as supplied by the caller.
    pub products: Vec<ProductEntitlement>,
    pub metadata: String,
    pub hash: String,
    pub grace_period_days: u32,
    pub auto_prolongated: bool,
    pub is_auto_prolongated: bool,
}

impl EntitlementDescriptor {
    /// Build a descriptor for `license_id` entitling each of `codes`
    /// through `paid_up_to`, in input order.
    ///
    /// The licensee and assignee names mirror the license id; every
    /// other field takes its fixed default. Pure construction, no
    /// failure modes.
    pub fn new<S: AsRef<str>>(license_id: &str, codes: &[S], paid_up_to: &str) -> Self {
        let products = codes
            .iter()
            .map(|code| ProductEntitlement::new(code.as_ref(), paid_up_to))
            .collect();

        Self {
            license_id: license_id.to_string(),
            licensee_name: license_id.to_string(),
            assignee_name: license_id.to_string(),
            assignee_email: String::new(),
            license_restriction: String::new(),
            check_concurrent_use: false,
            products,
            metadata: DEFAULT_METADATA.to_string(),
            hash: DEFAULT_HASH.to_string(),
            grace_period_days: 7,
            auto_prolongated: true,
            is_auto_prolongated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_mirror_license_id() {
        let d = EntitlementDescriptor::new("ACME-1", &["II"], "2030-01-01");
        assert_eq!(d.license_id, "ACME-1");
        assert_eq!(d.licensee_name, "ACME-1");
        assert_eq!(d.assignee_name, "ACME-1");
        assert_eq!(d.assignee_email, "");
        assert_eq!(d.license_restriction, "");
    }

    #[test]
    fn test_product_order_preserved() {
        let d = EntitlementDescriptor::new("T", &["A", "B", "C"], "2030-01-01");
        let codes: Vec<&str> = d.products.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_fixed_defaults() {
        let d = EntitlementDescriptor::new("T", &["A"], "2030-01-01");
        assert!(!d.check_concurrent_use);
        assert_eq!(d.metadata, DEFAULT_METADATA);
        assert_eq!(d.hash, DEFAULT_HASH);
        assert_eq!(d.grace_period_days, 7);
        assert!(d.auto_prolongated);
        assert!(d.is_auto_prolongated);

        let p = &d.products[0];
        assert_eq!(p.fallback_date, "2030-01-01");
        assert_eq!(p.paid_up_to, "2030-01-01");
        assert!(p.extended);
    }

    #[test]
    fn test_inspection_serde_uses_camel_case() {
        let d = EntitlementDescriptor::new("T", &["A"], "2030-01-01");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["licenseId"], "T");
        assert_eq!(json["gracePeriodDays"], 7);
        assert_eq!(json["isAutoProlongated"], true);
        assert_eq!(json["products"][0]["fallbackDate"], "2030-01-01");
    }
}
