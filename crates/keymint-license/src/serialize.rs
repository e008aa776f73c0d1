//! Canonical descriptor serialization.
//!
//! The serializer output is the exact byte sequence that gets signed
//! and base64-embedded into the token, so any compatible verifier must
//! be able to reproduce it byte for byte. Deterministic: identical
//! descriptors always serialize identically.

use crate::descriptor::{EntitlementDescriptor, ProductEntitlement};

/// Turns a descriptor into the bytes that get signed and transmitted.
pub trait DescriptorSerializer {
    /// Serialize `descriptor` to its canonical UTF-8 byte form.
    fn serialize(&self, descriptor: &EntitlementDescriptor) -> Vec<u8>;
}

/// The wire-compatible serializer.
///
/// Single line, brace-delimited, comma-separated key/value pairs with
/// double-quoted string values and bare booleans/integers, in exact
/// declaration order. Adjacent product objects are joined with a comma
/// and a space; everything else uses bare commas. String values are
/// **not** escaped: a quote or
/// backslash inside a field passes through verbatim. That is a latent
/// fragility inherited from the original format, kept intentionally —
/// downstream verifiers may depend on the unescaped form. Use
/// [`EscapingSerializer`] for deployments free of that constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatSerializer;

impl DescriptorSerializer for CompatSerializer {
    fn serialize(&self, descriptor: &EntitlementDescriptor) -> Vec<u8> {
        render(descriptor, |s| s.to_string()).into_bytes()
    }
}

/// Strict variant escaping `"` and `\` inside string values.
///
/// Not wire-compatible with the original format; opt-in only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapingSerializer;

impl DescriptorSerializer for EscapingSerializer {
    fn serialize(&self, descriptor: &EntitlementDescriptor) -> Vec<u8> {
        render(descriptor, |s| s.replace('\\', "\\\\").replace('"', "\\\"")).into_bytes()
    }
}

fn render(d: &EntitlementDescriptor, escape: impl Fn(&str) -> String) -> String {
    let mut out = String::new();
    out.push('{');
    out.push_str(&format!("\"licenseId\":\"{}\",", escape(&d.license_id)));
    out.push_str(&format!("\"licenseeName\":\"{}\",", escape(&d.licensee_name)));
    out.push_str(&format!("\"assigneeName\":\"{}\",", escape(&d.assignee_name)));
    out.push_str(&format!("\"assigneeEmail\":\"{}\",", escape(&d.assignee_email)));
    out.push_str(&format!(
        "\"licenseRestriction\":\"{}\",",
        escape(&d.license_restriction)
    ));
    out.push_str(&format!("\"checkConcurrentUse\":{},", d.check_concurrent_use));
    out.push_str("\"products\":[");
    for (i, product) in d.products.iter().enumerate() {
        if i > 0 {
            // Comma-space, matching the original issuer's list rendering
            out.push_str(", ");
        }
        render_product(&mut out, product, &escape);
    }
    out.push_str("],");
    out.push_str(&format!("\"metadata\":\"{}\",", escape(&d.metadata)));
    out.push_str(&format!("\"hash\":\"{}\",", escape(&d.hash)));
    out.push_str(&format!("\"gracePeriodDays\":{},", d.grace_period_days));
    out.push_str(&format!("\"autoProlongated\":{},", d.auto_prolongated));
    out.push_str(&format!("\"isAutoProlongated\":{}", d.is_auto_prolongated));
    out.push('}');
    out
}

fn render_product(out: &mut String, p: &ProductEntitlement, escape: &impl Fn(&str) -> String) {
    out.push('{');
    out.push_str(&format!("\"code\":\"{}\",", escape(&p.code)));
    out.push_str(&format!("\"fallbackDate\":\"{}\",", escape(&p.fallback_date)));
    out.push_str(&format!("\"paidUpTo\":\"{}\",", escape(&p.paid_up_to)));
    out.push_str(&format!("\"extended\":{}", p.extended));
    out.push('}');
}
