//! Deterministic default physical names
//!
//! When a template omits an explicit name, the provider derives one from the
//! owning stack and the logical id. The derivation must be a pure function
//! of those two inputs: a retried create after a transient failure has to
//! regenerate the same identifier instead of minting an orphaned duplicate.

use sha2::{Digest, Sha256};

/// Hard cap shared by the generated-name grammar.
const MAX_NAME_LEN: usize = 63;
/// Hex digest characters appended to disambiguate across stacks.
const SUFFIX_LEN: usize = 10;
/// Logical ids longer than this are truncated before assembly.
const MAX_LOGICAL_PART: usize = 24;

/// Generate the default physical name for `(stack_name, logical_resource_id)`.
///
/// Shape: `{stack}-{logical_id}-{digest}`, truncated so the whole name fits
/// in [`MAX_NAME_LEN`] with the digest suffix always intact.
pub fn generate_default_name(stack_name: &str, logical_resource_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stack_name.as_bytes());
    hasher.update(b"|");
    hasher.update(logical_resource_id.as_bytes());
    let digest = hex::encode(hasher.finalize());
    let suffix = &digest[..SUFFIX_LEN];

    let logical_part: String = logical_resource_id.chars().take(MAX_LOGICAL_PART).collect();
    let stack_budget = MAX_NAME_LEN - 2 - SUFFIX_LEN - logical_part.chars().count();
    let stack_part: String = stack_name.chars().take(stack_budget).collect();

    format!("{stack_part}-{logical_part}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_inputs_same_name() {
        let a = generate_default_name("my-stack", "WebProfile");
        let b = generate_default_name("my-stack", "WebProfile");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_inputs_different_names() {
        let a = generate_default_name("my-stack", "WebProfile");
        let b = generate_default_name("my-stack", "ApiProfile");
        let c = generate_default_name("other-stack", "WebProfile");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_contains_both_context_parts() {
        let name = generate_default_name("my-stack", "WebProfile");
        assert!(name.starts_with("my-stack-WebProfile-"));
        assert_eq!(name.len(), "my-stack-WebProfile-".len() + 10);
    }

    #[test]
    fn test_long_inputs_fit_the_cap() {
        let stack = "s".repeat(200);
        let logical = "L".repeat(200);
        let name = generate_default_name(&stack, &logical);
        assert!(name.len() <= 63, "generated name too long: {name}");
        // The digest suffix survives truncation.
        let suffix = name.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 10);
    }

    #[test]
    fn test_empty_context_still_produces_a_suffix() {
        let name = generate_default_name("", "");
        assert_eq!(name.len(), 2 + 10);
    }
}
