use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{LicensePlateHandler, hyphenate};

/// Alphanumeric groups joined by single hyphens.
static GROUPED_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]+(-[A-Z0-9]+)*$").expect("grouped alphanumeric pattern is valid")
});

/// Fallback for countries without dedicated plate rules.
///
/// Groups are separated by single hyphens and upper-cased; surrounding
/// separators are dropped. Any non-empty sequence of ASCII alphanumeric groups
/// is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLicensePlateHandler;

impl LicensePlateHandler for DefaultLicensePlateHandler {
    fn normalize(&self, value: &str) -> String {
        let normalized = hyphenate(value).trim_matches('-').to_uppercase();

        debug!(raw = value, normalized = %normalized, "normalized license plate");

        normalized
    }

    fn validate(&self, value: &str) -> bool {
        GROUPED_ALPHANUMERIC.is_match(&self.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn separators_and_case_are_unified() {
        let handler = DefaultLicensePlateHandler;
        assert_eq!(handler.normalize("KA-AB-123"), "KA-AB-123");
        assert_eq!(handler.normalize("ka ab 123"), "KA-AB-123");
        assert_eq!(handler.normalize("  ka -- ab 123 "), "KA-AB-123");
    }

    #[test]
    fn grouped_alphanumerics_are_valid() {
        let handler = DefaultLicensePlateHandler;
        assert!(handler.validate("B XY 456"));
        assert!(handler.validate("12-ABC-3"));
        assert!(handler.validate("xyz123"));
    }

    #[test]
    fn blank_or_punctuated_input_is_invalid() {
        let handler = DefaultLicensePlateHandler;
        assert!(!handler.validate(""));
        assert!(!handler.validate(" - "));
        assert!(!handler.validate("AB.123"));
        assert!(!handler.validate("AB/123"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: normalizing twice yields the same rendering as once.
        #[test]
        fn normalize_is_idempotent(value in "[a-zA-Z0-9 -]{1,16}") {
            let handler = DefaultLicensePlateHandler;
            let once = handler.normalize(&value);
            prop_assert_eq!(handler.normalize(&once), once);
        }

        /// Property: validation only depends on the normalized form.
        #[test]
        fn validate_ignores_formatting(value in "[a-zA-Z0-9 ./-]{1,16}") {
            let handler = DefaultLicensePlateHandler;
            let normalized = handler.normalize(&value);
            prop_assert_eq!(handler.validate(&value), handler.validate(&normalized));
        }
    }
}
