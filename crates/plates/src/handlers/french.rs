//! French license plates.
//!
//! Two formats are in circulation:
//!
//! - since 2009: two letters, three digits, two letters, hyphen separated
//!   (`AA-001-AB`, `AB-123-BC`)
//! - 1950 to 2009: two to four digits, one to three letters and a department
//!   code of two or three characters, space separated (`2928 TW 74`,
//!   `324 EBS 91`, `56 ABM 13`, `11 GY 2A`, `654 ANY 971`)
//!
//! Special series (military vehicles, mopeds, ...) are not covered.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{LicensePlateHandler, hyphenate};

/// `XX-999-XX`
static CURRENT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}-[0-9]{3}-[A-Z]{2}$").expect("current French format is valid")
});

/// `9999 XX 99`, `999 XXX 99`, `99 XXX 99`, `999 XXX 999`, `99 XX 9X`
static FORMER_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2,4}[\s-][A-Z]{1,3}[\s-][A-Z0-9]{2,3}$")
        .expect("former French format is valid")
});

/// Handles French plates of both the current and the former format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrenchLicensePlateHandler;

impl FrenchLicensePlateHandler {
    fn has_current_format(normalized: &str) -> bool {
        CURRENT_FORMAT.is_match(normalized)
    }

    fn has_former_format(normalized: &str) -> bool {
        FORMER_FORMAT.is_match(normalized)
    }
}

impl LicensePlateHandler for FrenchLicensePlateHandler {
    /// Upper-cases the value and separates groups by single hyphens. Plates of
    /// the former format are rendered with spaces instead.
    fn normalize(&self, value: &str) -> String {
        let mut normalized = hyphenate(value).to_uppercase();

        if Self::has_former_format(&normalized) {
            normalized = normalized.replace('-', " ");
        }

        debug!(raw = value, normalized = %normalized, "normalized French license plate");

        normalized
    }

    fn validate(&self, value: &str) -> bool {
        let normalized = self.normalize(value);

        Self::has_current_format(&normalized) || Self::has_former_format(&normalized)
    }
}
