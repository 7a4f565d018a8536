//! Per-country license plate rules.
//!
//! A [`LicensePlateHandler`] is the one extension point for new countries: it
//! turns arbitrary user input into a canonical rendering and decides whether
//! that rendering matches the country's structural pattern.

use std::sync::LazyLock;

use regex::Regex;

mod default;
mod french;

pub use default::DefaultLicensePlateHandler;
pub use french::FrenchLicensePlateHandler;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

/// Normalization and validation rules for the plates of one country.
///
/// Handlers are stateless and must never fail on malformed input: they render
/// it best-effort and report it invalid.
///
/// Implementations must uphold:
/// - `normalize(&normalize(x)) == normalize(x)`
/// - `validate(x) == validate(&normalize(x))`, i.e. `validate` checks the
///   normalized form, never the raw input
pub trait LicensePlateHandler: Send + Sync {
    /// Canonical rendering of `value` (separator style, case).
    fn normalize(&self, value: &str) -> String;

    /// Whether `value`, once normalized, is a structurally valid plate.
    fn validate(&self, value: &str) -> bool;
}

/// Replace every whitespace run by a single hyphen, then collapse hyphen runs.
pub(crate) fn hyphenate(value: &str) -> String {
    let hyphenated = WHITESPACE_RUN.replace_all(value, "-");
    HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned()
}
