//! Countries and the plate rules they resolve to.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use platekit_core::{DomainError, DomainResult};

use crate::handlers::{DefaultLicensePlateHandler, FrenchLicensePlateHandler, LicensePlateHandler};

/// Provides the plate rules of a country.
///
/// [`LicensePlateCountry`] covers the built-in countries; callers can plug in
/// their own by implementing this trait together with a
/// [`LicensePlateHandler`].
pub trait Country: fmt::Debug + Send + Sync {
    /// ISO 3166-1 alpha-2 style identifier, e.g. `"FR"`.
    fn country_code(&self) -> &str;

    fn license_plate_handler(&self) -> &dyn LicensePlateHandler;
}

/// Built-in countries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LicensePlateCountry {
    Austria,
    Belgium,
    CzechRepublic,
    France,
    Germany,
    Luxembourg,
    Netherlands,
    Poland,
    Switzerland,
}

impl LicensePlateCountry {
    pub const ALL: [LicensePlateCountry; 9] = [
        Self::Austria,
        Self::Belgium,
        Self::CzechRepublic,
        Self::France,
        Self::Germany,
        Self::Luxembourg,
        Self::Netherlands,
        Self::Poland,
        Self::Switzerland,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Austria => "AT",
            Self::Belgium => "BE",
            Self::CzechRepublic => "CZ",
            Self::France => "FR",
            Self::Germany => "DE",
            Self::Luxembourg => "LU",
            Self::Netherlands => "NL",
            Self::Poland => "PL",
            Self::Switzerland => "CH",
        }
    }

    /// Look up a country by code, ignoring case and surrounding whitespace.
    pub fn for_code(code: &str) -> DomainResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(DomainError::invalid_argument("country code must not be blank"));
        }

        Self::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown country code: {code}")))
    }
}

impl Country for LicensePlateCountry {
    fn country_code(&self) -> &str {
        self.code()
    }

    fn license_plate_handler(&self) -> &dyn LicensePlateHandler {
        match self {
            Self::France => &FrenchLicensePlateHandler,
            Self::Austria
            | Self::Belgium
            | Self::CzechRepublic
            | Self::Germany
            | Self::Luxembourg
            | Self::Netherlands
            | Self::Poland
            | Self::Switzerland => &DefaultLicensePlateHandler,
        }
    }
}

impl fmt::Display for LicensePlateCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LicensePlateCountry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_code(s)
    }
}

impl TryFrom<String> for LicensePlateCountry {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::for_code(&value)
    }
}

impl From<LicensePlateCountry> for String {
    fn from(country: LicensePlateCountry) -> Self {
        country.code().to_string()
    }
}
