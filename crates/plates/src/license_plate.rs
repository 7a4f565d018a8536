//! The license plate value object.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use platekit_core::{DomainError, DomainResult, ValueObject};

use crate::country::{Country, LicensePlateCountry};

/// A raw plate value still waiting for its country.
///
/// Obtained from [`LicensePlate::for_value`]; only a country turns it into a
/// usable [`LicensePlate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialLicensePlate {
    raw_value: String,
}

impl PartialLicensePlate {
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn with_country(self, country: impl Country + 'static) -> LicensePlate {
        self.with_shared_country(Arc::new(country))
    }

    pub fn with_shared_country(self, country: Arc<dyn Country>) -> LicensePlate {
        LicensePlate {
            raw_value: self.raw_value,
            country,
            valid: OnceLock::new(),
        }
    }

    /// Resolve a built-in country by code; blank or unknown codes are rejected.
    pub fn with_country_code(self, code: &str) -> DomainResult<LicensePlate> {
        let country = LicensePlateCountry::for_code(code)?;
        Ok(self.with_country(country))
    }
}

/// A vehicle license plate bound to the country whose rules apply to it.
///
/// The raw input is kept as supplied. Rendering (`Display`), equality and
/// hashing go through the country's handler, so `"ka ab 123"` and
/// `"KA-AB-123"` are the same plate. The country itself is not part of the
/// equality key.
///
/// Validity is computed on the first [`LicensePlate::is_valid`] call and
/// cached; the handler is asked to validate at most once per instance, also
/// when the plate is shared between threads.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "LicensePlateRecord", into = "LicensePlateRecord")]
pub struct LicensePlate {
    raw_value: String,
    country: Arc<dyn Country>,
    valid: OnceLock<bool>,
}

impl LicensePlate {
    /// Start building a plate. Fails if `raw` is blank.
    pub fn for_value(raw: impl Into<String>) -> DomainResult<PartialLicensePlate> {
        let raw_value = raw.into();
        if raw_value.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "license plate value must not be blank",
            ));
        }

        Ok(PartialLicensePlate { raw_value })
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn country(&self) -> &dyn Country {
        self.country.as_ref()
    }

    /// Canonical rendering according to the country's rules.
    pub fn normalized(&self) -> String {
        self.country.license_plate_handler().normalize(&self.raw_value)
    }

    pub fn is_valid(&self) -> bool {
        *self.valid.get_or_init(|| {
            let handler = self.country.license_plate_handler();
            let normalized = handler.normalize(&self.raw_value);
            let valid = handler.validate(&normalized);

            debug!(
                country = self.country.country_code(),
                plate = %normalized,
                valid,
                "evaluated license plate"
            );

            valid
        })
    }
}

impl ValueObject for LicensePlate {}

impl PartialEq for LicensePlate {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for LicensePlate {}

impl Hash for LicensePlate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}

impl fmt::Debug for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicensePlate")
            .field("raw_value", &self.raw_value)
            .field("country", &self.country.country_code())
            .field("valid", &self.valid.get())
            .finish()
    }
}

/// Serialized shape of a [`LicensePlate`]: the raw value and the country code.
///
/// Both fields are optional on the wire so that a missing value or country is
/// reported as an invalid argument rather than a bare serde error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePlateRecord {
    pub value: Option<String>,
    pub country: Option<String>,
}

impl TryFrom<LicensePlateRecord> for LicensePlate {
    type Error = DomainError;

    fn try_from(record: LicensePlateRecord) -> DomainResult<Self> {
        let value = record
            .value
            .ok_or_else(|| DomainError::invalid_argument("license plate value is required"))?;
        let country = record
            .country
            .ok_or_else(|| DomainError::invalid_argument("license plate country is required"))?;

        LicensePlate::for_value(value)?.with_country_code(&country)
    }
}

impl From<LicensePlate> for LicensePlateRecord {
    fn from(plate: LicensePlate) -> Self {
        Self {
            country: Some(plate.country.country_code().to_string()),
            value: Some(plate.raw_value),
        }
    }
}
