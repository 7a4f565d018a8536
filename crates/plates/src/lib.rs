//! `platekit-plates` — vehicle license plates with per-country rules.
//!
//! A [`LicensePlate`] binds raw user input to a [`Country`]. The country's
//! [`LicensePlateHandler`] decides the canonical rendering (used for equality
//! and hashing) and whether the plate matches a known national format.
//!
//! ```
//! use platekit_plates::{LicensePlate, LicensePlateCountry};
//!
//! let plate = LicensePlate::for_value("2928-tw-74")?.with_country(LicensePlateCountry::France);
//!
//! assert!(plate.is_valid());
//! assert_eq!(plate.to_string(), "2928 TW 74");
//! # Ok::<(), platekit_plates::DomainError>(())
//! ```

pub mod country;
pub mod handlers;
pub mod license_plate;

pub use country::{Country, LicensePlateCountry};
pub use handlers::{DefaultLicensePlateHandler, FrenchLicensePlateHandler, LicensePlateHandler};
pub use license_plate::{LicensePlate, LicensePlateRecord, PartialLicensePlate};
pub use platekit_core::{DomainError, DomainResult};
