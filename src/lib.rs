//! Calibration-bench conversions for benchcal
//!
//! Converts raw instrument readings from two laboratory calibration domains
//! into standardized physical quantities:
//!
//! - Efflux-cup drain times (Zahn, Shell, Ford, DIN, ISO) into kinematic
//!   viscosity in mm²/s, per ASTM D4212, ASTM D1200, DIN 53211 and ISO 2431.
//! - PT100 resistance/temperature conversions per the Callendar–Van Dusen
//!   relation of BS EN 60751, including tolerance-class grading and the
//!   iterative resistance → temperature inversion.
//!
//! Key constraints:
//! - Pure functions, all state call-local
//! - No heap allocation
//! - Builds without `std` (math via `libm`)
//!
//! ```
//! use benchcal::rtd;
//!
//! // A PT100 reads 138.5055 Ω. What is the bath temperature?
//! let reading = rtd::resistance_to_temperature(138.5055, 4)?;
//! assert!((reading.celsius - 100.0).abs() < 1e-3);
//! # Ok::<(), benchcal::DomainError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
mod num;
pub mod rtd;
pub mod viscosity;

// Public API
pub use errors::{DomainError, DomainResult};
pub use rtd::{
    resistance_to_temperature, temperature_to_resistance, RtdReading, ToleranceAssessment,
    ToleranceClass,
};
pub use viscosity::{
    percentage_error, DinCup4, EffluxCup, FordCup, IsoCup, OilCertificate, ReferenceOil, ShellCup,
    ZahnCup,
};

/// Crate version string, as published in the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
