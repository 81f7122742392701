//! PT100 Resistance Thermometry
//!
//! ## Overview
//!
//! Conversions between temperature and electrical resistance for industrial
//! platinum resistance thermometers, per BS EN 60751. The forward direction
//! (temperature → resistance) is a closed-form polynomial; the inverse
//! direction has no closed form in the standard and is computed here by a
//! zone-partitioned linear scan over the forward relation.
//!
//! ## The Callendar–Van Dusen relation
//!
//! ```text
//! Rt = R0 · (1 + A·t + B·t² + C·(t − 100)·t³)
//!
//! Where:
//! - R0 = 100 Ω (nominal resistance at 0 °C)
//! - A  = 3.9083e-3, B = -5.775e-7
//! - C  = -4.183e-12 for t < 0, C = 0 for t ≥ 0
//! ```
//!
//! The coefficient branch is keyed on the sign of the temperature: platinum
//! needs the cubic correction term only below 0 °C. This is an invariant of
//! the physical model, not a tuning parameter.
//!
//! ## Grading a calibration point
//!
//! Once both the reference thermometer and the unit under calibration have
//! been read, [`classify`] grades the deviation into the standard's
//! tolerance classes (AA/A/B/C):
//!
//! ```
//! use benchcal::rtd;
//!
//! let assessment = rtd::classify(100.0, 100.2)?;
//! assert_eq!(assessment.class, Some(rtd::ToleranceClass::Aa));
//! # Ok::<(), benchcal::DomainError>(())
//! ```

mod conversion;
mod inversion;
mod tolerance;

pub use conversion::{temperature_to_resistance, Coefficients, RtdReading};
pub use inversion::resistance_to_temperature;
pub use tolerance::{classify, ToleranceAssessment, ToleranceClass, ToleranceLimits};
