//! Resistance → temperature inversion
//!
//! ## Overview
//!
//! The Callendar–Van Dusen relation has no closed-form inverse over the
//! sub-zero branch, so this module inverts it numerically: classify the
//! resistance into a coarse search zone, then scan the forward relation
//! upward from the zone's starting temperature in steps of `10^-n` degrees
//! until it meets the input.
//!
//! ## Search zones
//!
//! The supported resistance span (18, 400) Ω is partitioned into thirteen
//! half-open zones, one per 50 °C below zero and one per 100 °C above. Each
//! zone knows the coefficient branch to evaluate and the temperature one
//! degree below its span, so the scan never crosses a branch boundary and
//! never walks more than ~101 degrees.
//!
//! Zone bounds are the forward resistances at the decade boundaries
//! (e.g. 39.7232 Ω at −150 °C). A resistance landing exactly on an interior
//! bound belongs to the upper zone; contiguity of the table is asserted by
//! test, so no in-domain input can miss every zone.
//!
//! ## Cost model
//!
//! This is a bounded linear scan, not a bisection: one forward evaluation
//! per step, and the step count grows as zone width × `10^n`. At `n = 4` a
//! worst-case inversion evaluates the polynomial about a million times.
//! That cost profile is deliberate: the scan is trivially verifiable
//! against the forward relation and exactly as precise as requested.

use crate::{
    constants::rtd::{RESISTANCE_MAX_OHMS, RESISTANCE_MIN_OHMS},
    errors::{DomainError, DomainResult},
    num,
    rtd::conversion::{Coefficients, RtdReading},
};

/// One coarse search zone: a half-open resistance span mapped to the
/// coefficient branch valid there and the temperature the scan starts from.
#[derive(Debug, Clone, Copy)]
struct SearchZone {
    /// Lower resistance bound (Ω), inclusive
    resistance_min: f64,
    /// Upper resistance bound (Ω), exclusive
    resistance_max: f64,
    /// Temperature the scan starts from (°C), one degree below the span
    start_celsius: f64,
    /// Coefficient branch for every evaluation inside this zone
    coefficients: Coefficients,
}

impl SearchZone {
    fn contains(&self, resistance: f64) -> bool {
        resistance >= self.resistance_min && resistance < self.resistance_max
    }
}

/// Finest supported precision.
///
/// Past this the step falls within a few ulps of the temperatures being
/// scanned, `celsius += step` stops advancing, and the scan would never
/// terminate. 10^-12 °C is already far beyond any laboratory meaning.
const MAX_SCAN_DIGITS: u32 = 12;

/// Zone table covering (18, 400) Ω without gaps or overlap.
///
/// Bounds are forward resistances at the decade boundaries of BS EN 60751's
/// tables; the comments give the temperature span each zone resolves to.
const SEARCH_ZONES: [SearchZone; 13] = [
    // -200 °C to -150 °C
    SearchZone {
        resistance_min: 18.0,
        resistance_max: 39.7232,
        start_celsius: -201.0,
        coefficients: Coefficients::SUB_ZERO,
    },
    // -150 °C to -100 °C
    SearchZone {
        resistance_min: 39.7232,
        resistance_max: 60.2558,
        start_celsius: -151.0,
        coefficients: Coefficients::SUB_ZERO,
    },
    // -100 °C to -50 °C
    SearchZone {
        resistance_min: 60.2558,
        resistance_max: 80.3063,
        start_celsius: -101.0,
        coefficients: Coefficients::SUB_ZERO,
    },
    // -50 °C to 0 °C
    SearchZone {
        resistance_min: 80.3063,
        resistance_max: 100.0,
        start_celsius: -51.0,
        coefficients: Coefficients::SUB_ZERO,
    },
    // 0 °C to 100 °C
    SearchZone {
        resistance_min: 100.0,
        resistance_max: 138.5055,
        start_celsius: -1.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 100 °C to 200 °C
    SearchZone {
        resistance_min: 138.5055,
        resistance_max: 175.856,
        start_celsius: 99.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 200 °C to 300 °C
    SearchZone {
        resistance_min: 175.856,
        resistance_max: 212.0515,
        start_celsius: 199.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 300 °C to 400 °C
    SearchZone {
        resistance_min: 212.0515,
        resistance_max: 247.092,
        start_celsius: 299.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 400 °C to 500 °C
    SearchZone {
        resistance_min: 247.092,
        resistance_max: 280.9775,
        start_celsius: 399.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 500 °C to 600 °C
    SearchZone {
        resistance_min: 280.9775,
        resistance_max: 313.708,
        start_celsius: 499.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 600 °C to 700 °C
    SearchZone {
        resistance_min: 313.708,
        resistance_max: 345.2835,
        start_celsius: 599.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 700 °C to 800 °C
    SearchZone {
        resistance_min: 345.2835,
        resistance_max: 375.704,
        start_celsius: 699.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
    // 800 °C and above
    SearchZone {
        resistance_min: 375.704,
        resistance_max: 400.0,
        start_celsius: 799.0,
        coefficients: Coefficients::NON_NEGATIVE,
    },
];

/// Convert a measured PT100 resistance to temperature.
///
/// `digits` selects the scan step, `10^-digits` degrees; the returned
/// temperature is the first scan point whose forward resistance meets or
/// exceeds the input, so it overshoots the exact solution by less than one
/// step. Execution cost grows as `10^digits` (see the module docs).
///
/// Fails with [`DomainError::OutOfRange`] for resistances outside
/// (18, 400) Ω or precisions past 12 digits (where the step would fall
/// below float resolution and the scan could not advance), and
/// [`DomainError::InvalidValue`] for non-finite input.
///
/// ```
/// use benchcal::rtd::resistance_to_temperature;
///
/// let reading = resistance_to_temperature(138.5055, 4)?;
/// assert_eq!(reading.resistance, 138.5055);
/// assert!((reading.celsius - 100.0).abs() < 1e-3);
/// # Ok::<(), benchcal::DomainError>(())
/// ```
pub fn resistance_to_temperature(resistance: f64, digits: u32) -> DomainResult<RtdReading> {
    if !resistance.is_finite() {
        return Err(DomainError::InvalidValue);
    }
    if digits > MAX_SCAN_DIGITS {
        return Err(DomainError::OutOfRange {
            value: digits as f64,
            min: 0.0,
            max: MAX_SCAN_DIGITS as f64,
        });
    }
    num::check_range_exclusive(resistance, RESISTANCE_MIN_OHMS, RESISTANCE_MAX_OHMS)?;

    let zone = SEARCH_ZONES
        .iter()
        .find(|zone| zone.contains(resistance))
        .ok_or(DomainError::OutOfRange {
            value: resistance,
            min: RESISTANCE_MIN_OHMS,
            max: RESISTANCE_MAX_OHMS,
        })?;

    let step = num::pow10_neg(digits);
    let mut celsius = zone.start_celsius;
    // The forward relation is strictly increasing over the zone and exceeds
    // the zone's upper bound within ~101 degrees of the start, so the scan
    // terminates for every in-domain resistance.
    while zone.coefficients.resistance_at(celsius) < resistance {
        celsius += step;
    }

    Ok(RtdReading {
        celsius,
        resistance,
    })
}
