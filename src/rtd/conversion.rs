//! Forward Callendar–Van Dusen conversion (temperature → resistance)

use crate::{
    constants::rtd::{
        CVD_A, CVD_B, CVD_C_SUB_ZERO, R0_OHMS, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
    },
    errors::{DomainError, DomainResult},
    num,
};

/// A matched temperature/resistance pair for a PT100 element.
///
/// Both conversion directions return the input echoed alongside the computed
/// quantity, so a reading can be logged or displayed as a complete pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RtdReading {
    /// Temperature in degrees Celsius
    pub celsius: f64,
    /// Element resistance in ohms
    pub resistance: f64,
}

/// One Callendar–Van Dusen coefficient set.
///
/// BS EN 60751 defines two: the sub-zero set with a nonzero cubic correction
/// term, and the non-negative set where that term is zeroed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Linear coefficient (1/°C)
    pub a: f64,
    /// Quadratic coefficient (1/°C²)
    pub b: f64,
    /// Cubic correction coefficient (1/°C⁴); zero at and above 0 °C
    pub c: f64,
}

impl Coefficients {
    /// Coefficient set for temperatures below 0 °C.
    pub const SUB_ZERO: Self = Self {
        a: CVD_A,
        b: CVD_B,
        c: CVD_C_SUB_ZERO,
    };

    /// Coefficient set for temperatures at or above 0 °C.
    pub const NON_NEGATIVE: Self = Self {
        a: CVD_A,
        b: CVD_B,
        c: 0.0,
    };

    /// Select the coefficient branch for a given temperature.
    pub fn for_temperature(celsius: f64) -> Self {
        if celsius < 0.0 {
            Self::SUB_ZERO
        } else {
            Self::NON_NEGATIVE
        }
    }

    /// Evaluate the forward relation at `celsius`.
    ///
    /// `Rt = R0 · (1 + A·t + B·t² + C·(t − 100)·t³)`
    pub fn resistance_at(&self, celsius: f64) -> f64 {
        let t = celsius;
        R0_OHMS * (1.0 + self.a * t + self.b * t * t + self.c * (t - 100.0) * t * t * t)
    }
}

/// Convert a temperature to the PT100 resistance it produces.
///
/// Fails with [`DomainError::OutOfRange`] outside (−201, 851) °C, the span
/// the standard tabulates, and [`DomainError::InvalidValue`] for NaN or
/// infinite input.
///
/// ```
/// use benchcal::rtd::temperature_to_resistance;
///
/// let reading = temperature_to_resistance(0.0)?;
/// assert_eq!(reading.resistance, 100.0);
/// # Ok::<(), benchcal::DomainError>(())
/// ```
pub fn temperature_to_resistance(celsius: f64) -> DomainResult<RtdReading> {
    if !celsius.is_finite() {
        return Err(DomainError::InvalidValue);
    }
    num::check_range_exclusive(celsius, TEMPERATURE_MIN_C, TEMPERATURE_MAX_C)?;

    let resistance = Coefficients::for_temperature(celsius).resistance_at(celsius);
    Ok(RtdReading {
        celsius,
        resistance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ice_point_is_nominal() {
        let reading = temperature_to_resistance(0.0).unwrap();
        assert_eq!(reading.resistance, 100.0);
        assert_eq!(reading.celsius, 0.0);
    }

    #[test]
    fn steam_point_matches_standard_table() {
        // BS EN 60751 tabulates 138.5055 Ω at 100 °C
        let reading = temperature_to_resistance(100.0).unwrap();
        assert!((reading.resistance - 138.5055).abs() < 1e-9);
    }

    #[test]
    fn sub_zero_branch_uses_cubic_term() {
        // At -150 °C the cubic term contributes ~ -0.35 Ω; the tabulated
        // value is 39.7232 Ω.
        let reading = temperature_to_resistance(-150.0).unwrap();
        assert!((reading.resistance - 39.7232).abs() < 1e-3);

        // Evaluating the non-negative set at the same point must differ,
        // otherwise the branch selection is dead code.
        let wrong = Coefficients::NON_NEGATIVE.resistance_at(-150.0);
        assert!((wrong - reading.resistance).abs() > 1e-2);
    }

    #[test]
    fn domain_bounds_rejected() {
        assert!(temperature_to_resistance(-201.0).is_err());
        assert!(temperature_to_resistance(851.0).is_err());
        assert!(temperature_to_resistance(-200.9999).is_ok());
        assert!(temperature_to_resistance(850.9999).is_ok());
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(
            temperature_to_resistance(f64::NAN),
            Err(DomainError::InvalidValue)
        );
        assert_eq!(
            temperature_to_resistance(f64::INFINITY),
            Err(DomainError::InvalidValue)
        );
    }
}
