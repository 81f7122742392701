//! Tolerance-class grading per BS EN 60751
//!
//! Grades the deviation between a reference thermometer and a unit under
//! calibration into the standard's accuracy classes. Each class permits a
//! deviation of `base + 0.0017·|t|` degrees at reference temperature `t`;
//! the bases widen from 0.1 °C (Class AA) to 0.6 °C (Class C).

use crate::{
    constants::rtd::{
        ASSESSMENT_DIGITS, CLASS_AA_BASE_C, CLASS_A_BASE_C, CLASS_B_BASE_C, CLASS_C_BASE_C,
        CLASS_SLOPE_PER_C,
    },
    errors::{DomainError, DomainResult},
    num,
};

/// Industrial platinum thermometer accuracy class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToleranceClass {
    /// Class AA, ±(0.1 + 0.0017·|t|) °C
    Aa,
    /// Class A, ±(0.15 + 0.0017·|t|) °C
    A,
    /// Class B, ±(0.3 + 0.0017·|t|) °C
    B,
    /// Class C, ±(0.6 + 0.0017·|t|) °C
    C,
}

impl core::fmt::Display for ToleranceClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Aa => write!(f, "Class AA"),
            Self::A => write!(f, "Class A"),
            Self::B => write!(f, "Class B"),
            Self::C => write!(f, "Class C"),
        }
    }
}

/// The four class limits computed at a reference temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToleranceLimits {
    /// Permitted deviation for Class AA (°C)
    pub class_aa: f64,
    /// Permitted deviation for Class A (°C)
    pub class_a: f64,
    /// Permitted deviation for Class B (°C)
    pub class_b: f64,
    /// Permitted deviation for Class C (°C)
    pub class_c: f64,
}

impl ToleranceLimits {
    /// Compute the class limits at a reference temperature.
    ///
    /// Limits are rounded to certificate resolution (4 fractional digits).
    pub fn at(reference_celsius: f64) -> Self {
        let magnitude = num::abs(reference_celsius);
        let limit = |base: f64| num::round_to(base + CLASS_SLOPE_PER_C * magnitude, ASSESSMENT_DIGITS);
        Self {
            class_aa: limit(CLASS_AA_BASE_C),
            class_a: limit(CLASS_A_BASE_C),
            class_b: limit(CLASS_B_BASE_C),
            class_c: limit(CLASS_C_BASE_C),
        }
    }
}

/// Outcome of grading one calibration point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToleranceAssessment {
    /// Reference thermometer temperature (°C)
    pub reference_celsius: f64,
    /// Unit-under-calibration temperature (°C)
    pub unit_celsius: f64,
    /// Signed deviation, reference minus unit, rounded to 4 digits (°C)
    pub deviation_celsius: f64,
    /// Tightest class the deviation satisfies; `None` outside Class C
    pub class: Option<ToleranceClass>,
    /// The class limits computed at the reference temperature
    pub limits: ToleranceLimits,
}

/// Grade a reference-vs-unit-under-test comparison.
///
/// The deviation magnitude is compared against successive class limits; a
/// deviation wider than Class C yields an assessment with no class. Fails
/// with [`DomainError::InvalidValue`] if either temperature is not finite.
///
/// ```
/// use benchcal::rtd::{classify, ToleranceClass};
///
/// let assessment = classify(100.0, 100.4)?;
/// assert_eq!(assessment.class, Some(ToleranceClass::B));
/// # Ok::<(), benchcal::DomainError>(())
/// ```
pub fn classify(reference_celsius: f64, unit_celsius: f64) -> DomainResult<ToleranceAssessment> {
    if !reference_celsius.is_finite() || !unit_celsius.is_finite() {
        return Err(DomainError::InvalidValue);
    }

    let limits = ToleranceLimits::at(reference_celsius);
    let deviation = reference_celsius - unit_celsius;
    let magnitude = num::abs(deviation);

    let class = if magnitude < limits.class_aa {
        Some(ToleranceClass::Aa)
    } else if magnitude < limits.class_a {
        Some(ToleranceClass::A)
    } else if magnitude < limits.class_b {
        Some(ToleranceClass::B)
    } else if magnitude < limits.class_c {
        Some(ToleranceClass::C)
    } else {
        None
    };

    Ok(ToleranceAssessment {
        reference_celsius,
        unit_celsius,
        deviation_celsius: num::round_to(deviation, ASSESSMENT_DIGITS),
        class,
        limits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grading_at_ice_point() {
        // At 0 °C the limits are exactly the class bases.
        let assessment = classify(0.0, 0.05).unwrap();
        assert_eq!(assessment.class, Some(ToleranceClass::Aa));
        assert_eq!(assessment.limits.class_aa, 0.1);
        assert_eq!(assessment.limits.class_c, 0.6);

        assert_eq!(classify(0.0, 0.12).unwrap().class, Some(ToleranceClass::A));
        assert_eq!(classify(0.0, 0.2).unwrap().class, Some(ToleranceClass::B));
        assert_eq!(classify(0.0, 0.5).unwrap().class, Some(ToleranceClass::C));
        assert_eq!(classify(0.0, 0.7).unwrap().class, None);
    }

    #[test]
    fn limits_widen_with_temperature_magnitude() {
        let hot = ToleranceLimits::at(400.0);
        let cold = ToleranceLimits::at(-400.0);
        assert_eq!(hot, cold);
        // 0.1 + 0.0017 * 400 = 0.78
        assert!((hot.class_aa - 0.78).abs() < 1e-12);
    }

    #[test]
    fn limits_strictly_ordered() {
        for reference in [-200.0, -50.0, 0.0, 100.0, 660.0] {
            let limits = ToleranceLimits::at(reference);
            assert!(limits.class_aa < limits.class_a);
            assert!(limits.class_a < limits.class_b);
            assert!(limits.class_b < limits.class_c);
        }
    }

    #[test]
    fn grading_symmetric_in_sign() {
        let high = classify(100.0, 100.2).unwrap();
        let low = classify(100.0, 99.8).unwrap();
        assert_eq!(high.class, low.class);
        assert_eq!(high.deviation_celsius, -low.deviation_celsius);
    }

    #[test]
    fn deviation_rounded_to_certificate_resolution() {
        let assessment = classify(20.0, 19.987654).unwrap();
        assert_eq!(assessment.deviation_celsius, 0.0123);
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(classify(f64::NAN, 0.0), Err(DomainError::InvalidValue));
        assert_eq!(classify(0.0, f64::INFINITY), Err(DomainError::InvalidValue));
    }
}
