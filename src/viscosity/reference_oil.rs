//! Reference-oil certificate interpolation and cup error arithmetic

use crate::{
    constants::cups::{
        C100_HIGH_TEMP_C, C100_HIGH_VISCOSITY, C100_LOW_TEMP_C, C100_LOW_VISCOSITY,
        C10_HIGH_TEMP_C, C10_HIGH_VISCOSITY, C10_LOW_TEMP_C, C10_LOW_VISCOSITY,
    },
    errors::{DomainError, DomainResult},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

/// One certified point: the oil's viscosity at a stated temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CertificatePoint {
    /// Certificate temperature (°C)
    pub celsius: f64,
    /// Certified kinematic viscosity at that temperature (mm²/s)
    pub viscosity: f64,
}

/// A reference oil's calibration certificate: two points bracketing normal
/// laboratory temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OilCertificate {
    low: CertificatePoint,
    high: CertificatePoint,
}

impl OilCertificate {
    /// Build a certificate from two points.
    ///
    /// The low point must sit at a strictly lower temperature than the high
    /// point and both viscosities must be positive; anything else is a
    /// transcription error on the bench, rejected here rather than silently
    /// replaced with defaults.
    pub fn new(low: CertificatePoint, high: CertificatePoint) -> DomainResult<Self> {
        if !low.celsius.is_finite()
            || !low.viscosity.is_finite()
            || !high.celsius.is_finite()
            || !high.viscosity.is_finite()
        {
            return Err(DomainError::InvalidValue);
        }
        if low.celsius >= high.celsius {
            return Err(DomainError::OutOfRange {
                value: low.celsius,
                min: f64::NEG_INFINITY,
                max: high.celsius,
            });
        }
        if low.viscosity <= 0.0 || high.viscosity <= 0.0 {
            return Err(DomainError::InvalidValue);
        }
        Ok(Self { low, high })
    }

    const fn new_unchecked(low: CertificatePoint, high: CertificatePoint) -> Self {
        Self { low, high }
    }

    /// The certificate point at the lower temperature.
    pub fn low(&self) -> CertificatePoint {
        self.low
    }

    /// The certificate point at the higher temperature.
    pub fn high(&self) -> CertificatePoint {
        self.high
    }

    /// Correct the certified viscosity to the measured oil temperature.
    ///
    /// Linear interpolation between the two certificate points; temperatures
    /// outside the certificate span clamp to the nearer endpoint, since the
    /// certificate says nothing beyond it. Fails with
    /// [`DomainError::InvalidValue`] for non-finite input.
    pub fn viscosity_at(&self, celsius: f64) -> DomainResult<f64> {
        if !celsius.is_finite() {
            return Err(DomainError::InvalidValue);
        }

        if celsius <= self.low.celsius {
            if celsius < self.low.celsius {
                log_warn!(
                    "Oil temperature {} °C below certificate span; clamped to {} °C",
                    celsius,
                    self.low.celsius
                );
            }
            return Ok(self.low.viscosity);
        }
        if celsius >= self.high.celsius {
            if celsius > self.high.celsius {
                log_warn!(
                    "Oil temperature {} °C above certificate span; clamped to {} °C",
                    celsius,
                    self.high.celsius
                );
            }
            return Ok(self.high.viscosity);
        }

        let frac = (celsius - self.low.celsius) / (self.high.celsius - self.low.celsius);
        Ok(self.low.viscosity + frac * (self.high.viscosity - self.low.viscosity))
    }
}

/// Reference oils stocked for cup calibration, with their default
/// certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceOil {
    /// Nominal 10 mm²/s-class oil
    C10,
    /// Nominal 100 mm²/s-class oil
    C100,
}

impl ReferenceOil {
    /// The default certificate for this oil, used when the bench has no
    /// fresher certificate on file.
    pub const fn certificate(self) -> OilCertificate {
        match self {
            Self::C10 => OilCertificate::new_unchecked(
                CertificatePoint {
                    celsius: C10_LOW_TEMP_C,
                    viscosity: C10_LOW_VISCOSITY,
                },
                CertificatePoint {
                    celsius: C10_HIGH_TEMP_C,
                    viscosity: C10_HIGH_VISCOSITY,
                },
            ),
            Self::C100 => OilCertificate::new_unchecked(
                CertificatePoint {
                    celsius: C100_LOW_TEMP_C,
                    viscosity: C100_LOW_VISCOSITY,
                },
                CertificatePoint {
                    celsius: C100_HIGH_TEMP_C,
                    viscosity: C100_HIGH_VISCOSITY,
                },
            ),
        }
    }

    /// Shorthand for `certificate().viscosity_at(celsius)`.
    pub fn viscosity_at(self, celsius: f64) -> DomainResult<f64> {
        self.certificate().viscosity_at(celsius)
    }
}

/// Percentage variation of a cup from the reference standard.
///
/// `(reference − measured) · 100 / reference`, positive when the cup reads
/// low. Fails with [`DomainError::InvalidValue`] when the reference
/// viscosity is zero or either input is not finite.
pub fn percentage_error(reference: f64, measured: f64) -> DomainResult<f64> {
    if !reference.is_finite() || !measured.is_finite() || reference == 0.0 {
        return Err(DomainError::InvalidValue);
    }
    Ok((reference - measured) * 100.0 / reference)
}
