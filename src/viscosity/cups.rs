//! Efflux cup definitions and drain-time conversion
//!
//! Calibration constants follow the published tables: ASTM D4212 X3.1 for
//! Zahn and Shell cups, ASTM D1200 for Ford cups, DIN 53211 for the 4 mm
//! DIN cup and ISO 2431 for the ISO series.

use crate::{
    errors::{DomainError, DomainResult},
    num,
};

/// Calibration equation for one cup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CupEquation {
    /// `V = K·(t − c)`
    Linear {
        /// Calibration slope (mm²/s per second)
        k: f64,
        /// Drain-time offset (seconds)
        c: f64,
    },
    /// `V = A·t − B/t`
    Hyperbolic {
        /// Linear term coefficient (mm²/s per second)
        a: f64,
        /// Reciprocal term coefficient (mm²·s / s)
        b: f64,
    },
}

impl CupEquation {
    fn viscosity(&self, drain_secs: f64) -> f64 {
        match *self {
            Self::Linear { k, c } => k * (drain_secs - c),
            Self::Hyperbolic { a, b } => a * drain_secs - b / drain_secs,
        }
    }
}

/// Published calibration record for one cup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CupSpec {
    /// Calibration equation and constants
    pub equation: CupEquation,
    /// Drain-time window the standard calibrated the cup over (seconds)
    pub drain_window_secs: (f64, f64),
    /// Orifice diameter (mm)
    pub orifice_mm: f64,
}

/// A calibrated efflux cup.
///
/// Implementors supply their published [`CupSpec`]; the conversion itself is
/// shared. Readings collected at 25 °C inside the cup's drain-time window
/// convert directly; anything outside the window errors rather than
/// extrapolating past the standard's calibration.
pub trait EffluxCup {
    /// The published calibration record for this cup.
    fn spec(&self) -> CupSpec;

    /// Convert a drain time in seconds to kinematic viscosity in mm²/s.
    fn kinematic_viscosity(&self, drain_secs: f64) -> DomainResult<f64> {
        if !drain_secs.is_finite() {
            return Err(DomainError::InvalidValue);
        }
        let spec = self.spec();
        let (min, max) = spec.drain_window_secs;
        num::check_range_inclusive(drain_secs, min, max)?;
        Ok(spec.equation.viscosity(drain_secs))
    }
}

/// Zahn dip cups, ASTM D4212.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZahnCup {
    /// Zahn cup #1, 2.0 mm orifice
    No1,
    /// Zahn cup #2, 2.7 mm orifice
    No2,
    /// Zahn cup #3, 3.8 mm orifice
    No3,
    /// Zahn cup #4, 4.3 mm orifice
    No4,
    /// Zahn cup #5, 5.3 mm orifice
    No5,
}

impl EffluxCup for ZahnCup {
    fn spec(&self) -> CupSpec {
        let (k, c, window, orifice_mm) = match self {
            Self::No1 => (1.1, 29.0, (35.0, 80.0), 2.0),
            Self::No2 => (3.5, 14.0, (20.0, 80.0), 2.7),
            Self::No3 => (11.7, 7.5, (20.0, 80.0), 3.8),
            Self::No4 => (14.8, 5.0, (20.0, 80.0), 4.3),
            Self::No5 => (23.0, 0.0, (20.0, 80.0), 5.3),
        };
        CupSpec {
            equation: CupEquation::Linear { k, c },
            drain_window_secs: window,
            orifice_mm,
        }
    }
}

/// Shell dip cups, ASTM D4212.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShellCup {
    /// Shell cup #1, 1.8 mm orifice
    No1,
    /// Shell cup #2, 2.4 mm orifice
    No2,
    /// Shell cup #2.5, 2.7 mm orifice
    No2_5,
    /// Shell cup #3, 3.1 mm orifice
    No3,
    /// Shell cup #3.5, 3.5 mm orifice
    No3_5,
    /// Shell cup #4, 3.8 mm orifice
    No4,
    /// Shell cup #5, 4.6 mm orifice
    No5,
    /// Shell cup #6, 5.8 mm orifice
    No6,
}

impl EffluxCup for ShellCup {
    fn spec(&self) -> CupSpec {
        let (k, c, orifice_mm) = match self {
            Self::No1 => (0.226, 13.0, 1.8),
            Self::No2 => (0.567, 5.0, 2.4),
            Self::No2_5 => (0.925, 3.0, 2.7),
            Self::No3 => (1.51, 2.0, 3.1),
            Self::No3_5 => (2.17, 1.5, 3.5),
            Self::No4 => (3.45, 1.0, 3.8),
            Self::No5 => (6.5, 1.0, 4.6),
            Self::No6 => (16.2, 0.5, 5.8),
        };
        CupSpec {
            equation: CupEquation::Linear { k, c },
            drain_window_secs: (20.0, 80.0),
            orifice_mm,
        }
    }
}

/// Ford flow cups, ASTM D1200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FordCup {
    /// Ford cup #1, 1.9 mm orifice
    No1,
    /// Ford cup #2, 2.53 mm orifice
    No2,
    /// Ford cup #3, 3.4 mm orifice
    No3,
    /// Ford cup #4, 4.12 mm orifice
    No4,
    /// Ford cup #5, 5.2 mm orifice
    No5,
}

impl EffluxCup for FordCup {
    fn spec(&self) -> CupSpec {
        let (k, c, window, orifice_mm) = match self {
            Self::No1 => (0.49, 35.0, (55.0, 100.0), 1.9),
            Self::No2 => (1.44, 18.0, (40.0, 100.0), 2.53),
            Self::No3 => (2.31, 6.58, (20.0, 100.0), 3.4),
            Self::No4 => (3.85, 4.49, (20.0, 100.0), 4.12),
            Self::No5 => (12.1, 2.0, (20.0, 100.0), 5.2),
        };
        CupSpec {
            equation: CupEquation::Linear { k, c },
            drain_window_secs: window,
            orifice_mm,
        }
    }
}

/// The DIN 53211 4 mm flow cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DinCup4;

impl EffluxCup for DinCup4 {
    fn spec(&self) -> CupSpec {
        CupSpec {
            equation: CupEquation::Hyperbolic { a: 4.57, b: 452.0 },
            drain_window_secs: (25.0, 150.0),
            orifice_mm: 4.0,
        }
    }
}

/// ISO 2431 flow cups, named by orifice diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IsoCup {
    /// ISO cup, 3 mm orifice
    Mm3,
    /// ISO cup, 4 mm orifice
    Mm4,
    /// ISO cup, 5 mm orifice
    Mm5,
    /// ISO cup, 6 mm orifice
    Mm6,
}

impl EffluxCup for IsoCup {
    fn spec(&self) -> CupSpec {
        let (a, b, orifice_mm) = match self {
            Self::Mm3 => (0.443, 200.0, 3.0),
            Self::Mm4 => (1.37, 200.0, 4.0),
            Self::Mm5 => (3.28, 220.0, 5.0),
            Self::Mm6 => (6.90, 570.0, 6.0),
        };
        CupSpec {
            equation: CupEquation::Hyperbolic { a, b },
            drain_window_secs: (30.0, 100.0),
            orifice_mm,
        }
    }
}
