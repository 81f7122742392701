//! PT100 Constants from BS EN 60751
//!
//! Callendar–Van Dusen coefficients, the domains over which the standard
//! tabulates platinum resistance, and the tolerance-class parameters used to
//! grade a reference-vs-unit-under-test comparison.

// ===== CALLENDAR–VAN DUSEN COEFFICIENTS =====

/// Linear coefficient A of the Callendar–Van Dusen relation (1/°C).
///
/// Applies over the full industrial platinum range.
///
/// Source: BS EN 60751:2008, Table 2
pub const CVD_A: f64 = 3.9083e-3;

/// Quadratic coefficient B of the Callendar–Van Dusen relation (1/°C²).
///
/// Applies over the full industrial platinum range.
///
/// Source: BS EN 60751:2008, Table 2
pub const CVD_B: f64 = -5.775e-7;

/// Cubic correction coefficient C (1/°C⁴), sub-zero branch only.
///
/// The standard zeroes this term for temperatures at or above 0 °C; the
/// cubic correction models platinum's behavior approaching cryogenic
/// temperatures.
///
/// Source: BS EN 60751:2008, Table 2
pub const CVD_C_SUB_ZERO: f64 = -4.183e-12;

/// Nominal sensor resistance at 0 °C (Ω).
///
/// The "100" in PT100. PT500/PT1000 elements scale this value but are out
/// of scope for this crate.
///
/// Source: BS EN 60751:2008, Section 5.2
pub const R0_OHMS: f64 = 100.0;

// ===== CONVERSION DOMAINS =====

/// Lower bound of the temperature → resistance domain (°C), exclusive.
///
/// One degree below the −200 °C floor of the standard's tables, so the
/// inversion's coarse search can start just outside the tabulated range.
pub const TEMPERATURE_MIN_C: f64 = -201.0;

/// Upper bound of the temperature → resistance domain (°C), exclusive.
///
/// One degree above the 850 °C ceiling of the standard's tables.
pub const TEMPERATURE_MAX_C: f64 = 851.0;

/// Lower bound of the resistance → temperature domain (Ω), exclusive.
///
/// Just below the resistance of a PT100 at −200 °C (≈ 18.52 Ω).
pub const RESISTANCE_MIN_OHMS: f64 = 18.0;

/// Upper bound of the resistance → temperature domain (Ω), exclusive.
///
/// Just above the resistance of a PT100 at 850 °C (≈ 390.48 Ω).
pub const RESISTANCE_MAX_OHMS: f64 = 400.0;

// ===== TOLERANCE CLASSES =====

/// Fixed term of the Class AA tolerance band (°C).
///
/// Source: BS EN 60751:2008, Table 3
pub const CLASS_AA_BASE_C: f64 = 0.1;

/// Fixed term of the Class A tolerance band (°C).
///
/// Source: BS EN 60751:2008, Table 3
pub const CLASS_A_BASE_C: f64 = 0.15;

/// Fixed term of the Class B tolerance band (°C).
///
/// Source: BS EN 60751:2008, Table 3
pub const CLASS_B_BASE_C: f64 = 0.3;

/// Fixed term of the Class C tolerance band (°C).
///
/// Source: BS EN 60751:2008, Table 3
pub const CLASS_C_BASE_C: f64 = 0.6;

/// Temperature-proportional term of the tolerance bands (°C per °C).
///
/// Applied to the magnitude of the reference temperature for every class.
pub const CLASS_SLOPE_PER_C: f64 = 0.0017;

/// Fractional digits reported for deviations and tolerance limits.
///
/// Matches the resolution of typical calibration certificates.
pub const ASSESSMENT_DIGITS: u32 = 4;
