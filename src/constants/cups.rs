//! Reference-Oil Certificate Defaults
//!
//! Certified kinematic viscosities for the calibration oils commonly used to
//! verify efflux cups. Each oil ships with a certificate stating its
//! viscosity at two temperatures bracketing normal laboratory conditions;
//! the values here are the certificate points used when a bench has no
//! fresher certificate on file.

/// Lower certificate temperature for C10 oil (°C).
pub const C10_LOW_TEMP_C: f64 = 20.0;

/// Certified C10 viscosity at the lower temperature (mm²/s).
pub const C10_LOW_VISCOSITY: f64 = 20.72;

/// Upper certificate temperature for C10 oil (°C).
pub const C10_HIGH_TEMP_C: f64 = 25.0;

/// Certified C10 viscosity at the upper temperature (mm²/s).
pub const C10_HIGH_VISCOSITY: f64 = 16.92;

/// Lower certificate temperature for C100 oil (°C).
pub const C100_LOW_TEMP_C: f64 = 20.0;

/// Certified C100 viscosity at the lower temperature (mm²/s).
pub const C100_LOW_VISCOSITY: f64 = 329.0;

/// Upper certificate temperature for C100 oil (°C).
pub const C100_HIGH_TEMP_C: f64 = 25.0;

/// Certified C100 viscosity at the upper temperature (mm²/s).
pub const C100_HIGH_VISCOSITY: f64 = 237.4;
