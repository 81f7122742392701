//! Error Types for Calibration Conversions
//!
//! ## Design Philosophy
//!
//! Every conversion in this crate is a pure function over a bounded physical
//! domain, so the error surface is deliberately small:
//!
//! 1. **Small Size**: One enum, two variants, inline data only. Errors are
//!    `Copy` and carry no heap allocation, so they can be returned from hot
//!    paths and stored in fixed-size queues on embedded targets.
//!
//! 2. **Typed, Never Printed**: A reading outside a conversion's domain is
//!    signaled to the caller as a value, never written to a console or
//!    smuggled through a sentinel result.
//!
//! 3. **Actionable Information**: `OutOfRange` carries the offending value
//!    together with the domain bounds, which is everything a calibration
//!    bench UI needs to tell the operator what went wrong.
//!
//! ## Error Categories
//!
//! - `OutOfRange`: input outside the conversion's physical domain: a
//!   resistance outside (18, 400) Ω, a temperature outside (−201, 851) °C,
//!   a drain time outside the cup's standard timing window, or a malformed
//!   oil certificate.
//! - `InvalidValue`: mathematically meaningless input (NaN, infinity, a zero
//!   reference viscosity).

use thiserror_no_std::Error;

/// Result type for calibration conversions
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain violations - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Input outside the conversion's supported domain
    #[error("Value {value} outside range ({min}, {max})")]
    OutOfRange {
        /// The reading that failed the domain check
        value: f64,
        /// Lower bound of the supported domain
        min: f64,
        /// Upper bound of the supported domain
        max: f64,
    },

    /// Value makes no physical sense (NaN, infinity, zero divisor)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for DomainError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } => {
                defmt::write!(fmt, "Value {} outside ({}, {})", value, min, max)
            }
            Self::InvalidValue => defmt::write!(fmt, "Invalid value"),
        }
    }
}
