//! Constants for benchcal
//!
//! Centralized, documented constants used throughout the crate. Every value
//! is traceable to a published standard or to a calibration certificate, and
//! is defined here rather than as a magic number at the point of use.
//!
//! ## Organization
//!
//! - **rtd**: Callendar–Van Dusen coefficients, conversion domains and
//!   tolerance-class parameters from BS EN 60751.
//! - **cups**: reference-oil certificate defaults used by the viscometric
//!   cup calibration workflow.

/// Callendar–Van Dusen coefficients, PT100 domains and tolerance classes.
pub mod rtd;

/// Reference-oil certificate values for cup calibration.
pub mod cups;

// Re-export commonly used constants for convenience
pub use rtd::{
    CVD_A, CVD_B, CVD_C_SUB_ZERO, R0_OHMS, RESISTANCE_MAX_OHMS, RESISTANCE_MIN_OHMS,
    TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
};
