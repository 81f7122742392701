//! Efflux-Cup Viscometry
//!
//! ## Overview
//!
//! Converts the gravity drain time of a fluid through a calibrated orifice
//! into kinematic viscosity in mm²/s (cSt), for the cup families a coating
//! lab actually owns: Zahn and Shell dip cups (ASTM D4212), Ford cups
//! (ASTM D1200), the DIN 53211 4 mm cup and the ISO 2431 series.
//!
//! Two calibration equations cover every family:
//!
//! ```text
//! V = K·(t − c)        Zahn, Shell, Ford   (linear)
//! V = A·t − B/t        DIN, ISO            (hyperbolic)
//! ```
//!
//! with per-cup constants from the standards. Drain times are only valid
//! inside the timing window the standard calibrated each cup over; readings
//! outside the window are a usage error, not a value to extrapolate from.
//!
//! ## Checking a cup against a reference oil
//!
//! The usual bench workflow: time a certified reference oil through the
//! cup, correct the oil's certified viscosity to the bath temperature, then
//! compare:
//!
//! ```
//! use benchcal::viscosity::{percentage_error, EffluxCup, ReferenceOil, ZahnCup};
//!
//! let measured = ZahnCup::No1.kinematic_viscosity(46.9)?;
//! let certified = ReferenceOil::C10.viscosity_at(21.3)?;
//! let error_pct = percentage_error(certified, measured)?;
//! assert!(error_pct.abs() < 5.0);
//! # Ok::<(), benchcal::DomainError>(())
//! ```

mod cups;
mod reference_oil;

pub use cups::{CupEquation, CupSpec, DinCup4, EffluxCup, FordCup, IsoCup, ShellCup, ZahnCup};
pub use reference_oil::{percentage_error, CertificatePoint, OilCertificate, ReferenceOil};
