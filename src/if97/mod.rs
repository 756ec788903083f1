//! IAPWS-IF97 numeric core.
//!
//! Everything in this module works in IF97-native units: MPa, K,
//! kJ/kg, kJ/(kg·K), m³/kg.  Unit conversion happens only at the
//! [`Steam`](crate::Steam) boundary.
//!
//! The module is split along the lines of the formulation itself:
//! forward equations per region ([`region1`] … [`region5`]), the
//! saturation curve ([`region4`]), the inter-region boundary curves
//! ([`boundary`]), the region classifiers ([`select`]) and the
//! transport correlations ([`transport`]).  [`solve`] holds the shared
//! bounded root finders used by the iterative backward solvers.

pub mod boundary;
pub mod region1;
pub mod region2;
pub mod region3;
pub mod region4;
pub mod region5;
pub mod select;
pub mod solve;
pub mod transport;

/// Specific gas constant of water, kJ/(kg·K).
pub const R: f64 = 0.461526;

/// Critical temperature, K.
pub const T_CRIT: f64 = 647.096;
/// Critical pressure, MPa.
pub const P_CRIT: f64 = 22.06395;
/// Critical density, kg/m³.
pub const RHO_CRIT: f64 = 322.0;
/// Enthalpy at the critical point, kJ/kg (value used by the
/// region-3 saturated-enthalpy brackets).
pub const H_CRIT: f64 = 2087.235_001_648_64;

/// Triple-point pressure, MPa: lower pressure limit of the formulation.
pub const P_MIN: f64 = 0.000_611_657;
/// Upper pressure limit, MPa.
pub const P_MAX: f64 = 100.0;
/// Lower temperature limit, K.
pub const T_MIN: f64 = 273.15;
/// Region 1/3 boundary temperature, K.
pub const T_13: f64 = 623.15;
/// Region 2/5 boundary temperature, K.
pub const T_25: f64 = 1073.15;
/// Upper temperature limit (region 5), K.
pub const T_MAX: f64 = 2273.15;
/// Pressure at which the 623.15 K isotherm meets the saturation
/// curve, MPa: regions 1, 3 and 4 all touch here.
pub const P_13: f64 = 16.5292;
/// Upper pressure limit of region 5, MPa.
pub const P5_MAX: f64 = 10.0;
