//! Output structures for property calculations.
//!
//! All values are expressed in the units selected at [`Steam`]
//! construction time (see [`UnitSystem`]); the tables below show the
//! IF97-native defaults.
//!
//! [`Steam`]: crate::Steam
//! [`UnitSystem`]: converter::UnitSystem

use serde::{Deserialize, Serialize};

/// Complete thermodynamic state returned by the flash calculations.
///
/// | Field             | IF97-native unit |
/// |-------------------|------------------|
/// | `temperature`     | K                |
/// | `pressure`        | MPa              |
/// | `density`         | kg/m³            |
/// | `volume`          | m³/kg            |
/// | `enthalpy`        | kJ/kg            |
/// | `entropy`         | kJ/(kg·K)        |
/// | `internal_energy` | kJ/kg            |
/// | `cp`, `cv`        | kJ/(kg·K)        |
/// | `sound_speed`     | m/s              |
///
/// `quality` is `Some(x)` with x ∈ [0, 1] for two-phase states and
/// `None` for single-phase states.  `cp`, `cv` and `sound_speed` are
/// `None` inside the two-phase dome, where they are not defined.
///
/// `volume` (m³/kg) and `sound_speed` (m/s) are always reported in
/// the native units above: [`UnitSystem`] carries no volume or
/// velocity dimension, so these two fields ignore the selected unit
/// system.  `quality` is dimensionless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermoProps {
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
    pub volume: f64,
    pub enthalpy: f64,
    pub entropy: f64,
    pub internal_energy: f64,
    pub cp: Option<f64>,
    pub cv: Option<f64>,
    pub sound_speed: Option<f64>,
    pub quality: Option<f64>,
}

impl std::fmt::Display for ThermoProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn opt(v: Option<f64>) -> String {
            v.map_or_else(|| "-".into(), |x| format!("{x:.4}"))
        }
        writeln!(f, "T       = {:.4}", self.temperature)?;
        writeln!(f, "p       = {:.6}", self.pressure)?;
        writeln!(f, "rho     = {:.4}", self.density)?;
        writeln!(f, "h       = {:.3}", self.enthalpy)?;
        writeln!(f, "s       = {:.5}", self.entropy)?;
        writeln!(f, "u       = {:.3}", self.internal_energy)?;
        writeln!(f, "cp      = {}", opt(self.cp))?;
        writeln!(f, "cv      = {}", opt(self.cv))?;
        writeln!(f, "w       = {}", opt(self.sound_speed))?;
        write!(f, "quality = {}", opt(self.quality))
    }
}

/// Saturated liquid and vapor states at one point on the saturation
/// curve.
///
/// | Field                                    | IF97-native unit |
/// |------------------------------------------|------------------|
/// | `temperature`                            | K                |
/// | `pressure`                               | MPa              |
/// | `density_liquid`, `density_vapor`        | kg/m³            |
/// | `enthalpy_liquid`, `enthalpy_vapor`      | kJ/kg            |
/// | `entropy_liquid`, `entropy_vapor`        | kJ/(kg·K)        |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationPoint {
    pub temperature: f64,
    pub pressure: f64,
    pub density_liquid: f64,
    pub density_vapor: f64,
    pub enthalpy_liquid: f64,
    pub enthalpy_vapor: f64,
    pub entropy_liquid: f64,
    pub entropy_vapor: f64,
}

impl std::fmt::Display for SaturationPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tsat  = {:.4}", self.temperature)?;
        writeln!(f, "psat  = {:.6}", self.pressure)?;
        writeln!(f, "rho'  = {:.4}   rho'' = {:.4}", self.density_liquid, self.density_vapor)?;
        writeln!(f, "h'    = {:.3}   h''   = {:.3}", self.enthalpy_liquid, self.enthalpy_vapor)?;
        write!(f, "s'    = {:.5}   s''   = {:.5}", self.entropy_liquid, self.entropy_vapor)
    }
}

/// Transport properties.
///
/// | Field                  | IF97-native unit |
/// |------------------------|------------------|
/// | `viscosity`            | Pa·s             |
/// | `thermal_conductivity` | W/(m·K)          |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportProps {
    pub viscosity: f64,
    pub thermal_conductivity: f64,
}

impl std::fmt::Display for TransportProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "eta    = {:.6e}", self.viscosity)?;
        write!(f, "lambda = {:.5}", self.thermal_conductivity)
    }
}
