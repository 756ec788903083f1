//! Configurable unit conversion for steam-table values.
//!
//! The IF97 formulation internally uses: **K, MPa, kg/m³, kJ/kg,
//! kJ/(kg·K), Pa·s, W/(m·K), m/s**.  This crate lets you work in
//! whatever units you prefer (°C, bar, psi, J/kg, …) and handles the
//! conversion transparently.
//!
//! # Presets
//!
//! | Preset          | T   | P   | D     | H     | S         |
//! |-----------------|-----|-----|-------|-------|-----------|
//! | `if97()`        | K   | MPa | kg/m³ | kJ/kg | kJ/(kg·K) |
//! | `engineering()` | °C  | bar | kg/m³ | kJ/kg | kJ/(kg·K) |
//! | `si()`          | K   | Pa  | kg/m³ | J/kg  | J/(kg·K)  |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Celsius)
//!     .pressure(PressUnit::Bar);
//! ```

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    /// Kelvin (IF97 native)
    Kelvin,
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressUnit {
    /// Megapascal (IF97 native)
    MPa,
    /// Kilopascal
    KPa,
    /// Bar (1 bar = 0.1 MPa)
    Bar,
    /// Pascal
    Pa,
    /// Standard atmosphere (0.101325 MPa)
    Atm,
    /// Pounds per square inch
    Psi,
}

/// Density unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnit {
    /// kg/m³ (IF97 native)
    KgPerM3,
    /// g/cm³
    GPerCm3,
    /// lb/ft³
    LbPerFt3,
}

/// Energy / enthalpy unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    /// kJ/kg (IF97 native)
    KJPerKg,
    /// J/kg
    JPerKg,
    /// BTU/lb
    BtuPerLb,
}

/// Entropy / heat-capacity unit (energy per mass per temperature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyUnit {
    /// kJ/(kg·K) (IF97 native)
    KJPerKgK,
    /// J/(kg·K)
    JPerKgK,
}

/// Dynamic viscosity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViscosityUnit {
    /// Pa·s (IF97 native)
    PaS,
    /// mPa·s (= centipoise)
    MilliPaS,
    /// µPa·s
    MicroPaS,
}

/// Thermal conductivity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConductivityUnit {
    /// W/(m·K) (IF97 native)
    WPerMK,
    /// mW/(m·K)
    MilliWPerMK,
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — user configuration
// ────────────────────────────────────────────────────────────────────

/// Describes the set of units the user wants to work in.
///
/// Create one with a preset (`if97()`, `engineering()`, `si()`) or
/// customise individual properties with the builder methods.
#[derive(Debug, Clone)]
pub struct UnitSystem {
    pub temperature:  TempUnit,
    pub pressure:     PressUnit,
    pub density:      DensityUnit,
    pub energy:       EnergyUnit,
    pub entropy:      EntropyUnit,
    pub viscosity:    ViscosityUnit,
    pub conductivity: ConductivityUnit,
}

impl UnitSystem {
    /// Start from IF97-native units.  Use the builder methods to
    /// change individual properties.
    pub fn new() -> Self { Self::if97() }

    // ── Presets ──────────────────────────────────────────────────────

    /// IF97 native: K, MPa, kg/m³, kJ/kg, kJ/(kg·K), Pa·s, W/(m·K).
    pub fn if97() -> Self {
        Self {
            temperature:  TempUnit::Kelvin,
            pressure:     PressUnit::MPa,
            density:      DensityUnit::KgPerM3,
            energy:       EnergyUnit::KJPerKg,
            entropy:      EntropyUnit::KJPerKgK,
            viscosity:    ViscosityUnit::PaS,
            conductivity: ConductivityUnit::WPerMK,
        }
    }

    /// Engineering / power-plant: °C, bar, kg/m³, kJ/kg, kJ/(kg·K).
    pub fn engineering() -> Self {
        Self {
            temperature:  TempUnit::Celsius,
            pressure:     PressUnit::Bar,
            density:      DensityUnit::KgPerM3,
            energy:       EnergyUnit::KJPerKg,
            entropy:      EntropyUnit::KJPerKgK,
            viscosity:    ViscosityUnit::MilliPaS,
            conductivity: ConductivityUnit::WPerMK,
        }
    }

    /// Strict SI: K, Pa, kg/m³, J/kg, J/(kg·K), Pa·s.
    pub fn si() -> Self {
        Self {
            temperature:  TempUnit::Kelvin,
            pressure:     PressUnit::Pa,
            density:      DensityUnit::KgPerM3,
            energy:       EnergyUnit::JPerKg,
            entropy:      EntropyUnit::JPerKgK,
            viscosity:    ViscosityUnit::PaS,
            conductivity: ConductivityUnit::WPerMK,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn pressure(mut self, u: PressUnit) -> Self { self.pressure = u; self }
    pub fn density(mut self, u: DensityUnit) -> Self { self.density = u; self }
    pub fn energy(mut self, u: EnergyUnit) -> Self { self.energy = u; self }
    pub fn entropy(mut self, u: EntropyUnit) -> Self { self.entropy = u; self }
    pub fn viscosity(mut self, u: ViscosityUnit) -> Self { self.viscosity = u; self }
    pub fn conductivity(mut self, u: ConductivityUnit) -> Self { self.conductivity = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::if97() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter — ready-to-use conversion for a chosen UnitSystem
// ────────────────────────────────────────────────────────────────────

/// Performs conversions between user units and IF97 internal units.
///
/// Water properties are mass-based throughout, so no molar mass is
/// involved; a `Converter` is just a [`UnitSystem`] with methods.
#[derive(Debug, Clone)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// Identity converter — no conversion at all (IF97 native units).
    pub fn identity() -> Self {
        Self { units: UnitSystem::if97() }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → IF97 (K)
    pub fn t_to_native(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin  => t,
            TempUnit::Celsius => t + 273.15,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0 + 273.15,
        }
    }

    /// IF97 (K) → User
    pub fn t_from_native(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin  => t,
            TempUnit::Celsius => t - 273.15,
            TempUnit::Fahrenheit => (t - 273.15) * 9.0 / 5.0 + 32.0,
        }
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// User → IF97 (MPa)
    pub fn p_to_native(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MPa => p,
            PressUnit::KPa => p / 1000.0,
            PressUnit::Bar => p / 10.0,
            PressUnit::Pa  => p / 1_000_000.0,
            PressUnit::Atm => p * 0.101_325,
            PressUnit::Psi => p * 0.006_894_757,
        }
    }

    /// IF97 (MPa) → User
    pub fn p_from_native(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MPa => p,
            PressUnit::KPa => p * 1000.0,
            PressUnit::Bar => p * 10.0,
            PressUnit::Pa  => p * 1_000_000.0,
            PressUnit::Atm => p / 0.101_325,
            PressUnit::Psi => p / 0.006_894_757,
        }
    }

    // ── Density ─────────────────────────────────────────────────────

    /// User → IF97 (kg/m³)
    pub fn d_to_native(&self, d: f64) -> f64 {
        match self.units.density {
            DensityUnit::KgPerM3  => d,
            DensityUnit::GPerCm3  => d * 1000.0,
            DensityUnit::LbPerFt3 => d * 16.018_463,
        }
    }

    /// IF97 (kg/m³) → User
    pub fn d_from_native(&self, d: f64) -> f64 {
        match self.units.density {
            DensityUnit::KgPerM3  => d,
            DensityUnit::GPerCm3  => d / 1000.0,
            DensityUnit::LbPerFt3 => d / 16.018_463,
        }
    }

    // ── Energy / Enthalpy / Internal energy ─────────────────────────

    /// User → IF97 (kJ/kg)
    pub fn h_to_native(&self, h: f64) -> f64 {
        match self.units.energy {
            EnergyUnit::KJPerKg  => h,
            EnergyUnit::JPerKg   => h / 1000.0,
            EnergyUnit::BtuPerLb => h * 2.326,
        }
    }

    /// IF97 (kJ/kg) → User
    pub fn h_from_native(&self, h: f64) -> f64 {
        match self.units.energy {
            EnergyUnit::KJPerKg  => h,
            EnergyUnit::JPerKg   => h * 1000.0,
            EnergyUnit::BtuPerLb => h / 2.326,
        }
    }

    // ── Entropy / Cv / Cp ───────────────────────────────────────────

    /// User → IF97 (kJ/(kg·K))
    pub fn s_to_native(&self, s: f64) -> f64 {
        match self.units.entropy {
            EntropyUnit::KJPerKgK => s,
            EntropyUnit::JPerKgK  => s / 1000.0,
        }
    }

    /// IF97 (kJ/(kg·K)) → User
    pub fn s_from_native(&self, s: f64) -> f64 {
        match self.units.entropy {
            EntropyUnit::KJPerKgK => s,
            EntropyUnit::JPerKgK  => s * 1000.0,
        }
    }

    // ── Viscosity ───────────────────────────────────────────────────

    /// IF97 (Pa·s) → User
    pub fn eta_from_native(&self, eta: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS      => eta,
            ViscosityUnit::MilliPaS => eta * 1000.0,
            ViscosityUnit::MicroPaS => eta * 1_000_000.0,
        }
    }

    /// User → IF97 (Pa·s)
    pub fn eta_to_native(&self, eta: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS      => eta,
            ViscosityUnit::MilliPaS => eta / 1000.0,
            ViscosityUnit::MicroPaS => eta / 1_000_000.0,
        }
    }

    // ── Thermal conductivity ────────────────────────────────────────

    /// IF97 (W/(m·K)) → User
    pub fn tcx_from_native(&self, tcx: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK      => tcx,
            ConductivityUnit::MilliWPerMK => tcx * 1000.0,
        }
    }

    /// User → IF97 (W/(m·K))
    pub fn tcx_to_native(&self, tcx: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK      => tcx,
            ConductivityUnit::MilliWPerMK => tcx / 1000.0,
        }
    }

    // ── Generic key-based conversion ────────────────────────────────

    /// Convert a user-provided input value to IF97 units, choosing
    /// the right conversion based on the property key (e.g. `"T"`,
    /// `"P"`, `"H"`, …).
    pub fn input_to_native(&self, key: &str, val: f64) -> f64 {
        match key.to_uppercase().as_str() {
            "T"                     => self.t_to_native(val),
            "P"                     => self.p_to_native(val),
            "D" | "RHO"             => self.d_to_native(val),
            "H"                     => self.h_to_native(val),
            "S"                     => self.s_to_native(val),
            "E" | "U"               => self.h_to_native(val),
            "CV" | "CP"             => self.s_to_native(val),
            "ETA" | "VISC"          => self.eta_to_native(val),
            "TCX" | "L" | "LAMBDA"  => self.tcx_to_native(val),
            _                       => val, // Q, W, etc.
        }
    }

    /// Convert an IF97 output value to user units.
    pub fn output_from_native(&self, key: &str, val: f64) -> f64 {
        match key.to_uppercase().as_str() {
            "T"                     => self.t_from_native(val),
            "P"                     => self.p_from_native(val),
            "D" | "RHO"             => self.d_from_native(val),
            "H"                     => self.h_from_native(val),
            "S"                     => self.s_from_native(val),
            "E" | "U"               => self.h_from_native(val),
            "CV" | "CP"             => self.s_from_native(val),
            "ETA" | "VISC"          => self.eta_from_native(val),
            "TCX" | "L" | "LAMBDA"  => self.tcx_from_native(val),
            _                       => val, // Q, W, etc.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engineering_round_trip() {
        let c = Converter::new(UnitSystem::engineering());
        let t = c.t_to_native(25.0);
        assert!((t - 298.15).abs() < 1e-12);
        assert!((c.t_from_native(t) - 25.0).abs() < 1e-12);
        // 10 bar = 1 MPa
        assert!((c.p_to_native(10.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn si_energy_scaling() {
        let c = Converter::new(UnitSystem::si());
        assert!((c.h_to_native(2500.0e3) - 2500.0).abs() < 1e-9);
        assert!((c.s_from_native(6.5) - 6500.0).abs() < 1e-9);
        assert!((c.p_to_native(101_325.0) - 0.101325).abs() < 1e-12);
    }

    #[test]
    fn key_based_dispatch() {
        let c = Converter::new(UnitSystem::new().temperature(TempUnit::Celsius));
        assert!((c.input_to_native("t", 0.0) - 273.15).abs() < 1e-12);
        // unknown keys pass through
        assert!((c.input_to_native("Q", 0.5) - 0.5).abs() < 1e-15);
    }
}
