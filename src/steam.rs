use converter::{Converter, UnitSystem};

use crate::error::{Result, SteamError};
use crate::if97::{
    P_CRIT, P_MIN, T_CRIT, T_MIN, region1, region2, region3, region4, region5,
    select::{self, Region},
    transport,
};
use crate::properties::*;

/// High-level entry point for IF97 water and steam calculations.
///
/// Accepts any of the supported input pairs, classifies the state into
/// its IF97 region and evaluates the full property surface there.  An
/// optional [`UnitSystem`] lets you work in °C + bar (or any other
/// combination) instead of the native K + MPa.
///
/// # Quick example (engineering units)
/// ```
/// use steam97::{Steam, UnitSystem};
///
/// let steam = Steam::with_units(UnitSystem::engineering());
/// // Inputs and outputs are now in °C, bar, kg/m³, kJ/kg, …
/// let props = steam.props_pt(10.0, 200.0)?;
/// println!("enthalpy = {:.2} kJ/kg", props.enthalpy);
/// # Ok::<(), steam97::SteamError>(())
/// ```
pub struct Steam {
    conv: Converter,
}

impl Default for Steam {
    fn default() -> Self {
        Self::new()
    }
}

impl Steam {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a `Steam` instance using **native IF97 units** (K, MPa,
    /// kg/m³, kJ/kg, …).
    pub fn new() -> Self {
        Self {
            conv: Converter::identity(),
        }
    }

    /// Create a `Steam` instance with a **custom unit system**.
    ///
    /// ```
    /// use steam97::{Steam, UnitSystem};
    ///
    /// let steam = Steam::with_units(UnitSystem::engineering());
    /// let t_sat = steam.saturation_p(10.0)?.temperature;   // bar → °C
    /// # Ok::<(), steam97::SteamError>(())
    /// ```
    pub fn with_units(units: UnitSystem) -> Self {
        Self {
            conv: Converter::new(units),
        }
    }

    /// Access the active converter (useful for manual conversions).
    pub fn converter(&self) -> &Converter {
        &self.conv
    }

    // ── Flash calculations ───────────────────────────────────────────

    /// Pressure-temperature flash.  Single-phase only: a state on the
    /// saturation curve cannot resolve its quality from (p, T).
    pub fn props_pt(&self, p: f64, t: f64) -> Result<ThermoProps> {
        let p = self.conv.p_to_native(p);
        let t = self.conv.t_to_native(t);
        let region = select::region_pt(p, t)?;
        if region == Region::Four {
            return Err(SteamError::OutOfRange(format!(
                "(p={p} MPa, T={t} K) lies on the saturation curve; use props_px or props_tx"
            )));
        }
        let raw = single_phase_pt(region, p, t)?;
        Ok(self.convert_thermo(raw))
    }

    /// Pressure-enthalpy flash.
    pub fn props_ph(&self, p: f64, h: f64) -> Result<ThermoProps> {
        let raw = self.native_props_ph(self.conv.p_to_native(p), self.conv.h_to_native(h))?;
        Ok(self.convert_thermo(raw))
    }

    /// Pressure-entropy flash.
    pub fn props_ps(&self, p: f64, s: f64) -> Result<ThermoProps> {
        let raw = self.native_props_ps(self.conv.p_to_native(p), self.conv.s_to_native(s))?;
        Ok(self.convert_thermo(raw))
    }

    /// Enthalpy-entropy flash.
    pub fn props_hs(&self, h: f64, s: f64) -> Result<ThermoProps> {
        let raw = self.native_props_hs(self.conv.h_to_native(h), self.conv.s_to_native(s))?;
        Ok(self.convert_thermo(raw))
    }

    /// Pressure-density flash.
    pub fn props_prho(&self, p: f64, rho: f64) -> Result<ThermoProps> {
        let raw = self.native_props_prho(self.conv.p_to_native(p), self.conv.d_to_native(rho))?;
        Ok(self.convert_thermo(raw))
    }

    /// Pressure-quality flash, x ∈ [0, 1].
    pub fn props_px(&self, p: f64, x: f64) -> Result<ThermoProps> {
        let p = self.conv.p_to_native(p);
        if !(0.0..=1.0).contains(&x) {
            return Err(SteamError::OutOfRange(format!(
                "quality x={x} outside [0, 1]"
            )));
        }
        if p < P_MIN || p >= P_CRIT {
            return Err(SteamError::OutOfRange(format!(
                "p={p} MPa outside the saturation curve"
            )));
        }
        Ok(self.convert_thermo(two_phase(p, x)?))
    }

    /// Temperature-quality flash, x ∈ [0, 1].
    pub fn props_tx(&self, t: f64, x: f64) -> Result<ThermoProps> {
        let t = self.conv.t_to_native(t);
        if !(0.0..=1.0).contains(&x) {
            return Err(SteamError::OutOfRange(format!(
                "quality x={x} outside [0, 1]"
            )));
        }
        if t < T_MIN || t >= T_CRIT {
            return Err(SteamError::OutOfRange(format!(
                "T={t} K outside the saturation curve"
            )));
        }
        Ok(self.convert_thermo(two_phase(region4::psat_t(t)?, x)?))
    }

    // ── Saturation curve ─────────────────────────────────────────────

    /// Saturation properties at a given pressure.
    pub fn saturation_p(&self, p: f64) -> Result<SaturationPoint> {
        let p = self.conv.p_to_native(p);
        let raw = saturation_point(p)?;
        Ok(self.convert_sat(raw))
    }

    /// Saturation properties at a given temperature.
    pub fn saturation_t(&self, t: f64) -> Result<SaturationPoint> {
        let t = self.conv.t_to_native(t);
        let raw = saturation_point(region4::psat_t(t)?)?;
        Ok(self.convert_sat(raw))
    }

    /// Vapor quality from (p, h), clamped to [0, 1].
    pub fn quality_ph(&self, p: f64, h: f64) -> Result<f64> {
        region4::quality_ph(self.conv.p_to_native(p), self.conv.h_to_native(h))
    }

    /// Vapor quality from (p, s), clamped to [0, 1].
    pub fn quality_ps(&self, p: f64, s: f64) -> Result<f64> {
        region4::quality_ps(self.conv.p_to_native(p), self.conv.s_to_native(s))
    }

    // ── Transport properties ─────────────────────────────────────────

    /// Dynamic viscosity and thermal conductivity at (p, T).
    pub fn transport(&self, p: f64, t: f64) -> Result<TransportProps> {
        let p = self.conv.p_to_native(p);
        let t = self.conv.t_to_native(t);
        let region = select::region_pt(p, t)?;
        if region == Region::Four {
            return Err(SteamError::OutOfRange(format!(
                "transport properties undefined on the saturation curve (p={p}, T={t})"
            )));
        }
        let rho = single_phase_pt(region, p, t)?.density;
        Ok(TransportProps {
            viscosity: self.conv.eta_from_native(transport::viscosity(p, t, rho)?),
            thermal_conductivity: self
                .conv
                .tcx_from_native(transport::thermal_conductivity(p, t, rho)?),
        })
    }

    /// Surface tension of the liquid-vapor interface, N/m.
    pub fn surface_tension(&self, t: f64) -> Result<f64> {
        transport::surface_tension(self.conv.t_to_native(t))
    }

    // ── Region classification ────────────────────────────────────────

    pub fn region_pt(&self, p: f64, t: f64) -> Result<Region> {
        select::region_pt(self.conv.p_to_native(p), self.conv.t_to_native(t))
    }

    pub fn region_ph(&self, p: f64, h: f64) -> Result<Region> {
        select::region_ph(self.conv.p_to_native(p), self.conv.h_to_native(h))
    }

    pub fn region_ps(&self, p: f64, s: f64) -> Result<Region> {
        select::region_ps(self.conv.p_to_native(p), self.conv.s_to_native(s))
    }

    pub fn region_hs(&self, h: f64, s: f64) -> Result<Region> {
        select::region_hs(self.conv.h_to_native(h), self.conv.s_to_native(s))
    }

    pub fn region_prho(&self, p: f64, rho: f64) -> Result<Region> {
        select::region_prho(self.conv.p_to_native(p), self.conv.d_to_native(rho))
    }

    // ── Generic lookup ───────────────────────────────────────────────

    /// **Generic property lookup** — CoolProp-style.
    ///
    /// Input keys: `T`, `P`, `H`, `S`, `D` and `Q` in any supported
    /// pairing.  Output keys additionally allow `U`, `V`, `CP`, `CV`,
    /// `W`, `VISC` and `TCX`.  Values follow the unit system configured
    /// at construction, except `V` (always m³/kg), `W` (always m/s) and
    /// `Q` (dimensionless), which have no configurable dimension.
    ///
    /// ```
    /// # use steam97::Steam;
    /// let steam = Steam::new();
    /// let h = steam.get("H", "P", 3.0, "T", 300.0)?;
    /// # Ok::<(), steam97::SteamError>(())
    /// ```
    pub fn get(&self, output: &str, key1: &str, val1: f64, key2: &str, val2: f64) -> Result<f64> {
        let v1 = self.conv.input_to_native(key1, val1);
        let v2 = self.conv.input_to_native(key2, val2);
        let k1 = key1.trim().to_uppercase();
        let k2 = key2.trim().to_uppercase();

        // Order-insensitive pair dispatch in native units.
        let pair = |a: &str, b: &str| -> Option<(f64, f64)> {
            if k1 == a && k2 == b {
                Some((v1, v2))
            } else if k1 == b && k2 == a {
                Some((v2, v1))
            } else {
                None
            }
        };

        let props = if let Some((p, t)) = pair("P", "T") {
            single_phase_pt(select::region_pt(p, t)?, p, t)?
        } else if let Some((p, h)) = pair("P", "H") {
            self.native_props_ph(p, h)?
        } else if let Some((p, s)) = pair("P", "S") {
            self.native_props_ps(p, s)?
        } else if let Some((h, s)) = pair("H", "S") {
            self.native_props_hs(h, s)?
        } else if let Some((p, rho)) = pair("P", "D") {
            self.native_props_prho(p, rho)?
        } else if let Some((p, x)) = pair("P", "Q") {
            two_phase(p, x)?
        } else if let Some((t, x)) = pair("T", "Q") {
            two_phase(region4::psat_t(t)?, x)?
        } else {
            return Err(SteamError::OutOfRange(format!(
                "unsupported input pair ({key1}, {key2})"
            )));
        };

        let raw = match output.trim().to_uppercase().as_str() {
            "T" => props.temperature,
            "P" => props.pressure,
            "D" | "RHO" => props.density,
            "V" => props.volume,
            "H" => props.enthalpy,
            "S" => props.entropy,
            "E" | "U" => props.internal_energy,
            "CP" => props.cp.ok_or_else(two_phase_output_err(output))?,
            "CV" => props.cv.ok_or_else(two_phase_output_err(output))?,
            "W" => props.sound_speed.ok_or_else(two_phase_output_err(output))?,
            "Q" => props.quality.ok_or_else(|| {
                SteamError::OutOfRange("quality undefined for a single-phase state".into())
            })?,
            "ETA" | "VISC" => {
                transport::viscosity(props.pressure, props.temperature, props.density)?
            }
            "TCX" | "L" | "LAMBDA" => transport::thermal_conductivity(
                props.pressure,
                props.temperature,
                props.density,
            )?,
            other => {
                return Err(SteamError::OutOfRange(format!(
                    "unknown output key {other:?}"
                )));
            }
        };
        Ok(self.conv.output_from_native(output, raw))
    }

    // ── Batch helpers ────────────────────────────────────────────────

    /// Evaluate `props_pt` over a slice of (p, T) pairs.
    pub fn props_pt_many(&self, states: &[(f64, f64)]) -> Vec<Result<ThermoProps>> {
        states.iter().map(|&(p, t)| self.props_pt(p, t)).collect()
    }

    /// Evaluate `props_ph` over a slice of (p, h) pairs.
    pub fn props_ph_many(&self, states: &[(f64, f64)]) -> Vec<Result<ThermoProps>> {
        states.iter().map(|&(p, h)| self.props_ph(p, h)).collect()
    }

    // ── Internal helpers (native units) ──────────────────────────────

    fn native_props_ph(&self, p: f64, h: f64) -> Result<ThermoProps> {
        match select::region_ph(p, h)? {
            Region::One => single_phase_pt(Region::One, p, region1::t_ph(p, h)),
            Region::Two => single_phase_pt(Region::Two, p, region2::t_ph(p, h)),
            Region::Three => {
                let t = region3::t_ph(p, h);
                Ok(region3_props(1.0 / region3::v_ph(p, h), t))
            }
            Region::Four => two_phase(p, region4::quality_ph(p, h)?),
            Region::Five => single_phase_pt(Region::Five, p, region5::t_ph(p, h)?),
        }
    }

    fn native_props_ps(&self, p: f64, s: f64) -> Result<ThermoProps> {
        match select::region_ps(p, s)? {
            Region::One => single_phase_pt(Region::One, p, region1::t_ps(p, s)),
            Region::Two => single_phase_pt(Region::Two, p, region2::t_ps(p, s)),
            Region::Three => {
                let t = region3::t_ps(p, s);
                Ok(region3_props(1.0 / region3::v_ps(p, s), t))
            }
            Region::Four => two_phase(p, region4::quality_ps(p, s)?),
            Region::Five => single_phase_pt(Region::Five, p, region5::t_ps(p, s)?),
        }
    }

    fn native_props_hs(&self, h: f64, s: f64) -> Result<ThermoProps> {
        match select::region_hs(h, s)? {
            Region::One => {
                let p = region1::p_hs(h, s);
                single_phase_pt(Region::One, p, region1::t_ph(p, h))
            }
            Region::Two => {
                let p = region2::p_hs(h, s);
                single_phase_pt(Region::Two, p, region2::t_ph(p, h))
            }
            Region::Three => {
                let p = region3::p_hs(h, s);
                Ok(region3_props(
                    1.0 / region3::v_ph(p, h),
                    region3::t_ph(p, h),
                ))
            }
            Region::Four => {
                let t = region4::t_hs(h, s)?;
                let p = region4::psat_t(t)?;
                two_phase(p, region4::quality_ph(p, h)?)
            }
            Region::Five => Err(SteamError::UndefinedRegion(format!(
                "(h={h}, s={s}) cannot be resolved in the high-temperature region"
            ))),
        }
    }

    fn native_props_prho(&self, p: f64, rho: f64) -> Result<ThermoProps> {
        match select::region_prho(p, rho)? {
            Region::One => single_phase_pt(Region::One, p, region1::t_prho(p, rho)?),
            Region::Two => single_phase_pt(Region::Two, p, region2::t_prho(p, rho)?),
            Region::Three => Ok(region3_props(rho, region3::t_prho(p, rho)?)),
            Region::Four => {
                let (vl, vv) = if p < crate::if97::P_13 {
                    (region4::v_liq_p(p)?, region4::v_vap_p(p)?)
                } else {
                    (
                        region3::v_ph(p, region4::h_liq_p(p)?),
                        region3::v_ph(p, region4::h_vap_p(p)?),
                    )
                };
                let x = ((1.0 / rho - vl) / (vv - vl)).clamp(0.0, 1.0);
                two_phase(p, x)
            }
            Region::Five => single_phase_pt(Region::Five, p, region5::t_prho(p, rho)?),
        }
    }

    // volume and sound_speed stay in m³/kg and m/s: the converter has
    // no volume or velocity dimension
    fn convert_thermo(&self, raw: ThermoProps) -> ThermoProps {
        ThermoProps {
            temperature: self.conv.t_from_native(raw.temperature),
            pressure: self.conv.p_from_native(raw.pressure),
            density: self.conv.d_from_native(raw.density),
            volume: raw.volume,
            enthalpy: self.conv.h_from_native(raw.enthalpy),
            entropy: self.conv.s_from_native(raw.entropy),
            internal_energy: self.conv.h_from_native(raw.internal_energy),
            cp: raw.cp.map(|v| self.conv.s_from_native(v)),
            cv: raw.cv.map(|v| self.conv.s_from_native(v)),
            sound_speed: raw.sound_speed,
            quality: raw.quality,
        }
    }

    fn convert_sat(&self, raw: SaturationPoint) -> SaturationPoint {
        SaturationPoint {
            temperature: self.conv.t_from_native(raw.temperature),
            pressure: self.conv.p_from_native(raw.pressure),
            density_liquid: self.conv.d_from_native(raw.density_liquid),
            density_vapor: self.conv.d_from_native(raw.density_vapor),
            enthalpy_liquid: self.conv.h_from_native(raw.enthalpy_liquid),
            enthalpy_vapor: self.conv.h_from_native(raw.enthalpy_vapor),
            entropy_liquid: self.conv.s_from_native(raw.entropy_liquid),
            entropy_vapor: self.conv.s_from_native(raw.entropy_vapor),
        }
    }
}

fn two_phase_output_err(output: &str) -> impl FnOnce() -> SteamError {
    let output = output.to_string();
    move || {
        SteamError::OutOfRange(format!(
            "{output} undefined in the two-phase region"
        ))
    }
}

/// Full property surface for a single-phase state, native units.
fn single_phase_pt(region: Region, p: f64, t: f64) -> Result<ThermoProps> {
    let (v, h, u, s, cp, cv, w) = match region {
        Region::One => (
            region1::v_pt(p, t),
            region1::h_pt(p, t),
            region1::u_pt(p, t),
            region1::s_pt(p, t),
            region1::cp_pt(p, t),
            region1::cv_pt(p, t),
            region1::w_pt(p, t),
        ),
        Region::Two => (
            region2::v_pt(p, t),
            region2::h_pt(p, t),
            region2::u_pt(p, t),
            region2::s_pt(p, t),
            region2::cp_pt(p, t),
            region2::cv_pt(p, t),
            region2::w_pt(p, t),
        ),
        Region::Three => {
            let rho = region3::rho_pt(p, t)?;
            return Ok(region3_props(rho, t));
        }
        Region::Five => (
            region5::v_pt(p, t),
            region5::h_pt(p, t),
            region5::u_pt(p, t),
            region5::s_pt(p, t),
            region5::cp_pt(p, t),
            region5::cv_pt(p, t),
            region5::w_pt(p, t),
        ),
        Region::Four => {
            return Err(SteamError::UndefinedRegion(format!(
                "(p={p} MPa, T={t} K) is a two-phase state"
            )));
        }
    };
    Ok(ThermoProps {
        temperature: t,
        pressure: p,
        density: 1.0 / v,
        volume: v,
        enthalpy: h,
        entropy: s,
        internal_energy: u,
        cp: Some(cp),
        cv: Some(cv),
        sound_speed: Some(w),
        quality: None,
    })
}

/// Region-3 property surface from the Helmholtz equation at (ρ, T).
fn region3_props(rho: f64, t: f64) -> ThermoProps {
    ThermoProps {
        temperature: t,
        pressure: region3::p_rho_t(rho, t),
        density: rho,
        volume: 1.0 / rho,
        enthalpy: region3::h_rho_t(rho, t),
        entropy: region3::s_rho_t(rho, t),
        internal_energy: region3::u_rho_t(rho, t),
        cp: Some(region3::cp_rho_t(rho, t)),
        cv: Some(region3::cv_rho_t(rho, t)),
        sound_speed: Some(region3::w_rho_t(rho, t)),
        quality: None,
    }
}

/// Two-phase state at pressure p and quality x, native units.
fn two_phase(p: f64, x: f64) -> Result<ThermoProps> {
    if !(0.0..=1.0).contains(&x) {
        return Err(SteamError::OutOfRange(format!(
            "quality x={x} outside [0, 1]"
        )));
    }
    let t = region4::tsat_p(p)?;
    let (hl, hv) = (region4::h_liq_p(p)?, region4::h_vap_p(p)?);
    let (vl, vv) = if p < crate::if97::P_13 {
        (region4::v_liq_p(p)?, region4::v_vap_p(p)?)
    } else {
        (
            region3::v_ph(p, hl),
            region3::v_ph(p, hv),
        )
    };
    let (sl, sv) = (region4::s_liq_p(p)?, region4::s_vap_p(p)?);
    let v = vl + x * (vv - vl);
    let h = hl + x * (hv - hl);
    let s = sl + x * (sv - sl);
    Ok(ThermoProps {
        temperature: t,
        pressure: p,
        density: 1.0 / v,
        volume: v,
        enthalpy: h,
        entropy: s,
        // p v carries MPa·m³/kg = MJ/kg, hence the factor 1000.
        internal_energy: h - p * v * 1000.0,
        cp: None,
        cv: None,
        sound_speed: None,
        quality: Some(x),
    })
}

/// Both phase states on the saturation curve at pressure p.
fn saturation_point(p: f64) -> Result<SaturationPoint> {
    let t = region4::tsat_p(p)?;
    let (hl, hv) = (region4::h_liq_p(p)?, region4::h_vap_p(p)?);
    let (vl, vv) = if p < crate::if97::P_13 {
        (region4::v_liq_p(p)?, region4::v_vap_p(p)?)
    } else {
        (
            region3::v_ph(p, hl),
            region3::v_ph(p, hv),
        )
    };
    Ok(SaturationPoint {
        temperature: t,
        pressure: p,
        density_liquid: 1.0 / vl,
        density_vapor: 1.0 / vv,
        enthalpy_liquid: hl,
        enthalpy_vapor: hv,
        entropy_liquid: region4::s_liq_p(p)?,
        entropy_vapor: region4::s_vap_p(p)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pt_flash_reference_points() {
        let steam = Steam::new();
        let p = steam.props_pt(17.0, 623.15).unwrap();
        assert!((p.enthalpy - 1_666.589).abs() < 0.1, "h {}", p.enthalpy);

        let p = steam.props_pt(15.0, 1073.15).unwrap();
        assert!((p.enthalpy - 4_091.326).abs() < 0.1, "h {}", p.enthalpy);
    }

    #[test]
    fn pt_flash_rejects_saturated_input() {
        let steam = Steam::new();
        let t_sat = steam.saturation_p(10.0).unwrap().temperature;
        assert!(steam.props_pt(10.0, t_sat).is_err());
    }

    #[test]
    fn quality_reference_point() {
        let steam = Steam::new();
        let x = steam.quality_ph(15.0, 2000.0).unwrap();
        assert!((x - 0.390).abs() < 0.005, "x {x}");
    }

    #[test]
    fn two_phase_flash_masks_caloric_slots() {
        let steam = Steam::new();
        let props = steam.props_px(1.0, 0.5).unwrap();
        assert_eq!(props.quality, Some(0.5));
        assert!(props.cp.is_none() && props.cv.is_none() && props.sound_speed.is_none());
    }

    #[test]
    fn get_round_trip() {
        let steam = Steam::new();
        let h = steam.get("H", "P", 3.0, "T", 300.0).unwrap();
        let t = steam.get("T", "P", 3.0, "H", h).unwrap();
        // the backward T(p,h) equations hold to about 25 mK
        assert!((t - 300.0).abs() < 0.03, "t {t}");
    }
}
