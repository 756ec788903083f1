//! Region classification for every supported input pair.
//!
//! The (p, T) split is exact: the saturation curve and the B23 line
//! decide the region directly. The other input pairs walk the region
//! boundaries expressed in their own coordinates, probing forward
//! equations where no closed-form border exists.

use std::fmt;

use crate::error::{Result, SteamError};
use crate::if97::{
    P_13, P5_MAX, P_MAX, P_MIN, T_13, T_25, T_CRIT, T_MAX, T_MIN, boundary, region1, region2,
    region3, region4, region5,
};

/// One of the five IF97 regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Compressed liquid.
    One,
    /// Superheated vapor.
    Two,
    /// Near-critical, dense fluid.
    Three,
    /// Two-phase mixture on the saturation curve.
    Four,
    /// High-temperature steam above 1073.15 K.
    Five,
}

impl Region {
    /// Numeric region label, 1 through 5.
    pub fn id(self) -> u8 {
        match self {
            Region::One => 1,
            Region::Two => 2,
            Region::Three => 3,
            Region::Four => 4,
            Region::Five => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {}", self.id())
    }
}

/// Tolerance for landing exactly on the saturation curve in (p, T).
const SAT_P_TOL: f64 = 1e-5;

/// Classify a (pressure, temperature) state.
pub fn region_pt(p: f64, t: f64) -> Result<Region> {
    if !p.is_finite() || !t.is_finite() {
        return Err(SteamError::OutOfRange(format!(
            "non-finite input p={p}, T={t}"
        )));
    }
    if t > T_25 {
        if t <= T_MAX && p > P_MIN && p <= P5_MAX {
            return Ok(Region::Five);
        }
        return Err(SteamError::OutOfRange(format!(
            "p={p} MPa, T={t} K outside the high-temperature range"
        )));
    }
    if t < T_MIN || p < P_MIN || p > P_MAX {
        return Err(SteamError::OutOfRange(format!(
            "p={p} MPa, T={t} K outside the valid range"
        )));
    }
    if t > T_13 {
        if p > boundary::b23_p_t(t) {
            if t < T_CRIT {
                let ps = region4::psat_t(t)?;
                if (p - ps).abs() < SAT_P_TOL {
                    return Ok(Region::Four);
                }
            }
            return Ok(Region::Three);
        }
        return Ok(Region::Two);
    }
    let ps = region4::psat_t(t)?;
    if (p - ps).abs() < SAT_P_TOL {
        Ok(Region::Four)
    } else if p > ps {
        Ok(Region::One)
    } else {
        Ok(Region::Two)
    }
}

/// Classify a (pressure, enthalpy) state.
pub fn region_ph(p: f64, h: f64) -> Result<Region> {
    if !p.is_finite() || !h.is_finite() || p < P_MIN || p > P_MAX {
        return Err(SteamError::OutOfRange(format!(
            "p={p} MPa outside [{P_MIN}, {P_MAX}]"
        )));
    }
    // Slack below the cold liquid line absorbs backward-equation noise.
    if h < region1::h_pt(p, T_MIN) - 0.5 {
        return Err(SteamError::OutOfRange(format!(
            "h={h} kJ/kg below the 273.15 K isotherm at p={p} MPa"
        )));
    }
    if p < P_13 {
        let ts = region4::tsat_p(p)?;
        // Cheap estimates of the phase boundary enthalpies, refined
        // with the forward equations only near the boundary.
        let mut hl = 109.6635 * p.ln() + 40.3481 * p + 734.58;
        if (h - hl).abs() < 100.0 {
            hl = region1::h_pt(p, ts);
        }
        if h <= hl {
            return Ok(Region::One);
        }
        let mut hv = 45.1768 * p.ln() - 20.158 * p + 2804.4;
        if (h - hv).abs() < 50.0 {
            hv = region2::h_pt(p, ts);
        }
        if h < hv {
            return Ok(Region::Four);
        }
        // Well below the region 2/5 border at any pressure.
        if h < 4000.0 {
            return Ok(Region::Two);
        }
        if h <= region2::h_pt(p, T_25) {
            return Ok(Region::Two);
        }
        if p <= P5_MAX && h <= region5::h_pt(p, T_MAX) {
            return Ok(Region::Five);
        }
        return Err(SteamError::OutOfRange(format!(
            "h={h} kJ/kg above the valid range at p={p} MPa"
        )));
    }
    if h < region1::h_pt(p, T_13) {
        return Ok(Region::One);
    }
    if h < region2::h_pt(p, boundary::b23_t_p(p)) {
        if p > boundary::p3sat_h(h) {
            return Ok(Region::Three);
        }
        return Ok(Region::Four);
    }
    if h <= region2::h_pt(p, T_25) {
        return Ok(Region::Two);
    }
    Err(SteamError::OutOfRange(format!(
        "h={h} kJ/kg above the valid range at p={p} MPa"
    )))
}

/// Classify a (pressure, entropy) state.
pub fn region_ps(p: f64, s: f64) -> Result<Region> {
    if !p.is_finite() || !s.is_finite() || p < P_MIN || p > P_MAX {
        return Err(SteamError::OutOfRange(format!(
            "p={p} MPa outside [{P_MIN}, {P_MAX}]"
        )));
    }
    if s < region1::s_pt(p, T_MIN) - 1e-4 {
        return Err(SteamError::OutOfRange(format!(
            "s={s} kJ/(kg K) below the 273.15 K isotherm at p={p} MPa"
        )));
    }
    if p < P_13 {
        let ts = region4::tsat_p(p)?;
        let sl = region1::s_pt(p, ts);
        let sv = region2::s_pt(p, ts);
        if s > sv {
            if s <= region2::s_pt(p, T_25) {
                return Ok(Region::Two);
            }
            if p <= P5_MAX && s <= region5::s_pt(p, T_MAX) {
                return Ok(Region::Five);
            }
            return Err(SteamError::OutOfRange(format!(
                "s={s} kJ/(kg K) above the valid range at p={p} MPa"
            )));
        }
        if s < sl {
            return Ok(Region::One);
        }
        return Ok(Region::Four);
    }
    if s < region1::s_pt(p, T_13) {
        return Ok(Region::One);
    }
    if s < region2::s_pt(p, boundary::b23_t_p(p)) {
        // Between the 623.15 K isotherm and the B23 line. Only the
        // entropy band of the region-3 saturation dome can be wet.
        if s >= boundary::S3SAT_MIN && s <= boundary::S3SAT_MAX && p <= boundary::p3sat_s(s)? {
            return Ok(Region::Four);
        }
        return Ok(Region::Three);
    }
    if s <= region2::s_pt(p, T_25) {
        return Ok(Region::Two);
    }
    Err(SteamError::OutOfRange(format!(
        "s={s} kJ/(kg K) above the valid range at p={p} MPa"
    )))
}

/// Classify an (enthalpy, entropy) state.
pub fn region_hs(h: f64, s: f64) -> Result<Region> {
    if !h.is_finite() || !s.is_finite() {
        return Err(SteamError::OutOfRange(format!(
            "non-finite input h={h}, s={s}"
        )));
    }
    if s < -1.545_495_919e-4 {
        return Err(SteamError::OutOfRange(format!(
            "s={s} kJ/(kg K) below the triple-point liquid line"
        )));
    }
    if s <= 3.778_281_34 {
        // Liquid side: region 1, 3 below the B13 line, or wet.
        if h < region4::hsat_s(s)? {
            return Ok(Region::Four);
        }
        if s < 3.397_782_955 {
            let t = region1::t_ps(100.0, s);
            if h > region1::h_pt(100.0, t) {
                return Err(SteamError::OutOfRange(format!(
                    "h={h} kJ/kg above the 100 MPa isobar at s={s}"
                )));
            }
            return Ok(Region::One);
        }
        if h < boundary::hb13_s(s) {
            return Ok(Region::One);
        }
        let t = region3::t_ps(100.0, s);
        let v = region3::v_ps(100.0, s);
        if h > region3::h_rho_t(1.0 / v, t) {
            return Err(SteamError::OutOfRange(format!(
                "h={h} kJ/kg above the 100 MPa isobar at s={s}"
            )));
        }
        return Ok(Region::Three);
    }
    if s <= region3::S_CRIT {
        if h < region4::hsat_s(s)? {
            return Ok(Region::Four);
        }
        let t = region3::t_ps(100.0, s);
        let v = region3::v_ps(100.0, s);
        if h > region3::h_rho_t(1.0 / v, t) {
            return Err(SteamError::OutOfRange(format!(
                "h={h} kJ/kg above the 100 MPa isobar at s={s}"
            )));
        }
        return Ok(Region::Three);
    }
    if s <= 5.260_578_707 {
        if h < region4::hsat_s(s)? {
            return Ok(Region::Four);
        }
        if s < 5.048_096_828 {
            let t = region3::t_ps(100.0, s);
            let v = region3::v_ps(100.0, s);
            if h > region3::h_rho_t(1.0 / v, t) {
                return Err(SteamError::OutOfRange(format!(
                    "h={h} kJ/kg above the 100 MPa isobar at s={s}"
                )));
            }
            return Ok(Region::Three);
        }
        // The narrow wedge around the B23 line in (h, s).
        if h > 2_812.942_061 {
            if s > 5.097_965_733_971_25 {
                let t = region2::t_ps(100.0, s);
                if h <= region2::h_pt(100.0, t) {
                    return Ok(Region::Two);
                }
            }
            return Err(SteamError::OutOfRange(format!(
                "h={h} kJ/kg above the 100 MPa isobar at s={s}"
            )));
        }
        if h < 2_563.592_004 {
            return Ok(Region::Three);
        }
        // Resolve the state's own backward (p, T) and test it against
        // the B23 curve.
        let p = region2::p_hs(h, s);
        if p > boundary::b23_p_t(region2::t_ph(p, h)) {
            return Ok(Region::Three);
        }
        return Ok(Region::Two);
    }
    if s <= 9.155_759_395 {
        if h < region4::hsat_s(s)? {
            return Ok(Region::Four);
        }
        let t = region2::t_ps(100.0, s);
        if h > region2::h_pt(100.0, t) {
            return Err(SteamError::OutOfRange(format!(
                "h={h} kJ/kg above the 100 MPa isobar at s={s}"
            )));
        }
        return Ok(Region::Two);
    }
    // Low-pressure vapor past the end of the saturation dome. Probe a
    // region-2 pressure and verify it lands inside the region.
    let p = region2::p_hs(h, s);
    if p.is_finite() && p >= P_MIN && p <= P_MAX {
        let t = region2::t_ph(p, h);
        if t > T_MIN && t <= T_25 {
            return Ok(Region::Two);
        }
    }
    Err(SteamError::OutOfRange(format!(
        "h={h} kJ/kg, s={s} kJ/(kg K) outside every region"
    )))
}

/// Classify a (pressure, density) state.
pub fn region_prho(p: f64, rho: f64) -> Result<Region> {
    if !p.is_finite() || !rho.is_finite() || p < P_MIN || p > P_MAX || rho <= 0.0 {
        return Err(SteamError::OutOfRange(format!(
            "p={p} MPa, rho={rho} kg/m3 outside the valid range"
        )));
    }
    let v = 1.0 / rho;
    if v < region1::v_pt(p, T_MIN) {
        return Err(SteamError::OutOfRange(format!(
            "rho={rho} kg/m3 denser than the 273.15 K liquid at p={p} MPa"
        )));
    }
    if p < P_13 {
        let ts = region4::tsat_p(p)?;
        if v <= region1::v_pt(p, ts) {
            return Ok(Region::One);
        }
        if v < region2::v_pt(p, ts) {
            return Ok(Region::Four);
        }
        if v <= region2::v_pt(p, T_25) {
            return Ok(Region::Two);
        }
        if p <= P5_MAX && v <= region5::v_pt(p, T_MAX) {
            return Ok(Region::Five);
        }
        return Err(SteamError::OutOfRange(format!(
            "rho={rho} kg/m3 below the valid range at p={p} MPa"
        )));
    }
    if v < region1::v_pt(p, T_13) {
        return Ok(Region::One);
    }
    if v < region2::v_pt(p, boundary::b23_t_p(p)) {
        if p > crate::if97::P_CRIT {
            return Ok(Region::Three);
        }
        let v_liq = region3::v_ph(p, region4::h_liq_p(p)?);
        let v_vap = region3::v_ph(p, region4::h_vap_p(p)?);
        if v < v_liq || v > v_vap {
            return Ok(Region::Three);
        }
        return Ok(Region::Four);
    }
    if v <= region2::v_pt(p, T_25) {
        return Ok(Region::Two);
    }
    Err(SteamError::OutOfRange(format!(
        "rho={rho} kg/m3 below the valid range at p={p} MPa"
    )))
}
