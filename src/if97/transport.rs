//! Transport properties: dynamic viscosity (IAPS formulation 1985),
//! thermal conductivity (IAPS 1985) and surface tension (IAPWS 1994).
//!
//! These correlations take the equilibrium density as an input, so
//! the caller resolves the state first and passes (p, T, ρ) here.

use crate::error::{Result, SteamError};
use crate::if97::T_CRIT;

const H0: [f64; 6] = [0.513_204_7, 0.320_565_6, 0.0, 0.0, -0.778_256_7, 0.188_544_7];
const H1: [f64; 6] = [0.215_177_8, 0.731_788_3, 1.241_044, 1.476_783, 0.0, 0.0];
const H2: [f64; 6] = [-0.281_810_7, -1.070_786, -1.263_184, 0.0, 0.0, 0.0];
const H3: [f64; 6] = [0.177_806_4, 0.460_504, 0.234_037_9, -0.492_417_9, 0.0, 0.0];
const H4: [f64; 6] = [-0.041_766_1, 0.0, 0.0, 0.160_043_5, 0.0, 0.0];
const H5: [f64; 6] = [0.0, -0.015_783_86, 0.0, 0.0, 0.0, 0.0];
const H6: [f64; 6] = [0.0, 0.0, 0.0, -0.003_629_481, 0.0, 0.0];

/// Dynamic viscosity, Pa·s.
///
/// Valid up to 500 MPa with a temperature ceiling that tightens as
/// pressure grows; outside that window the correlation has no
/// standing and an error is returned.
pub fn viscosity(p: f64, t: f64, rho: f64) -> Result<f64> {
    if t > 1173.15 || (t > 873.15 && p > 300.0) || (t > 423.15 && p > 350.0) || p > 500.0 {
        return Err(SteamError::OutOfRange(format!(
            "viscosity undefined at p={p} MPa, T={t} K"
        )));
    }
    let ts = t / 647.226;
    let rhos = rho / 317.763;
    let mu0 =
        ts.sqrt() / (1.0 + 0.978_197 / ts + 0.579_829 / (ts * ts) - 0.202_354 / (ts * ts * ts));
    let a = 1.0 / ts - 1.0;
    let dr = rhos - 1.0;
    let mut sum = 0.0;
    for i in 0..6 {
        let ai = a.powi(i as i32);
        sum += H0[i] * ai;
        sum += H1[i] * ai * dr;
        sum += H2[i] * ai * dr.powi(2);
        sum += H3[i] * ai * dr.powi(3);
        sum += H4[i] * ai * dr.powi(4);
        sum += H5[i] * ai * dr.powi(5);
        sum += H6[i] * ai * dr.powi(6);
    }
    let mu1 = (rhos * sum).exp();
    Ok(mu0 * mu1 * 5.507_1e-5)
}

/// Thermal conductivity, W/(m·K).
pub fn thermal_conductivity(p: f64, t: f64, rho: f64) -> Result<f64> {
    if t < 273.15 {
        return Err(SteamError::OutOfRange(format!(
            "conductivity undefined below 273.15 K (T={t})"
        )));
    }
    let p_max = if t < 773.15 {
        100.0
    } else if t <= 923.15 {
        70.0
    } else {
        40.0
    };
    if p > p_max {
        return Err(SteamError::OutOfRange(format!(
            "conductivity undefined at p={p} MPa, T={t} K"
        )));
    }
    let tr = t / 647.26;
    let rho_r = rho / 317.7;
    let tc0 = tr.sqrt()
        * (0.010_281_1 + 0.029_962_1 * tr + 0.015_614_6 * tr * tr - 0.004_224_64 * tr * tr * tr);
    let tc1 =
        -0.397_07 + 0.400_302 * rho_r + 1.06 * (-0.171_587 * (rho_r + 2.392_19).powi(2)).exp();
    let dt = (tr - 1.0).abs() + 0.003_089_76;
    let q = 2.0 + 0.082_299_4 / dt.powf(0.6);
    let s = if tr >= 1.0 {
        1.0 / dt
    } else {
        10.093_2 / dt.powf(0.6)
    };
    let tc2 = (0.070_130_9 / tr.powi(10) + 0.011_852)
        * rho_r.powf(1.8)
        * (0.642_857 * (1.0 - rho_r.powf(2.8))).exp()
        + 0.001_699_37 * s * rho_r.powf(q) * ((q / (1.0 + q)) * (1.0 - rho_r.powf(1.0 + q))).exp()
        - 1.02 * (-4.117_17 * tr.powf(1.5) - 6.179_37 / rho_r.powi(5)).exp();
    Ok(tc0 + tc1 + tc2)
}

/// Surface tension of the liquid-vapor interface, N/m.
pub fn surface_tension(t: f64) -> Result<f64> {
    if !(273.16..=T_CRIT).contains(&t) {
        return Err(SteamError::OutOfRange(format!(
            "surface tension undefined at T={t} K"
        )));
    }
    let tau = 1.0 - t / T_CRIT;
    Ok(0.2358 * tau.powf(1.256) * (1.0 - 0.625 * tau))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::if97::{region1, region2};

    #[test]
    fn liquid_viscosity_at_ambient() {
        let rho = 1.0 / region1::v_pt(0.1, 293.15);
        let mu = viscosity(0.1, 293.15, rho).unwrap();
        // Water at 20 C is close to 1.0 mPa s.
        assert!((mu - 1.0e-3).abs() < 0.05e-3, "mu {mu}");
    }

    #[test]
    fn vapor_viscosity_at_low_pressure() {
        let rho = 1.0 / region2::v_pt(0.1, 400.0);
        let mu = viscosity(0.1, 400.0, rho).unwrap();
        assert!(mu > 1.0e-5 && mu < 2.0e-5, "mu {mu}");
    }

    #[test]
    fn viscosity_rejects_out_of_window_states() {
        assert!(viscosity(400.0, 500.0, 1000.0).is_err());
        assert!(viscosity(10.0, 1200.0, 20.0).is_err());
    }

    #[test]
    fn liquid_conductivity_at_ambient() {
        let rho = 1.0 / region1::v_pt(0.1, 293.15);
        let tc = thermal_conductivity(0.1, 293.15, rho).unwrap();
        assert!((tc - 0.60).abs() < 0.03, "tc {tc}");
    }

    #[test]
    fn surface_tension_reference() {
        // IAPWS 1994 table value at 300 K: 71.69 mN/m.
        let st = surface_tension(300.0).unwrap();
        assert!((st - 0.071_69).abs() < 1e-4, "st {st}");
        assert!(surface_tension(700.0).is_err());
    }
}
