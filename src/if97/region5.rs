//! Region 5: high-temperature steam, 1073.15 K to 2273.15 K, up to
//! 10 MPa. No backward equations exist here, so T(p,h), T(p,s) and
//! T(p,ρ) are bisection inversions of the forward equations.

use crate::error::Result;
use crate::if97::{R, T_25, T_MAX, solve};

const J0: [i32; 6] = [0, 1, -3, -2, -1, 2];
const N0: [f64; 6] = [
    -13.179_983_674_201,
    6.854_084_163_443_4,
    -0.024_805_148_933_466,
    0.369_015_349_803_33,
    -3.116_131_821_392_5,
    -0.329_616_265_389_17,
];
const IR: [i32; 5] = [1, 1, 1, 2, 3];
const JR: [i32; 5] = [0, 1, 3, 9, 3];
const NR: [f64; 5] = [
    -1.256_318_358_959_2e-4,
    2.177_467_871_457_1e-3,
    -0.004_594_282_089_991,
    -3.972_482_835_956_9e-6,
    1.291_922_828_978_4e-7,
];

struct Gibbs {
    pi: f64,
    tau: f64,
    g0: f64,
    g0_t: f64,
    g0_tt: f64,
    gr: f64,
    gr_p: f64,
    gr_pp: f64,
    gr_pt: f64,
    gr_t: f64,
    gr_tt: f64,
}

fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = 1000.0 / t;
    let mut d = Gibbs {
        pi,
        tau,
        g0: pi.ln(),
        g0_t: 0.0,
        g0_tt: 0.0,
        gr: 0.0,
        gr_p: 0.0,
        gr_pp: 0.0,
        gr_pt: 0.0,
        gr_t: 0.0,
        gr_tt: 0.0,
    };
    for k in 0..6 {
        let (j, n) = (J0[k], N0[k]);
        d.g0 += n * tau.powi(j);
        d.g0_t += n * f64::from(j) * tau.powi(j - 1);
        d.g0_tt += n * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }
    for k in 0..5 {
        let (i, j, n) = (IR[k], JR[k], NR[k]);
        let a = pi.powi(i);
        let b = tau.powi(j);
        d.gr += n * a * b;
        d.gr_p += n * f64::from(i) * pi.powi(i - 1) * b;
        d.gr_pp += n * f64::from(i) * f64::from(i - 1) * pi.powi(i - 2) * b;
        d.gr_t += n * a * f64::from(j) * tau.powi(j - 1);
        d.gr_pt += n * f64::from(i) * pi.powi(i - 1) * f64::from(j) * tau.powi(j - 1);
        d.gr_tt += n * a * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }
    d
}

/// Specific volume, m³/kg.
pub fn v_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t / p * d.pi * (1.0 / d.pi + d.gr_p) / 1000.0
}

/// Specific enthalpy, kJ/kg.
pub fn h_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t * d.tau * (d.g0_t + d.gr_t)
}

/// Specific internal energy, kJ/kg.
pub fn u_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t * (d.tau * (d.g0_t + d.gr_t) - d.pi * (1.0 / d.pi + d.gr_p))
}

/// Specific entropy, kJ/(kg·K).
pub fn s_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * (d.tau * (d.g0_t + d.gr_t) - (d.g0 + d.gr))
}

/// Isobaric heat capacity, kJ/(kg·K).
pub fn cp_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    -R * d.tau * d.tau * (d.g0_tt + d.gr_tt)
}

/// Isochoric heat capacity, kJ/(kg·K).
pub fn cv_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * (-d.tau * d.tau * (d.g0_tt + d.gr_tt)
        - (1.0 + d.pi * d.gr_p - d.tau * d.pi * d.gr_pt).powi(2)
            / (1.0 - d.pi * d.pi * d.gr_pp))
}

/// Speed of sound, m/s.
pub fn w_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    let num = 1.0 + 2.0 * d.pi * d.gr_p + d.pi * d.pi * d.gr_p * d.gr_p;
    let denom = (1.0 - d.pi * d.pi * d.gr_pp)
        + (1.0 + d.pi * d.gr_p - d.tau * d.pi * d.gr_pt).powi(2)
            / (d.tau * d.tau * (d.g0_tt + d.gr_tt));
    (1000.0 * R * t * num / denom).sqrt()
}

/// Temperature from (p, h) by bisection.
pub fn t_ph(p: f64, h: f64) -> Result<f64> {
    solve::bisect(
        |t| Ok(h_pt(p, t)),
        T_25,
        T_MAX,
        h,
        1e-5,
        0.0,
        100,
        "region5::t_ph",
    )
}

/// Temperature from (p, s) by bisection.
pub fn t_ps(p: f64, s: f64) -> Result<f64> {
    solve::bisect(
        |t| Ok(s_pt(p, t)),
        T_25,
        T_MAX,
        s,
        1e-8,
        0.0,
        100,
        "region5::t_ps",
    )
}

/// Temperature from (p, ρ) by bisection on the forward density.
pub fn t_prho(p: f64, rho: f64) -> Result<f64> {
    solve::bisect_decreasing(
        |t| Ok(1.0 / v_pt(p, t)),
        T_25,
        T_MAX,
        rho,
        1e-9,
        0.0,
        100,
        "region5::t_prho",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(got: f64, want: f64, tol: f64) {
        assert!(((got - want) / want).abs() < tol, "got {got}, want {want}");
    }

    #[test]
    fn forward_reference_points() {
        assert_rel(v_pt(0.5, 1500.0), 1.384_55, 1e-5);
        assert_rel(h_pt(0.5, 1500.0), 5_219.76, 1e-5);
        assert_rel(s_pt(0.5, 1500.0), 9.654_08, 1e-5);
        assert_rel(cp_pt(0.5, 1500.0), 2.616_10, 1e-4);
        assert_rel(w_pt(0.5, 1500.0), 917.07, 1e-4);

        // Enthalpy keeps rising with temperature along an isobar.
        assert!(h_pt(8.0, 2000.0) > h_pt(8.0, 1500.0));
    }

    #[test]
    fn inversion_round_trips() {
        let p = 5.0;
        let t = 1800.0;
        let h = h_pt(p, t);
        let s = s_pt(p, t);
        let rho = 1.0 / v_pt(p, t);
        assert!((t_ph(p, h).unwrap() - t).abs() < 1e-3);
        assert!((t_ps(p, s).unwrap() - t).abs() < 1e-3);
        assert!((t_prho(p, rho).unwrap() - t).abs() < 1e-3);
    }
}
