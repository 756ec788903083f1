//! Region 1: compressed liquid, 273.15 K ≤ T ≤ 623.15 K, psat(T) ≤ p ≤ 100 MPa.
//!
//! Forward properties come from the dimensionless Gibbs free energy
//! γ(π, τ) (IF97 eq. 7, 34 terms); the backward equations T(p,h),
//! T(p,s) and p(h,s) are the published correlations.

use crate::error::Result;
use crate::if97::{R, T_MIN, region4, solve};

const I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 8, 8, 21, 23, 29,
    30, 31, 32,
];
const J: [i32; 34] = [
    -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0, 6, -5, -2, 10, -8, -11,
    -6, -29, -31, -38, -39, -40, -41,
];
const N: [f64; 34] = [
    0.146_329_712_131_67,
    -0.845_481_871_691_14,
    -3.756_360_367_204,
    3.385_516_916_838_5,
    -0.957_919_633_878_72,
    0.157_720_385_132_28,
    -0.016_616_417_199_501,
    8.121_462_998_356_8e-4,
    2.831_908_012_380_4e-4,
    -6.070_630_156_587_4e-4,
    -0.018_990_068_218_419,
    -0.032_529_748_770_505,
    -0.021_841_717_175_414,
    -5.283_835_796_993e-5,
    -4.718_432_107_326_7e-4,
    -3.000_178_079_302_6e-4,
    4.766_139_390_698_7e-5,
    -4.414_184_533_084_6e-6,
    -7.269_499_629_759_4e-16,
    -3.167_964_484_505_4e-5,
    -2.827_079_798_531_2e-6,
    -8.520_512_812_010_3e-10,
    -2.242_528_190_8e-6,
    -6.517_122_289_560_1e-7,
    -1.434_172_993_792_4e-13,
    -4.051_699_686_011_7e-7,
    -1.273_430_174_164_1e-9,
    -1.742_487_123_063_4e-10,
    -6.876_213_129_553_1e-19,
    1.447_830_782_852_1e-20,
    2.633_578_166_279_5e-23,
    -1.194_762_264_007_1e-23,
    1.822_809_458_140_4e-24,
    -9.353_708_729_245_8e-26,
];

/// γ and the derivatives needed by every region-1 property.
struct Gibbs {
    pi: f64,
    tau: f64,
    g: f64,
    g_p: f64,
    g_pp: f64,
    g_pt: f64,
    g_t: f64,
    g_tt: f64,
}

fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p / 16.53;
    let tau = 1386.0 / t;
    let mut d = Gibbs { pi, tau, g: 0.0, g_p: 0.0, g_pp: 0.0, g_pt: 0.0, g_t: 0.0, g_tt: 0.0 };
    for k in 0..34 {
        let (i, j, n) = (I[k], J[k], N[k]);
        let a = (7.1 - pi).powi(i);
        let b = (tau - 1.222).powi(j);
        d.g += n * a * b;
        d.g_p -= n * f64::from(i) * (7.1 - pi).powi(i - 1) * b;
        d.g_pp += n * f64::from(i) * f64::from(i - 1) * (7.1 - pi).powi(i - 2) * b;
        d.g_t += n * a * f64::from(j) * (tau - 1.222).powi(j - 1);
        d.g_pt -= n * f64::from(i) * (7.1 - pi).powi(i - 1) * f64::from(j)
            * (tau - 1.222).powi(j - 1);
        d.g_tt += n * a * f64::from(j) * f64::from(j - 1) * (tau - 1.222).powi(j - 2);
    }
    d
}

// ── Forward properties from (p, T) ──────────────────────────────────

/// Specific volume, m³/kg.
pub fn v_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t / p * d.pi * d.g_p / 1000.0
}

/// Specific enthalpy, kJ/kg.
pub fn h_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t * d.tau * d.g_t
}

/// Specific internal energy, kJ/kg.
pub fn u_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t * (d.tau * d.g_t - d.pi * d.g_p)
}

/// Specific entropy, kJ/(kg·K).
pub fn s_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * (d.tau * d.g_t - d.g)
}

/// Isobaric heat capacity, kJ/(kg·K).
pub fn cp_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    -R * d.tau * d.tau * d.g_tt
}

/// Isochoric heat capacity, kJ/(kg·K).
pub fn cv_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * (-d.tau * d.tau * d.g_tt + (d.g_p - d.tau * d.g_pt).powi(2) / d.g_pp)
}

/// Speed of sound, m/s.
pub fn w_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    let denom =
        (d.g_p - d.tau * d.g_pt).powi(2) / (d.tau * d.tau * d.g_tt) - d.g_pp;
    (1000.0 * R * t * d.g_p * d.g_p / denom).sqrt()
}

// ── Backward equations ──────────────────────────────────────────────

const TPH_I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6];
const TPH_J: [i32; 20] = [
    0, 1, 2, 6, 22, 32, 0, 1, 2, 3, 4, 10, 32, 10, 32, 10, 32, 32, 32, 32,
];
const TPH_N: [f64; 20] = [
    -238.724_899_245_21,
    404.211_886_379_45,
    113.497_468_817_18,
    -5.845_761_604_803_9,
    -1.528_548_241_314e-4,
    -1.086_670_769_537_7e-6,
    -13.391_744_872_602,
    43.211_039_183_559,
    -54.010_067_170_506,
    30.535_892_203_916,
    -6.596_474_942_363_8,
    9.396_540_087_836_3e-3,
    1.157_364_750_534e-7,
    -2.585_864_128_207_3e-5,
    -4.064_436_308_479_9e-9,
    6.645_618_619_163_5e-8,
    8.067_073_410_302_7e-11,
    -9.347_777_121_394_7e-13,
    5.826_544_202_060_1e-15,
    -1.502_018_595_350_3e-17,
];

/// Backward temperature T(p, h), K.
pub fn t_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2500.0;
    let mut t = 0.0;
    for k in 0..20 {
        t += TPH_N[k] * p.powi(TPH_I[k]) * (eta + 1.0).powi(TPH_J[k]);
    }
    t
}

const TPS_I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4];
const TPS_J: [i32; 20] = [
    0, 1, 2, 3, 11, 31, 0, 1, 2, 3, 12, 31, 0, 1, 2, 9, 31, 10, 32, 32,
];
const TPS_N: [f64; 20] = [
    174.782_680_583_07,
    34.806_930_892_873,
    6.529_258_497_845_5,
    0.330_399_817_754_89,
    -1.928_138_292_319_6e-7,
    -2.490_919_724_457_3e-23,
    -0.261_076_364_893_32,
    0.225_929_659_815_86,
    -0.064_256_463_395_226,
    7.887_628_927_052_6e-3,
    3.567_211_060_736_6e-10,
    1.733_249_699_489_5e-24,
    5.660_890_065_483_7e-4,
    -3.263_548_313_971_7e-4,
    4.477_828_669_063_2e-5,
    -5.132_215_690_850_7e-10,
    -4.252_265_704_220_7e-26,
    2.640_044_136_068_9e-13,
    7.812_460_045_972_3e-29,
    -3.073_219_990_366_8e-31,
];

/// Backward temperature T(p, s), K.
pub fn t_ps(p: f64, s: f64) -> f64 {
    let mut t = 0.0;
    for k in 0..20 {
        t += TPS_N[k] * p.powi(TPS_I[k]) * (s + 2.0).powi(TPS_J[k]);
    }
    t
}

const PHS_I: [i32; 19] = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 4, 4, 5];
const PHS_J: [i32; 19] = [0, 1, 2, 4, 5, 6, 8, 14, 0, 1, 4, 6, 0, 1, 10, 4, 1, 4, 0];
const PHS_N: [f64; 19] = [
    -0.691_997_014_660_582,
    -18.361_254_878_756,
    -9.283_324_092_973_35,
    65.963_956_990_990_6,
    -16.206_038_891_202_4,
    450.620_017_338_667,
    854.680_678_224_17,
    6_075.232_140_011_62,
    32.648_768_262_185_6,
    -26.940_884_458_293_1,
    -319.947_848_334_3,
    -928.354_307_043_32,
    30.363_453_745_524_9,
    -65.054_042_244_414_6,
    -4_309.913_165_161_3,
    -747.512_324_096_068,
    730.000_345_529_245,
    1_142.840_325_690_21,
    -436.407_041_874_559,
];

/// Backward pressure p(h, s), MPa.
pub fn p_hs(h: f64, s: f64) -> f64 {
    let eta = h / 3400.0;
    let sigma = s / 7.6;
    let mut p = 0.0;
    for k in 0..19 {
        p += PHS_N[k] * (eta + 0.05).powi(PHS_I[k]) * (sigma + 0.05).powi(PHS_J[k]);
    }
    p * 100.0
}

/// Temperature from (p, ρ) by bisection on the forward density.
///
/// Density decreases with temperature along an isobar, so the bracket
/// up to the saturation curve (or 623.15 K above 16.5292 MPa) is
/// searched with the decreasing-function solver.
pub fn t_prho(p: f64, rho: f64) -> Result<f64> {
    let hi = if p < crate::if97::P_13 {
        region4::tsat_p(p)?
    } else {
        crate::if97::T_13
    };
    solve::bisect_decreasing(
        |t| Ok(1.0 / v_pt(p, t)),
        T_MIN,
        hi,
        rho,
        1e-5,
        0.0,
        200,
        "region1::t_prho",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(got: f64, want: f64, tol: f64) {
        assert!(
            ((got - want) / want).abs() < tol,
            "got {got}, want {want}"
        );
    }

    // IF97 release, Table 5.
    #[test]
    fn forward_reference_points() {
        assert_rel(v_pt(3.0, 300.0), 0.100_215_168e-2, 1e-8);
        assert_rel(h_pt(3.0, 300.0), 0.115_331_273e3, 1e-8);
        assert_rel(u_pt(3.0, 300.0), 0.112_324_818e3, 1e-8);
        assert_rel(s_pt(3.0, 300.0), 0.392_294_792, 1e-8);
        assert_rel(cp_pt(3.0, 300.0), 0.417_301_218e1, 1e-8);
        assert_rel(w_pt(3.0, 300.0), 0.150_773_921e4, 1e-8);

        assert_rel(v_pt(80.0, 300.0), 0.971_180_894e-3, 1e-8);
        assert_rel(h_pt(80.0, 300.0), 0.184_142_828e3, 1e-8);
        assert_rel(s_pt(80.0, 300.0), 0.368_563_852, 1e-8);

        assert_rel(v_pt(3.0, 500.0), 0.120_241_800e-2, 1e-8);
        assert_rel(h_pt(3.0, 500.0), 0.975_542_239e3, 1e-8);
        assert_rel(cp_pt(3.0, 500.0), 0.465_580_682e1, 1e-8);
    }

    // IF97 release, Table 7.
    #[test]
    fn backward_t_ph() {
        assert_rel(t_ph(3.0, 500.0), 0.391_798_509e3, 1e-8);
        assert_rel(t_ph(80.0, 500.0), 0.378_108_626e3, 1e-8);
        assert_rel(t_ph(80.0, 1500.0), 0.611_041_229e3, 1e-8);
    }

    // IF97 release, Table 9.
    #[test]
    fn backward_t_ps() {
        assert_rel(t_ps(3.0, 0.5), 0.307_842_258e3, 1e-8);
        assert_rel(t_ps(80.0, 0.5), 0.309_979_785e3, 1e-8);
        assert_rel(t_ps(80.0, 3.0), 0.565_899_909e3, 1e-8);
    }

    // Supplementary release p(h,s), Table 3.
    #[test]
    fn backward_p_hs() {
        assert_rel(p_hs(0.001, 0.0), 9.800_980_612e-4, 1e-8);
        assert_rel(p_hs(90.0, 0.0), 9.192_954_727e1, 1e-8);
        assert_rel(p_hs(1500.0, 3.4), 5.868_294_423e1, 1e-8);
    }

    #[test]
    fn density_inversion_round_trip() {
        let p = 10.0;
        let t = 400.0;
        let rho = 1.0 / v_pt(p, t);
        let t_back = t_prho(p, rho).unwrap();
        assert!((t_back - t).abs() < 1e-3, "got {t_back}");
    }
}
