//! Region 4: the saturation curve and two-phase helpers.
//!
//! Below 16.529 MPa the saturated phase properties come straight from
//! the region-1/region-2 forward equations at Tsat(p); above, the dome
//! belongs to region 3 and the phase states are recovered through the
//! region-3 backward equations and the p3sat(h) curve.

use crate::error::{Result, SteamError};
use crate::if97::{H_CRIT, P_CRIT, P_MIN, T_CRIT, T_MIN, boundary, region1, region2, region3, solve};

/// Pressures below this use the region-1/2 forward equations for the
/// saturated phases; above, the region-3 machinery.
const P_DOME_3: f64 = 16.529;

// ── Saturation curve, IF97 eqs. 30/31 ───────────────────────────────

/// Saturation pressure psat(T), MPa.  Valid 273.15 K ≤ T ≤ 647.096 K.
pub fn psat_t(t: f64) -> Result<f64> {
    if !(T_MIN..=T_CRIT).contains(&t) {
        return Err(SteamError::OutOfRange(format!(
            "T = {t} K outside the saturation curve (273.15..647.096 K)"
        )));
    }
    let teta = t - 0.238_555_575_678_49 / (t - 650.175_348_447_98);
    let a = teta * teta + 1_167.052_145_276_7 * teta - 724_213.167_032_06;
    let b = -17.073_846_940_092 * teta * teta + 12_020.824_702_47 * teta - 3_232_555.032_233_3;
    let c = 14.915_108_613_53 * teta * teta - 4_823.265_736_159_1 * teta + 405_113.405_420_57;
    Ok((2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4))
}

/// Saturation temperature Tsat(p), K.  Valid 0.000611657 ≤ p ≤ 22.06395 MPa.
pub fn tsat_p(p: f64) -> Result<f64> {
    if !(P_MIN..=P_CRIT).contains(&p) {
        return Err(SteamError::OutOfRange(format!(
            "p = {p} MPa outside the saturation curve (0.000611657..22.06395 MPa)"
        )));
    }
    let beta = p.powf(0.25);
    let e = beta * beta - 17.073_846_940_092 * beta + 14.915_108_613_53;
    let f = 1_167.052_145_276_7 * beta * beta + 12_020.824_702_47 * beta - 4_823.265_736_159_1;
    let g = -724_213.167_032_06 * beta * beta - 3_232_555.032_233_3 * beta + 405_113.405_420_57;
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    let k = 650.175_348_447_98;
    Ok((k + d - ((k + d) * (k + d) - 4.0 * (-0.238_555_575_678_49 + k * d)).sqrt()) / 2.0)
}

// ── Saturated phase properties ──────────────────────────────────────

/// Saturated liquid enthalpy h′(p), kJ/kg.
///
/// Above 16.529 MPa the dome lies in region 3 and h′ is found by a
/// bracket-clamped Newton iteration on `p3sat_h(h) = p`.
pub fn h_liq_p(p: f64) -> Result<f64> {
    let ts = tsat_p(p)?;
    if p < P_DOME_3 {
        return Ok(region1::h_pt(p, ts));
    }
    solve::newton(
        |h| Ok(boundary::p3sat_h(h)),
        0.5 * (1_670.858_218 + H_CRIT),
        1_670.858_218,
        H_CRIT,
        p,
        1e-6,
        100,
        "region4::h_liq_p",
    )
}

/// Saturated vapor enthalpy h″(p), kJ/kg.
pub fn h_vap_p(p: f64) -> Result<f64> {
    let ts = tsat_p(p)?;
    if p < P_DOME_3 {
        return Ok(region2::h_pt(p, ts));
    }
    solve::newton(
        |h| Ok(boundary::p3sat_h(h)),
        0.5 * (H_CRIT + 2_563.592_004),
        H_CRIT,
        2_563.592_004 + 5.0,
        p,
        1e-6,
        100,
        "region4::h_vap_p",
    )
}

/// Saturated liquid specific volume v′(p), m³/kg.
pub fn v_liq_p(p: f64) -> Result<f64> {
    let ts = tsat_p(p)?;
    if p < P_DOME_3 {
        Ok(region1::v_pt(p, ts))
    } else {
        Ok(region3::v_ph(p, h_liq_p(p)?))
    }
}

/// Saturated vapor specific volume v″(p), m³/kg.
pub fn v_vap_p(p: f64) -> Result<f64> {
    let ts = tsat_p(p)?;
    if p < P_DOME_3 {
        Ok(region2::v_pt(p, ts))
    } else {
        Ok(region3::v_ph(p, h_vap_p(p)?))
    }
}

/// Saturated liquid entropy s′(p), kJ/(kg·K).
pub fn s_liq_p(p: f64) -> Result<f64> {
    let ts = tsat_p(p)?;
    if p < P_DOME_3 {
        Ok(region1::s_pt(p, ts))
    } else {
        let rho = 1.0 / region3::v_ph(p, h_liq_p(p)?);
        Ok(region3::s_rho_t(rho, ts))
    }
}

/// Saturated vapor entropy s″(p), kJ/(kg·K).
pub fn s_vap_p(p: f64) -> Result<f64> {
    let ts = tsat_p(p)?;
    if p < P_DOME_3 {
        Ok(region2::s_pt(p, ts))
    } else {
        let rho = 1.0 / region3::v_ph(p, h_vap_p(p)?);
        Ok(region3::s_rho_t(rho, ts))
    }
}

// ── Vapor quality ───────────────────────────────────────────────────

/// Vapor quality from (p, h), clamped to [0, 1].
pub fn quality_ph(p: f64, h: f64) -> Result<f64> {
    let hl = h_liq_p(p)?;
    let hv = h_vap_p(p)?;
    if h > hv {
        Ok(1.0)
    } else if h < hl {
        Ok(0.0)
    } else {
        Ok((h - hl) / (hv - hl))
    }
}

/// Vapor quality from (p, s), clamped to [0, 1].
pub fn quality_ps(p: f64, s: f64) -> Result<f64> {
    let sl = s_liq_p(p)?;
    let sv = s_vap_p(p)?;
    if s < sl {
        Ok(0.0)
    } else if s > sv {
        Ok(1.0)
    } else {
        Ok((s - sl) / (sv - sl))
    }
}

// ── Saturation enthalpy from entropy ────────────────────────────────

const H3AS_I: [i32; 19] = [0, 0, 0, 0, 2, 3, 4, 4, 5, 5, 6, 7, 7, 7, 10, 10, 10, 32, 32];
const H3AS_J: [i32; 19] = [1, 4, 10, 16, 1, 36, 3, 16, 20, 36, 4, 2, 28, 32, 14, 32, 36, 0, 6];
const H3AS_N: [f64; 19] = [
    0.822_673_364_673_336,
    0.181_977_213_534_479,
    -0.011_200_026_031_362_4,
    -7.467_782_870_480_33e-4,
    -0.179_046_263_257_381,
    0.042_422_011_083_665_7,
    -0.341_355_823_438_768,
    -2.098_817_408_535_65,
    -8.224_773_433_235_96,
    -4.996_840_820_760_08,
    0.191_413_958_471_069,
    0.058_106_224_109_313_6,
    -1_655.054_987_010_29,
    1_588.704_434_212_01,
    -85.062_353_517_281_8,
    -31_771.438_651_120_7,
    -94_589.040_663_287_1,
    -1.392_738_470_886_9e-6,
    0.631_052_532_240_98,
];

const HV2C3BS_I: [i32; 16] = [0, 0, 0, 1, 1, 5, 6, 7, 8, 8, 12, 16, 22, 22, 24, 36];
const HV2C3BS_J: [i32; 16] = [0, 3, 4, 0, 12, 36, 12, 16, 2, 20, 32, 36, 2, 32, 7, 20];
const HV2C3BS_N: [f64; 16] = [
    1.043_512_807_327_69,
    -2.278_079_127_085_13,
    1.805_352_567_232_02,
    0.420_440_834_792_042,
    -105_721.244_834_66,
    4.369_116_074_938_84e24,
    -328_032_702_839.753,
    -6.786_867_608_042_7e15,
    7_439.574_646_453_63,
    -3.568_964_453_557_61e19,
    1.675_905_851_868_01e31,
    -3.550_286_254_191_05e37,
    396_611_982_166.538,
    -4.147_162_684_844_68e40,
    3.590_801_038_673_82e18,
    -1.169_943_348_519_95e40,
];

const HV2ABS_I: [i32; 30] = [
    1, 1, 2, 2, 4, 4, 7, 8, 8, 10, 12, 12, 18, 20, 24, 28, 28, 28, 28, 28, 32, 32, 32, 32, 32, 36,
    36, 36, 36, 36,
];
const HV2ABS_J: [i32; 30] = [
    8, 24, 4, 32, 1, 2, 7, 5, 12, 1, 0, 7, 10, 12, 32, 8, 12, 20, 22, 24, 2, 7, 12, 14, 24, 10,
    12, 20, 22, 28,
];
const HV2ABS_N: [f64; 30] = [
    -524.581_170_928_788,
    -9_269_472.181_422_18,
    -237.385_107_491_666,
    21_077_015_581.277_6,
    -23.949_456_201_098_6,
    221.802_480_294_197,
    -5_104_725.333_934_38,
    1_249_813.961_091_47,
    2_000_084_369.962_01,
    -815.158_509_791_035,
    -157.612_685_637_523,
    -11_420_042_233.279_1,
    6.623_646_807_768_72e15,
    -2.276_228_182_961_44e18,
    -1.710_480_813_484_06e31,
    6.607_887_669_380_91e15,
    1.663_200_558_860_21e22,
    -2.180_037_843_815_01e29,
    -7.872_761_402_956_18e29,
    1.510_623_297_003_46e41,
    7_957_321.703_005_41,
    1.319_576_473_553_47e15,
    -3.250_970_682_991_4e23,
    -4.186_006_114_192_48e25,
    2.974_789_065_574_67e34,
    -9.535_887_617_454_73e19,
    1.669_576_996_209_39e24,
    -1.754_077_648_699_78e32,
    3.475_814_906_263_96e34,
    -7.109_713_184_278_51e38,
];

/// Saturation enthalpy from entropy, kJ/kg: the liquid side of the
/// dome up to the critical entropy, the vapor side above.
///
/// The liquid band s ∈ [-0.0001545495919, 3.77828134] is resolved by
/// bisecting Tsat against the region-1 saturated-liquid entropy, which
/// is monotone in T up to 623.15 K.  The remaining bands use the
/// correlations h′₃ₐ, h″₂c₃b and h″₂ₐᵦ, splitting at
/// s = 4.41202148223476 (critical entropy) and 5.85.
pub fn hsat_s(s: f64) -> Result<f64> {
    if s >= -1.545_495_919e-4 && s <= 3.778_281_34 {
        let t = solve::bisect(
            |t| Ok(region1::s_pt(psat_t(t)?, t)),
            T_MIN,
            623.15,
            s,
            1e-10,
            1e-9,
            100,
            "region4::hsat_s",
        )?;
        Ok(region1::h_pt(psat_t(t)?, t))
    } else if s <= 4.412_021_482_234_76 {
        let sigma = s / 3.8;
        let mut eta = 0.0;
        for k in 0..19 {
            eta += H3AS_N[k] * (sigma - 1.09).powi(H3AS_I[k]) * (sigma + 3.66e-5).powi(H3AS_J[k]);
        }
        Ok(eta * 1700.0)
    } else if s <= 5.85 {
        let sigma = s / 5.9;
        let mut eta = 0.0;
        for k in 0..16 {
            eta +=
                HV2C3BS_N[k] * (sigma - 1.02).powi(HV2C3BS_I[k]) * (sigma - 0.726).powi(HV2C3BS_J[k]);
        }
        Ok(eta.powi(4) * 2800.0)
    } else if s <= 9.155_759_395 {
        let sigma1 = s / 5.21;
        let sigma2 = s / 9.2;
        let mut sum = 0.0;
        for k in 0..30 {
            sum += HV2ABS_N[k]
                * (1.0 / sigma1 - 0.513).powi(HV2ABS_I[k])
                * (sigma2 - 0.524).powi(HV2ABS_J[k]);
        }
        Ok(sum.exp() * 2800.0)
    } else {
        Err(SteamError::OutOfRange(format!(
            "s = {s} kJ/(kg.K) outside the saturation dome"
        )))
    }
}

/// Saturation pressure from entropy, MPa: resolve the saturation
/// enthalpy first, then dispatch to the backward p(h, s) of the region
/// the entropy band belongs to.
pub fn psat_s(s: f64) -> Result<f64> {
    let h = hsat_s(s)?;
    if s <= 3.778_281_34 {
        Ok(region1::p_hs(h, s))
    } else if s <= 5.210_887_663 {
        Ok(region3::p_hs(h, s))
    } else {
        Ok(region2::p_hs(h, s))
    }
}

// ── Two-phase (h, s) flash ──────────────────────────────────────────

/// Saturation pressure for a two-phase (h, s) state, MPa: outer
/// bisection over pressure matching the mixture entropy built from the
/// quality at each trial pressure.
pub fn p_hs(h: f64, s: f64) -> Result<f64> {
    let mut lo = P_MIN;
    let mut hi = P_CRIT;
    for _ in 0..120 {
        let p = 0.5 * (lo + hi);
        let x = quality_ph(p, h)?;
        let sl = s_liq_p(p)?;
        let sv = s_vap_p(p)?;
        let s_mix = x * sv + (1.0 - x) * sl;
        if (s - s_mix).abs() <= 1e-6 && (hi - lo) <= 1e-7 {
            return Ok(p);
        }
        if s_mix < s {
            hi = p;
        } else {
            lo = p;
        }
    }
    Err(SteamError::NotConverged { solver: "region4::p_hs", iterations: 120 })
}

/// Two-phase temperature from (h, s), K: the saturation temperature at
/// the pressure recovered by [`p_hs`].
pub fn t_hs(h: f64, s: f64) -> Result<f64> {
    if !(-1.545_495_919e-4..=9.155_759_395).contains(&s) {
        return Err(SteamError::OutOfRange(format!(
            "s = {s} kJ/(kg.K) outside the saturation dome"
        )));
    }
    tsat_p(p_hs(h, s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(got: f64, want: f64, tol: f64) {
        assert!(((got - want) / want).abs() < tol, "got {got}, want {want}");
    }

    // IF97 release, Table 35.
    #[test]
    fn saturation_pressure_reference() {
        assert_rel(psat_t(300.0).unwrap(), 0.353_658_941e-2, 1e-8);
        assert_rel(psat_t(500.0).unwrap(), 0.263_889_776e1, 1e-8);
        assert_rel(psat_t(600.0).unwrap(), 0.123_443_146e2, 1e-8);
    }

    // IF97 release, Table 36.
    #[test]
    fn saturation_temperature_reference() {
        assert_rel(tsat_p(0.1).unwrap(), 0.372_755_919e3, 1e-8);
        assert_rel(tsat_p(1.0).unwrap(), 0.453_035_632e3, 1e-8);
        assert_rel(tsat_p(10.0).unwrap(), 0.584_149_488e3, 1e-8);
    }

    #[test]
    fn saturation_rejects_out_of_range() {
        assert!(psat_t(650.0).is_err());
        assert!(tsat_p(23.0).is_err());
        assert!(tsat_p(1e-4).is_err());
    }

    #[test]
    fn psat_tsat_round_trip() {
        for &t in &[280.0, 373.15, 500.0, 620.0, 640.0] {
            let p = psat_t(t).unwrap();
            let t_back = tsat_p(p).unwrap();
            assert!((t_back - t).abs() < 1e-6, "T = {t}: back {t_back}");
        }
    }

    #[test]
    fn phase_enthalpies_above_16_5_mpa() {
        // Newton branch: the recovered enthalpies must map back to p
        for &p in &[17.0, 19.0, 21.0] {
            let hl = h_liq_p(p).unwrap();
            let hv = h_vap_p(p).unwrap();
            assert!(hl < H_CRIT && hv > H_CRIT);
            assert!((crate::if97::boundary::p3sat_h(hl) - p).abs() < 1e-5);
            assert!((crate::if97::boundary::p3sat_h(hv) - p).abs() < 1e-5);
        }
    }

    #[test]
    fn quality_is_clamped() {
        assert_eq!(quality_ph(1.0, 100.0).unwrap(), 0.0);
        assert_eq!(quality_ph(1.0, 3000.0).unwrap(), 1.0);
        let x = quality_ph(1.0, 1500.0).unwrap();
        assert!(x > 0.0 && x < 1.0);
    }

    // IF97-SR4-04, Table 11: h′(s) on the liquid side of the dome.
    #[test]
    fn liquid_saturation_enthalpy_reference() {
        assert!((hsat_s(1.0).unwrap() - 308.550_964_7).abs() < 1e-3);
        assert!((hsat_s(2.0).unwrap() - 700.630_447_2).abs() < 1e-3);
        assert!((hsat_s(3.0).unwrap() - 1_198.359_754).abs() < 1e-3);
    }

    #[test]
    fn hsat_s_matches_forward_phase_states() {
        // liquid side, region-1 dome
        let p = 1.0;
        let ts = tsat_p(p).unwrap();
        let sl = region1::s_pt(p, ts);
        assert!((hsat_s(sl).unwrap() - region1::h_pt(p, ts)).abs() < 1.0);
        // vapor side, 2ab branch
        let sv = region2::s_pt(p, ts);
        assert!((hsat_s(sv).unwrap() - region2::h_pt(p, ts)).abs() < 1.0);
        // vapor side, 2c3b branch (higher pressure)
        let p = 10.0;
        let ts = tsat_p(p).unwrap();
        let sv = region2::s_pt(p, ts);
        assert!((hsat_s(sv).unwrap() - region2::h_pt(p, ts)).abs() < 1.0);
    }

    #[test]
    fn hsat_s_branches_meet_at_critical_entropy() {
        let h = hsat_s(4.412_021_482_234_76).unwrap();
        assert!((h - H_CRIT).abs() < 1.0, "h = {h}");
    }

    #[test]
    fn psat_s_matches_saturation_curve() {
        let p = 1.0;
        let ts = tsat_p(p).unwrap();
        let sl = region1::s_pt(p, ts);
        assert!((psat_s(sl).unwrap() - p).abs() < 1e-3);
        let sv = region2::s_pt(p, ts);
        assert!((psat_s(sv).unwrap() - p).abs() < 1e-3);
    }

    // IF97-SR4-04, Table 29: Ts(h, s) inside the dome.
    #[test]
    fn two_phase_temperature_reference() {
        assert!((t_hs(1800.0, 5.3).unwrap() - 346.847_549_8).abs() < 5e-3);
        assert!((t_hs(2400.0, 6.0).unwrap() - 425.137_330_5).abs() < 5e-3);
        assert!((t_hs(2500.0, 5.5).unwrap() - 522.557_901_3).abs() < 5e-3);
    }

    #[test]
    fn t_hs_recovers_mixture_states() {
        let p = 1.0;
        let ts = tsat_p(p).unwrap();
        let (hl, hv) = (h_liq_p(p).unwrap(), h_vap_p(p).unwrap());
        let (sl, sv) = (s_liq_p(p).unwrap(), s_vap_p(p).unwrap());
        for &x in &[0.1, 0.5, 0.9] {
            let (h, s) = (hl + x * (hv - hl), sl + x * (sv - sl));
            assert!((t_hs(h, s).unwrap() - ts).abs() < 0.01, "x = {x}");
        }
    }
}
