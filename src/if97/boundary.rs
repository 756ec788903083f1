//! Inter-region boundary curves.
//!
//! The B23 line separates regions 2 and 3; the remaining curves here
//! describe the region-3 part of the saturation dome and the
//! region-1/region-3 corner in (h, s) coordinates.

use crate::error::{Result, SteamError};
use crate::if97::solve;

/// B23 boundary pressure p(T), MPa.  Valid 623.15 K ≤ T ≤ 863.15 K.
pub fn b23_p_t(t: f64) -> f64 {
    348.051_856_289_69 - 1.167_185_987_997_5 * t + 1.019_297_003_932_6e-3 * t * t
}

/// B23 boundary temperature T(p), K.  Valid 16.5292 MPa ≤ p ≤ 100 MPa.
pub fn b23_t_p(p: f64) -> f64 {
    572.544_598_627_46 + ((p - 13.918_839_778_87) / 1.019_297_003_932_6e-3).sqrt()
}

const P3SAT_H_I: [i32; 14] = [0, 1, 1, 1, 1, 5, 7, 8, 14, 20, 22, 24, 28, 36];
const P3SAT_H_J: [i32; 14] = [0, 1, 3, 4, 36, 3, 0, 24, 16, 16, 3, 18, 8, 24];
const P3SAT_H_N: [f64; 14] = [
    0.600_073_641_753_024,
    -9.362_036_548_498_57,
    24.659_079_859_414_7,
    -107.014_222_858_224,
    -91_582_131_580_576.8,
    -8_623.320_117_006_62,
    -23.583_734_474_003_2,
    2.523_049_693_841_28e17,
    -3.897_187_719_977_19e18,
    -3.337_757_136_452_96e22,
    35_649_946_963.632_8,
    -1.485_475_447_206_41e26,
    3.306_115_148_387_98e18,
    8.136_412_944_678_29e37,
];

/// Saturation pressure on the region-3 part of the dome from enthalpy,
/// MPa.  Valid h ∈ [1670.858218, 2563.592004] kJ/kg.
pub fn p3sat_h(h: f64) -> f64 {
    let eta = h / 2600.0;
    let mut p = 0.0;
    for k in 0..14 {
        p += P3SAT_H_N[k] * (eta - 1.02).powi(P3SAT_H_I[k]) * (eta - 0.608).powi(P3SAT_H_J[k]);
    }
    p * 22.0
}

/// Saturated liquid entropy where the dome crosses 16.5292 MPa,
/// kJ/(kg·K). Lower end of the region-3 saturation entropy band.
pub const S3SAT_MIN: f64 = 3.778_281_34;
/// Saturated vapor entropy at 16.5292 MPa, the upper end of the band.
pub const S3SAT_MAX: f64 = 5.210_887_663;

/// Saturation pressure on the region-3 part of the dome from entropy,
/// MPa.  Valid s ∈ [3.77828134, 5.210887663] kJ/(kg·K).
///
/// Each side of the critical point is monotone in pressure, so the
/// appropriate branch of the saturated phase entropy (region-3 volume
/// backward equation at the phase enthalpy) is inverted by bounded
/// bisection.
pub fn p3sat_s(s: f64) -> Result<f64> {
    use crate::if97::{P_13, P_CRIT, region3, region4};

    if !(S3SAT_MIN..=S3SAT_MAX).contains(&s) {
        return Err(SteamError::OutOfRange(format!(
            "s = {s} kJ/(kg.K) outside the region-3 saturation band"
        )));
    }
    let phase_s = |p: f64, liquid: bool| -> Result<f64> {
        let h = if liquid { region4::h_liq_p(p)? } else { region4::h_vap_p(p)? };
        let t = region4::tsat_p(p)?;
        let rho = 1.0 / region3::v_ph(p, h);
        Ok(region3::s_rho_t(rho, t))
    };
    // liquid branch: s rises with p; vapor branch: s falls with p
    if s <= 4.412_021_482_234_76 {
        solve::bisect(
            |p| phase_s(p, true),
            P_13,
            P_CRIT,
            s,
            1e-7,
            1e-9,
            100,
            "boundary::p3sat_s (liquid)",
        )
    } else {
        solve::bisect_decreasing(
            |p| phase_s(p, false),
            P_13,
            P_CRIT,
            s,
            1e-7,
            1e-9,
            100,
            "boundary::p3sat_s (vapor)",
        )
    }
}

const HB13_I: [i32; 6] = [0, 1, 1, 3, 5, 6];
const HB13_J: [i32; 6] = [0, -2, 2, -12, -4, -3];
const HB13_N: [f64; 6] = [
    0.913_965_547_600_543,
    -4.309_448_560_419_91e-5,
    60.323_569_476_541_9,
    1.175_182_730_821_68e-18,
    0.220_000_904_781_292,
    -69.399_284_109_486_4,
];

/// Enthalpy on the region-1/region-3 boundary (the 623.15 K isotherm)
/// from entropy, kJ/kg.  Valid s ∈ [3.397782955, 3.77828134].
pub fn hb13_s(s: f64) -> f64 {
    let sigma = s / 3.8;
    let mut eta = 0.0;
    for k in 0..6 {
        eta += HB13_N[k] * (sigma - 0.884).powi(HB13_I[k]) * (sigma - 0.864).powi(HB13_J[k]);
    }
    eta * 1700.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // IF97 release, eqs. 5/6: the B23 reference point.
    #[test]
    fn b23_reference_point() {
        let p = b23_p_t(0.623_150_000e3);
        assert!((p - 0.165_291_643e2).abs() < 1e-6, "p = {p}");
        let t = b23_t_p(0.165_291_643e2);
        assert!((t - 0.623_150_000e3).abs() < 1e-6, "t = {t}");
    }

    #[test]
    fn p3sat_h_anchors_at_dome_edges() {
        // both dome edges sit at the 16.5292 MPa corner
        assert!((p3sat_h(1670.858_218) - 16.5292).abs() < 2e-3);
        assert!((p3sat_h(2563.592_004) - 16.5292).abs() < 2e-3);
        // the crest of the fit sits at the critical pressure
        assert!((p3sat_h(2087.235_001_648_64) - 22.064).abs() < 5e-3);
    }

    #[test]
    fn hb13_joins_the_13_corner() {
        // s1(16.5292 MPa, 623.15 K) maps back onto the corner enthalpy
        let s = crate::if97::region1::s_pt(16.5292, 623.15);
        let h = hb13_s(s);
        let h_corner = crate::if97::region1::h_pt(16.5292, 623.15);
        assert!((h - h_corner).abs() < 1.0, "h = {h}, corner = {h_corner}");
    }

}
