use approx::assert_relative_eq;
use steam97::Steam;

// ═══════════════════════════════════════════════════════════════════
//  Saturation by pressure
// ═══════════════════════════════════════════════════════════════════

#[test]
fn saturation_p_reference_temperatures() {
    let steam = Steam::new();

    // IF97 release, Table 36.
    let sat = steam.saturation_p(0.1).unwrap();
    assert_relative_eq!(sat.temperature, 372.755_919, max_relative = 1e-8);

    let sat = steam.saturation_p(10.0).unwrap();
    assert_relative_eq!(sat.temperature, 584.149_488, max_relative = 1e-8);
}

#[test]
fn saturation_p_phase_ordering() {
    let steam = Steam::new();
    let sat = steam.saturation_p(1.0).unwrap();

    assert!(
        sat.density_liquid > sat.density_vapor,
        "D_liq ({:.2}) should be > D_vap ({:.4})",
        sat.density_liquid,
        sat.density_vapor
    );
    assert!(
        sat.enthalpy_vapor > sat.enthalpy_liquid,
        "H_vap ({:.2}) should be > H_liq ({:.2})",
        sat.enthalpy_vapor,
        sat.enthalpy_liquid
    );
    assert!(sat.entropy_vapor > sat.entropy_liquid);
}

#[test]
fn saturation_p_above_region3_cut() {
    // Above 16.529 MPa the phase properties come from the region-3
    // equations; the dome must stay ordered all the way up.
    let steam = Steam::new();
    let sat = steam.saturation_p(20.0).unwrap();

    assert!(sat.density_liquid > sat.density_vapor);
    assert!(sat.enthalpy_vapor > sat.enthalpy_liquid);
    assert!(
        sat.enthalpy_liquid > 1700.0 && sat.enthalpy_vapor < 2500.0,
        "dome should be narrow near the critical point: H_liq {:.1}, H_vap {:.1}",
        sat.enthalpy_liquid,
        sat.enthalpy_vapor
    );
}

#[test]
fn saturation_p_rejects_out_of_range() {
    let steam = Steam::new();
    assert!(steam.saturation_p(25.0).is_err(), "above critical pressure");
    assert!(steam.saturation_p(1e-5).is_err(), "below triple point");
}

// ═══════════════════════════════════════════════════════════════════
//  Saturation by temperature
// ═══════════════════════════════════════════════════════════════════

#[test]
fn saturation_t_reference_pressures() {
    let steam = Steam::new();

    // IF97 release, Table 35.
    let sat = steam.saturation_t(300.0).unwrap();
    assert_relative_eq!(sat.pressure, 0.003_536_589_41, max_relative = 1e-8);

    let sat = steam.saturation_t(600.0).unwrap();
    assert_relative_eq!(sat.pressure, 12.344_314_6, max_relative = 1e-8);
}

// ═══════════════════════════════════════════════════════════════════
//  saturation_t ↔ saturation_p consistency
// ═══════════════════════════════════════════════════════════════════

#[test]
fn saturation_t_p_round_trip() {
    let steam = Steam::new();

    for t in [280.0, 373.15, 500.0, 620.0] {
        let sat_t = steam.saturation_t(t).unwrap();
        let sat_p = steam.saturation_p(sat_t.pressure).unwrap();
        assert!(
            (sat_p.temperature - t).abs() < 1e-6,
            "round-trip T → P → T at {t} K returned {:.8}",
            sat_p.temperature
        );
    }
}

#[test]
fn surface_tension_decreases_towards_critical() {
    let steam = Steam::new();
    let st_300 = steam.surface_tension(300.0).unwrap();
    let st_600 = steam.surface_tension(600.0).unwrap();
    assert!(
        st_300 > st_600 && st_600 > 0.0,
        "surface tension should fall with T: {st_300:.5} vs {st_600:.5}"
    );
}
