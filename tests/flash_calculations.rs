use steam97::Steam;

// ═══════════════════════════════════════════════════════════════════
//  Flash PT (pressure-temperature)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pt_flash_compressed_liquid() {
    let steam = Steam::new();
    let props = steam.props_pt(3.0, 300.0).unwrap();

    // IF97 release, Table 5.
    assert!(
        (props.enthalpy - 115.331_273).abs() < 1e-5,
        "h(3 MPa, 300 K) expected 115.331273 kJ/kg, got {:.6}",
        props.enthalpy
    );
    assert!(
        (props.volume - 0.001_002_151_68).abs() < 1e-10,
        "v expected 0.00100215168 m3/kg, got {:.11}",
        props.volume
    );
    assert!(props.quality.is_none(), "single-phase state has no quality");
}

#[test]
fn pt_flash_on_region_boundaries() {
    let steam = Steam::new();

    // 17 MPa on the 623.15 K isotherm is the top edge of region 1.
    let props = steam.props_pt(17.0, 623.15).unwrap();
    assert!(
        (props.enthalpy - 1_666.589).abs() < 0.1,
        "h(17 MPa, 623.15 K) expected ≈ 1666.589 kJ/kg, got {:.3}",
        props.enthalpy
    );

    // 15 MPa at 1073.15 K is the top edge of region 2.
    let props = steam.props_pt(15.0, 1073.15).unwrap();
    assert!(
        (props.enthalpy - 4_091.326).abs() < 0.1,
        "h(15 MPa, 1073.15 K) expected ≈ 4091.326 kJ/kg, got {:.3}",
        props.enthalpy
    );
}

#[test]
fn pt_flash_cp_greater_than_cv() {
    let steam = Steam::new();
    for (p, t) in [(3.0, 300.0), (0.0035, 700.0), (25.0, 650.0), (5.0, 1500.0)] {
        let props = steam.props_pt(p, t).unwrap();
        let (cp, cv) = (props.cp.unwrap(), props.cv.unwrap());
        assert!(
            cp >= cv,
            "Cp ({cp:.4}) should be >= Cv ({cv:.4}) at (P={p}, T={t})"
        );
        assert!(props.sound_speed.unwrap() > 0.0);
    }
}

#[test]
fn pt_flash_rejects_saturated_state() {
    let steam = Steam::new();
    let t_sat = steam.saturation_p(1.0).unwrap().temperature;
    assert!(
        steam.props_pt(1.0, t_sat).is_err(),
        "a (p, T) point on the saturation curve cannot resolve quality"
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Flash PH / PS (backward equations)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn ph_flash_round_trips_pt() {
    let steam = Steam::new();
    for (p, t) in [(3.0, 300.0), (0.0035, 700.0), (30.0, 700.0), (25.0, 650.0)] {
        let fwd = steam.props_pt(p, t).unwrap();
        let back = steam.props_ph(p, fwd.enthalpy).unwrap();
        assert!(
            (back.temperature - t).abs() < 0.03,
            "PH flash at (P={p}, h={:.2}) returned T={:.4}, expected {t}",
            fwd.enthalpy,
            back.temperature
        );
    }
}

#[test]
fn ps_flash_round_trips_pt() {
    let steam = Steam::new();
    for (p, t) in [(3.0, 300.0), (0.0035, 700.0), (30.0, 700.0)] {
        let fwd = steam.props_pt(p, t).unwrap();
        let back = steam.props_ps(p, fwd.entropy).unwrap();
        assert!(
            (back.temperature - t).abs() < 0.03,
            "PS flash at (P={p}, s={:.4}) returned T={:.4}, expected {t}",
            fwd.entropy,
            back.temperature
        );
    }
}

#[test]
fn ph_flash_two_phase_quality() {
    let steam = Steam::new();
    let props = steam.props_ph(15.0, 2000.0).unwrap();
    let x = props.quality.expect("wet steam must carry a quality");
    assert!(
        (x - 0.390).abs() < 0.005,
        "x(15 MPa, 2000 kJ/kg) expected ≈ 0.390, got {x:.4}"
    );
    assert!(props.cp.is_none() && props.cv.is_none() && props.sound_speed.is_none());
}

#[test]
fn hs_flash_round_trips_pt() {
    let steam = Steam::new();
    for (p, t) in [(3.0, 300.0), (0.1, 500.0), (50.0, 800.0)] {
        let fwd = steam.props_pt(p, t).unwrap();
        let back = steam.props_hs(fwd.enthalpy, fwd.entropy).unwrap();
        assert!(
            (back.pressure - p).abs() / p < 1e-3,
            "HS flash at (h={:.2}, s={:.4}) returned P={:.5}, expected {p}",
            fwd.enthalpy,
            fwd.entropy,
            back.pressure
        );
    }
}

#[test]
fn prho_flash_round_trips_pt() {
    let steam = Steam::new();
    for (p, t) in [(3.0, 300.0), (0.0035, 700.0), (25.0, 650.0), (5.0, 1500.0)] {
        let fwd = steam.props_pt(p, t).unwrap();
        let back = steam.props_prho(p, fwd.density).unwrap();
        assert!(
            (back.temperature - t).abs() < 0.01,
            "P-rho flash at (P={p}, D={:.4}) returned T={:.4}, expected {t}",
            fwd.density,
            back.temperature
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Flash by quality
// ═══════════════════════════════════════════════════════════════════

#[test]
fn px_flash_interpolates_between_phases() {
    let steam = Steam::new();
    let sat = steam.saturation_p(1.0).unwrap();
    let props = steam.props_px(1.0, 0.5).unwrap();

    let h_mid = 0.5 * (sat.enthalpy_liquid + sat.enthalpy_vapor);
    assert!(
        (props.enthalpy - h_mid).abs() < 1e-9,
        "x=0.5 enthalpy should be the phase midpoint: {:.4} vs {h_mid:.4}",
        props.enthalpy
    );
    assert_eq!(props.quality, Some(0.5));
}

#[test]
fn px_flash_rejects_invalid_quality() {
    let steam = Steam::new();
    assert!(steam.props_px(1.0, 1.2).is_err());
    assert!(steam.props_px(1.0, -0.1).is_err());
    assert!(steam.props_px(23.0, 0.5).is_err(), "above critical pressure");
}

#[test]
fn tx_flash_matches_px_flash() {
    let steam = Steam::new();
    let sat = steam.saturation_p(1.0).unwrap();
    let from_t = steam.props_tx(sat.temperature, 0.3).unwrap();
    let from_p = steam.props_px(1.0, 0.3).unwrap();
    assert!(
        (from_t.enthalpy - from_p.enthalpy).abs() < 1e-6,
        "TX and PX flashes should agree: {:.6} vs {:.6}",
        from_t.enthalpy,
        from_p.enthalpy
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Generic get() and batch helpers
// ═══════════════════════════════════════════════════════════════════

#[test]
fn get_supports_all_input_pairs() {
    let steam = Steam::new();
    let h = steam.get("H", "P", 3.0, "T", 300.0).unwrap();
    assert!((h - 115.331).abs() < 0.01);

    // Key order must not matter.
    let h_swapped = steam.get("H", "T", 300.0, "P", 3.0).unwrap();
    assert_eq!(h, h_swapped);

    let q = steam.get("Q", "P", 15.0, "H", 2000.0).unwrap();
    assert!((q - 0.390).abs() < 0.005);

    let w = steam.get("W", "P", 3.0, "T", 300.0).unwrap();
    assert!((w - 1_507.739_21).abs() < 1e-4);

    assert!(steam.get("Q", "P", 3.0, "T", 300.0).is_err());
    assert!(steam.get("H", "X", 1.0, "Y", 2.0).is_err());
}

#[test]
fn batch_helpers_match_scalar_calls() {
    let steam = Steam::new();
    let states = [(3.0, 300.0), (0.0035, 700.0), (25.0, 650.0)];
    let batch = steam.props_pt_many(&states);
    assert_eq!(batch.len(), 3);
    for (result, &(p, t)) in batch.iter().zip(&states) {
        let scalar = steam.props_pt(p, t).unwrap();
        assert_eq!(result.as_ref().unwrap(), &scalar);
    }
}

#[test]
fn transport_properties_at_ambient() {
    let steam = Steam::new();
    let trn = steam.transport(0.1, 293.15).unwrap();
    assert!(
        (trn.viscosity - 1.0e-3).abs() < 0.05e-3,
        "water at 20 C is near 1 mPa s, got {:.6e}",
        trn.viscosity
    );
    assert!(
        (trn.thermal_conductivity - 0.60).abs() < 0.03,
        "conductivity near 0.60 W/(m K), got {:.4}",
        trn.thermal_conductivity
    );
}
