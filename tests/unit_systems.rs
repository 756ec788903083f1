use steam97::{PressUnit, Steam, TempUnit, UnitSystem};

// ═══════════════════════════════════════════════════════════════════
//  Consistency between unit systems
// ═══════════════════════════════════════════════════════════════════

#[test]
fn engineering_vs_native_temperature() {
    // Same state: T in °C vs K.
    let eng = Steam::with_units(UnitSystem::engineering());
    let native = Steam::new();

    let t_eng = eng.get("T", "P", 10.0, "Q", 0.0).unwrap(); // °C, bar
    let t_nat = native.get("T", "P", 1.0, "Q", 0.0).unwrap(); // K, MPa

    let diff = (t_nat - 273.15) - t_eng;
    assert!(
        diff.abs() < 1e-9,
        "T(eng) = {t_eng:.4} °C, T(native) = {t_nat:.4} K → diff = {diff:.6}"
    );
}

#[test]
fn engineering_vs_native_pressure() {
    // Psat(453.035632 K) in bar vs MPa.
    let eng = Steam::with_units(UnitSystem::engineering());
    let native = Steam::new();

    let p_eng = eng.get("P", "T", 453.035_632 - 273.15, "Q", 0.0).unwrap(); // bar
    let p_nat = native.get("P", "T", 453.035_632, "Q", 0.0).unwrap(); // MPa

    let diff = p_nat * 10.0 - p_eng;
    assert!(
        diff.abs() < 1e-9,
        "P(eng) = {p_eng:.6} bar, P(native) = {p_nat:.6} MPa → diff = {diff:.9}"
    );
}

#[test]
fn engineering_vs_si_density() {
    // Density in kg/m³ must agree between engineering and SI.
    let eng = Steam::with_units(UnitSystem::engineering());
    let si = Steam::with_units(UnitSystem::si());

    let d_eng = eng.props_pt(30.0, 26.85).unwrap().density; // bar, °C
    let d_si = si.props_pt(3_000_000.0, 300.0).unwrap().density; // Pa, K

    assert!(
        (d_eng - d_si).abs() < 1e-9,
        "D(eng) = {d_eng:.6} vs D(si) = {d_si:.6} kg/m³"
    );
}

#[test]
fn si_energy_units_scale_enthalpy() {
    // SI uses J/kg, native kJ/kg.
    let si = Steam::with_units(UnitSystem::si());
    let native = Steam::new();

    let h_si = si.props_pt(3_000_000.0, 300.0).unwrap().enthalpy;
    let h_nat = native.props_pt(3.0, 300.0).unwrap().enthalpy;

    assert!(
        (h_si - h_nat * 1000.0).abs() < 1e-6,
        "h(si) = {h_si:.3} J/kg vs h(native) = {h_nat:.6} kJ/kg"
    );
}

#[test]
fn volume_and_sound_speed_ignore_the_unit_system() {
    // Neither field has a configurable dimension: m³/kg and m/s always.
    let si = Steam::with_units(UnitSystem::si());
    let native = Steam::new();

    let p_si = si.props_pt(3_000_000.0, 300.0).unwrap();
    let p_nat = native.props_pt(3.0, 300.0).unwrap();

    assert!(
        (p_si.volume - p_nat.volume).abs() < 1e-15,
        "v(si) = {} vs v(native) = {} m³/kg",
        p_si.volume,
        p_nat.volume
    );
    assert_eq!(p_si.sound_speed, p_nat.sound_speed, "sound speed is always m/s");
}

// ═══════════════════════════════════════════════════════════════════
//  Builder-style custom systems
// ═══════════════════════════════════════════════════════════════════

#[test]
fn custom_system_celsius_mpa() {
    let custom = UnitSystem::new()
        .temperature(TempUnit::Celsius)
        .pressure(PressUnit::MPa);
    let steam = Steam::with_units(custom);
    let native = Steam::new();

    let sat = steam.saturation_p(1.0).unwrap();
    let sat_nat = native.saturation_p(1.0).unwrap();
    assert!(
        ((sat.temperature + 273.15) - sat_nat.temperature).abs() < 1e-9,
        "custom system should only shift temperature: {:.4} vs {:.4}",
        sat.temperature,
        sat_nat.temperature
    );
    assert!((sat.enthalpy_vapor - sat_nat.enthalpy_vapor).abs() < 1e-9);
}

#[test]
fn quality_is_unit_free() {
    let eng = Steam::with_units(UnitSystem::engineering());
    let native = Steam::new();

    let x_eng = eng.quality_ph(150.0, 2000.0).unwrap(); // bar, kJ/kg
    let x_nat = native.quality_ph(15.0, 2000.0).unwrap(); // MPa, kJ/kg
    assert!(
        (x_eng - x_nat).abs() < 1e-12,
        "quality must not depend on the unit system: {x_eng} vs {x_nat}"
    );
}
