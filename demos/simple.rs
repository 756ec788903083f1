use steam97::Steam;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let steam = Steam::new();

    // ── PT flash: 3 MPa, 300 K (compressed liquid) ──────────────────
    let props = steam.props_pt(3.0, 300.0)?;
    println!("PT flash (P=3 MPa, T=300 K):\n{props}\n");

    // ── Transport properties at the same state point ────────────────
    let trn = steam.transport(3.0, 300.0)?;
    println!("Transport:\n{trn}\n");

    // ── Saturation at P = 1 MPa ─────────────────────────────────────
    let sat = steam.saturation_p(1.0)?;
    println!("Saturation at P=1 MPa:\n{sat}\n");

    // ── Saturation at T = 453 K ─────────────────────────────────────
    let sat_t = steam.saturation_t(453.0)?;
    println!("Saturation at T=453 K:\n{sat_t}\n");

    // ── PH flash: P = 3 MPa, H from the PT flash above ──────────────
    let ph = steam.props_ph(3.0, props.enthalpy)?;
    println!("PH flash (P=3, H={:.2}):\n{ph}\n", props.enthalpy);

    // ── PX flash: saturated vapor at 1 MPa ──────────────────────────
    let px = steam.props_px(1.0, 1.0)?;
    println!("PX flash (P=1 MPa, x=1):\n{px}\n");

    // ── Generic get() – CoolProp style ──────────────────────────────
    let d = steam.get("D", "T", 453.0, "Q", 1.0)?;
    println!("get(D, T=453, Q=1) = {d:.6} kg/m3");

    let p_sat = steam.get("P", "T", 453.0, "Q", 0.0)?;
    println!("get(P, T=453, Q=0) = {p_sat:.4} MPa");

    Ok(())
}
