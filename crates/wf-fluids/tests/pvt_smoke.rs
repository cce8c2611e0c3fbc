//! Black-oil PVT smoke tests.
//!
//! Broad plausibility bands rather than tight reference values.

use wf_core::linspace;
use wf_fluids::{BlackOilFluid, BubblePoint, PvtTable, ZMethod};

#[test]
fn medium_oil_table_is_plausible() {
    let pressures = linspace(200.0, 5000.0, 25);
    let table = PvtTable::build(
        &pressures,
        180.0,
        35.0,
        0.8,
        BubblePoint::Pressure(2500.0),
        ZMethod::Papay,
    )
    .unwrap();

    assert_eq!(table.rows.len(), 25);
    assert!(table.rs_at_bubble_point > 0.0);
    for row in &table.rows {
        assert!(row.bo >= 1.0 && row.bo < 3.0, "Bo = {}", row.bo);
        assert!((0.2..=2.0).contains(&row.z), "z = {}", row.z);
        assert!(row.bg > 0.0);
        assert!(row.rs <= table.rs_at_bubble_point + 1e-9);
    }

    // Rs rises up to Pb, then stays flat
    let below: Vec<f64> = table
        .rows
        .iter()
        .filter(|r| r.pressure <= 2500.0)
        .map(|r| r.rs)
        .collect();
    assert!(below.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn liquid_density_follows_bo() {
    let fluid = BlackOilFluid::new(180.0, 35.0, 0.8, ZMethod::Papay).unwrap();
    let low = fluid.densities(500.0).unwrap();
    let high = fluid.densities(2500.0).unwrap();

    // more dissolved gas swells the oil
    assert!(high.bo > low.bo);
    assert!(high.liquid < low.liquid);
    // gas compresses
    assert!(high.gas > low.gas);
    assert!(low.liquid > 20.0 && low.liquid < 62.4);
}

#[test]
fn ideal_z_is_unity() {
    let table = PvtTable::build(
        &[500.0, 1500.0, 3000.0],
        150.0,
        30.0,
        0.7,
        BubblePoint::MaxPressure,
        ZMethod::Ideal,
    )
    .unwrap();
    assert!(table.rows.iter().all(|r| r.z == 1.0));
    assert_eq!(table.bubble_point, 3000.0);
}
