//! End-to-end gradient scenarios.

use proptest::prelude::*;
use wf_core::units::constants::G_FT_S2;
use wf_flow::holdup::{regime_holdup, transition_holdup};
use wf_flow::{
    BeggsBrill, Correlation, FlowError, FlowRegime, FluidProperties, FluidState, HagedornBrown,
    PipeGeometry, PressureGradient, RegimeBoundaries, beggs_brill_holdup, flow_regime,
};

const D_IN: f64 = 2.992;

fn fluid() -> FluidProperties {
    FluidProperties::new(55.0, 3.0, 1.0, 0.02).unwrap()
}

fn gradient_at(theta: f64, v_sl: f64, v_sg: f64) -> wf_flow::GradientResult {
    let geometry = PipeGeometry::new(D_IN, 0.0006, theta).unwrap();
    let state = FluidState::new(fluid(), v_sl, v_sg).unwrap();
    BeggsBrill::default().gradient(&geometry, &state).unwrap()
}

#[test]
fn reference_case_horizontal_then_inclined() {
    let flat = gradient_at(0.0, 2.0, 3.0);
    assert!(flat.holdup >= 0.4);
    assert!(flat.pressure_gradient.is_finite());
    assert!(flat.pressure_gradient > 0.0);

    let again = gradient_at(0.0, 2.0, 3.0);
    assert_eq!(flat.regime, again.regime);

    let inclined = gradient_at(60.0, 2.0, 3.0);
    assert!(inclined.pressure_gradient > flat.pressure_gradient);
}

#[test]
fn gradient_rises_with_uphill_angle() {
    let g: Vec<f64> = [0.0, 30.0, 60.0]
        .iter()
        .map(|&t| gradient_at(t, 2.0, 3.0).pressure_gradient)
        .collect();
    assert!(g[0] < g[1] && g[1] < g[2], "{g:?}");
}

#[test]
fn downhill_reduces_gradient() {
    let flat = gradient_at(0.0, 2.0, 3.0);
    let down = gradient_at(-30.0, 2.0, 3.0);
    assert!(down.pressure_gradient < flat.pressure_gradient);
}

#[test]
fn single_phase_liquid_limit() {
    let r = gradient_at(90.0, 2.0, 1e-9);
    assert!((r.holdup - 1.0).abs() < 1e-6);
    assert!(r.pressure_gradient > 55.0 / 144.0);

    let hb = HagedornBrown::default()
        .gradient(
            &PipeGeometry::vertical(D_IN).unwrap(),
            &FluidState::new(fluid(), 2.0, 1e-9).unwrap(),
        )
        .unwrap();
    assert!(hb.holdup > 0.999 && hb.holdup < 1.0);
    assert!(hb.pressure_gradient > 0.0);
}

#[test]
fn blend_equals_end_members_at_boundaries() {
    for c_l in [0.05, 0.2, 0.5, 0.9] {
        let b = RegimeBoundaries::new(c_l).unwrap();
        let n_lv = 3.0;
        for theta in [-45.0, 0.0, 45.0, 90.0] {
            let seg = regime_holdup(FlowRegime::Segregated, c_l, b.l2, n_lv, theta).unwrap();
            let at_l2 = transition_holdup(&b, c_l, b.l2, n_lv, theta).unwrap();
            assert!((seg - at_l2).abs() < 1e-12);

            let int = regime_holdup(FlowRegime::Intermittent, c_l, b.l3, n_lv, theta).unwrap();
            let at_l3 = transition_holdup(&b, c_l, b.l3, n_lv, theta).unwrap();
            assert!((int - at_l3).abs() < 1e-12);
        }
    }
}

#[test]
fn holdup_is_continuous_across_transition_band() {
    let d_ft = 0.25;
    let c_l: f64 = 0.5;
    let b = RegimeBoundaries::new(c_l).unwrap();

    let holdup_at = |froude: f64| {
        let v_m = (froude * G_FT_S2 * d_ft).sqrt();
        beggs_brill_holdup(c_l * v_m, (1.0 - c_l) * v_m, d_ft, 30.0, 55.0, 30.0).unwrap()
    };

    for boundary in [b.l2, b.l3] {
        let below = holdup_at(boundary * (1.0 - 1e-9));
        let above = holdup_at(boundary * (1.0 + 1e-9));
        assert_ne!(below.regime, above.regime);
        assert!((below.value - above.value).abs() < 1e-6);
    }
}

#[test]
fn correlations_are_interchangeable() {
    let geometry = PipeGeometry::vertical(D_IN).unwrap();
    let state = FluidState::new(fluid(), 2.0, 3.0).unwrap();
    let models: Vec<Correlation> = ["bb", "hb"].iter().map(|n| n.parse().unwrap()).collect();
    for model in &models {
        let r = model.gradient(&geometry, &state).unwrap();
        assert!(r.pressure_gradient.is_finite() && r.pressure_gradient > 0.0);
    }
}

#[test]
fn validation_failures_name_the_value() {
    let props = fluid();
    let state = FluidState::new(props, 2.0, 3.0).unwrap();

    let mut geometry = PipeGeometry::vertical(D_IN).unwrap();
    geometry.diameter_in = -1.0;
    match BeggsBrill::default().gradient(&geometry, &state) {
        Err(FlowError::InvalidGeometry { value, .. }) => assert_eq!(value, -1.0),
        other => panic!("unexpected {other:?}"),
    }

    let steep = PipeGeometry::new(D_IN, 0.0006, -95.0).unwrap();
    assert!(matches!(
        HagedornBrown::default().gradient(&steep, &state),
        Err(FlowError::InvalidAngle { value, .. }) if value == -95.0
    ));
}

proptest! {
    #[test]
    fn beggs_brill_holdup_within_no_slip_and_one(
        v_sl in 0.01_f64..15.0,
        v_sg in 0.0_f64..60.0,
        theta in -90.0_f64..=90.0,
    ) {
        let r = gradient_at(theta, v_sl, v_sg);
        let c_l = v_sl / (v_sl + v_sg);
        prop_assert!(r.holdup >= c_l - 1e-12);
        prop_assert!(r.holdup <= 1.0);
        prop_assert!(r.pressure_gradient.is_finite());
    }

    #[test]
    fn regime_is_a_pure_function(v_sl in 0.0_f64..15.0, v_sg in 0.01_f64..60.0, d_in in 1.0_f64..8.0) {
        let a = flow_regime(v_sl, v_sg, d_in / 12.0).unwrap();
        let b = flow_regime(v_sl, v_sg, d_in / 12.0).unwrap();
        prop_assert_eq!(a, b);
    }
}
