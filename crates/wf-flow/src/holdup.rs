//! Beggs-Brill liquid holdup.
//!
//! Horizontal holdup `E_L(0) = a·λ^b / Fr^c` is corrected for inclination by
//! `B(θ) = 1 + β·(sin 1.8θ − sin³ 1.8θ / 3)`. In the transition band the
//! segregated and intermittent holdups are blended linearly in Froude number.

use crate::common::require_positive_property;
use crate::error::{FlowError, FlowResult};
use crate::regime::{FlowRegime, RegimeBoundaries, classify_flow};
use wf_core::units::constants::G_FT_S2;

/// `(a, b, c)` in `E_L(0) = a·λ^b / Fr^c`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HorizontalCoefficients {
    a: f64,
    b: f64,
    c: f64,
}

/// `(d, e, f, g)` in `β = (1 − λ)·ln(d·λ^e·N_LV^f·Fr^g)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct InclinationCoefficients {
    d: f64,
    e: f64,
    f: f64,
    g: f64,
}

const SEGREGATED: HorizontalCoefficients = HorizontalCoefficients {
    a: 0.98,
    b: 0.4846,
    c: 0.0868,
};
const INTERMITTENT: HorizontalCoefficients = HorizontalCoefficients {
    a: 0.845,
    b: 0.5351,
    c: 0.0173,
};
const DISTRIBUTED: HorizontalCoefficients = HorizontalCoefficients {
    a: 1.065,
    b: 0.5824,
    c: 0.0609,
};

const UPHILL_SEGREGATED: InclinationCoefficients = InclinationCoefficients {
    d: 0.011,
    e: -3.768,
    f: 3.539,
    g: -1.614,
};
const UPHILL_INTERMITTENT: InclinationCoefficients = InclinationCoefficients {
    d: 2.96,
    e: 0.305,
    f: -0.4473,
    g: 0.0978,
};
const DOWNHILL: InclinationCoefficients = InclinationCoefficients {
    d: 4.7,
    e: -0.3692,
    f: 0.1244,
    g: -0.5056,
};

fn horizontal_coefficients(regime: FlowRegime) -> HorizontalCoefficients {
    match regime {
        FlowRegime::Segregated => SEGREGATED,
        FlowRegime::Intermittent => INTERMITTENT,
        // transition never reaches the table directly; it is blended
        FlowRegime::Distributed | FlowRegime::Transition => DISTRIBUTED,
    }
}

/// `None` means no inclination correction.
fn inclination_coefficients(regime: FlowRegime, uphill: bool) -> Option<InclinationCoefficients> {
    match (uphill, regime) {
        (false, _) => Some(DOWNHILL),
        (true, FlowRegime::Segregated) => Some(UPHILL_SEGREGATED),
        (true, FlowRegime::Intermittent) => Some(UPHILL_INTERMITTENT),
        (true, FlowRegime::Distributed | FlowRegime::Transition) => None,
    }
}

/// Holdup correlation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holdup {
    /// In-situ liquid holdup E_L(θ), in `[λ, 1]`
    pub value: f64,
    pub regime: FlowRegime,
    /// No-slip liquid fraction λ (clamped away from zero)
    pub no_slip_fraction: f64,
    pub froude: f64,
    /// Liquid velocity number N_LV
    pub liquid_velocity_number: f64,
}

/// Liquid velocity number `N_LV = 1.938·v_sl·(ρ_l/(g·σ))^¼`.
pub fn liquid_velocity_number(v_sl: f64, liquid_density: f64, surface_tension: f64) -> f64 {
    1.938 * v_sl * (liquid_density / (G_FT_S2 * surface_tension)).powf(0.25)
}

/// Horizontal holdup for a regime, floored at the no-slip fraction.
pub fn horizontal_holdup(regime: FlowRegime, c_l: f64, froude: f64) -> FlowResult<f64> {
    if !(froude.is_finite() && froude > 0.0) {
        return Err(FlowError::NonPhysical {
            what: "Froude number",
            value: froude,
        });
    }
    let HorizontalCoefficients { a, b, c } = horizontal_coefficients(regime);
    Ok((a * c_l.powf(b) / froude.powf(c)).max(c_l))
}

/// Inclination correction coefficient β.
pub fn inclination_beta(
    regime: FlowRegime,
    c_l: f64,
    froude: f64,
    n_lv: f64,
    inclination_deg: f64,
) -> f64 {
    if inclination_deg.abs() < 1e-12 {
        return 0.0;
    }
    let Some(k) = inclination_coefficients(regime, inclination_deg > 0.0) else {
        return 0.0;
    };
    let arg = (k.d * c_l.powf(k.e) * n_lv.powf(k.f) * froude.powf(k.g)).max(1e-30);
    (1.0 - c_l) * arg.ln()
}

/// `B(θ) = 1 + β·(s − s³/3)` with `s = sin(1.8θ)`.
pub fn inclination_factor(beta: f64, inclination_deg: f64) -> f64 {
    let s = (1.8 * inclination_deg).to_radians().sin();
    1.0 + beta * (s - s.powi(3) / 3.0)
}

/// Inclined holdup computed as if `regime` were the classified regime,
/// clamped to `[c_l, 1]`.
pub fn regime_holdup(
    regime: FlowRegime,
    c_l: f64,
    froude: f64,
    n_lv: f64,
    inclination_deg: f64,
) -> FlowResult<f64> {
    let el0 = horizontal_holdup(regime, c_l, froude)?;
    let beta = inclination_beta(regime, c_l, froude, n_lv, inclination_deg);
    let el = el0 * inclination_factor(beta, inclination_deg);
    Ok(el.clamp(c_l, 1.0))
}

/// Transition-band holdup: `A·E_seg + (1 − A)·E_int`, clamped to `[c_l, 1]`.
pub fn transition_holdup(
    boundaries: &RegimeBoundaries,
    c_l: f64,
    froude: f64,
    n_lv: f64,
    inclination_deg: f64,
) -> FlowResult<f64> {
    let a = boundaries.transition_weight(froude);
    let seg = regime_holdup(FlowRegime::Segregated, c_l, froude, n_lv, inclination_deg)?;
    let int = regime_holdup(FlowRegime::Intermittent, c_l, froude, n_lv, inclination_deg)?;
    Ok((a * seg + (1.0 - a) * int).clamp(c_l, 1.0))
}

/// Beggs-Brill liquid holdup at superficial velocities (ft/s) in a pipe of
/// diameter `d_ft` inclined `inclination_deg` from horizontal.
pub fn beggs_brill_holdup(
    v_sl: f64,
    v_sg: f64,
    d_ft: f64,
    inclination_deg: f64,
    liquid_density: f64,
    surface_tension: f64,
) -> FlowResult<Holdup> {
    require_positive_property(liquid_density, "liquid density")?;
    require_positive_property(surface_tension, "surface tension")?;

    let class = classify_flow(v_sl, v_sg, d_ft)?;
    let c_l = class.no_slip_fraction;
    let fr = class.froude;
    let n_lv = liquid_velocity_number(v_sl, liquid_density, surface_tension);

    let value = match class.regime {
        FlowRegime::Transition => {
            transition_holdup(&class.boundaries, c_l, fr, n_lv, inclination_deg)?
        }
        regime => regime_holdup(regime, c_l, fr, n_lv, inclination_deg)?,
    };

    Ok(Holdup {
        value,
        regime: class.regime,
        no_slip_fraction: c_l,
        froude: fr,
        liquid_velocity_number: n_lv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn horizontal_has_no_inclination_correction() {
        assert_eq!(inclination_beta(FlowRegime::Segregated, 0.4, 1.0, 5.0, 0.0), 0.0);
        assert_eq!(inclination_factor(3.0, 0.0), 1.0);
    }

    #[test]
    fn uphill_distributed_is_uncorrected() {
        assert_eq!(inclination_beta(FlowRegime::Distributed, 0.4, 100.0, 5.0, 45.0), 0.0);
        assert_ne!(inclination_beta(FlowRegime::Distributed, 0.4, 100.0, 5.0, -45.0), 0.0);
    }

    #[test]
    fn horizontal_holdup_is_floored_at_no_slip() {
        // very high Froude drives a·λ^b/Fr^c below λ
        let el = horizontal_holdup(FlowRegime::Distributed, 0.9, 1e12).unwrap();
        assert_eq!(el, 0.9);
        assert!(horizontal_holdup(FlowRegime::Segregated, 0.5, 0.0).is_err());
    }

    #[test]
    fn transition_blend_matches_end_members() {
        let c_l = 0.4;
        let n_lv = 5.0;
        let b = RegimeBoundaries::new(c_l).unwrap();
        for theta in [0.0, 30.0, -30.0] {
            let at_l2 = transition_holdup(&b, c_l, b.l2, n_lv, theta).unwrap();
            let seg = regime_holdup(FlowRegime::Segregated, c_l, b.l2, n_lv, theta).unwrap();
            assert!((at_l2 - seg).abs() < 1e-12);

            let at_l3 = transition_holdup(&b, c_l, b.l3, n_lv, theta).unwrap();
            let int = regime_holdup(FlowRegime::Intermittent, c_l, b.l3, n_lv, theta).unwrap();
            assert!((at_l3 - int).abs() < 1e-12);
        }
    }

    #[test]
    fn liquid_only_holdup_is_one() {
        let h = beggs_brill_holdup(2.0, 0.0, 2.992 / 12.0, 0.0, 55.0, 30.0).unwrap();
        assert!((h.value - 1.0).abs() < 1e-12);
        assert_eq!(h.no_slip_fraction, 1.0);
    }

    #[test]
    fn rejects_bad_properties() {
        assert!(matches!(
            beggs_brill_holdup(2.0, 3.0, 0.25, 0.0, 0.0, 30.0),
            Err(FlowError::InvalidFluidProperty { .. })
        ));
        assert!(matches!(
            beggs_brill_holdup(2.0, 3.0, 0.25, 0.0, 55.0, -1.0),
            Err(FlowError::InvalidFluidProperty { .. })
        ));
    }

    proptest! {
        #[test]
        fn holdup_bounded_by_no_slip_and_one(
            v_sl in 0.01_f64..20.0,
            v_sg in 0.0_f64..50.0,
            d_in in 1.0_f64..8.0,
            theta in -90.0_f64..90.0,
        ) {
            let h = beggs_brill_holdup(v_sl, v_sg, d_in / 12.0, theta, 55.0, 30.0).unwrap();
            prop_assert!(h.value >= h.no_slip_fraction - 1e-12);
            prop_assert!(h.value <= 1.0);
        }

        #[test]
        fn regime_is_deterministic(v_sl in 0.01_f64..20.0, v_sg in 0.0_f64..50.0) {
            let a = beggs_brill_holdup(v_sl, v_sg, 0.25, 10.0, 55.0, 30.0).unwrap();
            let b = beggs_brill_holdup(v_sl, v_sg, 0.25, 10.0, 55.0, 30.0).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
