//! Friction factors.

use crate::error::{FlowError, FlowResult};

/// Below this Reynolds number flow is treated as laminar.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2000.0;

/// Darcy (Moody) friction factor.
///
/// Laminar: `64 / Re`. Turbulent: Swamee-Jain explicit approximation of
/// Colebrook-White with relative roughness `ε/d`.
pub fn darcy_friction_factor(reynolds: f64, relative_roughness: f64) -> FlowResult<f64> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(FlowError::NonPhysical {
            what: "Reynolds number",
            value: reynolds,
        });
    }

    if reynolds < LAMINAR_REYNOLDS_LIMIT {
        return Ok(64.0 / reynolds);
    }

    let rr = relative_roughness.max(0.0);
    let log_term = (rr / 3.7 + 5.74 / reynolds.powf(0.9)).log10();
    Ok(0.25 / (log_term * log_term))
}

/// Beggs-Brill two-phase friction exponent `S`, so that `f_tp = f_ns · e^S`.
///
/// `no_slip_fraction` is λ_l and `holdup` the in-situ liquid holdup.
pub fn two_phase_exponent(no_slip_fraction: f64, holdup: f64) -> f64 {
    let y = (no_slip_fraction / (holdup * holdup)).max(1e-12);

    if y > 1.0 && y < 1.2 {
        return (2.2 * y - 1.2).ln();
    }

    let ln_y = y.ln();
    let mut denom = -0.0523 + 3.182 * ln_y - 0.8725 * ln_y.powi(2) + 0.01853 * ln_y.powi(4);
    if denom.abs() < 1e-12 {
        denom = 1e-12_f64.copysign(denom);
    }
    ln_y / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn laminar_branch() {
        let f = darcy_friction_factor(1000.0, 1e-4).unwrap();
        assert!((f - 0.064).abs() < 1e-15);
    }

    #[test]
    fn turbulent_smooth_pipe() {
        // Blasius gives ~0.0184 at Re = 1e5; Swamee-Jain for smooth pipe ~0.018
        let f = darcy_friction_factor(1e5, 0.0).unwrap();
        assert!(f > 0.017 && f < 0.019, "f = {f}");
    }

    #[test]
    fn roughness_increases_friction() {
        let smooth = darcy_friction_factor(1e6, 0.0).unwrap();
        let rough = darcy_friction_factor(1e6, 1e-3).unwrap();
        assert!(rough > smooth);
    }

    #[test]
    fn rejects_zero_reynolds() {
        assert!(darcy_friction_factor(0.0, 1e-4).is_err());
        assert!(darcy_friction_factor(f64::NAN, 1e-4).is_err());
    }

    #[test]
    fn no_slip_equals_holdup_gives_unity_multiplier_for_liquid() {
        // λ = H = 1 → y = 1 → ln y = 0 → S = 0
        let s = two_phase_exponent(1.0, 1.0);
        assert!(s.abs() < 1e-9);
    }

    #[test]
    fn interval_branch_is_used_between_1_and_1_2() {
        // λ / H² = 1.1
        let h = (0.5_f64 / 1.1).sqrt();
        let s = two_phase_exponent(0.5, h);
        assert!((s - (2.2 * 1.1 - 1.2_f64).ln()).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn exponent_is_finite(lambda in 1e-6_f64..1.0, h in 1e-3_f64..1.0) {
            prop_assert!(two_phase_exponent(lambda, h).is_finite());
        }

        #[test]
        fn friction_factor_positive(re in 1.0_f64..1e8, rr in 0.0_f64..0.05) {
            let f = darcy_friction_factor(re, rr).unwrap();
            prop_assert!(f > 0.0 && f.is_finite());
        }
    }
}
