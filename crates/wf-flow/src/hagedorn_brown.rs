//! Simplified Hagedorn-Brown gradient.
//!
//! Holdup is the no-slip liquid fraction inflated by `k·√(v_sg/v_m)`. There is
//! no regime map and no acceleration term.

use crate::common::require_non_negative_velocity;
use crate::error::{FlowError, FlowResult};
use crate::friction::darcy_friction_factor;
use crate::geometry::PipeGeometry;
use crate::gradient::{GradientResult, PressureGradient};
use crate::state::FluidState;
use tracing::trace;
use wf_core::units::constants::{G_FT_S2, SQ_IN_PER_SQ_FT};
use wf_core::units::cp_to_lbm_per_ft_s;

/// Default holdup inflation factor.
pub const DEFAULT_HOLDUP_FACTOR: f64 = 0.15;

const MIN_HOLDUP: f64 = 1e-6;
const MAX_HOLDUP: f64 = 0.999_999;

/// Hagedorn-Brown holdup, clamped into `(0, 1)`.
///
/// With no flow the pipe is all liquid and the holdup is exactly 1.
pub fn hagedorn_brown_holdup(v_sl: f64, v_sg: f64, k: f64) -> FlowResult<f64> {
    let v_sl = require_non_negative_velocity(v_sl, "superficial liquid velocity")?;
    let v_sg = require_non_negative_velocity(v_sg, "superficial gas velocity")?;

    let v_m = v_sl + v_sg;
    if v_m <= 0.0 {
        return Ok(1.0);
    }

    let lambda = v_sl / v_m;
    let h = lambda * (1.0 + k * (v_sg / (v_m + 1e-12)).max(0.0).sqrt());
    Ok(h.max(lambda).clamp(MIN_HOLDUP, MAX_HOLDUP))
}

/// Simplified Hagedorn-Brown correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HagedornBrown {
    /// Holdup inflation factor `k`
    #[cfg_attr(feature = "serde", serde(default = "default_holdup_factor"))]
    pub holdup_factor: f64,
}

#[cfg(feature = "serde")]
fn default_holdup_factor() -> f64 {
    DEFAULT_HOLDUP_FACTOR
}

impl Default for HagedornBrown {
    fn default() -> Self {
        Self {
            holdup_factor: DEFAULT_HOLDUP_FACTOR,
        }
    }
}

impl HagedornBrown {
    pub fn new(holdup_factor: f64) -> FlowResult<Self> {
        if !(holdup_factor.is_finite() && holdup_factor >= 0.0) {
            return Err(FlowError::NonPhysical {
                what: "holdup factor",
                value: holdup_factor,
            });
        }
        Ok(Self { holdup_factor })
    }
}

impl PressureGradient for HagedornBrown {
    fn name(&self) -> &'static str {
        "hagedorn_brown"
    }

    fn gradient(&self, geometry: &PipeGeometry, state: &FluidState) -> FlowResult<GradientResult> {
        geometry.validate()?;
        let theta = geometry.inclination_deg;
        if !(-90.0..=90.0).contains(&theta) {
            return Err(FlowError::InvalidAngle {
                what: "inclination",
                value: theta,
            });
        }
        state.validate()?;

        let props = &state.properties;
        let v_m = state.mixture_velocity();
        if v_m <= 0.0 {
            return Ok(GradientResult::static_column(props.liquid_density, theta));
        }

        let d_ft = geometry.diameter_ft();
        let h = hagedorn_brown_holdup(state.v_sl, state.v_sg, self.holdup_factor)?;
        let lambda = state.v_sl / v_m;

        let rho_m = h * props.liquid_density + (1.0 - h) * props.gas_density;
        let rho_ns = lambda * props.liquid_density + (1.0 - lambda) * props.gas_density;
        let mu_mix = cp_to_lbm_per_ft_s(h * props.liquid_viscosity + (1.0 - h) * props.gas_viscosity);

        let re_m = rho_m * v_m * d_ft / mu_mix.max(1e-12);
        let f = darcy_friction_factor(re_m, geometry.relative_roughness())?;

        let friction = f * rho_m * v_m * v_m / (2.0 * G_FT_S2 * d_ft) / SQ_IN_PER_SQ_FT;
        let elevation = rho_m * geometry.sin_inclination() / SQ_IN_PER_SQ_FT;

        trace!(holdup = h, reynolds = re_m, dp_dz = friction + elevation, "hagedorn-brown gradient");

        Ok(GradientResult {
            pressure_gradient: friction + elevation,
            friction_gradient: friction,
            elevation_gradient: elevation,
            holdup: h,
            regime: None,
            friction_factor: f,
            mixture_density: rho_m,
            no_slip_density: rho_ns,
            reynolds: re_m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FluidProperties;
    use proptest::prelude::*;

    fn props() -> FluidProperties {
        FluidProperties::new(55.0, 3.0, 1.0, 0.02).unwrap()
    }

    #[test]
    fn holdup_exceeds_no_slip_with_gas() {
        let h = hagedorn_brown_holdup(2.0, 3.0, DEFAULT_HOLDUP_FACTOR).unwrap();
        let expected = 0.4 * (1.0 + 0.15 * (3.0_f64 / 5.0).sqrt());
        assert!((h - expected).abs() < 1e-9);
    }

    #[test]
    fn holdup_no_flow_is_one() {
        assert_eq!(hagedorn_brown_holdup(0.0, 0.0, 0.15).unwrap(), 1.0);
        assert!(hagedorn_brown_holdup(-1.0, 0.0, 0.15).is_err());
    }

    #[test]
    fn static_column_when_idle() {
        let geometry = PipeGeometry::vertical(2.992).unwrap();
        let idle = FluidState::new(props(), 0.0, 0.0).unwrap();
        let r = HagedornBrown::default().gradient(&geometry, &idle).unwrap();
        assert!((r.pressure_gradient - 55.0 / 144.0).abs() < 1e-12);
        assert_eq!(r.reynolds, 0.0);
        assert_eq!(r.friction_factor, 0.0);
    }

    #[test]
    fn angle_outside_quadrant_rejected() {
        let geometry = PipeGeometry::new(2.992, 0.0006, 120.0).unwrap();
        let state = FluidState::new(props(), 2.0, 3.0).unwrap();
        assert!(matches!(
            HagedornBrown::default().gradient(&geometry, &state),
            Err(FlowError::InvalidAngle { .. })
        ));
    }

    #[test]
    fn no_regime_is_reported() {
        let geometry = PipeGeometry::vertical(2.992).unwrap();
        let state = FluidState::new(props(), 2.0, 3.0).unwrap();
        let r = HagedornBrown::default().gradient(&geometry, &state).unwrap();
        assert_eq!(r.regime, None);
        assert!(r.friction_gradient > 0.0);
    }

    proptest! {
        #[test]
        fn holdup_strictly_inside_unit_interval(
            v_sl in 0.0_f64..20.0,
            v_sg in 0.001_f64..50.0,
            k in 0.0_f64..1.0,
        ) {
            let h = hagedorn_brown_holdup(v_sl, v_sg, k).unwrap();
            prop_assert!(h > 0.0 && h < 1.0);
        }
    }
}
