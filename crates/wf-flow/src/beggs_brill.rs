//! Beggs-Brill two-phase pressure gradient.

use crate::error::{FlowError, FlowResult};
use crate::friction::{darcy_friction_factor, two_phase_exponent};
use crate::geometry::PipeGeometry;
use crate::gradient::{GradientResult, PressureGradient};
use crate::holdup::beggs_brill_holdup;
use crate::state::FluidState;
use tracing::trace;
use wf_core::units::constants::{GC, SQ_IN_PER_SQ_FT};
use wf_core::units::cp_to_lbm_per_ft_s;

/// Upper bound on the kinetic-energy term E_k.
const MAX_ACCELERATION_TERM: f64 = 0.95;

/// Beggs-Brill correlation.
///
/// The acceleration term `E_k = ρ_m·v_m·v_sg / (g_c·p)` is applied only when
/// an absolute pressure is configured; it is evaluated once per call, so a
/// curve builder using it treats the whole pipe as one segment at that
/// pressure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeggsBrill {
    /// psia
    #[cfg_attr(feature = "serde", serde(default))]
    pub absolute_pressure: Option<f64>,
}

impl BeggsBrill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_absolute_pressure(p_psia: f64) -> FlowResult<Self> {
        let model = Self {
            absolute_pressure: Some(p_psia),
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> FlowResult<()> {
        match self.absolute_pressure {
            Some(p) if !(p.is_finite() && p > 0.0) => Err(FlowError::NonPhysical {
                what: "absolute pressure",
                value: p,
            }),
            _ => Ok(()),
        }
    }

    fn acceleration_term(&self, mixture_density: f64, v_m: f64, v_sg: f64) -> f64 {
        match self.absolute_pressure {
            Some(p) => (mixture_density * v_m * v_sg / (GC * p)).clamp(0.0, MAX_ACCELERATION_TERM),
            None => 0.0,
        }
    }
}

impl PressureGradient for BeggsBrill {
    fn name(&self) -> &'static str {
        "beggs_brill"
    }

    fn gradient(&self, geometry: &PipeGeometry, state: &FluidState) -> FlowResult<GradientResult> {
        geometry.validate()?;
        state.validate()?;
        self.validate()?;

        let v_m = state.mixture_velocity();
        if v_m <= 0.0 {
            return Err(FlowError::InvalidVelocity {
                what: "mixture velocity",
                value: v_m,
            });
        }

        let props = &state.properties;
        let d_ft = geometry.diameter_ft();

        let holdup = beggs_brill_holdup(
            state.v_sl,
            state.v_sg,
            d_ft,
            geometry.inclination_deg,
            props.liquid_density,
            props.surface_tension_or_default(),
        )?;
        let h = holdup.value;

        // unclamped λ for the no-slip mixture
        let c_l = state.v_sl / v_m;

        let rho_ns = props.liquid_density * c_l + props.gas_density * (1.0 - c_l);
        let rho_m = props.liquid_density * h + props.gas_density * (1.0 - h);

        let mu_ns = cp_to_lbm_per_ft_s(props.liquid_viscosity) * c_l
            + cp_to_lbm_per_ft_s(props.gas_viscosity) * (1.0 - c_l);
        let re_ns = rho_ns * v_m * d_ft / mu_ns;

        let f_ns = darcy_friction_factor(re_ns, geometry.relative_roughness())?;
        let f_tp = f_ns * two_phase_exponent(c_l, h).exp();

        let elevation = rho_m * geometry.sin_inclination() / SQ_IN_PER_SQ_FT;
        let friction = f_tp * rho_ns * v_m * v_m / (2.0 * GC * d_ft) / SQ_IN_PER_SQ_FT;
        let ek = self.acceleration_term(rho_m, v_m, state.v_sg);

        let total = (friction + elevation) / (1.0 - ek);

        trace!(
            regime = %holdup.regime,
            holdup = h,
            froude = holdup.froude,
            dp_dz = total,
            "beggs-brill gradient"
        );

        Ok(GradientResult {
            pressure_gradient: total,
            friction_gradient: friction,
            elevation_gradient: elevation,
            holdup: h,
            regime: Some(holdup.regime),
            friction_factor: f_tp,
            mixture_density: rho_m,
            no_slip_density: rho_ns,
            reynolds: re_ns,
        })
    }
}
