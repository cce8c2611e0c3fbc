//! Common pressure-gradient interface.

use crate::beggs_brill::BeggsBrill;
use crate::error::{FlowError, FlowResult};
use crate::geometry::PipeGeometry;
use crate::hagedorn_brown::HagedornBrown;
use crate::regime::FlowRegime;
use crate::state::FluidState;
use std::fmt;
use std::str::FromStr;

/// One evaluation of a gradient correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientResult {
    /// Total pressure gradient, psi/ft (positive = pressure rises with depth)
    pub pressure_gradient: f64,
    /// Friction part before the acceleration correction, psi/ft
    pub friction_gradient: f64,
    /// Hydrostatic part before the acceleration correction, psi/ft
    pub elevation_gradient: f64,
    /// In-situ liquid holdup
    pub holdup: f64,
    /// Beggs-Brill flow pattern; `None` for correlations without a regime map
    pub regime: Option<FlowRegime>,
    /// Two-phase (Beggs-Brill) or mixture (Hagedorn-Brown) friction factor
    pub friction_factor: f64,
    /// Slip mixture density, lbm/ft³
    pub mixture_density: f64,
    /// No-slip density, lbm/ft³
    pub no_slip_density: f64,
    /// No-slip (Beggs-Brill) or mixture (Hagedorn-Brown) Reynolds number
    pub reynolds: f64,
}

impl GradientResult {
    /// Liquid standing in the pipe: hydrostatic gradient only.
    pub fn static_column(liquid_density: f64, inclination_deg: f64) -> Self {
        let elevation = liquid_density * inclination_deg.to_radians().sin() / 144.0;
        Self {
            pressure_gradient: elevation,
            friction_gradient: 0.0,
            elevation_gradient: elevation,
            holdup: 1.0,
            regime: None,
            friction_factor: 0.0,
            mixture_density: liquid_density,
            no_slip_density: liquid_density,
            reynolds: 0.0,
        }
    }
}

/// Trait for models that compute a local pressure gradient.
///
/// Implementations are pure functions of geometry and flow state and must
/// report psi/ft so they are interchangeable in curve builders.
pub trait PressureGradient: Send + Sync {
    /// Model name for logging and identification.
    fn name(&self) -> &'static str;

    /// Pressure gradient at the given flow state.
    ///
    /// A state with zero mixture velocity may be rejected; use
    /// [`gradient_or_static`] to fall back to a static liquid column.
    fn gradient(&self, geometry: &PipeGeometry, state: &FluidState) -> FlowResult<GradientResult>;
}

/// Evaluate `model`, or return the static liquid column when nothing flows.
pub fn gradient_or_static<M: PressureGradient + ?Sized>(
    model: &M,
    geometry: &PipeGeometry,
    state: &FluidState,
) -> FlowResult<GradientResult> {
    if state.is_static() {
        geometry.validate()?;
        state.validate()?;
        return Ok(GradientResult::static_column(
            state.properties.liquid_density,
            geometry.inclination_deg,
        ));
    }
    model.gradient(geometry, state)
}

/// Multiphase gradient correlations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Correlation {
    BeggsBrill(BeggsBrill),
    HagedornBrown(HagedornBrown),
}

impl Correlation {
    pub const NAMES: [&'static str; 2] = ["beggs_brill", "hagedorn_brown"];
}

impl PressureGradient for Correlation {
    fn name(&self) -> &'static str {
        match self {
            Correlation::BeggsBrill(m) => m.name(),
            Correlation::HagedornBrown(m) => m.name(),
        }
    }

    fn gradient(&self, geometry: &PipeGeometry, state: &FluidState) -> FlowResult<GradientResult> {
        match self {
            Correlation::BeggsBrill(m) => m.gradient(geometry, state),
            Correlation::HagedornBrown(m) => m.gradient(geometry, state),
        }
    }
}

/// Lowercase, trim, and map `-` and spaces to `_`.
pub(crate) fn normalize_name(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

impl FromStr for Correlation {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "beggs_brill" | "bb" => Ok(Correlation::BeggsBrill(BeggsBrill::default())),
            "hagedorn_brown" | "hb" => Ok(Correlation::HagedornBrown(HagedornBrown::default())),
            _ => Err(FlowError::UnknownModel {
                name: s.to_string(),
                available: Self::NAMES.join(", "),
            }),
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FluidProperties;

    fn state(v_sl: f64, v_sg: f64) -> FluidState {
        let props = FluidProperties::new(55.0, 3.0, 1.0, 0.02).unwrap();
        FluidState::new(props, v_sl, v_sg).unwrap()
    }

    #[test]
    fn parses_names_and_aliases() {
        assert!(matches!("bb".parse::<Correlation>(), Ok(Correlation::BeggsBrill(_))));
        assert!(matches!(
            "Hagedorn-Brown".parse::<Correlation>(),
            Ok(Correlation::HagedornBrown(_))
        ));
        assert!(matches!(
            "duns_ros".parse::<Correlation>(),
            Err(FlowError::UnknownModel { .. })
        ));
    }

    #[test]
    fn static_state_gives_hydrostatic_column() {
        let geometry = PipeGeometry::vertical(2.992).unwrap();
        for model in [
            Correlation::BeggsBrill(BeggsBrill::default()),
            Correlation::HagedornBrown(HagedornBrown::default()),
        ] {
            let r = gradient_or_static(&model, &geometry, &state(0.0, 0.0)).unwrap();
            assert!((r.pressure_gradient - 55.0 / 144.0).abs() < 1e-12);
            assert_eq!(r.holdup, 1.0);
        }
    }

    #[test]
    fn both_correlations_report_psi_per_ft() {
        let geometry = PipeGeometry::vertical(2.992).unwrap();
        let s = state(2.0, 3.0);
        for model in [
            Correlation::BeggsBrill(BeggsBrill::default()),
            Correlation::HagedornBrown(HagedornBrown::default()),
        ] {
            let r = model.gradient(&geometry, &s).unwrap();
            // between gas and liquid static heads plus a modest friction term
            assert!(r.pressure_gradient > 3.0 / 144.0, "{}: {}", model, r.pressure_gradient);
            assert!(r.pressure_gradient < 1.0, "{}: {}", model, r.pressure_gradient);
        }
    }
}
