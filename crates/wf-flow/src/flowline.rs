//! Surface flowline pressure drop.

use crate::beggs_brill::BeggsBrill;
use crate::common::require_positive_geometry;
use crate::error::{FlowError, FlowResult};
use crate::geometry::{DEFAULT_ROUGHNESS_IN, PipeGeometry};
use crate::gradient::{PressureGradient, normalize_name};
use crate::outflow::DEFAULT_DARCY_FRICTION;
use crate::state::{FluidProperties, FluidState};
use std::fmt;
use std::str::FromStr;
use wf_core::units::constants::{G_FT_S2, SQ_IN_PER_SQ_FT};
use wf_core::units::{mscf_per_day_to_ft3_per_s, stb_per_day_to_ft3_per_s};

const FLOWLINE_MODEL_NAMES: [&str; 2] = ["darcy", "beggs_brill"];

pub fn available_flowline_models() -> &'static [&'static str] {
    &FLOWLINE_MODEL_NAMES
}

/// A flowline between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flowline {
    /// ft
    pub length: f64,
    /// in
    pub diameter_in: f64,
    /// in
    pub roughness_in: f64,
    /// Outlet minus inlet elevation, ft
    pub elevation_change: f64,
}

impl Flowline {
    pub fn new(length: f64, diameter_in: f64, elevation_change: f64) -> FlowResult<Self> {
        let line = Self {
            length,
            diameter_in,
            roughness_in: DEFAULT_ROUGHNESS_IN,
            elevation_change,
        };
        line.validate()?;
        Ok(line)
    }

    pub fn validate(&self) -> FlowResult<()> {
        require_positive_geometry(self.length, "flowline length")?;
        require_positive_geometry(self.diameter_in, "flowline diameter")?;
        if !self.elevation_change.is_finite() {
            return Err(FlowError::NonFinite {
                what: "elevation change",
                value: self.elevation_change,
            });
        }
        Ok(())
    }

    /// Inclination implied by the elevation change, degrees.
    pub fn inclination_deg(&self) -> f64 {
        let rise = self.elevation_change.clamp(-self.length, self.length);
        (rise / self.length).asin().to_degrees()
    }

    fn geometry(&self) -> FlowResult<PipeGeometry> {
        PipeGeometry::new(self.diameter_in, self.roughness_in, self.inclination_deg())
    }
}

/// Flowline pressure-drop model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum FlowlineModel {
    Darcy { friction_factor: f64 },
    BeggsBrill(BeggsBrill),
}

impl Default for FlowlineModel {
    fn default() -> Self {
        FlowlineModel::Darcy {
            friction_factor: DEFAULT_DARCY_FRICTION,
        }
    }
}

impl FlowlineModel {
    pub fn name(&self) -> &'static str {
        match self {
            FlowlineModel::Darcy { .. } => "darcy",
            FlowlineModel::BeggsBrill(_) => "beggs_brill",
        }
    }

    /// Pressure drop (psi) across `line` for a liquid rate (STB/d) and gas
    /// rate (MSCF/d). Downhill lines may give a negative drop.
    pub fn pressure_drop(
        &self,
        line: &Flowline,
        liquid_rate: f64,
        gas_rate: f64,
        fluid: &FluidProperties,
    ) -> FlowResult<f64> {
        line.validate()?;
        fluid.validate()?;
        for (q, what) in [(liquid_rate, "liquid rate"), (gas_rate, "gas rate")] {
            if !(q.is_finite() && q >= 0.0) {
                return Err(FlowError::NonPhysical { what, value: q });
            }
        }

        let geometry = line.geometry()?;
        let rho = fluid.liquid_density;
        let elevation = rho / SQ_IN_PER_SQ_FT * line.elevation_change;
        let ql = stb_per_day_to_ft3_per_s(liquid_rate);

        match self {
            FlowlineModel::Darcy { friction_factor } => {
                if !(friction_factor.is_finite() && *friction_factor > 0.0) {
                    return Err(FlowError::NonPhysical {
                        what: "Darcy friction factor",
                        value: *friction_factor,
                    });
                }
                let v = geometry.superficial_velocity(ql)?;
                let friction = friction_factor
                    * (line.length / geometry.diameter_ft())
                    * (rho / SQ_IN_PER_SQ_FT)
                    * (v * v / (2.0 * G_FT_S2));
                Ok(friction + elevation)
            }
            FlowlineModel::BeggsBrill(model) => {
                let qg = mscf_per_day_to_ft3_per_s(gas_rate);
                if ql <= 0.0 && qg <= 0.0 {
                    return Ok(elevation);
                }
                let state = FluidState::new(
                    *fluid,
                    geometry.superficial_velocity(ql)?,
                    geometry.superficial_velocity(qg)?,
                )?;
                let r = model.gradient(&geometry, &state)?;
                Ok(r.pressure_gradient * line.length)
            }
        }
    }
}

impl FromStr for FlowlineModel {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "darcy" | "darcy_weisbach" => Ok(FlowlineModel::default()),
            "beggs_brill" | "bb" => Ok(FlowlineModel::BeggsBrill(BeggsBrill::default())),
            _ => Err(FlowError::UnknownModel {
                name: s.to_string(),
                available: available_flowline_models().join(", "),
            }),
        }
    }
}

impl fmt::Display for FlowlineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oil() -> FluidProperties {
        FluidProperties::liquid(55.0, 1.0).unwrap()
    }

    fn line(elev: f64) -> Flowline {
        Flowline::new(5000.0, 6.0, elev).unwrap()
    }

    #[test]
    fn darcy_reference_value() {
        let dp = FlowlineModel::default()
            .pressure_drop(&line(100.0), 1000.0, 0.0, &oil())
            .unwrap();
        let q = 1000.0 * 5.615 / 86400.0;
        let d = 0.5;
        let v = q / (std::f64::consts::PI * d * d / 4.0);
        let expected = 0.02 * (5000.0 / d) * (55.0 / 144.0) * (v * v / (2.0 * 32.174))
            + 55.0 / 144.0 * 100.0;
        assert!((dp - expected).abs() < 1e-9);
    }

    #[test]
    fn darcy_positive_and_increasing() {
        let m = FlowlineModel::default();
        let low = m.pressure_drop(&line(0.0), 500.0, 0.0, &oil()).unwrap();
        let high = m.pressure_drop(&line(0.0), 5000.0, 0.0, &oil()).unwrap();
        assert!(low > 0.0);
        assert!(high > low);
    }

    #[test]
    fn inclination_clamped_to_vertical() {
        assert!((line(10_000.0).inclination_deg() - 90.0).abs() < 1e-12);
        assert!((line(-10_000.0).inclination_deg() + 90.0).abs() < 1e-12);
        assert_eq!(line(0.0).inclination_deg(), 0.0);
    }

    #[test]
    fn beggs_brill_zero_flow_is_hydrostatic() {
        let m: FlowlineModel = "beggs_brill".parse().unwrap();
        let dp = m.pressure_drop(&line(200.0), 0.0, 0.0, &oil()).unwrap();
        assert!((dp - 55.0 / 144.0 * 200.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_model() {
        assert!(matches!(
            "mukherjee".parse::<FlowlineModel>(),
            Err(FlowError::UnknownModel { .. })
        ));
    }
}
