//! Outflow (vertical lift performance) curves.
//!
//! Each rate point is evaluated independently: the gradient at that rate is
//! taken as constant over the whole well length. Points are evaluated in
//! parallel and returned in grid order.

use crate::beggs_brill::BeggsBrill;
use crate::error::{FlowError, FlowResult};
use crate::geometry::PipeGeometry;
use crate::gradient::{PressureGradient, normalize_name};
use crate::hagedorn_brown::HagedornBrown;
use crate::state::{FluidProperties, FluidState};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use wf_core::Curve;
use wf_core::units::constants::{G_FT_S2, SQ_IN_PER_SQ_FT};
use wf_core::units::{mscf_per_day_to_ft3_per_s, stb_per_day_to_ft3_per_s};
use wf_fluids::BlackOilFluid;

/// Default Darcy friction factor for the single-phase curve.
pub const DEFAULT_DARCY_FRICTION: f64 = 0.02;

/// Default PVT reference pressure for the black-oil model, psia.
pub const DEFAULT_REFERENCE_PRESSURE: f64 = 2000.0;

const MODEL_NAMES: [&str; 4] = ["darcy", "beggs_brill", "hagedorn_brown", "beggs_brill_blackoil"];

/// Names accepted by [`OutflowModelKind::from_str`] (canonical spellings).
pub fn available_models() -> &'static [&'static str] {
    &MODEL_NAMES
}

/// Gas produced alongside each liquid rate, MSCF/d.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GasRate {
    #[default]
    None,
    Constant(f64),
    /// One gas rate per rate-grid point.
    PerPoint(Vec<f64>),
}

impl GasRate {
    fn validate(&self, points: usize) -> FlowResult<()> {
        let check = |q: f64| {
            if q.is_finite() && q >= 0.0 {
                Ok(())
            } else {
                Err(FlowError::NonPhysical {
                    what: "gas rate",
                    value: q,
                })
            }
        };
        match self {
            GasRate::None => Ok(()),
            GasRate::Constant(q) => check(*q),
            GasRate::PerPoint(rates) => {
                if rates.len() != points {
                    return Err(FlowError::InvalidArg {
                        what: "per-point gas rates must match the liquid rate grid length",
                    });
                }
                rates.iter().try_for_each(|&q| check(q))
            }
        }
    }

    /// Gas rate at grid index `i`, MSCF/d.
    pub fn at(&self, i: usize) -> f64 {
        match self {
            GasRate::None => 0.0,
            GasRate::Constant(q) => *q,
            GasRate::PerPoint(rates) => rates.get(i).copied().unwrap_or(0.0),
        }
    }
}

/// A producing well seen from the outflow side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Well {
    /// Tubing length from perforations to wellhead, ft
    pub length: f64,
    pub geometry: PipeGeometry,
    pub fluid: FluidProperties,
    /// psi
    pub wellhead_pressure: f64,
    pub gas: GasRate,
}

impl Well {
    /// Vertical well with default roughness, no gas, zero wellhead pressure.
    pub fn vertical(length: f64, diameter_in: f64, fluid: FluidProperties) -> FlowResult<Self> {
        let well = Self {
            length,
            geometry: PipeGeometry::vertical(diameter_in)?,
            fluid,
            wellhead_pressure: 0.0,
            gas: GasRate::None,
        };
        well.validate()?;
        Ok(well)
    }

    pub fn with_wellhead_pressure(mut self, p_wh: f64) -> FlowResult<Self> {
        self.wellhead_pressure = p_wh;
        self.validate()?;
        Ok(self)
    }

    pub fn with_gas(mut self, gas: GasRate) -> Self {
        self.gas = gas;
        self
    }

    pub fn validate(&self) -> FlowResult<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(FlowError::InvalidGeometry {
                what: "well length",
                value: self.length,
            });
        }
        self.geometry.validate()?;
        self.fluid.validate()?;
        if !(self.wellhead_pressure.is_finite() && self.wellhead_pressure >= 0.0) {
            return Err(FlowError::NonPhysical {
                what: "wellhead pressure",
                value: self.wellhead_pressure,
            });
        }
        Ok(())
    }

    /// Wellhead pressure plus a static liquid column.
    fn static_pressure(&self, fluid: &FluidProperties) -> f64 {
        self.wellhead_pressure + fluid.static_gradient(self.geometry.sin_inclination()) * self.length
    }
}

/// Outflow model names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutflowModelKind {
    Darcy,
    BeggsBrill,
    HagedornBrown,
    BeggsBrillBlackOil,
}

impl OutflowModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutflowModelKind::Darcy => "darcy",
            OutflowModelKind::BeggsBrill => "beggs_brill",
            OutflowModelKind::HagedornBrown => "hagedorn_brown",
            OutflowModelKind::BeggsBrillBlackOil => "beggs_brill_blackoil",
        }
    }
}

impl FromStr for OutflowModelKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "darcy" | "darcy_weisbach" => Ok(OutflowModelKind::Darcy),
            "beggs_brill" | "bb" => Ok(OutflowModelKind::BeggsBrill),
            "hagedorn_brown" | "hb" => Ok(OutflowModelKind::HagedornBrown),
            "beggs_brill_blackoil" | "bb_blackoil" | "beggsbrill_blackoil" => {
                Ok(OutflowModelKind::BeggsBrillBlackOil)
            }
            _ => Err(FlowError::UnknownModel {
                name: s.to_string(),
                available: available_models().join(", "),
            }),
        }
    }
}

impl fmt::Display for OutflowModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outflow model with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum OutflowModel {
    /// Single-phase liquid with a fixed Darcy friction factor.
    Darcy { friction_factor: f64 },
    BeggsBrill(BeggsBrill),
    HagedornBrown(HagedornBrown),
    /// Beggs-Brill with phase densities from black-oil PVT at a reference
    /// pressure (psia).
    BeggsBrillBlackOil {
        correlation: BeggsBrill,
        pvt: BlackOilFluid,
        reference_pressure: f64,
    },
}

impl Default for OutflowModel {
    fn default() -> Self {
        OutflowModel::Darcy {
            friction_factor: DEFAULT_DARCY_FRICTION,
        }
    }
}

impl OutflowModel {
    pub fn black_oil(pvt: BlackOilFluid) -> Self {
        OutflowModel::BeggsBrillBlackOil {
            correlation: BeggsBrill::default(),
            pvt,
            reference_pressure: DEFAULT_REFERENCE_PRESSURE,
        }
    }

    pub fn kind(&self) -> OutflowModelKind {
        match self {
            OutflowModel::Darcy { .. } => OutflowModelKind::Darcy,
            OutflowModel::BeggsBrill(_) => OutflowModelKind::BeggsBrill,
            OutflowModel::HagedornBrown(_) => OutflowModelKind::HagedornBrown,
            OutflowModel::BeggsBrillBlackOil { .. } => OutflowModelKind::BeggsBrillBlackOil,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn validate(&self) -> FlowResult<()> {
        match self {
            OutflowModel::Darcy { friction_factor } => {
                if !(friction_factor.is_finite() && *friction_factor > 0.0) {
                    return Err(FlowError::NonPhysical {
                        what: "Darcy friction factor",
                        value: *friction_factor,
                    });
                }
            }
            OutflowModel::BeggsBrillBlackOil {
                reference_pressure, ..
            } => {
                if !(reference_pressure.is_finite() && *reference_pressure > 0.0) {
                    return Err(FlowError::NonPhysical {
                        what: "PVT reference pressure",
                        value: *reference_pressure,
                    });
                }
            }
            OutflowModel::BeggsBrill(_) | OutflowModel::HagedornBrown(_) => {}
        }
        Ok(())
    }

    /// Fluid properties the model actually uses.
    fn effective_fluid(&self, fluid: &FluidProperties) -> FlowResult<FluidProperties> {
        match self {
            OutflowModel::BeggsBrillBlackOil {
                pvt,
                reference_pressure,
                ..
            } => {
                let pair = pvt.densities(*reference_pressure)?;
                debug!(
                    p_ref = reference_pressure,
                    rho_l = pair.liquid,
                    rho_g = pair.gas,
                    bo = pair.bo,
                    z = pair.z,
                    "black-oil densities"
                );
                fluid.with_densities(pair.liquid, pair.gas)
            }
            _ => Ok(*fluid),
        }
    }

    /// Bottomhole flowing pressure (psi) at one liquid rate (STB/d) and gas
    /// rate (MSCF/d).
    pub fn pressure_at(&self, liquid_rate: f64, gas_rate: f64, well: &Well) -> FlowResult<f64> {
        self.validate()?;
        well.validate()?;
        check_rate(liquid_rate, "liquid rate")?;
        check_rate(gas_rate, "gas rate")?;
        let fluid = self.effective_fluid(&well.fluid)?;
        self.point_pressure(liquid_rate, gas_rate, well, &fluid)
    }

    fn point_pressure(
        &self,
        liquid_rate: f64,
        gas_rate: f64,
        well: &Well,
        fluid: &FluidProperties,
    ) -> FlowResult<f64> {
        match self {
            OutflowModel::Darcy { friction_factor } => {
                darcy_pressure(*friction_factor, liquid_rate, well, fluid)
            }
            OutflowModel::BeggsBrill(m) | OutflowModel::BeggsBrillBlackOil { correlation: m, .. } => {
                segment_pressure(m, liquid_rate, gas_rate, well, fluid)
            }
            OutflowModel::HagedornBrown(m) => {
                segment_pressure(m, liquid_rate, gas_rate, well, fluid)
            }
        }
    }

    /// Bottomhole pressures on a liquid-rate grid (STB/d), in grid order.
    pub fn bottomhole_pressures(&self, rates: &[f64], well: &Well) -> FlowResult<Vec<f64>> {
        self.validate()?;
        well.validate()?;
        for &q in rates {
            check_rate(q, "liquid rate")?;
        }
        well.gas.validate(rates.len())?;

        let fluid = self.effective_fluid(&well.fluid)?;

        let pressures = rates
            .par_iter()
            .enumerate()
            .map(|(i, &q)| self.point_pressure(q, well.gas.at(i), well, &fluid))
            .collect::<FlowResult<Vec<f64>>>()?;

        debug!(
            model = self.name(),
            points = rates.len(),
            p_first = ?pressures.first(),
            p_last = ?pressures.last(),
            "outflow curve"
        );

        Ok(pressures)
    }

    /// Outflow curve on a strictly increasing rate grid.
    pub fn curve(&self, rates: &[f64], well: &Well) -> FlowResult<Curve> {
        let pressures = self.bottomhole_pressures(rates, well)?;
        Ok(Curve::from_pairs(rates, &pressures)?)
    }
}

fn check_rate(q: f64, what: &'static str) -> FlowResult<()> {
    if q.is_finite() && q >= 0.0 {
        Ok(())
    } else {
        Err(FlowError::NonPhysical { what, value: q })
    }
}

/// `p_wh + f(L/d)(ρ/144)(v²/2g) + (ρ/144)·L·sinθ` with v from the liquid rate.
fn darcy_pressure(
    friction_factor: f64,
    liquid_rate: f64,
    well: &Well,
    fluid: &FluidProperties,
) -> FlowResult<f64> {
    let g = &well.geometry;
    let v = g.superficial_velocity(stb_per_day_to_ft3_per_s(liquid_rate))?;
    let rho = fluid.liquid_density;
    let friction = friction_factor * (well.length / g.diameter_ft()) * (rho / SQ_IN_PER_SQ_FT)
        * (v * v / (2.0 * G_FT_S2));
    Ok(well.static_pressure(fluid) + friction)
}

fn segment_pressure<M: PressureGradient>(
    model: &M,
    liquid_rate: f64,
    gas_rate: f64,
    well: &Well,
    fluid: &FluidProperties,
) -> FlowResult<f64> {
    let ql = stb_per_day_to_ft3_per_s(liquid_rate);
    let qg = mscf_per_day_to_ft3_per_s(gas_rate);
    if ql <= 0.0 && qg <= 0.0 {
        return Ok(well.static_pressure(fluid));
    }

    let g = &well.geometry;
    let state = FluidState::new(*fluid, g.superficial_velocity(ql)?, g.superficial_velocity(qg)?)?;
    let result = model.gradient(g, &state)?;
    Ok(well.wellhead_pressure + result.pressure_gradient * well.length)
}
